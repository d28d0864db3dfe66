use bevy::render::color::Color;

use super::element::{Behavior, MovementProperty, ParticleType};
use super::movement::fluid::fluid_process;
use crate::physics::fallingsand::data::particle::Particle;
use crate::physics::fallingsand::util::functions::scale_color;

/// Flows and levels out
pub static WATER: Behavior = Behavior {
    kind: ParticleType::Water,
    name: "Water",
    description: "Flows sideways and fills containers.",
    weight: 5,
    color: Color::rgb(0.1, 0.3, 0.9),
    movement: MovementProperty::Spread,
    update: fluid_process,
    render: render_splash,
    ..Behavior::BASE
};

/// Falling water is lighter, resting water keeps its base color
pub fn render_splash(behavior: &Behavior, particle: &Particle) -> Color {
    let factor = 1.0 + (0.05 * particle.velocity.y.abs()).min(0.3);
    scale_color(behavior.color, factor)
}
