use bevy::render::color::Color;

use super::element::{Behavior, ParticleType};
use super::movement::solid::solid_process;
use crate::physics::fallingsand::data::particle::Particle;
use crate::physics::fallingsand::util::functions::{jitter, scale_color};

/// Falls and piles up
pub static SAND: Behavior = Behavior {
    kind: ParticleType::Sand,
    name: "Sand",
    description: "Falls and piles up, sinks through lighter liquids.",
    weight: 10,
    color: Color::rgb(0.76, 0.70, 0.50),
    update: solid_process,
    render: render_grain,
    ..Behavior::BASE
};

/// Every grain gets its own shade
pub fn render_grain(behavior: &Behavior, particle: &Particle) -> Color {
    scale_color(behavior.color, 1.0 + 0.08 * jitter(particle.id))
}
