use bevy::render::color::Color;

use super::element::{Behavior, MovementProperty, ParticleType};
use super::movement::fluid::fluid_process;

/// A flammable liquid lighter than water
pub static OIL: Behavior = Behavior {
    kind: ParticleType::Oil,
    name: "Oil",
    description: "Floats on water and burns.",
    weight: 4,
    color: Color::rgb(0.25, 0.2, 0.1),
    movement: MovementProperty::Spread,
    flammable: true,
    update: fluid_process,
    ..Behavior::BASE
};
