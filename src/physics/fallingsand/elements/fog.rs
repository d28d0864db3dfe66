use bevy::render::color::Color;

use super::element::{Behavior, MovementProperty, ParticleType};
use super::movement::fluid::fluid_process;

/// Drifts upward slowly
pub static FOG: Behavior = Behavior {
    kind: ParticleType::Fog,
    name: "Fog",
    description: "A slow rising mist.",
    weight: 2,
    color: Color::rgba(0.85, 0.85, 0.9, 0.5),
    gravity: -0.02,
    movement: MovementProperty::Spread,
    update: fluid_process,
    ..Behavior::BASE
};
