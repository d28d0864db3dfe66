use bevy::render::color::Color;

use super::element::{Behavior, MovementProperty, ParticleType};
use super::movement::fluid::fluid_process;

/// What fire leaves behind
pub static SMOKE: Behavior = Behavior {
    kind: ParticleType::Smoke,
    name: "Smoke",
    description: "Rises and drifts.",
    weight: 2,
    color: Color::rgb(0.3, 0.3, 0.3),
    gravity: -Behavior::DEFAULT_GRAVITY,
    movement: MovementProperty::Spread,
    update: fluid_process,
    ..Behavior::BASE
};
