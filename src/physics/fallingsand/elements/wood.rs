use bevy::render::color::Color;

use super::element::{Behavior, ParticleType};

/// A static fuel
pub static WOOD: Behavior = Behavior {
    kind: ParticleType::Wood,
    name: "Wood",
    description: "Stays in place and burns.",
    weight: 200,
    color: Color::rgb(0.45, 0.3, 0.15),
    gravity: 0.0,
    flammable: true,
    ..Behavior::BASE
};
