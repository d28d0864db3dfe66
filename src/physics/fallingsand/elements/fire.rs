use bevy::log::error;
use bevy::math::{IVec2, Vec2};
use bevy::render::color::Color;

use super::element::{Behavior, Intent, ParticleType};
use crate::physics::fallingsand::data::particle::Particle;
use crate::physics::fallingsand::data::simulation::Simulation;
use crate::physics::fallingsand::util::functions::{jitter, scale_color};
use crate::physics::fallingsand::util::vectors::NEIGHBORS;

/// Burns for a single tick, setting flammable neighbors alight
pub static FIRE: Behavior = Behavior {
    kind: ParticleType::Fire,
    name: "Fire",
    description: "Ignites flammable neighbors, then burns out into smoke.",
    weight: 3,
    color: Color::rgb(1.0, 0.45, 0.1),
    gravity: -Behavior::DEFAULT_GRAVITY,
    update: fire_process,
    render: render_flicker,
    ..Behavior::BASE
};

/// Spread to flammable neighbors, then turn into smoke in place
pub fn fire_process(
    _behavior: &Behavior,
    particle: &mut Particle,
    _id: u32,
    pos: IVec2,
    sim: &mut Simulation,
) -> Intent {
    for neighbor in NEIGHBORS.map(|dir| pos + dir) {
        if sim.behavior_at(neighbor).is_some_and(|b| b.flammable) {
            // Newly lit cells wait for the next tick
            if let Err(err) = sim.transform(neighbor, ParticleType::Fire) {
                error!("Fire at {} could not ignite {}: {}", pos, neighbor, err);
            }
        }
    }
    particle.kind = ParticleType::Smoke;
    particle.velocity = Vec2::ZERO;
    Intent::Stay
}

pub fn render_flicker(behavior: &Behavior, particle: &Particle) -> Color {
    scale_color(behavior.color, 1.0 + 0.2 * jitter(particle.id))
}
