use bevy::log::error;
use bevy::math::IVec2;
use bevy::render::color::Color;

use super::element::{Behavior, Intent, ParticleType};
use crate::physics::fallingsand::data::particle::Particle;
use crate::physics::fallingsand::data::simulation::Simulation;
use crate::physics::fallingsand::util::vectors::{DOWN, UP};

/// Copies whatever is dropped on it into the cell below
pub static SPAWNER: Behavior = Behavior {
    kind: ParticleType::Spawner,
    name: "Spawner",
    description: "Emits a copy of the particle resting on top of it.",
    weight: 255,
    color: Color::rgb(0.9, 0.8, 0.2),
    gravity: 0.0,
    update: spawner_process,
    ..Behavior::BASE
};

/// Clone the kind above into the empty cell below, static kinds are never cloned
pub fn spawner_process(
    _behavior: &Behavior,
    _particle: &mut Particle,
    _id: u32,
    pos: IVec2,
    sim: &mut Simulation,
) -> Intent {
    let Some(source) = sim.behavior_at(pos + UP) else {
        return Intent::Stay;
    };
    let below = pos + DOWN;
    if source.is_static() || !sim.get(below).is_empty() {
        return Intent::Stay;
    }
    if let Err(err) = sim.spawn(below, source.kind) {
        error!("Spawner at {} failed to emit {}: {}", pos, source.kind, err);
    }
    Intent::Stay
}
