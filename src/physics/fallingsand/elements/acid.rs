use bevy::log::error;
use bevy::math::IVec2;
use bevy::render::color::Color;

use super::element::{Behavior, Intent, MovementProperty, ParticleType};
use super::movement::fluid::fluid_process;
use crate::physics::fallingsand::data::particle::Particle;
use crate::physics::fallingsand::data::simulation::Simulation;
use crate::physics::fallingsand::util::vectors::DOWN;

/// A liquid that eats through what it lands on
pub static ACID: Behavior = Behavior {
    kind: ParticleType::Acid,
    name: "Acid",
    description: "Dissolves solid particles below it, and itself with them.",
    weight: 6,
    color: Color::rgb(0.4, 0.95, 0.2),
    movement: MovementProperty::Spread,
    update: acid_process,
    ..Behavior::BASE
};

/// Whether acid eats through a kind
pub fn dissolves(target: &Behavior) -> bool {
    target.movement() == MovementProperty::None
        && !matches!(
            target.kind,
            ParticleType::Wall | ParticleType::Spawner | ParticleType::Void | ParticleType::Acid
        )
}

/// Dissolve the particle below, consuming the acid, otherwise flow like a liquid
pub fn acid_process(
    behavior: &Behavior,
    particle: &mut Particle,
    id: u32,
    pos: IVec2,
    sim: &mut Simulation,
) -> Intent {
    let below = pos + DOWN;
    if sim.behavior_at(below).is_some_and(dissolves) {
        match sim.delete(below) {
            Ok(_) => return Intent::Remove,
            Err(err) => error!("Acid at {} failed to dissolve {}: {}", pos, below, err),
        }
    }
    fluid_process(behavior, particle, id, pos, sim)
}
