//! Movement of particles in the world.
//! Useful for common or default behaviors of particles in the world.
#![warn(missing_docs)]

use bevy::math::IVec2;

use crate::physics::fallingsand::data::particle::Particle;
use crate::physics::fallingsand::data::simulation::{Resolution, Simulation};
use crate::physics::fallingsand::util::functions::modulo;
use crate::physics::fallingsand::util::vectors::{LEFT, RIGHT};

use super::element::{Behavior, MovementProperty};

/// The movement of fluids
pub mod fluid;
/// The movement of solids
pub mod solid;

/// Adds one tick of gravity to the particle's velocity, capped at terminal velocity.
/// Returns how many cells the particle may travel this tick.
pub fn accelerate(behavior: &Behavior, particle: &mut Particle, sim: &Simulation) -> usize {
    let config = sim.config();
    particle.velocity.y = (particle.velocity.y + behavior.gravity * config.gravity)
        .clamp(-config.max_fall_speed, config.max_fall_speed);
    1 + particle.velocity.y.abs().floor() as usize
}

/// Walk along the fall direction as far as the velocity allows.
/// An occupant that gives way is only taken on the first step,
/// otherwise the particle stops in the last empty cell.
pub fn probe_fall(
    behavior: &Behavior,
    particle: &mut Particle,
    pos: IVec2,
    sim: &Simulation,
) -> Option<IVec2> {
    let dir = behavior.fall_direction()?;
    let steps = accelerate(behavior, particle, sim);
    let mut last_empty = None;
    for step in 1..=steps as i32 {
        let next = pos + dir * step;
        match sim.resolve(behavior, pos, next) {
            Resolution::Move => last_empty = Some(next),
            Resolution::Swap if step == 1 => return Some(next),
            _ => break,
        }
    }
    last_empty
}

/// Whether the particle in the way still has its turn this tick and could get out of it.
/// Rows are visited top to bottom, so a particle above waits for the one below.
pub fn blocker_will_move(behavior: &Behavior, pos: IVec2, sim: &Simulation) -> bool {
    let Some(dir) = behavior.fall_direction() else {
        return false;
    };
    let at = pos + dir;
    let Some(blocker) = sim.get(at).particle() else {
        return false;
    };
    if blocker.last_processed >= sim.tick() {
        return false;
    }
    let other = sim.behaviors().behavior(blocker.kind);
    let Some(other_dir) = other.fall_direction() else {
        return false;
    };
    if sim.resolve(other, at, at + other_dir) != Resolution::Block {
        return true;
    }
    other.movement() == MovementProperty::Spread
        && [LEFT, RIGHT]
            .into_iter()
            .any(|side| sim.resolve(other, at, at + side) != Resolution::Block)
}

/// The order sideways moves are tried in.
/// A particle keeps flowing the way it last went, otherwise the side
/// alternates with the tick and the column so piles stay symmetric.
pub fn lateral_order(particle: &Particle, pos: IVec2, tick: u64) -> [IVec2; 2] {
    if particle.velocity.x > 0.0 {
        [RIGHT, LEFT]
    } else if particle.velocity.x < 0.0 {
        [LEFT, RIGHT]
    } else if modulo(tick as i64 + pos.x as i64, 2) == 0 {
        [RIGHT, LEFT]
    } else {
        [LEFT, RIGHT]
    }
}

/// The first sideways neighbor the particle could enter, if any
pub fn probe_lateral(
    behavior: &Behavior,
    particle: &Particle,
    pos: IVec2,
    sim: &Simulation,
) -> Option<IVec2> {
    lateral_order(particle, pos, sim.tick())
        .into_iter()
        .map(|dir| pos + dir)
        .find(|to| sim.resolve(behavior, pos, *to) != Resolution::Block)
}
