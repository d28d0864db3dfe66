use bevy::math::IVec2;

use crate::physics::fallingsand::data::particle::Particle;
use crate::physics::fallingsand::data::simulation::Simulation;
use crate::physics::fallingsand::elements::element::{Behavior, Intent};

use super::{blocker_will_move, probe_fall};

/// Default solid particle behavior.
/// Falls along gravity, piles up instead of spreading.
pub fn solid_process(
    behavior: &Behavior,
    particle: &mut Particle,
    _id: u32,
    pos: IVec2,
    sim: &mut Simulation,
) -> Intent {
    let Some(dir) = behavior.fall_direction() else {
        return Intent::Stay;
    };
    match probe_fall(behavior, particle, pos, sim) {
        Some(dest) => Intent::MoveTo(dest),
        None if blocker_will_move(behavior, pos, sim) => Intent::Stay,
        // Let the engine block us so we lose our momentum
        None => Intent::MoveTo(pos + dir),
    }
}
