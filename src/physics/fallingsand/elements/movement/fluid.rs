use bevy::math::IVec2;

use crate::physics::fallingsand::data::particle::Particle;
use crate::physics::fallingsand::data::simulation::Simulation;
use crate::physics::fallingsand::elements::element::{Behavior, Intent, MovementProperty};

use super::{blocker_will_move, probe_fall, probe_lateral};

/// Default fluid particle behavior.
/// Falls or rises along gravity, and flows sideways when that is blocked.
pub fn fluid_process(
    behavior: &Behavior,
    particle: &mut Particle,
    _id: u32,
    pos: IVec2,
    sim: &mut Simulation,
) -> Intent {
    let Some(dir) = behavior.fall_direction() else {
        return Intent::Stay;
    };
    if let Some(dest) = probe_fall(behavior, particle, pos, sim) {
        return Intent::MoveTo(dest);
    }
    if blocker_will_move(behavior, pos, sim) {
        return Intent::Stay;
    }
    if behavior.movement() == MovementProperty::Spread {
        if let Some(dest) = probe_lateral(behavior, particle, pos, sim) {
            particle.velocity = (dest - pos).as_vec2();
            return Intent::MoveTo(dest);
        }
    }
    Intent::MoveTo(pos + dir)
}
