use bevy::log::error;
use bevy::math::IVec2;
use bevy::render::color::Color;

use super::element::{Behavior, Intent, ParticleType};
use crate::physics::fallingsand::data::particle::Particle;
use crate::physics::fallingsand::data::simulation::Simulation;
use crate::physics::fallingsand::util::vectors::NEIGHBORS;

/// Swallows anything that moves next to it
pub static VOID: Behavior = Behavior {
    kind: ParticleType::Void,
    name: "Void",
    description: "Deletes every moving particle that touches it.",
    weight: 255,
    color: Color::rgb(0.05, 0.0, 0.1),
    gravity: 0.0,
    update: void_process,
    ..Behavior::BASE
};

/// Delete every non static particle in the four neighbors
pub fn void_process(
    _behavior: &Behavior,
    _particle: &mut Particle,
    _id: u32,
    pos: IVec2,
    sim: &mut Simulation,
) -> Intent {
    for neighbor in NEIGHBORS.map(|dir| pos + dir) {
        if sim.behavior_at(neighbor).is_some_and(|b| !b.is_static()) {
            if let Err(err) = sim.delete(neighbor) {
                error!("Void at {} could not delete {}: {}", pos, neighbor, err);
            }
        }
    }
    Intent::Stay
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::fallingsand::data::builder::SimulationBuilder;

    #[test]
    fn test_void_swallows_moving_neighbors() {
        let mut sim = SimulationBuilder::new().width(3).height(3).build().unwrap();
        sim.spawn(IVec2::new(1, 1), ParticleType::Void).unwrap();
        sim.spawn(IVec2::new(1, 0), ParticleType::Sand).unwrap();
        sim.spawn(IVec2::new(0, 1), ParticleType::Wall).unwrap();
        sim.spawn(IVec2::new(2, 2), ParticleType::Wood).unwrap();
        sim.step();
        assert_eq!(sim.kind_at(IVec2::new(1, 0)), None);
        assert_eq!(sim.kind_at(IVec2::new(0, 1)), Some(ParticleType::Wall));
        assert_eq!(sim.live_count(), 3);
    }

    #[test]
    fn test_void_in_a_corner() {
        let mut sim = SimulationBuilder::new().width(2).height(2).build().unwrap();
        sim.spawn(IVec2::new(0, 1), ParticleType::Void).unwrap();
        sim.spawn(IVec2::new(1, 1), ParticleType::Water).unwrap();
        sim.step();
        assert_eq!(sim.kind_at(IVec2::new(1, 1)), None);
        assert_eq!(sim.kind_at(IVec2::new(0, 1)), Some(ParticleType::Void));
        assert_eq!(sim.live_count(), 1);
    }
}
