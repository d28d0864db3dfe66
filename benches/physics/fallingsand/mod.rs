pub mod data;
pub mod util;

use bevy::math::IVec2;
use falling_sand::physics::fallingsand::data::builder::SimulationBuilder;
use falling_sand::physics::fallingsand::data::simulation::Simulation;
use falling_sand::physics::fallingsand::elements::element::ParticleType;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A 64x64 simulation with a floor and a third of the cells filled at random
pub fn get_simulation() -> Simulation {
    let mut sim = SimulationBuilder::new()
        .width(64)
        .height(64)
        .build()
        .unwrap();
    for x in 0..64 {
        sim.spawn(IVec2::new(x, 63), ParticleType::Wall).unwrap();
    }
    let kinds = [
        ParticleType::Sand,
        ParticleType::Water,
        ParticleType::Oil,
        ParticleType::Gas,
        ParticleType::Coal,
    ];
    let mut rng = StdRng::seed_from_u64(42);
    for y in 0..63 {
        for x in 0..64 {
            if rng.gen_bool(0.33) {
                let kind = kinds[rng.gen_range(0..kinds.len())];
                sim.spawn(IVec2::new(x, y), kind).unwrap();
            }
        }
    }
    sim
}
