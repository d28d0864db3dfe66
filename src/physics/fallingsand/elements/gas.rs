use bevy::render::color::Color;

use super::element::{Behavior, MovementProperty, ParticleType};
use super::movement::fluid::fluid_process;

/// A flammable gas
pub static GAS: Behavior = Behavior {
    kind: ParticleType::Gas,
    name: "Gas",
    description: "Rises, spreads and catches fire.",
    weight: 1,
    color: Color::rgba(0.7, 0.8, 0.6, 0.6),
    gravity: -Behavior::DEFAULT_GRAVITY,
    movement: MovementProperty::Spread,
    flammable: true,
    update: fluid_process,
    ..Behavior::BASE
};

#[cfg(test)]
mod tests {
    use bevy::math::IVec2;

    use super::*;
    use crate::physics::fallingsand::data::builder::SimulationBuilder;

    #[test]
    fn test_gas_bubbles_up_through_water() {
        let mut sim = SimulationBuilder::new().width(1).height(2).build().unwrap();
        sim.spawn(IVec2::new(0, 0), ParticleType::Water).unwrap();
        sim.spawn(IVec2::new(0, 1), ParticleType::Gas).unwrap();
        sim.step();
        assert_eq!(sim.kind_at(IVec2::new(0, 0)), Some(ParticleType::Gas));
        assert_eq!(sim.kind_at(IVec2::new(0, 1)), Some(ParticleType::Water));
    }

    #[test]
    fn test_gas_ignites() {
        let mut sim = SimulationBuilder::new().width(2).height(1).build().unwrap();
        sim.spawn(IVec2::new(0, 0), ParticleType::Gas).unwrap();
        sim.spawn(IVec2::new(1, 0), ParticleType::Fire).unwrap();
        sim.step();
        assert_eq!(sim.kind_at(IVec2::new(0, 0)), Some(ParticleType::Fire));
    }
}
