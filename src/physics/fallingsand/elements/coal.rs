use bevy::render::color::Color;

use super::element::{Behavior, ParticleType};
use super::movement::solid::solid_process;
use super::sand::render_grain;

/// Falls like sand and burns
pub static COAL: Behavior = Behavior {
    kind: ParticleType::Coal,
    name: "Coal",
    description: "A heavy flammable powder.",
    weight: 12,
    color: Color::rgb(0.15, 0.15, 0.15),
    flammable: true,
    update: solid_process,
    render: render_grain,
    ..Behavior::BASE
};

#[cfg(test)]
mod tests {
    use bevy::math::IVec2;

    use super::*;
    use crate::physics::fallingsand::data::builder::SimulationBuilder;

    #[test]
    fn test_coal_sinks_through_sand() {
        let mut sim = SimulationBuilder::new().width(1).height(2).build().unwrap();
        sim.spawn(IVec2::new(0, 0), ParticleType::Coal).unwrap();
        sim.spawn(IVec2::new(0, 1), ParticleType::Sand).unwrap();
        sim.step();
        assert_eq!(sim.kind_at(IVec2::new(0, 1)), Some(ParticleType::Coal));
        assert_eq!(sim.kind_at(IVec2::new(0, 0)), Some(ParticleType::Sand));
    }
}
