use bevy::render::color::Color;

use super::element::{Behavior, ParticleType};

/// Never moves, nothing moves through it
pub static WALL: Behavior = Behavior {
    kind: ParticleType::Wall,
    name: "Wall",
    description: "An immovable barrier.",
    weight: 255,
    color: Color::rgb(0.5, 0.5, 0.5),
    gravity: 0.0,
    ..Behavior::BASE
};

#[cfg(test)]
mod tests {
    use bevy::math::IVec2;

    use super::*;
    use crate::physics::fallingsand::data::builder::SimulationBuilder;

    #[test]
    fn test_wall_floats() {
        let mut sim = SimulationBuilder::new().width(1).height(3).build().unwrap();
        sim.spawn(IVec2::ZERO, ParticleType::Wall).unwrap();
        for _ in 0..3 {
            sim.step();
        }
        assert_eq!(sim.kind_at(IVec2::ZERO), Some(ParticleType::Wall));
        assert!(WALL.is_static());
    }
}
