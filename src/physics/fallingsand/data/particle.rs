use bevy::math::Vec2;

use crate::physics::fallingsand::elements::element::ParticleType;

/// The particle data structure.
/// Plain data, the behavior lives in the kind's record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// The cell the particle occupies, as floats
    pub position: Vec2,
    /// Accumulated motion, cells per tick
    pub velocity: Vec2,
    pub kind: ParticleType,
    /// Stable identity handed out by the simulation at spawn
    pub id: u32,
    /// The tick this particle was last updated on
    pub last_processed: u64,
}

impl Particle {
    /// Constructs a particle at rest
    pub fn new(id: u32, position: Vec2, kind: ParticleType) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            kind,
            id,
            last_processed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_particle_is_at_rest() {
        let p = Particle::new(3, Vec2::new(1.0, 2.0), ParticleType::Sand);
        assert_eq!(p.velocity, Vec2::ZERO);
        assert_eq!(p.kind, ParticleType::Sand);
        assert_eq!(p.position, Vec2::new(1.0, 2.0));
        assert_eq!(p.id, 3);
    }
}
