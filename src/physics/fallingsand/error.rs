use bevy::math::IVec2;
use thiserror::Error;

use super::elements::element::ParticleType;

/// Crate-wide result type alias for the falling sand engine.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the boundary of the engine.
///
/// The tick loop itself never fails. These are returned by the operations the
/// host calls directly (spawning, deleting, raw grid access) and by table or
/// configuration validation at startup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The coordinate lies outside the grid.
    #[error("{0} went outside the constraints of the grid")]
    OutOfBounds(IVec2),

    /// No behavior is registered for the particle type.
    #[error("no behavior registered for particle type {0}")]
    UnregisteredType(ParticleType),

    /// Two behaviors were registered for the same particle type.
    #[error("more than one behavior registered for particle type {0}")]
    DuplicateBehavior(ParticleType),

    /// The simulation was configured with invalid parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_informative() {
        let e = Error::OutOfBounds(IVec2::new(3, -1));
        let msg = format!("{e}");
        assert!(msg.contains("[3, -1]"));
        assert!(msg.contains("outside"));

        let e = Error::UnregisteredType(ParticleType::Oil);
        assert!(format!("{e}").contains("Oil"));
    }
}
