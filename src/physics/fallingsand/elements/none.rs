use super::element::{spawn_reject, Behavior, ParticleType};

/// The placeholder kind.
/// Empty cells hold no particle at all, so this record is never placed in the grid.
pub static NOTHING: Behavior = Behavior {
    kind: ParticleType::None,
    name: "Nothing",
    description: "An empty cell.",
    gravity: 0.0,
    spawn: spawn_reject,
    ..Behavior::BASE
};
