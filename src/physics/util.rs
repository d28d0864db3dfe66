//! Utilities shared by the physics engines.

pub mod clock;
