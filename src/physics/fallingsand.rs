//! Falling sand physics engine.
//! A dense grid of typed particles updated once per tick by gravity,
//! density based displacement and lateral spreading.

pub mod data;
pub mod elements;
pub mod error;
pub mod plugin;
pub mod util;
