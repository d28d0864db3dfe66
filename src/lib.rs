//! A falling sand particle simulation.
//!
//! The engine lives in [`physics::fallingsand`]. Hosts drive it either directly
//! through [`physics::fallingsand::data::simulation::Simulation::step`] or by adding
//! the [`physics::PhysicsPluginGroup`] to a bevy app.

pub mod physics;
