//! This module contains all the physics related code.
//!
//! When contributing to this module, please keep the following things in mind:
//! * I try to maintain this module as "game engine agnostic" as possible.
//!   Bevy is used for math, color and logging types, and the plugin is the only
//!   place that touches the app.
//! * Physics should be highly unit tested.

use bevy::app::{PluginGroup, PluginGroupBuilder};

use self::fallingsand::plugin::FallingSandPlugin;

pub mod fallingsand;
pub mod util;

pub struct PhysicsPluginGroup;

impl PluginGroup for PhysicsPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>().add(FallingSandPlugin::default())
    }
}
