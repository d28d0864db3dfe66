//! This module contains all the particle kinds that are used in the simulation.

pub mod element;
pub mod movement;
pub mod table;

pub mod acid;
pub mod coal;
pub mod fire;
pub mod fog;
pub mod gas;
pub mod none;
pub mod oil;
pub mod sand;
pub mod smoke;
pub mod spawner;
pub mod void;
pub mod wall;
pub mod water;
pub mod wood;
