//! The data module contains the data structures for the falling sand physics engine.
//! These are where the actual grid of particles is stored and stepped.

pub mod builder;
pub mod particle;
pub mod particle_grid;
pub mod simulation;
