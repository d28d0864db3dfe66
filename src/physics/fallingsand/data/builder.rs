use crate::physics::fallingsand::error::{Error, Result};

use super::simulation::Simulation;

/// Everything needed to construct a simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Multiplier on every kind's rate of gravity
    pub gravity: f32,
    /// Terminal velocity, in cells per tick
    pub max_fall_speed: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            gravity: 1.0,
            max_fall_speed: 8.0,
        }
    }
}

impl SimulationConfig {
    /// Check the configuration can drive a simulation
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "grid dimensions must be non zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > i32::MAX as usize || self.height > i32::MAX as usize {
            return Err(Error::InvalidConfig(format!(
                "grid dimensions must fit signed coordinates, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.gravity.is_finite() || self.gravity < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "gravity must be finite and >= 0, got {}",
                self.gravity
            )));
        }
        // Cells walked per tick are counted in signed coordinates
        if !self.max_fall_speed.is_finite()
            || self.max_fall_speed <= 0.0
            || self.max_fall_speed >= i32::MAX as f32
        {
            return Err(Error::InvalidConfig(format!(
                "max_fall_speed must be finite, > 0 and fit signed coordinates, got {}",
                self.max_fall_speed
            )));
        }
        Ok(())
    }
}

/// Builds a Simulation
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    config: SimulationConfig,
}

impl SimulationBuilder {
    /// Start here
    pub fn new() -> Self {
        Self::default()
    }
    /// The number of columns in the grid
    pub fn width(mut self, width: usize) -> Self {
        self.config.width = width;
        self
    }
    /// The number of rows in the grid
    pub fn height(mut self, height: usize) -> Self {
        self.config.height = height;
        self
    }
    /// Scales the acceleration of every kind
    pub fn gravity(mut self, gravity: f32) -> Self {
        self.config.gravity = gravity;
        self
    }
    /// The most cells a particle may fall in one tick, rounded down, plus one
    pub fn max_fall_speed(mut self, max_fall_speed: f32) -> Self {
        self.config.max_fall_speed = max_fall_speed;
        self
    }
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
    pub fn build(self) -> Result<Simulation> {
        Simulation::new(self.config)
    }
}
