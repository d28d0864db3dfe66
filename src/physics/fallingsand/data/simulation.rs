use bevy::log::{debug, error, info};
use bevy::math::{IVec2, Rect};
use bevy::prelude::Resource;
use bevy::render::color::Color;
use hashbrown::HashSet;
use itertools::Either;
use rayon::prelude::*;

use crate::physics::fallingsand::elements::element::{Behavior, Intent, MovementType, ParticleType};
use crate::physics::fallingsand::elements::table::BehaviorTable;
use crate::physics::fallingsand::error::{Error, Result};
use crate::physics::fallingsand::util::image::RawImage;
use crate::physics::fallingsand::util::vectors::cell_to_position;
use crate::physics::util::clock::Clock;

use super::builder::SimulationConfig;
use super::particle::Particle;
use super::particle_grid::{Cell, ParticleGrid};

/// What happens when a particle tries to enter a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The cell is empty, the particle moves in
    Move,
    /// The occupant gives way and takes the mover's old cell
    Swap,
    /// Nothing moves
    Block,
}

/// The falling sand engine.
/// Owns the grid of particles and steps it one tick at a time.
#[derive(Resource, Debug)]
pub struct Simulation {
    grid: ParticleGrid,
    behaviors: BehaviorTable,
    config: SimulationConfig,
    clock: Clock,
    next_id: u32,
    /// Cells written since the last tick began
    dirty: HashSet<IVec2>,
}

/* Initialization */
impl Simulation {
    /// Creates an empty simulation, prefer [`super::builder::SimulationBuilder`]
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let behaviors = BehaviorTable::new()?;
        info!(
            "Falling sand simulation: {}x{} cells, {} kinds registered",
            config.width,
            config.height,
            behaviors.iter().count()
        );
        Ok(Self {
            grid: ParticleGrid::new_empty(config.width, config.height),
            behaviors,
            config,
            clock: Clock::default(),
            next_id: 0,
            dirty: HashSet::new(),
        })
    }
}

/* Getters */
impl Simulation {
    pub fn width(&self) -> usize {
        self.grid.width()
    }
    pub fn height(&self) -> usize {
        self.grid.height()
    }
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
    /// The number of ticks stepped so far
    pub fn tick(&self) -> u64 {
        self.clock.get_current_frame()
    }
    pub fn clock(&self) -> Clock {
        self.clock
    }
    pub fn live_count(&self) -> usize {
        self.grid.count()
    }
    pub fn grid(&self) -> &ParticleGrid {
        &self.grid
    }
    pub fn behaviors(&self) -> &BehaviorTable {
        &self.behaviors
    }
    /// The behavior record of a kind, see [`BehaviorTable::get`]
    pub fn behavior(&self, kind: ParticleType) -> Result<&'static Behavior> {
        self.behaviors.get(kind)
    }
    /// Cells written during the last tick and by boundary calls since
    pub fn dirty_cells(&self) -> &HashSet<IVec2> {
        &self.dirty
    }
    /// Never fails, out of bounds cells are permanently blocked
    pub fn get(&self, pos: IVec2) -> Cell<'_> {
        self.grid.get(pos)
    }
    /// The kind occupying a cell, if any
    pub fn kind_at(&self, pos: IVec2) -> Option<ParticleType> {
        self.grid.get(pos).particle().map(|particle| particle.kind)
    }
    /// The behavior of the particle occupying a cell, if any
    pub fn behavior_at(&self, pos: IVec2) -> Option<&'static Behavior> {
        self.kind_at(pos).map(|kind| self.behaviors.behavior(kind))
    }
}

/* Boundary operations, used by the tool layer and by hooks */
impl Simulation {
    /// Places a new particle of the given kind.
    /// Returns false when the cell is occupied or the kind refuses the spawn.
    pub fn spawn(&mut self, pos: IVec2, kind: ParticleType) -> Result<bool> {
        let behavior = self.behaviors.get(kind)?;
        match self.grid.get(pos) {
            Cell::OutOfBounds => return Err(Error::OutOfBounds(pos)),
            Cell::Occupied(_) => {
                debug!("Spawn of {} at {} rejected: cell occupied", kind, pos);
                return Ok(false);
            }
            Cell::Empty => {}
        }
        let mut particle = Particle::new(self.next_id, cell_to_position(pos), kind);
        // Particles spawned mid tick wait for the next one
        particle.last_processed = self.tick();
        if !behavior.spawn(&mut particle) {
            debug!("Spawn of {} at {} rejected by its kind", kind, pos);
            return Ok(false);
        }
        self.grid.set(pos, Some(particle))?;
        self.next_id = self.next_id.wrapping_add(1);
        self.dirty.insert(pos);
        Ok(true)
    }

    /// Removes the particle in a cell, running its delete hook
    pub fn delete(&mut self, pos: IVec2) -> Result<Option<Particle>> {
        let Some(mut particle) = self.grid.take(pos)? else {
            return Ok(None);
        };
        self.behaviors.behavior(particle.kind).delete(&mut particle);
        self.dirty.insert(pos);
        Ok(Some(particle))
    }

    /// Turns the particle in a cell into another kind, at rest.
    /// The particle counts as updated for the current tick.
    /// Returns false when the cell is empty or the kind is the placeholder.
    pub fn transform(&mut self, pos: IVec2, kind: ParticleType) -> Result<bool> {
        self.behaviors.get(kind)?;
        if kind == ParticleType::None {
            return Ok(false);
        }
        let tick = self.tick();
        match self.grid.get_mut(pos)? {
            Some(particle) => {
                particle.kind = kind;
                particle.velocity = bevy::math::Vec2::ZERO;
                particle.last_processed = tick;
                self.dirty.insert(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// How a particle of the `mover` kind standing at `from` would fare entering `to`
    pub fn resolve(&self, mover: &Behavior, from: IVec2, to: IVec2) -> Resolution {
        let occupant = match self.grid.get(to) {
            Cell::Empty => return Resolution::Move,
            Cell::OutOfBounds => return Resolution::Block,
            Cell::Occupied(particle) => self.behaviors.behavior(particle.kind),
        };
        if occupant.is_static() {
            return Resolution::Block;
        }
        let swaps = if mover.rises() {
            // A riser only climbs past something that would sink into its cell anyway
            to.y < from.y
                && !occupant.rises()
                && occupant.can_move_through(mover) == MovementType::Swap
        } else {
            mover.can_move_through(occupant) == MovementType::Swap
        };
        if swaps {
            Resolution::Swap
        } else {
            Resolution::Block
        }
    }
}

/// Handle processing
impl Simulation {
    /// Do one tick of processing on the grid
    /// Rows go top to bottom, columns alternate direction every tick.
    /// A particle that moves into a row not yet visited is skipped by its stamp.
    pub fn step(&mut self) {
        self.clock.update();
        self.dirty.clear();
        let tick = self.tick();
        let width = self.grid.width() as i32;
        let height = self.grid.height() as i32;
        let columns = if tick % 2 == 0 {
            Either::Left(0..width)
        } else {
            Either::Right((0..width).rev())
        };
        let mut updated = 0usize;
        for y in 0..height {
            for x in columns.clone() {
                if self.process_cell(IVec2::new(x, y), tick) {
                    updated += 1;
                }
            }
        }
        debug!(
            "{}: updated {} particles, {} live, {} cells changed",
            self.clock,
            updated,
            self.grid.count(),
            self.dirty.len()
        );
    }

    /// Update the particle in one cell, returns whether a particle was updated
    fn process_cell(&mut self, pos: IVec2, tick: u64) -> bool {
        // We take the particle out of the grid so the hook can borrow the simulation
        let mut particle = match self.grid.take(pos) {
            Ok(Some(particle)) => particle,
            _ => return false,
        };
        if particle.last_processed >= tick {
            self.restore(pos, particle);
            return false;
        }
        particle.last_processed = tick;

        let kind = particle.kind;
        let id = particle.id;
        let behavior = self.behaviors.behavior(kind);
        let intent = behavior.update(&mut particle, id, pos, self);

        // The hook may have changed the kind
        let behavior = self.behaviors.behavior(particle.kind);
        match intent {
            Intent::Stay => {
                if particle.kind != kind {
                    self.dirty.insert(pos);
                }
                self.restore(pos, particle);
            }
            Intent::Remove => {
                behavior.delete(&mut particle);
                self.dirty.insert(pos);
            }
            Intent::MoveTo(dest) => self.commit_move(behavior, particle, pos, dest),
        }
        true
    }

    /// Apply a requested move using the swap or block rule
    fn commit_move(
        &mut self,
        behavior: &Behavior,
        mut particle: Particle,
        from: IVec2,
        to: IVec2,
    ) {
        if from == to {
            self.restore(from, particle);
            return;
        }
        match self.resolve(behavior, from, to) {
            Resolution::Move => {
                particle.position = cell_to_position(to);
                self.restore(to, particle);
                self.dirty.insert(from);
                self.dirty.insert(to);
            }
            Resolution::Swap => {
                self.restore(from, particle);
                match self.grid.swap(from, to) {
                    Ok(()) => {
                        self.sync_position(from);
                        self.sync_position(to);
                        self.dirty.insert(from);
                        self.dirty.insert(to);
                    }
                    Err(err) => error!("Swap from {} failed: {}", from, err),
                }
            }
            Resolution::Block => {
                behavior.blocked(&mut particle);
                self.restore(from, particle);
            }
        }
    }

    /// Put a particle into a cell the engine knows to be free
    fn restore(&mut self, pos: IVec2, particle: Particle) {
        match self.grid.replace(pos, Some(particle)) {
            Ok(None) => {}
            Ok(Some(overwritten)) => error!(
                "{} at {} overwrote {} {}, hooks must not write to the acting cell",
                particle.kind, pos, overwritten.kind, overwritten.id
            ),
            Err(err) => error!("Dropped {} {}: {}", particle.kind, particle.id, err),
        }
    }

    fn sync_position(&mut self, pos: IVec2) {
        if let Ok(Some(particle)) = self.grid.get_mut(pos) {
            particle.position = cell_to_position(pos);
        }
    }
}

/* Drawing */
impl Simulation {
    /// The color of every live particle, computed on demand
    pub fn colors(&self) -> impl Iterator<Item = (IVec2, Color)> + '_ {
        self.grid
            .iter()
            .map(|(pos, particle)| (pos, self.behaviors.behavior(particle.kind).render(particle)))
    }

    /// Draw the texture as the color of each particle, empty cells are transparent
    pub fn texture(&self) -> RawImage {
        let width = self.width();
        let height = self.height();
        let mut pixels = vec![[0u8; 4]; width * height];
        pixels
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    if let Cell::Occupied(particle) = self.grid.get(IVec2::new(x as i32, y as i32))
                    {
                        *pixel = self
                            .behaviors
                            .behavior(particle.kind)
                            .render(particle)
                            .as_rgba_u8();
                    }
                }
            });
        RawImage {
            pixels: bytemuck::cast_slice(&pixels).to_vec(),
            bounds: Rect::new(0.0, 0.0, width as f32, height as f32),
        }
    }
}
