//! The particle kinds, and the record of behavior every kind provides.
//!
//! Kinds are a closed set. Each kind is described by one `'static` [`Behavior`]
//! whose hooks are plain function pointers, so every particle of a kind shares
//! the same record and the engine dispatches through a lookup table.

use bevy::math::{IVec2, Vec2};
use bevy::render::color::Color;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, FromRepr};

use crate::physics::fallingsand::data::particle::Particle;
use crate::physics::fallingsand::data::simulation::Simulation;

/// The type of a particle.
/// Values are stable identifiers used as table keys.
/// Only ever append new kinds directly before `End`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumCount, FromRepr,
)]
#[repr(u16)]
pub enum ParticleType {
    /// The placeholder kind, an empty cell never holds it
    #[default]
    None = 0,
    Sand,
    Wall,
    Spawner,
    Water,
    Acid,
    Void,
    Fire,
    Smoke,
    Wood,
    Coal,
    Gas,
    Fog,
    Oil,

    // DO NOT PLACE ANY PARTICLE TYPES AFTER THIS POINT.
    /// Marks the end of the valid range
    End,
}

impl ParticleType {
    /// Every valid type, the placeholder included, in identifier order
    pub fn kinds() -> impl Iterator<Item = ParticleType> {
        ParticleType::iter().filter(|kind| *kind != ParticleType::End)
    }

    /// Every type a live particle can have
    pub fn particles() -> impl Iterator<Item = ParticleType> {
        Self::kinds().filter(|kind| *kind != ParticleType::None)
    }

    /// The slot of this type in a behavior table
    pub fn index(self) -> usize {
        self as u16 as usize
    }
}

/// How a particle may move besides straight along gravity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovementProperty {
    /// Only moves along gravity
    #[default]
    None,
    /// Moves sideways when the way along gravity is blocked
    Spread,
}

/// The outcome of a particle trying to enter an occupied cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementType {
    /// The two particles exchange cells
    Swap,
    /// The mover stays where it is
    Block,
}

/// What a particle asks the engine to do with it after its update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Stay in the current cell
    Stay,
    /// Try to move into the given cell
    MoveTo(IVec2),
    /// Leave the grid, the delete hook runs
    Remove,
}

/// Per tick update, may mutate the particle and query or edit other cells
pub type UpdateFn = fn(&Behavior, &mut Particle, u32, IVec2, &mut Simulation) -> Intent;
/// Pure color resolution for a live particle
pub type RenderFn = fn(&Behavior, &Particle) -> Color;
/// Runs on creation, returning false cancels the placement
pub type SpawnFn = fn(&Behavior, &mut Particle) -> bool;
/// Runs on removal
pub type DeleteFn = fn(&Behavior, &mut Particle);
/// Runs when a requested move was blocked
pub type BlockedFn = fn(&Behavior, &mut Particle);

/// Everything the engine knows about a particle kind
#[derive(Clone, Copy)]
pub struct Behavior {
    /// The kind this record describes, one record per kind
    pub kind: ParticleType,
    /// The name of the particle
    pub name: &'static str,
    /// The description of the particle
    pub description: &'static str,
    /// Controls whether a particle sinks or not through another particle.
    /// Higher values sink through lower values.
    pub weight: u8,
    /// The color of the particle
    pub color: Color,
    /// The fraction of full gravity applied to the particle every tick.
    /// Negative values rise, zero never moves.
    pub gravity: f32,
    /// How the particle moves besides along gravity
    pub movement: MovementProperty,
    /// Whether fire spreads into this particle
    pub flammable: bool,
    /// See [`UpdateFn`]
    pub update: UpdateFn,
    /// See [`RenderFn`]
    pub render: RenderFn,
    /// See [`SpawnFn`]
    pub spawn: SpawnFn,
    /// See [`DeleteFn`]
    pub delete: DeleteFn,
    /// See [`BlockedFn`]
    pub blocked: BlockedFn,
}

impl std::fmt::Debug for Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Behavior")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("weight", &self.weight)
            .field("gravity", &self.gravity)
            .field("movement", &self.movement)
            .field("flammable", &self.flammable)
            .finish()
    }
}

impl Behavior {
    /// The default rate of gravity
    pub const DEFAULT_GRAVITY: f32 = 0.05;

    /// A record with every hook at its default, build kinds from it with
    /// struct update syntax
    pub const BASE: Behavior = Behavior {
        kind: ParticleType::None,
        name: "Nothing",
        description: "An empty cell.",
        weight: 0,
        color: Color::rgba(0.0, 0.0, 0.0, 0.0),
        gravity: Self::DEFAULT_GRAVITY,
        movement: MovementProperty::None,
        flammable: false,
        update: update_nothing,
        render: render_color,
        spawn: spawn_accept,
        delete: delete_nothing,
        blocked: blocked_reset_velocity,
    };

    /// The weight of the particle
    pub fn weight(&self) -> u8 {
        self.weight
    }

    /// The movement properties of the particle
    pub fn movement(&self) -> MovementProperty {
        self.movement
    }

    /// Static kinds never move and are never displaced
    pub fn is_static(&self) -> bool {
        self.gravity == 0.0
    }

    /// Rising kinds have negative gravity
    pub fn rises(&self) -> bool {
        self.gravity < 0.0
    }

    /// Whether or not this particle can move through the given other particle.
    /// The heavier kind displaces the lighter one.
    pub fn can_move_through(&self, other: &Behavior) -> MovementType {
        if other.weight < self.weight {
            MovementType::Swap
        } else {
            MovementType::Block
        }
    }

    /// Run the update hook
    pub fn update(
        &self,
        particle: &mut Particle,
        id: u32,
        position: IVec2,
        sim: &mut Simulation,
    ) -> Intent {
        (self.update)(self, particle, id, position, sim)
    }

    /// Resolve the color of a live particle
    pub fn render(&self, particle: &Particle) -> Color {
        (self.render)(self, particle)
    }

    /// Run the spawn hook
    pub fn spawn(&self, particle: &mut Particle) -> bool {
        (self.spawn)(self, particle)
    }

    /// Run the delete hook
    pub fn delete(&self, particle: &mut Particle) {
        (self.delete)(self, particle)
    }

    /// Run the blocked hook
    pub fn blocked(&self, particle: &mut Particle) {
        (self.blocked)(self, particle)
    }

    /// The direction this kind falls in, if it moves at all
    pub fn fall_direction(&self) -> Option<IVec2> {
        if self.is_static() {
            None
        } else if self.rises() {
            Some(IVec2::NEG_Y)
        } else {
            Some(IVec2::Y)
        }
    }
}

/// Do nothing.
pub fn update_nothing(
    _behavior: &Behavior,
    _particle: &mut Particle,
    _id: u32,
    _position: IVec2,
    _sim: &mut Simulation,
) -> Intent {
    Intent::Stay
}

/// Do the minimum amount of work.
pub fn render_color(behavior: &Behavior, _particle: &Particle) -> Color {
    behavior.color
}

/// Accept every spawn
pub fn spawn_accept(_behavior: &Behavior, _particle: &mut Particle) -> bool {
    true
}

/// Reject every spawn
pub fn spawn_reject(_behavior: &Behavior, _particle: &mut Particle) -> bool {
    false
}

/// Do nothing on removal
pub fn delete_nothing(_behavior: &Behavior, _particle: &mut Particle) {}

/// A blocked particle loses its momentum
pub fn blocked_reset_velocity(_behavior: &Behavior, particle: &mut Particle) {
    particle.velocity = Vec2::ZERO;
}
