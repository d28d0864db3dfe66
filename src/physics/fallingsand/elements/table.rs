use bevy::log::error;
use strum::EnumCount;

use crate::physics::fallingsand::error::{Error, Result};

use super::element::{Behavior, ParticleType};
use super::{acid, coal, fire, fog, gas, none, oil, sand, smoke, spawner, void, wall, water, wood};

/// Every compiled in kind, the placeholder included
pub static BUILTIN: [&Behavior; ParticleType::COUNT - 1] = [
    &none::NOTHING,
    &sand::SAND,
    &wall::WALL,
    &spawner::SPAWNER,
    &water::WATER,
    &acid::ACID,
    &void::VOID,
    &fire::FIRE,
    &smoke::SMOKE,
    &wood::WOOD,
    &coal::COAL,
    &gas::GAS,
    &fog::FOG,
    &oil::OIL,
];

/// Maps each particle type to its behavior record.
/// Complete by construction, every valid type has exactly one record.
#[derive(Debug, Clone)]
pub struct BehaviorTable {
    table: [Option<&'static Behavior>; ParticleType::COUNT],
}

impl BehaviorTable {
    /// The table of every built in kind
    pub fn new() -> Result<Self> {
        Self::from_behaviors(&BUILTIN)
    }

    /// Register a set of behaviors, checking that every valid type is covered once
    pub fn from_behaviors(behaviors: &[&'static Behavior]) -> Result<Self> {
        let mut table = [None; ParticleType::COUNT];
        for behavior in behaviors {
            if behavior.kind == ParticleType::End {
                return Err(Error::InvalidConfig(format!(
                    "{} registered a behavior for the end marker",
                    behavior.name
                )));
            }
            let slot = &mut table[behavior.kind.index()];
            if slot.is_some() {
                error!("Two behaviors registered for {}", behavior.kind);
                return Err(Error::DuplicateBehavior(behavior.kind));
            }
            *slot = Some(*behavior);
        }
        if let Some(missing) = ParticleType::kinds().find(|kind| table[kind.index()].is_none()) {
            error!("No behavior registered for {}", missing);
            return Err(Error::UnregisteredType(missing));
        }
        Ok(Self { table })
    }

    /// The record of a kind, the end marker has none
    pub fn get(&self, kind: ParticleType) -> Result<&'static Behavior> {
        self.table[kind.index()].ok_or(Error::UnregisteredType(kind))
    }

    /// Infallible lookup for the tick loop, falls back to the placeholder
    pub fn behavior(&self, kind: ParticleType) -> &'static Behavior {
        self.table[kind.index()].unwrap_or(&none::NOTHING)
    }

    /// Every registered record in identifier order
    pub fn iter(&self) -> impl Iterator<Item = &'static Behavior> + '_ {
        self.table.iter().filter_map(|behavior| *behavior)
    }
}
