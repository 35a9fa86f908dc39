#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the farm economy simulator.
//!
//! This crate defines the message surface that connects planning systems, the
//! authoritative world, and the wave engine. Strategies read immutable
//! [`FarmView`] snapshots and respond with [`Command`] batches, the world
//! executes those commands via its `apply` entry point and broadcasts
//! [`Event`] values describing what actually happened. The level catalog, the
//! validated simulation configuration and the error taxonomy also live here so
//! every crate agrees on the same vocabulary.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest level defined by the level catalog.
pub const MAX_CATALOG_LEVEL: u8 = 5;

/// Smallest farm capacity the simulator accepts.
pub const MIN_FARM_CAPACITY: u32 = 1;

/// Largest farm capacity the simulator accepts.
pub const MAX_FARM_CAPACITY: u32 = 8;

const LEVEL_TABLE: [LevelValues; 6] = [
    LevelValues::new(250, 50),
    LevelValues::new(200, 100),
    LevelValues::new(550, 250),
    LevelValues::new(1000, 500),
    LevelValues::new(2500, 750),
    LevelValues::new(5000, 1500),
];

/// Upgrade cost and per-wave income associated with a single farm level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelValues {
    cost: u64,
    income: u64,
}

impl LevelValues {
    /// Creates a new cost/income pair.
    #[must_use]
    pub const fn new(cost: u64, income: u64) -> Self {
        Self { cost, income }
    }

    /// Cost charged when a farm advances out of (or caps at) this level.
    #[must_use]
    pub const fn cost(&self) -> u64 {
        self.cost
    }

    /// Income credited for a wave spent at this level.
    #[must_use]
    pub const fn income(&self) -> u64 {
        self.income
    }
}

/// Looks up the cost/income pair for the provided level.
///
/// The catalog is contiguous from level 0 through [`MAX_CATALOG_LEVEL`];
/// anything outside that range is rejected.
pub fn level_values(level: u8) -> Result<LevelValues, CatalogError> {
    LEVEL_TABLE
        .get(usize::from(level))
        .copied()
        .ok_or(CatalogError::InvalidLevel { level })
}

/// Catalog entry for level zero, the state every freshly built farm starts in.
#[must_use]
pub const fn base_level_values() -> LevelValues {
    LEVEL_TABLE[0]
}

/// Errors produced by catalog lookups.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum CatalogError {
    /// The requested level lies outside the fixed catalog range.
    #[error("invalid farm level {level}: the catalog covers levels 0 through 5")]
    InvalidLevel {
        /// Level that was requested.
        level: u8,
    },
}

/// Unique identifier assigned to a farm in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FarmId(u32);

impl FarmId {
    /// Creates a new farm identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Initial ledger state applied to a freshly spawned farm.
///
/// Farms always start at level zero and uncapped; the seed only decides which
/// totals they open their books with. Level-Distributed spawns zero-seeded
/// farms while Level-Each pre-pays the level-zero catalog entry for every
/// replacement farm, so the asymmetry is carried explicitly in the command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FarmSeed {
    total_cost: u64,
    total_income: u64,
}

impl FarmSeed {
    /// Seed with empty books, used for zero-initialized spawns.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            total_cost: 0,
            total_income: 0,
        }
    }

    /// Seed that opens the books with the provided catalog entry pre-paid.
    #[must_use]
    pub const fn prepaid(values: LevelValues) -> Self {
        Self {
            total_cost: values.cost(),
            total_income: values.income(),
        }
    }

    /// Cost the farm starts with.
    #[must_use]
    pub const fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// Income the farm starts with.
    #[must_use]
    pub const fn total_income(&self) -> u64 {
        self.total_income
    }
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Requests construction of a new farm with the provided opening books.
    SpawnFarm {
        /// Ledger state the new farm starts with.
        seed: FarmSeed,
    },
    /// Requests exactly one update-rule step for the identified farm.
    ///
    /// Whether the step upgrades, caps, or merely credits income is decided
    /// by the world from the farm's current state.
    AdvanceFarm {
        /// Farm the step applies to.
        farm: FarmId,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Confirms that a farm was created.
    FarmSpawned {
        /// Identifier allocated to the new farm.
        farm: FarmId,
    },
    /// Confirms that a farm advanced one level.
    FarmAdvanced {
        /// Farm that advanced.
        farm: FarmId,
        /// Level the farm occupies after the step.
        level: u8,
    },
    /// Confirms that a farm paid for and reached its capped state.
    FarmCapped {
        /// Farm that capped.
        farm: FarmId,
    },
    /// Reports income credited to a farm during a step.
    IncomeAccrued {
        /// Farm that earned the income.
        farm: FarmId,
        /// Amount credited for the step.
        income: u64,
    },
    /// Reports that a spawn request was rejected.
    SpawnRejected {
        /// Specific reason the spawn failed.
        reason: SpawnError,
    },
}

/// Reasons a spawn request may be rejected by the world.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnError {
    /// The configured farm capacity is already fully used.
    #[error("farm capacity is exhausted")]
    CapacityExhausted,
}

/// Immutable representation of a single farm's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmSnapshot {
    /// Unique identifier assigned to the farm.
    pub id: FarmId,
    /// Level the farm currently occupies.
    pub level: u8,
    /// Cumulative cost spent on the farm.
    pub total_cost: u64,
    /// Cumulative income earned by the farm.
    pub total_income: u64,
    /// Whether the farm has paid for its maximum level.
    pub capped: bool,
}

/// Read-only snapshot describing all farms owned by the simulation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmView {
    snapshots: Vec<FarmSnapshot>,
}

impl FarmView {
    /// Creates a new farm view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<FarmSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured farm snapshots in ascending id order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &FarmSnapshot> {
        self.snapshots.iter()
    }

    /// Looks up the snapshot for the provided farm, if it exists.
    #[must_use]
    pub fn get(&self, farm: FarmId) -> Option<&FarmSnapshot> {
        self.snapshots
            .binary_search_by_key(&farm, |snapshot| snapshot.id)
            .ok()
            .and_then(|index| self.snapshots.get(index))
    }

    /// Number of farms captured by the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Reports whether the view contains no farms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<FarmSnapshot> {
        self.snapshots
    }
}

/// Validated simulation parameters shared by the world, systems and engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    waves: u32,
    max_level: u8,
    max_farms: u32,
    farms_per_wave: u32,
}

impl SimConfig {
    /// Validates and captures a simulation configuration.
    pub fn new(
        waves: u32,
        max_level: u8,
        max_farms: u32,
        farms_per_wave: u32,
    ) -> Result<Self, ConfigError> {
        if waves < 1 {
            return Err(ConfigError::InvalidWaves(waves));
        }
        if max_level > MAX_CATALOG_LEVEL {
            return Err(ConfigError::InvalidMaxLevel(max_level));
        }
        if !(MIN_FARM_CAPACITY..=MAX_FARM_CAPACITY).contains(&max_farms) {
            return Err(ConfigError::InvalidMaxFarms(max_farms));
        }
        if !(1..=2).contains(&farms_per_wave) {
            return Err(ConfigError::InvalidFarmsPerWave(farms_per_wave));
        }
        Ok(Self {
            waves,
            max_level,
            max_farms,
            farms_per_wave,
        })
    }

    /// Number of waves the simulation runs for.
    #[must_use]
    pub const fn waves(&self) -> u32 {
        self.waves
    }

    /// Highest level a farm may reach before capping.
    #[must_use]
    pub const fn max_level(&self) -> u8 {
        self.max_level
    }

    /// Maximum number of farms that may ever exist.
    #[must_use]
    pub const fn max_farms(&self) -> u32 {
        self.max_farms
    }

    /// Farms the Level-Distributed policy attempts to add each wave.
    #[must_use]
    pub const fn farms_per_wave(&self) -> u32 {
        self.farms_per_wave
    }
}

/// Errors produced while validating a simulation configuration.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum ConfigError {
    /// The wave horizon must cover at least one wave.
    #[error("invalid configuration: waves must be at least 1, got {0}")]
    InvalidWaves(u32),
    /// The maximum farm level must stay inside the catalog range.
    #[error("invalid configuration: max farm level must be 0 through 5, got {0}")]
    InvalidMaxLevel(u8),
    /// The farm capacity must stay inside the supported range.
    #[error("invalid configuration: max farms must be 1 through 8, got {0}")]
    InvalidMaxFarms(u32),
    /// Only one or two farms may be added per wave.
    #[error("invalid configuration: farms per wave must be 1 or 2, got {0}")]
    InvalidFarmsPerWave(u32),
}

/// Identifies one of the two upgrade policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Spread upgrades evenly across all owned farms each wave.
    LevelDistributed,
    /// Fully level one farm before starting the next.
    LevelEach,
}

impl StrategyKind {
    /// Canonical name used on the command line and in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LevelDistributed => "level-distributed",
            Self::LevelEach => "level-each",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = UnknownStrategyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "level-distributed" | "LevelDistributed" => Ok(Self::LevelDistributed),
            "level-each" | "LevelEach" => Ok(Self::LevelEach),
            other => Err(UnknownStrategyError {
                name: other.to_owned(),
            }),
        }
    }
}

/// Error raised when a strategy name is not recognized.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown strategy '{name}': expected 'level-each' or 'level-distributed'")]
pub struct UnknownStrategyError {
    name: String,
}

impl UnknownStrategyError {
    /// Name that failed to resolve to a strategy.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Policy that decides which farms exist and how they advance each wave.
///
/// Implementations are pure planners: they read the pre-wave [`FarmView`] and
/// emit the command batch for one wave without touching world state. Exactly
/// two implementations exist, selected once at startup from [`StrategyKind`].
pub trait Strategy {
    /// Identifies the policy for diagnostics.
    fn kind(&self) -> StrategyKind;

    /// Reads the pre-wave view and emits the command batch for one wave.
    fn plan_wave(&self, view: &FarmView, config: &SimConfig, out: &mut Vec<Command>);
}
