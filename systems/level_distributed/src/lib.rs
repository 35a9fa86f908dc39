#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Planning system for the Level-Distributed upgrade policy.
//!
//! Every owned farm progresses in lockstep, one update step per wave, while
//! new farms are added at a configurable rate until the capacity is reached.
//! Once every farm caps, the policy keeps crediting recurring income at zero
//! further cost.

use farm_defence_core::{Command, FarmId, FarmSeed, FarmView, SimConfig, Strategy, StrategyKind};

/// Pure planner that spreads upgrades evenly across all owned farms.
#[derive(Clone, Copy, Debug, Default)]
pub struct LevelDistributed;

impl LevelDistributed {
    /// Creates the planner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn spawn_batch(owned: u32, config: &SimConfig) -> u32 {
        if owned >= config.max_farms() {
            return 0;
        }
        if owned + config.farms_per_wave() > config.max_farms() {
            1
        } else {
            config.farms_per_wave()
        }
    }
}

impl Strategy for LevelDistributed {
    fn kind(&self) -> StrategyKind {
        StrategyKind::LevelDistributed
    }

    fn plan_wave(&self, view: &FarmView, config: &SimConfig, out: &mut Vec<Command>) {
        let owned = view.len() as u32;
        let spawns = Self::spawn_batch(owned, config);

        for _ in 0..spawns {
            out.push(Command::SpawnFarm {
                seed: FarmSeed::zero(),
            });
        }

        // Farm ids are allocated contiguously from 1, so the farms spawned
        // above are addressable as owned+1..=owned+spawns before the world
        // confirms them. Every farm, including those, takes one step.
        for id in 1..=owned + spawns {
            out.push(Command::AdvanceFarm {
                farm: FarmId::new(id),
            });
        }
    }
}
