#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Planning system for the Level-Each upgrade policy.
//!
//! Resources are committed to one farm at a time: a farm ramps two levels per
//! wave while below the second-to-last level, takes a single step onto the
//! final level, then pays the capping upgrade. The moment a farm caps, its
//! replacement is spawned with the level-zero catalog entry pre-paid, so the
//! next farm's books already carry the opening transaction. Farms spawned
//! mid-wave wait until the next wave for their first step.

use farm_defence_core::{
    base_level_values, Command, FarmId, FarmSeed, FarmView, SimConfig, Strategy, StrategyKind,
};

/// Pure planner that fully levels one farm before starting the next.
#[derive(Clone, Copy, Debug, Default)]
pub struct LevelEach;

impl LevelEach {
    /// Creates the planner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Strategy for LevelEach {
    fn kind(&self) -> StrategyKind {
        StrategyKind::LevelEach
    }

    fn plan_wave(&self, view: &FarmView, config: &SimConfig, out: &mut Vec<Command>) {
        let max_level = config.max_level();
        let mut owned = view.len() as u32;

        // The very first wave bootstraps farm 1, which then takes its steps
        // within the same wave like any other pre-existing farm.
        let mut farms: Vec<(FarmId, u8, bool)> = view
            .iter()
            .map(|farm| (farm.id, farm.level, farm.capped))
            .collect();
        if farms.is_empty() {
            out.push(Command::SpawnFarm {
                seed: FarmSeed::zero(),
            });
            owned = 1;
            farms.push((FarmId::new(1), 0, false));
        }

        for (farm, level, capped) in farms {
            if max_level > 0 && level < max_level - 1 {
                // Front-load two upgrade steps per wave while ramping.
                out.push(Command::AdvanceFarm { farm });
                out.push(Command::AdvanceFarm { farm });
            } else if max_level > 0 && level == max_level - 1 {
                out.push(Command::AdvanceFarm { farm });
            } else if level == max_level && !capped {
                out.push(Command::AdvanceFarm { farm });
                if owned < config.max_farms() {
                    owned += 1;
                    out.push(Command::SpawnFarm {
                        seed: FarmSeed::prepaid(base_level_values()),
                    });
                }
            } else {
                out.push(Command::AdvanceFarm { farm });
            }
        }
    }
}
