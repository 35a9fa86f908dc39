#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative farm state management for the farm economy simulator.
//!
//! The world owns the only mutable copy of every farm and is the single place
//! where the catalog's upgrade transitions are executed. Planning systems
//! never reach in directly: they submit [`Command`] values which the world
//! applies deterministically, answering with [`Event`] values that describe
//! exactly what changed.

use farm_defence_core::{
    level_values, CatalogError, Command, Event, FarmId, FarmSeed, FarmSnapshot, FarmView,
    SimConfig, SpawnError,
};

/// Mutable record tracked for every farm the simulation owns.
#[derive(Clone, Debug)]
struct Farm {
    id: FarmId,
    level: u8,
    total_cost: u64,
    total_income: u64,
    capped: bool,
}

impl Farm {
    fn new(id: FarmId, seed: FarmSeed) -> Self {
        Self {
            id,
            level: 0,
            total_cost: seed.total_cost(),
            total_income: seed.total_income(),
            capped: false,
        }
    }

    fn snapshot(&self) -> FarmSnapshot {
        FarmSnapshot {
            id: self.id,
            level: self.level,
            total_cost: self.total_cost,
            total_income: self.total_income,
            capped: self.capped,
        }
    }
}

/// Authoritative collection of farms plus the limits that govern them.
#[derive(Debug)]
pub struct World {
    farms: Vec<Farm>,
    max_level: u8,
    max_farms: u32,
}

impl World {
    /// Creates an empty world governed by the provided configuration.
    #[must_use]
    pub fn new(config: &SimConfig) -> Self {
        Self {
            farms: Vec::with_capacity(config.max_farms() as usize),
            max_level: config.max_level(),
            max_farms: config.max_farms(),
        }
    }

    /// Number of farms created so far. Farms are never destroyed.
    #[must_use]
    pub fn farm_count(&self) -> u32 {
        self.farms.len() as u32
    }

    /// Captures an immutable view of every farm, sorted ascending by id.
    #[must_use]
    pub fn farm_view(&self) -> FarmView {
        FarmView::from_snapshots(self.farms.iter().map(Farm::snapshot).collect())
    }

    fn spawn_farm(&mut self, seed: FarmSeed, out_events: &mut Vec<Event>) {
        if self.farm_count() >= self.max_farms {
            out_events.push(Event::SpawnRejected {
                reason: SpawnError::CapacityExhausted,
            });
            return;
        }

        let id = FarmId::new(self.farm_count() + 1);
        self.farms.push(Farm::new(id, seed));
        out_events.push(Event::FarmSpawned { farm: id });
    }

    fn advance_farm(
        &mut self,
        id: FarmId,
        out_events: &mut Vec<Event>,
    ) -> Result<(), CatalogError> {
        // Commands naming a missing farm are ignored rather than treated as
        // an error; planners only ever reference ids they observed or spawned.
        let Some(farm) = self.farms.iter_mut().find(|farm| farm.id == id) else {
            return Ok(());
        };

        let values = level_values(farm.level)?;
        if farm.level < self.max_level {
            farm.total_cost += values.cost();
            farm.total_income += values.income();
            farm.level += 1;
            out_events.push(Event::FarmAdvanced {
                farm: id,
                level: farm.level,
            });
            out_events.push(Event::IncomeAccrued {
                farm: id,
                income: values.income(),
            });
        } else if !farm.capped {
            farm.total_cost += values.cost();
            farm.total_income += values.income();
            farm.capped = true;
            out_events.push(Event::FarmCapped { farm: id });
            out_events.push(Event::IncomeAccrued {
                farm: id,
                income: values.income(),
            });
        } else {
            farm.total_income += values.income();
            out_events.push(Event::IncomeAccrued {
                farm: id,
                income: values.income(),
            });
        }

        Ok(())
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(
    world: &mut World,
    command: Command,
    out_events: &mut Vec<Event>,
) -> Result<(), CatalogError> {
    match command {
        Command::SpawnFarm { seed } => {
            world.spawn_farm(seed, out_events);
            Ok(())
        }
        Command::AdvanceFarm { farm } => world.advance_farm(farm, out_events),
    }
}
