#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Wave loop orchestration for the farm economy simulator.
//!
//! The engine owns the world for the duration of a run and drives the fixed
//! horizon: each wave it captures the pre-wave [`FarmView`], asks the active
//! [`Strategy`] for its command batch, and applies the batch in order. The
//! whole run is a pure function of the configuration; two runs with the same
//! inputs produce identical views.

use farm_defence_core::{CatalogError, Event, FarmView, SimConfig, Strategy};
use farm_defence_world::{apply, World};
use thiserror::Error;
use tracing::debug;

/// Errors that can abort a simulation run.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A farm referenced a level outside the catalog.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Runs the full wave horizon and returns the final farm view.
///
/// Farms are updated in ascending id order within each wave; updates are
/// independent, so the ordering only matters for reproducibility.
pub fn run(strategy: &dyn Strategy, config: &SimConfig) -> Result<FarmView, EngineError> {
    let mut world = World::new(config);
    let mut commands = Vec::new();
    let mut events: Vec<Event> = Vec::new();

    for wave in 1..=config.waves() {
        strategy.plan_wave(&world.farm_view(), config, &mut commands);
        debug!(
            wave,
            strategy = %strategy.kind(),
            commands = commands.len(),
            "planned wave"
        );

        for command in commands.drain(..) {
            apply(&mut world, command, &mut events)?;
        }
        debug!(wave, farms = world.farm_count(), events = events.len(), "applied wave");
        events.clear();
    }

    Ok(world.farm_view())
}
