use farm_defence_core::{FarmId, FarmView, SimConfig, Strategy};
use farm_defence_engine::run;
use farm_defence_system_level_distributed::LevelDistributed;
use farm_defence_system_level_each::LevelEach;

fn config(waves: u32, max_level: u8, max_farms: u32, farms_per_wave: u32) -> SimConfig {
    SimConfig::new(waves, max_level, max_farms, farms_per_wave).expect("valid configuration")
}

fn totals(view: &FarmView) -> (u64, u64) {
    view.iter().fold((0, 0), |(cost, income), farm| {
        (cost + farm.total_cost, income + farm.total_income)
    })
}

#[test]
fn level_distributed_caps_a_single_farm_in_one_wave() {
    let view = run(&LevelDistributed::new(), &config(1, 0, 1, 1)).expect("run succeeds");

    assert_eq!(view.len(), 1);
    let farm = view.get(FarmId::new(1)).expect("farm exists");
    assert!(farm.capped);
    assert_eq!(farm.total_cost, 250);
    assert_eq!(farm.total_income, 50);
    assert_eq!(farm.total_income as i64 - farm.total_cost as i64, -200);
}

#[test]
fn level_distributed_two_wave_cap_pays_the_departing_levels() {
    let view = run(&LevelDistributed::new(), &config(2, 1, 1, 1)).expect("run succeeds");

    let farm = view.get(FarmId::new(1)).expect("farm exists");
    assert!(farm.capped);
    // Wave 1 advances 0->1 paying the level-0 entry, wave 2 caps paying the
    // level-1 entry.
    assert_eq!(farm.total_cost, 250 + 200);
    assert_eq!(farm.total_income, 50 + 100);
}

#[test]
fn level_each_three_wave_run_matches_the_update_rules() {
    let view = run(&LevelEach::new(), &config(3, 1, 1, 1)).expect("run succeeds");

    let farm = view.get(FarmId::new(1)).expect("farm exists");
    assert!(farm.capped);
    // Wave 1: single step 0->1 (+250/+50), wave 2: cap (+200/+100),
    // wave 3: income only (+100).
    assert_eq!(farm.total_cost, 450);
    assert_eq!(farm.total_income, 250);
}

#[test]
fn farm_ids_are_contiguous_under_both_strategies() {
    for strategy in [&LevelDistributed::new() as &dyn Strategy, &LevelEach::new()] {
        let view = run(strategy, &config(41, 5, 8, 2)).expect("run succeeds");
        let ids: Vec<u32> = view.iter().map(|farm| farm.id.get()).collect();
        let expected: Vec<u32> = (1..=view.len() as u32).collect();
        assert_eq!(ids, expected, "{} ids must be gapless", strategy.kind());
    }
}

#[test]
fn per_farm_state_is_monotonic_across_waves() {
    for strategy in [&LevelDistributed::new() as &dyn Strategy, &LevelEach::new()] {
        let mut previous: Option<FarmView> = None;
        for waves in 1..=20 {
            let view = run(strategy, &config(waves, 3, 4, 2)).expect("run succeeds");
            if let Some(previous) = previous {
                for before in previous.iter() {
                    let after = view.get(before.id).expect("farms are never destroyed");
                    assert!(after.level >= before.level);
                    assert!(after.total_cost >= before.total_cost);
                    assert!(after.total_income >= before.total_income);
                    assert!(after.capped || !before.capped, "capped never reverts");
                }
            }
            previous = Some(view);
        }
    }
}

#[test]
fn capped_farms_only_accrue_income_afterwards() {
    let strategy = LevelDistributed::new();
    // One farm, max level 1: capped at the end of wave 2.
    let capped_at = run(&strategy, &config(2, 1, 1, 1)).expect("run succeeds");
    let baseline = capped_at.get(FarmId::new(1)).expect("farm exists").clone();
    assert!(baseline.capped);

    for extra in 1..=5u64 {
        let view = run(&strategy, &config(2 + extra as u32, 1, 1, 1)).expect("run succeeds");
        let farm = view.get(FarmId::new(1)).expect("farm exists");
        assert_eq!(farm.level, baseline.level);
        assert_eq!(farm.total_cost, baseline.total_cost);
        assert_eq!(
            farm.total_income,
            baseline.total_income + extra * 100,
            "capped farm earns the max-level income every wave"
        );
    }
}

#[test]
fn the_requested_horizon_is_honoured() {
    let short = run(&LevelDistributed::new(), &config(1, 5, 8, 2)).expect("run succeeds");
    let long = run(&LevelDistributed::new(), &config(41, 5, 8, 2)).expect("run succeeds");
    assert_eq!(short.len(), 2, "one wave only spawns the first batch");
    assert_eq!(long.len(), 8);
    assert_ne!(totals(&short), totals(&long));
}

#[test]
fn default_level_distributed_run_matches_reference_totals() {
    let view = run(&LevelDistributed::new(), &config(41, 5, 8, 2)).expect("run succeeds");

    let (total_cost, total_income) = totals(&view);
    assert_eq!(total_cost, 76_000);
    assert_eq!(total_income, 427_200);

    for farm in view.iter() {
        assert!(farm.capped);
        assert_eq!(farm.level, 5);
        assert_eq!(farm.total_cost, 9_500, "every farm pays the full ladder once");
    }
}

#[test]
fn default_level_each_run_matches_reference_totals() {
    let view = run(&LevelEach::new(), &config(41, 5, 8, 2)).expect("run succeeds");

    let (total_cost, total_income) = totals(&view);
    assert_eq!(total_cost, 77_750);
    assert_eq!(total_income, 301_550);

    let first = view.get(FarmId::new(1)).expect("farm 1 exists");
    assert_eq!(first.total_cost, 9_500, "farm 1 bootstraps with empty books");
    assert_eq!(first.total_income, 58_650);

    for farm in view.iter().skip(1) {
        assert_eq!(
            farm.total_cost, 9_750,
            "replacement farms carry the pre-paid level-0 entry"
        );
    }
}

#[test]
fn runs_are_deterministic() {
    let first = run(&LevelEach::new(), &config(41, 5, 8, 2)).expect("run succeeds");
    let second = run(&LevelEach::new(), &config(41, 5, 8, 2)).expect("run succeeds");
    assert_eq!(first, second);
}
