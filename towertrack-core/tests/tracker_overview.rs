use chrono::{TimeZone, Utc};
use towertrack_core::{
    MemoryRunStore, OwnerId, RawRun, RunId, RunRecordError, TrackerEngine, TrackerSettings,
    near_best_cutoff,
};

const OWNER: OwnerId = OwnerId(42);

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn run(id: u64, day: u32, tier: &str, waves: u32, duration_secs: u32, coins: u128, cells: u128) -> RawRun {
    RawRun {
        id: RunId(id),
        date: Utc.with_ymd_and_hms(2024, 7, day, 20, 0, 0).unwrap(),
        tier: tier.to_string(),
        waves,
        duration_secs,
        coins,
        cells,
        notes: format!("run {id}"),
    }
}

fn engine_with_runs(runs: Vec<RawRun>) -> TrackerEngine<MemoryRunStore> {
    init_logs();
    let mut store = MemoryRunStore::new();
    for r in runs {
        store.upsert_run(OWNER, r);
    }
    TrackerEngine::new(store)
}

#[test]
fn overview_enriches_flags_and_summarizes() {
    // Inserted out of date order on purpose; the store sorts on snapshot.
    let engine = engine_with_runs(vec![
        run(2, 2, "T1", 10, 3_600, 200, 80),
        run(1, 1, "T1", 10, 3_600, 100, 40),
        run(3, 3, "T1", 10, 3_600, 50, 20),
    ]);

    let out = engine.overview(OWNER).unwrap();
    assert_eq!(out.owner, OWNER);

    let ids: Vec<RunId> = out.runs.iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec![RunId(1), RunId(2), RunId(3)]);

    let coins_wave: Vec<u128> = out.runs.iter().map(|r| r.coins_wave).collect();
    assert_eq!(coins_wave, vec![10, 20, 5]);

    let pb_coins: Vec<bool> = out.runs.iter().map(|r| r.is_pb_coins).collect();
    assert_eq!(pb_coins, vec![true, true, false]);
    assert_eq!(out.personal_bests.coins, Some(1));
    assert_eq!(out.personal_bests.cells, Some(1));

    let t1 = &out.tiers[0];
    assert_eq!(t1.tier, "T1");
    assert_eq!(t1.coins.min, 50);
    assert_eq!(t1.coins.avg, 117);
    assert_eq!(t1.coins.max, 200);
    assert_eq!(t1.waves.min, 10);
    assert_eq!(t1.waves.max, 10);
}

#[test]
fn overview_of_an_unknown_owner_is_empty_not_an_error() {
    init_logs();
    let engine = TrackerEngine::new(MemoryRunStore::new());
    let out = engine.overview(OWNER).unwrap();
    assert!(out.runs.is_empty());
    assert!(out.tiers.is_empty());
    assert_eq!(out.personal_bests.coins, None);
    assert_eq!(out.personal_bests.cells_hour, None);
}

#[test]
fn editing_and_deleting_runs_reshapes_the_overview() {
    let mut engine = engine_with_runs(vec![
        run(1, 1, "T2", 50, 1_800, 1_000, 10),
        run(2, 2, "T2", 60, 1_800, 4_000, 10),
    ]);

    // Update run 1 so it beats run 2 retroactively.
    let mut edited = run(1, 1, "T2", 50, 1_800, 9_000, 10);
    edited.notes = "corrected entry".to_string();
    engine.store_mut().upsert_run(OWNER, edited);

    let out = engine.overview(OWNER).unwrap();
    assert_eq!(out.personal_bests.coins, Some(0));
    let flags: Vec<bool> = out.runs.iter().map(|r| r.is_pb_coins).collect();
    assert_eq!(flags, vec![true, false]);

    engine.store_mut().remove_run(OWNER, RunId(1));
    let out = engine.overview(OWNER).unwrap();
    assert_eq!(out.runs.len(), 1);
    assert_eq!(out.personal_bests.coins, Some(0));
    assert_eq!(out.runs[0].id(), RunId(2));
}

#[test]
fn settings_thread_through_for_near_best_highlighting() {
    let mut engine = engine_with_runs(vec![
        run(1, 1, "T3", 10, 3_600, 1_000, 10),
        run(2, 2, "T3", 10, 3_600, 950, 10),
    ]);
    engine.store_mut().set_settings(
        OWNER,
        TrackerSettings {
            threshold_top_coins: 90,
            ..TrackerSettings::default()
        },
    );

    let out = engine.overview(OWNER).unwrap();
    let best_index = out.personal_bests.coins.unwrap();
    let pb_value = out.runs[best_index].raw.coins;
    let cutoff = near_best_cutoff(pb_value, out.settings.threshold_top_coins);

    // The presentation layer would highlight run 2: close to, but not, the
    // personal best.
    assert_eq!(cutoff, 900);
    assert!(out.runs[1].raw.coins >= cutoff);
    assert!(!out.runs[1].is_pb_coins);
}

#[test]
fn contract_violations_surface_through_the_engine() {
    let engine = engine_with_runs(vec![run(1, 1, "T1", 0, 3_600, 1, 1)]);
    let err = engine.overview(OWNER).unwrap_err();
    let record_err = err.downcast::<RunRecordError>().unwrap();
    assert_eq!(record_err, RunRecordError::ZeroWaves { id: RunId(1) });
}

#[test]
fn tier_summaries_span_multiple_tiers_in_natural_order() {
    let mut runs = Vec::new();
    // Two T10 runs, then interleaved T2 and T9 runs.
    runs.push(run(1, 1, "T10", 100, 3_600, 10, 1));
    runs.push(run(2, 2, "T2", 200, 3_600, 20, 2));
    runs.push(run(3, 3, "T9", 300, 3_600, 30, 3));
    runs.push(run(4, 4, "T10", 400, 3_600, 40, 4));
    runs.push(run(5, 5, "T2", 500, 3_600, 50, 5));
    let engine = engine_with_runs(runs);

    let out = engine.overview(OWNER).unwrap();
    let labels: Vec<&str> = out.tiers.iter().map(|t| t.tier.as_str()).collect();
    assert_eq!(labels, vec!["T2", "T9", "T10"]);
    assert_eq!(out.tiers[0].sample_count, 2);
    assert_eq!(out.tiers[1].sample_count, 1);
    assert_eq!(out.tiers[2].coins.min, 10);
    assert_eq!(out.tiers[2].coins.max, 40);
}
