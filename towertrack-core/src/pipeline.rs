//! Single-pass aggregation over one owner's chronologically ordered runs.
//!
//! The pass tracks three things at once: running personal-best maxima for
//! four metrics, trailing 5-run moving averages for the same metrics, and a
//! bounded per-tier window feeding the tier summary table. It is pure and
//! stateless between invocations; calling it twice on the same snapshot
//! yields identical output.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::RunRecordError;
use crate::natsort::natural_cmp;
use crate::numbers::round_half_up_div;
use crate::run::{EnrichedRun, OwnerId, RawRun, enrich};
use crate::settings::TrackerSettings;

/// Sample capacity of every trailing window (moving averages and tier
/// summaries).
pub const WINDOW_LEN: usize = 5;

/// One owner's chronologically ordered snapshot, as handed over by the
/// store.
///
/// Runs must be sorted ascending by `date`; ordering is the store's
/// contract and is not re-validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerSnapshot {
    pub owner: OwnerId,
    #[serde(default)]
    pub settings: TrackerSettings,
    pub runs: Vec<RawRun>,
}

/// Minimum, half-up-rounded mean, and maximum of one metric across a
/// window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSpread {
    pub min: u128,
    pub avg: u128,
    pub max: u128,
}

/// Statistical summary of the most recent runs within one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSummary {
    pub tier: String,
    /// Number of runs aggregated, `1..=WINDOW_LEN`.
    pub sample_count: usize,
    pub waves: MetricSpread,
    pub coins: MetricSpread,
    pub coins_hour: MetricSpread,
    pub cells: MetricSpread,
    pub cells_hour: MetricSpread,
}

/// Indices of the personal-best holders within the enriched output, per
/// metric. `None` means "no runs yet", which presentation must keep
/// distinct from a run with value zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalBests {
    pub coins: Option<usize>,
    pub cells: Option<usize>,
    pub coins_hour: Option<usize>,
    pub cells_hour: Option<usize>,
}

/// Full output of one aggregation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregates {
    pub owner: OwnerId,
    /// Owner settings threaded through untouched for the presentation
    /// layer.
    pub settings: TrackerSettings,
    /// Enriched runs in the input order, flags and averages populated.
    pub runs: Vec<EnrichedRun>,
    pub personal_bests: PersonalBests,
    /// Tier summaries in natural label order ("T2" before "T12").
    pub tiers: Vec<TierSummary>,
}

/// Running maximum for one personal-best metric.
#[derive(Debug, Default)]
struct BestTracker {
    holder: Option<(usize, u128)>,
}

impl BestTracker {
    /// Record `value` at `index`; returns true when the run becomes the new
    /// holder. Strict `>` only: a tie leaves the earlier holder in place.
    fn observe(&mut self, index: usize, value: u128) -> bool {
        match self.holder {
            Some((_, best)) if value <= best => false,
            _ => {
                self.holder = Some((index, value));
                true
            }
        }
    }

    fn index(&self) -> Option<usize> {
        self.holder.map(|(index, _)| index)
    }
}

/// Bounded trailing window of the `WINDOW_LEN` most recent samples.
#[derive(Debug, Default)]
struct Window {
    samples: SmallVec<[u128; WINDOW_LEN]>,
}

impl Window {
    fn push(&mut self, value: u128) {
        if self.samples.len() == WINDOW_LEN {
            self.samples.remove(0);
        }
        self.samples.push(value);
    }

    fn is_full(&self) -> bool {
        self.samples.len() == WINDOW_LEN
    }

    /// Half-up-rounded mean of the window. Must not be called while empty.
    fn mean(&self) -> u128 {
        let sum: u128 = self.samples.iter().sum();
        round_half_up_div(sum, self.samples.len() as u128)
    }

    fn spread(&self) -> MetricSpread {
        MetricSpread {
            min: self.samples.iter().copied().min().unwrap_or_default(),
            avg: self.mean(),
            max: self.samples.iter().copied().max().unwrap_or_default(),
        }
    }
}

/// Per-tier windows over the five summarized metrics, evicted in lockstep.
#[derive(Debug, Default)]
struct TierWindow {
    waves: Window,
    coins: Window,
    coins_hour: Window,
    cells: Window,
    cells_hour: Window,
}

impl TierWindow {
    fn push(&mut self, run: &EnrichedRun) {
        self.waves.push(u128::from(run.raw.waves));
        self.coins.push(run.raw.coins);
        self.coins_hour.push(run.coins_hour);
        self.cells.push(run.raw.cells);
        self.cells_hour.push(run.cells_hour);
    }

    fn into_summary(self, tier: String) -> TierSummary {
        TierSummary {
            tier,
            sample_count: self.coins.samples.len(),
            waves: self.waves.spread(),
            coins: self.coins.spread(),
            coins_hour: self.coins_hour.spread(),
            cells: self.cells.spread(),
            cells_hour: self.cells_hour.spread(),
        }
    }
}

/// Enrich and aggregate one owner's snapshot in a single forward pass.
///
/// An empty snapshot is valid and produces empty outputs with all four
/// personal-best holders absent.
///
/// # Errors
///
/// Returns `RunRecordError` when any record violates the store's validation
/// contract (zero duration, zero waves, unrankable tier label).
pub fn aggregate(snapshot: OwnerSnapshot) -> Result<Aggregates, RunRecordError> {
    let OwnerSnapshot {
        owner,
        settings,
        runs: raw_runs,
    } = snapshot;

    let mut runs = Vec::with_capacity(raw_runs.len());
    for raw in raw_runs {
        raw.validate()?;
        runs.push(enrich(raw));
    }

    let mut best_coins = BestTracker::default();
    let mut best_cells = BestTracker::default();
    let mut best_coins_hour = BestTracker::default();
    let mut best_cells_hour = BestTracker::default();

    let mut avg_coins = Window::default();
    let mut avg_cells = Window::default();
    let mut avg_coins_hour = Window::default();
    let mut avg_cells_hour = Window::default();

    let mut tier_windows: HashMap<String, TierWindow> = HashMap::new();

    for (index, run) in runs.iter_mut().enumerate() {
        run.is_pb_coins = best_coins.observe(index, run.raw.coins);
        run.is_pb_cells = best_cells.observe(index, run.raw.cells);
        run.is_pb_coins_hour = best_coins_hour.observe(index, run.coins_hour);
        run.is_pb_cells_hour = best_cells_hour.observe(index, run.cells_hour);

        avg_coins.push(run.raw.coins);
        avg_cells.push(run.raw.cells);
        avg_coins_hour.push(run.coins_hour);
        avg_cells_hour.push(run.cells_hour);
        if avg_coins.is_full() {
            run.avg5_coins = avg_coins.mean();
            run.avg5_cells = avg_cells.mean();
            run.avg5_coins_hour = avg_coins_hour.mean();
            run.avg5_cells_hour = avg_cells_hour.mean();
        }

        tier_windows
            .entry(run.raw.tier.clone())
            .or_default()
            .push(run);
    }

    let mut tiers: Vec<TierSummary> = tier_windows
        .into_iter()
        .map(|(tier, window)| window.into_summary(tier))
        .collect();
    tiers.sort_by(|a, b| natural_cmp(&a.tier, &b.tier));

    let personal_bests = PersonalBests {
        coins: best_coins.index(),
        cells: best_cells.index(),
        coins_hour: best_coins_hour.index(),
        cells_hour: best_cells_hour.index(),
    };

    log::debug!(
        "aggregated {} runs across {} tiers for owner {owner}",
        runs.len(),
        tiers.len()
    );

    Ok(Aggregates {
        owner,
        settings,
        runs,
        personal_bests,
        tiers,
    })
}
