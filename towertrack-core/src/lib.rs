//! Towertrack Core
//!
//! Platform-agnostic run tracking for the idle game The Tower. The crate
//! turns one owner's chronologically ordered run records into enriched
//! per-run rates, personal-best flags, trailing 5-run averages, and
//! per-tier summaries, without UI or storage dependencies.
//!
//! The whole engine is pure and stateless between calls: hosts fetch a
//! snapshot through the [`store::RunStore`] seam (or hand one over
//! directly) and get back an [`pipeline::Aggregates`] value for their
//! presentation layer.

pub mod constants;
pub mod engine;
pub mod error;
pub mod format;
pub mod natsort;
pub mod numbers;
pub mod pipeline;
pub mod run;
pub mod settings;
pub mod store;

// Re-export commonly used types
pub use engine::TrackerEngine;
pub use error::RunRecordError;
pub use format::{format_game_number, hr_duration, parse_game_number};
pub use natsort::{natural_cmp, tier_rank};
pub use pipeline::{
    Aggregates, MetricSpread, OwnerSnapshot, PersonalBests, TierSummary, WINDOW_LEN, aggregate,
};
pub use run::{EnrichedRun, OwnerId, RawRun, RunId, enrich};
pub use settings::{TrackerSettings, near_best_cutoff};
pub use store::{MemoryRunStore, RunStore};
