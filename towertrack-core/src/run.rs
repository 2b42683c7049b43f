//! Run records and per-run rate enrichment.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::SECONDS_PER_HOUR;
use crate::error::RunRecordError;
use crate::natsort::tier_rank;

/// Opaque identifier of a single run, unique per owner.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RunId(pub u64);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of a run owner (one game account).
///
/// Tenant isolation happens in the store; the engine only threads the owner
/// through so hosts can correlate outputs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OwnerId(pub u64);

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single raw run record as supplied by the store.
///
/// Immutable once handed to the engine. Quantities use u128 because the
/// game reports coins well past 10^30, far beyond u64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRun {
    pub id: RunId,
    /// Date and time of the run; the sole chronological ordering key.
    pub date: DateTime<Utc>,
    /// Tier label, e.g. "T10". Ranked by the embedded number, not lexically.
    pub tier: String,
    /// End wave counter of the run.
    pub waves: u32,
    /// Duration of the run, specified in seconds.
    pub duration_secs: u32,
    /// Total coins of the run.
    pub coins: u128,
    /// Total cells of the run.
    pub cells: u128,
    /// Additional free-form notes, opaque to the engine.
    #[serde(default)]
    pub notes: String,
}

impl RawRun {
    /// Check the store-side validation contract.
    ///
    /// # Errors
    ///
    /// Returns `RunRecordError` when the duration or wave count is zero, or
    /// when the tier label carries no numeric rank.
    pub fn validate(&self) -> Result<(), RunRecordError> {
        if self.duration_secs == 0 {
            return Err(RunRecordError::ZeroDuration { id: self.id });
        }
        if self.waves == 0 {
            return Err(RunRecordError::ZeroWaves { id: self.id });
        }
        if tier_rank(&self.tier).is_none() {
            return Err(RunRecordError::UnrankedTier {
                id: self.id,
                label: self.tier.clone(),
            });
        }
        Ok(())
    }
}

/// A run record with derived rates and aggregation results attached.
///
/// Constructed fresh for every aggregation call and discarded afterwards;
/// nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedRun {
    pub raw: RawRun,
    /// Coins per hour, truncated toward zero.
    pub coins_hour: u128,
    /// Coins per cleared wave, truncated toward zero.
    pub coins_wave: u128,
    /// Cells per hour, truncated toward zero.
    pub cells_hour: u128,
    /// Cells per cleared wave, truncated toward zero.
    pub cells_wave: u128,
    /// True when this run topped the running coins maximum as it was played.
    pub is_pb_coins: bool,
    pub is_pb_cells: bool,
    pub is_pb_coins_hour: bool,
    pub is_pb_cells_hour: bool,
    /// Trailing 5-run mean of coins; stays 0 until four predecessors exist.
    pub avg5_coins: u128,
    pub avg5_cells: u128,
    pub avg5_coins_hour: u128,
    pub avg5_cells_hour: u128,
}

impl EnrichedRun {
    #[must_use]
    pub fn id(&self) -> RunId {
        self.raw.id
    }

    #[must_use]
    pub fn tier(&self) -> &str {
        &self.raw.tier
    }
}

/// Derive the per-hour and per-wave rates for a single raw run.
///
/// Per-hour rates divide by the real-valued hour count, expressed here as
/// `quantity * 3600 / duration_secs` so the intermediate ratio is never
/// pre-truncated; per-wave rates divide by the wave count. All four results
/// truncate toward zero.
///
/// The store contract guarantees `duration_secs >= 1` and `waves >= 1`
/// (see [`RawRun::validate`]); a zero value reaching this function is a
/// programming error and panics on division by zero rather than producing
/// a sentinel.
#[must_use]
pub fn enrich(raw: RawRun) -> EnrichedRun {
    let duration = u128::from(raw.duration_secs);
    let waves = u128::from(raw.waves);
    let coins_hour = raw.coins * SECONDS_PER_HOUR / duration;
    let coins_wave = raw.coins / waves;
    let cells_hour = raw.cells * SECONDS_PER_HOUR / duration;
    let cells_wave = raw.cells / waves;
    EnrichedRun {
        raw,
        coins_hour,
        coins_wave,
        cells_hour,
        cells_wave,
        is_pb_coins: false,
        is_pb_cells: false,
        is_pb_coins_hour: false,
        is_pb_cells_hour: false,
        avg5_coins: 0,
        avg5_cells: 0,
        avg5_coins_hour: 0,
        avg5_cells_hour: 0,
    }
}
