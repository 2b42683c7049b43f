//! Contract-violation errors raised by the aggregation engine.

use thiserror::Error;

use crate::run::RunId;

/// Errors raised when a run record violates the store's validation contract.
///
/// These are fatal to the aggregation call and propagated unchanged; the
/// engine never repairs or defaults a bad record. An empty snapshot is not
/// an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RunRecordError {
    #[error("run {id} has a zero duration")]
    ZeroDuration { id: RunId },
    #[error("run {id} has a zero wave count")]
    ZeroWaves { id: RunId },
    #[error("run {id} tier label {label:?} carries no numeric rank")]
    UnrankedTier { id: RunId, label: String },
}
