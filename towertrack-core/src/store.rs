//! Storage seam between the aggregation engine and its host application.
//!
//! Persistence is the host's job. The engine only needs one thing from it:
//! a chronologically sorted snapshot of a single owner's runs and settings.

use std::collections::HashMap;
use std::convert::Infallible;

use crate::pipeline::OwnerSnapshot;
use crate::run::{OwnerId, RawRun, RunId};
use crate::settings::TrackerSettings;

/// Trait for abstracting run persistence.
/// Platform-specific implementations should provide this.
pub trait RunStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch one owner's snapshot: settings plus runs sorted ascending by
    /// date.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot produce the snapshot.
    fn snapshot_for_owner(&self, owner: OwnerId) -> Result<OwnerSnapshot, Self::Error>;
}

/// In-memory [`RunStore`] for tests and embedding hosts without real
/// persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryRunStore {
    settings: HashMap<OwnerId, TrackerSettings>,
    runs: HashMap<OwnerId, Vec<RawRun>>,
}

impl MemoryRunStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a run for `owner`, matched by id.
    pub fn upsert_run(&mut self, owner: OwnerId, run: RawRun) {
        let runs = self.runs.entry(owner).or_default();
        match runs.iter_mut().find(|existing| existing.id == run.id) {
            Some(slot) => *slot = run,
            None => runs.push(run),
        }
    }

    /// Remove a run; returns true when a record was actually deleted.
    pub fn remove_run(&mut self, owner: OwnerId, id: RunId) -> bool {
        let Some(runs) = self.runs.get_mut(&owner) else {
            return false;
        };
        let before = runs.len();
        runs.retain(|run| run.id != id);
        runs.len() != before
    }

    /// Replace the owner's tracker settings.
    pub fn set_settings(&mut self, owner: OwnerId, settings: TrackerSettings) {
        self.settings.insert(owner, settings);
    }

    /// Number of stored runs for `owner`.
    #[must_use]
    pub fn run_count(&self, owner: OwnerId) -> usize {
        self.runs.get(&owner).map_or(0, Vec::len)
    }
}

impl RunStore for MemoryRunStore {
    type Error = Infallible;

    fn snapshot_for_owner(&self, owner: OwnerId) -> Result<OwnerSnapshot, Infallible> {
        let mut runs = self.runs.get(&owner).cloned().unwrap_or_default();
        runs.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(OwnerSnapshot {
            owner,
            settings: self.settings.get(&owner).copied().unwrap_or_default(),
            runs,
        })
    }
}
