//! High-level facade binding a store to the aggregation pipeline.

use crate::pipeline::{Aggregates, aggregate};
use crate::run::OwnerId;
use crate::store::RunStore;

/// Tracker facade for hosts: fetches an owner's snapshot from the store and
/// runs one aggregation pass over it.
///
/// The engine holds no per-owner state, so one instance can serve requests
/// for different owners back to back (or concurrently behind the host's
/// own sharing).
#[derive(Debug, Clone)]
pub struct TrackerEngine<S>
where
    S: RunStore,
{
    store: S,
}

impl<S> TrackerEngine<S>
where
    S: RunStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Produce the overview aggregates for one owner.
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails to produce the snapshot or a
    /// record violates the validation contract.
    pub fn overview(&self, owner: OwnerId) -> anyhow::Result<Aggregates> {
        let snapshot = self.store.snapshot_for_owner(owner)?;
        log::debug!("fetched {} runs for owner {owner}", snapshot.runs.len());
        Ok(aggregate(snapshot)?)
    }
}
