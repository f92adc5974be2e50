//! Append-only memoisation of closure records.
//!
//! # Concurrency
//!
//! - `slots`: `RwLock` guarding the key → slot map. Held only long enough to find or insert a
//!   slot, never while a closure is being computed.
//! - Each slot is a `OnceLock`. The first caller to reach `get_or_init` runs the computation;
//!   concurrent callers for the same key block on that slot and observe the same record.
//!   Callers for other keys use other slots and proceed independently.
//!
//! # Invariants
//!
//! - At most one computation per key (see `invariants::test_single_computation_under_contention`).
//! - Entries are never evicted or replaced.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::closure::ClosureRecord;
use crate::name::TypeName;

type Slot = Arc<OnceLock<Arc<ClosureRecord>>>;

/// Snapshot of cache occupancy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
	/// Types with a computed record.
	pub entries: usize,
	/// Computations executed since the cache was created.
	pub computations: usize,
}

/// Concurrent type → closure map with compute-once semantics.
#[derive(Default)]
pub struct ClosureCache {
	slots: RwLock<FxHashMap<TypeName, Slot>>,
	computations: AtomicUsize,
}

impl ClosureCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the record for `id`, running `compute` only if no record exists yet.
	///
	/// Under concurrent first access for the same `id`, exactly one `compute` runs and every
	/// caller receives that record. `compute` must not re-enter the cache for the same `id`.
	pub fn get_or_compute<F>(&self, id: &TypeName, compute: F) -> Arc<ClosureRecord>
	where
		F: FnOnce(&TypeName) -> ClosureRecord,
	{
		let slot = self.slot(id);
		Arc::clone(slot.get_or_init(|| {
			self.computations.fetch_add(1, Ordering::Relaxed);
			Arc::new(compute(id))
		}))
	}

	/// Returns the record for `id` if it has already been computed.
	pub fn get(&self, id: &str) -> Option<Arc<ClosureRecord>> {
		self.slots.read().get(id)?.get().cloned()
	}

	pub fn contains(&self, id: &str) -> bool {
		self.get(id).is_some()
	}

	pub fn stats(&self) -> CacheStats {
		let entries = self.slots.read().values().filter(|slot| slot.get().is_some()).count();
		CacheStats {
			entries,
			computations: self.computations.load(Ordering::Relaxed),
		}
	}

	fn slot(&self, id: &TypeName) -> Slot {
		if let Some(slot) = self.slots.read().get(id) {
			return Arc::clone(slot);
		}
		// Another caller may have inserted between the two locks; `entry` keeps the first slot.
		Arc::clone(self.slots.write().entry(id.clone()).or_default())
	}
}

impl std::fmt::Debug for ClosureCache {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ClosureCache").field("stats", &self.stats()).finish()
	}
}
