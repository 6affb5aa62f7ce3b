//! # Store Module
//!
//! The data accessor behind the resource handlers. It owns every pet record and
//! exposes the five operations the handlers need: lookup by id, lookup by
//! status, lookup by tags, upsert and delete.
//!
//! ## Ownership
//!
//! The store is an explicitly constructed object handed to
//! [`crate::handlers::register_all`] as an `Arc<dyn PetRepository>`. Handlers
//! receive cloned records and never hold references into the store across
//! calls, so every test can build a fresh instance.
//!
//! ## Concurrency
//!
//! `may_minihttp` can serve several connections at once. Implementations must
//! serialize mutations; [`InMemoryPetStore`] does this with an `RwLock` so
//! readers still proceed in parallel.
//!
//! ## Failure Model
//!
//! None of the operations fail. Absence is expressed with `Option` or an empty
//! `Vec`, and deleting a missing record is a no-op.

mod memory;

pub use memory::InMemoryPetStore;

use crate::pet::{Pet, PetId};

/// CRUD access to the pet collection.
pub trait PetRepository: Send + Sync + 'static {
    /// Look up a single record.
    fn get(&self, id: PetId) -> Option<Pet>;

    /// Records whose status is named in the comma-separated `status_csv`.
    ///
    /// Unrecognised status names match nothing. Records without a status never
    /// match. Results are ordered by id.
    fn find_by_status(&self, status_csv: &str) -> Vec<Pet>;

    /// Records carrying at least one of the comma-separated `tags_csv`, ordered by id.
    fn find_by_tags(&self, tags_csv: &str) -> Vec<Pet>;

    /// Insert the record, replacing any existing record with the same id.
    fn upsert(&self, pet: Pet);

    /// Remove the record if present.
    fn delete(&self, id: PetId);

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split a CSV parameter into trimmed, non-empty values.
pub(crate) fn split_csv(csv: &str) -> impl Iterator<Item = &str> {
    csv.split(',').map(str::trim).filter(|s| !s.is_empty())
}
