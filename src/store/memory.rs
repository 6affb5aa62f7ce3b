use std::collections::{BTreeMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use super::{split_csv, PetRepository};
use crate::pet::{Category, Pet, PetId, PetStatus};

/// In-memory pet collection keyed by id.
///
/// A `BTreeMap` keeps query results in id order. A poisoned lock is recovered
/// rather than propagated: every mutation replaces a whole record, so a panic
/// mid-operation cannot leave a half-written entry behind.
///
/// # Example
///
/// ```
/// use petstore::pet::{Pet, PetStatus};
/// use petstore::store::{InMemoryPetStore, PetRepository};
///
/// let store = InMemoryPetStore::new();
/// store.upsert(Pet::new(1, "Rex", PetStatus::Available));
/// assert_eq!(store.get(1).map(|p| p.name), Some("Rex".to_string()));
/// store.delete(1);
/// assert!(store.get(1).is_none());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryPetStore {
    pets: RwLock<BTreeMap<PetId, Pet>>,
}

impl InMemoryPetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `pets`. Later duplicates win.
    pub fn with_pets(pets: impl IntoIterator<Item = Pet>) -> Self {
        let store = Self::new();
        for pet in pets {
            store.upsert(pet);
        }
        store
    }

    /// Build a store holding the demo catalogue: cats, dogs, lions and a
    /// rabbit spread across every status and tagged `tag1`..`tag4`.
    pub fn with_demo_data() -> Self {
        Self::with_pets(demo_pets())
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<PetId, Pet>> {
        self.pets.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<PetId, Pet>> {
        self.pets.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PetRepository for InMemoryPetStore {
    fn get(&self, id: PetId) -> Option<Pet> {
        self.read().get(&id).cloned()
    }

    fn find_by_status(&self, status_csv: &str) -> Vec<Pet> {
        let wanted: HashSet<PetStatus> = split_csv(status_csv)
            .filter_map(|s| s.parse().ok())
            .collect();
        if wanted.is_empty() {
            return Vec::new();
        }
        self.read()
            .values()
            .filter(|pet| pet.status.is_some_and(|s| wanted.contains(&s)))
            .cloned()
            .collect()
    }

    fn find_by_tags(&self, tags_csv: &str) -> Vec<Pet> {
        let wanted: Vec<&str> = split_csv(tags_csv).collect();
        if wanted.is_empty() {
            return Vec::new();
        }
        self.read()
            .values()
            .filter(|pet| pet.has_any_tag(&wanted))
            .cloned()
            .collect()
    }

    fn upsert(&self, pet: Pet) {
        let id = pet.id;
        let replaced = self.write().insert(id, pet).is_some();
        debug!(pet_id = id, replaced, "Pet stored");
    }

    fn delete(&self, id: PetId) {
        let removed = self.write().remove(&id).is_some();
        debug!(pet_id = id, removed, "Pet deleted");
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}

fn category(id: i64, name: &str) -> Category {
    Category::Detailed {
        id: Some(id),
        name: Some(name.to_string()),
    }
}

fn demo_pets() -> Vec<Pet> {
    use PetStatus::{Available, Pending, Sold};

    let dogs = category(1, "Dogs");
    let cats = category(2, "Cats");
    let rabbits = category(3, "Rabbits");
    let lions = category(4, "Lions");

    vec![
        Pet::new(1, "Cat 1", Available)
            .with_category(cats.clone())
            .with_tags(["tag1", "tag2"]),
        Pet::new(2, "Cat 2", Available)
            .with_category(cats.clone())
            .with_tags(["tag2", "tag3"]),
        Pet::new(3, "Cat 3", Pending)
            .with_category(cats)
            .with_tags(["tag3", "tag4"]),
        Pet::new(4, "Dog 1", Available)
            .with_category(dogs.clone())
            .with_tags(["tag1", "tag2"]),
        Pet::new(5, "Dog 2", Sold)
            .with_category(dogs.clone())
            .with_tags(["tag2", "tag3"]),
        Pet::new(6, "Dog 3", Pending)
            .with_category(dogs)
            .with_tags(["tag3", "tag4"]),
        Pet::new(7, "Lion 1", Available)
            .with_category(lions.clone())
            .with_tags(["tag1", "tag2"]),
        Pet::new(8, "Lion 2", Available)
            .with_category(lions.clone())
            .with_tags(["tag2", "tag3"]),
        Pet::new(9, "Lion 3", Available)
            .with_category(lions)
            .with_tags(["tag3", "tag4"]),
        Pet::new(10, "Rabbit 1", Available)
            .with_category(rabbits)
            .with_tags(["tag3", "tag4"]),
    ]
}
