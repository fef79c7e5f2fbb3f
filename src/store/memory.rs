//! In-memory record store.
//!
//! [`MemoryStore`] is a clonable handle over a shared record table. Every
//! clone sees the same records, so the router, the CLI, and tests can all
//! hold handles to one collection and reset it deterministically.

use std::sync::{Arc, RwLock};

use super::types::{Dog, NewDog};

/// Clonable handle to the shared dog record table.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<StoreInner>>,
}

#[derive(Debug, Default)]
struct StoreInner {
    /// Records in creation order.
    dogs: Vec<Dog>,
    /// Last id handed out; never rewound except by reset().
    next_id: i64,
}

impl MemoryStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, assigning the next unique id.
    pub fn create(&self, fields: NewDog) -> Dog {
        let mut inner = self.inner.write().unwrap();
        let id = inner.next_id + 1;
        inner.next_id = id;

        let dog = Dog::from_new(id, fields);
        inner.dogs.push(dog.clone());
        dog
    }

    /// Snapshot of all records in creation order.
    pub fn list_all(&self) -> Vec<Dog> {
        self.inner.read().unwrap().dogs.clone()
    }

    /// Look up a record by id. Absence is a value, not an error.
    pub fn find_by_id(&self, id: i64) -> Option<Dog> {
        self.inner
            .read()
            .unwrap()
            .dogs
            .iter()
            .find(|d| d.id == id)
            .cloned()
    }

    /// Remove a record by id, returning it if present.
    pub fn delete_by_id(&self, id: i64) -> Option<Dog> {
        let mut inner = self.inner.write().unwrap();
        let pos = inner.dogs.iter().position(|d| d.id == id)?;
        Some(inner.dogs.remove(pos))
    }

    /// Clear all records and rewind the id counter.
    pub fn reset(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.dogs.clear();
        inner.next_id = 0;
    }

    /// Bulk-insert entries under a single lock; returns the count inserted.
    pub fn seed(&self, entries: &[NewDog]) -> usize {
        let mut inner = self.inner.write().unwrap();
        for entry in entries {
            let id = inner.next_id + 1;
            inner.next_id = id;
            inner.dogs.push(Dog::from_new(id, entry.clone()));
        }
        entries.len()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().dogs.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn new_dog(name: &str) -> NewDog {
        NewDog {
            breed: "Beagle".to_string(),
            name: name.to_string(),
            color: "tricolor".to_string(),
            description: format!("{} is a friendly beagle.", name),
        }
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let store = MemoryStore::new();

        let first = store.create(new_dog("Daisy"));
        let second = store.create(new_dog("Rex"));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn list_all_preserves_creation_order() {
        let store = MemoryStore::new();
        store.create(new_dog("Daisy"));
        store.create(new_dog("Rex"));
        store.create(new_dog("Luna"));

        let names: Vec<String> = store.list_all().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Daisy", "Rex", "Luna"]);
    }

    #[test]
    fn find_by_id_returns_none_for_absent() {
        let store = MemoryStore::new();
        store.create(new_dog("Daisy"));

        assert!(store.find_by_id(1).is_some());
        assert!(store.find_by_id(9999).is_none());
    }

    #[test]
    fn delete_removes_the_record() {
        let store = MemoryStore::new();
        let dog = store.create(new_dog("Daisy"));

        let removed = store.delete_by_id(dog.id).unwrap();
        assert_eq!(removed, dog);
        assert!(store.find_by_id(dog.id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn second_delete_of_same_id_is_none() {
        let store = MemoryStore::new();
        let dog = store.create(new_dog("Daisy"));

        assert!(store.delete_by_id(dog.id).is_some());
        assert!(store.delete_by_id(dog.id).is_none());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let first = store.create(new_dog("Daisy"));
        store.delete_by_id(first.id);

        let second = store.create(new_dog("Rex"));
        assert_eq!(second.id, 2);
    }

    #[test]
    fn reset_clears_records_and_rewinds_ids() {
        let store = MemoryStore::new();
        store.create(new_dog("Daisy"));
        store.create(new_dog("Rex"));

        store.reset();
        assert!(store.is_empty());

        let dog = store.create(new_dog("Luna"));
        assert_eq!(dog.id, 1);
    }

    #[test]
    fn seed_inserts_in_order() {
        let store = MemoryStore::new();
        let entries = vec![new_dog("Daisy"), new_dog("Rex")];

        assert_eq!(store.seed(&entries), 2);
        assert_eq!(store.find_by_id(1).unwrap().name, "Daisy");
        assert_eq!(store.find_by_id(2).unwrap().name, "Rex");
    }

    #[test]
    fn clones_share_the_same_records() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.create(new_dog("Daisy"));
        assert_eq!(handle.len(), 1);

        handle.delete_by_id(1);
        assert!(store.is_empty());
    }
}
