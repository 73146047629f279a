// src/repositories/memory.rs
//
// Generic in-memory keyed store shared by all entity repositories
//
// PRINCIPLES:
// - One RwLock per store: id assignment and insert happen under the same write guard
// - Callers get clones, never references into the map
// - Ids are monotonic and never reused, even after removal

use log::debug;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{AppError, AppResult};

/// An entity the store can assign an identifier to
pub trait StoredEntity: Clone + Send + Sync + 'static {
    /// Lower-case name used in error messages ("film", "user", ...)
    const KIND: &'static str;

    fn id(&self) -> Option<i64>;

    fn assign_id(&mut self, id: i64);
}

#[derive(Debug)]
struct StoreState<T> {
    entries: BTreeMap<i64, T>,
    /// Highest id ever handed out
    high_water: i64,
}

/// Keyed collection owning all entities of one type
#[derive(Debug)]
pub struct InMemoryStore<T> {
    state: RwLock<StoreState<T>>,
}

impl<T: StoredEntity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoredEntity> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                entries: BTreeMap::new(),
                high_water: 0,
            }),
        }
    }

    /// Snapshot of every entity, in id order
    pub fn find_all(&self) -> AppResult<Vec<T>> {
        Ok(self.read()?.entries.values().cloned().collect())
    }

    pub fn find(&self, id: i64) -> AppResult<Option<T>> {
        Ok(self.read()?.entries.get(&id).cloned())
    }

    /// Non-positive ids are never assigned, so they are reported as missing too
    pub fn get_by_id(&self, id: i64) -> AppResult<T> {
        if id <= 0 {
            return Err(AppError::not_found(T::KIND, id));
        }
        self.find(id)?.ok_or_else(|| AppError::not_found(T::KIND, id))
    }

    /// Insert a new entity. It must not carry an id yet.
    pub fn add(&self, entity: T) -> AppResult<T> {
        Self::ensure_new(&entity)?;
        let mut state = self.write()?;
        Ok(Self::insert_new(&mut state, entity))
    }

    /// Insert a new entity unless a stored one matches `conflicts`.
    /// The scan and the insert share one write guard. `None` means a clash.
    pub fn add_unless<F>(&self, entity: T, conflicts: F) -> AppResult<Option<T>>
    where
        F: Fn(&T) -> bool,
    {
        Self::ensure_new(&entity)?;
        let mut state = self.write()?;
        if state.entries.values().any(conflicts) {
            debug!("{} rejected, conflicting entry exists", T::KIND);
            return Ok(None);
        }
        Ok(Some(Self::insert_new(&mut state, entity)))
    }

    /// Overwrite by id. Existence is the caller's concern.
    pub fn update(&self, entity: T) -> AppResult<T> {
        let id = Self::require_id(&entity)?;
        self.write()?.entries.insert(id, entity.clone());
        debug!("{} {} overwritten", T::KIND, id);

        Ok(entity)
    }

    /// Overwrite by id unless a stored entry matches `conflicts`, checked under
    /// the same write guard. The predicate also sees the entry being replaced.
    pub fn update_unless<F>(&self, entity: T, conflicts: F) -> AppResult<Option<T>>
    where
        F: Fn(&T) -> bool,
    {
        let id = Self::require_id(&entity)?;
        let mut state = self.write()?;
        if state.entries.values().any(conflicts) {
            debug!("{} {} not overwritten, conflicting entry exists", T::KIND, id);
            return Ok(None);
        }
        state.entries.insert(id, entity.clone());
        debug!("{} {} overwritten", T::KIND, id);

        Ok(Some(entity))
    }

    pub fn remove(&self, id: i64) -> AppResult<Option<T>> {
        let removed = self.write()?.entries.remove(&id);
        if removed.is_some() {
            debug!("{} {} removed", T::KIND, id);
        }
        Ok(removed)
    }

    fn ensure_new(entity: &T) -> AppResult<()> {
        match entity.id() {
            Some(id) => Err(AppError::InvalidArgument(format!(
                "{} must not have an id on creation, got {}",
                T::KIND,
                id
            ))),
            None => Ok(()),
        }
    }

    fn require_id(entity: &T) -> AppResult<i64> {
        entity.id().ok_or_else(|| {
            AppError::InvalidArgument(format!("{} id is required on update", T::KIND))
        })
    }

    /// Assign the next id and store. Caller holds the write guard.
    fn insert_new(state: &mut StoreState<T>, mut entity: T) -> T {
        let current_max = state.entries.keys().next_back().copied().unwrap_or(0);
        let id = current_max.max(state.high_water) + 1;
        state.high_water = id;

        entity.assign_id(id);
        state.entries.insert(id, entity.clone());
        debug!("{} stored with id {}", T::KIND, id);
        entity
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, StoreState<T>>> {
        self.state
            .read()
            .map_err(|_| AppError::Storage(format!("{} store lock poisoned", T::KIND)))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, StoreState<T>>> {
        self.state
            .write()
            .map_err(|_| AppError::Storage(format!("{} store lock poisoned", T::KIND)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: Option<i64>,
        text: &'static str,
    }

    impl StoredEntity for Note {
        const KIND: &'static str = "note";

        fn id(&self) -> Option<i64> {
            self.id
        }

        fn assign_id(&mut self, id: i64) {
            self.id = Some(id);
        }
    }

    fn note(text: &'static str) -> Note {
        Note { id: None, text }
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let store = InMemoryStore::new();
        let ids: Vec<i64> = ["a", "b", "c"]
            .into_iter()
            .map(|text| store.add(note(text)).unwrap().id.unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_rejects_preassigned_id() {
        let store = InMemoryStore::new();
        let err = store.add(Note { id: Some(5), text: "x" }).unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert!(store.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_update_requires_id() {
        let store = InMemoryStore::new();
        let err = store.update(note("x")).unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[test]
    fn test_update_overwrites() {
        let store = InMemoryStore::new();
        let mut stored = store.add(note("before")).unwrap();
        stored.text = "after";
        store.update(stored).unwrap();
        assert_eq!(store.get_by_id(1).unwrap().text, "after");
    }

    #[test]
    fn test_get_by_id_not_found() {
        let store: InMemoryStore<Note> = InMemoryStore::new();
        store.add(note("a")).unwrap();
        for id in [0, -1, 2] {
            let err = store.get_by_id(id).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NotFound);
            assert_eq!(err.to_string(), format!("note with id {} not found", id));
        }
    }

    #[test]
    fn test_removed_ids_are_not_reused() {
        let store = InMemoryStore::new();
        store.add(note("a")).unwrap();
        let second = store.add(note("b")).unwrap();
        store.remove(second.id.unwrap()).unwrap();

        let third = store.add(note("c")).unwrap();
        assert_eq!(third.id, Some(3));
    }

    #[test]
    fn test_find_all_is_a_snapshot() {
        let store = InMemoryStore::new();
        store.add(note("a")).unwrap();
        let mut snapshot = store.find_all().unwrap();
        snapshot[0].text = "changed";
        assert_eq!(store.get_by_id(1).unwrap().text, "a");
    }

    #[test]
    fn test_add_unless_skips_on_conflict() {
        let store = InMemoryStore::new();
        store.add(note("taken")).unwrap();

        let clash = store
            .add_unless(note("taken"), |existing| existing.text == "taken")
            .unwrap();
        assert!(clash.is_none());

        let fresh = store
            .add_unless(note("free"), |existing| existing.text == "free")
            .unwrap();
        assert_eq!(fresh.unwrap().id, Some(2));
        assert_eq!(store.find_all().unwrap().len(), 2);
    }

    #[test]
    fn test_update_unless_skips_on_conflict() {
        let store = InMemoryStore::new();
        let mut first = store.add(note("a")).unwrap();
        store.add(note("b")).unwrap();

        first.text = "b";
        let clash = store
            .update_unless(first.clone(), |existing| {
                existing.id != first.id && existing.text == first.text
            })
            .unwrap();
        assert!(clash.is_none());
        assert_eq!(store.get_by_id(1).unwrap().text, "a");

        first.text = "c";
        let updated = store
            .update_unless(first.clone(), |existing| {
                existing.id != first.id && existing.text == first.text
            })
            .unwrap();
        assert_eq!(updated, Some(first));
        assert_eq!(store.get_by_id(1).unwrap().text, "c");
    }

    #[test]
    fn test_add_unless_is_atomic_across_threads() {
        use std::sync::Barrier;

        for _ in 0..200 {
            let store = InMemoryStore::new();
            let barrier = Barrier::new(2);

            std::thread::scope(|scope| {
                for _ in 0..2 {
                    scope.spawn(|| {
                        barrier.wait();
                        store
                            .add_unless(note("only"), |existing| existing.text == "only")
                            .unwrap();
                    });
                }
            });

            assert_eq!(store.find_all().unwrap().len(), 1);
        }
    }
}
