//! The in-memory movie store.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::movie::{Movie, MovieDraft};

/// The ordered in-memory movie collection plus its ID counter, behind one
/// coarse mutex.
///
/// Every operation takes the lock for its whole duration, and the guard
/// never crosses an `.await` — handlers call these methods from async code,
/// but the critical sections themselves are short and synchronous. Each
/// operation either fully succeeds or leaves the collection untouched.
///
/// Built by the composition root, shared as an `Arc<MovieStore>` handle.
pub struct MovieStore {
    inner: Mutex<Inner>,
}

struct Inner {
    movies: Vec<Movie>,
    next_id: u64,
}

impl MovieStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner { movies: Vec::new(), next_id: 1 }),
        }
    }

    /// Assigns the next sequential ID and appends the record.
    ///
    /// The counter only moves forward: an ID is never reused, even after
    /// the record it named is deleted.
    pub fn create(&self, draft: MovieDraft) -> Movie {
        let mut inner = self.lock();
        let movie = Movie {
            id: inner.next_id,
            title: draft.title,
            director: draft.director,
            year: draft.year,
            genre: draft.genre,
        };
        inner.next_id += 1;
        inner.movies.push(movie.clone());
        movie
    }

    /// The full collection in insertion order. Empty store, empty vec.
    pub fn list(&self) -> Vec<Movie> {
        self.lock().movies.clone()
    }

    pub fn get(&self, id: u64) -> Option<Movie> {
        self.lock().movies.iter().find(|m| m.id == id).cloned()
    }

    /// Overwrites the four mutable fields in place; the ID survives.
    /// Returns the updated record, or `None` if no record matches.
    pub fn update(&self, id: u64, draft: MovieDraft) -> Option<Movie> {
        let mut inner = self.lock();
        let movie = inner.movies.iter_mut().find(|m| m.id == id)?;
        movie.title = draft.title;
        movie.director = draft.director;
        movie.year = draft.year;
        movie.genre = draft.genre;
        Some(movie.clone())
    }

    /// Removes the record with the given ID, keeping the survivors'
    /// relative order. Returns whether anything was removed.
    pub fn remove(&self, id: u64) -> bool {
        let mut inner = self.lock();
        match inner.movies.iter().position(|m| m.id == id) {
            Some(idx) => {
                inner.movies.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.lock().movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Poison only means some thread panicked while holding the guard;
    // recover it rather than cascading the panic into every later request.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> MovieDraft {
        MovieDraft {
            title: title.to_owned(),
            director: "Villeneuve".to_owned(),
            year: 2021,
            genre: "Sci-Fi".to_owned(),
        }
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let store = MovieStore::new();
        assert_eq!(store.create(draft("a")).id, 1);
        assert_eq!(store.create(draft("b")).id, 2);
        assert_eq!(store.create(draft("c")).id, 3);
    }

    #[test]
    fn ids_are_never_reused_after_delete() {
        let store = MovieStore::new();
        let first = store.create(draft("a"));
        assert!(store.remove(first.id));
        let second = store.create(draft("b"));
        assert!(second.id > first.id);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = MovieStore::new();
        store.create(draft("a"));
        store.create(draft("b"));
        store.create(draft("c"));
        let titles: Vec<_> = store.list().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[test]
    fn get_finds_by_id() {
        let store = MovieStore::new();
        let created = store.create(draft("a"));
        assert_eq!(store.get(created.id), Some(created));
        assert_eq!(store.get(0), None);
        assert_eq!(store.get(99), None);
    }

    #[test]
    fn update_replaces_fields_and_keeps_id() {
        let store = MovieStore::new();
        let created = store.create(draft("Dune"));
        let updated = store
            .update(
                created.id,
                MovieDraft {
                    title: "Dune Part Two".to_owned(),
                    director: "Villeneuve".to_owned(),
                    year: 2024,
                    genre: "Sci-Fi".to_owned(),
                },
            )
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Dune Part Two");
        assert_eq!(updated.year, 2024);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_on_missing_id_changes_nothing() {
        let store = MovieStore::new();
        store.create(draft("a"));
        let before = store.list();
        assert!(store.update(42, draft("b")).is_none());
        assert_eq!(store.list(), before);
    }

    #[test]
    fn remove_keeps_relative_order_of_survivors() {
        let store = MovieStore::new();
        store.create(draft("a"));
        let middle = store.create(draft("b"));
        store.create(draft("c"));

        assert!(store.remove(middle.id));
        let titles: Vec<_> = store.list().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, ["a", "c"]);

        // Same ID again: already gone.
        assert!(!store.remove(middle.id));
        assert_eq!(store.len(), 2);
    }
}
