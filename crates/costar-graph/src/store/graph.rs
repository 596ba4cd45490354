//! The graph store and its builder.

use std::collections::{HashMap, HashSet};

use costar_core::{Movie, MovieId, Person, PersonId};

/// The in-memory bipartite credit graph.
///
/// Built once by [`GraphStoreBuilder`] and read-only afterwards. A shared
/// reference is all a search needs, so independent searches can run
/// concurrently on separate threads with no synchronization.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Person records keyed by id.
    people: HashMap<PersonId, Person>,
    /// Movie records keyed by id.
    movies: HashMap<MovieId, Movie>,
    /// Lowercase name to the ids of every person carrying it.
    names: HashMap<String, HashSet<PersonId>>,
}

impl GraphStore {
    /// Create a builder for a new store.
    #[must_use]
    pub fn builder() -> GraphStoreBuilder {
        GraphStoreBuilder::default()
    }

    /// Look up a person by id.
    #[inline]
    #[must_use]
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.get(&id)
    }

    /// Look up a movie by id.
    #[inline]
    #[must_use]
    pub fn movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    /// Number of people in the store.
    #[must_use]
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Number of movies in the store.
    #[must_use]
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Look up the ids of every person with the given name.
    ///
    /// Matching is case-insensitive. Returns `None` when no person carries
    /// the name; ambiguity (more than one id) is the caller's to resolve.
    #[must_use]
    pub fn person_ids_for_name(&self, name: &str) -> Option<&HashSet<PersonId>> {
        self.names.get(&name.to_lowercase())
    }

    /// Enumerate the co-star neighborhood of a person.
    ///
    /// For every movie the person is credited in, yields a
    /// `(movie, co_star)` pair for every person credited in that movie.
    /// The subject appears in its own neighborhood through each of its
    /// movies; the search's explored-set check makes those entries inert,
    /// so they are not filtered here.
    ///
    /// Callers are expected to pass ids validated against the store; an
    /// unknown id yields an empty set.
    #[must_use]
    pub fn neighbors_of(&self, person: PersonId) -> HashSet<(MovieId, PersonId)> {
        let mut neighbors = HashSet::new();
        let Some(record) = self.people.get(&person) else {
            return neighbors;
        };
        for &movie_id in &record.movies {
            if let Some(movie) = self.movies.get(&movie_id) {
                for &star in &movie.stars {
                    neighbors.insert((movie_id, star));
                }
            }
        }
        neighbors
    }
}

/// Builder that assembles a [`GraphStore`] and freezes it.
///
/// Credits are linked at [`build`](Self::build) time, after all records are
/// in, so insertion order does not matter. A credit whose person or movie
/// is missing from the tables is silently dropped - the load tolerance
/// policy for datasets with dangling references.
#[derive(Debug, Default)]
pub struct GraphStoreBuilder {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    credits: Vec<(PersonId, MovieId)>,
}

impl GraphStoreBuilder {
    /// Add a person record. A record with the same id replaces the old one.
    pub fn add_person(&mut self, person: Person) {
        self.people.insert(person.id, person);
    }

    /// Add a movie record. A record with the same id replaces the old one.
    pub fn add_movie(&mut self, movie: Movie) {
        self.movies.insert(movie.id, movie);
    }

    /// Record a credit: `person` starred in `movie`.
    ///
    /// The pair is only linked at build time, and only if both ids resolve.
    pub fn add_star(&mut self, person: PersonId, movie: MovieId) {
        self.credits.push((person, movie));
    }

    /// Link all credits, build the name index, and freeze the store.
    ///
    /// The symmetric edge invariant (`person` in `movie.stars` iff `movie`
    /// in `person.movies`) holds by construction: both sides of each credit
    /// are written together or not at all.
    #[must_use]
    pub fn build(mut self) -> GraphStore {
        let mut dangling = 0usize;
        for (person_id, movie_id) in self.credits {
            match (self.people.get_mut(&person_id), self.movies.get_mut(&movie_id)) {
                (Some(person), Some(movie)) => {
                    person.movies.insert(movie_id);
                    movie.stars.insert(person_id);
                }
                _ => dangling += 1,
            }
        }
        if dangling > 0 {
            tracing::debug!(dangling, "dropped credits with unresolved ids");
        }

        let mut names: HashMap<String, HashSet<PersonId>> = HashMap::new();
        for person in self.people.values() {
            names.entry(person.name.to_lowercase()).or_default().insert(person.id);
        }

        GraphStore { people: self.people, movies: self.movies, names }
    }
}
