//! People: one side of the bipartite credit graph.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{MovieId, PersonId};

/// A person, with the set of movies they are credited in.
///
/// Records are built up during graph construction and treated as immutable
/// once the store is frozen.
///
/// # Example
///
/// ```
/// use costar_core::{Person, PersonId};
///
/// let person = Person::new(PersonId::new(102), "Kevin Bacon").with_birth(1958);
/// assert_eq!(person.name, "Kevin Bacon");
/// assert_eq!(person.birth, Some(1958));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// The person's unique id.
    pub id: PersonId,
    /// Display name. Not unique; the store's name index maps names to id sets.
    pub name: String,
    /// Birth year, when the dataset has one.
    pub birth: Option<u32>,
    /// Movies this person is credited in.
    pub movies: HashSet<MovieId>,
}

impl Person {
    /// Create a new person with no credits.
    #[must_use]
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), birth: None, movies: HashSet::new() }
    }

    /// Set the birth year.
    #[must_use]
    pub fn with_birth(mut self, birth: u32) -> Self {
        self.birth = Some(birth);
        self
    }

    /// Check whether this person is credited in the given movie.
    #[inline]
    #[must_use]
    pub fn starred_in(&self, movie: MovieId) -> bool {
        self.movies.contains(&movie)
    }
}
