//! Movies: the other side of the bipartite credit graph.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{MovieId, PersonId};

/// A movie, with the set of people credited in it.
///
/// Records are built up during graph construction and treated as immutable
/// once the store is frozen.
///
/// # Example
///
/// ```
/// use costar_core::{Movie, MovieId};
///
/// let movie = Movie::new(MovieId::new(104257), "A Few Good Men").with_year(1992);
/// assert_eq!(movie.title, "A Few Good Men");
/// assert_eq!(movie.year, Some(1992));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// The movie's unique id.
    pub id: MovieId,
    /// Release title.
    pub title: String,
    /// Release year, when the dataset has one.
    pub year: Option<u32>,
    /// People credited in this movie.
    pub stars: HashSet<PersonId>,
}

impl Movie {
    /// Create a new movie with no credits.
    #[must_use]
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self { id, title: title.into(), year: None, stars: HashSet::new() }
    }

    /// Set the release year.
    #[must_use]
    pub fn with_year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Check whether the given person is credited in this movie.
    #[inline]
    #[must_use]
    pub fn has_star(&self, person: PersonId) -> bool {
        self.stars.contains(&person)
    }
}
