//! Frontier-managed shortest-path search.
//!
//! This module is the algorithmic heart of `costar`: a breadth-first
//! search over the co-star relation that returns the minimum-length chain
//! of shared-movie credits between two people.
//!
//! # Overview
//!
//! - [`ShortestPath`] - the BFS engine with an early goal test
//! - [`Frontier`] - discovered-but-unexpanded states, FIFO or LIFO order,
//!   with O(1) membership checks
//! - [`NodeArena`] / [`SearchNode`] - parent-linked search tree storage
//! - [`PathResult`] / [`PathStep`] - the reconstructed chain of credits
//!
//! # Correctness
//!
//! Edges are unweighted and discovery is strictly FIFO, so the first time
//! the target shows up as a neighbor of an expanded node it is at minimum
//! edge-distance from the source - the standard BFS guarantee. Testing
//! each neighbor before it is enqueued can detect the goal up to a full
//! layer earlier than testing at dequeue time, and cannot change the
//! guarantee: a node that would discover the target later cannot yield a
//! shorter path.
//!
//! # Example
//!
//! ```ignore
//! use costar_graph::traversal::ShortestPath;
//!
//! match ShortestPath::new(source, target).find(&store) {
//!     Some(path) => println!("{} degrees of separation", path.degrees),
//!     None => println!("not connected"),
//! }
//! ```

mod frontier;
mod node;
mod shortest_path;


pub use frontier::{Discipline, Frontier};
pub use node::{NodeArena, NodeHandle, SearchNode};
pub use shortest_path::{PathResult, ShortestPath};

use serde::{Deserialize, Serialize};

use costar_core::{MovieId, PersonId};

/// One step in a chain of credits: the movie followed and the person
/// reached through it.
///
/// A full rendered chain prepends the source person, which no step
/// carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathStep {
    /// The shared movie followed for this step.
    pub movie: MovieId,
    /// The person reached through it.
    pub person: PersonId,
}

impl PathStep {
    /// Create a new step.
    #[inline]
    #[must_use]
    pub const fn new(movie: MovieId, person: PersonId) -> Self {
        Self { movie, person }
    }
}
