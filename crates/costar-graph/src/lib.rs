//! `costar` Graph
//!
//! This crate provides the in-memory bipartite credit graph and the
//! breadth-first traversal engine that answers "degrees of separation"
//! queries over it.
//!
//! # Modules
//!
//! - [`store`] - The read-only graph store and its builder
//! - [`loader`] - CSV dataset ingestion
//! - [`traversal`] - Frontier-managed shortest-path search
//!
//! # Example
//!
//! ```
//! use costar_core::{Movie, MovieId, Person, PersonId};
//! use costar_graph::store::GraphStore;
//! use costar_graph::traversal::ShortestPath;
//!
//! let mut builder = GraphStore::builder();
//! builder.add_person(Person::new(PersonId::new(1), "Alice"));
//! builder.add_person(Person::new(PersonId::new(2), "Bob"));
//! builder.add_movie(Movie::new(MovieId::new(10), "Heist"));
//! builder.add_star(PersonId::new(1), MovieId::new(10));
//! builder.add_star(PersonId::new(2), MovieId::new(10));
//! let store = builder.build();
//!
//! let path = ShortestPath::new(PersonId::new(1), PersonId::new(2))
//!     .find(&store)
//!     .expect("connected");
//! assert_eq!(path.degrees, 1);
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod loader;
pub mod store;
pub mod traversal;

// Re-export the query surface
pub use store::{GraphError, GraphResult, GraphStore, GraphStoreBuilder};
pub use traversal::{PathResult, PathStep, ShortestPath};
