//! The in-memory bipartite graph store.
//!
//! People and movies form the two sides of a bipartite graph; an edge
//! between two people exists for every movie both are credited in. The
//! store owns three tables:
//!
//! - `people` - person records keyed by [`PersonId`](costar_core::PersonId)
//! - `movies` - movie records keyed by [`MovieId`](costar_core::MovieId)
//! - `names` - lowercase name to the set of ids carrying that name
//!
//! The store is built once via [`GraphStoreBuilder`] and is strictly
//! read-only afterwards, so any number of searches may borrow it
//! concurrently without locking.
//!
//! # Example
//!
//! ```
//! use costar_core::{Movie, MovieId, Person, PersonId};
//! use costar_graph::store::GraphStore;
//!
//! let mut builder = GraphStore::builder();
//! builder.add_person(Person::new(PersonId::new(1), "Alice"));
//! builder.add_movie(Movie::new(MovieId::new(10), "Heist"));
//! builder.add_star(PersonId::new(1), MovieId::new(10));
//! let store = builder.build();
//!
//! assert_eq!(store.person_count(), 1);
//! assert!(store.person(PersonId::new(1)).is_some());
//! ```

mod error;
mod graph;

pub use error::{GraphError, GraphResult};
pub use graph::{GraphStore, GraphStoreBuilder};
