//! `costar` Core
//!
//! This crate provides the fundamental types shared across the `costar`
//! degrees-of-separation engine.
//!
//! # Overview
//!
//! - **Identifiers**: [`PersonId`] and [`MovieId`] for referencing graph elements
//! - **Records**: [`Person`] and [`Movie`], the two sides of the bipartite
//!   credit graph
//!
//! # Example
//!
//! ```
//! use costar_core::{Movie, MovieId, Person, PersonId};
//!
//! let person = Person::new(PersonId::new(102), "Kevin Bacon").with_birth(1958);
//! let movie = Movie::new(MovieId::new(104257), "A Few Good Men").with_year(1992);
//!
//! assert_eq!(person.id.as_u64(), 102);
//! assert!(movie.stars.is_empty());
//! ```
//!
//! # Modules
//!
//! - [`types`] - Core data types ([`Person`], [`Movie`], IDs)
//! - [`error`] - Error types ([`CoreError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use types::{Movie, MovieId, Person, PersonId};
