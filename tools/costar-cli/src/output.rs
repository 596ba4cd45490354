//! Rendering of search results.

use std::fmt::Write as _;
use std::time::Duration;

use costar_core::{MovieId, PersonId};
use costar_graph::{GraphStore, PathResult};

/// Render a found path as the classic numbered chain, starting with the
/// degree count:
///
/// ```text
/// 2 degrees of separation.
/// 1: Alice and Bob starred in Heist
/// 2: Bob and Carol starred in Sequel
/// ```
pub fn format_path(store: &GraphStore, source: PersonId, path: &PathResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} degrees of separation.", path.degrees);
    let mut previous = source;
    for (i, step) in path.steps.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}: {} and {} starred in {}",
            i + 1,
            person_name(store, previous),
            person_name(store, step.person),
            movie_title(store, step.movie),
        );
        previous = step.person;
    }
    out
}

/// Pretty-print an elapsed duration: whole minutes and seconds past the
/// minute mark, fractional seconds below it.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs >= 60 {
        format!("{} mins {} secs", secs / 60, secs % 60)
    } else {
        format!("{:.2} secs", elapsed.as_secs_f64())
    }
}

fn person_name(store: &GraphStore, id: PersonId) -> &str {
    store.person(id).map_or("<unknown>", |p| p.name.as_str())
}

fn movie_title(store: &GraphStore, id: MovieId) -> &str {
    store.movie(id).map_or("<unknown>", |m| m.title.as_str())
}
