//! CSV dataset ingestion.
//!
//! A dataset directory holds three files:
//!
//! - `people.csv` - `id,name,birth`
//! - `movies.csv` - `id,title,year`
//! - `stars.csv` - `person_id,movie_id`
//!
//! Loading is deliberately lenient about row content: rows whose ids do not
//! parse are skipped, star rows referencing unknown people or movies are
//! dropped during linking, and empty or unparsable birth/year fields load
//! as `None`. Missing files and malformed CSV framing are real errors.
//!
//! # Example
//!
//! ```ignore
//! use costar_graph::loader;
//!
//! let store = loader::load_directory("data")?;
//! println!("{} people, {} movies", store.person_count(), store.movie_count());
//! ```

use std::path::Path;

use serde::Deserialize;

use costar_core::{Movie, Person};

use crate::store::{GraphError, GraphResult, GraphStore, GraphStoreBuilder};

/// File name for the people table.
pub const PEOPLE_FILE: &str = "people.csv";

/// File name for the movies table.
pub const MOVIES_FILE: &str = "movies.csv";

/// File name for the credits table.
pub const STARS_FILE: &str = "stars.csv";

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    birth: String,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    year: String,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

/// Load a dataset directory into a frozen [`GraphStore`].
///
/// # Errors
///
/// Returns [`GraphError::DirectoryNotFound`] if `directory` is not a
/// directory, and [`GraphError::Csv`] / [`GraphError::Io`] if a dataset
/// file cannot be opened or read.
pub fn load_directory(directory: impl AsRef<Path>) -> GraphResult<GraphStore> {
    let directory = directory.as_ref();
    if !directory.is_dir() {
        return Err(GraphError::DirectoryNotFound(directory.to_path_buf()));
    }

    let mut builder = GraphStore::builder();
    let people_skipped = load_people(&mut builder, &directory.join(PEOPLE_FILE))?;
    let movies_skipped = load_movies(&mut builder, &directory.join(MOVIES_FILE))?;
    let stars_skipped = load_stars(&mut builder, &directory.join(STARS_FILE))?;

    if people_skipped + movies_skipped + stars_skipped > 0 {
        tracing::debug!(
            people = people_skipped,
            movies = movies_skipped,
            stars = stars_skipped,
            "skipped malformed dataset rows"
        );
    }

    Ok(builder.build())
}

fn load_people(builder: &mut GraphStoreBuilder, path: &Path) -> GraphResult<usize> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut skipped = 0usize;
    for row in reader.deserialize::<PersonRow>() {
        let Ok(row) = row else {
            skipped += 1;
            continue;
        };
        let Ok(id) = row.id.parse() else {
            skipped += 1;
            continue;
        };
        let mut person = Person::new(id, row.name);
        person.birth = parse_year(&row.birth);
        builder.add_person(person);
    }
    Ok(skipped)
}

fn load_movies(builder: &mut GraphStoreBuilder, path: &Path) -> GraphResult<usize> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut skipped = 0usize;
    for row in reader.deserialize::<MovieRow>() {
        let Ok(row) = row else {
            skipped += 1;
            continue;
        };
        let Ok(id) = row.id.parse() else {
            skipped += 1;
            continue;
        };
        let mut movie = Movie::new(id, row.title);
        movie.year = parse_year(&row.year);
        builder.add_movie(movie);
    }
    Ok(skipped)
}

fn load_stars(builder: &mut GraphStoreBuilder, path: &Path) -> GraphResult<usize> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut skipped = 0usize;
    for row in reader.deserialize::<StarRow>() {
        let Ok(row) = row else {
            skipped += 1;
            continue;
        };
        let (Ok(person_id), Ok(movie_id)) = (row.person_id.parse(), row.movie_id.parse()) else {
            skipped += 1;
            continue;
        };
        builder.add_star(person_id, movie_id);
    }
    Ok(skipped)
}

/// Parse a year field. Datasets leave the field empty or carry stray text
/// for unknown years; both load as `None`.
fn parse_year(field: &str) -> Option<u32> {
    field.trim().parse().ok()
}
