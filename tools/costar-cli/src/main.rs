//! costar Command Line Interface
//!
//! Loads a CSV film dataset into memory and answers "degrees of
//! separation" queries between two people interactively.

mod error;
mod output;
mod session;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use costar_graph::loader;

use crate::error::Result;
use crate::session::Session;

/// costar Command Line Interface
///
/// Finds the shortest chain of shared-movie credits connecting two people.
#[derive(Parser, Debug)]
#[command(name = "costar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the dataset directory (people.csv, movies.csv, stars.csv)
    #[arg(default_value = "data", env = "COSTAR_DATA")]
    directory: PathBuf,

    /// Log search statistics (node counts, skipped rows)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "costar_graph=debug" } else { "costar_graph=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    println!("Loading data from {}...", cli.directory.display());
    let started = Instant::now();
    let store = loader::load_directory(&cli.directory)?;
    println!(
        "Loaded {} people and {} movies in {}.",
        store.person_count(),
        store.movie_count(),
        output::format_elapsed(started.elapsed())
    );

    let mut session = Session::new(&store)?;
    session.run()
}
