//! Interactive query session.

use std::time::Instant;

use costar_core::{Person, PersonId};
use costar_graph::{GraphStore, ShortestPath};
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};

use crate::error::Result;
use crate::output::{format_elapsed, format_path};

/// One line read from the prompt.
enum Input {
    Line(String),
    /// Ctrl-C: abandon the current query, keep the session.
    Cancelled,
    /// Ctrl-D: end the session.
    Eof,
}

/// Outcome of resolving a prompted name to a person id.
enum Resolution {
    Person(PersonId),
    NotFound(String),
    Aborted,
    Quit,
}

/// The interactive degrees-of-separation session.
///
/// The store is loaded once and borrowed read-only, so the session can
/// answer any number of queries from a single load.
pub struct Session<'a> {
    store: &'a GraphStore,
    editor: DefaultEditor,
}

impl<'a> Session<'a> {
    /// Create a new session over a loaded store.
    pub fn new(store: &'a GraphStore) -> Result<Self> {
        let config = Config::builder()
            .history_ignore_space(true)
            .auto_add_history(true)
            .build();
        let editor = DefaultEditor::with_config(config)?;
        Ok(Self { store, editor })
    }

    /// Run the prompt loop until Ctrl-D.
    pub fn run(&mut self) -> Result<()> {
        println!("Enter two names to measure their degrees of separation. Ctrl-D exits.");
        while self.query_once()? {}
        println!("Goodbye!");
        Ok(())
    }

    /// Prompt for two names and run one search. Returns `false` when the
    /// user ends the session.
    fn query_once(&mut self) -> Result<bool> {
        let source = match self.prompt_person("Name: ")? {
            Resolution::Person(id) => id,
            Resolution::NotFound(name) => {
                eprintln!("Person not found: {name}");
                return Ok(true);
            }
            Resolution::Aborted => return Ok(true),
            Resolution::Quit => return Ok(false),
        };
        let target = match self.prompt_person("Name: ")? {
            Resolution::Person(id) => id,
            Resolution::NotFound(name) => {
                eprintln!("Person not found: {name}");
                return Ok(true);
            }
            Resolution::Aborted => return Ok(true),
            Resolution::Quit => return Ok(false),
        };

        let started = Instant::now();
        let path = ShortestPath::new(source, target).find(self.store);
        println!("Elapsed time: {}", format_elapsed(started.elapsed()));

        match path {
            Some(path) => print!("{}", format_path(self.store, source, &path)),
            None => println!("Not connected."),
        }
        Ok(true)
    }

    /// Prompt for a name and resolve it against the name index, asking
    /// the user to pick an id when several people share the name.
    fn prompt_person(&mut self, prompt: &str) -> Result<Resolution> {
        let name = match self.read_line(prompt)? {
            Input::Line(name) if !name.is_empty() => name,
            Input::Line(_) | Input::Cancelled => return Ok(Resolution::Aborted),
            Input::Eof => return Ok(Resolution::Quit),
        };

        let store = self.store;
        let Some(ids) = store.person_ids_for_name(&name) else {
            return Ok(Resolution::NotFound(name));
        };
        if ids.len() == 1 {
            if let Some(&id) = ids.iter().next() {
                return Ok(Resolution::Person(id));
            }
        }

        // Several people carry this name; list them and ask for an id.
        println!("Which '{name}'?");
        let mut candidates: Vec<&Person> = ids.iter().filter_map(|&id| store.person(id)).collect();
        candidates.sort_by_key(|person| person.id);
        for person in candidates {
            let birth = person.birth.map_or_else(|| "unknown".to_owned(), |b| b.to_string());
            println!("ID: {}, Name: {}, Birth: {}", person.id, person.name, birth);
        }

        match self.read_line("Intended Person ID: ")? {
            Input::Line(raw) => {
                if let Ok(id) = raw.parse::<PersonId>() {
                    if ids.contains(&id) {
                        return Ok(Resolution::Person(id));
                    }
                }
                Ok(Resolution::NotFound(name))
            }
            Input::Cancelled => Ok(Resolution::Aborted),
            Input::Eof => Ok(Resolution::Quit),
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Input::Line(line.trim().to_owned())),
            Err(ReadlineError::Interrupted) => {
                println!("Query cancelled. Ctrl-D exits.");
                Ok(Input::Cancelled)
            }
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(e) => Err(e.into()),
        }
    }
}
