//! Memento pattern: snapshot and restore object state
//! Example: persons round-tripped through JSON mementos
//!
//! Run with: cargo run --bin memento

use std::collections::HashMap;

use anyhow::Context;
use design_patterns::{Presenter, StdoutPresenter, TraceLog};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Person {
    name: String,
    street: String,
    city: String,
    state: String,
}

impl Person {
    fn new(name: &str, street: &str, city: &str, state: &str) -> Self {
        Person {
            name: name.to_string(),
            street: street.to_string(),
            city: city.to_string(),
            state: state.to_string(),
        }
    }

    /// Externalizes the current state as an opaque memento.
    fn snapshot(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Replaces the current state with the one held in `memento`.
    fn restore(&mut self, memento: &str) -> serde_json::Result<()> {
        *self = serde_json::from_str(memento)?;
        Ok(())
    }
}

/// Holds mementos under caller-chosen keys without looking inside them.
#[derive(Default)]
struct Caretaker {
    mementos: HashMap<u32, String>,
}

impl Caretaker {
    fn new() -> Self {
        Self::default()
    }

    fn keep(&mut self, key: u32, memento: String) {
        self.mementos.insert(key, memento);
    }

    fn get(&self, key: u32) -> Option<&str> {
        self.mementos.get(&key).map(String::as_str)
    }
}

pub fn run(out: &mut dyn Presenter) -> anyhow::Result<()> {
    let mut log = TraceLog::new();

    let mut mike = Person::new("Mike Foley", "1112 Main", "Dallas", "TX");
    let mut john = Person::new("John Wang", "48th Street", "San Jose", "CA");

    let mut caretaker = Caretaker::new();
    caretaker.keep(1, mike.snapshot()?);
    caretaker.keep(2, john.snapshot()?);

    // Clobber both, then roll back from the saved snapshots.
    mike.name = "King Kong".to_string();
    john.name = "Superman".to_string();

    mike.restore(caretaker.get(1).context("no memento under key 1")?)?;
    john.restore(caretaker.get(2).context("no memento under key 2")?)?;

    log.add(&mike.name);
    log.add(&john.name);
    log.show(out);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    run(&mut StdoutPresenter::titled("Memento"))
}
