//! Flyweight pattern: shared intrinsic state behind `Rc`
//! Example: seven computers sharing two interned spec objects
//!
//! Run with: cargo run --bin flyweight

use std::collections::HashMap;
use std::rc::Rc;

use design_patterns::{Presenter, StdoutPresenter, TraceLog};

/// Intrinsic state shared by every computer of the same make/model.
struct ComputerSpec {
    make: String,
    model: String,
    processor: String,
}

/// Interns specs by make + model; repeated requests share one `Rc`.
#[derive(Default)]
struct SpecFactory {
    interned: HashMap<(String, String), Rc<ComputerSpec>>,
}

impl SpecFactory {
    fn get(&mut self, make: &str, model: &str, processor: &str) -> Rc<ComputerSpec> {
        self.interned
            .entry((make.to_string(), model.to_string()))
            .or_insert_with(|| {
                Rc::new(ComputerSpec {
                    make: make.to_string(),
                    model: model.to_string(),
                    processor: processor.to_string(),
                })
            })
            .clone()
    }

    fn count(&self) -> usize {
        self.interned.len()
    }
}

/// Extrinsic state stays per-computer; the spec is the flyweight.
struct Computer {
    spec: Rc<ComputerSpec>,
    memory: String,
    tag: String,
}

impl Computer {
    fn make(&self) -> &str {
        &self.spec.make
    }
}

#[derive(Default)]
struct ComputerCollection {
    computers: HashMap<String, Computer>,
    factory: SpecFactory,
}

impl ComputerCollection {
    fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, make: &str, model: &str, processor: &str, memory: &str, tag: &str) {
        let spec = self.factory.get(make, model, processor);
        self.computers.insert(
            tag.to_string(),
            Computer {
                spec,
                memory: memory.to_string(),
                tag: tag.to_string(),
            },
        );
    }

    fn get(&self, tag: &str) -> Option<&Computer> {
        self.computers.get(tag)
    }

    fn count(&self) -> usize {
        self.computers.len()
    }

    fn spec_count(&self) -> usize {
        self.factory.count()
    }
}

pub fn run(out: &mut dyn Presenter) {
    let mut log = TraceLog::new();

    let mut computers = ComputerCollection::new();
    computers.add("Dell", "Studio XPS", "Intel", "5G", "Y755P");
    computers.add("Dell", "Studio XPS", "Intel", "6G", "X997T");
    computers.add("Dell", "Studio XPS", "Intel", "2G", "U8U80");
    computers.add("Dell", "Studio XPS", "Intel", "2G", "NT777");
    computers.add("Dell", "Studio XPS", "Intel", "2G", "0J88A");
    computers.add("HP", "Envy", "Intel", "4G", "CNU883701");
    computers.add("HP", "Envy", "Intel", "2G", "TXU003283");

    log.add(format!("Computers: {}", computers.count()));
    log.add(format!("Flyweights: {}", computers.spec_count()));

    log.show(out);
}

fn main() {
    run(&mut StdoutPresenter::titled("Flyweight"));
}
