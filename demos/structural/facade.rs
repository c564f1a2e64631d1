//! Facade pattern: one entry point over several subsystems
//! Example: a mortgage application consulting bank, credit, background
//!
//! Run with: cargo run --bin facade

use design_patterns::{Presenter, StdoutPresenter, TraceLog};

struct Bank;

impl Bank {
    fn verify(&self, _name: &str, _amount: &str) -> bool {
        true
    }
}

struct Credit;

impl Credit {
    fn check(&self, _name: &str) -> bool {
        true
    }
}

struct Background;

impl Background {
    fn check(&self, _name: &str) -> bool {
        true
    }
}

/// The facade: callers see one call, not three subsystems.
struct Mortgage {
    name: String,
}

impl Mortgage {
    fn new(name: &str) -> Self {
        Mortgage {
            name: name.to_string(),
        }
    }

    fn apply_for(&self, amount: &str) -> String {
        let approved = Bank.verify(&self.name, amount)
            && Credit.check(&self.name)
            && Background.check(&self.name);
        let result = if approved { "approved" } else { "denied" };
        format!("{} has been {result} for a {amount} mortgage", self.name)
    }
}

pub fn run(out: &mut dyn Presenter) {
    let mut log = TraceLog::new();

    let mortgage = Mortgage::new("Joan Templeton");
    log.add(mortgage.apply_for("$100,000"));

    log.show(out);
}

fn main() {
    run(&mut StdoutPresenter::titled("Facade"));
}
