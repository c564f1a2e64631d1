//! Template Method pattern: fixed algorithm skeleton, variable steps
//! Example: data stores share the connect/select/disconnect sequence
//!
//! Run with: cargo run --bin template_method

use design_patterns::{Presenter, StdoutPresenter, TraceLog};

trait DataStore {
    /// The template: subclasses supply the steps, never the order.
    fn process(&mut self, log: &mut TraceLog) {
        self.connect(log);
        self.select(log);
        self.disconnect(log);
    }

    fn connect(&mut self, log: &mut TraceLog);
    fn select(&mut self, log: &mut TraceLog);
    fn disconnect(&mut self, log: &mut TraceLog);
}

struct MySqlStore;

impl DataStore for MySqlStore {
    fn connect(&mut self, log: &mut TraceLog) {
        log.add("MySQL: connect step");
    }

    fn select(&mut self, log: &mut TraceLog) {
        log.add("MySQL: select step");
    }

    fn disconnect(&mut self, log: &mut TraceLog) {
        log.add("MySQL: disconnect step");
    }
}

struct PostgresStore;

impl DataStore for PostgresStore {
    fn connect(&mut self, log: &mut TraceLog) {
        log.add("Postgres: connect step");
    }

    fn select(&mut self, log: &mut TraceLog) {
        log.add("Postgres: select step");
    }

    fn disconnect(&mut self, log: &mut TraceLog) {
        log.add("Postgres: disconnect step");
    }
}

pub fn run(out: &mut dyn Presenter) {
    let mut log = TraceLog::new();

    MySqlStore.process(&mut log);
    PostgresStore.process(&mut log);

    log.show(out);
}

fn main() {
    run(&mut StdoutPresenter::titled("Template Method"));
}
