//! Prototype pattern: new objects cloned from a prototypical instance
//! Example: customers spawned from a pristine prototype
//!
//! Run with: cargo run --bin prototype

use design_patterns::{Presenter, StdoutPresenter, TraceLog};

#[derive(Debug, Clone, PartialEq)]
struct Customer {
    first: String,
    last: String,
    status: String,
}

impl Customer {
    fn new(first: &str, last: &str, status: &str) -> Self {
        Customer {
            first: first.to_string(),
            last: last.to_string(),
            status: status.to_string(),
        }
    }

    fn say(&self, log: &mut TraceLog) {
        log.add(format!(
            "name: {} {}, status: {}",
            self.first, self.last, self.status
        ));
    }
}

/// Wraps the prototypical customer; spawning never touches the
/// original.
struct CustomerPrototype {
    proto: Customer,
}

impl CustomerPrototype {
    fn new(proto: Customer) -> Self {
        CustomerPrototype { proto }
    }

    fn spawn(&self) -> Customer {
        self.proto.clone()
    }
}

pub fn run(out: &mut dyn Presenter) {
    let mut log = TraceLog::new();

    let prototype = CustomerPrototype::new(Customer::new("n/a", "n/a", "pending"));
    let customer = prototype.spawn();
    customer.say(&mut log);

    log.show(out);
}

fn main() {
    run(&mut StdoutPresenter::titled("Prototype"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use design_patterns::CapturePresenter;

    #[test]
    fn spawned_customer_matches_the_prototype() {
        let prototype = CustomerPrototype::new(Customer::new("n/a", "n/a", "pending"));
        assert_eq!(prototype.spawn(), Customer::new("n/a", "n/a", "pending"));
    }

    #[test]
    fn mutating_a_spawn_leaves_the_prototype_intact() {
        let prototype = CustomerPrototype::new(Customer::new("n/a", "n/a", "pending"));
        let mut customer = prototype.spawn();
        customer.first = "Ada".to_string();
        customer.status = "active".to_string();

        assert_eq!(prototype.spawn(), Customer::new("n/a", "n/a", "pending"));
    }

    #[test]
    fn trace_shows_the_inherited_fields() {
        let mut out = CapturePresenter::new();
        run(&mut out);
        assert_eq!(out.single(), "name: n/a n/a, status: pending\n");
    }
}
