//! Chain of Responsibility pattern: ATM bill dispensing
//! Example: a withdrawal walks the denominations until nothing is left
//!
//! Run with: cargo run --bin chain_of_responsibility

use design_patterns::{Presenter, StdoutPresenter, TraceLog};

/// A withdrawal request carrying the amount still to dispense.
struct Request {
    amount: u32,
}

impl Request {
    fn new(amount: u32, log: &mut TraceLog) -> Self {
        log.add(format!("Requested: ${amount}"));
        Request { amount }
    }

    /// Dispenses as many `bill` notes as fit and passes the remainder
    /// down the chain.
    fn dispense(mut self, bill: u32, log: &mut TraceLog) -> Self {
        let count = self.amount / bill;
        self.amount -= count * bill;
        log.add(format!("Dispense {count} ${bill} bills"));
        self
    }

    fn remaining(&self) -> u32 {
        self.amount
    }
}

pub fn run(out: &mut dyn Presenter) {
    let mut log = TraceLog::new();

    let request = Request::new(378, &mut log)
        .dispense(100, &mut log)
        .dispense(50, &mut log)
        .dispense(20, &mut log)
        .dispense(10, &mut log)
        .dispense(5, &mut log)
        .dispense(1, &mut log);
    debug_assert_eq!(request.remaining(), 0);

    log.show(out);
}

fn main() {
    run(&mut StdoutPresenter::titled("Chain of Responsibility"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use design_patterns::CapturePresenter;

    #[test]
    fn dispenses_largest_bills_first() {
        let mut log = TraceLog::new();
        let request = Request::new(378, &mut log)
            .dispense(100, &mut log)
            .dispense(50, &mut log);
        assert_eq!(request.remaining(), 28);
    }

    #[test]
    fn chain_exhausts_the_request() {
        let mut log = TraceLog::new();
        let request = Request::new(378, &mut log)
            .dispense(100, &mut log)
            .dispense(50, &mut log)
            .dispense(20, &mut log)
            .dispense(10, &mut log)
            .dispense(5, &mut log)
            .dispense(1, &mut log);
        assert_eq!(request.remaining(), 0);
    }

    #[test]
    fn trace_lists_every_denomination() {
        let mut out = CapturePresenter::new();
        run(&mut out);
        assert_eq!(
            out.single(),
            "Requested: $378\n\
             Dispense 3 $100 bills\n\
             Dispense 1 $50 bills\n\
             Dispense 1 $20 bills\n\
             Dispense 0 $10 bills\n\
             Dispense 1 $5 bills\n\
             Dispense 3 $1 bills\n"
        );
    }

    #[test]
    fn runner_is_deterministic() {
        let mut first = CapturePresenter::new();
        let mut second = CapturePresenter::new();
        run(&mut first);
        run(&mut second);
        assert_eq!(first.single(), second.single());
    }
}
