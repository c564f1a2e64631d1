//! State pattern: traffic light phases
//! Example: the light's behavior changes as its internal state advances
//!
//! Run with: cargo run --bin state

use design_patterns::{Presenter, StdoutPresenter, TraceLog};

/// Closed set of phases; every transition is matched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Red,
    Green,
    Yellow,
}

impl Phase {
    fn next(self) -> Phase {
        match self {
            Phase::Red => Phase::Green,
            Phase::Green => Phase::Yellow,
            Phase::Yellow => Phase::Red,
        }
    }

    fn report(self) -> &'static str {
        match self {
            Phase::Red => "Red --> for 1 minute",
            Phase::Green => "Green --> for 1 minute",
            Phase::Yellow => "Yellow --> for 10 seconds",
        }
    }
}

struct TrafficLight {
    phase: Phase,
}

impl TrafficLight {
    fn new() -> Self {
        TrafficLight { phase: Phase::Red }
    }

    fn report(&self, log: &mut TraceLog) {
        log.add(self.phase.report());
    }

    fn advance(&mut self) {
        self.phase = self.phase.next();
    }
}

pub fn run(out: &mut dyn Presenter) {
    let mut log = TraceLog::new();

    let mut light = TrafficLight::new();
    light.report(&mut log);
    for _ in 0..10 {
        light.advance();
        light.report(&mut log);
    }

    log.show(out);
}

fn main() {
    run(&mut StdoutPresenter::titled("State"));
}
