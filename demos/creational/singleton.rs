//! Singleton pattern: one lazily created shared instance
//! Example: two accesses observe the same configuration object
//!
//! Run with: cargo run --bin singleton

use design_patterns::{Presenter, StdoutPresenter, TraceLog};
use lazy_static::lazy_static;

struct AppConfig {
    value: String,
}

lazy_static! {
    static ref INSTANCE: AppConfig = AppConfig {
        value: "I am the instance".to_string(),
    };
}

/// The sole access point; construction happens on first call.
fn instance() -> &'static AppConfig {
    &INSTANCE
}

pub fn run(out: &mut dyn Presenter) {
    let mut log = TraceLog::new();

    let first = instance();
    let second = instance();

    log.add(format!("Same instance? {}", std::ptr::eq(first, second)));
    log.add(&first.value);

    log.show(out);
}

fn main() {
    run(&mut StdoutPresenter::titled("Singleton"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use design_patterns::CapturePresenter;

    #[test]
    fn accesses_share_one_instance() {
        assert!(std::ptr::eq(instance(), instance()));
    }

    #[test]
    fn trace_confirms_the_shared_instance() {
        let mut out = CapturePresenter::new();
        run(&mut out);
        assert_eq!(out.single(), "Same instance? true\nI am the instance\n");
    }
}
