//! Adapter pattern: new implementation behind an old interface
//! Example: the advanced shipping API adapted to the legacy call shape
//!
//! Run with: cargo run --bin adapter

use design_patterns::{Presenter, StdoutPresenter, TraceLog};

struct Credentials {
    token: &'static str,
}

/// The interface existing callers expect: one call, one quote.
struct LegacyShipping;

impl LegacyShipping {
    fn request(&self, _zip_start: &str, _zip_end: &str, _weight: &str) -> f64 {
        49.75
    }
}

/// The replacement API with its own multi-step protocol.
#[derive(Default)]
struct AdvancedShipping {
    authenticated: bool,
    start: String,
    destination: String,
}

impl AdvancedShipping {
    fn login(&mut self, _credentials: &Credentials) {
        self.authenticated = true;
    }

    fn set_start(&mut self, start: &str) {
        self.start = start.to_string();
    }

    fn set_destination(&mut self, destination: &str) {
        self.destination = destination.to_string();
    }

    fn calculate(&self, _weight: &str) -> f64 {
        39.50
    }
}

/// Speaks the legacy interface, delegates to the advanced API.
struct ShippingAdapter {
    shipping: AdvancedShipping,
}

impl ShippingAdapter {
    fn new(credentials: &Credentials) -> Self {
        let mut shipping = AdvancedShipping::default();
        shipping.login(credentials);
        ShippingAdapter { shipping }
    }

    fn request(&mut self, zip_start: &str, zip_end: &str, weight: &str) -> f64 {
        self.shipping.set_start(zip_start);
        self.shipping.set_destination(zip_end);
        self.shipping.calculate(weight)
    }
}

pub fn run(out: &mut dyn Presenter) {
    let mut log = TraceLog::new();

    let shipping = LegacyShipping;
    let credentials = Credentials { token: "30a8-6ee1" };
    let mut adapter = ShippingAdapter::new(&credentials);

    let cost = shipping.request("78701", "10010", "2 lbs");
    log.add(format!("Old cost: ${cost:.2}"));

    let cost = adapter.request("78701", "10010", "2 lbs");
    log.add(format!("New cost: ${cost:.2}"));

    log.show(out);
}

fn main() {
    run(&mut StdoutPresenter::titled("Adapter"));
}
