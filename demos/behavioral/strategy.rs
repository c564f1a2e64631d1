//! Strategy pattern: interchangeable shipping-rate algorithms
//! Example: one package quoted through three carriers
//!
//! Run with: cargo run --bin strategy

use design_patterns::{Presenter, StdoutPresenter, TraceLog};

struct Package {
    from: &'static str,
    to: &'static str,
    weight: &'static str,
}

/// The algorithm family: every carrier quotes a package its own way.
trait ShippingCompany {
    fn name(&self) -> &'static str;
    fn calculate(&self, pkg: &Package) -> f64;
}

struct Ups;

impl ShippingCompany for Ups {
    fn name(&self) -> &'static str {
        "UPS"
    }

    fn calculate(&self, _pkg: &Package) -> f64 {
        45.95
    }
}

struct Usps;

impl ShippingCompany for Usps {
    fn name(&self) -> &'static str {
        "USPS"
    }

    fn calculate(&self, _pkg: &Package) -> f64 {
        39.40
    }
}

struct Fedex;

impl ShippingCompany for Fedex {
    fn name(&self) -> &'static str {
        "Fedex"
    }

    fn calculate(&self, _pkg: &Package) -> f64 {
        43.20
    }
}

/// Context: always holds a strategy, swappable at runtime.
struct Shipping {
    company: Box<dyn ShippingCompany>,
}

impl Shipping {
    fn new(company: Box<dyn ShippingCompany>) -> Self {
        Shipping { company }
    }

    fn set_strategy(&mut self, company: Box<dyn ShippingCompany>) {
        self.company = company;
    }

    fn quote(&self, pkg: &Package, log: &mut TraceLog) {
        log.add(format!(
            "{} Strategy: ${:.2}",
            self.company.name(),
            self.company.calculate(pkg)
        ));
    }
}

pub fn run(out: &mut dyn Presenter) {
    let mut log = TraceLog::new();

    let pkg = Package {
        from: "76712",
        to: "10012",
        weight: "1kg",
    };

    let mut shipping = Shipping::new(Box::new(Ups));
    shipping.quote(&pkg, &mut log);
    shipping.set_strategy(Box::new(Usps));
    shipping.quote(&pkg, &mut log);
    shipping.set_strategy(Box::new(Fedex));
    shipping.quote(&pkg, &mut log);

    log.show(out);
}

fn main() {
    run(&mut StdoutPresenter::titled("Strategy"));
}
