//! Factory Method pattern: creation deferred to dedicated factories
//! Example: employee and vendor factories sharing one creation contract
//!
//! Run with: cargo run --bin factory_method

use design_patterns::{Presenter, StdoutPresenter, TraceLog};

trait Person {
    fn say(&self, log: &mut TraceLog);
}

struct Employee {
    name: String,
}

impl Person for Employee {
    fn say(&self, log: &mut TraceLog) {
        log.add(format!("I am employee {}", self.name));
    }
}

struct Vendor {
    name: String,
}

impl Person for Vendor {
    fn say(&self, log: &mut TraceLog) {
        log.add(format!("I am vendor {}", self.name));
    }
}

/// The factory method; each factory decides which concrete person to
/// instantiate.
trait PersonFactory {
    fn create(&self, name: &str) -> Box<dyn Person>;
}

struct EmployeeFactory;

impl PersonFactory for EmployeeFactory {
    fn create(&self, name: &str) -> Box<dyn Person> {
        Box::new(Employee {
            name: name.to_string(),
        })
    }
}

struct VendorFactory;

impl PersonFactory for VendorFactory {
    fn create(&self, name: &str) -> Box<dyn Person> {
        Box::new(Vendor {
            name: name.to_string(),
        })
    }
}

pub fn run(out: &mut dyn Presenter) {
    let mut log = TraceLog::new();

    let employee_factory = EmployeeFactory;
    let vendor_factory = VendorFactory;

    let persons: Vec<Box<dyn Person>> = vec![
        employee_factory.create("Joan DiSilva"),
        employee_factory.create("Tim O'Neill"),
        vendor_factory.create("Gerald Watson"),
        vendor_factory.create("Nicole McNight"),
    ];

    for person in &persons {
        person.say(&mut log);
    }

    log.show(out);
}

fn main() {
    run(&mut StdoutPresenter::titled("Factory Method"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use design_patterns::CapturePresenter;

    fn said_by(factory: &dyn PersonFactory, name: &str) -> String {
        let mut log = TraceLog::new();
        factory.create(name).say(&mut log);
        let mut out = CapturePresenter::new();
        log.show(&mut out);
        out.single().to_string()
    }

    #[test]
    fn employee_factory_creates_employees() {
        assert_eq!(said_by(&EmployeeFactory, "Joan"), "I am employee Joan\n");
    }

    #[test]
    fn vendor_factory_creates_vendors() {
        assert_eq!(said_by(&VendorFactory, "Gerald"), "I am vendor Gerald\n");
    }

    #[test]
    fn trace_introduces_all_four_persons() {
        let mut out = CapturePresenter::new();
        run(&mut out);
        assert_eq!(
            out.single(),
            "I am employee Joan DiSilva\n\
             I am employee Tim O'Neill\n\
             I am vendor Gerald Watson\n\
             I am vendor Nicole McNight\n"
        );
    }
}
