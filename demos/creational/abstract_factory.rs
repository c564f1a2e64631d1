//! Abstract Factory pattern: families of related employee products
//! Example: employment kinds parsed from keys, products built per kind
//!
//! Run with: cargo run --bin abstract_factory

use std::str::FromStr;

use design_patterns::{Presenter, StdoutPresenter, TraceLog, UnknownVariant};

/// Closed set of employment kinds the factory can build for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EmployeeKind {
    FullTime,
    PartTime,
    Temporary,
    Contractor,
}

impl FromStr for EmployeeKind {
    type Err = UnknownVariant;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "fulltime" => Ok(EmployeeKind::FullTime),
            "parttime" => Ok(EmployeeKind::PartTime),
            "temporary" => Ok(EmployeeKind::Temporary),
            "contractor" => Ok(EmployeeKind::Contractor),
            other => Err(UnknownVariant::new("employee type", other)),
        }
    }
}

trait Employee {
    fn describe(&self, log: &mut TraceLog);
}

struct FullTime;

impl Employee for FullTime {
    fn describe(&self, log: &mut TraceLog) {
        log.add("fulltime: rate $12/hour");
    }
}

struct PartTime;

impl Employee for PartTime {
    fn describe(&self, log: &mut TraceLog) {
        log.add("parttime: rate $11/hour");
    }
}

struct Temporary;

impl Employee for Temporary {
    fn describe(&self, log: &mut TraceLog) {
        log.add("temporary: rate $10/hour");
    }
}

struct Contractor;

impl Employee for Contractor {
    fn describe(&self, log: &mut TraceLog) {
        log.add("contractor: rate $15/hour");
    }
}

struct EmployeeFactory;

impl EmployeeFactory {
    /// Exhaustive over the closed kind set; no fallback product exists.
    fn create(&self, kind: EmployeeKind) -> Box<dyn Employee> {
        match kind {
            EmployeeKind::FullTime => Box::new(FullTime),
            EmployeeKind::PartTime => Box::new(PartTime),
            EmployeeKind::Temporary => Box::new(Temporary),
            EmployeeKind::Contractor => Box::new(Contractor),
        }
    }
}

pub fn run(out: &mut dyn Presenter) -> anyhow::Result<()> {
    let mut log = TraceLog::new();

    let factory = EmployeeFactory;
    let mut employees: Vec<Box<dyn Employee>> = Vec::new();
    for key in ["fulltime", "parttime", "temporary", "contractor"] {
        // An unrecognized key would abort the run here.
        let kind: EmployeeKind = key.parse()?;
        employees.push(factory.create(kind));
    }

    for employee in &employees {
        employee.describe(&mut log);
    }

    log.show(out);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    run(&mut StdoutPresenter::titled("Abstract Factory"))
}
