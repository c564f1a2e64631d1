//! Visitor pattern: operations applied across an object structure
//! Example: salary and vacation reviews visiting every employee
//!
//! Run with: cargo run --bin visitor

use design_patterns::{Presenter, StdoutPresenter, TraceLog};

struct Employee {
    name: String,
    salary: u64,
    vacation_days: u32,
}

impl Employee {
    fn new(name: &str, salary: u64, vacation_days: u32) -> Self {
        Employee {
            name: name.to_string(),
            salary,
            vacation_days,
        }
    }

    fn accept(&mut self, visitor: &dyn Visitor) {
        visitor.visit(self);
    }
}

/// An operation over employees, kept outside the employee itself.
trait Visitor {
    fn visit(&self, employee: &mut Employee);
}

/// Grants a 10% raise.
struct ExtraSalary;

impl Visitor for ExtraSalary {
    fn visit(&self, employee: &mut Employee) {
        employee.salary += employee.salary / 10;
    }
}

/// Grants two extra vacation days.
struct ExtraVacation;

impl Visitor for ExtraVacation {
    fn visit(&self, employee: &mut Employee) {
        employee.vacation_days += 2;
    }
}

pub fn run(out: &mut dyn Presenter) {
    let mut log = TraceLog::new();

    let mut employees = [
        Employee::new("John", 10000, 10),
        Employee::new("Mary", 20000, 21),
        Employee::new("Boss", 250000, 51),
    ];

    for employee in &mut employees {
        employee.accept(&ExtraSalary);
        employee.accept(&ExtraVacation);
        log.add(format!(
            "{}: ${} and {} vacation days",
            employee.name, employee.salary, employee.vacation_days
        ));
    }

    log.show(out);
}

fn main() {
    run(&mut StdoutPresenter::titled("Visitor"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use design_patterns::CapturePresenter;

    #[test]
    fn salary_visitor_grants_ten_percent() {
        let mut employee = Employee::new("John", 10000, 10);
        employee.accept(&ExtraSalary);
        assert_eq!(employee.salary, 11000);
    }

    #[test]
    fn vacation_visitor_grants_two_days() {
        let mut employee = Employee::new("Mary", 20000, 21);
        employee.accept(&ExtraVacation);
        assert_eq!(employee.vacation_days, 23);
    }

    #[test]
    fn visitors_compose_without_knowing_each_other() {
        let mut employee = Employee::new("Boss", 250000, 51);
        employee.accept(&ExtraSalary);
        employee.accept(&ExtraVacation);
        assert_eq!(employee.salary, 275000);
        assert_eq!(employee.vacation_days, 53);
    }

    #[test]
    fn trace_reports_every_reviewed_employee() {
        let mut out = CapturePresenter::new();
        run(&mut out);
        assert_eq!(
            out.single(),
            "John: $11000 and 12 vacation days\n\
             Mary: $22000 and 23 vacation days\n\
             Boss: $275000 and 53 vacation days\n"
        );
    }
}
