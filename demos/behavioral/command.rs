//! Command pattern: calculator with undo
//! Example: each command pairs an operation with its inverse
//!
//! Run with: cargo run --bin command

use design_patterns::{Presenter, StdoutPresenter, TraceLog};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn apply(self, current: f64, value: f64) -> f64 {
        match self {
            Op::Add => current + value,
            Op::Sub => current - value,
            Op::Mul => current * value,
            Op::Div => current / value,
        }
    }

    fn inverse(self) -> Op {
        match self {
            Op::Add => Op::Sub,
            Op::Sub => Op::Add,
            Op::Mul => Op::Div,
            Op::Div => Op::Mul,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Op::Add => "Add",
            Op::Sub => "Sub",
            Op::Mul => "Mul",
            Op::Div => "Div",
        }
    }
}

/// An operation plus the operand it was invoked with, so it can be
/// replayed or undone later.
#[derive(Debug, Clone, Copy)]
struct Command {
    op: Op,
    value: f64,
}

impl Command {
    fn new(op: Op, value: f64) -> Self {
        Command { op, value }
    }
}

#[derive(Default)]
struct Calculator {
    current: f64,
    executed: Vec<Command>,
}

impl Calculator {
    fn new() -> Self {
        Self::default()
    }

    fn execute(&mut self, command: Command, log: &mut TraceLog) {
        self.current = command.op.apply(self.current, command.value);
        self.executed.push(command);
        log.add(format!("{}: {}", command.op.name(), command.value));
    }

    /// Reverts the most recent command; does nothing on an empty
    /// history.
    fn undo(&mut self, log: &mut TraceLog) {
        let Some(command) = self.executed.pop() else {
            return;
        };
        self.current = command.op.inverse().apply(self.current, command.value);
        log.add(format!("Undo {}: {}", command.op.name(), command.value));
    }

    fn current_value(&self) -> f64 {
        self.current
    }
}

pub fn run(out: &mut dyn Presenter) {
    let mut log = TraceLog::new();
    let mut calculator = Calculator::new();

    calculator.execute(Command::new(Op::Add, 100.0), &mut log);
    calculator.execute(Command::new(Op::Sub, 24.0), &mut log);
    calculator.execute(Command::new(Op::Mul, 6.0), &mut log);
    calculator.execute(Command::new(Op::Div, 2.0), &mut log);
    calculator.undo(&mut log);
    calculator.undo(&mut log);

    log.add("");
    log.add(format!("Value: {}", calculator.current_value()));
    log.show(out);
}

fn main() {
    run(&mut StdoutPresenter::titled("Command"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use design_patterns::CapturePresenter;

    #[test]
    fn execute_applies_operations_in_order() {
        let mut log = TraceLog::new();
        let mut calc = Calculator::new();
        calc.execute(Command::new(Op::Add, 100.0), &mut log);
        calc.execute(Command::new(Op::Sub, 24.0), &mut log);
        assert_eq!(calc.current_value(), 76.0);
    }

    #[test]
    fn undo_applies_the_inverse_operation() {
        let mut log = TraceLog::new();
        let mut calc = Calculator::new();
        calc.execute(Command::new(Op::Add, 100.0), &mut log);
        calc.execute(Command::new(Op::Mul, 6.0), &mut log);
        calc.undo(&mut log);
        assert_eq!(calc.current_value(), 100.0);
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut log = TraceLog::new();
        let mut calc = Calculator::new();
        calc.undo(&mut log);
        assert_eq!(calc.current_value(), 0.0);
        assert!(log.is_empty());
    }

    #[test]
    fn every_op_round_trips_through_its_inverse() {
        for op in [Op::Add, Op::Sub, Op::Mul, Op::Div] {
            let applied = op.apply(76.0, 4.0);
            assert_eq!(op.inverse().apply(applied, 4.0), 76.0);
        }
    }

    #[test]
    fn trace_records_commands_undos_and_final_value() {
        let mut out = CapturePresenter::new();
        run(&mut out);
        assert_eq!(
            out.single(),
            "Add: 100\nSub: 24\nMul: 6\nDiv: 2\nUndo Div: 2\nUndo Mul: 6\n\nValue: 76\n"
        );
    }
}
