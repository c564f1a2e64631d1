//! Trace log shared by every pattern demo.
//!
//! Each runner owns one [`TraceLog`], appends lines while the pattern
//! executes, and flushes the whole trace through a [`Presenter`] exactly
//! once at the end. The presenter is the seam between the demos and the
//! terminal, so tests swap in [`CapturePresenter`] and assert on the
//! presented text.

use colored::Colorize;

/// Accumulates trace lines during a single demonstration run.
///
/// The buffer only grows via [`add`](TraceLog::add) and is reset to
/// empty by [`show`](TraceLog::show).
#[derive(Debug, Default)]
pub struct TraceLog {
    buffer: String,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `line` followed by a newline. Always succeeds.
    pub fn add(&mut self, line: impl AsRef<str>) {
        self.buffer.push_str(line.as_ref());
        self.buffer.push('\n');
    }

    /// Hands the accumulated trace to `out` and clears the buffer.
    ///
    /// A second `show` with no intervening `add` presents an empty
    /// string.
    pub fn show(&mut self, out: &mut dyn Presenter) {
        out.present(&self.buffer);
        self.buffer.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

/// Presentation channel: accepts a block of text and displays it.
pub trait Presenter {
    fn present(&mut self, text: &str);
}

/// Writes the trace to standard output, under a colored title banner
/// when one is set.
#[derive(Debug, Default)]
pub struct StdoutPresenter {
    title: Option<String>,
}

impl StdoutPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titled(title: impl Into<String>) -> Self {
        StdoutPresenter {
            title: Some(title.into()),
        }
    }
}

impl Presenter for StdoutPresenter {
    fn present(&mut self, text: &str) {
        if let Some(title) = &self.title {
            println!("{}", format!("=== {title} ===").bold().cyan());
        }
        print!("{text}");
    }
}

/// In-memory presenter recording every presented block, for tests.
#[derive(Debug, Default)]
pub struct CapturePresenter {
    shown: Vec<String>,
}

impl CapturePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All blocks presented so far, in order.
    pub fn shown(&self) -> &[String] {
        &self.shown
    }

    /// The one block a single-`show` runner presented.
    pub fn single(&self) -> &str {
        assert_eq!(self.shown.len(), 1, "expected exactly one show() call");
        &self.shown[0]
    }
}

impl Presenter for CapturePresenter {
    fn present(&mut self, text: &str) {
        self.shown.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn add_appends_lines_in_order() {
        let mut log = TraceLog::new();
        log.add("a");
        log.add("b");

        let mut out = CapturePresenter::new();
        log.show(&mut out);
        assert_eq!(out.single(), "a\nb\n");
    }

    #[test]
    fn show_clears_the_buffer() {
        let mut log = TraceLog::new();
        log.add("line");

        let mut out = CapturePresenter::new();
        log.show(&mut out);
        assert!(log.is_empty());

        log.show(&mut out);
        assert_eq!(out.shown(), ["line\n".to_string(), String::new()]);
    }

    #[test]
    fn show_on_empty_log_presents_empty_string() {
        let mut log = TraceLog::new();
        let mut out = CapturePresenter::new();
        log.show(&mut out);
        log.show(&mut out);
        assert_eq!(out.shown(), [String::new(), String::new()]);
    }

    #[test]
    fn add_accepts_owned_and_borrowed_lines() {
        let mut log = TraceLog::new();
        log.add("borrowed");
        log.add(format!("owned {}", 42));

        let mut out = CapturePresenter::new();
        log.show(&mut out);
        assert_eq!(out.single(), "borrowed\nowned 42\n");
    }

    proptest! {
        #[test]
        fn presented_text_is_concatenation_of_lines(lines: Vec<String>) {
            let mut log = TraceLog::new();
            for line in &lines {
                log.add(line);
            }

            let mut out = CapturePresenter::new();
            log.show(&mut out);

            let expected: String =
                lines.iter().map(|l| format!("{l}\n")).collect();
            prop_assert_eq!(out.single(), expected);
            prop_assert!(log.is_empty());
        }
    }
}
