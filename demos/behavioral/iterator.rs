//! Iterator pattern: cursor over a heterogeneous collection
//! Example: external and internal traversal of mixed items
//!
//! Run with: cargo run --bin iterator

use std::fmt;

use design_patterns::{Presenter, StdoutPresenter, TraceLog};
use itertools::Itertools;

/// The closed set of item shapes the collection may hold.
#[derive(Debug, Clone, PartialEq)]
enum Item {
    Text(&'static str),
    Number(i64),
    Flag(bool),
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Text(text) => write!(f, "{text}"),
            Item::Number(n) => write!(f, "{n}"),
            Item::Flag(b) => write!(f, "{b}"),
        }
    }
}

/// Sequential access to an aggregate without exposing its storage.
struct Cursor<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Cursor<T> {
    fn new(items: Vec<T>) -> Self {
        Cursor { items, index: 0 }
    }

    /// Rewinds and returns the first item.
    fn first(&mut self) -> Option<&T> {
        self.reset();
        self.next()
    }

    fn next(&mut self) -> Option<&T> {
        let item = self.items.get(self.index);
        if item.is_some() {
            self.index += 1;
        }
        item
    }

    fn has_next(&self) -> bool {
        self.index < self.items.len()
    }

    fn reset(&mut self) {
        self.index = 0;
    }

    /// Internal iteration: rewinds, then applies `f` to every item.
    fn each(&mut self, mut f: impl FnMut(&T)) {
        self.reset();
        while let Some(item) = self.next() {
            f(item);
        }
    }

    fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

pub fn run(out: &mut dyn Presenter) {
    let mut log = TraceLog::new();

    let mut cursor = Cursor::new(vec![
        Item::Text("one"),
        Item::Number(2),
        Item::Text("circle"),
        Item::Flag(true),
        Item::Text("Applepie"),
    ]);

    // External iteration through the cursor protocol.
    if let Some(item) = cursor.first() {
        log.add(item.to_string());
    }
    while let Some(item) = cursor.next() {
        log.add(item.to_string());
    }
    log.add("");

    // Internal iteration hands each item to the callback.
    cursor.each(|item| log.add(item.to_string()));
    log.add("");

    log.add(format!("All: {}", cursor.iter().join(", ")));
    log.show(out);
}

fn main() {
    run(&mut StdoutPresenter::titled("Iterator"));
}
