//! Observer pattern: event subscription
//! Example: handlers subscribe to an event and react to fired payloads
//!
//! Run with: cargo run --bin observer

use design_patterns::{Presenter, StdoutPresenter, TraceLog};

/// Token returned by [`Event::subscribe`]; hand it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HandlerId(usize);

/// One-to-many event source. Handlers get the payload and the trace
/// log, so the event never holds a borrow of either.
struct Event<T: ?Sized> {
    handlers: Vec<(HandlerId, Box<dyn Fn(&T, &mut TraceLog)>)>,
    next_id: usize,
}

impl<T: ?Sized> Event<T> {
    fn new() -> Self {
        Event {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    fn subscribe(&mut self, handler: impl Fn(&T, &mut TraceLog) + 'static) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    fn unsubscribe(&mut self, id: HandlerId) {
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
    }

    fn fire(&self, payload: &T, log: &mut TraceLog) {
        for (_, handler) in &self.handlers {
            handler(payload, log);
        }
    }
}

pub fn run(out: &mut dyn Presenter) {
    let mut log = TraceLog::new();

    let mut click: Event<str> = Event::new();
    let subscription = click.subscribe(|item, log| log.add(format!("fired: {item}")));

    click.fire("event #1", &mut log);
    click.unsubscribe(subscription);
    click.fire("event #2", &mut log);
    click.subscribe(|item, log| log.add(format!("fired: {item}")));
    click.fire("event #3", &mut log);

    log.show(out);
}

fn main() {
    run(&mut StdoutPresenter::titled("Observer"));
}
