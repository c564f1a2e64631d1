//! Mediator pattern: chatroom routing messages between participants
//! Example: directed messages and broadcasts through one mediator
//!
//! Run with: cargo run --bin mediator

use design_patterns::{Presenter, StdoutPresenter, TraceLog};

struct Participant {
    name: String,
}

impl Participant {
    fn new(name: impl Into<String>) -> Self {
        Participant { name: name.into() }
    }

    fn receive(&self, message: &str, from: &str, log: &mut TraceLog) {
        log.add(format!("{from} to {}: {message}", self.name));
    }
}

/// Central hub all chat traffic goes through; participants never talk
/// to each other directly.
#[derive(Default)]
struct Chatroom {
    // Broadcast order is registration order.
    roster: Vec<Participant>,
}

impl Chatroom {
    fn new() -> Self {
        Self::default()
    }

    fn register(&mut self, participant: Participant) {
        self.roster.push(participant);
    }

    /// Delivers to `to` when given, otherwise broadcasts to everyone
    /// except the sender.
    fn send(&self, message: &str, from: &str, to: Option<&str>, log: &mut TraceLog) {
        match to {
            Some(name) => {
                if let Some(receiver) = self.roster.iter().find(|p| p.name == name) {
                    receiver.receive(message, from, log);
                }
            }
            None => {
                for receiver in self.roster.iter().filter(|p| p.name != from) {
                    receiver.receive(message, from, log);
                }
            }
        }
    }
}

pub fn run(out: &mut dyn Presenter) {
    let mut log = TraceLog::new();

    let mut chatroom = Chatroom::new();
    chatroom.register(Participant::new("Yoko"));
    chatroom.register(Participant::new("John"));
    chatroom.register(Participant::new("Paul"));
    chatroom.register(Participant::new("Ringo"));

    chatroom.send("All you need is love.", "Yoko", None, &mut log);
    chatroom.send("I love you John.", "Yoko", None, &mut log);
    chatroom.send("Hey, no need to broadcast", "John", Some("Yoko"), &mut log);
    chatroom.send("Ha, I heard that!", "Paul", None, &mut log);
    chatroom.send("Paul, what do you think?", "Ringo", Some("Paul"), &mut log);

    log.show(out);
}

fn main() {
    run(&mut StdoutPresenter::titled("Mediator"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use design_patterns::CapturePresenter;

    fn room_with(names: &[&str]) -> Chatroom {
        let mut room = Chatroom::new();
        for name in names {
            room.register(Participant::new(*name));
        }
        room
    }

    #[test]
    fn broadcast_skips_the_sender() {
        let room = room_with(&["Yoko", "John", "Paul"]);
        let mut log = TraceLog::new();
        room.send("hello", "Yoko", None, &mut log);

        let mut out = CapturePresenter::new();
        log.show(&mut out);
        assert_eq!(out.single(), "Yoko to John: hello\nYoko to Paul: hello\n");
    }

    #[test]
    fn directed_message_reaches_only_the_recipient() {
        let room = room_with(&["Yoko", "John", "Paul"]);
        let mut log = TraceLog::new();
        room.send("psst", "John", Some("Paul"), &mut log);

        let mut out = CapturePresenter::new();
        log.show(&mut out);
        assert_eq!(out.single(), "John to Paul: psst\n");
    }

    #[test]
    fn directed_message_to_unknown_name_delivers_nothing() {
        let room = room_with(&["Yoko", "John"]);
        let mut log = TraceLog::new();
        room.send("anyone?", "Yoko", Some("George"), &mut log);
        assert!(log.is_empty());
    }

    #[test]
    fn trace_matches_the_scripted_conversation() {
        let mut out = CapturePresenter::new();
        run(&mut out);
        assert_eq!(
            out.single(),
            "Yoko to John: All you need is love.\n\
             Yoko to Paul: All you need is love.\n\
             Yoko to Ringo: All you need is love.\n\
             Yoko to John: I love you John.\n\
             Yoko to Paul: I love you John.\n\
             Yoko to Ringo: I love you John.\n\
             John to Yoko: Hey, no need to broadcast\n\
             Paul to Yoko: Ha, I heard that!\n\
             Paul to John: Ha, I heard that!\n\
             Paul to Ringo: Ha, I heard that!\n\
             Ringo to Paul: Paul, what do you think?\n"
        );
    }
}
