//! Decorator pattern: responsibilities added without subclassing
//! Example: a user decorated with an address
//!
//! Run with: cargo run --bin decorator

use design_patterns::{Presenter, StdoutPresenter, TraceLog};

trait Describe {
    fn say(&self, log: &mut TraceLog);
}

struct User {
    name: String,
}

impl User {
    fn new(name: &str) -> Self {
        User {
            name: name.to_string(),
        }
    }
}

impl Describe for User {
    fn say(&self, log: &mut TraceLog) {
        log.add(format!("User: {}", self.name));
    }
}

/// Wraps a user and extends its description; callers keep talking to
/// the same trait.
struct DecoratedUser {
    user: User,
    street: String,
    city: String,
}

impl DecoratedUser {
    fn new(user: User, street: &str, city: &str) -> Self {
        DecoratedUser {
            user,
            street: street.to_string(),
            city: city.to_string(),
        }
    }
}

impl Describe for DecoratedUser {
    fn say(&self, log: &mut TraceLog) {
        log.add(format!(
            "Decorated User: {}, {}, {}",
            self.user.name, self.street, self.city
        ));
    }
}

pub fn run(out: &mut dyn Presenter) {
    let mut log = TraceLog::new();

    let user = User::new("Kelly");
    user.say(&mut log);

    let decorated = DecoratedUser::new(user, "Broadway", "New York");
    decorated.say(&mut log);

    log.show(out);
}

fn main() {
    run(&mut StdoutPresenter::titled("Decorator"));
}
