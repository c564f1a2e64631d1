//! # Design Patterns Catalogue
//!
//! Self-contained demonstrations of the classic object-oriented design
//! patterns, one runnable binary per pattern. Every demo builds a small
//! object graph, drives it through a fixed sequence of operations, and
//! collects its trace in a [`TraceLog`] that is presented exactly once
//! at the end of the run.
//!
//! ## Patterns Covered
//!
//! 1. **Behavioral** - Chain of Responsibility, Command, Iterator,
//!    Mediator, Memento, Observer, State, Strategy, Template Method,
//!    Visitor
//! 2. **Creational** - Abstract Factory, Builder, Factory Method,
//!    Prototype, Singleton
//! 3. **Structural** - Adapter, Bridge, Composite, Decorator, Facade,
//!    Flyweight, Proxy
//!
//! ## Running Demos
//!
//! ```bash
//! # Behavioral
//! cargo run --bin chain_of_responsibility
//! cargo run --bin command
//! cargo run --bin observer
//! cargo run --bin state
//!
//! # Creational
//! cargo run --bin abstract_factory
//! cargo run --bin builder
//! cargo run --bin singleton
//!
//! # Structural
//! cargo run --bin adapter
//! cargo run --bin flyweight
//! cargo run --bin proxy
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Library error type for unknown factory keys
//! - `anyhow` - Fatal error propagation in fallible demos
//! - `serde` / `serde_json` - Memento snapshots
//! - `colored` - Terminal banners

pub mod error;
pub mod tracelog;

pub use error::UnknownVariant;
pub use tracelog::{CapturePresenter, Presenter, StdoutPresenter, TraceLog};
