//! Host-testable logic for the pagelift enhancement layer.
//!
//! Everything in this crate is plain Rust with no browser types, so the
//! state machines and derivations that drive the wasm glue in
//! `pagelift_web` can be unit-tested natively. The glue crate owns all
//! DOM access; this crate owns the decisions.

pub mod config;
pub mod effects;
pub mod frame;
pub mod menu;
pub mod watch;
