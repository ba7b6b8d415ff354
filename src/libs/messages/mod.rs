//! User-facing messages and the macros that print them.
//!
//! All console text lives in [`Message`] and its `Display` impl; the macros in
//! [`macros`] decide whether it goes to the terminal or to `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
