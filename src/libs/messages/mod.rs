//! User-facing text for the reporter.
//!
//! Every string the program prints outside the report body itself is a
//! [`Message`] variant, rendered through its `Display` implementation.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
