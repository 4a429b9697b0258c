//! Script handler module
//!
//! Operation dispatch for the supported scripts. Every handler turns an
//! [`InputSource`](crate::cgi::InputSource) into a [`ScriptOutput`](crate::response::ScriptOutput)
//! and never fails: errors become response text.

pub mod calculator;
pub mod error;
pub mod greeting;
pub mod router;
pub mod temperature;

// Re-export main entry points
pub use error::OperationError;
pub use router::{handle, InputKind, Script};
