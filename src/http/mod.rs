//! HTTP protocol layer module
//!
//! Response builders used by the development host, decoupled from the
//! script logic.

pub mod response;

// Re-export commonly used types
pub use response::{
    build_404_response, build_405_response, build_413_response, build_text_response,
};
