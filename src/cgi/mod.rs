//! CGI input layer
//!
//! Everything between the raw invocation input and the operation handlers:
//! acquiring the raw query string or body, decoding it into parameters,
//! and the numeric helpers shared by the operations.

pub mod input;
pub mod numeric;
pub mod params;

// Re-export commonly used types
pub use input::{combine_fragments, read_body, InputSource};
pub use numeric::{format_number, parse_number, sanitize_numeric};
pub use params::{ParsedParameters, RawInput};
