//! Input acquisition module
//!
//! A script receives its raw input from exactly one source: positional
//! query-string fragments, or the request body on standard input.

use std::io::{self, Read};

/// Raw input handed to a script for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Query-string fragments passed as invocation arguments
    Arguments(Vec<String>),
    /// Full request body
    Body(String),
}

impl InputSource {
    /// Build an argument source from anything string-like
    pub fn arguments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Arguments(fragments.into_iter().map(Into::into).collect())
    }

    /// Build a body source, trimming surrounding whitespace
    pub fn body(raw: &str) -> Self {
        Self::Body(raw.trim().to_string())
    }

    /// Combined query string from the first `limit` fragments
    ///
    /// A body source yields an empty query string.
    pub fn query_string(&self, limit: usize) -> String {
        match self {
            Self::Arguments(fragments) => {
                let taken = &fragments[..fragments.len().min(limit)];
                combine_fragments(taken)
            }
            Self::Body(_) => String::new(),
        }
    }

    /// Body text, empty for an argument source
    pub fn body_text(&self) -> &str {
        match self {
            Self::Body(body) => body,
            Self::Arguments(_) => "",
        }
    }
}

/// Combine query-string fragments into a single query string
///
/// Fragments are joined with `&` only when every one of them is non-empty;
/// otherwise they are concatenated directly, so an empty fragment never
/// produces a doubled or dangling separator.
///
/// ```
/// use cgi_scripts::cgi::combine_fragments;
/// assert_eq!(combine_fragments(&["num1=1", "num2=2"]), "num1=1&num2=2");
/// assert_eq!(combine_fragments(&["", "num2=2"]), "num2=2");
/// ```
pub fn combine_fragments<S: AsRef<str>>(fragments: &[S]) -> String {
    if fragments.iter().all(|f| !f.as_ref().is_empty()) {
        fragments
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("&")
    } else {
        fragments.iter().map(AsRef::as_ref).collect()
    }
}

/// Read an entire request body and strip leading/trailing whitespace
pub fn read_body<R: Read>(mut reader: R) -> io::Result<String> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    Ok(raw.trim().to_string())
}
