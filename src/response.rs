//! Script output module
//!
//! A script response is a sequence of plain text lines. Debug lines echo
//! parsed inputs; the last pushed result line is the operation outcome.

use std::io::{self, Write};

/// Plain-text response body of one script invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptOutput {
    lines: Vec<String>,
    result_index: Option<usize>,
}

impl ScriptOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic line echoing parsed input
    pub fn push_debug(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append the result line
    pub fn push(&mut self, line: impl Into<String>) {
        self.result_index = Some(self.lines.len());
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The result line, skipping any debug output
    pub fn result_line(&self) -> Option<&str> {
        self.result_index
            .and_then(|i| self.lines.get(i))
            .map(String::as_str)
    }

    /// Full response body, every line newline-terminated
    pub fn body(&self) -> String {
        self.lines.iter().fold(String::new(), |mut body, line| {
            body.push_str(line);
            body.push('\n');
            body
        })
    }

    /// Write the response body and flush
    pub fn emit<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.body().as_bytes())?;
        out.flush()
    }
}
