//! Script dispatch module
//!
//! Maps a script name to its handler and feeds it the input source it
//! expects.

use std::fmt;

use super::{calculator, greeting, temperature};
use crate::cgi::InputSource;
use crate::config::ScriptsConfig;
use crate::logger;
use crate::response::ScriptOutput;

/// Where a script takes its raw input from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Leading query-string fragments, at most this many
    Arguments(usize),
    /// The request body
    Body,
}

/// The closed set of scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Calculadora,
    Hola,
    ConvertirTemp,
}

impl Script {
    pub const ALL: [Self; 3] = [Self::Calculadora, Self::Hola, Self::ConvertirTemp];

    /// Look up a script by wire name, with or without a `.py` suffix
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.strip_suffix(".py").unwrap_or(name);
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Calculadora => "calculadora",
            Self::Hola => "hola",
            Self::ConvertirTemp => "convertir_temp",
        }
    }

    pub const fn input_kind(self) -> InputKind {
        match self {
            Self::Calculadora => InputKind::Arguments(3),
            Self::Hola => InputKind::Arguments(1),
            Self::ConvertirTemp => InputKind::Body,
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run one script invocation
///
/// A source of the wrong kind reads as empty input for that script.
pub fn handle(script: Script, input: &InputSource, config: &ScriptsConfig) -> ScriptOutput {
    let output = match script {
        Script::Calculadora => calculator::run(&query_for(script, input), config.echo_inputs),
        Script::Hola => greeting::run(&query_for(script, input)),
        Script::ConvertirTemp => {
            let body = input.body_text();
            logger::log_debug(&format!("[{script}] body: {body:?}"));
            temperature::run(body)
        }
    };
    logger::log_script_run(script.name(), output.result_line().unwrap_or_default());
    output
}

/// Combined query string for an argument-driven script
fn query_for(script: Script, input: &InputSource) -> String {
    let limit = match script.input_kind() {
        InputKind::Arguments(limit) => limit,
        InputKind::Body => 0,
    };
    let query = input.query_string(limit);
    logger::log_debug(&format!("[{script}] query string: {query:?}"));
    query
}
