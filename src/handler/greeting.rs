//! Greeting operation family

use crate::cgi::ParsedParameters;
use crate::response::ScriptOutput;

const DEFAULT_NAME: &str = "desconocido";

/// Greeting text for an optional name
pub fn greet(name: Option<&str>) -> String {
    format!("Hola {}!", name.unwrap_or(DEFAULT_NAME))
}

/// Run the greeting against a query string
pub fn run(query: &str) -> ScriptOutput {
    let params = ParsedParameters::parse(query);
    let mut output = ScriptOutput::new();
    output.push(greet(params.first("nombre")));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_name() {
        assert_eq!(run("").lines(), ["Hola desconocido!"]);
        assert_eq!(run("nombre=").lines(), ["Hola desconocido!"]);
    }

    #[test]
    fn test_named() {
        assert_eq!(run("nombre=Ana").lines(), ["Hola Ana!"]);
        assert_eq!(run("nombre=Mar%C3%ADa+Jos%C3%A9").lines(), ["Hola María José!"]);
    }
}
