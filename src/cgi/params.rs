//! Query-string parameter parsing module
//!
//! Decodes `application/x-www-form-urlencoded` text into a case-sensitive
//! multi-map. Lookups of absent keys resolve to a caller-supplied default.

use std::collections::HashMap;
use url::form_urlencoded;

/// Decoded parameters: name -> one or more values in arrival order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedParameters {
    values: HashMap<String, Vec<String>>,
}

impl ParsedParameters {
    /// Parse a raw query string
    ///
    /// Pairs are `&`-separated, the first `=` splits key from value, `+`
    /// decodes to a space and `%XX` sequences are percent-decoded.
    /// Pairs with an empty value, including bare keys without `=`, are
    /// dropped.
    pub fn parse(raw: &str) -> Self {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            values
                .entry(key.into_owned())
                .or_default()
                .push(value.into_owned());
        }
        Self { values }
    }

    /// First value for `name`, if present
    pub fn first(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// All values for `name`, empty if absent
    #[cfg(test)]
    pub fn all(&self, name: &str) -> &[String] {
        self.values.get(name).map_or(&[][..], Vec::as_slice)
    }

    /// First value for `name`, or `default` when the key is absent
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.first(name).unwrap_or(default)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Classified request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// `key=value` form data
    Form(ParsedParameters),
    /// A bare value with no `=` anywhere
    Scalar(String),
}

impl RawInput {
    /// Classify raw text: form data if it contains `=`, otherwise a scalar
    pub fn classify(raw: &str) -> Self {
        if raw.contains('=') {
            Self::Form(ParsedParameters::parse(raw))
        } else {
            Self::Scalar(raw.to_string())
        }
    }
}
