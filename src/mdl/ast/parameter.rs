//! Parameter and result element definitions

use super::abstraction::Abstraction;
use serde::Serialize;
use std::fmt;

/// A named, typed parameter: `value V`
///
/// Also used for generic parameters (`V any`) and for the typed first value of an
/// enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Parameter {
    name: String,
    abstraction: Abstraction,
}

impl Parameter {
    pub fn new(name: impl Into<String>, abstraction: Abstraction) -> Self {
        Self {
            name: name.into(),
            abstraction,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abstraction(&self) -> &Abstraction {
        &self.abstraction
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.abstraction)
    }
}

/// The result of a signature: a single abstraction or named result values
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Output {
    Abstraction(Abstraction),
    Parameters(Vec<Parameter>),
}

impl Output {
    pub fn abstraction(&self) -> Option<&Abstraction> {
        match self {
            Output::Abstraction(abstraction) => Some(abstraction),
            Output::Parameters(_) => None,
        }
    }

    pub fn parameters(&self) -> &[Parameter] {
        match self {
            Output::Abstraction(_) => &[],
            Output::Parameters(parameters) => parameters,
        }
    }
}
