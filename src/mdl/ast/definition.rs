//! Type, enumeration and functional element definitions

use super::abstraction::Abstraction;
use super::declaration::Declaration;
use super::parameter::{Output, Parameter};
use serde::Serialize;

/// A group of auto-incrementing constants:
///
/// ```text
/// const (
///     LesserRank Rank = iota
///     EqualRank
///     GreaterRank
/// )
/// ```
///
/// The typed first value is the [Parameter]; the names listed after it are the
/// `values`, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enumeration {
    parameter: Parameter,
    values: Vec<String>,
}

impl Enumeration {
    pub fn new(parameter: Parameter, values: Vec<String>) -> Self {
        Self { parameter, values }
    }

    pub fn parameter(&self) -> &Parameter {
        &self.parameter
    }

    /// The names following the `iota` line.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Every constant name, starting with the typed first value.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.parameter.name()).chain(self.values.iter().map(String::as_str))
    }
}

/// A named type: `type Rank uint8`, optionally enumerated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Type {
    declaration: Declaration,
    abstraction: Abstraction,
    enumeration: Option<Enumeration>,
}

impl Type {
    pub fn new(
        declaration: Declaration,
        abstraction: Abstraction,
        enumeration: Option<Enumeration>,
    ) -> Self {
        Self {
            declaration,
            abstraction,
            enumeration,
        }
    }

    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    pub fn abstraction(&self) -> &Abstraction {
        &self.abstraction
    }

    pub fn enumeration(&self) -> Option<&Enumeration> {
        self.enumeration.as_ref()
    }
}

/// A function-pointer type: `type RankingFunction[V any] func(...) Rank`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Functional {
    declaration: Declaration,
    parameters: Vec<Parameter>,
    output: Output,
}

impl Functional {
    pub fn new(declaration: Declaration, parameters: Vec<Parameter>, output: Output) -> Self {
        Self {
            declaration,
            parameters,
            output,
        }
    }

    pub fn declaration(&self) -> &Declaration {
        &self.declaration
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn output(&self) -> &Output {
        &self.output
    }
}
