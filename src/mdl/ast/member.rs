//! Interface member element definitions
//!
//! Class interfaces hold constants, constructors and functions; instance interfaces
//! hold attributes and methods; aspects hold methods only.

use super::abstraction::Abstraction;
use super::parameter::{Output, Parameter};
use serde::Serialize;

/// `Capacity() int`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constant {
    name: String,
    abstraction: Abstraction,
}

impl Constant {
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

/// `MakeFromArray(values []V) ListLike[V]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constructor {
    name: String,
    parameters: Vec<Parameter>,
    abstraction: Abstraction,
}

impl Constructor {
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<Parameter>,
        abstraction: Abstraction,
    ) -> Self {
        Self {
            name: name.into(),
            parameters,
            abstraction,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn abstraction(&self) -> &Abstraction {
        &self.abstraction
    }
}

/// A class-level function: `Concatenate(first ListLike[V], ...) ListLike[V]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    name: String,
    parameters: Vec<Parameter>,
    output: Output,
}

impl Function {
    pub fn new(name: impl Into<String>, parameters: Vec<Parameter>, output: Output) -> Self {
        Self {
            name: name.into(),
            parameters,
            output,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn output(&self) -> &Output {
        &self.output
    }
}

/// An accessor on an instance: `GetClass() ListClassLike[V]` or `SetLimit(limit int)`
///
/// Getters carry an abstraction and no parameter, setters a parameter and no
/// abstraction. The parser accepts either shape for any name; the validator decides
/// which one the name calls for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    name: String,
    parameter: Option<Parameter>,
    abstraction: Option<Abstraction>,
}

impl Attribute {
    pub fn new(
        name: impl Into<String>,
        parameter: Option<Parameter>,
        abstraction: Option<Abstraction>,
    ) -> Self {
        Self {
            name: name.into(),
            parameter,
            abstraction,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameter(&self) -> Option<&Parameter> {
        self.parameter.as_ref()
    }

    pub fn abstraction(&self) -> Option<&Abstraction> {
        self.abstraction.as_ref()
    }
}

/// `AppendValue(value V)` or `GetValue(index int) V`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    name: String,
    parameters: Vec<Parameter>,
    output: Option<Output>,
}

impl Method {
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<Parameter>,
        output: Option<Output>,
    ) -> Self {
        Self {
            name: name.into(),
            parameters,
            output,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn output(&self) -> Option<&Output> {
        self.output.as_ref()
    }
}
