//! Generic parameter substitution
//!
//!     Emitters specialise generic interfaces by replacing each generic parameter with a
//!     concrete argument. Given `type ListLike[V any]` and the argument `[]string`, the
//!     member `GetValue(index int) V` becomes `GetValue(index int) []string`.
//!
//!     Substitution builds new nodes and never touches the originals.

use super::abstraction::{Abstraction, Prefix};
use super::declaration::Declaration;
use super::parameter::{Output, Parameter};
use thiserror::Error;

/// Misuse of the node construction API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("generic bindings require at least one generic parameter")]
    NoParameters,
    #[error("expected {expected} generic arguments but {found} were supplied")]
    ArityMismatch { expected: usize, found: usize },
    #[error("cannot apply prefix `{outer}` to the prefixed argument `{argument}`")]
    ConflictingPrefix { outer: String, argument: String },
    #[error("map key `{name}` must be bound to a plain identifier, not `{argument}`")]
    InvalidMapKey { name: String, argument: String },
}

/// Generic parameter names paired with the arguments that replace them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericBindings {
    bindings: Vec<(String, Abstraction)>,
}

impl GenericBindings {
    /// Pair `parameters` with `arguments` positionally.
    pub fn new(
        parameters: &[Parameter],
        arguments: &[Abstraction],
    ) -> Result<Self, PreconditionError> {
        if parameters.is_empty() {
            return Err(PreconditionError::NoParameters);
        }
        if parameters.len() != arguments.len() {
            return Err(PreconditionError::ArityMismatch {
                expected: parameters.len(),
                found: arguments.len(),
            });
        }
        let bindings = parameters
            .iter()
            .zip(arguments)
            .map(|(parameter, argument)| (parameter.name().to_string(), argument.clone()))
            .collect();
        Ok(Self { bindings })
    }

    /// Bind the generic parameters of `declaration`.
    pub fn for_declaration(
        declaration: &Declaration,
        arguments: &[Abstraction],
    ) -> Result<Self, PreconditionError> {
        Self::new(declaration.parameters(), arguments)
    }

    pub fn get(&self, name: &str) -> Option<&Abstraction> {
        self.bindings
            .iter()
            .find(|(parameter, _)| parameter == name)
            .map(|(_, argument)| argument)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Substitute every bound name inside `abstraction`.
    pub fn apply(&self, abstraction: &Abstraction) -> Result<Abstraction, PreconditionError> {
        let arguments = abstraction
            .arguments()
            .iter()
            .map(|argument| self.apply(argument))
            .collect::<Result<Vec<_>, _>>()?;

        let prefix = match abstraction.prefix() {
            Some(Prefix::Map(key)) => Some(Prefix::Map(self.apply_key(key)?)),
            other => other.cloned(),
        };

        // Alias-qualified names live in another module and are never generic.
        let bound = match abstraction.prefix() {
            Some(Prefix::Alias(_)) => None,
            _ if abstraction.arguments().is_empty() => self.get(abstraction.name()),
            _ => None,
        };

        match bound {
            None => Ok(Abstraction::new(prefix, abstraction.name(), arguments)),
            Some(argument) => match (prefix, argument.prefix()) {
                (Some(outer), Some(_)) => Err(PreconditionError::ConflictingPrefix {
                    outer: outer.to_string(),
                    argument: argument.to_string(),
                }),
                (Some(outer), None) => Ok(Abstraction::new(
                    Some(outer),
                    argument.name(),
                    argument.arguments().to_vec(),
                )),
                (None, _) => Ok(argument.clone()),
            },
        }
    }

    pub fn apply_parameter(&self, parameter: &Parameter) -> Result<Parameter, PreconditionError> {
        Ok(Parameter::new(parameter.name(), self.apply(parameter.abstraction())?))
    }

    pub fn apply_output(&self, output: &Output) -> Result<Output, PreconditionError> {
        match output {
            Output::Abstraction(abstraction) => Ok(Output::Abstraction(self.apply(abstraction)?)),
            Output::Parameters(parameters) => Ok(Output::Parameters(
                parameters
                    .iter()
                    .map(|parameter| self.apply_parameter(parameter))
                    .collect::<Result<Vec<_>, _>>()?,
            )),
        }
    }

    fn apply_key(&self, key: &str) -> Result<String, PreconditionError> {
        match self.get(key) {
            None => Ok(key.to_string()),
            Some(argument) if argument.prefix().is_none() && argument.arguments().is_empty() => {
                Ok(argument.name().to_string())
            }
            Some(argument) => Err(PreconditionError::InvalidMapKey {
                name: key.to_string(),
                argument: argument.to_string(),
            }),
        }
    }
}

impl Abstraction {
    /// Shorthand for [GenericBindings::apply].
    pub fn substitute(&self, bindings: &GenericBindings) -> Result<Abstraction, PreconditionError> {
        bindings.apply(self)
    }
}
