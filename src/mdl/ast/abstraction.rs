//! Abstraction element definition
//!
//! An abstraction is a reference to a type: `int`, `[]V`, `map[string]V`,
//! `chan Event`, `abs.Sequential[V]` or `Association[K, V]`.

use serde::Serialize;
use std::fmt;

/// Marker written in front of an abstraction's name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Prefix {
    /// `[]`
    Array,
    /// `map[key]`, carrying the key type identifier
    Map(String),
    /// `chan `
    Channel,
    /// `alias.`, carrying the module alias
    Alias(String),
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prefix::Array => write!(f, "[]"),
            Prefix::Map(key) => write!(f, "map[{}]", key),
            Prefix::Channel => write!(f, "chan "),
            Prefix::Alias(alias) => write!(f, "{}.", alias),
        }
    }
}

/// A type reference with an optional prefix and optional generic arguments
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Abstraction {
    prefix: Option<Prefix>,
    name: String,
    arguments: Vec<Abstraction>,
}

impl Abstraction {
    pub fn new(
        prefix: Option<Prefix>,
        name: impl Into<String>,
        arguments: Vec<Abstraction>,
    ) -> Self {
        Self {
            prefix,
            name: name.into(),
            arguments,
        }
    }

    /// A bare named reference with no prefix and no arguments.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(None, name, Vec::new())
    }

    pub fn prefix(&self) -> Option<&Prefix> {
        self.prefix.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[Abstraction] {
        &self.arguments
    }

    /// The module alias this abstraction is qualified with, if any.
    pub fn alias(&self) -> Option<&str> {
        match &self.prefix {
            Some(Prefix::Alias(alias)) => Some(alias),
            _ => None,
        }
    }

    /// True for a plain reference to `name` (no prefix, no arguments).
    pub fn is_plain(&self, name: &str) -> bool {
        self.prefix.is_none() && self.arguments.is_empty() && self.name == name
    }
}

impl fmt::Display for Abstraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(f, "{}", prefix)?;
        }
        write!(f, "{}", self.name)?;
        if !self.arguments.is_empty() {
            write!(f, "[")?;
            for (index, argument) in self.arguments.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", argument)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
