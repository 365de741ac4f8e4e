//! Declaration element definition

use super::parameter::Parameter;
use serde::Serialize;

/// The head shared by every top-level declaration:
///
/// ```text
/// /*
/// ListLike[V any] is an instance interface...
/// */
/// type ListLike[V any]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    comment: String,
    name: String,
    parameters: Vec<Parameter>,
}

impl Declaration {
    pub fn new(
        comment: impl Into<String>,
        name: impl Into<String>,
        parameters: Vec<Parameter>,
    ) -> Self {
        Self {
            comment: comment.into(),
            name: name.into(),
            parameters,
        }
    }

    /// The block comment, delimiters included.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Generic parameters, empty when the declaration is not generic.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn is_generic(&self) -> bool {
        !self.parameters.is_empty()
    }
}
