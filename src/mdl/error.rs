//! Crate-level error type
//!
//! Each stage has its own error type; [Error] wraps them for the convenience entry
//! points in [crate::mdl] that run more than one stage.

use crate::mdl::ast::PreconditionError;
use crate::mdl::parser::ParseError;
use crate::mdl::validator::ValidationError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Precondition(#[from] PreconditionError),
}
