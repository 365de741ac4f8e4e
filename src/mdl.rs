//! Main module for mdl library functionality
//!
//! The notation compiler runs as a short pipeline:
//!
//!     source text -> lexer (tokens) -> parser (Model) -> validator (canonical Model)
//!                 -> formatter (canonical text)
//!
//! The lexer may run as a background producer feeding a bounded queue, see
//! [lexer::spawn_tokenizer]. Everything else runs on the caller's thread, and the
//! parser, validator and formatter each carry per-call state, so one instance must
//! not be shared between concurrent runs.
//!
//! Entry points:
//!     - [compile]: parse and validate, returning the canonical model
//!     - [format]: render a model as canonical text
//!     - [round_trip]: compile then format, the fixed point of well-formed input

pub mod ast;
pub mod config;
pub mod error;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod validator;

pub use ast::Model;
pub use config::MdlConfig;
pub use error::Error;
pub use formatter::Formatter;
pub use parser::Parser;
pub use validator::Validator;

/// Parse and validate `source` using the default configuration.
pub fn compile(source: &str) -> Result<Model, Error> {
    compile_with(source, &MdlConfig::default())
}

/// Parse and validate `source` with an explicit configuration.
pub fn compile_with(source: &str, config: &MdlConfig) -> Result<Model, Error> {
    let model = Parser::new(source, config.tokenizer.clone()).parse()?;
    let model = Validator::new(config.validation.clone()).validate(&model)?;
    Ok(model)
}

/// Render a model as canonical notation text.
pub fn format(model: &Model) -> String {
    Formatter::new().format_model(model)
}

/// Compile `source` and re-emit it in canonical form.
pub fn round_trip(source: &str) -> Result<String, Error> {
    let model = compile(source)?;
    Ok(format(&model))
}
