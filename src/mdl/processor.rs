//! File processing API for model files
//!
//! This module runs a model file through the compiler up to a given stage and renders
//! the result in a given format. A processing specification is written as
//! `<stage>-<format>`:
//!
//! - `token-simple`: one token per line, `line:column Kind "text"`
//! - `token-json`: the token list as JSON
//! - `ast-json`: the parsed, unvalidated model as JSON
//! - `model-canonical`: the validated model in canonical text form
//! - `model-check`: a one-line summary of the validated model
//!
//! # Sample Sources
//!
//! The [model_sources] module provides access to the curated sample models under
//! `docs/samples/`. Tests should use them instead of copying model text around.

use crate::mdl::config::MdlConfig;
use crate::mdl::lexer::{tokenize, Token};
use crate::mdl::{compile_with, format, parser, Model};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Represents the processing stage (how far to run the compiler)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
    Model,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Canonical,
    Check,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "model-canonical"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let Some((stage, format)) = format_str.split_once('-') else {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        };

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            "model" => ProcessingStage::Model,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "canonical" => OutputFormat::Canonical,
            "check" => OutputFormat::Check,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        let spec = ProcessingSpec { stage, format };
        if !Self::available_specs().contains(&spec) {
            return Err(ProcessingError::InvalidFormatType(format!(
                "Format '{}' is not supported for the {:?} stage",
                format_str, stage
            )));
        }
        Ok(spec)
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Model,
                format: OutputFormat::Canonical,
            },
            ProcessingSpec {
                stage: ProcessingStage::Model,
                format: OutputFormat::Check,
            },
        ]
    }

    /// The `<stage>-<format>` string of this specification
    pub fn name(&self) -> String {
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
            ProcessingStage::Model => "model",
        };
        let format = match self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Canonical => "canonical",
            OutputFormat::Check => "check",
        };
        format!("{}-{}", stage, format)
    }
}

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Invalid stage: {0}")]
    InvalidStage(String),

    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Compile(#[from] crate::mdl::Error),
}

/// Process a model file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    config: &MdlConfig,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(ProcessingError::FileNotFound(file_path.display().to_string()));
    }
    let content = fs::read_to_string(file_path).map_err(|e| {
        ProcessingError::IoError(format!("Failed to read {}: {}", file_path.display(), e))
    })?;
    debug!(path = %file_path.display(), format = %spec.name(), "processing file");
    process_source(&content, spec, config)
}

/// Process model source text according to the given specification
pub fn process_source(
    source: &str,
    spec: &ProcessingSpec,
    config: &MdlConfig,
) -> Result<String, ProcessingError> {
    match (spec.stage, spec.format) {
        (ProcessingStage::Token, format) => format_tokens(&tokenize(source), format),
        (ProcessingStage::Ast, OutputFormat::Json) => {
            let model = parser::Parser::new(source, config.tokenizer.clone())
                .parse()
                .map_err(crate::mdl::Error::from)?;
            Ok(serde_json::to_string_pretty(&model)?)
        }
        (ProcessingStage::Model, OutputFormat::Canonical) => {
            let model = compile_with(source, config)?;
            Ok(format(&model))
        }
        (ProcessingStage::Model, OutputFormat::Check) => {
            let model = compile_with(source, config)?;
            Ok(summary(&model))
        }
        _ => Err(ProcessingError::InvalidFormatType(format!(
            "Unsupported stage/format combination: {}",
            spec.name()
        ))),
    }
}

/// Format tokens according to the specified output format.
pub fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&token.to_string());
                result.push('\n');
            }
            Ok(result)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tokens)?),
        OutputFormat::Canonical | OutputFormat::Check => Err(ProcessingError::InvalidFormatType(
            "token output only supports 'simple' and 'json'".to_string(),
        )),
    }
}

fn summary(model: &Model) -> String {
    format!(
        "package {}: {} modules, {} types, {} functionals, {} aspects, {} classes, {} instances\n",
        model.header().name(),
        model.modules().len(),
        model.types().len(),
        model.functionals().len(),
        model.aspects().len(),
        model.classes().len(),
        model.instances().len()
    )
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::name)
        .collect()
}

/// Model Sources - Sample Model Access
///
/// Provides access to the sample models under `docs/samples/`. These samples are
/// kept in canonical form, so compiling and formatting any of them reproduces the
/// file byte for byte, except for the intentionally unordered one.
///
/// ## Example Usage
///
/// ```rust,ignore
/// use mdl::mdl::processor::model_sources::ModelSources;
///
/// let content = ModelSources::get_string("collection.mdl").unwrap();
/// let tokens = ModelSources::get_processed("collection.mdl", "token-simple").unwrap();
/// ```
pub mod model_sources {
    use super::*;

    /// Available sample files (canonical sources)
    pub const AVAILABLE_SAMPLES: &[&str] = &["collection.mdl", "minimal.mdl", "unordered.mdl"];

    /// Samples whose text is already canonical
    pub const CANONICAL_SAMPLES: &[&str] = &["collection.mdl", "minimal.mdl"];

    /// Format options for sample content
    #[derive(Debug, Clone, PartialEq)]
    pub enum SampleFormat {
        /// Raw string content
        String,
        /// Processed content using the specified format string
        Processed(String),
    }

    /// Main interface for accessing sample models
    pub struct ModelSources;

    impl ModelSources {
        /// Get the full path to a sample file
        fn sample_path(filename: &str) -> String {
            format!("{}/docs/samples/{}", env!("CARGO_MANIFEST_DIR"), filename)
        }

        /// Validate that a sample file exists and is available
        fn validate_sample(filename: &str) -> Result<(), ProcessingError> {
            if !AVAILABLE_SAMPLES.contains(&filename) {
                return Err(ProcessingError::FileNotFound(format!(
                    "Sample '{}' is not available. Available samples: {:?}",
                    filename, AVAILABLE_SAMPLES
                )));
            }
            Ok(())
        }

        /// Get sample content in the specified format
        pub fn get_sample(filename: &str, format: SampleFormat) -> Result<String, ProcessingError> {
            Self::validate_sample(filename)?;
            let path = Self::sample_path(filename);

            match format {
                SampleFormat::String => fs::read_to_string(&path).map_err(|e| {
                    ProcessingError::IoError(format!("Failed to read {}: {}", path, e))
                }),
                SampleFormat::Processed(format_str) => {
                    let spec = ProcessingSpec::from_string(&format_str)?;
                    process_file(&path, &spec, &MdlConfig::default())
                }
            }
        }

        /// Get sample content as raw string
        pub fn get_string(filename: &str) -> Result<String, ProcessingError> {
            Self::get_sample(filename, SampleFormat::String)
        }

        /// Get sample content processed with the specified format
        pub fn get_processed(filename: &str, format: &str) -> Result<String, ProcessingError> {
            Self::get_sample(filename, SampleFormat::Processed(format.to_string()))
        }

        /// List all available sample files
        pub fn list_samples() -> Vec<&'static str> {
            AVAILABLE_SAMPLES.to_vec()
        }
    }
}
