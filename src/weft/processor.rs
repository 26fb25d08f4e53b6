//! Processing API for passages
//!
//! Runs a passage through a stage (`token` or `ast`) and renders the result in one of the
//! output formats. Format strings take the form `<stage>-<format>`:
//!
//! ```rust,ignore
//! use weft::weft::processor::{process_source, ProcessingSpec};
//!
//! let spec = ProcessingSpec::from_string("ast-treeviz")?;
//! let output = process_source("[[Home]]", &spec, MacroCatalog::builtin())?;
//! ```

use crate::weft::catalog::MacroCatalog;
use crate::weft::error::ParseError;
use crate::weft::formats::to_treeviz_str;
use crate::weft::lexer::{tokenize, TokenSpan};
use crate::weft::parser::parse_with_catalog;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Treeviz,
}

impl OutputFormat {
    fn name(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Treeviz => "treeviz",
        }
    }
}

/// A stage paired with an output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let Some((stage, format)) = format_str.split_once('-') else {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        };

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            other => return Err(ProcessingError::InvalidStage(other.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "treeviz" => OutputFormat::Treeviz,
            other => return Err(ProcessingError::InvalidFormatType(other.to_string())),
        };

        let spec = ProcessingSpec { stage, format };
        if !Self::available_specs().contains(&spec) {
            return Err(ProcessingError::InvalidFormatType(format!(
                "format '{}' is not supported for the {} stage",
                format.name(),
                spec.stage_name()
            )));
        }
        Ok(spec)
    }

    /// Every supported stage and format pairing
    pub fn available_specs() -> Vec<ProcessingSpec> {
        use OutputFormat::*;
        use ProcessingStage::*;
        [
            (Token, Simple),
            (Token, Json),
            (Ast, Json),
            (Ast, Yaml),
            (Ast, Treeviz),
        ]
        .into_iter()
        .map(|(stage, format)| ProcessingSpec { stage, format })
        .collect()
    }

    fn stage_name(&self) -> &'static str {
        match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        }
    }

    /// The `<stage>-<format>` string for this pairing
    pub fn name(&self) -> String {
        format!("{}-{}", self.stage_name(), self.format.name())
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Process passage text with the given stage and format
pub fn process_source(
    source: &str,
    spec: &ProcessingSpec,
    catalog: &MacroCatalog,
) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Token => {
            let tokens = tokenize(source)?;
            format_tokens(&tokens, spec.format)
        }
        ProcessingStage::Ast => {
            let program = parse_with_catalog(source, catalog)?;
            match spec.format {
                OutputFormat::Json => serde_json::to_string_pretty(&program)
                    .map_err(|e| ProcessingError::Serialization(e.to_string())),
                OutputFormat::Yaml => serde_yaml::to_string(&program)
                    .map_err(|e| ProcessingError::Serialization(e.to_string())),
                OutputFormat::Treeviz => Ok(to_treeviz_str(&program)),
                OutputFormat::Simple => Err(ProcessingError::InvalidFormatType(
                    "format 'simple' only works with the token stage".to_string(),
                )),
            }
        }
    }
}

/// Process a passage file with the given stage and format
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    catalog: &MacroCatalog,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path.as_ref())
        .map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_source(&content, spec, catalog)
}

/// Format tokens according to the specified output format.
pub fn format_tokens(tokens: &[TokenSpan], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(tokens
            .iter()
            .map(|(token, span)| format!("{} {:?} {}..{}\n", token, token.text, span.start, span.end))
            .collect()),
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        other => Err(ProcessingError::InvalidFormatType(format!(
            "format '{}' only works with the ast stage",
            other.name()
        ))),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::name)
        .collect()
}
