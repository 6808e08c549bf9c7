//! Processing API for coolor commands
//!
//! This module turns a command string into printable output for a given stage and
//! format. Specs are written as `<stage>-<format>`:
//!
//! - `token-simple`, `token-json`: the classified tokens
//! - `command-simple`, `command-json`, `command-yaml`: the parsed command record
//!
//! ```rust,ignore
//! use coolor::coolor::processor::{process, ProcessingSpec};
//! use coolor::Grammar;
//!
//! let spec = ProcessingSpec::from_string("command-json")?;
//! let output = process("make palette 4 colors", &spec, Grammar::Core)?;
//! ```

use crate::coolor::ast::PaletteCommand;
use crate::coolor::error::ParseError;
use crate::coolor::lexing::{tokenize, Token};
use crate::coolor::parsing::{parse_with, Grammar};
use std::fmt;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Command,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-json" or "command-simple"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "command" => ProcessingStage::Command,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        if stage == ProcessingStage::Token && format == OutputFormat::Yaml {
            return Err(ProcessingError::InvalidFormatType(
                "Format 'yaml' only works with command stage".to_string(),
            ));
        }

        Ok(ProcessingSpec { stage, format })
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
                stage: ProcessingStage::Command,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Command,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Command,
                format: OutputFormat::Yaml,
            },
        ]
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Command => "command",
        };
        let format = match self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        write!(f, "{}-{}", stage, format)
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    Parse(ParseError),
    Serialization(String),
}

impl std::error::Error for ProcessingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessingError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::Parse(err) => write!(f, "{}", err),
            ProcessingError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl From<ParseError> for ProcessingError {
    fn from(err: ParseError) -> Self {
        ProcessingError::Parse(err)
    }
}

/// Process a command string according to the given specification
pub fn process(
    source: &str,
    spec: &ProcessingSpec,
    grammar: Grammar,
) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Token => {
            let tokens = tokenize(source).map_err(ParseError::from)?;
            format_tokens(&tokens, spec.format)
        }
        ProcessingStage::Command => {
            let command = parse_with(source, grammar)?;
            format_command(&command, spec.format)
        }
    }
}

/// Render classified tokens
pub fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(tokens
            .iter()
            .map(|token| token.to_string())
            .collect::<Vec<_>>()
            .join(" ")),
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        OutputFormat::Yaml => Err(ProcessingError::InvalidFormatType(
            "Format 'yaml' only works with command stage".to_string(),
        )),
    }
}

/// Render a parsed command
pub fn format_command(
    command: &PaletteCommand,
    format: OutputFormat,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut lines = vec![
                format!("Command: {}", command.command()),
                format!("Number of Colors: {}", command.number_of_colors()),
            ];
            if let Some(range) = command.range() {
                lines.push(format!("First Color: {}", range.from));
                lines.push(format!("Second Color: {}", range.to));
            }
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => serde_json::to_string_pretty(command)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        OutputFormat::Yaml => serde_yaml::to_string(command)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_from_string() {
        assert_eq!(
            ProcessingSpec::from_string("command-json"),
            Ok(ProcessingSpec {
                stage: ProcessingStage::Command,
                format: OutputFormat::Json,
            })
        );
        assert_eq!(
            ProcessingSpec::from_string("token-simple").map(|s| s.to_string()),
            Ok("token-simple".to_string())
        );
    }

    #[test]
    fn test_invalid_specs() {
        assert_eq!(
            ProcessingSpec::from_string("json"),
            Err(ProcessingError::InvalidFormat("json".to_string()))
        );
        assert_eq!(
            ProcessingSpec::from_string("ast-json"),
            Err(ProcessingError::InvalidStage("ast".to_string()))
        );
        assert_eq!(
            ProcessingSpec::from_string("command-xml"),
            Err(ProcessingError::InvalidFormatType("xml".to_string()))
        );
        assert!(ProcessingSpec::from_string("token-yaml").is_err());
    }

    #[test]
    fn test_available_specs_round_trip_names() {
        for spec in ProcessingSpec::available_specs() {
            assert_eq!(ProcessingSpec::from_string(&spec.to_string()), Ok(spec));
        }
    }

    #[test]
    fn test_process_tokens_simple() {
        let spec = ProcessingSpec::from_string("token-simple").unwrap();
        let output = process("Make palette 3 colors", &spec, Grammar::Core).unwrap();
        assert_eq!(
            output,
            "keyword(Make) keyword(palette) number(3) keyword(colors)"
        );
    }

    #[test]
    fn test_token_stage_does_not_check_grammar() {
        let spec = ProcessingSpec::from_string("token-simple").unwrap();
        let output = process("colors 12 (", &spec, Grammar::Core).unwrap();
        assert_eq!(output, "keyword(colors) number(12) symbol(()");
    }

    #[test]
    fn test_process_command_simple() {
        let spec = ProcessingSpec::from_string("command-simple").unwrap();
        let output = process("generate palette 5 colors", &spec, Grammar::Core).unwrap();
        assert_eq!(output, "Command: GENERATE PALETTE\nNumber of Colors: 5");
    }

    #[test]
    fn test_process_reports_parse_errors_verbatim() {
        let spec = ProcessingSpec::from_string("command-json").unwrap();
        let err = process("", &spec, Grammar::Core).unwrap_err();
        assert_eq!(err, ProcessingError::Parse(ParseError::EmptyInput));
        assert_eq!(err.to_string(), "Input is empty.");
    }
}
