//! Service configuration.

use std::path::PathBuf;

use crate::{DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT, DEFAULT_TOKENIZER_MAX_INPUT_BYTES};

/// Which strategy the sentence splitter tries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerKind {
    /// UAX #29 boundaries with abbreviation repair, falling back to the scan
    Unicode,
    /// Character scan only
    Simple,
}

impl TokenizerKind {
    /// Parse a tokenizer name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "unicode" | "uax29" | "default" => Some(Self::Unicode),
            "simple" | "fallback" => Some(Self::Simple),
            _ => None,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Global service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Interface to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Primary sentence tokenizer
    pub tokenizer: TokenizerKind,

    /// Extra abbreviations for the unicode tokenizer, one per line
    pub abbreviations_file: Option<PathBuf>,

    /// Inputs larger than this skip straight to the fallback splitter
    pub tokenizer_max_input_bytes: usize,

    /// Maximum accepted request body
    pub max_body_bytes: usize,

    /// Log output format
    pub log_format: LogFormat,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            tokenizer: TokenizerKind::Unicode,
            abbreviations_file: None,
            tokenizer_max_input_bytes: DEFAULT_TOKENIZER_MAX_INPUT_BYTES,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_format: LogFormat::Text,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            tokenizer: std::env::var("SENTENCE_TOKENIZER")
                .ok()
                .and_then(|s| TokenizerKind::parse(&s))
                .unwrap_or(defaults.tokenizer),
            abbreviations_file: std::env::var("ABBREVIATIONS_FILE")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            tokenizer_max_input_bytes: std::env::var("TOKENIZER_MAX_INPUT_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.tokenizer_max_input_bytes),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_bytes),
            log_format: match std::env::var("LOG_FORMAT") {
                Ok(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
                _ => defaults.log_format,
            },
        }
    }

    /// Address string suitable for binding a listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizer_kind_parse() {
        assert_eq!(TokenizerKind::parse("Unicode"), Some(TokenizerKind::Unicode));
        assert_eq!(TokenizerKind::parse(" simple "), Some(TokenizerKind::Simple));
        assert_eq!(TokenizerKind::parse("fallback"), Some(TokenizerKind::Simple));
        assert_eq!(TokenizerKind::parse("nltk"), None);
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.tokenizer, TokenizerKind::Unicode);
        assert!(config.abbreviations_file.is_none());
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
    }
}
