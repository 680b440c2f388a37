use crate::error::{LocStringsError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub classification: ClassificationConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub scan: ScanConfig,
}

/// How a classification token is matched against a path string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Token may appear anywhere in the path (`foo.swift.bak` is a swift file)
    #[default]
    Contains,
    /// Path must end with the token
    Suffix,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassificationConfig {
    pub match_mode: MatchMode,
    pub source_token: String,
    pub storyboard_token: String,
    pub xib_token: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub multiline_literals: bool,
    pub attributes: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    pub follow_links: bool,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Contains,
            source_token: ".swift".to_string(),
            storyboard_token: ".storyboard".to_string(),
            xib_token: ".xib".to_string(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            multiline_literals: true,
            attributes: vec![
                "text".to_string(),
                "title".to_string(),
                "placeholder".to_string(),
            ],
        }
    }
}

pub const DEFAULT_CONFIG_PATHS: &[&str] = &["locstrings.toml", ".locstrings.toml"];

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(LocStringsError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| LocStringsError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| LocStringsError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                for default_path in DEFAULT_CONFIG_PATHS {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(match_mode) = cli_args.match_mode {
            self.classification.match_mode = match_mode;
        }

        if let Some(multiline) = cli_args.multiline_literals {
            self.extraction.multiline_literals = multiline;
        }
    }

    pub fn validate(&self) -> Result<()> {
        let tokens = [
            ("source_token", &self.classification.source_token),
            ("storyboard_token", &self.classification.storyboard_token),
            ("xib_token", &self.classification.xib_token),
        ];

        for (name, token) in tokens {
            if token.is_empty() {
                return Err(LocStringsError::Config {
                    message: format!("Classification token {} must not be empty", name),
                });
            }
        }

        if self.extraction.attributes.is_empty() {
            return Err(LocStringsError::Config {
                message: "At least one attribute must be specified".to_string(),
            });
        }

        for attribute in &self.extraction.attributes {
            if !is_valid_attribute_name(attribute) {
                return Err(LocStringsError::Config {
                    message: format!("Invalid attribute name: {:?}", attribute),
                });
            }
        }

        Ok(())
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | ':' | '-'))
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub match_mode: Option<MatchMode>,
    pub multiline_literals: Option<bool>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_match_mode(mut self, match_mode: Option<MatchMode>) -> Self {
        self.match_mode = match_mode;
        self
    }

    pub fn with_multiline_literals(mut self, multiline: Option<bool>) -> Self {
        self.multiline_literals = multiline;
        self
    }
}
