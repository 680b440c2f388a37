use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocStringsError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path validation failed: {path}")]
    InvalidPath { path: String },

    #[error("Failed to list directory: {path}")]
    DirectoryRead {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8 text: {path}")]
    InvalidEncoding { path: String },

    #[error("Invalid extraction pattern: {pattern}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for LocStringsError {
    fn user_message(&self) -> String {
        match self {
            LocStringsError::InvalidPath { path } => {
                format!("Invalid scan root: {}", path)
            }
            LocStringsError::DirectoryRead { path, source } => {
                format!("Could not list directory {}: {}", path, source)
            }
            LocStringsError::FileRead { path, source } => {
                format!("Could not read {}: {}", path, source)
            }
            LocStringsError::InvalidEncoding { path } => {
                format!("{} is not valid UTF-8 text", path)
            }
            LocStringsError::Pattern { pattern, source } => {
                format!("Pattern {} failed to compile: {}", pattern, source)
            }
            LocStringsError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            LocStringsError::Io(_) => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            LocStringsError::InvalidPath { .. } => Some(
                "Pass an existing directory as the first argument (e.g., locstrings ./MyApp)."
                    .to_string(),
            ),
            LocStringsError::DirectoryRead { .. } | LocStringsError::FileRead { .. } => Some(
                "Check that you have read permission for every file and directory under the scan root."
                    .to_string(),
            ),
            LocStringsError::InvalidEncoding { .. } => Some(
                "Convert the file to UTF-8, or rename it so it no longer matches a classification token."
                    .to_string(),
            ),
            LocStringsError::Pattern { .. } => Some(
                "Check the attribute names in the [extraction] section of your configuration file."
                    .to_string(),
            ),
            LocStringsError::Config { .. } => Some(
                "Check your configuration file syntax, or regenerate one with --generate-config."
                    .to_string(),
            ),
            LocStringsError::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LocStringsError>;
