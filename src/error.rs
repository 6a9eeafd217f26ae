/// Error type shared by every stage of a Mad Libs run.

use std::path::PathBuf;
use thiserror::Error;

use crate::exit_codes;

#[derive(Debug, Error)]
pub enum MadLibError {
    #[error("'{}' could not be read: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed template: {0}")]
    MalformedTemplate(String),
    #[error("template has {blanks} blanks but {descriptions} descriptions")]
    ValidationMismatch { blanks: usize, descriptions: usize },
    #[error("no story files found in '{}'", .dir.display())]
    NoStoriesFound { dir: PathBuf },
    #[error("no answer for blank '{description}'")]
    TemplateExecution { description: String },
    #[error("{0}")]
    Usage(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MadLibError {
    /// Process exit code for this failure kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            MadLibError::Usage(_) => exit_codes::USAGE_ERROR,
            MadLibError::FileRead { .. }
            | MadLibError::NoStoriesFound { .. }
            | MadLibError::Config(_)
            | MadLibError::Io(_) => exit_codes::IO_FAILURE,
            MadLibError::MalformedTemplate(_)
            | MadLibError::ValidationMismatch { .. }
            | MadLibError::TemplateExecution { .. } => exit_codes::TEMPLATE_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, MadLibError>;
