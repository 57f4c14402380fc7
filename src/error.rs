use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tickbox_core::ListError;

/// Error types for the Tickbox shell
#[derive(Error, Debug)]
pub enum ShellError {
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Opening the script file failed
    #[error("Failed to open script at {path}: {source}")]
    Script {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Encoding a view as JSON failed
    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// A filter name or task id could not be parsed
    #[error(transparent)]
    List(#[from] ListError),

    /// A session line did not parse as a command
    #[error("{message}")]
    Usage { message: String },
}

impl From<clap::Error> for ShellError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.render().to_string();
        ShellError::Usage {
            message: rendered
                .trim_start_matches("error: ")
                .trim_end()
                .to_string(),
        }
    }
}

impl ShellError {
    /// Get the full error message including the underlying cause.
    pub fn full_message(&self) -> String {
        match self {
            ShellError::Script { path, source } => {
                let path = path.display();
                let kind = source.kind();
                format!("Failed to open script at {path}: {source} ({kind:?})")
            }
            other => other.to_string(),
        }
    }

    /// Whether the session has to stop after this error.
    ///
    /// Bad input lines are reported and skipped; I/O and encoding failures
    /// end the session.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ShellError::Io(_) | ShellError::Script { .. } | ShellError::Json(_)
        )
    }
}

/// Result type alias for shell operations
pub type ShellResult<T> = Result<T, ShellError>;
