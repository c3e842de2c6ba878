use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("You must provide a string or a list of files (through globbing) to work on.")]
    Usage,
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    /// Old and new names no longer line up with the inputs. Never expected.
    #[error("plan has {entries} entries for {inputs} input paths")]
    ArityMismatch { inputs: usize, entries: usize },
    #[error("failed to render preview: {0}")]
    Preview(#[from] serde_json::Error),
    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),
}
