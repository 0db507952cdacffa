//! Error types for document conversion

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    /// The first configured input is absent; nothing was converted.
    #[error("{} not found!", .path.display())]
    MissingInput { path: PathBuf },

    #[error("failed to read document {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: docx_rs::ReaderError,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("no conversion jobs configured")]
    NoJobs,
}

impl ConvertError {
    /// Advice printed next to the error message
    pub fn hint(&self) -> &'static str {
        match self {
            ConvertError::MissingInput { .. } => {
                "Please make sure the Word document is in the working directory."
            }
            ConvertError::NoJobs => "Add at least one [[jobs]] entry to the configuration file.",
            _ => "Please check that the Word document is not corrupted and try again.",
        }
    }
}
