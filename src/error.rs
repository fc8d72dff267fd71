use std::{io, path::PathBuf};
use thiserror::Error;

/// Failures that end a batch run before a summary is printed.
///
/// Orders without items are not errors; they are skipped by
/// [`crate::orders::process_orders`] and never surface here.
#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Input file '{}' not found.", path.display())]
    InputNotFound { path: PathBuf },

    #[error("No valid orders found in input file '{}'.", path.display())]
    EmptyBatch { path: PathBuf },

    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to decode orders from '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to encode processed orders: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to print summary: {0}")]
    Console(#[source] io::Error),
}

impl OrderError {
    /// The single line shown to the operator when the run stops.
    pub fn console_message(&self) -> String {
        match self {
            OrderError::InputNotFound { .. } | OrderError::EmptyBatch { .. } => self.to_string(),
            _ => format!("Error: {self}"),
        }
    }
}
