//! Error and outcome types for the stepping engine
//!
//! [`PreconditionError`] covers user mistakes caught before a run starts. They never
//! reach the caller as failures: the session reports them through the sink as a
//! transient message and answers with [`StartOutcome::Rejected`]. Structural graph
//! problems are [`GraphError`](crate::model::GraphError) and are real errors.

use thiserror::Error;

/// Missing or malformed parameters detected before a run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("Please enter a key to search")]
    MissingSearchKey,

    #[error("Please select start and target nodes")]
    MissingEndpoints,

    #[error("Please fill all values")]
    IncompleteCustomValues,

    #[error("Value {text:?} in slot {} is not a number", .index + 1)]
    InvalidCustomValue { index: usize, text: String },

    #[error("Custom values are not available for {algorithm}")]
    CustomValuesUnsupported { algorithm: &'static str },
}

/// Result of asking a session or controller to start a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// A run is already Running or Paused; the request was ignored
    AlreadyActive,
    /// Parameters were missing or invalid; nothing changed
    Rejected(PreconditionError),
}

impl StartOutcome {
    pub fn is_started(&self) -> bool {
        matches!(self, StartOutcome::Started)
    }
}
