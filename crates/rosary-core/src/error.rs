//! Error taxonomy for the rosary core.
//!
//! Reaching the end of the sequence is not an error; it is reported through
//! [`crate::SessionEvent::Completed`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosaryError {
    /// The operation is not valid in the current lifecycle phase (e.g. advancing before `start`).
    /// Frontends hitting this have a wiring bug.
    #[error("invalid state: `{operation}` requires an active session")]
    InvalidState { operation: &'static str },

    /// A structure parameter was out of range; no plan was built.
    #[error("invalid structure: {field} {reason}, got {value}")]
    InvalidStructure {
        field: &'static str,
        value: i32,
        reason: &'static str,
    },

    /// Bundled or supplied content could not be parsed.
    #[error("content error: {0}")]
    Content(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RosaryError>;
