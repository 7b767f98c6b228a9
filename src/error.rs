//! Error types shared by the generator, the parser and the harness.
//!
//! All failures here are deterministic caller or data bugs, never transient
//! conditions, so there is no retry machinery: every operation fails fast
//! and the harness isolates the failure to the test case it came from.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    /// Generator contract violation, raised before any sampling begins.
    #[error("invalid parameters: {reason}")]
    InvalidParameters { reason: String },

    /// External input describes a graph that breaks the data model
    /// (self-loop, duplicate edge, zero vertex id or zero weight).
    /// `line` is 1-based.
    #[error("invalid graph at line {line}: {reason}")]
    InvalidGraph { line: usize, reason: String },

    /// A line that does not match the `<u> -- <v> <w>` edge-record shape,
    /// or an answer file holding neither verdict. `line` is 1-based.
    #[error("malformed record at line {line}: `{record}`")]
    MalformedRecord { line: usize, record: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
