//! Error types for simplification operations.

use thiserror::Error;

/// Errors that can occur while simplifying or repairing a geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimplifyError {
    /// An option is out of contract or the input geometry is unsupported.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A structure was used before it was fully linked, or a vertex was
    /// addressed that is not in the expected state.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// No removable vertex remains.
    #[error("no remaining vertices")]
    Exhausted,

    /// There is nothing left to undo.
    #[error("simplification history is empty")]
    HistoryEmpty,

    /// A vertex was restored out of LIFO order, or after its recorded
    /// neighbors stopped being adjacent.
    #[error("incorrect restoration order")]
    InvalidRestoreOrder,

    /// A rewind was requested but no removal in history introduced an
    /// intersection.
    #[error("first intersection could not be found")]
    NoIntersectionFound,

    /// A ring would drop below three vertices.
    #[error("cannot simplify a ring below three vertices")]
    MinimumRingSize,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimplifyError>;
