//! Error types for the bit-flip code crate.

use thiserror::Error;

use trefoil_ir::IrError;

/// Errors that can occur while building code circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CodeError {
    /// The requested error position falls outside the code block.
    #[error("error position {position} is outside the {block_size}-qubit code block")]
    PositionOutOfRange {
        /// The requested position.
        position: usize,
        /// The size of the code block.
        block_size: usize,
    },

    /// An underlying circuit construction error.
    #[error(transparent)]
    Ir(#[from] IrError),
}

/// Result type for code circuit construction.
pub type CodeResult<T> = Result<T, CodeError>;
