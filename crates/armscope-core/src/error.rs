//! Rendering error types.

use thiserror::Error;

/// Error type for turning a decoded instruction into text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The instruction has no operation (unallocated encoding space).
    #[error("undefined operation for word {word:#010x}")]
    UndefinedOperation { word: u32 },

    /// An operand is internally inconsistent.
    #[error("invalid operand {index} of {mnemonic}: {reason}")]
    InvalidOperand {
        mnemonic: &'static str,
        index: usize,
        reason: &'static str,
    },

    /// Writing into the output buffer failed.
    #[error("formatter error")]
    Format(#[from] std::fmt::Error),
}

impl RenderError {
    /// Creates a new InvalidOperand error.
    pub fn invalid_operand(mnemonic: &'static str, index: usize, reason: &'static str) -> Self {
        Self::InvalidOperand { mnemonic, index, reason }
    }
}
