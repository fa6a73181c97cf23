//! Decode error types.

use thiserror::Error;

/// Error type for instruction decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Bits 25-28 select no encoding group.
    #[error("undecodable word {word:#010x} at {address:#x}")]
    Undecodable { word: u32, address: u64 },

    /// A leaf decoder hit an architecturally reserved bit pattern.
    #[error("reserved encoding {word:#010x} at {address:#x}: {reason}")]
    Reserved {
        word: u32,
        address: u64,
        reason: &'static str,
    },

    /// Fewer than four bytes remained.
    #[error("truncated instruction at {address:#x}: need {needed} bytes, have {available}")]
    Truncated {
        address: u64,
        needed: usize,
        available: usize,
    },
}

impl DecodeError {
    /// Creates a new Reserved error.
    pub fn reserved(word: u32, address: u64, reason: &'static str) -> Self {
        Self::Reserved { word, address, reason }
    }

    /// Creates a new Truncated error.
    pub fn truncated(address: u64, needed: usize, available: usize) -> Self {
        Self::Truncated {
            address,
            needed,
            available,
        }
    }

    /// Address of the failing word.
    pub fn address(&self) -> u64 {
        match *self {
            Self::Undecodable { address, .. } | Self::Reserved { address, .. } | Self::Truncated { address, .. } => {
                address
            }
        }
    }

    /// The failing word, when four bytes were available.
    pub fn word(&self) -> Option<u32> {
        match *self {
            Self::Undecodable { word, .. } | Self::Reserved { word, .. } => Some(word),
            Self::Truncated { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = DecodeError::reserved(0x91800000, 0x40, "add/sub immediate shift");
        assert_eq!(err.to_string(), "reserved encoding 0x91800000 at 0x40: add/sub immediate shift");
        assert_eq!(err.address(), 0x40);
        assert_eq!(err.word(), Some(0x91800000));

        let err = DecodeError::truncated(0x1000, 4, 3);
        assert_eq!(err.to_string(), "truncated instruction at 0x1000: need 4 bytes, have 3");
        assert_eq!(err.word(), None);
    }
}
