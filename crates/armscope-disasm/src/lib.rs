//! # armscope-disasm
//!
//! A64 instruction decoding for armscope.
//!
//! [`decode`] turns one 32-bit word into an [`armscope_core::Instruction`].
//! [`A64Disassembler`] walks byte slices and [`Disassembly`] streams words
//! from any reader.

pub mod error;
pub mod traits;

#[cfg(feature = "arm64")]
pub mod arm64;
#[cfg(feature = "arm64")]
pub mod stream;

pub use error::DecodeError;
pub use traits::{DecodedInstruction, Disassembler};

#[cfg(feature = "arm64")]
pub use arm64::{decode, A64Disassembler};
#[cfg(feature = "arm64")]
pub use stream::{DisassembledWord, Disassembly, StreamError};
