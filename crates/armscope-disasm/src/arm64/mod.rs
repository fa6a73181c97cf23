//! ARM64 (A64) instruction decoder.
//!
//! Words are classified by bits 25-28 into an encoding group, then routed
//! through fixed bit ranges to one leaf decoder per encoding class. Leaf
//! decoders read fields through the typed views in [`fields`], pick an
//! operation, fill operand slots and apply the architectural aliases.

mod bits;
mod branch;
mod crypto;
mod data_imm;
mod data_reg;
mod decoded;
mod decoder;
mod fields;
mod float;
mod load_store;
pub mod numeric;
mod simd;
mod simd_load_store;
mod simd_scalar;

pub use bits::{extract_bits, sign_extend};
pub use decoder::{decode, A64Disassembler};
