//! Disassembler traits.

use crate::DecodeError;
use armscope_core::Instruction;

/// Result of decoding an instruction.
#[derive(Debug, Clone)]
pub struct DecodedInstruction {
    /// The decoded instruction.
    pub instruction: Instruction,
    /// Number of bytes consumed.
    pub size: usize,
}

/// Trait for instruction decoders working on byte slices.
pub trait Disassembler {
    /// Decodes the instruction at the start of `bytes`, whose first byte
    /// sits at `address`.
    ///
    /// Fails with [`DecodeError::Truncated`] when `bytes` is shorter than one
    /// instruction.
    fn decode_instruction(&self, bytes: &[u8], address: u64) -> Result<DecodedInstruction, DecodeError>;

    /// Smallest encoding in bytes; also the skip after a failed decode.
    fn min_instruction_size(&self) -> usize;

    fn max_instruction_size(&self) -> usize;

    fn is_fixed_width(&self) -> bool {
        self.min_instruction_size() == self.max_instruction_size()
    }

    /// Disassemble a block of code into instructions.
    ///
    /// A failing instruction skips `min_instruction_size` bytes; a
    /// truncated tail ends the block.
    fn disassemble_block(&self, bytes: &[u8], start_address: u64) -> Vec<Result<Instruction, DecodeError>> {
        let mut instructions = Vec::with_capacity(bytes.len() / self.max_instruction_size().max(1));
        let mut offset = 0;

        while offset < bytes.len() {
            let remaining = &bytes[offset..];
            let address = start_address.wrapping_add(offset as u64);

            match self.decode_instruction(remaining, address) {
                Ok(decoded) => {
                    offset += decoded.size;
                    instructions.push(Ok(decoded.instruction));
                }
                Err(e @ DecodeError::Truncated { .. }) => {
                    instructions.push(Err(e));
                    break;
                }
                Err(e) => {
                    offset += self.min_instruction_size();
                    instructions.push(Err(e));
                }
            }
        }

        instructions
    }
}
