//! # armscope-core
//!
//! Core types for the armscope A64 disassembler: decoded instructions, typed
//! operands, the closed symbol tables (operations, registers, system
//! registers, conditions, shifts) and the text renderer.

pub mod error;
pub mod format;
pub mod instruction;
pub mod operand;
pub mod operation;
pub mod register;
pub mod sysreg;

pub use error::RenderError;
pub use format::{placeholder, render, FormatOptions};
pub use instruction::{Condition, Group, Instruction, Operands, MAX_OPERANDS};
pub use operand::{
    AddressingMode, Arrangement, ElementSize, Immediate, MemoryOperand, Operand, OperandClass, PostIndex,
    RegisterList, RegisterOperand, Shift, ShiftType, SysRegEncoding,
};
pub use operation::Operation;
pub use register::{Register, RegisterClass};
pub use sysreg::{SysOp, SystemReg};
