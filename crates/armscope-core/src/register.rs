//! Register symbols.
//!
//! Every register the decoder can produce is a [`Register`] value: a file
//! ([`RegisterClass`]) plus a number within it. Index 31 of the general
//! purpose files is ambiguous in A64, so the W and X files carry both the
//! zero register (number 31) and the stack pointer (number 32) and the
//! decoder picks one when it builds the operand.

use std::fmt;

/// Register file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegisterClass {
    /// 32-bit general purpose (`w0`-`w30`, `wzr`, `wsp`).
    W,
    /// 64-bit general purpose (`x0`-`x30`, `xzr`, `sp`).
    X,
    /// Full SIMD vector, shown with an arrangement (`v0.4s`).
    V,
    /// 8-bit SIMD&FP scalar view.
    B,
    /// 16-bit SIMD&FP scalar view.
    H,
    /// 32-bit SIMD&FP scalar view.
    S,
    /// 64-bit SIMD&FP scalar view.
    D,
    /// 128-bit SIMD&FP scalar view.
    Q,
    /// `PRFM` prefetch operation, rendered as a pseudo register.
    Prefetch,
    /// `SYS` control register operand (`c0`-`c15`).
    Control,
}

impl RegisterClass {
    /// Number of entries in this file.
    pub const fn len(self) -> usize {
        match self {
            Self::W | Self::X => 33,
            Self::V | Self::B | Self::H | Self::S | Self::D | Self::Q => 32,
            Self::Prefetch => 18,
            Self::Control => 16,
        }
    }

    const fn base(self) -> usize {
        match self {
            Self::W => 0,
            Self::X => 33,
            Self::V => 66,
            Self::B => 98,
            Self::H => 130,
            Self::S => 162,
            Self::D => 194,
            Self::Q => 226,
            Self::Prefetch => 258,
            Self::Control => 276,
        }
    }

    /// SIMD&FP scalar view for an element of `1 << log2_bytes` bytes.
    pub const fn scalar(log2_bytes: u32) -> Option<Self> {
        match log2_bytes {
            0 => Some(Self::B),
            1 => Some(Self::H),
            2 => Some(Self::S),
            3 => Some(Self::D),
            4 => Some(Self::Q),
            _ => None,
        }
    }

    /// Width of a register in this file, in bits. Zero for pseudo registers.
    pub const fn bits(self) -> u32 {
        match self {
            Self::W | Self::S => 32,
            Self::X | Self::D => 64,
            Self::V | Self::Q => 128,
            Self::B => 8,
            Self::H => 16,
            Self::Prefetch | Self::Control => 0,
        }
    }
}

/// Total number of register symbols.
pub const REGISTER_COUNT: usize = 292;

/// A register operand value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Register {
    class: RegisterClass,
    number: u8,
}

const ZERO: u8 = 31;
const STACK: u8 = 32;

impl Register {
    /// `wN`, with 31 meaning `wzr`.
    pub const fn w(n: u32) -> Self {
        Self { class: RegisterClass::W, number: (n & 31) as u8 }
    }

    /// `wN`, with 31 meaning `wsp`.
    pub const fn wsp(n: u32) -> Self {
        Self::general_sp(RegisterClass::W, n)
    }

    /// `xN`, with 31 meaning `xzr`.
    pub const fn x(n: u32) -> Self {
        Self { class: RegisterClass::X, number: (n & 31) as u8 }
    }

    /// `xN`, with 31 meaning `sp`.
    pub const fn xsp(n: u32) -> Self {
        Self::general_sp(RegisterClass::X, n)
    }

    const fn general_sp(class: RegisterClass, n: u32) -> Self {
        let n = (n & 31) as u8;
        Self { class, number: if n == ZERO { STACK } else { n } }
    }

    /// General purpose register of the width selected by `sf`, zero-register set.
    pub const fn gpr(sf: bool, n: u32) -> Self {
        if sf {
            Self::x(n)
        } else {
            Self::w(n)
        }
    }

    /// General purpose register of the width selected by `sf`, stack-pointer set.
    pub const fn gpr_sp(sf: bool, n: u32) -> Self {
        if sf {
            Self::xsp(n)
        } else {
            Self::wsp(n)
        }
    }

    /// `vN`.
    pub const fn v(n: u32) -> Self {
        Self { class: RegisterClass::V, number: (n & 31) as u8 }
    }

    /// SIMD&FP register `n` viewed through `class`. General purpose classes
    /// use the zero-register set.
    pub const fn simd(class: RegisterClass, n: u32) -> Self {
        Self { class, number: (n & 31) as u8 }
    }

    /// Prefetch operation from the `Rt` field of `PRFM`. Returns `None` for
    /// the unallocated type, target and policy combinations.
    pub const fn prefetch(op: u32) -> Option<Self> {
        let kind = (op >> 3) & 3;
        let target = (op >> 1) & 3;
        if kind == 3 || target == 3 || op > 31 {
            return None;
        }
        let number = kind * 6 + target * 2 + (op & 1);
        Some(Self { class: RegisterClass::Prefetch, number: number as u8 })
    }

    /// `cN` operand of `SYS`/`SYSL`.
    pub const fn control(n: u32) -> Self {
        Self { class: RegisterClass::Control, number: (n & 15) as u8 }
    }

    /// Register file.
    pub const fn class(self) -> RegisterClass {
        self.class
    }

    /// Architectural register number (0-31). Both `xzr` and `sp` are 31.
    pub const fn number(self) -> u32 {
        if self.number == STACK {
            31
        } else {
            self.number as u32
        }
    }

    /// True for `wzr`/`xzr`.
    pub const fn is_zero(self) -> bool {
        matches!(self.class, RegisterClass::W | RegisterClass::X) && self.number == ZERO
    }

    /// True for `wsp`/`sp`.
    pub const fn is_stack_pointer(self) -> bool {
        self.number == STACK
    }

    /// True for registers of the SIMD&FP files.
    pub const fn is_simd(self) -> bool {
        matches!(
            self.class,
            RegisterClass::V
                | RegisterClass::B
                | RegisterClass::H
                | RegisterClass::S
                | RegisterClass::D
                | RegisterClass::Q
        )
    }

    /// The next register in the same file, wrapping from 31 to 0. Used by
    /// register lists and register pairs.
    pub const fn successor(self, step: u32) -> Self {
        let n = (self.number() + step) & 31;
        match self.class {
            RegisterClass::W => Self::w(n),
            RegisterClass::X => Self::x(n),
            class => Self::simd(class, n),
        }
    }

    /// Stable index into the flat register table.
    pub const fn index(self) -> usize {
        self.class.base() + self.number as usize
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static NAMES: [&str; 292] = [
    "w0", "w1", "w2", "w3", "w4", "w5", "w6", "w7", "w8", "w9", "w10", "w11", "w12", "w13",
    "w14", "w15", "w16", "w17", "w18", "w19", "w20", "w21", "w22", "w23", "w24", "w25",
    "w26", "w27", "w28", "w29", "w30", "wzr", "wsp", "x0", "x1", "x2", "x3", "x4", "x5",
    "x6", "x7", "x8", "x9", "x10", "x11", "x12", "x13", "x14", "x15", "x16", "x17", "x18",
    "x19", "x20", "x21", "x22", "x23", "x24", "x25", "x26", "x27", "x28", "x29", "x30",
    "xzr", "sp", "v0", "v1", "v2", "v3", "v4", "v5", "v6", "v7", "v8", "v9", "v10", "v11",
    "v12", "v13", "v14", "v15", "v16", "v17", "v18", "v19", "v20", "v21", "v22", "v23",
    "v24", "v25", "v26", "v27", "v28", "v29", "v30", "v31", "b0", "b1", "b2", "b3", "b4",
    "b5", "b6", "b7", "b8", "b9", "b10", "b11", "b12", "b13", "b14", "b15", "b16", "b17",
    "b18", "b19", "b20", "b21", "b22", "b23", "b24", "b25", "b26", "b27", "b28", "b29",
    "b30", "b31", "h0", "h1", "h2", "h3", "h4", "h5", "h6", "h7", "h8", "h9", "h10", "h11",
    "h12", "h13", "h14", "h15", "h16", "h17", "h18", "h19", "h20", "h21", "h22", "h23",
    "h24", "h25", "h26", "h27", "h28", "h29", "h30", "h31", "s0", "s1", "s2", "s3", "s4",
    "s5", "s6", "s7", "s8", "s9", "s10", "s11", "s12", "s13", "s14", "s15", "s16", "s17",
    "s18", "s19", "s20", "s21", "s22", "s23", "s24", "s25", "s26", "s27", "s28", "s29",
    "s30", "s31", "d0", "d1", "d2", "d3", "d4", "d5", "d6", "d7", "d8", "d9", "d10", "d11",
    "d12", "d13", "d14", "d15", "d16", "d17", "d18", "d19", "d20", "d21", "d22", "d23",
    "d24", "d25", "d26", "d27", "d28", "d29", "d30", "d31", "q0", "q1", "q2", "q3", "q4",
    "q5", "q6", "q7", "q8", "q9", "q10", "q11", "q12", "q13", "q14", "q15", "q16", "q17",
    "q18", "q19", "q20", "q21", "q22", "q23", "q24", "q25", "q26", "q27", "q28", "q29",
    "q30", "q31", "pldl1keep", "pldl1strm", "pldl2keep", "pldl2strm", "pldl3keep",
    "pldl3strm", "plil1keep", "plil1strm", "plil2keep", "plil2strm", "plil3keep",
    "plil3strm", "pstl1keep", "pstl1strm", "pstl2keep", "pstl2strm", "pstl3keep",
    "pstl3strm", "c0", "c1", "c2", "c3", "c4", "c5", "c6", "c7", "c8", "c9", "c10", "c11",
    "c12", "c13", "c14", "c15",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_layout() {
        assert_eq!(NAMES.len(), REGISTER_COUNT);
        assert_eq!(
            RegisterClass::Control.base() + RegisterClass::Control.len(),
            REGISTER_COUNT
        );
        assert_eq!(Register::w(0).index(), 0);
        assert_eq!(Register::x(0).index(), 33);
        assert_eq!(Register::v(0).index(), 66);
        assert_eq!(Register::control(0).index(), 276);
    }

    #[test]
    fn test_zero_and_stack_pointer() {
        assert_eq!(Register::w(31).name(), "wzr");
        assert_eq!(Register::wsp(31).name(), "wsp");
        assert_eq!(Register::x(31).name(), "xzr");
        assert_eq!(Register::xsp(31).name(), "sp");
        assert_eq!(Register::xsp(3).name(), "x3");
        assert_eq!(Register::xsp(31).number(), 31);
        assert!(Register::xsp(31).is_stack_pointer());
        assert!(Register::x(31).is_zero());
        assert!(!Register::x(30).is_zero());
    }

    #[test]
    fn test_simd_views() {
        assert_eq!(Register::simd(RegisterClass::B, 1).name(), "b1");
        assert_eq!(Register::simd(RegisterClass::H, 2).name(), "h2");
        assert_eq!(Register::simd(RegisterClass::S, 3).name(), "s3");
        assert_eq!(Register::simd(RegisterClass::D, 30).name(), "d30");
        assert_eq!(Register::simd(RegisterClass::Q, 31).name(), "q31");
        assert_eq!(Register::v(17).to_string(), "v17");
        assert_eq!(RegisterClass::scalar(4), Some(RegisterClass::Q));
        assert_eq!(RegisterClass::scalar(5), None);
    }

    #[test]
    fn test_prefetch_operations() {
        assert_eq!(Register::prefetch(0).map(Register::name), Some("pldl1keep"));
        assert_eq!(Register::prefetch(1).map(Register::name), Some("pldl1strm"));
        assert_eq!(Register::prefetch(5).map(Register::name), Some("pldl3strm"));
        assert_eq!(Register::prefetch(8).map(Register::name), Some("plil1keep"));
        assert_eq!(Register::prefetch(0x11).map(Register::name), Some("pstl1strm"));
        assert_eq!(Register::prefetch(6), None);
        assert_eq!(Register::prefetch(0x18), None);
    }

    #[test]
    fn test_successor_wraps() {
        assert_eq!(Register::v(31).successor(1), Register::v(0));
        assert_eq!(Register::x(30).successor(1), Register::x(31));
        assert_eq!(Register::w(4).successor(1).name(), "w5");
    }

    #[test]
    fn test_names_unique() {
        let mut seen = std::collections::HashSet::new();
        for name in NAMES.iter() {
            assert!(seen.insert(*name), "duplicate register name {name}");
        }
    }
}
