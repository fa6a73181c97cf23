//! Typed field views over raw instruction words, one per encoding table.
//!
//! Each view is a newtype over the word whose accessors are fixed
//! [`extract_bits`] calls named after the architecture manual's fields.
//! `u` fields are unsigned, `i` fields are sign-extended offsets and `b`
//! fields are single-bit flags.

use super::bits::{extract_bits, sign_extend};

macro_rules! field {
    (u, $name:ident, $start:expr, $width:expr) => {
        #[inline]
        pub fn $name(self) -> u32 {
            extract_bits(self.0, $start, $width)
        }
    };
    (i, $name:ident, $start:expr, $width:expr) => {
        #[inline]
        pub fn $name(self) -> i64 {
            sign_extend(extract_bits(self.0, $start, $width), $width)
        }
    };
    (b, $name:ident, $start:expr, $width:expr) => {
        #[inline]
        pub fn $name(self) -> bool {
            extract_bits(self.0, $start, $width) != 0
        }
    };
}

macro_rules! encodings {
    ($(
        $(#[$meta:meta])*
        $name:ident { $($field:ident: $kind:ident($start:expr, $width:expr)),* $(,)? }
    )*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub(crate) struct $name(pub u32);

        impl $name {
            $( field!($kind, $field, $start, $width); )*
        }
    )*};
}

encodings! {
    // Data processing (immediate)

    /// `ADR`, `ADRP`.
    PcRelAddressing { rd: u(0, 5), immhi: u(5, 19), immlo: u(29, 2), op: u(31, 1) }
    AddSubImmediate { rd: u(0, 5), rn: u(5, 5), imm12: u(10, 12), shift: u(22, 2), s: u(29, 1), op: u(30, 1), sf: b(31, 1) }
    LogicalImmediate { rd: u(0, 5), rn: u(5, 5), imms: u(10, 6), immr: u(16, 6), n: u(22, 1), opc: u(29, 2), sf: b(31, 1) }
    MoveWide { rd: u(0, 5), imm16: u(5, 16), hw: u(21, 2), opc: u(29, 2), sf: b(31, 1) }
    Bitfield { rd: u(0, 5), rn: u(5, 5), imms: u(10, 6), immr: u(16, 6), n: u(22, 1), opc: u(29, 2), sf: b(31, 1) }
    Extract { rd: u(0, 5), rn: u(5, 5), imms: u(10, 6), rm: u(16, 5), o0: u(21, 1), n: u(22, 1), op21: u(29, 2), sf: b(31, 1) }

    // Branches, exception generating and system instructions

    ConditionalBranch { cond: u(0, 4), o0: u(4, 1), imm19: i(5, 19), o1: u(24, 1) }
    ExceptionGeneration { ll: u(0, 2), op2: u(2, 3), imm16: u(5, 16), opc: u(21, 3) }
    /// Hints, barriers, PSTATE, `SYS`/`SYSL` and `MRS`/`MSR`.
    System { rt: u(0, 5), op2: u(5, 3), crm: u(8, 4), crn: u(12, 4), op1: u(16, 3), op0: u(19, 2), l: b(21, 1) }
    BranchRegister { op4: u(0, 5), rn: u(5, 5), op3: u(10, 6), op2: u(16, 5), opc: u(21, 4) }
    BranchImmediate { imm26: i(0, 26), op: u(31, 1) }
    CompareBranch { rt: u(0, 5), imm19: i(5, 19), op: u(24, 1), sf: b(31, 1) }
    TestBranch { rt: u(0, 5), imm14: i(5, 14), b40: u(19, 5), op: u(24, 1), b5: u(31, 1) }

    // Loads and stores

    LoadStoreExclusive { rt: u(0, 5), rn: u(5, 5), rt2: u(10, 5), o0: u(15, 1), rs: u(16, 5), o1: u(21, 1), l: b(22, 1), o2: u(23, 1), size: u(30, 2) }
    /// `LDAPUR*`/`STLUR*`.
    LoadStoreRcpc { rt: u(0, 5), rn: u(5, 5), imm9: i(12, 9), opc: u(22, 2), size: u(30, 2) }
    LoadLiteral { rt: u(0, 5), imm19: i(5, 19), v: b(26, 1), opc: u(30, 2) }
    LoadStorePair { rt: u(0, 5), rn: u(5, 5), rt2: u(10, 5), imm7: i(15, 7), l: b(22, 1), v: b(26, 1), opc: u(30, 2) }
    /// Unscaled, pre-indexed, post-indexed and unprivileged forms.
    LoadStoreImm9 { rt: u(0, 5), rn: u(5, 5), imm9: i(12, 9), opc: u(22, 2), v: b(26, 1), size: u(30, 2) }
    LoadStoreRegOffset { rt: u(0, 5), rn: u(5, 5), s: u(12, 1), option: u(13, 3), rm: u(16, 5), opc: u(22, 2), v: b(26, 1), size: u(30, 2) }
    AtomicMemory { rt: u(0, 5), rn: u(5, 5), opc: u(12, 3), o3: u(15, 1), rs: u(16, 5), r: u(22, 1), a: u(23, 1), v: b(26, 1), size: u(30, 2) }
    LoadStorePac { rt: u(0, 5), rn: u(5, 5), w: u(11, 1), imm9: u(12, 9), s: u(22, 1), m: u(23, 1), v: b(26, 1), size: u(30, 2) }
    LoadStoreUnsigned { rt: u(0, 5), rn: u(5, 5), imm12: u(10, 12), opc: u(22, 2), v: b(26, 1), size: u(30, 2) }
    SimdLoadStoreMultiple { rt: u(0, 5), rn: u(5, 5), size: u(10, 2), opcode: u(12, 4), rm: u(16, 5), post: b(23, 1), l: b(22, 1), q: b(30, 1) }
    SimdLoadStoreSingle { rt: u(0, 5), rn: u(5, 5), size: u(10, 2), s: u(12, 1), opcode: u(13, 3), rm: u(16, 5), r: u(21, 1), l: b(22, 1), post: b(23, 1), q: b(30, 1) }

    // Data processing (register)

    LogicalShifted { rd: u(0, 5), rn: u(5, 5), imm6: u(10, 6), rm: u(16, 5), n: u(21, 1), shift: u(22, 2), opc: u(29, 2), sf: b(31, 1) }
    AddSubShifted { rd: u(0, 5), rn: u(5, 5), imm6: u(10, 6), rm: u(16, 5), shift: u(22, 2), s: u(29, 1), op: u(30, 1), sf: b(31, 1) }
    AddSubExtended { rd: u(0, 5), rn: u(5, 5), imm3: u(10, 3), option: u(13, 3), rm: u(16, 5), opt: u(22, 2), s: u(29, 1), op: u(30, 1), sf: b(31, 1) }
    AddSubCarry { rd: u(0, 5), rn: u(5, 5), rm: u(16, 5), s: u(29, 1), op: u(30, 1), sf: b(31, 1) }
    RotateIntoFlags { mask: u(0, 4), o2: u(4, 1), rn: u(5, 5), imm6: u(15, 6), s: u(29, 1), op: u(30, 1), sf: b(31, 1) }
    EvaluateIntoFlags { mask: u(0, 4), o3: u(4, 1), rn: u(5, 5), sz: u(14, 1), opcode2: u(15, 6), s: u(29, 1), op: u(30, 1), sf: b(31, 1) }
    /// Register and immediate forms; `rm` doubles as `imm5`.
    ConditionalCompare { nzcv: u(0, 4), o3: u(4, 1), rn: u(5, 5), o2: u(10, 1), imm: u(11, 1), cond: u(12, 4), rm: u(16, 5), s: u(29, 1), op: u(30, 1), sf: b(31, 1) }
    ConditionalSelect { rd: u(0, 5), rn: u(5, 5), op2: u(10, 2), cond: u(12, 4), rm: u(16, 5), s: u(29, 1), op: u(30, 1), sf: b(31, 1) }
    DataProcessing1 { rd: u(0, 5), rn: u(5, 5), opcode: u(10, 6), opcode2: u(16, 5), s: u(29, 1), sf: b(31, 1) }
    DataProcessing2 { rd: u(0, 5), rn: u(5, 5), opcode: u(10, 6), rm: u(16, 5), s: u(29, 1), sf: b(31, 1) }
    DataProcessing3 { rd: u(0, 5), rn: u(5, 5), ra: u(10, 5), o0: u(15, 1), rm: u(16, 5), op31: u(21, 3), op54: u(29, 2), sf: b(31, 1) }

    // Cryptographic extensions

    CryptoAes { rd: u(0, 5), rn: u(5, 5), opcode: u(12, 5), size: u(22, 2) }
    CryptoThreeRegSha { rd: u(0, 5), rn: u(5, 5), opcode: u(12, 3), rm: u(16, 5), size: u(22, 2) }
    CryptoTwoRegSha { rd: u(0, 5), rn: u(5, 5), opcode: u(12, 5), size: u(22, 2) }
    CryptoThreeRegSha512 { rd: u(0, 5), rn: u(5, 5), opcode: u(10, 2), o: u(14, 1), rm: u(16, 5) }
    CryptoFourReg { rd: u(0, 5), rn: u(5, 5), ra: u(10, 5), rm: u(16, 5), op0: u(21, 2) }
    CryptoXar { rd: u(0, 5), rn: u(5, 5), imm6: u(10, 6), rm: u(16, 5) }
    CryptoTwoRegSha512 { rd: u(0, 5), rn: u(5, 5), opcode: u(10, 2) }
    CryptoThreeRegImm2 { rd: u(0, 5), rn: u(5, 5), opcode: u(10, 2), imm2: u(12, 2), rm: u(16, 5) }

    // Advanced SIMD, vector and scalar

    SimdCopy { rd: u(0, 5), rn: u(5, 5), imm4: u(11, 4), imm5: u(16, 5), op: u(29, 1), q: b(30, 1) }
    SimdThreeSame { rd: u(0, 5), rn: u(5, 5), opcode: u(11, 5), rm: u(16, 5), size: u(22, 2), u: b(29, 1), q: b(30, 1) }
    SimdThreeSameFp16 { rd: u(0, 5), rn: u(5, 5), opcode: u(11, 3), rm: u(16, 5), a: u(23, 1), u: b(29, 1), q: b(30, 1) }
    SimdThreeSameExtra { rd: u(0, 5), rn: u(5, 5), opcode: u(11, 4), rm: u(16, 5), size: u(22, 2), u: b(29, 1), q: b(30, 1) }
    SimdTwoRegMisc { rd: u(0, 5), rn: u(5, 5), opcode: u(12, 5), size: u(22, 2), u: b(29, 1), q: b(30, 1) }
    SimdTwoRegMiscFp16 { rd: u(0, 5), rn: u(5, 5), opcode: u(12, 5), a: u(23, 1), u: b(29, 1), q: b(30, 1) }
    SimdAcrossLanes { rd: u(0, 5), rn: u(5, 5), opcode: u(12, 5), size: u(22, 2), u: b(29, 1), q: b(30, 1) }
    SimdThreeDifferent { rd: u(0, 5), rn: u(5, 5), opcode: u(12, 4), rm: u(16, 5), size: u(22, 2), u: b(29, 1), q: b(30, 1) }
    SimdModifiedImmediate { rd: u(0, 5), defgh: u(5, 5), o2: u(11, 1), cmode: u(12, 4), abc: u(16, 3), op: u(29, 1), q: b(30, 1) }
    SimdShiftImmediate { rd: u(0, 5), rn: u(5, 5), opcode: u(11, 5), immb: u(16, 3), immh: u(19, 4), u: b(29, 1), q: b(30, 1) }
    SimdIndexedElement { rd: u(0, 5), rn: u(5, 5), h: u(11, 1), opcode: u(12, 4), rm: u(16, 4), m: u(20, 1), l: u(21, 1), size: u(22, 2), u: b(29, 1), q: b(30, 1) }
    SimdTableLookup { rd: u(0, 5), rn: u(5, 5), op: u(12, 1), len: u(13, 2), rm: u(16, 5), op2: u(22, 2), q: b(30, 1) }
    SimdPermute { rd: u(0, 5), rn: u(5, 5), opcode: u(12, 3), rm: u(16, 5), size: u(22, 2), q: b(30, 1) }
    SimdExtract { rd: u(0, 5), rn: u(5, 5), imm4: u(11, 4), rm: u(16, 5), op2: u(22, 2), q: b(30, 1) }
    /// Scalar pairwise shares the two-register misc layout with its own opcode space.
    SimdScalarPairwise { rd: u(0, 5), rn: u(5, 5), opcode: u(12, 5), size: u(22, 2), u: b(29, 1) }

    // Floating point (scalar); `S` is checked before these views are built.

    FloatFixedConversion { rd: u(0, 5), rn: u(5, 5), scale: u(10, 6), opcode: u(16, 3), rmode: u(19, 2), ftype: u(22, 2), sf: b(31, 1) }
    FloatIntConversion { rd: u(0, 5), rn: u(5, 5), opcode: u(16, 3), rmode: u(19, 2), ftype: u(22, 2), sf: b(31, 1) }
    FloatDataProcessing1 { rd: u(0, 5), rn: u(5, 5), opcode: u(15, 6), ftype: u(22, 2), m: u(31, 1) }
    FloatCompare { opcode2: u(0, 5), rn: u(5, 5), op: u(14, 2), rm: u(16, 5), ftype: u(22, 2), m: u(31, 1) }
    FloatImmediate { rd: u(0, 5), imm5: u(5, 5), imm8: u(13, 8), ftype: u(22, 2), m: u(31, 1) }
    FloatConditionalCompare { nzcv: u(0, 4), op: u(4, 1), rn: u(5, 5), cond: u(12, 4), rm: u(16, 5), ftype: u(22, 2), m: u(31, 1) }
    FloatDataProcessing2 { rd: u(0, 5), rn: u(5, 5), opcode: u(12, 4), rm: u(16, 5), ftype: u(22, 2), m: u(31, 1) }
    FloatConditionalSelect { rd: u(0, 5), rn: u(5, 5), cond: u(12, 4), rm: u(16, 5), ftype: u(22, 2), m: u(31, 1) }
    FloatDataProcessing3 { rd: u(0, 5), rn: u(5, 5), ra: u(10, 5), o0: u(15, 1), rm: u(16, 5), o1: u(21, 1), ftype: u(22, 2), m: u(31, 1) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_immediate_fields() {
        // add x1, sp, #0x10, lsl #12
        let f = AddSubImmediate(0x914043e1);
        assert!(f.sf());
        assert_eq!(f.op(), 0);
        assert_eq!(f.s(), 0);
        assert_eq!(f.shift(), 1);
        assert_eq!(f.imm12(), 0x10);
        assert_eq!(f.rn(), 31);
        assert_eq!(f.rd(), 1);
    }

    #[test]
    fn test_signed_fields() {
        // ldr w0, #-4 relative to the word; imm19 is all ones
        assert_eq!(LoadLiteral(0x18ffffe0).imm19(), -1);
        assert_eq!(LoadLiteral(0x187fffe0).imm19(), 0x3ffff);
        assert_eq!(BranchImmediate(0x17ffffff).imm26(), -1);
        assert_eq!(TestBranch(0x3607ffe0).imm14(), -1);
    }

    #[test]
    fn test_system_fields() {
        // mrs x0, tpidr_el0
        let f = System(0xd53bd040);
        assert!(f.l());
        assert_eq!((f.op0(), f.op1(), f.crn(), f.crm(), f.op2()), (3, 3, 13, 0, 2));
        assert_eq!(f.rt(), 0);
    }
}
