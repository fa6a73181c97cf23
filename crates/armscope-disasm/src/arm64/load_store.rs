//! Loads and stores of general purpose and SIMD&FP scalar registers.
//!
//! The AdvSIMD structure loads live in `simd_load_store`; everything else in
//! the load/store group is decoded here.

use armscope_core::{AddressingMode, Operand, Operation, PostIndex, Register, Shift, ShiftType};

use super::bits::{extract_bits, sign_extend};
use super::decoded::{
    gpr, imm, label, memory, memory_base, memory_offset, reserved, scalar, xreg, Decoded, Leaf,
};
use super::fields::{
    AtomicMemory, LoadLiteral, LoadStoreExclusive, LoadStorePac, LoadStorePair, LoadStoreRcpc, LoadStoreImm9,
    LoadStoreRegOffset, LoadStoreUnsigned,
};
use super::simd_load_store;

pub(crate) fn decode(word: u32, address: u64) -> Leaf {
    let v = extract_bits(word, 26, 1);
    let bit24 = extract_bits(word, 24, 1);
    match extract_bits(word, 28, 2) {
        0b00 if v == 1 => {
            if extract_bits(word, 31, 1) != 0 {
                return reserved("AdvSIMD structure load/store with bit 31 set");
            }
            simd_load_store::decode(word)
        }
        0b00 if bit24 == 0 => exclusive(LoadStoreExclusive(word)),
        0b00 => reserved("load/store exclusive space"),
        0b01 if bit24 == 0 => literal(LoadLiteral(word), address),
        0b01 if v == 0 && extract_bits(word, 21, 1) == 0 && extract_bits(word, 10, 2) == 0 => {
            rcpc_unscaled(LoadStoreRcpc(word))
        }
        0b01 => reserved("load/store RCpc space"),
        0b10 => pair(LoadStorePair(word)),
        _ if bit24 == 1 => unsigned_offset(LoadStoreUnsigned(word)),
        _ if extract_bits(word, 21, 1) == 0 => immediate9(LoadStoreImm9(word)),
        _ => match extract_bits(word, 10, 2) {
            0b00 => atomic(AtomicMemory(word)),
            0b10 => register_offset(LoadStoreRegOffset(word)),
            _ => pac(LoadStorePac(word)),
        },
    }
}

/// Picks the byte, halfword or word/doubleword form by `size`.
fn by_size(size: u32, forms: [Operation; 3]) -> Operation {
    forms[size.min(2) as usize]
}

fn exclusive(f: LoadStoreExclusive) -> Leaf {
    let size = f.size();
    let sf = size == 0b11;
    let (rs, rt, rt2, rn) = (f.rs(), f.rt(), f.rt2(), f.rn());
    let base = memory_base(rn);

    // Compare and swap pair shares o2=0, o1=1 with the exclusive pairs.
    if f.o2() == 0 && f.o1() == 1 && size < 2 {
        if rs % 2 != 0 || rt % 2 != 0 {
            return reserved("CASP register pair not even");
        }
        let operation = match (f.l(), f.o0()) {
            (false, 0) => Operation::Casp,
            (false, _) => Operation::Caspl,
            (true, 0) => Operation::Caspa,
            (true, _) => Operation::Caspal,
        };
        let pair_sf = size == 0b01;
        return Ok(Decoded::new(operation)
            .with(gpr(pair_sf, rs))
            .with(gpr(pair_sf, rs + 1))
            .with(gpr(pair_sf, rt))
            .with(gpr(pair_sf, rt + 1))
            .with(base));
    }

    let decoded = match (f.o2(), f.l(), f.o1(), f.o0()) {
        (0, false, 0, o0) => {
            let forms = if o0 == 0 {
                [Operation::Stxrb, Operation::Stxrh, Operation::Stxr]
            } else {
                [Operation::Stlxrb, Operation::Stlxrh, Operation::Stlxr]
            };
            Decoded::new(by_size(size, forms)).with(gpr(false, rs)).with(gpr(sf, rt)).with(base)
        }
        (0, true, 0, o0) => {
            let forms = if o0 == 0 {
                [Operation::Ldxrb, Operation::Ldxrh, Operation::Ldxr]
            } else {
                [Operation::Ldaxrb, Operation::Ldaxrh, Operation::Ldaxr]
            };
            Decoded::new(by_size(size, forms)).with(gpr(sf, rt)).with(base)
        }
        (0, false, 1, o0) => {
            let operation = if o0 == 0 { Operation::Stxp } else { Operation::Stlxp };
            Decoded::new(operation).with(gpr(false, rs)).with(gpr(sf, rt)).with(gpr(sf, rt2)).with(base)
        }
        (0, true, 1, o0) => {
            let operation = if o0 == 0 { Operation::Ldxp } else { Operation::Ldaxp };
            Decoded::new(operation).with(gpr(sf, rt)).with(gpr(sf, rt2)).with(base)
        }
        (_, l, 0, o0) => {
            let forms = match (l, o0) {
                (false, 0) => [Operation::Stllrb, Operation::Stllrh, Operation::Stllr],
                (false, _) => [Operation::Stlrb, Operation::Stlrh, Operation::Stlr],
                (true, 0) => [Operation::Ldlarb, Operation::Ldlarh, Operation::Ldlar],
                (true, _) => [Operation::Ldarb, Operation::Ldarh, Operation::Ldar],
            };
            Decoded::new(by_size(size, forms)).with(gpr(sf, rt)).with(base)
        }
        (_, l, _, o0) => {
            let forms = match (l, o0) {
                (false, 0) => [Operation::Casb, Operation::Cash, Operation::Cas],
                (false, _) => [Operation::Caslb, Operation::Caslh, Operation::Casl],
                (true, 0) => [Operation::Casab, Operation::Casah, Operation::Casa],
                (true, _) => [Operation::Casalb, Operation::Casalh, Operation::Casal],
            };
            Decoded::new(by_size(size, forms)).with(gpr(sf, rs)).with(gpr(sf, rt)).with(base)
        }
    };
    Ok(decoded)
}

fn rcpc_unscaled(f: LoadStoreRcpc) -> Leaf {
    use Operation as O;
    let (operation, sf) = match (f.size(), f.opc()) {
        (0b00, 0b00) => (O::Stlurb, false),
        (0b00, 0b01) => (O::Ldapurb, false),
        (0b00, 0b10) => (O::Ldapursb, true),
        (0b00, _) => (O::Ldapursb, false),
        (0b01, 0b00) => (O::Stlurh, false),
        (0b01, 0b01) => (O::Ldapurh, false),
        (0b01, 0b10) => (O::Ldapursh, true),
        (0b01, _) => (O::Ldapursh, false),
        (0b10, 0b00) => (O::Stlur, false),
        (0b10, 0b01) => (O::Ldapur, false),
        (0b10, 0b10) => (O::Ldapursw, true),
        (_, 0b00) => (O::Stlur, true),
        (_, 0b01) => (O::Ldapur, true),
        _ => return reserved("RCpc unscaled size/opc"),
    };
    Ok(Decoded::new(operation).with(gpr(sf, f.rt())).with(memory_offset(f.rn(), f.imm9())))
}

/// `PRFM` target: the named operation, or its raw value when unallocated.
fn prefetch_operand(rt: u32) -> Operand {
    match Register::prefetch(rt) {
        Some(reg) => Operand::reg(reg),
        None => imm(u64::from(rt)),
    }
}

fn literal(f: LoadLiteral, address: u64) -> Leaf {
    let target = label(address, f.imm19() << 2);
    let rt = f.rt();
    let decoded = match (f.v(), f.opc()) {
        (false, 0b00) => Decoded::new(Operation::Ldr).with(gpr(false, rt)),
        (false, 0b01) => Decoded::new(Operation::Ldr).with(gpr(true, rt)),
        (false, 0b10) => Decoded::new(Operation::Ldrsw).with(gpr(true, rt)),
        (false, _) => Decoded::new(Operation::Prfm).with(prefetch_operand(rt)),
        (true, 0b11) => return reserved("SIMD&FP literal opc"),
        (true, opc) => Decoded::new(Operation::Ldr).with(scalar(opc + 2, rt)),
    };
    Ok(decoded.with(target))
}

fn pair(f: LoadStorePair) -> Leaf {
    let index = extract_bits(f.0, 23, 2);
    let (l, v, opc) = (f.l(), f.v(), f.opc());
    if opc == 0b11 {
        return reserved("load/store pair opc");
    }
    let (rt, rt2) = if v {
        let log2 = opc + 2;
        (scalar(log2, f.rt()), scalar(log2, f.rt2()))
    } else {
        let sf = opc != 0b00;
        (gpr(sf, f.rt()), gpr(sf, f.rt2()))
    };
    let scale = if v { opc + 2 } else if opc == 0b10 { 3 } else { 2 };
    let offset = f.imm7() << scale;

    let operation = match (index, v, opc, l) {
        (0b00, false, 0b01, _) => return reserved("no-allocate pair opc"),
        (0b00, _, _, false) => Operation::Stnp,
        (0b00, _, _, true) => Operation::Ldnp,
        // STGP belongs to memory tagging, which is not decoded.
        (_, false, 0b01, false) => return reserved("STGP"),
        (_, false, 0b01, true) => Operation::Ldpsw,
        (_, _, _, false) => Operation::Stp,
        (_, _, _, true) => Operation::Ldp,
    };
    let mode = match index {
        0b01 => AddressingMode::PostIndex(PostIndex::Immediate(offset)),
        0b11 => AddressingMode::PreIndex(offset),
        _ => AddressingMode::Offset(offset),
    };
    Ok(Decoded::new(operation).with(rt).with(rt2).with(memory(f.rn(), mode)))
}

/// Register file of a single-register transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Gpr(bool),
    Simd(u32),
    Prefetch,
}

/// Access kind of a single-register transfer, before the addressing class
/// picks the mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Str,
    Ldr,
    Strb,
    Ldrb,
    Ldrsb,
    Strh,
    Ldrh,
    Ldrsh,
    Ldrsw,
    Prfm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    /// Unsigned offset and register offset.
    Scaled,
    /// Pre- and post-indexed.
    Indexed,
    Unscaled,
    Unprivileged,
}

/// Decodes `size:V:opc` into the access, its register file and the log2 of
/// the transfer size.
fn single_register(size: u32, v: bool, opc: u32) -> Option<(Access, Target, u32)> {
    use Access::*;
    if v {
        return match (size, opc) {
            (_, 0b00) => Some((Str, Target::Simd(size), size)),
            (_, 0b01) => Some((Ldr, Target::Simd(size), size)),
            (0b00, 0b10) => Some((Str, Target::Simd(4), 4)),
            (0b00, _) => Some((Ldr, Target::Simd(4), 4)),
            _ => None,
        };
    }
    let w = Target::Gpr(false);
    let x = Target::Gpr(true);
    Some(match (size, opc) {
        (0b00, 0b00) => (Strb, w, 0),
        (0b00, 0b01) => (Ldrb, w, 0),
        (0b00, 0b10) => (Ldrsb, x, 0),
        (0b00, _) => (Ldrsb, w, 0),
        (0b01, 0b00) => (Strh, w, 1),
        (0b01, 0b01) => (Ldrh, w, 1),
        (0b01, 0b10) => (Ldrsh, x, 1),
        (0b01, _) => (Ldrsh, w, 1),
        (0b10, 0b00) => (Str, w, 2),
        (0b10, 0b01) => (Ldr, w, 2),
        (0b10, 0b10) => (Ldrsw, x, 2),
        (0b10, _) => return None,
        (_, 0b00) => (Str, x, 3),
        (_, 0b01) => (Ldr, x, 3),
        (_, 0b10) => (Prfm, Target::Prefetch, 3),
        _ => return None,
    })
}

fn access_operation(access: Access, class: Class) -> Option<Operation> {
    use Access as A;
    use Operation as O;
    Some(match class {
        Class::Scaled | Class::Indexed => match access {
            A::Str => O::Str,
            A::Ldr => O::Ldr,
            A::Strb => O::Strb,
            A::Ldrb => O::Ldrb,
            A::Ldrsb => O::Ldrsb,
            A::Strh => O::Strh,
            A::Ldrh => O::Ldrh,
            A::Ldrsh => O::Ldrsh,
            A::Ldrsw => O::Ldrsw,
            A::Prfm if class == Class::Scaled => O::Prfm,
            A::Prfm => return None,
        },
        Class::Unscaled => match access {
            A::Str => O::Stur,
            A::Ldr => O::Ldur,
            A::Strb => O::Sturb,
            A::Ldrb => O::Ldurb,
            A::Ldrsb => O::Ldursb,
            A::Strh => O::Sturh,
            A::Ldrh => O::Ldurh,
            A::Ldrsh => O::Ldursh,
            A::Ldrsw => O::Ldursw,
            A::Prfm => O::Prfum,
        },
        Class::Unprivileged => match access {
            A::Str => O::Sttr,
            A::Ldr => O::Ldtr,
            A::Strb => O::Sttrb,
            A::Ldrb => O::Ldtrb,
            A::Ldrsb => O::Ldtrsb,
            A::Strh => O::Sttrh,
            A::Ldrh => O::Ldtrh,
            A::Ldrsh => O::Ldtrsh,
            A::Ldrsw => O::Ldtrsw,
            A::Prfm => return None,
        },
    })
}

fn target_operand(target: Target, rt: u32) -> Operand {
    match target {
        Target::Gpr(sf) => gpr(sf, rt),
        Target::Simd(log2) => scalar(log2, rt),
        Target::Prefetch => prefetch_operand(rt),
    }
}

fn single(size: u32, v: bool, opc: u32, class: Class, rt: u32, address: Operand) -> Leaf {
    let Some((access, target, _)) = single_register(size, v, opc) else {
        return reserved("load/store size/opc");
    };
    if class == Class::Unprivileged && v {
        return reserved("unprivileged SIMD&FP access");
    }
    let Some(operation) = access_operation(access, class) else {
        return reserved("prefetch in this addressing mode");
    };
    Ok(Decoded::new(operation).with(target_operand(target, rt)).with(address))
}

fn immediate9(f: LoadStoreImm9) -> Leaf {
    let (rn, offset) = (f.rn(), f.imm9());
    let (class, mode) = match extract_bits(f.0, 10, 2) {
        0b00 => (Class::Unscaled, AddressingMode::Offset(offset)),
        0b01 => (Class::Indexed, AddressingMode::PostIndex(PostIndex::Immediate(offset))),
        0b10 => (Class::Unprivileged, AddressingMode::Offset(offset)),
        _ => (Class::Indexed, AddressingMode::PreIndex(offset)),
    };
    single(f.size(), f.v(), f.opc(), class, f.rt(), memory(rn, mode))
}

fn unsigned_offset(f: LoadStoreUnsigned) -> Leaf {
    let scale = single_register(f.size(), f.v(), f.opc()).map_or(0, |(_, _, scale)| scale);
    let offset = i64::from(f.imm12()) << scale;
    single(f.size(), f.v(), f.opc(), Class::Scaled, f.rt(), memory_offset(f.rn(), offset))
}

fn register_offset(f: LoadStoreRegOffset) -> Leaf {
    let option = f.option();
    if option & 0b010 == 0 {
        return reserved("register offset extend option");
    }
    let scale = single_register(f.size(), f.v(), f.opc()).map_or(0, |(_, _, scale)| scale);
    let index = if option & 1 == 1 { Register::x(f.rm()) } else { Register::w(f.rm()) };
    let amount = (f.s() == 1).then_some(scale);
    let shift = match option {
        0b011 => amount.map(Shift::lsl),
        _ => Some(Shift { kind: ShiftType::from_extend_bits(option), amount }),
    };
    let address = memory(f.rn(), AddressingMode::Extended { index, shift });
    single(f.size(), f.v(), f.opc(), Class::Scaled, f.rt(), address)
}

fn atomic(f: AtomicMemory) -> Leaf {
    if f.v() {
        return reserved("atomic memory operation on SIMD&FP");
    }
    let size = f.size();
    let sf = size == 0b11;
    let size_index = size.min(2) as usize;
    let (o3, opc, a, r) = (f.o3(), f.opc(), f.a(), f.r());
    let (rs, rt, base) = (f.rs(), f.rt(), memory_base(f.rn()));

    if o3 == 1 && opc == 0b100 {
        if a == 1 && r == 0 && rs == 31 {
            let forms = [Operation::Ldaprb, Operation::Ldaprh, Operation::Ldapr];
            return Ok(Decoded::new(forms[size_index]).with(gpr(sf, rt)).with(base));
        }
        return reserved("LDAPR fields");
    }
    let op_index = match (o3, opc) {
        (0, opc) => opc as usize,
        (_, 0b000) => 8,
        _ => return reserved("atomic memory operation opc"),
    };
    let order = (a * 2 + r) as usize;
    let decoded = Decoded::new(ATOMIC_LOADS[op_index][order][size_index])
        .with(gpr(sf, rs))
        .with(gpr(sf, rt))
        .with(base);
    Ok(if op_index < 8 && a == 0 && rt == 31 {
        decoded.alias(ATOMIC_STORES[op_index][r as usize][size_index]).drop_operand(1)
    } else {
        decoded
    })
}

fn pac(f: LoadStorePac) -> Leaf {
    if f.size() != 0b11 || f.v() {
        return reserved("pointer authenticated load size/V");
    }
    let offset = sign_extend((f.s() << 9) | f.imm9(), 10) << 3;
    let operation = if f.m() == 0 { Operation::Ldraa } else { Operation::Ldrab };
    let mode = if f.w() == 1 { AddressingMode::PreIndex(offset) } else { AddressingMode::Offset(offset) };
    Ok(Decoded::new(operation).with(xreg(f.rt())).with(memory(f.rn(), mode)))
}

/// `LD<op>` and `SWP` by operation (`o3:opc`), ordering (`A:R`) and size.
const ATOMIC_LOADS: [[[Operation; 3]; 4]; 9] = [
    [
        [Operation::Ldaddb, Operation::Ldaddh, Operation::Ldadd],
        [Operation::Ldaddlb, Operation::Ldaddlh, Operation::Ldaddl],
        [Operation::Ldaddab, Operation::Ldaddah, Operation::Ldadda],
        [Operation::Ldaddalb, Operation::Ldaddalh, Operation::Ldaddal],
    ],
    [
        [Operation::Ldclrb, Operation::Ldclrh, Operation::Ldclr],
        [Operation::Ldclrlb, Operation::Ldclrlh, Operation::Ldclrl],
        [Operation::Ldclrab, Operation::Ldclrah, Operation::Ldclra],
        [Operation::Ldclralb, Operation::Ldclralh, Operation::Ldclral],
    ],
    [
        [Operation::Ldeorb, Operation::Ldeorh, Operation::Ldeor],
        [Operation::Ldeorlb, Operation::Ldeorlh, Operation::Ldeorl],
        [Operation::Ldeorab, Operation::Ldeorah, Operation::Ldeora],
        [Operation::Ldeoralb, Operation::Ldeoralh, Operation::Ldeoral],
    ],
    [
        [Operation::Ldsetb, Operation::Ldseth, Operation::Ldset],
        [Operation::Ldsetlb, Operation::Ldsetlh, Operation::Ldsetl],
        [Operation::Ldsetab, Operation::Ldsetah, Operation::Ldseta],
        [Operation::Ldsetalb, Operation::Ldsetalh, Operation::Ldsetal],
    ],
    [
        [Operation::Ldsmaxb, Operation::Ldsmaxh, Operation::Ldsmax],
        [Operation::Ldsmaxlb, Operation::Ldsmaxlh, Operation::Ldsmaxl],
        [Operation::Ldsmaxab, Operation::Ldsmaxah, Operation::Ldsmaxa],
        [Operation::Ldsmaxalb, Operation::Ldsmaxalh, Operation::Ldsmaxal],
    ],
    [
        [Operation::Ldsminb, Operation::Ldsminh, Operation::Ldsmin],
        [Operation::Ldsminlb, Operation::Ldsminlh, Operation::Ldsminl],
        [Operation::Ldsminab, Operation::Ldsminah, Operation::Ldsmina],
        [Operation::Ldsminalb, Operation::Ldsminalh, Operation::Ldsminal],
    ],
    [
        [Operation::Ldumaxb, Operation::Ldumaxh, Operation::Ldumax],
        [Operation::Ldumaxlb, Operation::Ldumaxlh, Operation::Ldumaxl],
        [Operation::Ldumaxab, Operation::Ldumaxah, Operation::Ldumaxa],
        [Operation::Ldumaxalb, Operation::Ldumaxalh, Operation::Ldumaxal],
    ],
    [
        [Operation::Lduminb, Operation::Lduminh, Operation::Ldumin],
        [Operation::Lduminlb, Operation::Lduminlh, Operation::Lduminl],
        [Operation::Lduminab, Operation::Lduminah, Operation::Ldumina],
        [Operation::Lduminalb, Operation::Lduminalh, Operation::Lduminal],
    ],
    [
        [Operation::Swpb, Operation::Swph, Operation::Swp],
        [Operation::Swplb, Operation::Swplh, Operation::Swpl],
        [Operation::Swpab, Operation::Swpah, Operation::Swpa],
        [Operation::Swpalb, Operation::Swpalh, Operation::Swpal],
    ],
];

/// `ST<op>` aliases by operation, release (`R`) and size.
const ATOMIC_STORES: [[[Operation; 3]; 2]; 8] = [
    [
        [Operation::Staddb, Operation::Staddh, Operation::Stadd],
        [Operation::Staddlb, Operation::Staddlh, Operation::Staddl],
    ],
    [
        [Operation::Stclrb, Operation::Stclrh, Operation::Stclr],
        [Operation::Stclrlb, Operation::Stclrlh, Operation::Stclrl],
    ],
    [
        [Operation::Steorb, Operation::Steorh, Operation::Steor],
        [Operation::Steorlb, Operation::Steorlh, Operation::Steorl],
    ],
    [
        [Operation::Stsetb, Operation::Stseth, Operation::Stset],
        [Operation::Stsetlb, Operation::Stsetlh, Operation::Stsetl],
    ],
    [
        [Operation::Stsmaxb, Operation::Stsmaxh, Operation::Stsmax],
        [Operation::Stsmaxlb, Operation::Stsmaxlh, Operation::Stsmaxl],
    ],
    [
        [Operation::Stsminb, Operation::Stsminh, Operation::Stsmin],
        [Operation::Stsminlb, Operation::Stsminlh, Operation::Stsminl],
    ],
    [
        [Operation::Stumaxb, Operation::Stumaxh, Operation::Stumax],
        [Operation::Stumaxlb, Operation::Stumaxlh, Operation::Stumaxl],
    ],
    [
        [Operation::Stuminb, Operation::Stuminh, Operation::Stumin],
        [Operation::Stuminlb, Operation::Stuminlh, Operation::Stuminl],
    ],
];

#[cfg(test)]
mod tests {
    use crate::arm64::decode;
    use armscope_core::render;
    use crate::DecodeError;

    fn dis_at(word: u32, address: u64) -> String {
        let insn = decode(word, address).expect("decode");
        render(&insn, false).expect("render")
    }

    fn dis(word: u32) -> String {
        dis_at(word, 0)
    }

    #[test]
    fn test_unsigned_offset() {
        assert_eq!(dis(0xf9400420), "ldr\tx0, [x1, #0x8]");
        assert_eq!(dis(0xb9400020), "ldr\tw0, [x1]");
        assert_eq!(dis(0xf9000be0), "str\tx0, [sp, #0x10]");
        assert_eq!(dis(0x39400420), "ldrb\tw0, [x1, #0x1]");
        assert_eq!(dis(0xb9800420), "ldrsw\tx0, [x1, #0x4]");
        assert_eq!(dis(0x39c00020), "ldrsb\tw0, [x1]");
        assert_eq!(dis(0x39800020), "ldrsb\tx0, [x1]");
        assert_eq!(dis(0x3dc00400), "ldr\tq0, [x0, #0x10]");
    }

    #[test]
    fn test_prefetch() {
        assert_eq!(dis(0xf9800000), "prfm\tpldl1keep, [x0]");
        // unallocated prfop prints its raw value
        assert_eq!(dis(0xf9800018), "prfm\t#0x18, [x0]");
        // no pre/post-indexed prefetch
        assert!(decode(0xf8800400, 0).is_err());
    }

    #[test]
    fn test_unscaled_and_indexed() {
        assert_eq!(dis(0xf85f8020), "ldur\tx0, [x1, #-0x8]");
        assert_eq!(dis(0xf8408420), "ldr\tx0, [x1], #0x8");
        assert_eq!(dis(0xf81f0fe0), "str\tx0, [sp, #-0x10]!");
        assert_eq!(dis(0xf8400820), "ldtr\tx0, [x1]");
    }

    #[test]
    fn test_register_offset() {
        assert_eq!(dis(0xf8627820), "ldr\tx0, [x1, x2, lsl #3]");
        assert_eq!(dis(0xb8624820), "ldr\tw0, [x1, w2, uxtw]");
        assert_eq!(dis(0x38626820), "ldrb\tw0, [x1, x2]");
        // byte access with S=1 keeps the explicit zero shift
        assert_eq!(dis(0x38627820), "ldrb\tw0, [x1, x2, lsl #0]");
        // option<1> clear
        assert!(decode(0xf8620820, 0).is_err());
    }

    #[test]
    fn test_pairs() {
        assert_eq!(dis(0xa8c17bfd), "ldp\tx29, x30, [sp], #0x10");
        assert_eq!(dis(0xa9bf7bfd), "stp\tx29, x30, [sp, #-0x10]!");
        assert_eq!(dis(0x29400440), "ldp\tw0, w1, [x2]");
        assert_eq!(dis(0x69400440), "ldpsw\tx0, x1, [x2]");
        assert_eq!(dis(0xac400400), "ldnp\tq0, q1, [x0]");
        assert_eq!(dis(0x6d0107e0), "stp\td0, d1, [sp, #0x10]");
        assert!(matches!(decode(0x69000420, 0), Err(DecodeError::Reserved { .. })));
    }

    #[test]
    fn test_literal() {
        assert_eq!(dis(0x187fffe0), "ldr\tw0, #0xffffc");
        assert_eq!(dis(0x5880000a), "ldr\tx10, #0xfffffffffff00000");
        assert_eq!(dis(0x98000040), "ldrsw\tx0, #0x8");
        assert_eq!(dis(0xd8000040), "prfm\tpldl1keep, #0x8");
        assert_eq!(dis(0x9c000040), "ldr\tq0, #0x8");
        assert_eq!(dis_at(0x5c000001, 0x400), "ldr\td1, #0x400");
    }

    #[test]
    fn test_exclusive_and_ordered() {
        assert_eq!(dis(0xc85f7c20), "ldxr\tx0, [x1]");
        assert_eq!(dis(0xc8027c20), "stxr\tw2, x0, [x1]");
        assert_eq!(dis(0x885ffc20), "ldaxr\tw0, [x1]");
        assert_eq!(dis(0xc89ffc20), "stlr\tx0, [x1]");
        assert_eq!(dis(0x88dffc20), "ldar\tw0, [x1]");
        assert_eq!(dis(0x08dffc20), "ldarb\tw0, [x1]");
        assert_eq!(dis(0xc87f0440), "ldxp\tx0, x1, [x2]");
        assert_eq!(dis(0xc8230440), "stxp\tw3, x0, x1, [x2]");
    }

    #[test]
    fn test_compare_and_swap() {
        assert_eq!(dis(0xc8a07c41), "cas\tx0, x1, [x2]");
        assert_eq!(dis(0xc8e0fc41), "casal\tx0, x1, [x2]");
        assert_eq!(dis(0x48207c82), "casp\tx0, x1, x2, x3, [x4]");
        // odd first register of the pair
        assert!(decode(0x48217c82, 0).is_err());
    }

    #[test]
    fn test_atomics() {
        assert_eq!(dis(0xf8200041), "ldadd\tx0, x1, [x2]");
        assert_eq!(dis(0xb8e00041), "ldaddal\tw0, w1, [x2]");
        assert_eq!(dis(0x38201041), "ldclrb\tw0, w1, [x2]");
        assert_eq!(dis(0xf8208041), "swp\tx0, x1, [x2]");
        assert_eq!(dis(0xf8bfc020), "ldapr\tx0, [x1]");
    }

    #[test]
    fn test_atomic_store_aliases() {
        assert_eq!(dis(0xf820005f), "stadd\tx0, [x2]");
        assert_eq!(dis(0x7860005f), "staddlh\tw0, [x2]");
        // acquire forms keep the zero register destination
        assert_eq!(dis(0xf8a0005f), "ldadda\tx0, xzr, [x2]");
    }

    #[test]
    fn test_pointer_authenticated() {
        assert_eq!(dis(0xf8201420), "ldraa\tx0, [x1, #0x8]");
        assert_eq!(dis(0xf8201c20), "ldraa\tx0, [x1, #0x8]!");
        assert_eq!(dis(0xf8a01420), "ldrab\tx0, [x1, #0x8]");
    }

    #[test]
    fn test_rcpc_unscaled() {
        assert_eq!(dis(0x99404020), "ldapur\tw0, [x1, #0x4]");
        assert_eq!(dis(0x19000020), "stlurb\tw0, [x1]");
    }
}
