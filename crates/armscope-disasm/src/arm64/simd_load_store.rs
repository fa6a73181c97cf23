//! AdvSIMD load/store multiple structures and single structures.

use armscope_core::{AddressingMode, Arrangement, ElementSize, Operation, PostIndex, Register};

use super::bits::extract_bits;
use super::decoded::{element, memory, register_list, reserved, Decoded, Leaf};
use super::fields::{SimdLoadStoreMultiple, SimdLoadStoreSingle};

pub(crate) fn decode(word: u32) -> Leaf {
    if extract_bits(word, 24, 1) == 0 {
        multiple(SimdLoadStoreMultiple(word))
    } else {
        single(SimdLoadStoreSingle(word))
    }
}

/// `[Xn|SP]`, or its post-indexed form. `Rm == 31` selects the immediate
/// post-index by the number of bytes transferred.
fn address(rm: u32, post: bool, bytes: u32) -> AddressingMode {
    if !post {
        AddressingMode::Base
    } else if rm == 31 {
        AddressingMode::PostIndex(PostIndex::Immediate(i64::from(bytes)))
    } else {
        AddressingMode::PostIndex(PostIndex::Register(Register::x(rm)))
    }
}

fn multiple(f: SimdLoadStoreMultiple) -> Leaf {
    if extract_bits(f.0, 21, 1) != 0 {
        return reserved("AdvSIMD multiple structures bit 21");
    }
    if !f.post() && f.rm() != 0 {
        return reserved("AdvSIMD multiple structures Rm without post-index");
    }
    // (registers, elements per structure)
    let (count, selem) = match f.opcode() {
        0b0000 => (4, 4),
        0b0010 => (4, 1),
        0b0100 => (3, 3),
        0b0110 => (3, 1),
        0b0111 => (1, 1),
        0b1000 => (2, 2),
        0b1010 => (2, 1),
        _ => return reserved("AdvSIMD multiple structures opcode"),
    };
    let size = f.size();
    let q = f.q();
    if size == 0b11 && !q && selem > 1 {
        return reserved("AdvSIMD structure of 1D elements");
    }
    let operation = match (f.l(), selem) {
        (false, 1) => Operation::St1,
        (false, 2) => Operation::St2,
        (false, 3) => Operation::St3,
        (false, _) => Operation::St4,
        (true, 1) => Operation::Ld1,
        (true, 2) => Operation::Ld2,
        (true, 3) => Operation::Ld3,
        (true, _) => Operation::Ld4,
    };
    let bytes = count * if q { 16 } else { 8 };
    let list = register_list(f.rt(), count, Arrangement::full(element(size), q), None);
    let mode = address(f.rm(), f.post(), bytes);
    Ok(Decoded::new(operation).with(list).with(memory(f.rn(), mode)))
}

fn single(f: SimdLoadStoreSingle) -> Leaf {
    if !f.post() && f.rm() != 0 {
        return reserved("AdvSIMD single structure Rm without post-index");
    }
    let opcode = f.opcode();
    let selem = (((opcode & 1) << 1) | f.r()) + 1;
    let (q, s, size) = (u32::from(f.q()), f.s(), f.size());

    if opcode >> 1 == 0b11 {
        if !f.l() || s != 0 {
            return reserved("AdvSIMD load and replicate L/S");
        }
        let operation = [Operation::Ld1r, Operation::Ld2r, Operation::Ld3r, Operation::Ld4r][selem as usize - 1];
        let list = register_list(f.rt(), selem, Arrangement::full(element(size), f.q()), None);
        let mode = address(f.rm(), f.post(), selem << size);
        return Ok(Decoded::new(operation).with(list).with(memory(f.rn(), mode)));
    }

    let (elem, index) = match opcode >> 1 {
        0b00 => (ElementSize::B, (q << 3) | (s << 2) | size),
        0b01 if size & 1 == 0 => (ElementSize::H, (q << 2) | (s << 1) | (size >> 1)),
        0b01 => return reserved("AdvSIMD single structure H size"),
        _ if size == 0b00 => (ElementSize::S, (q << 1) | s),
        _ if size == 0b01 && s == 0 => (ElementSize::D, q),
        _ => return reserved("AdvSIMD single structure S/D size"),
    };
    let operation = match (f.l(), selem) {
        (false, 1) => Operation::St1,
        (false, 2) => Operation::St2,
        (false, 3) => Operation::St3,
        (false, _) => Operation::St4,
        (true, 1) => Operation::Ld1,
        (true, 2) => Operation::Ld2,
        (true, 3) => Operation::Ld3,
        (true, _) => Operation::Ld4,
    };
    let list = register_list(f.rt(), selem, Arrangement::element(elem), Some(index));
    let mode = address(f.rm(), f.post(), selem << elem.log2_bytes());
    Ok(Decoded::new(operation).with(list).with(memory(f.rn(), mode)))
}

#[cfg(test)]
mod tests {
    use crate::arm64::decode;
    use armscope_core::render;

    fn dis(word: u32) -> String {
        let insn = decode(word, 0).expect("decode");
        render(&insn, false).expect("render")
    }

    #[test]
    fn test_multiple_structures() {
        assert_eq!(dis(0x4c407000), "ld1\t{v0.16b}, [x0]");
        assert_eq!(dis(0x4c007c00), "st1\t{v0.2d}, [x0]");
        assert_eq!(dis(0x4c400820), "ld4\t{v0.4s, v1.4s, v2.4s, v3.4s}, [x1]");
    }

    #[test]
    fn test_multiple_structures_post_index() {
        assert_eq!(dis(0x4cdfa800), "ld1\t{v0.4s, v1.4s}, [x0], #0x20");
        assert_eq!(dis(0x4cc28400), "ld2\t{v0.8h, v1.8h}, [x0], x2");
    }

    #[test]
    fn test_multiple_structures_reserved() {
        // ld3 of .1d
        assert!(decode(0x0c404c00, 0).is_err());
        // Rm set without post-index
        assert!(decode(0x4c427000, 0).is_err());
        // opcode 0001
        assert!(decode(0x4c401000, 0).is_err());
    }

    #[test]
    fn test_single_structure_lanes() {
        assert_eq!(dis(0x0d409000), "ld1\t{v0.s}[1], [x0]");
        assert_eq!(dis(0x0d604800), "ld2\t{v0.h, v1.h}[1], [x0]");
        assert_eq!(dis(0x4d008400), "st1\t{v0.d}[1], [x0]");
        assert_eq!(dis(0x4d401c00), "ld1\t{v0.b}[15], [x0]");
    }

    #[test]
    fn test_load_replicate() {
        assert_eq!(dis(0x4d40c800), "ld1r\t{v0.4s}, [x0]");
        assert_eq!(dis(0x4dffe800), "ld4r\t{v0.4s, v1.4s, v2.4s, v3.4s}, [x0], #0x10");
        // store form of replicate
        assert!(decode(0x4d00c800, 0).is_err());
    }
}
