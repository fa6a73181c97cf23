//! Cryptographic extensions: AES, SHA-1/SHA-256 and the SHA-3, SHA-512,
//! SM3 and SM4 instructions.

use armscope_core::{ElementSize, Operand, Operation};

use super::bits::extract_bits;
use super::decoded::{imm, lane, qreg, reserved, sreg, vector, Decoded, Leaf};
use super::fields::{
    CryptoAes, CryptoFourReg, CryptoThreeRegImm2, CryptoThreeRegSha, CryptoThreeRegSha512, CryptoTwoRegSha,
    CryptoTwoRegSha512, CryptoXar,
};

use Operation as O;

/// Full 128-bit vector of `element`.
fn v(n: u32, element: ElementSize) -> Operand {
    vector(n, element, true)
}

pub(crate) fn aes(word: u32) -> Leaf {
    let f = CryptoAes(word);
    if f.size() != 0 {
        return reserved("AES size");
    }
    let operation = match f.opcode() {
        0b00100 => O::Aese,
        0b00101 => O::Aesd,
        0b00110 => O::Aesmc,
        0b00111 => O::Aesimc,
        _ => return reserved("AES opcode"),
    };
    Ok(Decoded::new(operation).with(v(f.rd(), ElementSize::B)).with(v(f.rn(), ElementSize::B)))
}

pub(crate) fn sha_three(word: u32) -> Leaf {
    let f = CryptoThreeRegSha(word);
    if f.size() != 0 {
        return reserved("SHA three-register size");
    }
    let (rd, rn, rm) = (f.rd(), f.rn(), f.rm());
    let s = ElementSize::S;
    Ok(match f.opcode() {
        0b000 => Decoded::new(O::Sha1c).with(qreg(rd)).with(sreg(rn)).with(v(rm, s)),
        0b001 => Decoded::new(O::Sha1p).with(qreg(rd)).with(sreg(rn)).with(v(rm, s)),
        0b010 => Decoded::new(O::Sha1m).with(qreg(rd)).with(sreg(rn)).with(v(rm, s)),
        0b011 => Decoded::new(O::Sha1su0).with(v(rd, s)).with(v(rn, s)).with(v(rm, s)),
        0b100 => Decoded::new(O::Sha256h).with(qreg(rd)).with(qreg(rn)).with(v(rm, s)),
        0b101 => Decoded::new(O::Sha256h2).with(qreg(rd)).with(qreg(rn)).with(v(rm, s)),
        0b110 => Decoded::new(O::Sha256su1).with(v(rd, s)).with(v(rn, s)).with(v(rm, s)),
        _ => return reserved("SHA three-register opcode"),
    })
}

pub(crate) fn sha_two(word: u32) -> Leaf {
    let f = CryptoTwoRegSha(word);
    if f.size() != 0 {
        return reserved("SHA two-register size");
    }
    let (rd, rn) = (f.rd(), f.rn());
    Ok(match f.opcode() {
        0b00000 => Decoded::new(O::Sha1h).with(sreg(rd)).with(sreg(rn)),
        0b00001 => Decoded::new(O::Sha1su1).with(v(rd, ElementSize::S)).with(v(rn, ElementSize::S)),
        0b00010 => Decoded::new(O::Sha256su0).with(v(rd, ElementSize::S)).with(v(rn, ElementSize::S)),
        _ => return reserved("SHA two-register opcode"),
    })
}

/// The `1100 1110` space: SHA-3, SHA-512, SM3 and SM4.
pub(crate) fn decode_wide(word: u32) -> Leaf {
    if extract_bits(word, 24, 4) != 0b1110 {
        return reserved("cryptographic op0");
    }
    let op21 = extract_bits(word, 21, 2);
    if extract_bits(word, 23, 1) == 1 {
        return if op21 == 0b00 {
            xar(CryptoXar(word))
        } else if extract_bits(word, 12, 11) == 0b100_0000_1000 {
            sha512_two(CryptoTwoRegSha512(word))
        } else {
            reserved("cryptographic two-register")
        };
    }
    match (extract_bits(word, 15, 1), op21) {
        (0, 0b11) => reserved("cryptographic four-register Op0"),
        (0, _) => four_register(CryptoFourReg(word)),
        (_, 0b10) if extract_bits(word, 14, 1) == 0 => three_imm2(CryptoThreeRegImm2(word)),
        (_, 0b11) if extract_bits(word, 12, 2) == 0 => sha512_three(CryptoThreeRegSha512(word)),
        _ => reserved("cryptographic three-register"),
    }
}

fn four_register(f: CryptoFourReg) -> Leaf {
    let (operation, element) = match f.op0() {
        0b00 => (O::Eor3, ElementSize::B),
        0b01 => (O::Bcax, ElementSize::B),
        _ => (O::Sm3ss1, ElementSize::S),
    };
    Ok(Decoded::new(operation)
        .with(v(f.rd(), element))
        .with(v(f.rn(), element))
        .with(v(f.rm(), element))
        .with(v(f.ra(), element)))
}

fn three_imm2(f: CryptoThreeRegImm2) -> Leaf {
    let operation = match f.opcode() {
        0b00 => O::Sm3tt1a,
        0b01 => O::Sm3tt1b,
        0b10 => O::Sm3tt2a,
        _ => O::Sm3tt2b,
    };
    Ok(Decoded::new(operation)
        .with(v(f.rd(), ElementSize::S))
        .with(v(f.rn(), ElementSize::S))
        .with(lane(f.rm(), ElementSize::S, f.imm2())))
}

fn sha512_three(f: CryptoThreeRegSha512) -> Leaf {
    let (rd, rn, rm) = (f.rd(), f.rn(), f.rm());
    let (d, s) = (ElementSize::D, ElementSize::S);
    Ok(match (f.o(), f.opcode()) {
        (0, 0b00) => Decoded::new(O::Sha512h).with(qreg(rd)).with(qreg(rn)).with(v(rm, d)),
        (0, 0b01) => Decoded::new(O::Sha512h2).with(qreg(rd)).with(qreg(rn)).with(v(rm, d)),
        (0, 0b10) => Decoded::new(O::Sha512su1).with(v(rd, d)).with(v(rn, d)).with(v(rm, d)),
        (0, _) => Decoded::new(O::Rax1).with(v(rd, d)).with(v(rn, d)).with(v(rm, d)),
        (_, 0b00) => Decoded::new(O::Sm3partw1).with(v(rd, s)).with(v(rn, s)).with(v(rm, s)),
        (_, 0b01) => Decoded::new(O::Sm3partw2).with(v(rd, s)).with(v(rn, s)).with(v(rm, s)),
        (_, 0b10) => Decoded::new(O::Sm4ekey).with(v(rd, s)).with(v(rn, s)).with(v(rm, s)),
        _ => return reserved("SHA512 three-register opcode"),
    })
}

fn xar(f: CryptoXar) -> Leaf {
    let d = ElementSize::D;
    Ok(Decoded::new(O::Xar)
        .with(v(f.rd(), d))
        .with(v(f.rn(), d))
        .with(v(f.rm(), d))
        .with(imm(u64::from(f.imm6()))))
}

fn sha512_two(f: CryptoTwoRegSha512) -> Leaf {
    match f.opcode() {
        0b00 => Ok(Decoded::new(O::Sha512su0).with(v(f.rd(), ElementSize::D)).with(v(f.rn(), ElementSize::D))),
        0b01 => Ok(Decoded::new(O::Sm4e).with(v(f.rd(), ElementSize::S)).with(v(f.rn(), ElementSize::S))),
        _ => reserved("SHA512 two-register opcode"),
    }
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
    fn test_aes() {
        assert_eq!(dis(0x4e284820), "aese\tv0.16b, v1.16b");
        assert_eq!(dis(0x4e285820), "aesd\tv0.16b, v1.16b");
        assert_eq!(dis(0x4e286820), "aesmc\tv0.16b, v1.16b");
        assert_eq!(dis(0x4e287820), "aesimc\tv0.16b, v1.16b");
    }

    #[test]
    fn test_sha1_sha256() {
        assert_eq!(dis(0x5e020020), "sha1c\tq0, s1, v2.4s");
        assert_eq!(dis(0x5e024020), "sha256h\tq0, q1, v2.4s");
        assert_eq!(dis(0x5e026020), "sha256su1\tv0.4s, v1.4s, v2.4s");
        assert_eq!(dis(0x5e280820), "sha1h\ts0, s1");
        assert_eq!(dis(0x5e282820), "sha256su0\tv0.4s, v1.4s");
        // opcode 111
        assert!(decode(0x5e027020, 0).is_err());
    }

    #[test]
    fn test_sha3_sha512() {
        assert_eq!(dis(0xce020c20), "eor3\tv0.16b, v1.16b, v2.16b, v3.16b");
        assert_eq!(dis(0xce220c20), "bcax\tv0.16b, v1.16b, v2.16b, v3.16b");
        assert_eq!(dis(0xce628020), "sha512h\tq0, q1, v2.2d");
        assert_eq!(dis(0xce628c20), "rax1\tv0.2d, v1.2d, v2.2d");
        assert_eq!(dis(0xce821420), "xar\tv0.2d, v1.2d, v2.2d, #0x5");
        assert_eq!(dis(0xcec08020), "sha512su0\tv0.2d, v1.2d");
    }

    #[test]
    fn test_sm3_sm4() {
        assert_eq!(dis(0xce420c20), "sm3ss1\tv0.4s, v1.4s, v2.4s, v3.4s");
        assert_eq!(dis(0xce42b020), "sm3tt1a\tv0.4s, v1.4s, v2.s[3]");
        assert_eq!(dis(0xce62c820), "sm4ekey\tv0.4s, v1.4s, v2.4s");
        assert_eq!(dis(0xcec08420), "sm4e\tv0.4s, v1.4s");
    }
}
