//! Instruction operations.
//!
//! [`Operation`] is the closed set of mnemonics the decoder can produce,
//! aliases included. Conditional branches carry their condition in the
//! operation (`b.eq` .. `b.nv`); every other name is the lowercase variant.

use std::fmt;

macro_rules! operations {
    ($($variant:ident => $name:literal,)+) => {
        /// Operation of a decoded instruction.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Operation {
            $($variant,)+
        }

        const NAMES: &[&str] = &[$($name,)+];

        const ALL: &[Operation] = &[$(Operation::$variant,)+];
    };
}

operations! {
    Undefined => "undefined",
    Abs => "abs",
    Adc => "adc",
    Adcs => "adcs",
    Add => "add",
    Addhn => "addhn",
    Addhn2 => "addhn2",
    Addp => "addp",
    Adds => "adds",
    Addv => "addv",
    Adr => "adr",
    Adrp => "adrp",
    Aesd => "aesd",
    Aese => "aese",
    Aesimc => "aesimc",
    Aesmc => "aesmc",
    And => "and",
    Ands => "ands",
    Asr => "asr",
    At => "at",
    Autda => "autda",
    Autdb => "autdb",
    Autdza => "autdza",
    Autdzb => "autdzb",
    Autia => "autia",
    Autia1716 => "autia1716",
    Autiasp => "autiasp",
    Autiaz => "autiaz",
    Autib => "autib",
    Autib1716 => "autib1716",
    Autibsp => "autibsp",
    Autibz => "autibz",
    Autiza => "autiza",
    Autizb => "autizb",
    Axflag => "axflag",
    B => "b",
    Bcax => "bcax",
    Bfc => "bfc",
    Bfi => "bfi",
    Bfxil => "bfxil",
    Bic => "bic",
    Bics => "bics",
    Bif => "bif",
    Bit => "bit",
    Bl => "bl",
    Blr => "blr",
    Blraa => "blraa",
    Blraaz => "blraaz",
    Blrab => "blrab",
    Blrabz => "blrabz",
    Br => "br",
    Braa => "braa",
    Braaz => "braaz",
    Brab => "brab",
    Brabz => "brabz",
    Brk => "brk",
    Bsl => "bsl",
    Bti => "bti",
    Cas => "cas",
    Casa => "casa",
    Casab => "casab",
    Casah => "casah",
    Casal => "casal",
    Casalb => "casalb",
    Casalh => "casalh",
    Casb => "casb",
    Cash => "cash",
    Casl => "casl",
    Caslb => "caslb",
    Caslh => "caslh",
    Casp => "casp",
    Caspa => "caspa",
    Caspal => "caspal",
    Caspl => "caspl",
    Cbnz => "cbnz",
    Cbz => "cbz",
    Ccmn => "ccmn",
    Ccmp => "ccmp",
    Cfinv => "cfinv",
    Cinc => "cinc",
    Cinv => "cinv",
    Clrex => "clrex",
    Cls => "cls",
    Clz => "clz",
    Cmeq => "cmeq",
    Cmge => "cmge",
    Cmgt => "cmgt",
    Cmhi => "cmhi",
    Cmhs => "cmhs",
    Cmle => "cmle",
    Cmlt => "cmlt",
    Cmn => "cmn",
    Cmp => "cmp",
    Cmtst => "cmtst",
    Cneg => "cneg",
    Cnt => "cnt",
    Crc32b => "crc32b",
    Crc32cb => "crc32cb",
    Crc32ch => "crc32ch",
    Crc32cw => "crc32cw",
    Crc32cx => "crc32cx",
    Crc32h => "crc32h",
    Crc32w => "crc32w",
    Crc32x => "crc32x",
    Csdb => "csdb",
    Csel => "csel",
    Cset => "cset",
    Csetm => "csetm",
    Csinc => "csinc",
    Csinv => "csinv",
    Csneg => "csneg",
    Dc => "dc",
    Dcps1 => "dcps1",
    Dcps2 => "dcps2",
    Dcps3 => "dcps3",
    Dgh => "dgh",
    Dmb => "dmb",
    Drps => "drps",
    Dsb => "dsb",
    Dup => "dup",
    Eon => "eon",
    Eor => "eor",
    Eor3 => "eor3",
    Eret => "eret",
    Eretaa => "eretaa",
    Eretab => "eretab",
    Esb => "esb",
    Ext => "ext",
    Extr => "extr",
    Fabd => "fabd",
    Fabs => "fabs",
    Facge => "facge",
    Facgt => "facgt",
    Fadd => "fadd",
    Faddp => "faddp",
    Fcadd => "fcadd",
    Fccmp => "fccmp",
    Fccmpe => "fccmpe",
    Fcmeq => "fcmeq",
    Fcmge => "fcmge",
    Fcmgt => "fcmgt",
    Fcmla => "fcmla",
    Fcmle => "fcmle",
    Fcmlt => "fcmlt",
    Fcmp => "fcmp",
    Fcmpe => "fcmpe",
    Fcsel => "fcsel",
    Fcvt => "fcvt",
    Fcvtas => "fcvtas",
    Fcvtau => "fcvtau",
    Fcvtl => "fcvtl",
    Fcvtl2 => "fcvtl2",
    Fcvtms => "fcvtms",
    Fcvtmu => "fcvtmu",
    Fcvtn => "fcvtn",
    Fcvtn2 => "fcvtn2",
    Fcvtns => "fcvtns",
    Fcvtnu => "fcvtnu",
    Fcvtps => "fcvtps",
    Fcvtpu => "fcvtpu",
    Fcvtxn => "fcvtxn",
    Fcvtxn2 => "fcvtxn2",
    Fcvtzs => "fcvtzs",
    Fcvtzu => "fcvtzu",
    Fdiv => "fdiv",
    Fjcvtzs => "fjcvtzs",
    Fmadd => "fmadd",
    Fmax => "fmax",
    Fmaxnm => "fmaxnm",
    Fmaxnmp => "fmaxnmp",
    Fmaxnmv => "fmaxnmv",
    Fmaxp => "fmaxp",
    Fmaxv => "fmaxv",
    Fmin => "fmin",
    Fminnm => "fminnm",
    Fminnmp => "fminnmp",
    Fminnmv => "fminnmv",
    Fminp => "fminp",
    Fminv => "fminv",
    Fmla => "fmla",
    Fmls => "fmls",
    Fmov => "fmov",
    Fmsub => "fmsub",
    Fmul => "fmul",
    Fmulx => "fmulx",
    Fneg => "fneg",
    Fnmadd => "fnmadd",
    Fnmsub => "fnmsub",
    Fnmul => "fnmul",
    Frecpe => "frecpe",
    Frecps => "frecps",
    Frecpx => "frecpx",
    Frint32x => "frint32x",
    Frint32z => "frint32z",
    Frint64x => "frint64x",
    Frint64z => "frint64z",
    Frinta => "frinta",
    Frinti => "frinti",
    Frintm => "frintm",
    Frintn => "frintn",
    Frintp => "frintp",
    Frintx => "frintx",
    Frintz => "frintz",
    Frsqrte => "frsqrte",
    Frsqrts => "frsqrts",
    Fsqrt => "fsqrt",
    Fsub => "fsub",
    Hint => "hint",
    Hlt => "hlt",
    Hvc => "hvc",
    Ic => "ic",
    Isb => "isb",
    Ld1 => "ld1",
    Ld1r => "ld1r",
    Ld2 => "ld2",
    Ld2r => "ld2r",
    Ld3 => "ld3",
    Ld3r => "ld3r",
    Ld4 => "ld4",
    Ld4r => "ld4r",
    Ldadd => "ldadd",
    Ldadda => "ldadda",
    Ldaddab => "ldaddab",
    Ldaddah => "ldaddah",
    Ldaddal => "ldaddal",
    Ldaddalb => "ldaddalb",
    Ldaddalh => "ldaddalh",
    Ldaddb => "ldaddb",
    Ldaddh => "ldaddh",
    Ldaddl => "ldaddl",
    Ldaddlb => "ldaddlb",
    Ldaddlh => "ldaddlh",
    Ldapr => "ldapr",
    Ldaprb => "ldaprb",
    Ldaprh => "ldaprh",
    Ldapur => "ldapur",
    Ldapurb => "ldapurb",
    Ldapurh => "ldapurh",
    Ldapursb => "ldapursb",
    Ldapursh => "ldapursh",
    Ldapursw => "ldapursw",
    Ldar => "ldar",
    Ldarb => "ldarb",
    Ldarh => "ldarh",
    Ldaxp => "ldaxp",
    Ldaxr => "ldaxr",
    Ldaxrb => "ldaxrb",
    Ldaxrh => "ldaxrh",
    Ldclr => "ldclr",
    Ldclra => "ldclra",
    Ldclrab => "ldclrab",
    Ldclrah => "ldclrah",
    Ldclral => "ldclral",
    Ldclralb => "ldclralb",
    Ldclralh => "ldclralh",
    Ldclrb => "ldclrb",
    Ldclrh => "ldclrh",
    Ldclrl => "ldclrl",
    Ldclrlb => "ldclrlb",
    Ldclrlh => "ldclrlh",
    Ldeor => "ldeor",
    Ldeora => "ldeora",
    Ldeorab => "ldeorab",
    Ldeorah => "ldeorah",
    Ldeoral => "ldeoral",
    Ldeoralb => "ldeoralb",
    Ldeoralh => "ldeoralh",
    Ldeorb => "ldeorb",
    Ldeorh => "ldeorh",
    Ldeorl => "ldeorl",
    Ldeorlb => "ldeorlb",
    Ldeorlh => "ldeorlh",
    Ldlar => "ldlar",
    Ldlarb => "ldlarb",
    Ldlarh => "ldlarh",
    Ldnp => "ldnp",
    Ldp => "ldp",
    Ldpsw => "ldpsw",
    Ldr => "ldr",
    Ldraa => "ldraa",
    Ldrab => "ldrab",
    Ldrb => "ldrb",
    Ldrh => "ldrh",
    Ldrsb => "ldrsb",
    Ldrsh => "ldrsh",
    Ldrsw => "ldrsw",
    Ldset => "ldset",
    Ldseta => "ldseta",
    Ldsetab => "ldsetab",
    Ldsetah => "ldsetah",
    Ldsetal => "ldsetal",
    Ldsetalb => "ldsetalb",
    Ldsetalh => "ldsetalh",
    Ldsetb => "ldsetb",
    Ldseth => "ldseth",
    Ldsetl => "ldsetl",
    Ldsetlb => "ldsetlb",
    Ldsetlh => "ldsetlh",
    Ldsmax => "ldsmax",
    Ldsmaxa => "ldsmaxa",
    Ldsmaxab => "ldsmaxab",
    Ldsmaxah => "ldsmaxah",
    Ldsmaxal => "ldsmaxal",
    Ldsmaxalb => "ldsmaxalb",
    Ldsmaxalh => "ldsmaxalh",
    Ldsmaxb => "ldsmaxb",
    Ldsmaxh => "ldsmaxh",
    Ldsmaxl => "ldsmaxl",
    Ldsmaxlb => "ldsmaxlb",
    Ldsmaxlh => "ldsmaxlh",
    Ldsmin => "ldsmin",
    Ldsmina => "ldsmina",
    Ldsminab => "ldsminab",
    Ldsminah => "ldsminah",
    Ldsminal => "ldsminal",
    Ldsminalb => "ldsminalb",
    Ldsminalh => "ldsminalh",
    Ldsminb => "ldsminb",
    Ldsminh => "ldsminh",
    Ldsminl => "ldsminl",
    Ldsminlb => "ldsminlb",
    Ldsminlh => "ldsminlh",
    Ldtr => "ldtr",
    Ldtrb => "ldtrb",
    Ldtrh => "ldtrh",
    Ldtrsb => "ldtrsb",
    Ldtrsh => "ldtrsh",
    Ldtrsw => "ldtrsw",
    Ldumax => "ldumax",
    Ldumaxa => "ldumaxa",
    Ldumaxab => "ldumaxab",
    Ldumaxah => "ldumaxah",
    Ldumaxal => "ldumaxal",
    Ldumaxalb => "ldumaxalb",
    Ldumaxalh => "ldumaxalh",
    Ldumaxb => "ldumaxb",
    Ldumaxh => "ldumaxh",
    Ldumaxl => "ldumaxl",
    Ldumaxlb => "ldumaxlb",
    Ldumaxlh => "ldumaxlh",
    Ldumin => "ldumin",
    Ldumina => "ldumina",
    Lduminab => "lduminab",
    Lduminah => "lduminah",
    Lduminal => "lduminal",
    Lduminalb => "lduminalb",
    Lduminalh => "lduminalh",
    Lduminb => "lduminb",
    Lduminh => "lduminh",
    Lduminl => "lduminl",
    Lduminlb => "lduminlb",
    Lduminlh => "lduminlh",
    Ldur => "ldur",
    Ldurb => "ldurb",
    Ldurh => "ldurh",
    Ldursb => "ldursb",
    Ldursh => "ldursh",
    Ldursw => "ldursw",
    Ldxp => "ldxp",
    Ldxr => "ldxr",
    Ldxrb => "ldxrb",
    Ldxrh => "ldxrh",
    Lsl => "lsl",
    Lsr => "lsr",
    Madd => "madd",
    Mla => "mla",
    Mls => "mls",
    Mneg => "mneg",
    Mov => "mov",
    Movi => "movi",
    Movk => "movk",
    Movn => "movn",
    Movz => "movz",
    Mrs => "mrs",
    Msr => "msr",
    Msub => "msub",
    Mul => "mul",
    Mvn => "mvn",
    Mvni => "mvni",
    Neg => "neg",
    Negs => "negs",
    Ngc => "ngc",
    Ngcs => "ngcs",
    Nop => "nop",
    Orn => "orn",
    Orr => "orr",
    Pacda => "pacda",
    Pacdb => "pacdb",
    Pacdza => "pacdza",
    Pacdzb => "pacdzb",
    Pacga => "pacga",
    Pacia => "pacia",
    Pacia1716 => "pacia1716",
    Paciasp => "paciasp",
    Paciaz => "paciaz",
    Pacib => "pacib",
    Pacib1716 => "pacib1716",
    Pacibsp => "pacibsp",
    Pacibz => "pacibz",
    Paciza => "paciza",
    Pacizb => "pacizb",
    Pmul => "pmul",
    Pmull => "pmull",
    Pmull2 => "pmull2",
    Prfm => "prfm",
    Prfum => "prfum",
    Psb => "psb",
    Pssbb => "pssbb",
    Raddhn => "raddhn",
    Raddhn2 => "raddhn2",
    Rax1 => "rax1",
    Rbit => "rbit",
    Ret => "ret",
    Retaa => "retaa",
    Retab => "retab",
    Rev => "rev",
    Rev16 => "rev16",
    Rev32 => "rev32",
    Rev64 => "rev64",
    Rmif => "rmif",
    Ror => "ror",
    Rshrn => "rshrn",
    Rshrn2 => "rshrn2",
    Rsubhn => "rsubhn",
    Rsubhn2 => "rsubhn2",
    Saba => "saba",
    Sabal => "sabal",
    Sabal2 => "sabal2",
    Sabd => "sabd",
    Sabdl => "sabdl",
    Sabdl2 => "sabdl2",
    Sadalp => "sadalp",
    Saddl => "saddl",
    Saddl2 => "saddl2",
    Saddlp => "saddlp",
    Saddlv => "saddlv",
    Saddw => "saddw",
    Saddw2 => "saddw2",
    Sb => "sb",
    Sbc => "sbc",
    Sbcs => "sbcs",
    Sbfiz => "sbfiz",
    Sbfm => "sbfm",
    Sbfx => "sbfx",
    Scvtf => "scvtf",
    Sdiv => "sdiv",
    Sdot => "sdot",
    Setf16 => "setf16",
    Setf8 => "setf8",
    Sev => "sev",
    Sevl => "sevl",
    Sha1c => "sha1c",
    Sha1h => "sha1h",
    Sha1m => "sha1m",
    Sha1p => "sha1p",
    Sha1su0 => "sha1su0",
    Sha1su1 => "sha1su1",
    Sha256h => "sha256h",
    Sha256h2 => "sha256h2",
    Sha256su0 => "sha256su0",
    Sha256su1 => "sha256su1",
    Sha512h => "sha512h",
    Sha512h2 => "sha512h2",
    Sha512su0 => "sha512su0",
    Sha512su1 => "sha512su1",
    Shadd => "shadd",
    Shl => "shl",
    Shll => "shll",
    Shll2 => "shll2",
    Shrn => "shrn",
    Shrn2 => "shrn2",
    Shsub => "shsub",
    Sli => "sli",
    Sm3partw1 => "sm3partw1",
    Sm3partw2 => "sm3partw2",
    Sm3ss1 => "sm3ss1",
    Sm3tt1a => "sm3tt1a",
    Sm3tt1b => "sm3tt1b",
    Sm3tt2a => "sm3tt2a",
    Sm3tt2b => "sm3tt2b",
    Sm4e => "sm4e",
    Sm4ekey => "sm4ekey",
    Smaddl => "smaddl",
    Smax => "smax",
    Smaxp => "smaxp",
    Smaxv => "smaxv",
    Smc => "smc",
    Smin => "smin",
    Sminp => "sminp",
    Sminv => "sminv",
    Smlal => "smlal",
    Smlal2 => "smlal2",
    Smlsl => "smlsl",
    Smlsl2 => "smlsl2",
    Smnegl => "smnegl",
    Smov => "smov",
    Smsubl => "smsubl",
    Smulh => "smulh",
    Smull => "smull",
    Smull2 => "smull2",
    Sqabs => "sqabs",
    Sqadd => "sqadd",
    Sqdmlal => "sqdmlal",
    Sqdmlal2 => "sqdmlal2",
    Sqdmlsl => "sqdmlsl",
    Sqdmlsl2 => "sqdmlsl2",
    Sqdmulh => "sqdmulh",
    Sqdmull => "sqdmull",
    Sqdmull2 => "sqdmull2",
    Sqneg => "sqneg",
    Sqrdmlah => "sqrdmlah",
    Sqrdmlsh => "sqrdmlsh",
    Sqrdmulh => "sqrdmulh",
    Sqrshl => "sqrshl",
    Sqrshrn => "sqrshrn",
    Sqrshrn2 => "sqrshrn2",
    Sqrshrun => "sqrshrun",
    Sqrshrun2 => "sqrshrun2",
    Sqshl => "sqshl",
    Sqshlu => "sqshlu",
    Sqshrn => "sqshrn",
    Sqshrn2 => "sqshrn2",
    Sqshrun => "sqshrun",
    Sqshrun2 => "sqshrun2",
    Sqsub => "sqsub",
    Sqxtn => "sqxtn",
    Sqxtn2 => "sqxtn2",
    Sqxtun => "sqxtun",
    Sqxtun2 => "sqxtun2",
    Srhadd => "srhadd",
    Sri => "sri",
    Srshl => "srshl",
    Srshr => "srshr",
    Srsra => "srsra",
    Ssbb => "ssbb",
    Sshl => "sshl",
    Sshll => "sshll",
    Sshll2 => "sshll2",
    Sshr => "sshr",
    Ssra => "ssra",
    Ssubl => "ssubl",
    Ssubl2 => "ssubl2",
    Ssubw => "ssubw",
    Ssubw2 => "ssubw2",
    St1 => "st1",
    St2 => "st2",
    St3 => "st3",
    St4 => "st4",
    Stadd => "stadd",
    Staddb => "staddb",
    Staddh => "staddh",
    Staddl => "staddl",
    Staddlb => "staddlb",
    Staddlh => "staddlh",
    Stclr => "stclr",
    Stclrb => "stclrb",
    Stclrh => "stclrh",
    Stclrl => "stclrl",
    Stclrlb => "stclrlb",
    Stclrlh => "stclrlh",
    Steor => "steor",
    Steorb => "steorb",
    Steorh => "steorh",
    Steorl => "steorl",
    Steorlb => "steorlb",
    Steorlh => "steorlh",
    Stllr => "stllr",
    Stllrb => "stllrb",
    Stllrh => "stllrh",
    Stlr => "stlr",
    Stlrb => "stlrb",
    Stlrh => "stlrh",
    Stlur => "stlur",
    Stlurb => "stlurb",
    Stlurh => "stlurh",
    Stlxp => "stlxp",
    Stlxr => "stlxr",
    Stlxrb => "stlxrb",
    Stlxrh => "stlxrh",
    Stnp => "stnp",
    Stp => "stp",
    Str => "str",
    Strb => "strb",
    Strh => "strh",
    Stset => "stset",
    Stsetb => "stsetb",
    Stseth => "stseth",
    Stsetl => "stsetl",
    Stsetlb => "stsetlb",
    Stsetlh => "stsetlh",
    Stsmax => "stsmax",
    Stsmaxb => "stsmaxb",
    Stsmaxh => "stsmaxh",
    Stsmaxl => "stsmaxl",
    Stsmaxlb => "stsmaxlb",
    Stsmaxlh => "stsmaxlh",
    Stsmin => "stsmin",
    Stsminb => "stsminb",
    Stsminh => "stsminh",
    Stsminl => "stsminl",
    Stsminlb => "stsminlb",
    Stsminlh => "stsminlh",
    Sttr => "sttr",
    Sttrb => "sttrb",
    Sttrh => "sttrh",
    Stumax => "stumax",
    Stumaxb => "stumaxb",
    Stumaxh => "stumaxh",
    Stumaxl => "stumaxl",
    Stumaxlb => "stumaxlb",
    Stumaxlh => "stumaxlh",
    Stumin => "stumin",
    Stuminb => "stuminb",
    Stuminh => "stuminh",
    Stuminl => "stuminl",
    Stuminlb => "stuminlb",
    Stuminlh => "stuminlh",
    Stur => "stur",
    Sturb => "sturb",
    Sturh => "sturh",
    Stxp => "stxp",
    Stxr => "stxr",
    Stxrb => "stxrb",
    Stxrh => "stxrh",
    Sub => "sub",
    Subhn => "subhn",
    Subhn2 => "subhn2",
    Subs => "subs",
    Suqadd => "suqadd",
    Svc => "svc",
    Swp => "swp",
    Swpa => "swpa",
    Swpab => "swpab",
    Swpah => "swpah",
    Swpal => "swpal",
    Swpalb => "swpalb",
    Swpalh => "swpalh",
    Swpb => "swpb",
    Swph => "swph",
    Swpl => "swpl",
    Swplb => "swplb",
    Swplh => "swplh",
    Sxtb => "sxtb",
    Sxth => "sxth",
    Sxtl => "sxtl",
    Sxtl2 => "sxtl2",
    Sxtw => "sxtw",
    Sys => "sys",
    Sysl => "sysl",
    Tbl => "tbl",
    Tbnz => "tbnz",
    Tbx => "tbx",
    Tbz => "tbz",
    Tlbi => "tlbi",
    Trn1 => "trn1",
    Trn2 => "trn2",
    Tsb => "tsb",
    Tst => "tst",
    Uaba => "uaba",
    Uabal => "uabal",
    Uabal2 => "uabal2",
    Uabd => "uabd",
    Uabdl => "uabdl",
    Uabdl2 => "uabdl2",
    Uadalp => "uadalp",
    Uaddl => "uaddl",
    Uaddl2 => "uaddl2",
    Uaddlp => "uaddlp",
    Uaddlv => "uaddlv",
    Uaddw => "uaddw",
    Uaddw2 => "uaddw2",
    Ubfiz => "ubfiz",
    Ubfm => "ubfm",
    Ubfx => "ubfx",
    Ucvtf => "ucvtf",
    Udiv => "udiv",
    Udot => "udot",
    Uhadd => "uhadd",
    Uhsub => "uhsub",
    Umaddl => "umaddl",
    Umax => "umax",
    Umaxp => "umaxp",
    Umaxv => "umaxv",
    Umin => "umin",
    Uminp => "uminp",
    Uminv => "uminv",
    Umlal => "umlal",
    Umlal2 => "umlal2",
    Umlsl => "umlsl",
    Umlsl2 => "umlsl2",
    Umnegl => "umnegl",
    Umov => "umov",
    Umsubl => "umsubl",
    Umulh => "umulh",
    Umull => "umull",
    Umull2 => "umull2",
    Uqadd => "uqadd",
    Uqrshl => "uqrshl",
    Uqrshrn => "uqrshrn",
    Uqrshrn2 => "uqrshrn2",
    Uqshl => "uqshl",
    Uqshrn => "uqshrn",
    Uqshrn2 => "uqshrn2",
    Uqsub => "uqsub",
    Uqxtn => "uqxtn",
    Uqxtn2 => "uqxtn2",
    Urecpe => "urecpe",
    Urhadd => "urhadd",
    Urshl => "urshl",
    Urshr => "urshr",
    Ursqrte => "ursqrte",
    Ursra => "ursra",
    Ushl => "ushl",
    Ushll => "ushll",
    Ushll2 => "ushll2",
    Ushr => "ushr",
    Usqadd => "usqadd",
    Usra => "usra",
    Usubl => "usubl",
    Usubl2 => "usubl2",
    Usubw => "usubw",
    Usubw2 => "usubw2",
    Uxtb => "uxtb",
    Uxth => "uxth",
    Uxtl => "uxtl",
    Uxtl2 => "uxtl2",
    Uzp1 => "uzp1",
    Uzp2 => "uzp2",
    Wfe => "wfe",
    Wfi => "wfi",
    Xaflag => "xaflag",
    Xar => "xar",
    Xpacd => "xpacd",
    Xpaci => "xpaci",
    Xpaclri => "xpaclri",
    Xtn => "xtn",
    Xtn2 => "xtn2",
    Yield => "yield",
    Zip1 => "zip1",
    Zip2 => "zip2",
    BEq => "b.eq",
    BNe => "b.ne",
    BCs => "b.hs",
    BCc => "b.lo",
    BMi => "b.mi",
    BPl => "b.pl",
    BVs => "b.vs",
    BVc => "b.vc",
    BHi => "b.hi",
    BLs => "b.ls",
    BGe => "b.ge",
    BLt => "b.lt",
    BGt => "b.gt",
    BLe => "b.le",
    BAl => "b.al",
    BNv => "b.nv",
}

impl Operation {
    /// Lowercase mnemonic as printed.
    pub fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Every operation, in declaration order.
    pub fn all() -> &'static [Operation] {
        ALL
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_consistent() {
        assert_eq!(NAMES.len(), ALL.len());
        for (index, op) in Operation::all().iter().enumerate() {
            assert_eq!(*op as usize, index);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = Operation::all().iter().map(|op| op.name()).collect();
        assert_eq!(names.len(), Operation::all().len());
    }

    #[test]
    fn test_names() {
        assert_eq!(Operation::Undefined.name(), "undefined");
        assert_eq!(Operation::Ldaddalb.name(), "ldaddalb");
        assert_eq!(Operation::Sha256su0.to_string(), "sha256su0");
        assert_eq!(Operation::Frint32z.name(), "frint32z");
        assert_eq!(Operation::BCs.name(), "b.hs");
        assert_eq!(Operation::BNv.name(), "b.nv");
    }
}
