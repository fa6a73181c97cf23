//! System register symbols.
//!
//! One table maps the `(op0, op1, CRn, CRm, op2)` tuple of `MRS`/`MSR`, the
//! `(op1, CRn, CRm, op2)` tuple of the `SYS` aliases, the barrier options and
//! the PSTATE fields onto named symbols. Tuples missing from the table are not
//! errors: the decoder falls back to an implementation-specific operand.

use std::fmt;

/// Alias family of a `SYS` instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SysOp {
    /// Address translation.
    At,
    /// Data cache maintenance.
    Dc,
    /// Instruction cache maintenance.
    Ic,
    /// TLB invalidation.
    Tlbi,
}

/// System register, system operation and system operand names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemReg {
    MidrEl1,
    MpidrEl1,
    RevidrEl1,
    IdPfr0El1,
    IdPfr1El1,
    IdDfr0El1,
    IdAfr0El1,
    IdMmfr0El1,
    IdMmfr1El1,
    IdMmfr2El1,
    IdMmfr3El1,
    IdIsar0El1,
    IdIsar1El1,
    IdIsar2El1,
    IdIsar3El1,
    IdIsar4El1,
    IdIsar5El1,
    IdMmfr4El1,
    IdIsar6El1,
    Mvfr0El1,
    Mvfr1El1,
    Mvfr2El1,
    IdPfr2El1,
    IdDfr1El1,
    IdMmfr5El1,
    IdAa64pfr0El1,
    IdAa64pfr1El1,
    IdAa64zfr0El1,
    IdAa64smfr0El1,
    IdAa64dfr0El1,
    IdAa64dfr1El1,
    IdAa64afr0El1,
    IdAa64afr1El1,
    IdAa64isar0El1,
    IdAa64isar1El1,
    IdAa64isar2El1,
    IdAa64mmfr0El1,
    IdAa64mmfr1El1,
    IdAa64mmfr2El1,
    CcsidrEl1,
    ClidrEl1,
    Ccsidr2El1,
    GmidEl1,
    AidrEl1,
    CsselrEl1,
    CtrEl0,
    DczidEl0,
    VpidrEl2,
    VmpidrEl2,
    SctlrEl1,
    ActlrEl1,
    CpacrEl1,
    RgsrEl1,
    GcrEl1,
    ZcrEl1,
    TrfcrEl1,
    SmpriEl1,
    SmcrEl1,
    SctlrEl2,
    ActlrEl2,
    HcrEl2,
    MdcrEl2,
    CptrEl2,
    HstrEl2,
    HfgrtrEl2,
    HfgwtrEl2,
    HfgitrEl2,
    HacrEl2,
    ZcrEl2,
    TrfcrEl2,
    Sder32El2,
    SctlrEl12,
    CpacrEl12,
    ZcrEl12,
    TrfcrEl12,
    SctlrEl3,
    ActlrEl3,
    ScrEl3,
    Sder32El3,
    CptrEl3,
    ZcrEl3,
    MdcrEl3,
    Ttbr0El1,
    Ttbr1El1,
    TcrEl1,
    ApiakeyloEl1,
    ApiakeyhiEl1,
    ApibkeyloEl1,
    ApibkeyhiEl1,
    ApdakeyloEl1,
    ApdakeyhiEl1,
    ApdbkeyloEl1,
    ApdbkeyhiEl1,
    ApgakeyloEl1,
    ApgakeyhiEl1,
    Rndr,
    Rndrrs,
    Ttbr0El2,
    Ttbr1El2,
    TcrEl2,
    VttbrEl2,
    VtcrEl2,
    VncrEl2,
    VsttbrEl2,
    VstcrEl2,
    Ttbr0El12,
    Ttbr1El12,
    TcrEl12,
    Ttbr0El3,
    TcrEl3,
    Dacr32El2,
    SpsrEl1,
    ElrEl1,
    SpEl0,
    Spsel,
    Currentel,
    Pan,
    Uao,
    IccPmrEl1,
    Svcr,
    Nzcv,
    Daif,
    Dit,
    Ssbs,
    Tco,
    Fpcr,
    Fpsr,
    DspsrEl0,
    DlrEl0,
    SpsrEl2,
    ElrEl2,
    SpEl1,
    SpsrIrq,
    SpsrAbt,
    SpsrUnd,
    SpsrFiq,
    SpsrEl12,
    ElrEl12,
    SpsrEl3,
    ElrEl3,
    SpEl2,
    Afsr0El1,
    Afsr1El1,
    EsrEl1,
    ErridrEl1,
    ErrselrEl1,
    ErxfrEl1,
    ErxctlrEl1,
    ErxstatusEl1,
    ErxaddrEl1,
    ErxpfgfEl1,
    ErxpfgctlEl1,
    ErxpfgcdnEl1,
    Erxmisc0El1,
    Erxmisc1El1,
    Erxmisc2El1,
    Erxmisc3El1,
    TfsrEl1,
    Tfsre0El1,
    Ifsr32El2,
    Afsr0El2,
    Afsr1El2,
    EsrEl2,
    VsesrEl2,
    Fpexc32El2,
    TfsrEl2,
    Afsr0El12,
    Afsr1El12,
    EsrEl12,
    TfsrEl12,
    Afsr0El3,
    Afsr1El3,
    EsrEl3,
    TfsrEl3,
    FarEl1,
    FarEl2,
    HpfarEl2,
    FarEl12,
    FarEl3,
    ParEl1,
    PmscrEl1,
    PmsnevfrEl1,
    PmsicrEl1,
    PmsirrEl1,
    PmsfcrEl1,
    PmsevfrEl1,
    PmslatfrEl1,
    PmsidrEl1,
    PmblimitrEl1,
    PmbptrEl1,
    PmbsrEl1,
    PmbidrEl1,
    TrblimitrEl1,
    TrbptrEl1,
    TrbbaserEl1,
    TrbsrEl1,
    TrbmarEl1,
    TrbtrgEl1,
    TrbidrEl1,
    PmintensetEl1,
    PmintenclrEl1,
    PmmirEl1,
    PmcrEl0,
    PmcntensetEl0,
    PmcntenclrEl0,
    PmovsclrEl0,
    PmswincEl0,
    PmselrEl0,
    Pmceid0El0,
    Pmceid1El0,
    PmccntrEl0,
    PmxevtyperEl0,
    PmxevcntrEl0,
    PmuserenrEl0,
    PmovssetEl0,
    PmscrEl2,
    PmscrEl12,
    MairEl1,
    AmairEl1,
    LorsaEl1,
    LoreaEl1,
    LornEl1,
    LorcEl1,
    MpamidrEl1,
    LoridEl1,
    Mpam1El1,
    Mpam0El1,
    MairEl2,
    AmairEl2,
    MpamhcrEl2,
    MpamvpmvEl2,
    Mpam2El2,
    MairEl12,
    AmairEl12,
    Mpam1El12,
    MairEl3,
    AmairEl3,
    Mpam3El3,
    VbarEl1,
    RvbarEl1,
    RmrEl1,
    IsrEl1,
    DisrEl1,
    IccIar0El1,
    IccEoir0El1,
    IccHppir0El1,
    IccBpr0El1,
    IccAp0r0El1,
    IccAp0r1El1,
    IccAp0r2El1,
    IccAp0r3El1,
    IccAp1r0El1,
    IccAp1r1El1,
    IccAp1r2El1,
    IccAp1r3El1,
    IccNmiar1El1,
    IccDirEl1,
    IccRprEl1,
    IccSgi1rEl1,
    IccAsgi1rEl1,
    IccSgi0rEl1,
    IccIar1El1,
    IccEoir1El1,
    IccHppir1El1,
    IccBpr1El1,
    IccCtlrEl1,
    IccSreEl1,
    IccIgrpen0El1,
    IccIgrpen1El1,
    VbarEl2,
    RvbarEl2,
    RmrEl2,
    VdisrEl2,
    IchAp0r0El2,
    IchAp0r1El2,
    IchAp0r2El2,
    IchAp0r3El2,
    IchAp1r0El2,
    IchAp1r1El2,
    IchAp1r2El2,
    IchAp1r3El2,
    IccSreEl2,
    IchHcrEl2,
    IchVtrEl2,
    IchMisrEl2,
    IchEisrEl2,
    IchElrsrEl2,
    IchVmcrEl2,
    VbarEl12,
    VbarEl3,
    RvbarEl3,
    RmrEl3,
    IccCtlrEl3,
    IccSreEl3,
    IccIgrpen1El3,
    ContextidrEl1,
    TpidrEl1,
    AccdataEl1,
    ScxtnumEl1,
    TpidrEl0,
    TpidrroEl0,
    Tpidr2El0,
    ScxtnumEl0,
    AmcrEl0,
    AmcfgrEl0,
    AmcgcrEl0,
    AmuserenrEl0,
    Amcntenclr0El0,
    Amcntenset0El0,
    Amcg1idrEl0,
    Amcntenclr1El0,
    Amcntenset1El0,
    ContextidrEl2,
    TpidrEl2,
    ScxtnumEl2,
    ContextidrEl12,
    ScxtnumEl12,
    TpidrEl3,
    ScxtnumEl3,
    CntkctlEl1,
    CntfrqEl0,
    CntpctEl0,
    CntvctEl0,
    CntpctssEl0,
    CntvctssEl0,
    CntpTvalEl0,
    CntpCtlEl0,
    CntpCvalEl0,
    CntvTvalEl0,
    CntvCtlEl0,
    CntvCvalEl0,
    PmccfiltrEl0,
    CntvoffEl2,
    CntpoffEl2,
    CnthctlEl2,
    CnthpTvalEl2,
    CnthpCtlEl2,
    CnthpCvalEl2,
    CnthvTvalEl2,
    CnthvCtlEl2,
    CnthvCvalEl2,
    CnthvsTvalEl2,
    CnthvsCtlEl2,
    CnthvsCvalEl2,
    CnthpsTvalEl2,
    CnthpsCtlEl2,
    CnthpsCvalEl2,
    CntkctlEl12,
    CntpTvalEl02,
    CntpCtlEl02,
    CntpCvalEl02,
    CntvTvalEl02,
    CntvCtlEl02,
    CntvCvalEl02,
    CntpsTvalEl1,
    CntpsCtlEl1,
    CntpsCvalEl1,
    IchLr0El2,
    Amevcntr00El0,
    Amevtyper00El0,
    Amevcntr10El0,
    Amevtyper10El0,
    IchLr1El2,
    Amevcntr01El0,
    Amevtyper01El0,
    Amevcntr11El0,
    Amevtyper11El0,
    IchLr2El2,
    Amevcntr02El0,
    Amevtyper02El0,
    Amevcntr12El0,
    Amevtyper12El0,
    IchLr3El2,
    Amevcntr03El0,
    Amevtyper03El0,
    Amevcntr13El0,
    Amevtyper13El0,
    IchLr4El2,
    Amevcntr04El0,
    Amevtyper04El0,
    Amevcntr14El0,
    Amevtyper14El0,
    IchLr5El2,
    Amevcntr05El0,
    Amevtyper05El0,
    Amevcntr15El0,
    Amevtyper15El0,
    IchLr6El2,
    Amevcntr06El0,
    Amevtyper06El0,
    Amevcntr16El0,
    Amevtyper16El0,
    IchLr7El2,
    Amevcntr07El0,
    Amevtyper07El0,
    Amevcntr17El0,
    Amevtyper17El0,
    IchLr8El2,
    Amevcntr08El0,
    Amevtyper08El0,
    Amevcntr18El0,
    Amevtyper18El0,
    IchLr9El2,
    Amevcntr09El0,
    Amevtyper09El0,
    Amevcntr19El0,
    Amevtyper19El0,
    IchLr10El2,
    Amevcntr010El0,
    Amevtyper010El0,
    Amevcntr110El0,
    Amevtyper110El0,
    IchLr11El2,
    Amevcntr011El0,
    Amevtyper011El0,
    Amevcntr111El0,
    Amevtyper111El0,
    IchLr12El2,
    Amevcntr012El0,
    Amevtyper012El0,
    Amevcntr112El0,
    Amevtyper112El0,
    IchLr13El2,
    Amevcntr013El0,
    Amevtyper013El0,
    Amevcntr113El0,
    Amevtyper113El0,
    IchLr14El2,
    Amevcntr014El0,
    Amevtyper014El0,
    Amevcntr114El0,
    Amevtyper114El0,
    IchLr15El2,
    Amevcntr015El0,
    Amevtyper015El0,
    Amevcntr115El0,
    Amevtyper115El0,
    Pmevcntr0El0,
    Pmevtyper0El0,
    Pmevcntr1El0,
    Pmevtyper1El0,
    Pmevcntr2El0,
    Pmevtyper2El0,
    Pmevcntr3El0,
    Pmevtyper3El0,
    Pmevcntr4El0,
    Pmevtyper4El0,
    Pmevcntr5El0,
    Pmevtyper5El0,
    Pmevcntr6El0,
    Pmevtyper6El0,
    Pmevcntr7El0,
    Pmevtyper7El0,
    Pmevcntr8El0,
    Pmevtyper8El0,
    Pmevcntr9El0,
    Pmevtyper9El0,
    Pmevcntr10El0,
    Pmevtyper10El0,
    Pmevcntr11El0,
    Pmevtyper11El0,
    Pmevcntr12El0,
    Pmevtyper12El0,
    Pmevcntr13El0,
    Pmevtyper13El0,
    Pmevcntr14El0,
    Pmevtyper14El0,
    Pmevcntr15El0,
    Pmevtyper15El0,
    Pmevcntr16El0,
    Pmevtyper16El0,
    Pmevcntr17El0,
    Pmevtyper17El0,
    Pmevcntr18El0,
    Pmevtyper18El0,
    Pmevcntr19El0,
    Pmevtyper19El0,
    Pmevcntr20El0,
    Pmevtyper20El0,
    Pmevcntr21El0,
    Pmevtyper21El0,
    Pmevcntr22El0,
    Pmevtyper22El0,
    Pmevcntr23El0,
    Pmevtyper23El0,
    Pmevcntr24El0,
    Pmevtyper24El0,
    Pmevcntr25El0,
    Pmevtyper25El0,
    Pmevcntr26El0,
    Pmevtyper26El0,
    Pmevcntr27El0,
    Pmevtyper27El0,
    Pmevcntr28El0,
    Pmevtyper28El0,
    Pmevcntr29El0,
    Pmevtyper29El0,
    Pmevcntr30El0,
    Pmevtyper30El0,
    OsdtrrxEl1,
    MdccintEl1,
    MdscrEl1,
    OsdtrtxEl1,
    OseccrEl1,
    MdrarEl1,
    OslarEl1,
    OslsrEl1,
    OsdlrEl1,
    DbgprcrEl1,
    DbgclaimsetEl1,
    DbgclaimclrEl1,
    DbgauthstatusEl1,
    MdccsrEl0,
    DbgdtrEl0,
    DbgdtrrxEl0,
    Dbgvcr32El2,
    Trcprgctlr,
    Trcstatr,
    Trcconfigr,
    Trctraceidr,
    Dbgbvr0El1,
    Dbgbcr0El1,
    Dbgwvr0El1,
    Dbgwcr0El1,
    Dbgbvr1El1,
    Dbgbcr1El1,
    Dbgwvr1El1,
    Dbgwcr1El1,
    Dbgbvr2El1,
    Dbgbcr2El1,
    Dbgwvr2El1,
    Dbgwcr2El1,
    Dbgbvr3El1,
    Dbgbcr3El1,
    Dbgwvr3El1,
    Dbgwcr3El1,
    Dbgbvr4El1,
    Dbgbcr4El1,
    Dbgwvr4El1,
    Dbgwcr4El1,
    Dbgbvr5El1,
    Dbgbcr5El1,
    Dbgwvr5El1,
    Dbgwcr5El1,
    Dbgbvr6El1,
    Dbgbcr6El1,
    Dbgwvr6El1,
    Dbgwcr6El1,
    Dbgbvr7El1,
    Dbgbcr7El1,
    Dbgwvr7El1,
    Dbgwcr7El1,
    Dbgbvr8El1,
    Dbgbcr8El1,
    Dbgwvr8El1,
    Dbgwcr8El1,
    Dbgbvr9El1,
    Dbgbcr9El1,
    Dbgwvr9El1,
    Dbgwcr9El1,
    Dbgbvr10El1,
    Dbgbcr10El1,
    Dbgwvr10El1,
    Dbgwcr10El1,
    Dbgbvr11El1,
    Dbgbcr11El1,
    Dbgwvr11El1,
    Dbgwcr11El1,
    Dbgbvr12El1,
    Dbgbcr12El1,
    Dbgwvr12El1,
    Dbgwcr12El1,
    Dbgbvr13El1,
    Dbgbcr13El1,
    Dbgwvr13El1,
    Dbgwcr13El1,
    Dbgbvr14El1,
    Dbgbcr14El1,
    Dbgwvr14El1,
    Dbgwcr14El1,
    Dbgbvr15El1,
    Dbgbcr15El1,
    Dbgwvr15El1,
    Dbgwcr15El1,
    DbgdtrtxEl0,
    S1e1r,
    S1e1w,
    S1e0r,
    S1e0w,
    S1e1rp,
    S1e1wp,
    S1e2r,
    S1e2w,
    S12e1r,
    S12e1w,
    S12e0r,
    S12e0w,
    S1e3r,
    S1e3w,
    Zva,
    Ivac,
    Isw,
    Cvac,
    Csw,
    Cvau,
    Civac,
    Cisw,
    Cvap,
    Cvadp,
    Ialluis,
    Iallu,
    Ivau,
    Vmalle1is,
    Vae1is,
    Aside1is,
    Vaae1is,
    Vale1is,
    Vaale1is,
    Vmalle1,
    Vae1,
    Aside1,
    Vaae1,
    Vale1,
    Vaale1,
    Vmalle1os,
    Vae1os,
    Aside1os,
    Vaae1os,
    Vale1os,
    Vaale1os,
    Rvae1is,
    Rvaae1is,
    Rvale1is,
    Rvaale1is,
    Rvae1os,
    Rvaae1os,
    Rvale1os,
    Rvaale1os,
    Rvae1,
    Rvaae1,
    Rvale1,
    Rvaale1,
    Ipas2e1is,
    Ripas2e1is,
    Ipas2le1is,
    Ripas2le1is,
    Alle2os,
    Vae2os,
    Alle1os,
    Vale2os,
    Vmalls12e1os,
    Rvae2is,
    Rvale2is,
    Alle2is,
    Vae2is,
    Alle1is,
    Vale2is,
    Vmalls12e1is,
    Ipas2e1os,
    Ipas2e1,
    Ripas2e1,
    Ripas2e1os,
    Ipas2le1os,
    Ipas2le1,
    Ripas2le1,
    Ripas2le1os,
    Rvae2os,
    Rvale2os,
    Rvae2,
    Rvale2,
    Alle2,
    Vae2,
    Alle1,
    Vale2,
    Vmalls12e1,
    Alle3os,
    Vae3os,
    Vale3os,
    Rvae3is,
    Rvale3is,
    Alle3is,
    Vae3is,
    Vale3is,
    Rvae3os,
    Rvale3os,
    Rvae3,
    Rvale3,
    Alle3,
    Vae3,
    Vale3,
    Oshld,
    Oshst,
    Osh,
    Nshld,
    Nshst,
    Nsh,
    Ishld,
    Ishst,
    Ish,
    Ld,
    St,
    Sy,
    Daifset,
    Daifclr,
    Csync,
    C,
    J,
    Jc,
}

/// Number of [`SystemReg`] symbols.
pub const SYSTEM_REG_COUNT: usize = 708;

static NAMES: [&str; SYSTEM_REG_COUNT] = [
    "midr_el1",
    "mpidr_el1",
    "revidr_el1",
    "id_pfr0_el1",
    "id_pfr1_el1",
    "id_dfr0_el1",
    "id_afr0_el1",
    "id_mmfr0_el1",
    "id_mmfr1_el1",
    "id_mmfr2_el1",
    "id_mmfr3_el1",
    "id_isar0_el1",
    "id_isar1_el1",
    "id_isar2_el1",
    "id_isar3_el1",
    "id_isar4_el1",
    "id_isar5_el1",
    "id_mmfr4_el1",
    "id_isar6_el1",
    "mvfr0_el1",
    "mvfr1_el1",
    "mvfr2_el1",
    "id_pfr2_el1",
    "id_dfr1_el1",
    "id_mmfr5_el1",
    "id_aa64pfr0_el1",
    "id_aa64pfr1_el1",
    "id_aa64zfr0_el1",
    "id_aa64smfr0_el1",
    "id_aa64dfr0_el1",
    "id_aa64dfr1_el1",
    "id_aa64afr0_el1",
    "id_aa64afr1_el1",
    "id_aa64isar0_el1",
    "id_aa64isar1_el1",
    "id_aa64isar2_el1",
    "id_aa64mmfr0_el1",
    "id_aa64mmfr1_el1",
    "id_aa64mmfr2_el1",
    "ccsidr_el1",
    "clidr_el1",
    "ccsidr2_el1",
    "gmid_el1",
    "aidr_el1",
    "csselr_el1",
    "ctr_el0",
    "dczid_el0",
    "vpidr_el2",
    "vmpidr_el2",
    "sctlr_el1",
    "actlr_el1",
    "cpacr_el1",
    "rgsr_el1",
    "gcr_el1",
    "zcr_el1",
    "trfcr_el1",
    "smpri_el1",
    "smcr_el1",
    "sctlr_el2",
    "actlr_el2",
    "hcr_el2",
    "mdcr_el2",
    "cptr_el2",
    "hstr_el2",
    "hfgrtr_el2",
    "hfgwtr_el2",
    "hfgitr_el2",
    "hacr_el2",
    "zcr_el2",
    "trfcr_el2",
    "sder32_el2",
    "sctlr_el12",
    "cpacr_el12",
    "zcr_el12",
    "trfcr_el12",
    "sctlr_el3",
    "actlr_el3",
    "scr_el3",
    "sder32_el3",
    "cptr_el3",
    "zcr_el3",
    "mdcr_el3",
    "ttbr0_el1",
    "ttbr1_el1",
    "tcr_el1",
    "apiakeylo_el1",
    "apiakeyhi_el1",
    "apibkeylo_el1",
    "apibkeyhi_el1",
    "apdakeylo_el1",
    "apdakeyhi_el1",
    "apdbkeylo_el1",
    "apdbkeyhi_el1",
    "apgakeylo_el1",
    "apgakeyhi_el1",
    "rndr",
    "rndrrs",
    "ttbr0_el2",
    "ttbr1_el2",
    "tcr_el2",
    "vttbr_el2",
    "vtcr_el2",
    "vncr_el2",
    "vsttbr_el2",
    "vstcr_el2",
    "ttbr0_el12",
    "ttbr1_el12",
    "tcr_el12",
    "ttbr0_el3",
    "tcr_el3",
    "dacr32_el2",
    "spsr_el1",
    "elr_el1",
    "sp_el0",
    "spsel",
    "currentel",
    "pan",
    "uao",
    "icc_pmr_el1",
    "svcr",
    "nzcv",
    "daif",
    "dit",
    "ssbs",
    "tco",
    "fpcr",
    "fpsr",
    "dspsr_el0",
    "dlr_el0",
    "spsr_el2",
    "elr_el2",
    "sp_el1",
    "spsr_irq",
    "spsr_abt",
    "spsr_und",
    "spsr_fiq",
    "spsr_el12",
    "elr_el12",
    "spsr_el3",
    "elr_el3",
    "sp_el2",
    "afsr0_el1",
    "afsr1_el1",
    "esr_el1",
    "erridr_el1",
    "errselr_el1",
    "erxfr_el1",
    "erxctlr_el1",
    "erxstatus_el1",
    "erxaddr_el1",
    "erxpfgf_el1",
    "erxpfgctl_el1",
    "erxpfgcdn_el1",
    "erxmisc0_el1",
    "erxmisc1_el1",
    "erxmisc2_el1",
    "erxmisc3_el1",
    "tfsr_el1",
    "tfsre0_el1",
    "ifsr32_el2",
    "afsr0_el2",
    "afsr1_el2",
    "esr_el2",
    "vsesr_el2",
    "fpexc32_el2",
    "tfsr_el2",
    "afsr0_el12",
    "afsr1_el12",
    "esr_el12",
    "tfsr_el12",
    "afsr0_el3",
    "afsr1_el3",
    "esr_el3",
    "tfsr_el3",
    "far_el1",
    "far_el2",
    "hpfar_el2",
    "far_el12",
    "far_el3",
    "par_el1",
    "pmscr_el1",
    "pmsnevfr_el1",
    "pmsicr_el1",
    "pmsirr_el1",
    "pmsfcr_el1",
    "pmsevfr_el1",
    "pmslatfr_el1",
    "pmsidr_el1",
    "pmblimitr_el1",
    "pmbptr_el1",
    "pmbsr_el1",
    "pmbidr_el1",
    "trblimitr_el1",
    "trbptr_el1",
    "trbbaser_el1",
    "trbsr_el1",
    "trbmar_el1",
    "trbtrg_el1",
    "trbidr_el1",
    "pmintenset_el1",
    "pmintenclr_el1",
    "pmmir_el1",
    "pmcr_el0",
    "pmcntenset_el0",
    "pmcntenclr_el0",
    "pmovsclr_el0",
    "pmswinc_el0",
    "pmselr_el0",
    "pmceid0_el0",
    "pmceid1_el0",
    "pmccntr_el0",
    "pmxevtyper_el0",
    "pmxevcntr_el0",
    "pmuserenr_el0",
    "pmovsset_el0",
    "pmscr_el2",
    "pmscr_el12",
    "mair_el1",
    "amair_el1",
    "lorsa_el1",
    "lorea_el1",
    "lorn_el1",
    "lorc_el1",
    "mpamidr_el1",
    "lorid_el1",
    "mpam1_el1",
    "mpam0_el1",
    "mair_el2",
    "amair_el2",
    "mpamhcr_el2",
    "mpamvpmv_el2",
    "mpam2_el2",
    "mair_el12",
    "amair_el12",
    "mpam1_el12",
    "mair_el3",
    "amair_el3",
    "mpam3_el3",
    "vbar_el1",
    "rvbar_el1",
    "rmr_el1",
    "isr_el1",
    "disr_el1",
    "icc_iar0_el1",
    "icc_eoir0_el1",
    "icc_hppir0_el1",
    "icc_bpr0_el1",
    "icc_ap0r0_el1",
    "icc_ap0r1_el1",
    "icc_ap0r2_el1",
    "icc_ap0r3_el1",
    "icc_ap1r0_el1",
    "icc_ap1r1_el1",
    "icc_ap1r2_el1",
    "icc_ap1r3_el1",
    "icc_nmiar1_el1",
    "icc_dir_el1",
    "icc_rpr_el1",
    "icc_sgi1r_el1",
    "icc_asgi1r_el1",
    "icc_sgi0r_el1",
    "icc_iar1_el1",
    "icc_eoir1_el1",
    "icc_hppir1_el1",
    "icc_bpr1_el1",
    "icc_ctlr_el1",
    "icc_sre_el1",
    "icc_igrpen0_el1",
    "icc_igrpen1_el1",
    "vbar_el2",
    "rvbar_el2",
    "rmr_el2",
    "vdisr_el2",
    "ich_ap0r0_el2",
    "ich_ap0r1_el2",
    "ich_ap0r2_el2",
    "ich_ap0r3_el2",
    "ich_ap1r0_el2",
    "ich_ap1r1_el2",
    "ich_ap1r2_el2",
    "ich_ap1r3_el2",
    "icc_sre_el2",
    "ich_hcr_el2",
    "ich_vtr_el2",
    "ich_misr_el2",
    "ich_eisr_el2",
    "ich_elrsr_el2",
    "ich_vmcr_el2",
    "vbar_el12",
    "vbar_el3",
    "rvbar_el3",
    "rmr_el3",
    "icc_ctlr_el3",
    "icc_sre_el3",
    "icc_igrpen1_el3",
    "contextidr_el1",
    "tpidr_el1",
    "accdata_el1",
    "scxtnum_el1",
    "tpidr_el0",
    "tpidrro_el0",
    "tpidr2_el0",
    "scxtnum_el0",
    "amcr_el0",
    "amcfgr_el0",
    "amcgcr_el0",
    "amuserenr_el0",
    "amcntenclr0_el0",
    "amcntenset0_el0",
    "amcg1idr_el0",
    "amcntenclr1_el0",
    "amcntenset1_el0",
    "contextidr_el2",
    "tpidr_el2",
    "scxtnum_el2",
    "contextidr_el12",
    "scxtnum_el12",
    "tpidr_el3",
    "scxtnum_el3",
    "cntkctl_el1",
    "cntfrq_el0",
    "cntpct_el0",
    "cntvct_el0",
    "cntpctss_el0",
    "cntvctss_el0",
    "cntp_tval_el0",
    "cntp_ctl_el0",
    "cntp_cval_el0",
    "cntv_tval_el0",
    "cntv_ctl_el0",
    "cntv_cval_el0",
    "pmccfiltr_el0",
    "cntvoff_el2",
    "cntpoff_el2",
    "cnthctl_el2",
    "cnthp_tval_el2",
    "cnthp_ctl_el2",
    "cnthp_cval_el2",
    "cnthv_tval_el2",
    "cnthv_ctl_el2",
    "cnthv_cval_el2",
    "cnthvs_tval_el2",
    "cnthvs_ctl_el2",
    "cnthvs_cval_el2",
    "cnthps_tval_el2",
    "cnthps_ctl_el2",
    "cnthps_cval_el2",
    "cntkctl_el12",
    "cntp_tval_el02",
    "cntp_ctl_el02",
    "cntp_cval_el02",
    "cntv_tval_el02",
    "cntv_ctl_el02",
    "cntv_cval_el02",
    "cntps_tval_el1",
    "cntps_ctl_el1",
    "cntps_cval_el1",
    "ich_lr0_el2",
    "amevcntr00_el0",
    "amevtyper00_el0",
    "amevcntr10_el0",
    "amevtyper10_el0",
    "ich_lr1_el2",
    "amevcntr01_el0",
    "amevtyper01_el0",
    "amevcntr11_el0",
    "amevtyper11_el0",
    "ich_lr2_el2",
    "amevcntr02_el0",
    "amevtyper02_el0",
    "amevcntr12_el0",
    "amevtyper12_el0",
    "ich_lr3_el2",
    "amevcntr03_el0",
    "amevtyper03_el0",
    "amevcntr13_el0",
    "amevtyper13_el0",
    "ich_lr4_el2",
    "amevcntr04_el0",
    "amevtyper04_el0",
    "amevcntr14_el0",
    "amevtyper14_el0",
    "ich_lr5_el2",
    "amevcntr05_el0",
    "amevtyper05_el0",
    "amevcntr15_el0",
    "amevtyper15_el0",
    "ich_lr6_el2",
    "amevcntr06_el0",
    "amevtyper06_el0",
    "amevcntr16_el0",
    "amevtyper16_el0",
    "ich_lr7_el2",
    "amevcntr07_el0",
    "amevtyper07_el0",
    "amevcntr17_el0",
    "amevtyper17_el0",
    "ich_lr8_el2",
    "amevcntr08_el0",
    "amevtyper08_el0",
    "amevcntr18_el0",
    "amevtyper18_el0",
    "ich_lr9_el2",
    "amevcntr09_el0",
    "amevtyper09_el0",
    "amevcntr19_el0",
    "amevtyper19_el0",
    "ich_lr10_el2",
    "amevcntr010_el0",
    "amevtyper010_el0",
    "amevcntr110_el0",
    "amevtyper110_el0",
    "ich_lr11_el2",
    "amevcntr011_el0",
    "amevtyper011_el0",
    "amevcntr111_el0",
    "amevtyper111_el0",
    "ich_lr12_el2",
    "amevcntr012_el0",
    "amevtyper012_el0",
    "amevcntr112_el0",
    "amevtyper112_el0",
    "ich_lr13_el2",
    "amevcntr013_el0",
    "amevtyper013_el0",
    "amevcntr113_el0",
    "amevtyper113_el0",
    "ich_lr14_el2",
    "amevcntr014_el0",
    "amevtyper014_el0",
    "amevcntr114_el0",
    "amevtyper114_el0",
    "ich_lr15_el2",
    "amevcntr015_el0",
    "amevtyper015_el0",
    "amevcntr115_el0",
    "amevtyper115_el0",
    "pmevcntr0_el0",
    "pmevtyper0_el0",
    "pmevcntr1_el0",
    "pmevtyper1_el0",
    "pmevcntr2_el0",
    "pmevtyper2_el0",
    "pmevcntr3_el0",
    "pmevtyper3_el0",
    "pmevcntr4_el0",
    "pmevtyper4_el0",
    "pmevcntr5_el0",
    "pmevtyper5_el0",
    "pmevcntr6_el0",
    "pmevtyper6_el0",
    "pmevcntr7_el0",
    "pmevtyper7_el0",
    "pmevcntr8_el0",
    "pmevtyper8_el0",
    "pmevcntr9_el0",
    "pmevtyper9_el0",
    "pmevcntr10_el0",
    "pmevtyper10_el0",
    "pmevcntr11_el0",
    "pmevtyper11_el0",
    "pmevcntr12_el0",
    "pmevtyper12_el0",
    "pmevcntr13_el0",
    "pmevtyper13_el0",
    "pmevcntr14_el0",
    "pmevtyper14_el0",
    "pmevcntr15_el0",
    "pmevtyper15_el0",
    "pmevcntr16_el0",
    "pmevtyper16_el0",
    "pmevcntr17_el0",
    "pmevtyper17_el0",
    "pmevcntr18_el0",
    "pmevtyper18_el0",
    "pmevcntr19_el0",
    "pmevtyper19_el0",
    "pmevcntr20_el0",
    "pmevtyper20_el0",
    "pmevcntr21_el0",
    "pmevtyper21_el0",
    "pmevcntr22_el0",
    "pmevtyper22_el0",
    "pmevcntr23_el0",
    "pmevtyper23_el0",
    "pmevcntr24_el0",
    "pmevtyper24_el0",
    "pmevcntr25_el0",
    "pmevtyper25_el0",
    "pmevcntr26_el0",
    "pmevtyper26_el0",
    "pmevcntr27_el0",
    "pmevtyper27_el0",
    "pmevcntr28_el0",
    "pmevtyper28_el0",
    "pmevcntr29_el0",
    "pmevtyper29_el0",
    "pmevcntr30_el0",
    "pmevtyper30_el0",
    "osdtrrx_el1",
    "mdccint_el1",
    "mdscr_el1",
    "osdtrtx_el1",
    "oseccr_el1",
    "mdrar_el1",
    "oslar_el1",
    "oslsr_el1",
    "osdlr_el1",
    "dbgprcr_el1",
    "dbgclaimset_el1",
    "dbgclaimclr_el1",
    "dbgauthstatus_el1",
    "mdccsr_el0",
    "dbgdtr_el0",
    "dbgdtrrx_el0",
    "dbgvcr32_el2",
    "trcprgctlr",
    "trcstatr",
    "trcconfigr",
    "trctraceidr",
    "dbgbvr0_el1",
    "dbgbcr0_el1",
    "dbgwvr0_el1",
    "dbgwcr0_el1",
    "dbgbvr1_el1",
    "dbgbcr1_el1",
    "dbgwvr1_el1",
    "dbgwcr1_el1",
    "dbgbvr2_el1",
    "dbgbcr2_el1",
    "dbgwvr2_el1",
    "dbgwcr2_el1",
    "dbgbvr3_el1",
    "dbgbcr3_el1",
    "dbgwvr3_el1",
    "dbgwcr3_el1",
    "dbgbvr4_el1",
    "dbgbcr4_el1",
    "dbgwvr4_el1",
    "dbgwcr4_el1",
    "dbgbvr5_el1",
    "dbgbcr5_el1",
    "dbgwvr5_el1",
    "dbgwcr5_el1",
    "dbgbvr6_el1",
    "dbgbcr6_el1",
    "dbgwvr6_el1",
    "dbgwcr6_el1",
    "dbgbvr7_el1",
    "dbgbcr7_el1",
    "dbgwvr7_el1",
    "dbgwcr7_el1",
    "dbgbvr8_el1",
    "dbgbcr8_el1",
    "dbgwvr8_el1",
    "dbgwcr8_el1",
    "dbgbvr9_el1",
    "dbgbcr9_el1",
    "dbgwvr9_el1",
    "dbgwcr9_el1",
    "dbgbvr10_el1",
    "dbgbcr10_el1",
    "dbgwvr10_el1",
    "dbgwcr10_el1",
    "dbgbvr11_el1",
    "dbgbcr11_el1",
    "dbgwvr11_el1",
    "dbgwcr11_el1",
    "dbgbvr12_el1",
    "dbgbcr12_el1",
    "dbgwvr12_el1",
    "dbgwcr12_el1",
    "dbgbvr13_el1",
    "dbgbcr13_el1",
    "dbgwvr13_el1",
    "dbgwcr13_el1",
    "dbgbvr14_el1",
    "dbgbcr14_el1",
    "dbgwvr14_el1",
    "dbgwcr14_el1",
    "dbgbvr15_el1",
    "dbgbcr15_el1",
    "dbgwvr15_el1",
    "dbgwcr15_el1",
    "dbgdtrtx_el0",
    "s1e1r",
    "s1e1w",
    "s1e0r",
    "s1e0w",
    "s1e1rp",
    "s1e1wp",
    "s1e2r",
    "s1e2w",
    "s12e1r",
    "s12e1w",
    "s12e0r",
    "s12e0w",
    "s1e3r",
    "s1e3w",
    "zva",
    "ivac",
    "isw",
    "cvac",
    "csw",
    "cvau",
    "civac",
    "cisw",
    "cvap",
    "cvadp",
    "ialluis",
    "iallu",
    "ivau",
    "vmalle1is",
    "vae1is",
    "aside1is",
    "vaae1is",
    "vale1is",
    "vaale1is",
    "vmalle1",
    "vae1",
    "aside1",
    "vaae1",
    "vale1",
    "vaale1",
    "vmalle1os",
    "vae1os",
    "aside1os",
    "vaae1os",
    "vale1os",
    "vaale1os",
    "rvae1is",
    "rvaae1is",
    "rvale1is",
    "rvaale1is",
    "rvae1os",
    "rvaae1os",
    "rvale1os",
    "rvaale1os",
    "rvae1",
    "rvaae1",
    "rvale1",
    "rvaale1",
    "ipas2e1is",
    "ripas2e1is",
    "ipas2le1is",
    "ripas2le1is",
    "alle2os",
    "vae2os",
    "alle1os",
    "vale2os",
    "vmalls12e1os",
    "rvae2is",
    "rvale2is",
    "alle2is",
    "vae2is",
    "alle1is",
    "vale2is",
    "vmalls12e1is",
    "ipas2e1os",
    "ipas2e1",
    "ripas2e1",
    "ripas2e1os",
    "ipas2le1os",
    "ipas2le1",
    "ripas2le1",
    "ripas2le1os",
    "rvae2os",
    "rvale2os",
    "rvae2",
    "rvale2",
    "alle2",
    "vae2",
    "alle1",
    "vale2",
    "vmalls12e1",
    "alle3os",
    "vae3os",
    "vale3os",
    "rvae3is",
    "rvale3is",
    "alle3is",
    "vae3is",
    "vale3is",
    "rvae3os",
    "rvale3os",
    "rvae3",
    "rvale3",
    "alle3",
    "vae3",
    "vale3",
    "oshld",
    "oshst",
    "osh",
    "nshld",
    "nshst",
    "nsh",
    "ishld",
    "ishst",
    "ish",
    "ld",
    "st",
    "sy",
    "daifset",
    "daifclr",
    "csync",
    "c",
    "j",
    "jc",
];

static ALL: [SystemReg; SYSTEM_REG_COUNT] = [
    SystemReg::MidrEl1,
    SystemReg::MpidrEl1,
    SystemReg::RevidrEl1,
    SystemReg::IdPfr0El1,
    SystemReg::IdPfr1El1,
    SystemReg::IdDfr0El1,
    SystemReg::IdAfr0El1,
    SystemReg::IdMmfr0El1,
    SystemReg::IdMmfr1El1,
    SystemReg::IdMmfr2El1,
    SystemReg::IdMmfr3El1,
    SystemReg::IdIsar0El1,
    SystemReg::IdIsar1El1,
    SystemReg::IdIsar2El1,
    SystemReg::IdIsar3El1,
    SystemReg::IdIsar4El1,
    SystemReg::IdIsar5El1,
    SystemReg::IdMmfr4El1,
    SystemReg::IdIsar6El1,
    SystemReg::Mvfr0El1,
    SystemReg::Mvfr1El1,
    SystemReg::Mvfr2El1,
    SystemReg::IdPfr2El1,
    SystemReg::IdDfr1El1,
    SystemReg::IdMmfr5El1,
    SystemReg::IdAa64pfr0El1,
    SystemReg::IdAa64pfr1El1,
    SystemReg::IdAa64zfr0El1,
    SystemReg::IdAa64smfr0El1,
    SystemReg::IdAa64dfr0El1,
    SystemReg::IdAa64dfr1El1,
    SystemReg::IdAa64afr0El1,
    SystemReg::IdAa64afr1El1,
    SystemReg::IdAa64isar0El1,
    SystemReg::IdAa64isar1El1,
    SystemReg::IdAa64isar2El1,
    SystemReg::IdAa64mmfr0El1,
    SystemReg::IdAa64mmfr1El1,
    SystemReg::IdAa64mmfr2El1,
    SystemReg::CcsidrEl1,
    SystemReg::ClidrEl1,
    SystemReg::Ccsidr2El1,
    SystemReg::GmidEl1,
    SystemReg::AidrEl1,
    SystemReg::CsselrEl1,
    SystemReg::CtrEl0,
    SystemReg::DczidEl0,
    SystemReg::VpidrEl2,
    SystemReg::VmpidrEl2,
    SystemReg::SctlrEl1,
    SystemReg::ActlrEl1,
    SystemReg::CpacrEl1,
    SystemReg::RgsrEl1,
    SystemReg::GcrEl1,
    SystemReg::ZcrEl1,
    SystemReg::TrfcrEl1,
    SystemReg::SmpriEl1,
    SystemReg::SmcrEl1,
    SystemReg::SctlrEl2,
    SystemReg::ActlrEl2,
    SystemReg::HcrEl2,
    SystemReg::MdcrEl2,
    SystemReg::CptrEl2,
    SystemReg::HstrEl2,
    SystemReg::HfgrtrEl2,
    SystemReg::HfgwtrEl2,
    SystemReg::HfgitrEl2,
    SystemReg::HacrEl2,
    SystemReg::ZcrEl2,
    SystemReg::TrfcrEl2,
    SystemReg::Sder32El2,
    SystemReg::SctlrEl12,
    SystemReg::CpacrEl12,
    SystemReg::ZcrEl12,
    SystemReg::TrfcrEl12,
    SystemReg::SctlrEl3,
    SystemReg::ActlrEl3,
    SystemReg::ScrEl3,
    SystemReg::Sder32El3,
    SystemReg::CptrEl3,
    SystemReg::ZcrEl3,
    SystemReg::MdcrEl3,
    SystemReg::Ttbr0El1,
    SystemReg::Ttbr1El1,
    SystemReg::TcrEl1,
    SystemReg::ApiakeyloEl1,
    SystemReg::ApiakeyhiEl1,
    SystemReg::ApibkeyloEl1,
    SystemReg::ApibkeyhiEl1,
    SystemReg::ApdakeyloEl1,
    SystemReg::ApdakeyhiEl1,
    SystemReg::ApdbkeyloEl1,
    SystemReg::ApdbkeyhiEl1,
    SystemReg::ApgakeyloEl1,
    SystemReg::ApgakeyhiEl1,
    SystemReg::Rndr,
    SystemReg::Rndrrs,
    SystemReg::Ttbr0El2,
    SystemReg::Ttbr1El2,
    SystemReg::TcrEl2,
    SystemReg::VttbrEl2,
    SystemReg::VtcrEl2,
    SystemReg::VncrEl2,
    SystemReg::VsttbrEl2,
    SystemReg::VstcrEl2,
    SystemReg::Ttbr0El12,
    SystemReg::Ttbr1El12,
    SystemReg::TcrEl12,
    SystemReg::Ttbr0El3,
    SystemReg::TcrEl3,
    SystemReg::Dacr32El2,
    SystemReg::SpsrEl1,
    SystemReg::ElrEl1,
    SystemReg::SpEl0,
    SystemReg::Spsel,
    SystemReg::Currentel,
    SystemReg::Pan,
    SystemReg::Uao,
    SystemReg::IccPmrEl1,
    SystemReg::Svcr,
    SystemReg::Nzcv,
    SystemReg::Daif,
    SystemReg::Dit,
    SystemReg::Ssbs,
    SystemReg::Tco,
    SystemReg::Fpcr,
    SystemReg::Fpsr,
    SystemReg::DspsrEl0,
    SystemReg::DlrEl0,
    SystemReg::SpsrEl2,
    SystemReg::ElrEl2,
    SystemReg::SpEl1,
    SystemReg::SpsrIrq,
    SystemReg::SpsrAbt,
    SystemReg::SpsrUnd,
    SystemReg::SpsrFiq,
    SystemReg::SpsrEl12,
    SystemReg::ElrEl12,
    SystemReg::SpsrEl3,
    SystemReg::ElrEl3,
    SystemReg::SpEl2,
    SystemReg::Afsr0El1,
    SystemReg::Afsr1El1,
    SystemReg::EsrEl1,
    SystemReg::ErridrEl1,
    SystemReg::ErrselrEl1,
    SystemReg::ErxfrEl1,
    SystemReg::ErxctlrEl1,
    SystemReg::ErxstatusEl1,
    SystemReg::ErxaddrEl1,
    SystemReg::ErxpfgfEl1,
    SystemReg::ErxpfgctlEl1,
    SystemReg::ErxpfgcdnEl1,
    SystemReg::Erxmisc0El1,
    SystemReg::Erxmisc1El1,
    SystemReg::Erxmisc2El1,
    SystemReg::Erxmisc3El1,
    SystemReg::TfsrEl1,
    SystemReg::Tfsre0El1,
    SystemReg::Ifsr32El2,
    SystemReg::Afsr0El2,
    SystemReg::Afsr1El2,
    SystemReg::EsrEl2,
    SystemReg::VsesrEl2,
    SystemReg::Fpexc32El2,
    SystemReg::TfsrEl2,
    SystemReg::Afsr0El12,
    SystemReg::Afsr1El12,
    SystemReg::EsrEl12,
    SystemReg::TfsrEl12,
    SystemReg::Afsr0El3,
    SystemReg::Afsr1El3,
    SystemReg::EsrEl3,
    SystemReg::TfsrEl3,
    SystemReg::FarEl1,
    SystemReg::FarEl2,
    SystemReg::HpfarEl2,
    SystemReg::FarEl12,
    SystemReg::FarEl3,
    SystemReg::ParEl1,
    SystemReg::PmscrEl1,
    SystemReg::PmsnevfrEl1,
    SystemReg::PmsicrEl1,
    SystemReg::PmsirrEl1,
    SystemReg::PmsfcrEl1,
    SystemReg::PmsevfrEl1,
    SystemReg::PmslatfrEl1,
    SystemReg::PmsidrEl1,
    SystemReg::PmblimitrEl1,
    SystemReg::PmbptrEl1,
    SystemReg::PmbsrEl1,
    SystemReg::PmbidrEl1,
    SystemReg::TrblimitrEl1,
    SystemReg::TrbptrEl1,
    SystemReg::TrbbaserEl1,
    SystemReg::TrbsrEl1,
    SystemReg::TrbmarEl1,
    SystemReg::TrbtrgEl1,
    SystemReg::TrbidrEl1,
    SystemReg::PmintensetEl1,
    SystemReg::PmintenclrEl1,
    SystemReg::PmmirEl1,
    SystemReg::PmcrEl0,
    SystemReg::PmcntensetEl0,
    SystemReg::PmcntenclrEl0,
    SystemReg::PmovsclrEl0,
    SystemReg::PmswincEl0,
    SystemReg::PmselrEl0,
    SystemReg::Pmceid0El0,
    SystemReg::Pmceid1El0,
    SystemReg::PmccntrEl0,
    SystemReg::PmxevtyperEl0,
    SystemReg::PmxevcntrEl0,
    SystemReg::PmuserenrEl0,
    SystemReg::PmovssetEl0,
    SystemReg::PmscrEl2,
    SystemReg::PmscrEl12,
    SystemReg::MairEl1,
    SystemReg::AmairEl1,
    SystemReg::LorsaEl1,
    SystemReg::LoreaEl1,
    SystemReg::LornEl1,
    SystemReg::LorcEl1,
    SystemReg::MpamidrEl1,
    SystemReg::LoridEl1,
    SystemReg::Mpam1El1,
    SystemReg::Mpam0El1,
    SystemReg::MairEl2,
    SystemReg::AmairEl2,
    SystemReg::MpamhcrEl2,
    SystemReg::MpamvpmvEl2,
    SystemReg::Mpam2El2,
    SystemReg::MairEl12,
    SystemReg::AmairEl12,
    SystemReg::Mpam1El12,
    SystemReg::MairEl3,
    SystemReg::AmairEl3,
    SystemReg::Mpam3El3,
    SystemReg::VbarEl1,
    SystemReg::RvbarEl1,
    SystemReg::RmrEl1,
    SystemReg::IsrEl1,
    SystemReg::DisrEl1,
    SystemReg::IccIar0El1,
    SystemReg::IccEoir0El1,
    SystemReg::IccHppir0El1,
    SystemReg::IccBpr0El1,
    SystemReg::IccAp0r0El1,
    SystemReg::IccAp0r1El1,
    SystemReg::IccAp0r2El1,
    SystemReg::IccAp0r3El1,
    SystemReg::IccAp1r0El1,
    SystemReg::IccAp1r1El1,
    SystemReg::IccAp1r2El1,
    SystemReg::IccAp1r3El1,
    SystemReg::IccNmiar1El1,
    SystemReg::IccDirEl1,
    SystemReg::IccRprEl1,
    SystemReg::IccSgi1rEl1,
    SystemReg::IccAsgi1rEl1,
    SystemReg::IccSgi0rEl1,
    SystemReg::IccIar1El1,
    SystemReg::IccEoir1El1,
    SystemReg::IccHppir1El1,
    SystemReg::IccBpr1El1,
    SystemReg::IccCtlrEl1,
    SystemReg::IccSreEl1,
    SystemReg::IccIgrpen0El1,
    SystemReg::IccIgrpen1El1,
    SystemReg::VbarEl2,
    SystemReg::RvbarEl2,
    SystemReg::RmrEl2,
    SystemReg::VdisrEl2,
    SystemReg::IchAp0r0El2,
    SystemReg::IchAp0r1El2,
    SystemReg::IchAp0r2El2,
    SystemReg::IchAp0r3El2,
    SystemReg::IchAp1r0El2,
    SystemReg::IchAp1r1El2,
    SystemReg::IchAp1r2El2,
    SystemReg::IchAp1r3El2,
    SystemReg::IccSreEl2,
    SystemReg::IchHcrEl2,
    SystemReg::IchVtrEl2,
    SystemReg::IchMisrEl2,
    SystemReg::IchEisrEl2,
    SystemReg::IchElrsrEl2,
    SystemReg::IchVmcrEl2,
    SystemReg::VbarEl12,
    SystemReg::VbarEl3,
    SystemReg::RvbarEl3,
    SystemReg::RmrEl3,
    SystemReg::IccCtlrEl3,
    SystemReg::IccSreEl3,
    SystemReg::IccIgrpen1El3,
    SystemReg::ContextidrEl1,
    SystemReg::TpidrEl1,
    SystemReg::AccdataEl1,
    SystemReg::ScxtnumEl1,
    SystemReg::TpidrEl0,
    SystemReg::TpidrroEl0,
    SystemReg::Tpidr2El0,
    SystemReg::ScxtnumEl0,
    SystemReg::AmcrEl0,
    SystemReg::AmcfgrEl0,
    SystemReg::AmcgcrEl0,
    SystemReg::AmuserenrEl0,
    SystemReg::Amcntenclr0El0,
    SystemReg::Amcntenset0El0,
    SystemReg::Amcg1idrEl0,
    SystemReg::Amcntenclr1El0,
    SystemReg::Amcntenset1El0,
    SystemReg::ContextidrEl2,
    SystemReg::TpidrEl2,
    SystemReg::ScxtnumEl2,
    SystemReg::ContextidrEl12,
    SystemReg::ScxtnumEl12,
    SystemReg::TpidrEl3,
    SystemReg::ScxtnumEl3,
    SystemReg::CntkctlEl1,
    SystemReg::CntfrqEl0,
    SystemReg::CntpctEl0,
    SystemReg::CntvctEl0,
    SystemReg::CntpctssEl0,
    SystemReg::CntvctssEl0,
    SystemReg::CntpTvalEl0,
    SystemReg::CntpCtlEl0,
    SystemReg::CntpCvalEl0,
    SystemReg::CntvTvalEl0,
    SystemReg::CntvCtlEl0,
    SystemReg::CntvCvalEl0,
    SystemReg::PmccfiltrEl0,
    SystemReg::CntvoffEl2,
    SystemReg::CntpoffEl2,
    SystemReg::CnthctlEl2,
    SystemReg::CnthpTvalEl2,
    SystemReg::CnthpCtlEl2,
    SystemReg::CnthpCvalEl2,
    SystemReg::CnthvTvalEl2,
    SystemReg::CnthvCtlEl2,
    SystemReg::CnthvCvalEl2,
    SystemReg::CnthvsTvalEl2,
    SystemReg::CnthvsCtlEl2,
    SystemReg::CnthvsCvalEl2,
    SystemReg::CnthpsTvalEl2,
    SystemReg::CnthpsCtlEl2,
    SystemReg::CnthpsCvalEl2,
    SystemReg::CntkctlEl12,
    SystemReg::CntpTvalEl02,
    SystemReg::CntpCtlEl02,
    SystemReg::CntpCvalEl02,
    SystemReg::CntvTvalEl02,
    SystemReg::CntvCtlEl02,
    SystemReg::CntvCvalEl02,
    SystemReg::CntpsTvalEl1,
    SystemReg::CntpsCtlEl1,
    SystemReg::CntpsCvalEl1,
    SystemReg::IchLr0El2,
    SystemReg::Amevcntr00El0,
    SystemReg::Amevtyper00El0,
    SystemReg::Amevcntr10El0,
    SystemReg::Amevtyper10El0,
    SystemReg::IchLr1El2,
    SystemReg::Amevcntr01El0,
    SystemReg::Amevtyper01El0,
    SystemReg::Amevcntr11El0,
    SystemReg::Amevtyper11El0,
    SystemReg::IchLr2El2,
    SystemReg::Amevcntr02El0,
    SystemReg::Amevtyper02El0,
    SystemReg::Amevcntr12El0,
    SystemReg::Amevtyper12El0,
    SystemReg::IchLr3El2,
    SystemReg::Amevcntr03El0,
    SystemReg::Amevtyper03El0,
    SystemReg::Amevcntr13El0,
    SystemReg::Amevtyper13El0,
    SystemReg::IchLr4El2,
    SystemReg::Amevcntr04El0,
    SystemReg::Amevtyper04El0,
    SystemReg::Amevcntr14El0,
    SystemReg::Amevtyper14El0,
    SystemReg::IchLr5El2,
    SystemReg::Amevcntr05El0,
    SystemReg::Amevtyper05El0,
    SystemReg::Amevcntr15El0,
    SystemReg::Amevtyper15El0,
    SystemReg::IchLr6El2,
    SystemReg::Amevcntr06El0,
    SystemReg::Amevtyper06El0,
    SystemReg::Amevcntr16El0,
    SystemReg::Amevtyper16El0,
    SystemReg::IchLr7El2,
    SystemReg::Amevcntr07El0,
    SystemReg::Amevtyper07El0,
    SystemReg::Amevcntr17El0,
    SystemReg::Amevtyper17El0,
    SystemReg::IchLr8El2,
    SystemReg::Amevcntr08El0,
    SystemReg::Amevtyper08El0,
    SystemReg::Amevcntr18El0,
    SystemReg::Amevtyper18El0,
    SystemReg::IchLr9El2,
    SystemReg::Amevcntr09El0,
    SystemReg::Amevtyper09El0,
    SystemReg::Amevcntr19El0,
    SystemReg::Amevtyper19El0,
    SystemReg::IchLr10El2,
    SystemReg::Amevcntr010El0,
    SystemReg::Amevtyper010El0,
    SystemReg::Amevcntr110El0,
    SystemReg::Amevtyper110El0,
    SystemReg::IchLr11El2,
    SystemReg::Amevcntr011El0,
    SystemReg::Amevtyper011El0,
    SystemReg::Amevcntr111El0,
    SystemReg::Amevtyper111El0,
    SystemReg::IchLr12El2,
    SystemReg::Amevcntr012El0,
    SystemReg::Amevtyper012El0,
    SystemReg::Amevcntr112El0,
    SystemReg::Amevtyper112El0,
    SystemReg::IchLr13El2,
    SystemReg::Amevcntr013El0,
    SystemReg::Amevtyper013El0,
    SystemReg::Amevcntr113El0,
    SystemReg::Amevtyper113El0,
    SystemReg::IchLr14El2,
    SystemReg::Amevcntr014El0,
    SystemReg::Amevtyper014El0,
    SystemReg::Amevcntr114El0,
    SystemReg::Amevtyper114El0,
    SystemReg::IchLr15El2,
    SystemReg::Amevcntr015El0,
    SystemReg::Amevtyper015El0,
    SystemReg::Amevcntr115El0,
    SystemReg::Amevtyper115El0,
    SystemReg::Pmevcntr0El0,
    SystemReg::Pmevtyper0El0,
    SystemReg::Pmevcntr1El0,
    SystemReg::Pmevtyper1El0,
    SystemReg::Pmevcntr2El0,
    SystemReg::Pmevtyper2El0,
    SystemReg::Pmevcntr3El0,
    SystemReg::Pmevtyper3El0,
    SystemReg::Pmevcntr4El0,
    SystemReg::Pmevtyper4El0,
    SystemReg::Pmevcntr5El0,
    SystemReg::Pmevtyper5El0,
    SystemReg::Pmevcntr6El0,
    SystemReg::Pmevtyper6El0,
    SystemReg::Pmevcntr7El0,
    SystemReg::Pmevtyper7El0,
    SystemReg::Pmevcntr8El0,
    SystemReg::Pmevtyper8El0,
    SystemReg::Pmevcntr9El0,
    SystemReg::Pmevtyper9El0,
    SystemReg::Pmevcntr10El0,
    SystemReg::Pmevtyper10El0,
    SystemReg::Pmevcntr11El0,
    SystemReg::Pmevtyper11El0,
    SystemReg::Pmevcntr12El0,
    SystemReg::Pmevtyper12El0,
    SystemReg::Pmevcntr13El0,
    SystemReg::Pmevtyper13El0,
    SystemReg::Pmevcntr14El0,
    SystemReg::Pmevtyper14El0,
    SystemReg::Pmevcntr15El0,
    SystemReg::Pmevtyper15El0,
    SystemReg::Pmevcntr16El0,
    SystemReg::Pmevtyper16El0,
    SystemReg::Pmevcntr17El0,
    SystemReg::Pmevtyper17El0,
    SystemReg::Pmevcntr18El0,
    SystemReg::Pmevtyper18El0,
    SystemReg::Pmevcntr19El0,
    SystemReg::Pmevtyper19El0,
    SystemReg::Pmevcntr20El0,
    SystemReg::Pmevtyper20El0,
    SystemReg::Pmevcntr21El0,
    SystemReg::Pmevtyper21El0,
    SystemReg::Pmevcntr22El0,
    SystemReg::Pmevtyper22El0,
    SystemReg::Pmevcntr23El0,
    SystemReg::Pmevtyper23El0,
    SystemReg::Pmevcntr24El0,
    SystemReg::Pmevtyper24El0,
    SystemReg::Pmevcntr25El0,
    SystemReg::Pmevtyper25El0,
    SystemReg::Pmevcntr26El0,
    SystemReg::Pmevtyper26El0,
    SystemReg::Pmevcntr27El0,
    SystemReg::Pmevtyper27El0,
    SystemReg::Pmevcntr28El0,
    SystemReg::Pmevtyper28El0,
    SystemReg::Pmevcntr29El0,
    SystemReg::Pmevtyper29El0,
    SystemReg::Pmevcntr30El0,
    SystemReg::Pmevtyper30El0,
    SystemReg::OsdtrrxEl1,
    SystemReg::MdccintEl1,
    SystemReg::MdscrEl1,
    SystemReg::OsdtrtxEl1,
    SystemReg::OseccrEl1,
    SystemReg::MdrarEl1,
    SystemReg::OslarEl1,
    SystemReg::OslsrEl1,
    SystemReg::OsdlrEl1,
    SystemReg::DbgprcrEl1,
    SystemReg::DbgclaimsetEl1,
    SystemReg::DbgclaimclrEl1,
    SystemReg::DbgauthstatusEl1,
    SystemReg::MdccsrEl0,
    SystemReg::DbgdtrEl0,
    SystemReg::DbgdtrrxEl0,
    SystemReg::Dbgvcr32El2,
    SystemReg::Trcprgctlr,
    SystemReg::Trcstatr,
    SystemReg::Trcconfigr,
    SystemReg::Trctraceidr,
    SystemReg::Dbgbvr0El1,
    SystemReg::Dbgbcr0El1,
    SystemReg::Dbgwvr0El1,
    SystemReg::Dbgwcr0El1,
    SystemReg::Dbgbvr1El1,
    SystemReg::Dbgbcr1El1,
    SystemReg::Dbgwvr1El1,
    SystemReg::Dbgwcr1El1,
    SystemReg::Dbgbvr2El1,
    SystemReg::Dbgbcr2El1,
    SystemReg::Dbgwvr2El1,
    SystemReg::Dbgwcr2El1,
    SystemReg::Dbgbvr3El1,
    SystemReg::Dbgbcr3El1,
    SystemReg::Dbgwvr3El1,
    SystemReg::Dbgwcr3El1,
    SystemReg::Dbgbvr4El1,
    SystemReg::Dbgbcr4El1,
    SystemReg::Dbgwvr4El1,
    SystemReg::Dbgwcr4El1,
    SystemReg::Dbgbvr5El1,
    SystemReg::Dbgbcr5El1,
    SystemReg::Dbgwvr5El1,
    SystemReg::Dbgwcr5El1,
    SystemReg::Dbgbvr6El1,
    SystemReg::Dbgbcr6El1,
    SystemReg::Dbgwvr6El1,
    SystemReg::Dbgwcr6El1,
    SystemReg::Dbgbvr7El1,
    SystemReg::Dbgbcr7El1,
    SystemReg::Dbgwvr7El1,
    SystemReg::Dbgwcr7El1,
    SystemReg::Dbgbvr8El1,
    SystemReg::Dbgbcr8El1,
    SystemReg::Dbgwvr8El1,
    SystemReg::Dbgwcr8El1,
    SystemReg::Dbgbvr9El1,
    SystemReg::Dbgbcr9El1,
    SystemReg::Dbgwvr9El1,
    SystemReg::Dbgwcr9El1,
    SystemReg::Dbgbvr10El1,
    SystemReg::Dbgbcr10El1,
    SystemReg::Dbgwvr10El1,
    SystemReg::Dbgwcr10El1,
    SystemReg::Dbgbvr11El1,
    SystemReg::Dbgbcr11El1,
    SystemReg::Dbgwvr11El1,
    SystemReg::Dbgwcr11El1,
    SystemReg::Dbgbvr12El1,
    SystemReg::Dbgbcr12El1,
    SystemReg::Dbgwvr12El1,
    SystemReg::Dbgwcr12El1,
    SystemReg::Dbgbvr13El1,
    SystemReg::Dbgbcr13El1,
    SystemReg::Dbgwvr13El1,
    SystemReg::Dbgwcr13El1,
    SystemReg::Dbgbvr14El1,
    SystemReg::Dbgbcr14El1,
    SystemReg::Dbgwvr14El1,
    SystemReg::Dbgwcr14El1,
    SystemReg::Dbgbvr15El1,
    SystemReg::Dbgbcr15El1,
    SystemReg::Dbgwvr15El1,
    SystemReg::Dbgwcr15El1,
    SystemReg::DbgdtrtxEl0,
    SystemReg::S1e1r,
    SystemReg::S1e1w,
    SystemReg::S1e0r,
    SystemReg::S1e0w,
    SystemReg::S1e1rp,
    SystemReg::S1e1wp,
    SystemReg::S1e2r,
    SystemReg::S1e2w,
    SystemReg::S12e1r,
    SystemReg::S12e1w,
    SystemReg::S12e0r,
    SystemReg::S12e0w,
    SystemReg::S1e3r,
    SystemReg::S1e3w,
    SystemReg::Zva,
    SystemReg::Ivac,
    SystemReg::Isw,
    SystemReg::Cvac,
    SystemReg::Csw,
    SystemReg::Cvau,
    SystemReg::Civac,
    SystemReg::Cisw,
    SystemReg::Cvap,
    SystemReg::Cvadp,
    SystemReg::Ialluis,
    SystemReg::Iallu,
    SystemReg::Ivau,
    SystemReg::Vmalle1is,
    SystemReg::Vae1is,
    SystemReg::Aside1is,
    SystemReg::Vaae1is,
    SystemReg::Vale1is,
    SystemReg::Vaale1is,
    SystemReg::Vmalle1,
    SystemReg::Vae1,
    SystemReg::Aside1,
    SystemReg::Vaae1,
    SystemReg::Vale1,
    SystemReg::Vaale1,
    SystemReg::Vmalle1os,
    SystemReg::Vae1os,
    SystemReg::Aside1os,
    SystemReg::Vaae1os,
    SystemReg::Vale1os,
    SystemReg::Vaale1os,
    SystemReg::Rvae1is,
    SystemReg::Rvaae1is,
    SystemReg::Rvale1is,
    SystemReg::Rvaale1is,
    SystemReg::Rvae1os,
    SystemReg::Rvaae1os,
    SystemReg::Rvale1os,
    SystemReg::Rvaale1os,
    SystemReg::Rvae1,
    SystemReg::Rvaae1,
    SystemReg::Rvale1,
    SystemReg::Rvaale1,
    SystemReg::Ipas2e1is,
    SystemReg::Ripas2e1is,
    SystemReg::Ipas2le1is,
    SystemReg::Ripas2le1is,
    SystemReg::Alle2os,
    SystemReg::Vae2os,
    SystemReg::Alle1os,
    SystemReg::Vale2os,
    SystemReg::Vmalls12e1os,
    SystemReg::Rvae2is,
    SystemReg::Rvale2is,
    SystemReg::Alle2is,
    SystemReg::Vae2is,
    SystemReg::Alle1is,
    SystemReg::Vale2is,
    SystemReg::Vmalls12e1is,
    SystemReg::Ipas2e1os,
    SystemReg::Ipas2e1,
    SystemReg::Ripas2e1,
    SystemReg::Ripas2e1os,
    SystemReg::Ipas2le1os,
    SystemReg::Ipas2le1,
    SystemReg::Ripas2le1,
    SystemReg::Ripas2le1os,
    SystemReg::Rvae2os,
    SystemReg::Rvale2os,
    SystemReg::Rvae2,
    SystemReg::Rvale2,
    SystemReg::Alle2,
    SystemReg::Vae2,
    SystemReg::Alle1,
    SystemReg::Vale2,
    SystemReg::Vmalls12e1,
    SystemReg::Alle3os,
    SystemReg::Vae3os,
    SystemReg::Vale3os,
    SystemReg::Rvae3is,
    SystemReg::Rvale3is,
    SystemReg::Alle3is,
    SystemReg::Vae3is,
    SystemReg::Vale3is,
    SystemReg::Rvae3os,
    SystemReg::Rvale3os,
    SystemReg::Rvae3,
    SystemReg::Rvale3,
    SystemReg::Alle3,
    SystemReg::Vae3,
    SystemReg::Vale3,
    SystemReg::Oshld,
    SystemReg::Oshst,
    SystemReg::Osh,
    SystemReg::Nshld,
    SystemReg::Nshst,
    SystemReg::Nsh,
    SystemReg::Ishld,
    SystemReg::Ishst,
    SystemReg::Ish,
    SystemReg::Ld,
    SystemReg::St,
    SystemReg::Sy,
    SystemReg::Daifset,
    SystemReg::Daifclr,
    SystemReg::Csync,
    SystemReg::C,
    SystemReg::J,
    SystemReg::Jc,
];

impl SystemReg {
    /// Resolves an `MRS`/`MSR` register encoding.
    pub fn from_encoding(op0: u32, op1: u32, crn: u32, crm: u32, op2: u32) -> Option<Self> {
        Some(match (op0, op1, crn, crm, op2) {
            (2, 0, 0, 0, 2) => Self::OsdtrrxEl1,
            (2, 0, 0, 0, 4) => Self::Dbgbvr0El1,
            (2, 0, 0, 0, 5) => Self::Dbgbcr0El1,
            (2, 0, 0, 0, 6) => Self::Dbgwvr0El1,
            (2, 0, 0, 0, 7) => Self::Dbgwcr0El1,
            (2, 0, 0, 1, 4) => Self::Dbgbvr1El1,
            (2, 0, 0, 1, 5) => Self::Dbgbcr1El1,
            (2, 0, 0, 1, 6) => Self::Dbgwvr1El1,
            (2, 0, 0, 1, 7) => Self::Dbgwcr1El1,
            (2, 0, 0, 2, 0) => Self::MdccintEl1,
            (2, 0, 0, 2, 2) => Self::MdscrEl1,
            (2, 0, 0, 2, 4) => Self::Dbgbvr2El1,
            (2, 0, 0, 2, 5) => Self::Dbgbcr2El1,
            (2, 0, 0, 2, 6) => Self::Dbgwvr2El1,
            (2, 0, 0, 2, 7) => Self::Dbgwcr2El1,
            (2, 0, 0, 3, 2) => Self::OsdtrtxEl1,
            (2, 0, 0, 3, 4) => Self::Dbgbvr3El1,
            (2, 0, 0, 3, 5) => Self::Dbgbcr3El1,
            (2, 0, 0, 3, 6) => Self::Dbgwvr3El1,
            (2, 0, 0, 3, 7) => Self::Dbgwcr3El1,
            (2, 0, 0, 4, 4) => Self::Dbgbvr4El1,
            (2, 0, 0, 4, 5) => Self::Dbgbcr4El1,
            (2, 0, 0, 4, 6) => Self::Dbgwvr4El1,
            (2, 0, 0, 4, 7) => Self::Dbgwcr4El1,
            (2, 0, 0, 5, 4) => Self::Dbgbvr5El1,
            (2, 0, 0, 5, 5) => Self::Dbgbcr5El1,
            (2, 0, 0, 5, 6) => Self::Dbgwvr5El1,
            (2, 0, 0, 5, 7) => Self::Dbgwcr5El1,
            (2, 0, 0, 6, 2) => Self::OseccrEl1,
            (2, 0, 0, 6, 4) => Self::Dbgbvr6El1,
            (2, 0, 0, 6, 5) => Self::Dbgbcr6El1,
            (2, 0, 0, 6, 6) => Self::Dbgwvr6El1,
            (2, 0, 0, 6, 7) => Self::Dbgwcr6El1,
            (2, 0, 0, 7, 4) => Self::Dbgbvr7El1,
            (2, 0, 0, 7, 5) => Self::Dbgbcr7El1,
            (2, 0, 0, 7, 6) => Self::Dbgwvr7El1,
            (2, 0, 0, 7, 7) => Self::Dbgwcr7El1,
            (2, 0, 0, 8, 4) => Self::Dbgbvr8El1,
            (2, 0, 0, 8, 5) => Self::Dbgbcr8El1,
            (2, 0, 0, 8, 6) => Self::Dbgwvr8El1,
            (2, 0, 0, 8, 7) => Self::Dbgwcr8El1,
            (2, 0, 0, 9, 4) => Self::Dbgbvr9El1,
            (2, 0, 0, 9, 5) => Self::Dbgbcr9El1,
            (2, 0, 0, 9, 6) => Self::Dbgwvr9El1,
            (2, 0, 0, 9, 7) => Self::Dbgwcr9El1,
            (2, 0, 0, 10, 4) => Self::Dbgbvr10El1,
            (2, 0, 0, 10, 5) => Self::Dbgbcr10El1,
            (2, 0, 0, 10, 6) => Self::Dbgwvr10El1,
            (2, 0, 0, 10, 7) => Self::Dbgwcr10El1,
            (2, 0, 0, 11, 4) => Self::Dbgbvr11El1,
            (2, 0, 0, 11, 5) => Self::Dbgbcr11El1,
            (2, 0, 0, 11, 6) => Self::Dbgwvr11El1,
            (2, 0, 0, 11, 7) => Self::Dbgwcr11El1,
            (2, 0, 0, 12, 4) => Self::Dbgbvr12El1,
            (2, 0, 0, 12, 5) => Self::Dbgbcr12El1,
            (2, 0, 0, 12, 6) => Self::Dbgwvr12El1,
            (2, 0, 0, 12, 7) => Self::Dbgwcr12El1,
            (2, 0, 0, 13, 4) => Self::Dbgbvr13El1,
            (2, 0, 0, 13, 5) => Self::Dbgbcr13El1,
            (2, 0, 0, 13, 6) => Self::Dbgwvr13El1,
            (2, 0, 0, 13, 7) => Self::Dbgwcr13El1,
            (2, 0, 0, 14, 4) => Self::Dbgbvr14El1,
            (2, 0, 0, 14, 5) => Self::Dbgbcr14El1,
            (2, 0, 0, 14, 6) => Self::Dbgwvr14El1,
            (2, 0, 0, 14, 7) => Self::Dbgwcr14El1,
            (2, 0, 0, 15, 4) => Self::Dbgbvr15El1,
            (2, 0, 0, 15, 5) => Self::Dbgbcr15El1,
            (2, 0, 0, 15, 6) => Self::Dbgwvr15El1,
            (2, 0, 0, 15, 7) => Self::Dbgwcr15El1,
            (2, 0, 1, 0, 0) => Self::MdrarEl1,
            (2, 0, 1, 0, 4) => Self::OslarEl1,
            (2, 0, 1, 1, 4) => Self::OslsrEl1,
            (2, 0, 1, 3, 4) => Self::OsdlrEl1,
            (2, 0, 1, 4, 4) => Self::DbgprcrEl1,
            (2, 0, 7, 8, 6) => Self::DbgclaimsetEl1,
            (2, 0, 7, 9, 6) => Self::DbgclaimclrEl1,
            (2, 0, 7, 14, 6) => Self::DbgauthstatusEl1,
            (2, 1, 0, 0, 1) => Self::Trctraceidr,
            (2, 1, 0, 1, 0) => Self::Trcprgctlr,
            (2, 1, 0, 3, 0) => Self::Trcstatr,
            (2, 1, 0, 4, 0) => Self::Trcconfigr,
            (2, 3, 0, 1, 0) => Self::MdccsrEl0,
            (2, 3, 0, 4, 0) => Self::DbgdtrEl0,
            (2, 3, 0, 5, 0) => Self::DbgdtrrxEl0,
            (2, 4, 0, 7, 0) => Self::Dbgvcr32El2,
            (3, 0, 0, 0, 0) => Self::MidrEl1,
            (3, 0, 0, 0, 5) => Self::MpidrEl1,
            (3, 0, 0, 0, 6) => Self::RevidrEl1,
            (3, 0, 0, 1, 0) => Self::IdPfr0El1,
            (3, 0, 0, 1, 1) => Self::IdPfr1El1,
            (3, 0, 0, 1, 2) => Self::IdDfr0El1,
            (3, 0, 0, 1, 3) => Self::IdAfr0El1,
            (3, 0, 0, 1, 4) => Self::IdMmfr0El1,
            (3, 0, 0, 1, 5) => Self::IdMmfr1El1,
            (3, 0, 0, 1, 6) => Self::IdMmfr2El1,
            (3, 0, 0, 1, 7) => Self::IdMmfr3El1,
            (3, 0, 0, 2, 0) => Self::IdIsar0El1,
            (3, 0, 0, 2, 1) => Self::IdIsar1El1,
            (3, 0, 0, 2, 2) => Self::IdIsar2El1,
            (3, 0, 0, 2, 3) => Self::IdIsar3El1,
            (3, 0, 0, 2, 4) => Self::IdIsar4El1,
            (3, 0, 0, 2, 5) => Self::IdIsar5El1,
            (3, 0, 0, 2, 6) => Self::IdMmfr4El1,
            (3, 0, 0, 2, 7) => Self::IdIsar6El1,
            (3, 0, 0, 3, 0) => Self::Mvfr0El1,
            (3, 0, 0, 3, 1) => Self::Mvfr1El1,
            (3, 0, 0, 3, 2) => Self::Mvfr2El1,
            (3, 0, 0, 3, 4) => Self::IdPfr2El1,
            (3, 0, 0, 3, 5) => Self::IdDfr1El1,
            (3, 0, 0, 3, 6) => Self::IdMmfr5El1,
            (3, 0, 0, 4, 0) => Self::IdAa64pfr0El1,
            (3, 0, 0, 4, 1) => Self::IdAa64pfr1El1,
            (3, 0, 0, 4, 4) => Self::IdAa64zfr0El1,
            (3, 0, 0, 4, 5) => Self::IdAa64smfr0El1,
            (3, 0, 0, 5, 0) => Self::IdAa64dfr0El1,
            (3, 0, 0, 5, 1) => Self::IdAa64dfr1El1,
            (3, 0, 0, 5, 4) => Self::IdAa64afr0El1,
            (3, 0, 0, 5, 5) => Self::IdAa64afr1El1,
            (3, 0, 0, 6, 0) => Self::IdAa64isar0El1,
            (3, 0, 0, 6, 1) => Self::IdAa64isar1El1,
            (3, 0, 0, 6, 2) => Self::IdAa64isar2El1,
            (3, 0, 0, 7, 0) => Self::IdAa64mmfr0El1,
            (3, 0, 0, 7, 1) => Self::IdAa64mmfr1El1,
            (3, 0, 0, 7, 2) => Self::IdAa64mmfr2El1,
            (3, 0, 1, 0, 0) => Self::SctlrEl1,
            (3, 0, 1, 0, 1) => Self::ActlrEl1,
            (3, 0, 1, 0, 2) => Self::CpacrEl1,
            (3, 0, 1, 0, 5) => Self::RgsrEl1,
            (3, 0, 1, 0, 6) => Self::GcrEl1,
            (3, 0, 1, 2, 0) => Self::ZcrEl1,
            (3, 0, 1, 2, 1) => Self::TrfcrEl1,
            (3, 0, 1, 2, 4) => Self::SmpriEl1,
            (3, 0, 1, 2, 6) => Self::SmcrEl1,
            (3, 0, 2, 0, 0) => Self::Ttbr0El1,
            (3, 0, 2, 0, 1) => Self::Ttbr1El1,
            (3, 0, 2, 0, 2) => Self::TcrEl1,
            (3, 0, 2, 1, 0) => Self::ApiakeyloEl1,
            (3, 0, 2, 1, 1) => Self::ApiakeyhiEl1,
            (3, 0, 2, 1, 2) => Self::ApibkeyloEl1,
            (3, 0, 2, 1, 3) => Self::ApibkeyhiEl1,
            (3, 0, 2, 2, 0) => Self::ApdakeyloEl1,
            (3, 0, 2, 2, 1) => Self::ApdakeyhiEl1,
            (3, 0, 2, 2, 2) => Self::ApdbkeyloEl1,
            (3, 0, 2, 2, 3) => Self::ApdbkeyhiEl1,
            (3, 0, 2, 3, 0) => Self::ApgakeyloEl1,
            (3, 0, 2, 3, 1) => Self::ApgakeyhiEl1,
            (3, 0, 4, 0, 0) => Self::SpsrEl1,
            (3, 0, 4, 0, 1) => Self::ElrEl1,
            (3, 0, 4, 1, 0) => Self::SpEl0,
            (3, 0, 4, 2, 0) => Self::Spsel,
            (3, 0, 4, 2, 2) => Self::Currentel,
            (3, 0, 4, 2, 3) => Self::Pan,
            (3, 0, 4, 2, 4) => Self::Uao,
            (3, 0, 4, 6, 0) => Self::IccPmrEl1,
            (3, 0, 5, 1, 0) => Self::Afsr0El1,
            (3, 0, 5, 1, 1) => Self::Afsr1El1,
            (3, 0, 5, 2, 0) => Self::EsrEl1,
            (3, 0, 5, 3, 0) => Self::ErridrEl1,
            (3, 0, 5, 3, 1) => Self::ErrselrEl1,
            (3, 0, 5, 4, 0) => Self::ErxfrEl1,
            (3, 0, 5, 4, 1) => Self::ErxctlrEl1,
            (3, 0, 5, 4, 2) => Self::ErxstatusEl1,
            (3, 0, 5, 4, 3) => Self::ErxaddrEl1,
            (3, 0, 5, 4, 4) => Self::ErxpfgfEl1,
            (3, 0, 5, 4, 5) => Self::ErxpfgctlEl1,
            (3, 0, 5, 4, 6) => Self::ErxpfgcdnEl1,
            (3, 0, 5, 5, 0) => Self::Erxmisc0El1,
            (3, 0, 5, 5, 1) => Self::Erxmisc1El1,
            (3, 0, 5, 5, 2) => Self::Erxmisc2El1,
            (3, 0, 5, 5, 3) => Self::Erxmisc3El1,
            (3, 0, 5, 6, 0) => Self::TfsrEl1,
            (3, 0, 5, 6, 1) => Self::Tfsre0El1,
            (3, 0, 6, 0, 0) => Self::FarEl1,
            (3, 0, 7, 4, 0) => Self::ParEl1,
            (3, 0, 9, 9, 0) => Self::PmscrEl1,
            (3, 0, 9, 9, 1) => Self::PmsnevfrEl1,
            (3, 0, 9, 9, 2) => Self::PmsicrEl1,
            (3, 0, 9, 9, 3) => Self::PmsirrEl1,
            (3, 0, 9, 9, 4) => Self::PmsfcrEl1,
            (3, 0, 9, 9, 5) => Self::PmsevfrEl1,
            (3, 0, 9, 9, 6) => Self::PmslatfrEl1,
            (3, 0, 9, 9, 7) => Self::PmsidrEl1,
            (3, 0, 9, 10, 0) => Self::PmblimitrEl1,
            (3, 0, 9, 10, 1) => Self::PmbptrEl1,
            (3, 0, 9, 10, 3) => Self::PmbsrEl1,
            (3, 0, 9, 10, 7) => Self::PmbidrEl1,
            (3, 0, 9, 11, 0) => Self::TrblimitrEl1,
            (3, 0, 9, 11, 1) => Self::TrbptrEl1,
            (3, 0, 9, 11, 2) => Self::TrbbaserEl1,
            (3, 0, 9, 11, 3) => Self::TrbsrEl1,
            (3, 0, 9, 11, 4) => Self::TrbmarEl1,
            (3, 0, 9, 11, 6) => Self::TrbtrgEl1,
            (3, 0, 9, 11, 7) => Self::TrbidrEl1,
            (3, 0, 9, 14, 1) => Self::PmintensetEl1,
            (3, 0, 9, 14, 2) => Self::PmintenclrEl1,
            (3, 0, 9, 14, 6) => Self::PmmirEl1,
            (3, 0, 10, 2, 0) => Self::MairEl1,
            (3, 0, 10, 3, 0) => Self::AmairEl1,
            (3, 0, 10, 4, 0) => Self::LorsaEl1,
            (3, 0, 10, 4, 1) => Self::LoreaEl1,
            (3, 0, 10, 4, 2) => Self::LornEl1,
            (3, 0, 10, 4, 3) => Self::LorcEl1,
            (3, 0, 10, 4, 4) => Self::MpamidrEl1,
            (3, 0, 10, 4, 7) => Self::LoridEl1,
            (3, 0, 10, 5, 0) => Self::Mpam1El1,
            (3, 0, 10, 5, 1) => Self::Mpam0El1,
            (3, 0, 12, 0, 0) => Self::VbarEl1,
            (3, 0, 12, 0, 1) => Self::RvbarEl1,
            (3, 0, 12, 0, 2) => Self::RmrEl1,
            (3, 0, 12, 1, 0) => Self::IsrEl1,
            (3, 0, 12, 1, 1) => Self::DisrEl1,
            (3, 0, 12, 8, 0) => Self::IccIar0El1,
            (3, 0, 12, 8, 1) => Self::IccEoir0El1,
            (3, 0, 12, 8, 2) => Self::IccHppir0El1,
            (3, 0, 12, 8, 3) => Self::IccBpr0El1,
            (3, 0, 12, 8, 4) => Self::IccAp0r0El1,
            (3, 0, 12, 8, 5) => Self::IccAp0r1El1,
            (3, 0, 12, 8, 6) => Self::IccAp0r2El1,
            (3, 0, 12, 8, 7) => Self::IccAp0r3El1,
            (3, 0, 12, 9, 0) => Self::IccAp1r0El1,
            (3, 0, 12, 9, 1) => Self::IccAp1r1El1,
            (3, 0, 12, 9, 2) => Self::IccAp1r2El1,
            (3, 0, 12, 9, 3) => Self::IccAp1r3El1,
            (3, 0, 12, 9, 5) => Self::IccNmiar1El1,
            (3, 0, 12, 11, 1) => Self::IccDirEl1,
            (3, 0, 12, 11, 3) => Self::IccRprEl1,
            (3, 0, 12, 11, 5) => Self::IccSgi1rEl1,
            (3, 0, 12, 11, 6) => Self::IccAsgi1rEl1,
            (3, 0, 12, 11, 7) => Self::IccSgi0rEl1,
            (3, 0, 12, 12, 0) => Self::IccIar1El1,
            (3, 0, 12, 12, 1) => Self::IccEoir1El1,
            (3, 0, 12, 12, 2) => Self::IccHppir1El1,
            (3, 0, 12, 12, 3) => Self::IccBpr1El1,
            (3, 0, 12, 12, 4) => Self::IccCtlrEl1,
            (3, 0, 12, 12, 5) => Self::IccSreEl1,
            (3, 0, 12, 12, 6) => Self::IccIgrpen0El1,
            (3, 0, 12, 12, 7) => Self::IccIgrpen1El1,
            (3, 0, 13, 0, 1) => Self::ContextidrEl1,
            (3, 0, 13, 0, 4) => Self::TpidrEl1,
            (3, 0, 13, 0, 5) => Self::AccdataEl1,
            (3, 0, 13, 0, 7) => Self::ScxtnumEl1,
            (3, 0, 14, 1, 0) => Self::CntkctlEl1,
            (3, 1, 0, 0, 0) => Self::CcsidrEl1,
            (3, 1, 0, 0, 1) => Self::ClidrEl1,
            (3, 1, 0, 0, 2) => Self::Ccsidr2El1,
            (3, 1, 0, 0, 4) => Self::GmidEl1,
            (3, 1, 0, 0, 7) => Self::AidrEl1,
            (3, 2, 0, 0, 0) => Self::CsselrEl1,
            (3, 3, 0, 0, 1) => Self::CtrEl0,
            (3, 3, 0, 0, 7) => Self::DczidEl0,
            (3, 3, 2, 4, 0) => Self::Rndr,
            (3, 3, 2, 4, 1) => Self::Rndrrs,
            (3, 3, 4, 2, 0) => Self::Nzcv,
            (3, 3, 4, 2, 1) => Self::Daif,
            (3, 3, 4, 2, 2) => Self::Svcr,
            (3, 3, 4, 2, 5) => Self::Dit,
            (3, 3, 4, 2, 6) => Self::Ssbs,
            (3, 3, 4, 2, 7) => Self::Tco,
            (3, 3, 4, 4, 0) => Self::Fpcr,
            (3, 3, 4, 4, 1) => Self::Fpsr,
            (3, 3, 4, 5, 0) => Self::DspsrEl0,
            (3, 3, 4, 5, 1) => Self::DlrEl0,
            (3, 3, 9, 12, 0) => Self::PmcrEl0,
            (3, 3, 9, 12, 1) => Self::PmcntensetEl0,
            (3, 3, 9, 12, 2) => Self::PmcntenclrEl0,
            (3, 3, 9, 12, 3) => Self::PmovsclrEl0,
            (3, 3, 9, 12, 4) => Self::PmswincEl0,
            (3, 3, 9, 12, 5) => Self::PmselrEl0,
            (3, 3, 9, 12, 6) => Self::Pmceid0El0,
            (3, 3, 9, 12, 7) => Self::Pmceid1El0,
            (3, 3, 9, 13, 0) => Self::PmccntrEl0,
            (3, 3, 9, 13, 1) => Self::PmxevtyperEl0,
            (3, 3, 9, 13, 2) => Self::PmxevcntrEl0,
            (3, 3, 9, 14, 0) => Self::PmuserenrEl0,
            (3, 3, 9, 14, 3) => Self::PmovssetEl0,
            (3, 3, 13, 0, 2) => Self::TpidrEl0,
            (3, 3, 13, 0, 3) => Self::TpidrroEl0,
            (3, 3, 13, 0, 5) => Self::Tpidr2El0,
            (3, 3, 13, 0, 7) => Self::ScxtnumEl0,
            (3, 3, 13, 2, 0) => Self::AmcrEl0,
            (3, 3, 13, 2, 1) => Self::AmcfgrEl0,
            (3, 3, 13, 2, 2) => Self::AmcgcrEl0,
            (3, 3, 13, 2, 3) => Self::AmuserenrEl0,
            (3, 3, 13, 2, 4) => Self::Amcntenclr0El0,
            (3, 3, 13, 2, 5) => Self::Amcntenset0El0,
            (3, 3, 13, 2, 6) => Self::Amcg1idrEl0,
            (3, 3, 13, 3, 0) => Self::Amcntenclr1El0,
            (3, 3, 13, 3, 1) => Self::Amcntenset1El0,
            (3, 3, 13, 4, 0) => Self::Amevcntr00El0,
            (3, 3, 13, 4, 1) => Self::Amevcntr01El0,
            (3, 3, 13, 4, 2) => Self::Amevcntr02El0,
            (3, 3, 13, 4, 3) => Self::Amevcntr03El0,
            (3, 3, 13, 4, 4) => Self::Amevcntr04El0,
            (3, 3, 13, 4, 5) => Self::Amevcntr05El0,
            (3, 3, 13, 4, 6) => Self::Amevcntr06El0,
            (3, 3, 13, 4, 7) => Self::Amevcntr07El0,
            (3, 3, 13, 5, 0) => Self::Amevcntr08El0,
            (3, 3, 13, 5, 1) => Self::Amevcntr09El0,
            (3, 3, 13, 5, 2) => Self::Amevcntr010El0,
            (3, 3, 13, 5, 3) => Self::Amevcntr011El0,
            (3, 3, 13, 5, 4) => Self::Amevcntr012El0,
            (3, 3, 13, 5, 5) => Self::Amevcntr013El0,
            (3, 3, 13, 5, 6) => Self::Amevcntr014El0,
            (3, 3, 13, 5, 7) => Self::Amevcntr015El0,
            (3, 3, 13, 6, 0) => Self::Amevtyper00El0,
            (3, 3, 13, 6, 1) => Self::Amevtyper01El0,
            (3, 3, 13, 6, 2) => Self::Amevtyper02El0,
            (3, 3, 13, 6, 3) => Self::Amevtyper03El0,
            (3, 3, 13, 6, 4) => Self::Amevtyper04El0,
            (3, 3, 13, 6, 5) => Self::Amevtyper05El0,
            (3, 3, 13, 6, 6) => Self::Amevtyper06El0,
            (3, 3, 13, 6, 7) => Self::Amevtyper07El0,
            (3, 3, 13, 7, 0) => Self::Amevtyper08El0,
            (3, 3, 13, 7, 1) => Self::Amevtyper09El0,
            (3, 3, 13, 7, 2) => Self::Amevtyper010El0,
            (3, 3, 13, 7, 3) => Self::Amevtyper011El0,
            (3, 3, 13, 7, 4) => Self::Amevtyper012El0,
            (3, 3, 13, 7, 5) => Self::Amevtyper013El0,
            (3, 3, 13, 7, 6) => Self::Amevtyper014El0,
            (3, 3, 13, 7, 7) => Self::Amevtyper015El0,
            (3, 3, 13, 12, 0) => Self::Amevcntr10El0,
            (3, 3, 13, 12, 1) => Self::Amevcntr11El0,
            (3, 3, 13, 12, 2) => Self::Amevcntr12El0,
            (3, 3, 13, 12, 3) => Self::Amevcntr13El0,
            (3, 3, 13, 12, 4) => Self::Amevcntr14El0,
            (3, 3, 13, 12, 5) => Self::Amevcntr15El0,
            (3, 3, 13, 12, 6) => Self::Amevcntr16El0,
            (3, 3, 13, 12, 7) => Self::Amevcntr17El0,
            (3, 3, 13, 13, 0) => Self::Amevcntr18El0,
            (3, 3, 13, 13, 1) => Self::Amevcntr19El0,
            (3, 3, 13, 13, 2) => Self::Amevcntr110El0,
            (3, 3, 13, 13, 3) => Self::Amevcntr111El0,
            (3, 3, 13, 13, 4) => Self::Amevcntr112El0,
            (3, 3, 13, 13, 5) => Self::Amevcntr113El0,
            (3, 3, 13, 13, 6) => Self::Amevcntr114El0,
            (3, 3, 13, 13, 7) => Self::Amevcntr115El0,
            (3, 3, 13, 14, 0) => Self::Amevtyper10El0,
            (3, 3, 13, 14, 1) => Self::Amevtyper11El0,
            (3, 3, 13, 14, 2) => Self::Amevtyper12El0,
            (3, 3, 13, 14, 3) => Self::Amevtyper13El0,
            (3, 3, 13, 14, 4) => Self::Amevtyper14El0,
            (3, 3, 13, 14, 5) => Self::Amevtyper15El0,
            (3, 3, 13, 14, 6) => Self::Amevtyper16El0,
            (3, 3, 13, 14, 7) => Self::Amevtyper17El0,
            (3, 3, 13, 15, 0) => Self::Amevtyper18El0,
            (3, 3, 13, 15, 1) => Self::Amevtyper19El0,
            (3, 3, 13, 15, 2) => Self::Amevtyper110El0,
            (3, 3, 13, 15, 3) => Self::Amevtyper111El0,
            (3, 3, 13, 15, 4) => Self::Amevtyper112El0,
            (3, 3, 13, 15, 5) => Self::Amevtyper113El0,
            (3, 3, 13, 15, 6) => Self::Amevtyper114El0,
            (3, 3, 13, 15, 7) => Self::Amevtyper115El0,
            (3, 3, 14, 0, 0) => Self::CntfrqEl0,
            (3, 3, 14, 0, 1) => Self::CntpctEl0,
            (3, 3, 14, 0, 2) => Self::CntvctEl0,
            (3, 3, 14, 0, 5) => Self::CntpctssEl0,
            (3, 3, 14, 0, 6) => Self::CntvctssEl0,
            (3, 3, 14, 2, 0) => Self::CntpTvalEl0,
            (3, 3, 14, 2, 1) => Self::CntpCtlEl0,
            (3, 3, 14, 2, 2) => Self::CntpCvalEl0,
            (3, 3, 14, 3, 0) => Self::CntvTvalEl0,
            (3, 3, 14, 3, 1) => Self::CntvCtlEl0,
            (3, 3, 14, 3, 2) => Self::CntvCvalEl0,
            (3, 3, 14, 8, 0) => Self::Pmevcntr0El0,
            (3, 3, 14, 8, 1) => Self::Pmevcntr1El0,
            (3, 3, 14, 8, 2) => Self::Pmevcntr2El0,
            (3, 3, 14, 8, 3) => Self::Pmevcntr3El0,
            (3, 3, 14, 8, 4) => Self::Pmevcntr4El0,
            (3, 3, 14, 8, 5) => Self::Pmevcntr5El0,
            (3, 3, 14, 8, 6) => Self::Pmevcntr6El0,
            (3, 3, 14, 8, 7) => Self::Pmevcntr7El0,
            (3, 3, 14, 9, 0) => Self::Pmevcntr8El0,
            (3, 3, 14, 9, 1) => Self::Pmevcntr9El0,
            (3, 3, 14, 9, 2) => Self::Pmevcntr10El0,
            (3, 3, 14, 9, 3) => Self::Pmevcntr11El0,
            (3, 3, 14, 9, 4) => Self::Pmevcntr12El0,
            (3, 3, 14, 9, 5) => Self::Pmevcntr13El0,
            (3, 3, 14, 9, 6) => Self::Pmevcntr14El0,
            (3, 3, 14, 9, 7) => Self::Pmevcntr15El0,
            (3, 3, 14, 10, 0) => Self::Pmevcntr16El0,
            (3, 3, 14, 10, 1) => Self::Pmevcntr17El0,
            (3, 3, 14, 10, 2) => Self::Pmevcntr18El0,
            (3, 3, 14, 10, 3) => Self::Pmevcntr19El0,
            (3, 3, 14, 10, 4) => Self::Pmevcntr20El0,
            (3, 3, 14, 10, 5) => Self::Pmevcntr21El0,
            (3, 3, 14, 10, 6) => Self::Pmevcntr22El0,
            (3, 3, 14, 10, 7) => Self::Pmevcntr23El0,
            (3, 3, 14, 11, 0) => Self::Pmevcntr24El0,
            (3, 3, 14, 11, 1) => Self::Pmevcntr25El0,
            (3, 3, 14, 11, 2) => Self::Pmevcntr26El0,
            (3, 3, 14, 11, 3) => Self::Pmevcntr27El0,
            (3, 3, 14, 11, 4) => Self::Pmevcntr28El0,
            (3, 3, 14, 11, 5) => Self::Pmevcntr29El0,
            (3, 3, 14, 11, 6) => Self::Pmevcntr30El0,
            (3, 3, 14, 12, 0) => Self::Pmevtyper0El0,
            (3, 3, 14, 12, 1) => Self::Pmevtyper1El0,
            (3, 3, 14, 12, 2) => Self::Pmevtyper2El0,
            (3, 3, 14, 12, 3) => Self::Pmevtyper3El0,
            (3, 3, 14, 12, 4) => Self::Pmevtyper4El0,
            (3, 3, 14, 12, 5) => Self::Pmevtyper5El0,
            (3, 3, 14, 12, 6) => Self::Pmevtyper6El0,
            (3, 3, 14, 12, 7) => Self::Pmevtyper7El0,
            (3, 3, 14, 13, 0) => Self::Pmevtyper8El0,
            (3, 3, 14, 13, 1) => Self::Pmevtyper9El0,
            (3, 3, 14, 13, 2) => Self::Pmevtyper10El0,
            (3, 3, 14, 13, 3) => Self::Pmevtyper11El0,
            (3, 3, 14, 13, 4) => Self::Pmevtyper12El0,
            (3, 3, 14, 13, 5) => Self::Pmevtyper13El0,
            (3, 3, 14, 13, 6) => Self::Pmevtyper14El0,
            (3, 3, 14, 13, 7) => Self::Pmevtyper15El0,
            (3, 3, 14, 14, 0) => Self::Pmevtyper16El0,
            (3, 3, 14, 14, 1) => Self::Pmevtyper17El0,
            (3, 3, 14, 14, 2) => Self::Pmevtyper18El0,
            (3, 3, 14, 14, 3) => Self::Pmevtyper19El0,
            (3, 3, 14, 14, 4) => Self::Pmevtyper20El0,
            (3, 3, 14, 14, 5) => Self::Pmevtyper21El0,
            (3, 3, 14, 14, 6) => Self::Pmevtyper22El0,
            (3, 3, 14, 14, 7) => Self::Pmevtyper23El0,
            (3, 3, 14, 15, 0) => Self::Pmevtyper24El0,
            (3, 3, 14, 15, 1) => Self::Pmevtyper25El0,
            (3, 3, 14, 15, 2) => Self::Pmevtyper26El0,
            (3, 3, 14, 15, 3) => Self::Pmevtyper27El0,
            (3, 3, 14, 15, 4) => Self::Pmevtyper28El0,
            (3, 3, 14, 15, 5) => Self::Pmevtyper29El0,
            (3, 3, 14, 15, 6) => Self::Pmevtyper30El0,
            (3, 3, 14, 15, 7) => Self::PmccfiltrEl0,
            (3, 4, 0, 0, 0) => Self::VpidrEl2,
            (3, 4, 0, 0, 5) => Self::VmpidrEl2,
            (3, 4, 1, 0, 0) => Self::SctlrEl2,
            (3, 4, 1, 0, 1) => Self::ActlrEl2,
            (3, 4, 1, 1, 0) => Self::HcrEl2,
            (3, 4, 1, 1, 1) => Self::MdcrEl2,
            (3, 4, 1, 1, 2) => Self::CptrEl2,
            (3, 4, 1, 1, 3) => Self::HstrEl2,
            (3, 4, 1, 1, 4) => Self::HfgrtrEl2,
            (3, 4, 1, 1, 5) => Self::HfgwtrEl2,
            (3, 4, 1, 1, 6) => Self::HfgitrEl2,
            (3, 4, 1, 1, 7) => Self::HacrEl2,
            (3, 4, 1, 2, 0) => Self::ZcrEl2,
            (3, 4, 1, 2, 1) => Self::TrfcrEl2,
            (3, 4, 1, 3, 1) => Self::Sder32El2,
            (3, 4, 2, 0, 0) => Self::Ttbr0El2,
            (3, 4, 2, 0, 1) => Self::Ttbr1El2,
            (3, 4, 2, 0, 2) => Self::TcrEl2,
            (3, 4, 2, 1, 0) => Self::VttbrEl2,
            (3, 4, 2, 1, 2) => Self::VtcrEl2,
            (3, 4, 2, 2, 0) => Self::VncrEl2,
            (3, 4, 2, 6, 0) => Self::VsttbrEl2,
            (3, 4, 2, 6, 2) => Self::VstcrEl2,
            (3, 4, 3, 0, 0) => Self::Dacr32El2,
            (3, 4, 4, 0, 0) => Self::SpsrEl2,
            (3, 4, 4, 0, 1) => Self::ElrEl2,
            (3, 4, 4, 1, 0) => Self::SpEl1,
            (3, 4, 4, 3, 0) => Self::SpsrIrq,
            (3, 4, 4, 3, 1) => Self::SpsrAbt,
            (3, 4, 4, 3, 2) => Self::SpsrUnd,
            (3, 4, 4, 3, 3) => Self::SpsrFiq,
            (3, 4, 5, 0, 1) => Self::Ifsr32El2,
            (3, 4, 5, 1, 0) => Self::Afsr0El2,
            (3, 4, 5, 1, 1) => Self::Afsr1El2,
            (3, 4, 5, 2, 0) => Self::EsrEl2,
            (3, 4, 5, 2, 3) => Self::VsesrEl2,
            (3, 4, 5, 3, 0) => Self::Fpexc32El2,
            (3, 4, 5, 6, 0) => Self::TfsrEl2,
            (3, 4, 6, 0, 0) => Self::FarEl2,
            (3, 4, 6, 0, 4) => Self::HpfarEl2,
            (3, 4, 9, 9, 0) => Self::PmscrEl2,
            (3, 4, 10, 2, 0) => Self::MairEl2,
            (3, 4, 10, 3, 0) => Self::AmairEl2,
            (3, 4, 10, 4, 0) => Self::MpamhcrEl2,
            (3, 4, 10, 4, 1) => Self::MpamvpmvEl2,
            (3, 4, 10, 5, 0) => Self::Mpam2El2,
            (3, 4, 12, 0, 0) => Self::VbarEl2,
            (3, 4, 12, 0, 1) => Self::RvbarEl2,
            (3, 4, 12, 0, 2) => Self::RmrEl2,
            (3, 4, 12, 1, 1) => Self::VdisrEl2,
            (3, 4, 12, 8, 0) => Self::IchAp0r0El2,
            (3, 4, 12, 8, 1) => Self::IchAp0r1El2,
            (3, 4, 12, 8, 2) => Self::IchAp0r2El2,
            (3, 4, 12, 8, 3) => Self::IchAp0r3El2,
            (3, 4, 12, 9, 0) => Self::IchAp1r0El2,
            (3, 4, 12, 9, 1) => Self::IchAp1r1El2,
            (3, 4, 12, 9, 2) => Self::IchAp1r2El2,
            (3, 4, 12, 9, 3) => Self::IchAp1r3El2,
            (3, 4, 12, 9, 5) => Self::IccSreEl2,
            (3, 4, 12, 11, 0) => Self::IchHcrEl2,
            (3, 4, 12, 11, 1) => Self::IchVtrEl2,
            (3, 4, 12, 11, 2) => Self::IchMisrEl2,
            (3, 4, 12, 11, 3) => Self::IchEisrEl2,
            (3, 4, 12, 11, 5) => Self::IchElrsrEl2,
            (3, 4, 12, 11, 7) => Self::IchVmcrEl2,
            (3, 4, 12, 12, 0) => Self::IchLr0El2,
            (3, 4, 12, 12, 1) => Self::IchLr1El2,
            (3, 4, 12, 12, 2) => Self::IchLr2El2,
            (3, 4, 12, 12, 3) => Self::IchLr3El2,
            (3, 4, 12, 12, 4) => Self::IchLr4El2,
            (3, 4, 12, 12, 5) => Self::IchLr5El2,
            (3, 4, 12, 12, 6) => Self::IchLr6El2,
            (3, 4, 12, 12, 7) => Self::IchLr7El2,
            (3, 4, 12, 13, 0) => Self::IchLr8El2,
            (3, 4, 12, 13, 1) => Self::IchLr9El2,
            (3, 4, 12, 13, 2) => Self::IchLr10El2,
            (3, 4, 12, 13, 3) => Self::IchLr11El2,
            (3, 4, 12, 13, 4) => Self::IchLr12El2,
            (3, 4, 12, 13, 5) => Self::IchLr13El2,
            (3, 4, 12, 13, 6) => Self::IchLr14El2,
            (3, 4, 12, 13, 7) => Self::IchLr15El2,
            (3, 4, 13, 0, 1) => Self::ContextidrEl2,
            (3, 4, 13, 0, 2) => Self::TpidrEl2,
            (3, 4, 13, 0, 7) => Self::ScxtnumEl2,
            (3, 4, 14, 0, 3) => Self::CntvoffEl2,
            (3, 4, 14, 0, 6) => Self::CntpoffEl2,
            (3, 4, 14, 1, 0) => Self::CnthctlEl2,
            (3, 4, 14, 2, 0) => Self::CnthpTvalEl2,
            (3, 4, 14, 2, 1) => Self::CnthpCtlEl2,
            (3, 4, 14, 2, 2) => Self::CnthpCvalEl2,
            (3, 4, 14, 3, 0) => Self::CnthvTvalEl2,
            (3, 4, 14, 3, 1) => Self::CnthvCtlEl2,
            (3, 4, 14, 3, 2) => Self::CnthvCvalEl2,
            (3, 4, 14, 4, 0) => Self::CnthvsTvalEl2,
            (3, 4, 14, 4, 1) => Self::CnthvsCtlEl2,
            (3, 4, 14, 4, 2) => Self::CnthvsCvalEl2,
            (3, 4, 14, 5, 0) => Self::CnthpsTvalEl2,
            (3, 4, 14, 5, 1) => Self::CnthpsCtlEl2,
            (3, 4, 14, 5, 2) => Self::CnthpsCvalEl2,
            (3, 5, 1, 0, 0) => Self::SctlrEl12,
            (3, 5, 1, 0, 2) => Self::CpacrEl12,
            (3, 5, 1, 2, 0) => Self::ZcrEl12,
            (3, 5, 1, 2, 1) => Self::TrfcrEl12,
            (3, 5, 2, 0, 0) => Self::Ttbr0El12,
            (3, 5, 2, 0, 1) => Self::Ttbr1El12,
            (3, 5, 2, 0, 2) => Self::TcrEl12,
            (3, 5, 4, 0, 0) => Self::SpsrEl12,
            (3, 5, 4, 0, 1) => Self::ElrEl12,
            (3, 5, 5, 1, 0) => Self::Afsr0El12,
            (3, 5, 5, 1, 1) => Self::Afsr1El12,
            (3, 5, 5, 2, 0) => Self::EsrEl12,
            (3, 5, 5, 6, 0) => Self::TfsrEl12,
            (3, 5, 6, 0, 0) => Self::FarEl12,
            (3, 5, 9, 9, 0) => Self::PmscrEl12,
            (3, 5, 10, 2, 0) => Self::MairEl12,
            (3, 5, 10, 3, 0) => Self::AmairEl12,
            (3, 5, 10, 5, 0) => Self::Mpam1El12,
            (3, 5, 12, 0, 0) => Self::VbarEl12,
            (3, 5, 13, 0, 1) => Self::ContextidrEl12,
            (3, 5, 13, 0, 7) => Self::ScxtnumEl12,
            (3, 5, 14, 1, 0) => Self::CntkctlEl12,
            (3, 5, 14, 2, 0) => Self::CntpTvalEl02,
            (3, 5, 14, 2, 1) => Self::CntpCtlEl02,
            (3, 5, 14, 2, 2) => Self::CntpCvalEl02,
            (3, 5, 14, 3, 0) => Self::CntvTvalEl02,
            (3, 5, 14, 3, 1) => Self::CntvCtlEl02,
            (3, 5, 14, 3, 2) => Self::CntvCvalEl02,
            (3, 6, 1, 0, 0) => Self::SctlrEl3,
            (3, 6, 1, 0, 1) => Self::ActlrEl3,
            (3, 6, 1, 1, 0) => Self::ScrEl3,
            (3, 6, 1, 1, 1) => Self::Sder32El3,
            (3, 6, 1, 1, 2) => Self::CptrEl3,
            (3, 6, 1, 2, 0) => Self::ZcrEl3,
            (3, 6, 1, 3, 1) => Self::MdcrEl3,
            (3, 6, 2, 0, 0) => Self::Ttbr0El3,
            (3, 6, 2, 0, 2) => Self::TcrEl3,
            (3, 6, 4, 0, 0) => Self::SpsrEl3,
            (3, 6, 4, 0, 1) => Self::ElrEl3,
            (3, 6, 4, 1, 0) => Self::SpEl2,
            (3, 6, 5, 1, 0) => Self::Afsr0El3,
            (3, 6, 5, 1, 1) => Self::Afsr1El3,
            (3, 6, 5, 2, 0) => Self::EsrEl3,
            (3, 6, 5, 6, 0) => Self::TfsrEl3,
            (3, 6, 6, 0, 0) => Self::FarEl3,
            (3, 6, 10, 2, 0) => Self::MairEl3,
            (3, 6, 10, 3, 0) => Self::AmairEl3,
            (3, 6, 10, 5, 0) => Self::Mpam3El3,
            (3, 6, 12, 0, 0) => Self::VbarEl3,
            (3, 6, 12, 0, 1) => Self::RvbarEl3,
            (3, 6, 12, 0, 2) => Self::RmrEl3,
            (3, 6, 12, 12, 4) => Self::IccCtlrEl3,
            (3, 6, 12, 12, 5) => Self::IccSreEl3,
            (3, 6, 12, 12, 7) => Self::IccIgrpen1El3,
            (3, 6, 13, 0, 2) => Self::TpidrEl3,
            (3, 6, 13, 0, 7) => Self::ScxtnumEl3,
            (3, 7, 14, 2, 0) => Self::CntpsTvalEl1,
            (3, 7, 14, 2, 1) => Self::CntpsCtlEl1,
            (3, 7, 14, 2, 2) => Self::CntpsCvalEl1,
            _ => return None,
        })
    }

    /// Resolves a `SYS` encoding to the operation it aliases and its operand.
    pub fn sys_operation(op1: u32, crn: u32, crm: u32, op2: u32) -> Option<(SysOp, Self)> {
        Some(match (op1, crn, crm, op2) {
            (0, 7, 1, 0) => (SysOp::Ic, Self::Ialluis),
            (0, 7, 5, 0) => (SysOp::Ic, Self::Iallu),
            (0, 7, 6, 1) => (SysOp::Dc, Self::Ivac),
            (0, 7, 6, 2) => (SysOp::Dc, Self::Isw),
            (0, 7, 8, 0) => (SysOp::At, Self::S1e1r),
            (0, 7, 8, 1) => (SysOp::At, Self::S1e1w),
            (0, 7, 8, 2) => (SysOp::At, Self::S1e0r),
            (0, 7, 8, 3) => (SysOp::At, Self::S1e0w),
            (0, 7, 9, 0) => (SysOp::At, Self::S1e1rp),
            (0, 7, 9, 1) => (SysOp::At, Self::S1e1wp),
            (0, 7, 10, 2) => (SysOp::Dc, Self::Csw),
            (0, 7, 14, 2) => (SysOp::Dc, Self::Cisw),
            (0, 8, 1, 0) => (SysOp::Tlbi, Self::Vmalle1os),
            (0, 8, 1, 1) => (SysOp::Tlbi, Self::Vae1os),
            (0, 8, 1, 2) => (SysOp::Tlbi, Self::Aside1os),
            (0, 8, 1, 3) => (SysOp::Tlbi, Self::Vaae1os),
            (0, 8, 1, 5) => (SysOp::Tlbi, Self::Vale1os),
            (0, 8, 1, 7) => (SysOp::Tlbi, Self::Vaale1os),
            (0, 8, 2, 1) => (SysOp::Tlbi, Self::Rvae1is),
            (0, 8, 2, 3) => (SysOp::Tlbi, Self::Rvaae1is),
            (0, 8, 2, 5) => (SysOp::Tlbi, Self::Rvale1is),
            (0, 8, 2, 7) => (SysOp::Tlbi, Self::Rvaale1is),
            (0, 8, 3, 0) => (SysOp::Tlbi, Self::Vmalle1is),
            (0, 8, 3, 1) => (SysOp::Tlbi, Self::Vae1is),
            (0, 8, 3, 2) => (SysOp::Tlbi, Self::Aside1is),
            (0, 8, 3, 3) => (SysOp::Tlbi, Self::Vaae1is),
            (0, 8, 3, 5) => (SysOp::Tlbi, Self::Vale1is),
            (0, 8, 3, 7) => (SysOp::Tlbi, Self::Vaale1is),
            (0, 8, 5, 1) => (SysOp::Tlbi, Self::Rvae1os),
            (0, 8, 5, 3) => (SysOp::Tlbi, Self::Rvaae1os),
            (0, 8, 5, 5) => (SysOp::Tlbi, Self::Rvale1os),
            (0, 8, 5, 7) => (SysOp::Tlbi, Self::Rvaale1os),
            (0, 8, 6, 1) => (SysOp::Tlbi, Self::Rvae1),
            (0, 8, 6, 3) => (SysOp::Tlbi, Self::Rvaae1),
            (0, 8, 6, 5) => (SysOp::Tlbi, Self::Rvale1),
            (0, 8, 6, 7) => (SysOp::Tlbi, Self::Rvaale1),
            (0, 8, 7, 0) => (SysOp::Tlbi, Self::Vmalle1),
            (0, 8, 7, 1) => (SysOp::Tlbi, Self::Vae1),
            (0, 8, 7, 2) => (SysOp::Tlbi, Self::Aside1),
            (0, 8, 7, 3) => (SysOp::Tlbi, Self::Vaae1),
            (0, 8, 7, 5) => (SysOp::Tlbi, Self::Vale1),
            (0, 8, 7, 7) => (SysOp::Tlbi, Self::Vaale1),
            (3, 7, 4, 1) => (SysOp::Dc, Self::Zva),
            (3, 7, 5, 1) => (SysOp::Ic, Self::Ivau),
            (3, 7, 10, 1) => (SysOp::Dc, Self::Cvac),
            (3, 7, 11, 1) => (SysOp::Dc, Self::Cvau),
            (3, 7, 12, 1) => (SysOp::Dc, Self::Cvap),
            (3, 7, 13, 1) => (SysOp::Dc, Self::Cvadp),
            (3, 7, 14, 1) => (SysOp::Dc, Self::Civac),
            (4, 7, 8, 0) => (SysOp::At, Self::S1e2r),
            (4, 7, 8, 1) => (SysOp::At, Self::S1e2w),
            (4, 7, 8, 4) => (SysOp::At, Self::S12e1r),
            (4, 7, 8, 5) => (SysOp::At, Self::S12e1w),
            (4, 7, 8, 6) => (SysOp::At, Self::S12e0r),
            (4, 7, 8, 7) => (SysOp::At, Self::S12e0w),
            (4, 8, 0, 1) => (SysOp::Tlbi, Self::Ipas2e1is),
            (4, 8, 0, 2) => (SysOp::Tlbi, Self::Ripas2e1is),
            (4, 8, 0, 5) => (SysOp::Tlbi, Self::Ipas2le1is),
            (4, 8, 0, 6) => (SysOp::Tlbi, Self::Ripas2le1is),
            (4, 8, 1, 0) => (SysOp::Tlbi, Self::Alle2os),
            (4, 8, 1, 1) => (SysOp::Tlbi, Self::Vae2os),
            (4, 8, 1, 4) => (SysOp::Tlbi, Self::Alle1os),
            (4, 8, 1, 5) => (SysOp::Tlbi, Self::Vale2os),
            (4, 8, 1, 6) => (SysOp::Tlbi, Self::Vmalls12e1os),
            (4, 8, 2, 1) => (SysOp::Tlbi, Self::Rvae2is),
            (4, 8, 2, 5) => (SysOp::Tlbi, Self::Rvale2is),
            (4, 8, 3, 0) => (SysOp::Tlbi, Self::Alle2is),
            (4, 8, 3, 1) => (SysOp::Tlbi, Self::Vae2is),
            (4, 8, 3, 4) => (SysOp::Tlbi, Self::Alle1is),
            (4, 8, 3, 5) => (SysOp::Tlbi, Self::Vale2is),
            (4, 8, 3, 6) => (SysOp::Tlbi, Self::Vmalls12e1is),
            (4, 8, 4, 0) => (SysOp::Tlbi, Self::Ipas2e1os),
            (4, 8, 4, 1) => (SysOp::Tlbi, Self::Ipas2e1),
            (4, 8, 4, 2) => (SysOp::Tlbi, Self::Ripas2e1),
            (4, 8, 4, 3) => (SysOp::Tlbi, Self::Ripas2e1os),
            (4, 8, 4, 4) => (SysOp::Tlbi, Self::Ipas2le1os),
            (4, 8, 4, 5) => (SysOp::Tlbi, Self::Ipas2le1),
            (4, 8, 4, 6) => (SysOp::Tlbi, Self::Ripas2le1),
            (4, 8, 4, 7) => (SysOp::Tlbi, Self::Ripas2le1os),
            (4, 8, 5, 1) => (SysOp::Tlbi, Self::Rvae2os),
            (4, 8, 5, 5) => (SysOp::Tlbi, Self::Rvale2os),
            (4, 8, 6, 1) => (SysOp::Tlbi, Self::Rvae2),
            (4, 8, 6, 5) => (SysOp::Tlbi, Self::Rvale2),
            (4, 8, 7, 0) => (SysOp::Tlbi, Self::Alle2),
            (4, 8, 7, 1) => (SysOp::Tlbi, Self::Vae2),
            (4, 8, 7, 4) => (SysOp::Tlbi, Self::Alle1),
            (4, 8, 7, 5) => (SysOp::Tlbi, Self::Vale2),
            (4, 8, 7, 6) => (SysOp::Tlbi, Self::Vmalls12e1),
            (6, 7, 8, 0) => (SysOp::At, Self::S1e3r),
            (6, 7, 8, 1) => (SysOp::At, Self::S1e3w),
            (6, 8, 1, 0) => (SysOp::Tlbi, Self::Alle3os),
            (6, 8, 1, 1) => (SysOp::Tlbi, Self::Vae3os),
            (6, 8, 1, 5) => (SysOp::Tlbi, Self::Vale3os),
            (6, 8, 2, 1) => (SysOp::Tlbi, Self::Rvae3is),
            (6, 8, 2, 5) => (SysOp::Tlbi, Self::Rvale3is),
            (6, 8, 3, 0) => (SysOp::Tlbi, Self::Alle3is),
            (6, 8, 3, 1) => (SysOp::Tlbi, Self::Vae3is),
            (6, 8, 3, 5) => (SysOp::Tlbi, Self::Vale3is),
            (6, 8, 5, 1) => (SysOp::Tlbi, Self::Rvae3os),
            (6, 8, 5, 5) => (SysOp::Tlbi, Self::Rvale3os),
            (6, 8, 6, 1) => (SysOp::Tlbi, Self::Rvae3),
            (6, 8, 6, 5) => (SysOp::Tlbi, Self::Rvale3),
            (6, 8, 7, 0) => (SysOp::Tlbi, Self::Alle3),
            (6, 8, 7, 1) => (SysOp::Tlbi, Self::Vae3),
            (6, 8, 7, 5) => (SysOp::Tlbi, Self::Vale3),
            _ => return None,
        })
    }

    /// `DMB`/`DSB` option from the `CRm` field.
    pub fn barrier_option(crm: u32) -> Option<Self> {
        Some(match crm {
            1 => Self::Oshld,
            2 => Self::Oshst,
            3 => Self::Osh,
            5 => Self::Nshld,
            6 => Self::Nshst,
            7 => Self::Nsh,
            9 => Self::Ishld,
            10 => Self::Ishst,
            11 => Self::Ish,
            13 => Self::Ld,
            14 => Self::St,
            15 => Self::Sy,
            _ => return None,
        })
    }

    /// PSTATE field of `MSR (immediate)`.
    pub fn pstate_field(op1: u32, op2: u32) -> Option<Self> {
        Some(match (op1, op2) {
            (0, 3) => Self::Uao,
            (0, 4) => Self::Pan,
            (0, 5) => Self::Spsel,
            (3, 1) => Self::Ssbs,
            (3, 2) => Self::Dit,
            (3, 4) => Self::Tco,
            (3, 6) => Self::Daifset,
            (3, 7) => Self::Daifclr,
            _ => return None,
        })
    }
}

impl SystemReg {
    /// Resolves a register encoding written by `MSR`. The debug transmit and
    /// receive registers share one encoding and differ by direction.
    pub fn from_encoding_for_write(op0: u32, op1: u32, crn: u32, crm: u32, op2: u32) -> Option<Self> {
        match Self::from_encoding(op0, op1, crn, crm, op2) {
            Some(Self::DbgdtrrxEl0) => Some(Self::DbgdtrtxEl0),
            other => other,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Stable index into the symbol table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Every symbol, in index order.
    pub fn all() -> &'static [SystemReg] {
        &ALL
    }
}

impl fmt::Display for SystemReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_consistent() {
        assert_eq!(SystemReg::all().len(), SYSTEM_REG_COUNT);
        for (index, reg) in SystemReg::all().iter().enumerate() {
            assert_eq!(reg.index(), index);
            assert!(!reg.name().is_empty());
        }
        let mut names: Vec<_> = SystemReg::all().iter().map(|r| r.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SYSTEM_REG_COUNT);
    }

    #[test]
    fn test_common_registers() {
        assert_eq!(SystemReg::from_encoding(3, 3, 13, 0, 2), Some(SystemReg::TpidrEl0));
        assert_eq!(SystemReg::from_encoding(3, 3, 4, 2, 0).map(SystemReg::name), Some("nzcv"));
        assert_eq!(SystemReg::from_encoding(3, 3, 4, 4, 0).map(SystemReg::name), Some("fpcr"));
        assert_eq!(SystemReg::from_encoding(3, 0, 0, 0, 0).map(SystemReg::name), Some("midr_el1"));
        assert_eq!(SystemReg::from_encoding(3, 3, 14, 0, 2).map(SystemReg::name), Some("cntvct_el0"));
        assert_eq!(SystemReg::from_encoding(3, 0, 15, 2, 0), None);
    }

    #[test]
    fn test_numbered_families() {
        assert_eq!(SystemReg::from_encoding(2, 0, 0, 5, 4).map(SystemReg::name), Some("dbgbvr5_el1"));
        assert_eq!(SystemReg::from_encoding(2, 0, 0, 15, 7).map(SystemReg::name), Some("dbgwcr15_el1"));
        assert_eq!(SystemReg::from_encoding(3, 3, 14, 11, 6).map(SystemReg::name), Some("pmevcntr30_el0"));
        assert_eq!(SystemReg::from_encoding(3, 3, 14, 12, 0).map(SystemReg::name), Some("pmevtyper0_el0"));
        assert_eq!(SystemReg::from_encoding(3, 4, 12, 13, 7).map(SystemReg::name), Some("ich_lr15_el2"));
    }

    #[test]
    fn test_debug_transfer_direction() {
        assert_eq!(SystemReg::from_encoding(2, 3, 0, 5, 0), Some(SystemReg::DbgdtrrxEl0));
        assert_eq!(SystemReg::from_encoding_for_write(2, 3, 0, 5, 0), Some(SystemReg::DbgdtrtxEl0));
        assert_eq!(SystemReg::from_encoding_for_write(3, 3, 13, 0, 2), Some(SystemReg::TpidrEl0));
    }

    #[test]
    fn test_sys_operations() {
        assert_eq!(SystemReg::sys_operation(3, 7, 4, 1), Some((SysOp::Dc, SystemReg::Zva)));
        assert_eq!(SystemReg::sys_operation(3, 7, 5, 1), Some((SysOp::Ic, SystemReg::Ivau)));
        assert_eq!(SystemReg::sys_operation(0, 7, 8, 0), Some((SysOp::At, SystemReg::S1e1r)));
        assert_eq!(SystemReg::sys_operation(0, 8, 3, 0), Some((SysOp::Tlbi, SystemReg::Vmalle1is)));
        assert_eq!(SystemReg::sys_operation(1, 7, 4, 1), None);
    }

    #[test]
    fn test_barriers_and_pstate() {
        assert_eq!(SystemReg::barrier_option(15).map(SystemReg::name), Some("sy"));
        assert_eq!(SystemReg::barrier_option(11).map(SystemReg::name), Some("ish"));
        assert_eq!(SystemReg::barrier_option(0), None);
        assert_eq!(SystemReg::pstate_field(3, 6).map(SystemReg::name), Some("daifset"));
        assert_eq!(SystemReg::pstate_field(0, 5), Some(SystemReg::Spsel));
        assert_eq!(SystemReg::pstate_field(1, 1), None);
    }
}
