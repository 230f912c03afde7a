//! Static mnemonic registry for the RV32I(+M) subset: one descriptor
//! per mnemonic, grouped into seven disjoint per-format tables. Decode
//! matches (opcode, funct3, funct7) exactly; entries without funct7
//! (the loads, jalr) match on opcode+funct3 alone.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstrDesc {
    pub mnemonic: &'static str,
    pub opcode: &'static str,
    pub funct3: Option<&'static str>,
    pub funct7: Option<&'static str>,
}

const fn desc(
    mnemonic: &'static str,
    opcode: &'static str,
    funct3: Option<&'static str>,
    funct7: Option<&'static str>,
) -> InstrDesc {
    InstrDesc {
        mnemonic,
        opcode,
        funct3,
        funct7,
    }
}

pub const R_TABLE: &[InstrDesc] = &[
    desc("add", "0110011", Some("000"), Some("0000000")),
    desc("sub", "0110011", Some("000"), Some("0100000")),
    desc("xor", "0110011", Some("100"), Some("0000000")),
    desc("or", "0110011", Some("110"), Some("0000000")),
    desc("and", "0110011", Some("111"), Some("0000000")),
    desc("sll", "0110011", Some("001"), Some("0000000")),
    desc("srl", "0110011", Some("101"), Some("0000000")),
    desc("sra", "0110011", Some("101"), Some("0100000")),
    desc("slt", "0110011", Some("010"), Some("0000000")),
    desc("sltu", "0110011", Some("011"), Some("0000000")),
    desc("mul", "0110011", Some("000"), Some("0000001")),
    desc("mulh", "0110011", Some("001"), Some("0000001")),
    desc("mulhsu", "0110011", Some("010"), Some("0000001")),
    desc("mulhu", "0110011", Some("011"), Some("0000001")),
    desc("div", "0110011", Some("100"), Some("0000001")),
    desc("divu", "0110011", Some("101"), Some("0000001")),
    desc("rem", "0110011", Some("110"), Some("0000001")),
    desc("remu", "0110011", Some("111"), Some("0000001")),
];

// Arithmetic-immediate and load rows share this table but use
// different token layouts (rd, rs1, imm vs rd, imm(rs1)).
pub const I_TABLE: &[InstrDesc] = &[
    desc("addi", "0010011", Some("000"), Some("0000000")),
    desc("xori", "0010011", Some("100"), Some("0000000")),
    desc("ori", "0010011", Some("110"), Some("0000000")),
    desc("andi", "0010011", Some("111"), Some("0000000")),
    desc("slli", "0010011", Some("001"), Some("0000000")),
    desc("srli", "0010011", Some("101"), Some("0000000")),
    desc("srai", "0010011", Some("101"), Some("0100000")),
    desc("slti", "0010011", Some("010"), Some("0000000")),
    desc("sltiu", "0010011", Some("011"), Some("0000000")),
    desc("lb", "0000011", Some("000"), None),
    desc("lh", "0000011", Some("001"), None),
    desc("lw", "0000011", Some("010"), None),
    desc("lbu", "0000011", Some("100"), None),
    desc("lhu", "0000011", Some("101"), None),
];

pub const S_TABLE: &[InstrDesc] = &[
    desc("sb", "0100011", Some("000"), None),
    desc("sh", "0100011", Some("001"), None),
    desc("sw", "0100011", Some("010"), None),
];

pub const B_TABLE: &[InstrDesc] = &[
    desc("beq", "1100011", Some("000"), None),
    desc("bne", "1100011", Some("001"), None),
    desc("blt", "1100011", Some("100"), None),
    desc("bge", "1100011", Some("101"), None),
    desc("bltu", "1100011", Some("110"), None),
    desc("bgeu", "1100011", Some("111"), None),
];

pub const U_TABLE: &[InstrDesc] = &[
    desc("lui", "0110111", None, None),
    desc("auipc", "0010111", None, None),
];

pub const J_TABLE: &[InstrDesc] = &[desc("jal", "1101111", None, None)];

pub const SPECIAL_I_TABLE: &[InstrDesc] = &[
    desc("jalr", "1100111", Some("000"), None),
    desc("ecall", "1110011", Some("000"), None),
    desc("ebreak", "1110011", Some("000"), None),
];

/// The six RV32I encodings plus the jalr/ecall/ebreak subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    R,
    I,
    S,
    B,
    SpecialI,
    U,
    J,
}

fn find(table: &'static [InstrDesc], mnemonic: &str) -> Option<&'static InstrDesc> {
    table.iter().find(|d| d.mnemonic == mnemonic)
}

/// Classify a mnemonic with a single lookup across all format tables.
/// Order mirrors the encoder chain: special-I is tried before the
/// generic I/J families because their opcode spaces overlap.
pub fn classify(mnemonic: &str) -> Option<(Format, &'static InstrDesc)> {
    if let Some(d) = find(R_TABLE, mnemonic) {
        return Some((Format::R, d));
    }
    if let Some(d) = find(I_TABLE, mnemonic) {
        return Some((Format::I, d));
    }
    if let Some(d) = find(S_TABLE, mnemonic) {
        return Some((Format::S, d));
    }
    if let Some(d) = find(B_TABLE, mnemonic) {
        return Some((Format::B, d));
    }
    if let Some(d) = find(SPECIAL_I_TABLE, mnemonic) {
        return Some((Format::SpecialI, d));
    }
    if let Some(d) = find(U_TABLE, mnemonic) {
        return Some((Format::U, d));
    }
    if let Some(d) = find(J_TABLE, mnemonic) {
        return Some((Format::J, d));
    }
    None
}

fn all_tables() -> impl Iterator<Item = &'static InstrDesc> {
    R_TABLE
        .iter()
        .chain(I_TABLE)
        .chain(S_TABLE)
        .chain(B_TABLE)
        .chain(U_TABLE)
        .chain(J_TABLE)
        .chain(SPECIAL_I_TABLE)
}

/// Fast mnemonic-membership test used by editor callers for per-line
/// validity indicators.
pub fn is_valid_instruction(line: &str) -> bool {
    let mnemonic = match crate::encode::tokenize(line).first() {
        Some(&m) => m,
        None => return false,
    };
    classify(mnemonic).is_some()
}

fn opcode_is_known(candidate: &str) -> bool {
    all_tables().any(|d| d.opcode == candidate)
}

/// Opcode-membership test on a (possibly partial) binary line: keeps
/// only 0/1 characters and checks the trailing 7 bits.
pub fn is_valid_binary(bin: &str) -> bool {
    let clean: String = bin.chars().filter(|c| *c == '0' || *c == '1').collect();
    if clean.is_empty() {
        return false;
    }
    let tail = if clean.len() > 7 {
        clean[clean.len() - 7..].to_string()
    } else {
        format!("{:0>7}", clean)
    };
    opcode_is_known(&tail)
}

/// Opcode-membership test on a hexadecimal line.
pub fn is_valid_hex(hex: &str) -> bool {
    let clean: String = hex.chars().filter(|c| c.is_ascii_hexdigit()).collect();
    if clean.is_empty() {
        return false;
    }
    let mut bits = String::with_capacity(clean.len() * 4);
    for c in clean.chars() {
        let nibble = c.to_digit(16).unwrap_or(0);
        bits.push_str(&format!("{nibble:04b}"));
    }
    let tail = if bits.len() > 7 {
        bits[bits.len() - 7..].to_string()
    } else {
        format!("{:0>7}", bits)
    };
    opcode_is_known(&tail)
}
