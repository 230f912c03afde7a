//! S-type: `imm[11:5](7) rs2(5) rs1(5) funct3(3) imm[4:0](5) opcode(7)`,
//! token order `rs2, imm(rs1)` or `rs2, imm, rs1`.

use crate::encode::dispatch::normalize_bits;
use crate::immediate::{encode_imm12, field_to_register, parse_immediate, sign_extend};
use crate::registers::register_to_binary;
use crate::tables::{InstrDesc, S_TABLE};

pub fn encode(tokens: &[&str], d: &InstrDesc) -> Option<String> {
    let rs2 = register_to_binary(tokens.get(1).copied().unwrap_or(""));
    let mut imm = 0i32;
    let mut rs1 = String::from("00000");

    if let Some(t) = tokens.get(2) {
        imm = parse_immediate(t);
    }
    if let Some(t) = tokens.get(3) {
        rs1 = register_to_binary(t);
    }

    let imm_bin = encode_imm12(imm);
    let imm_high = &imm_bin[0..7];
    let imm_low = &imm_bin[7..12];
    let funct3 = d.funct3?;

    Some(format!("{imm_high}{rs2}{rs1}{funct3}{imm_low}{}", d.opcode))
}

pub fn decode(binary: &str) -> Option<String> {
    let padded = normalize_bits(binary)?;
    let opcode = &padded[25..32];
    let funct3 = &padded[17..20];
    let rs1 = &padded[12..17];
    let rs2 = &padded[7..12];
    let imm_high = &padded[0..7];
    let imm_low = &padded[20..25];

    let entry = S_TABLE
        .iter()
        .find(|d| d.opcode == opcode && d.funct3 == Some(funct3))?;

    let imm = sign_extend(&format!("{imm_high}{imm_low}"))?;

    Some(format!(
        "{} {}, {imm}({})",
        entry.mnemonic,
        field_to_register(rs2)?,
        field_to_register(rs1)?
    ))
}
