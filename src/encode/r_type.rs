//! R-type: `funct7(7) rs2(5) rs1(5) funct3(3) rd(5) opcode(7)`.

use crate::encode::dispatch::normalize_bits;
use crate::immediate::field_to_register;
use crate::registers::register_to_binary;
use crate::tables::{InstrDesc, R_TABLE};

pub fn encode(tokens: &[&str], d: &InstrDesc) -> Option<String> {
    let rd = register_to_binary(tokens.get(1).copied().unwrap_or(""));
    let rs1 = register_to_binary(tokens.get(2).copied().unwrap_or(""));
    let rs2 = register_to_binary(tokens.get(3).copied().unwrap_or(""));
    let funct3 = d.funct3?;
    let funct7 = d.funct7?;
    Some(format!("{funct7}{rs2}{rs1}{funct3}{rd}{}", d.opcode))
}

pub fn decode(binary: &str) -> Option<String> {
    let padded = normalize_bits(binary)?;
    let opcode = &padded[25..32];
    let funct3 = &padded[17..20];
    let funct7 = &padded[0..7];
    let rd = &padded[20..25];
    let rs1 = &padded[12..17];
    let rs2 = &padded[7..12];

    let entry = R_TABLE.iter().find(|d| {
        d.opcode == opcode
            && d.funct3.map_or(true, |f| f == funct3)
            && d.funct7.map_or(true, |f| f == funct7)
    })?;

    Some(format!(
        "{} {}, {}, {}",
        entry.mnemonic,
        field_to_register(rd)?,
        field_to_register(rs1)?,
        field_to_register(rs2)?
    ))
}
