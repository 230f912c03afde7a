//! I-type: `imm12(12) rs1(5) funct3(3) rd(5) opcode(7)`.
//!
//! Two token layouts share this table: arithmetic (`rd, rs1, imm`,
//! opcode 0010011) and loads (`rd, imm(rs1)`, opcode 0000011). The
//! shift instructions pack `funct7 + shamt` into the immediate field.

use crate::encode::dispatch::normalize_bits;
use crate::immediate::{encode_imm12, field_to_register, parse_immediate, sign_extend, to_bits};
use crate::registers::register_to_binary;
use crate::tables::{InstrDesc, I_TABLE};

const ARITH_OPCODE: &str = "0010011";
const LOAD_OPCODE: &str = "0000011";

fn is_shift(mnemonic: &str) -> bool {
    matches!(mnemonic, "slli" | "srli" | "srai")
}

pub fn encode(tokens: &[&str], d: &InstrDesc) -> Option<String> {
    let rd = register_to_binary(tokens.get(1).copied().unwrap_or(""));
    let mut rs1 = String::from("00000");
    let mut imm = 0i32;

    if d.opcode == ARITH_OPCODE {
        rs1 = register_to_binary(tokens.get(2).copied().unwrap_or(""));
        if let Some(t) = tokens.get(3) {
            imm = parse_immediate(t);
        }
    } else if d.opcode == LOAD_OPCODE {
        if let Some(t) = tokens.get(2) {
            imm = parse_immediate(t);
        }
        if let Some(t) = tokens.get(3) {
            rs1 = register_to_binary(t);
        }
    }

    let funct3 = d.funct3?;
    let imm_bin = if is_shift(d.mnemonic) {
        let shamt = imm & 0b11111;
        format!("{}{}", d.funct7.unwrap_or("0000000"), to_bits(shamt, 5))
    } else {
        encode_imm12(imm)
    };

    Some(format!("{imm_bin}{rs1}{funct3}{rd}{}", d.opcode))
}

pub fn decode(binary: &str) -> Option<String> {
    let padded = normalize_bits(binary)?;
    let opcode = &padded[25..32];
    let rd = &padded[20..25];
    let funct3 = &padded[17..20];
    let rs1 = &padded[12..17];
    let imm_bin = &padded[0..12];
    let funct7 = &imm_bin[0..7];
    let shamt = &imm_bin[7..12];

    // Exact match on opcode+funct3+funct7 first; relaxed to
    // opcode+funct3 when funct7 does not resolve (loads carry none).
    let entry = I_TABLE
        .iter()
        .find(|d| {
            d.opcode == opcode
                && d.funct3.map_or(true, |f| f == funct3)
                && d.funct7.map_or(true, |f| f == funct7)
        })
        .or_else(|| {
            I_TABLE
                .iter()
                .find(|d| d.opcode == opcode && d.funct3 == Some(funct3))
        })?;

    let rd = field_to_register(rd)?;
    let rs1 = field_to_register(rs1)?;

    let imm = if is_shift(entry.mnemonic) {
        sign_extend(&format!("0{shamt}"))?
    } else {
        sign_extend(imm_bin)?
    };

    if entry.opcode == LOAD_OPCODE {
        Some(format!("{} {rd}, {imm}({rs1})", entry.mnemonic))
    } else {
        Some(format!("{} {rd}, {rs1}, {imm}", entry.mnemonic))
    }
}
