//! The special I-type subtype: `jalr` shares the I layout with three
//! accepted operand spellings (`rd, imm, rs1`; `rd, imm(rs1)`;
//! `rd, rs1`), while `ecall`/`ebreak` are fixed 32-bit literals.
//! Tried before the generic I/J families because the opcode spaces
//! are not fully disjoint.

use crate::encode::dispatch::normalize_bits;
use crate::immediate::{encode_imm12, field_to_register, parse_immediate, sign_extend};
use crate::registers::register_to_binary;
use crate::tables::InstrDesc;

const JALR_OPCODE: &str = "1100111";
const ECALL: &str = "00000000000000000000000001110011";
const EBREAK: &str = "00000000000100000000000001110011";

pub fn encode(tokens: &[&str], d: &InstrDesc) -> Option<String> {
    match d.mnemonic {
        "ecall" => return Some(ECALL.to_string()),
        "ebreak" => return Some(EBREAK.to_string()),
        "jalr" => {}
        _ => return None,
    }

    let rd = register_to_binary(tokens.get(1).copied().unwrap_or(""));
    let mut imm = 0i32;
    let mut rs1 = String::from("00000");

    if tokens.len() >= 4 {
        // jalr rd, imm, rs1 — also what jalr rd, imm(rs1) tokenizes to
        imm = parse_immediate(tokens[2]);
        rs1 = register_to_binary(tokens[3]);
    } else if tokens.len() == 3 {
        // jalr rd, rs1 with implicit zero immediate
        rs1 = register_to_binary(tokens[2]);
    }

    let imm_bin = encode_imm12(imm);
    let funct3 = d.funct3?;
    Some(format!("{imm_bin}{rs1}{funct3}{rd}{}", d.opcode))
}

pub fn decode(binary: &str) -> Option<String> {
    let padded = normalize_bits(binary)?;
    if padded == ECALL {
        return Some("ecall".to_string());
    }
    if padded == EBREAK {
        return Some("ebreak".to_string());
    }

    let opcode = &padded[25..32];
    let funct3 = &padded[17..20];
    if opcode != JALR_OPCODE || funct3 != "000" {
        return None;
    }

    let rd = &padded[20..25];
    let rs1 = &padded[12..17];
    let imm = sign_extend(&padded[0..12])?;

    Some(format!(
        "jalr {}, {imm}({})",
        field_to_register(rd)?,
        field_to_register(rs1)?
    ))
}
