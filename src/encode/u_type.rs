//! U-type: `imm[31:12](20) rd(5) opcode(7)`. The immediate is stored
//! as the raw upper-20-bit magnitude; callers supply the already
//! adjusted value.

use crate::encode::dispatch::normalize_bits;
use crate::immediate::{bits_to_u32, field_to_register, parse_immediate, to_bits};
use crate::registers::register_to_binary;
use crate::tables::{InstrDesc, U_TABLE};

pub fn encode(tokens: &[&str], d: &InstrDesc) -> Option<String> {
    let rd = register_to_binary(tokens.get(1).copied().unwrap_or(""));
    let imm = tokens.get(2).map(|t| parse_immediate(t)).unwrap_or(0);
    let imm_bin = to_bits(imm, 20);
    Some(format!("{imm_bin}{rd}{}", d.opcode))
}

pub fn decode(binary: &str) -> Option<String> {
    let padded = normalize_bits(binary)?;
    let opcode = &padded[25..32];
    let rd = &padded[20..25];
    let imm_bin = &padded[0..20];

    let entry = U_TABLE.iter().find(|d| d.opcode == opcode)?;
    let imm = bits_to_u32(imm_bin)?;

    Some(format!("{} {}, {imm}", entry.mnemonic, field_to_register(rd)?))
}
