//! J-type: `imm[20] imm[10:1] imm[11] imm[19:12] rd(5) opcode(7)`,
//! covering `jal`'s 21-bit signed offset. Same byte/unit-addressed
//! duality as the B format.

use std::collections::HashMap;

use crate::encode::b_type::resolve_offset;
use crate::encode::dispatch::normalize_bits;
use crate::immediate::{field_to_register, sign_extend, to_bits};
use crate::registers::register_to_binary;
use crate::tables::{InstrDesc, J_TABLE};
use crate::translator::AddressWidth;

pub fn encode(
    tokens: &[&str],
    d: &InstrDesc,
    width: AddressWidth,
    labels: Option<&HashMap<String, usize>>,
    current: Option<usize>,
) -> Option<String> {
    let rd = register_to_binary(tokens.get(1).copied().unwrap_or(""));
    // A jump without a target is rejected outright; the branch encoder
    // tolerates it, jal does not.
    let imm = resolve_offset(tokens.get(2)?, width, labels, current)?;

    let s = match width {
        AddressWidth::Byte => to_bits(imm, 21),
        AddressWidth::Unit => to_bits(imm, 20),
    };
    let imm20 = &s[0..1];
    let imm19_12 = &s[1..9];
    let imm11 = &s[9..10];
    let imm10_1 = &s[10..20];

    Some(format!("{imm20}{imm10_1}{imm11}{imm19_12}{rd}{}", d.opcode))
}

pub fn decode(binary: &str, width: AddressWidth) -> Option<String> {
    let padded = normalize_bits(binary)?;
    let opcode = &padded[25..32];
    let entry = J_TABLE.iter().find(|d| d.opcode == opcode)?;

    let rd = &padded[20..25];
    let imm20 = &padded[0..1];
    let imm10_1 = &padded[1..11];
    let imm11 = &padded[11..12];
    let imm19_12 = &padded[12..20];

    let mut rebuilt = format!("{imm20}{imm19_12}{imm11}{imm10_1}");
    if width == AddressWidth::Byte {
        rebuilt.push('0');
    }
    let imm = sign_extend(&rebuilt)?;

    Some(format!("{} {}, {imm}", entry.mnemonic, field_to_register(rd)?))
}
