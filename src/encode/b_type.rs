//! B-type: `imm[12] imm[10:5] rs2(5) rs1(5) funct3(3) imm[4:1] imm[11] opcode(7)`.
//!
//! The stored immediate depends on the address width. Byte-addressed:
//! a 13-bit signed byte offset whose always-zero bit 0 is never
//! stored. Unit-addressed: the low 12 bits of the raw instruction
//! count offset, no implicit zero, so the sign lands one bit lower.
//! The two layouts are not algebraically equivalent and stay separate.

use std::collections::HashMap;

use crate::encode::dispatch::normalize_bits;
use crate::immediate::{field_to_register, is_numeric, parse_immediate, sign_extend, to_bits};
use crate::registers::register_to_binary;
use crate::tables::{InstrDesc, B_TABLE};
use crate::translator::AddressWidth;

/// Turn a branch/jump target token into a relative offset. With a
/// label map in hand a symbolic target resolves against the current
/// output index (scaled by 4 in byte mode); without one it parses as a
/// plain immediate, degrading to 0 for labels during pass 1.
pub(crate) fn resolve_offset(
    target: &str,
    width: AddressWidth,
    labels: Option<&HashMap<String, usize>>,
    current: Option<usize>,
) -> Option<i32> {
    if !is_numeric(target) {
        if let (Some(map), Some(cur)) = (labels, current) {
            let idx = *map.get(target)?;
            let delta = idx as i32 - cur as i32;
            return Some(match width {
                AddressWidth::Byte => delta * 4,
                AddressWidth::Unit => delta,
            });
        }
    }
    Some(parse_immediate(target))
}

pub fn encode(
    tokens: &[&str],
    d: &InstrDesc,
    width: AddressWidth,
    labels: Option<&HashMap<String, usize>>,
    current: Option<usize>,
) -> Option<String> {
    let rs1 = register_to_binary(tokens.get(1).copied().unwrap_or(""));
    let rs2 = register_to_binary(tokens.get(2).copied().unwrap_or(""));
    let imm = match tokens.get(3) {
        Some(t) => resolve_offset(t, width, labels, current)?,
        None => 0,
    };
    let funct3 = d.funct3?;

    // Both layouts slice the same leading positions; byte mode encodes
    // 13 bits and simply never stores the trailing zero bit.
    let s = match width {
        AddressWidth::Byte => to_bits(imm, 13),
        AddressWidth::Unit => to_bits(imm, 12),
    };
    let imm12 = &s[0..1];
    let imm11 = &s[1..2];
    let imm10_5 = &s[2..8];
    let imm4_1 = &s[8..12];

    Some(format!(
        "{imm12}{imm10_5}{rs2}{rs1}{funct3}{imm4_1}{imm11}{}",
        d.opcode
    ))
}

pub fn decode(binary: &str, width: AddressWidth) -> Option<String> {
    let padded = normalize_bits(binary)?;
    let opcode = &padded[25..32];
    let funct3 = &padded[17..20];
    let rs1 = &padded[12..17];
    let rs2 = &padded[7..12];
    let imm12 = &padded[0..1];
    let imm10_5 = &padded[1..7];
    let imm4_1 = &padded[20..24];
    let imm11 = &padded[24..25];

    let entry = B_TABLE
        .iter()
        .find(|d| d.opcode == opcode && d.funct3 == Some(funct3))?;

    let mut rebuilt = format!("{imm12}{imm11}{imm10_5}{imm4_1}");
    if width == AddressWidth::Byte {
        rebuilt.push('0');
    }
    let imm = sign_extend(&rebuilt)?;

    Some(format!(
        "{} {}, {}, {imm}",
        entry.mnemonic,
        field_to_register(rs1)?,
        field_to_register(rs2)?
    ))
}
