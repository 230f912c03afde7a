use std::collections::HashMap;

use crate::encode::{b_type, i_type, j_type, r_type, s_type, special_i, u_type};
use crate::tables::{classify, Format};
use crate::translator::AddressWidth;

/// Split a source line on whitespace, commas and parentheses. The
/// first token is always the mnemonic; `imm(rs1)` operands fall apart
/// into separate immediate and register tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.trim()
        .split(|c: char| c.is_whitespace() || c == ',' || c == '(' || c == ')')
        .filter(|t| !t.is_empty())
        .collect()
}

/// Left-pad a bit string to 32 characters, keeping the trailing 32 if
/// the input is longer. Returns None on anything but 0/1 digits.
/// Every per-format decoder runs this first, so short or malformed
/// input is rejected before any field slicing.
pub(crate) fn normalize_bits(binary: &str) -> Option<String> {
    let trimmed = binary.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    if trimmed.len() >= 32 {
        Some(trimmed[trimmed.len() - 32..].to_string())
    } else {
        Some(format!("{trimmed:0>32}"))
    }
}

/// Encode one assembly line into a 32-bit binary string. The mnemonic
/// is classified once; exactly the matching format encoder runs.
/// `labels`/`current` are supplied only during the back-patch pass and
/// only matter to the B/J encoders.
pub fn encode_line(
    line: &str,
    width: AddressWidth,
    labels: Option<&HashMap<String, usize>>,
    current: Option<usize>,
) -> Option<String> {
    let tokens = tokenize(line);
    let mnemonic = tokens.first()?;
    let (format, d) = classify(mnemonic)?;
    match format {
        Format::R => r_type::encode(&tokens, d),
        Format::I => i_type::encode(&tokens, d),
        Format::S => s_type::encode(&tokens, d),
        Format::B => b_type::encode(&tokens, d, width, labels, current),
        Format::SpecialI => special_i::encode(&tokens, d),
        Format::U => u_type::encode(&tokens, d),
        Format::J => j_type::encode(&tokens, d, width, labels, current),
    }
}

/// Decode a binary word back to assembly text. Decoders run in the
/// same first-match-wins order as the encoder chain; special-I goes
/// before the generic I/J families.
pub fn decode_word(binary: &str, width: AddressWidth) -> Option<String> {
    r_type::decode(binary)
        .or_else(|| i_type::decode(binary))
        .or_else(|| s_type::decode(binary))
        .or_else(|| b_type::decode(binary, width))
        .or_else(|| special_i::decode(binary))
        .or_else(|| u_type::decode(binary))
        .or_else(|| j_type::decode(binary, width))
}
