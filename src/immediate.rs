use crate::ParseError;

fn parse_signed(token: &str) -> Option<i32> {
    let t = token.trim();
    let (neg, rest) = match t.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };
    let magnitude = if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()?
    } else if rest.is_empty() {
        return None;
    } else {
        rest.parse::<i64>().ok()?
    };
    let v = if neg { -magnitude } else { magnitude };
    Some(v as i32)
}

/// Best-effort immediate parser: optional sign, then `0x` hex or
/// decimal. Malformed tokens degrade to 0.
pub fn parse_immediate(token: &str) -> i32 {
    parse_signed(token).unwrap_or(0)
}

/// Strict variant of [`parse_immediate`].
pub fn parse_immediate_strict(token: &str) -> Result<i32, ParseError> {
    parse_signed(token).ok_or_else(|| ParseError::BadImmediate {
        token: token.to_string(),
    })
}

/// True if a token already carries a numeric branch/jump offset, as
/// opposed to a symbolic label name.
pub fn is_numeric(token: &str) -> bool {
    parse_signed(token).is_some()
}

/// Encode a signed value as a 12-bit two's-complement bit string.
pub fn encode_imm12(value: i32) -> String {
    format!("{:012b}", (value as u32) & 0xFFF)
}

/// Encode the low `width` bits of a signed value, two's complement.
pub fn to_bits(value: i32, width: u32) -> String {
    let mask = if width >= 32 { u32::MAX } else { (1u32 << width) - 1 };
    let masked = (value as u32) & mask;
    format!("{masked:0width$b}", width = width as usize)
}

/// Interpret a bit string as a two's-complement signed value of its
/// own length.
pub fn sign_extend(bits: &str) -> Option<i32> {
    let raw = u32::from_str_radix(bits, 2).ok()?;
    let width = bits.len() as u32;
    if width == 0 || width > 32 {
        return None;
    }
    if width < 32 && bits.as_bytes()[0] == b'1' {
        Some((raw as i64 - (1i64 << width)) as i32)
    } else {
        Some(raw as i32)
    }
}

/// Interpret a bit string as an unsigned value.
pub fn bits_to_u32(bits: &str) -> Option<u32> {
    u32::from_str_radix(bits, 2).ok()
}

/// Render a 5-bit register field as `xN`.
pub fn field_to_register(bits: &str) -> Option<String> {
    Some(format!("x{}", bits_to_u32(bits)?))
}
