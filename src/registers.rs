use crate::ParseError;

/// Map an ABI register name to its index. `fp` aliases `s0`.
fn abi_index(name: &str) -> Option<u8> {
    let n = match name {
        "zero" => 0,
        "ra" => 1,
        "sp" => 2,
        "gp" => 3,
        "tp" => 4,
        "t0" => 5,
        "t1" => 6,
        "t2" => 7,
        "s0" | "fp" => 8,
        "s1" => 9,
        "a0" => 10,
        "a1" => 11,
        "a2" => 12,
        "a3" => 13,
        "a4" => 14,
        "a5" => 15,
        "a6" => 16,
        "a7" => 17,
        "s2" => 18,
        "s3" => 19,
        "s4" => 20,
        "s5" => 21,
        "s6" => 22,
        "s7" => 23,
        "s8" => 24,
        "s9" => 25,
        "s10" => 26,
        "s11" => 27,
        "t3" => 28,
        "t4" => 29,
        "t5" => 30,
        "t6" => 31,
        _ => return None,
    };
    Some(n)
}

/// Resolve `xN` (0..=31) or an ABI alias to a register index.
/// Case-insensitive, surrounding whitespace ignored.
pub fn parse_register(token: &str) -> Option<u8> {
    let t = token.trim().to_ascii_lowercase();
    if let Some(num) = t.strip_prefix('x') {
        if let Ok(n) = num.parse::<u8>() {
            if n < 32 {
                return Some(n);
            }
        }
    }
    abi_index(&t)
}

/// Tolerant resolver: unknown or out-of-range tokens encode as x0.
pub fn register_to_binary(token: &str) -> String {
    format!("{:05b}", parse_register(token).unwrap_or(0))
}

/// Strict variant for callers that want a diagnostic instead of the
/// silent x0 fallback.
pub fn parse_register_strict(token: &str) -> Result<u8, ParseError> {
    parse_register(token).ok_or_else(|| ParseError::BadRegister {
        token: token.to_string(),
    })
}
