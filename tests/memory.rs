use pretty_assertions::assert_eq;
use rv32i_rs::encode::decode_word;
use rv32i_rs::translator::{binary_to_riscv, riscv_to_binary, AddressWidth};

fn assemble(line: &str) -> String {
    let result = riscv_to_binary(&[line], AddressWidth::Byte);
    assert_eq!(result.errors.len(), 0, "unexpected errors for {line}");
    result.output[0].clone()
}

#[test]
fn load_vectors() {
    assert_eq!(assemble("lw x1, 8(x2)"), "00000000100000010010000010000011");
    assert_eq!(assemble("lbu a0, -4(sp)"), "11111111110000010100010100000011");
}

#[test]
fn load_decodes_to_offset_form() {
    assert_eq!(
        decode_word("00000000100000010010000010000011", AddressWidth::Byte).as_deref(),
        Some("lw x1, 8(x2)")
    );
    assert_eq!(
        decode_word(&assemble("lbu a0, -4(sp)"), AddressWidth::Byte).as_deref(),
        Some("lbu x10, -4(x2)")
    );
}

#[test]
fn store_vectors() {
    assert_eq!(assemble("sw x2, 8(x1)"), "00000000001000001010010000100011");
    assert_eq!(assemble("sb t0, -1(t1)"), "11111110010100110000111110100011");
}

#[test]
fn store_decode_sign_extends() {
    assert_eq!(
        decode_word("00000000001000001010010000100011", AddressWidth::Byte).as_deref(),
        Some("sw x2, 8(x1)")
    );
    assert_eq!(
        decode_word("11111110010100110000111110100011", AddressWidth::Byte).as_deref(),
        Some("sb x5, -1(x6)")
    );
}

#[test]
fn store_accepts_flat_token_order() {
    // "rs2, imm, rs1" encodes identically to "rs2, imm(rs1)"
    assert_eq!(assemble("sw x2, 8, x1"), assemble("sw x2, 8(x1)"));
}

#[test]
fn load_store_round_trip() {
    let lines = ["lb x1, -128(x2)", "lhu x3, 16(x4)", "sh x5, -32(x6)"];
    let assembled = riscv_to_binary(&lines, AddressWidth::Byte);
    assert_eq!(assembled.errors.len(), 0);
    let words: Vec<&str> = assembled.output.iter().map(|s| s.as_str()).collect();
    let back = binary_to_riscv(&words, AddressWidth::Byte);
    assert_eq!(back.errors.len(), 0);
    assert_eq!(
        back.output,
        vec!["lb x1, -128(x2)", "lhu x3, 16(x4)", "sh x5, -32(x6)"]
    );
}
