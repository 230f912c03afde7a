use pretty_assertions::assert_eq;
use rv32i_rs::encode::decode_word;
use rv32i_rs::translator::{riscv_to_binary, AddressWidth};

fn assemble(line: &str) -> String {
    let result = riscv_to_binary(&[line], AddressWidth::Byte);
    assert_eq!(result.errors.len(), 0, "unexpected errors for {line}");
    result.output[0].clone()
}

#[test]
fn r_type_vectors() {
    let cases = [
        ("sub x3, x4, x5", "01000000010100100000000110110011"),
        ("and t0, t1, t2", "00000000011100110111001010110011"),
        ("mul a0, a1, a2", "00000010110001011000010100110011"),
    ];
    for (line, expected) in cases {
        assert_eq!(assemble(line), expected, "{line}");
    }
}

#[test]
fn r_type_decode_renders_numeric_registers() {
    assert_eq!(
        decode_word("01000000010100100000000110110011", AddressWidth::Byte).as_deref(),
        Some("sub x3, x4, x5")
    );
    // ABI names assemble to the same word and come back as xN
    assert_eq!(
        decode_word(&assemble("and t0, t1, t2"), AddressWidth::Byte).as_deref(),
        Some("and x5, x6, x7")
    );
}

#[test]
fn i_type_immediates_are_twos_complement() {
    assert_eq!(assemble("andi x1, x2, 255"), "00001111111100010111000010010011");
    assert_eq!(assemble("addi x5, x0, -1"), "11111111111100000000001010010011");
    assert_eq!(
        decode_word("11111111111100000000001010010011", AddressWidth::Byte).as_deref(),
        Some("addi x5, x0, -1")
    );
}

#[test]
fn shift_instructions_pack_funct7_and_shamt() {
    assert_eq!(assemble("slli x1, x2, 3"), "00000000001100010001000010010011");
    assert_eq!(assemble("srli x1, x2, 4"), "00000000010000010101000010010011");
    assert_eq!(assemble("srai x1, x2, 4"), "01000000010000010101000010010011");

    // funct7 disambiguates srli from srai on decode
    assert_eq!(
        decode_word("00000000010000010101000010010011", AddressWidth::Byte).as_deref(),
        Some("srli x1, x2, 4")
    );
    assert_eq!(
        decode_word("01000000010000010101000010010011", AddressWidth::Byte).as_deref(),
        Some("srai x1, x2, 4")
    );
}

#[test]
fn shamt_masked_to_five_bits() {
    // 35 & 0b11111 == 3
    assert_eq!(assemble("slli x1, x2, 35"), assemble("slli x1, x2, 3"));
}

#[test]
fn hex_immediates_accepted() {
    assert_eq!(assemble("addi x5, x0, 0xA"), assemble("addi x5, x0, 10"));
}

#[test]
fn unknown_register_falls_back_to_x0() {
    assert_eq!(assemble("add x1, x99, x3"), assemble("add x1, x0, x3"));
    assert_eq!(assemble("addi x1, bogus, 1"), assemble("addi x1, x0, 1"));
}

#[test]
fn malformed_immediate_falls_back_to_zero() {
    assert_eq!(assemble("addi x1, x2, banana"), assemble("addi x1, x2, 0"));
}
