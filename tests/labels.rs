use pretty_assertions::assert_eq;
use rv32i_rs::encode::decode_word;
use rv32i_rs::translator::{riscv_to_binary, AddressWidth};

#[test]
fn forward_label_resolves_in_byte_mode() {
    let lines = [
        "beq x1, x2, target",
        "add x3, x4, x5",
        "target:",
        "addi x6, x0, 1",
    ];
    let result = riscv_to_binary(&lines, AddressWidth::Byte);

    assert_eq!(result.errors.len(), 0);
    assert_eq!(result.output.len(), 3);
    assert_eq!(result.label_map.get("target"), Some(&2));
    // Two instructions ahead, four bytes each.
    assert_eq!(result.output[0], "00000000001000001000010001100011");
    assert_eq!(
        decode_word(&result.output[0], AddressWidth::Byte).as_deref(),
        Some("beq x1, x2, 8")
    );
}

#[test]
fn forward_label_resolves_in_unit_mode() {
    let lines = [
        "beq x1, x2, target",
        "add x3, x4, x5",
        "target:",
        "addi x6, x0, 1",
    ];
    let result = riscv_to_binary(&lines, AddressWidth::Unit);

    assert_eq!(result.errors.len(), 0);
    assert_eq!(result.output[0], "00000000001000001000001001100011");
    assert_eq!(
        decode_word(&result.output[0], AddressWidth::Unit).as_deref(),
        Some("beq x1, x2, 2")
    );
}

#[test]
fn backward_label_gives_negative_offset() {
    let lines = ["loop:", "addi x1, x1, 1", "jal x0, loop"];
    let result = riscv_to_binary(&lines, AddressWidth::Byte);

    assert_eq!(result.errors.len(), 0);
    assert_eq!(result.label_map.get("loop"), Some(&0));
    assert_eq!(
        decode_word(&result.output[1], AddressWidth::Byte).as_deref(),
        Some("jal x0, -4")
    );
}

#[test]
fn label_lines_emit_nothing() {
    let lines = [
        "beq x1, x2, target",
        "add x3, x4, x5",
        "target:",
        "addi x6, x0, 1",
    ];
    let result = riscv_to_binary(&lines, AddressWidth::Byte);

    assert_eq!(result.editor_to_output, vec![0, 1, -1, 2]);
    assert_eq!(result.output_to_editor, vec![0, 1, 3]);
}

#[test]
fn duplicate_label_keeps_first_definition() {
    let lines = ["spot:", "addi x1, x0, 1", "spot:", "jal x0, spot"];
    let result = riscv_to_binary(&lines, AddressWidth::Byte);

    assert_eq!(result.label_map.get("spot"), Some(&0));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].line, 3);
    assert_eq!(result.errors[0].message, "Duplicated label \"spot\"");
    // The jump still resolves, against the first definition.
    assert_eq!(
        decode_word(&result.output[1], AddressWidth::Byte).as_deref(),
        Some("jal x0, -4")
    );
}

#[test]
fn undefined_label_reports_and_keeps_provisional_word() {
    let result = riscv_to_binary(&["beq x1, x2, nowhere"], AddressWidth::Byte);

    assert_eq!(result.output.len(), 1);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].line, 1);
    assert_eq!(result.errors[0].message, "Undefined label \"nowhere\"");
    // Provisional encoding carries offset zero.
    assert_eq!(
        decode_word(&result.output[0], AddressWidth::Byte).as_deref(),
        Some("beq x1, x2, 0")
    );
}

#[test]
fn numeric_targets_bypass_label_resolution() {
    let lines = ["eight:", "beq x1, x2, 8"];
    let result = riscv_to_binary(&lines, AddressWidth::Byte);

    assert_eq!(result.errors.len(), 0);
    assert_eq!(result.output[0], "00000000001000001000010001100011");
}

#[test]
fn label_syntax_is_strict() {
    // A trailing colon alone does not make a label; the line falls
    // through to instruction encoding and fails there.
    let result = riscv_to_binary(&["2bad:"], AddressWidth::Byte);
    assert_eq!(result.output.len(), 0);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "Invalid instruction");
    assert!(result.label_map.is_empty());
}
