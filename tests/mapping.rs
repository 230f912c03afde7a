use pretty_assertions::assert_eq;
use rv32i_rs::translator::{
    binary_to_riscv, no_conversion, riscv_to_binary, AddressWidth, TranslationResult,
};

fn check_inverse(result: &TranslationResult) {
    assert_eq!(result.output.len(), result.output_to_editor.len());
    for (out, &editor) in result.output_to_editor.iter().enumerate() {
        assert_eq!(result.editor_to_output[editor], out as isize);
    }
}

#[test]
fn blank_lines_map_to_nothing() {
    let lines = ["", "add x1, x2, x3", "   ", "addi x4, x0, 7"];
    let result = riscv_to_binary(&lines, AddressWidth::Byte);

    assert_eq!(result.errors.len(), 0);
    assert_eq!(result.editor_to_output, vec![-1, 0, -1, 1]);
    assert_eq!(result.output_to_editor, vec![1, 3]);
    check_inverse(&result);
}

#[test]
fn malformed_line_does_not_abort_the_batch() {
    let lines = ["add x1, x2, x3", "frobnicate x1", "addi x4, x0, 7"];
    let result = riscv_to_binary(&lines, AddressWidth::Byte);

    assert_eq!(result.output.len(), 2);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].line, 2);
    assert_eq!(result.errors[0].message, "Invalid instruction");
    assert_eq!(result.editor_to_output, vec![0, -1, 1]);
    check_inverse(&result);
}

#[test]
fn every_line_kind_at_once() {
    let lines = [
        "top:",
        "",
        "addi x1, x0, 1",
        "bogus",
        "beq x1, x0, top",
        "",
    ];
    let result = riscv_to_binary(&lines, AddressWidth::Byte);

    assert_eq!(result.output.len(), 2);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.editor_to_output, vec![-1, -1, 0, -1, 1, -1]);
    assert_eq!(result.output_to_editor, vec![2, 4]);
    check_inverse(&result);
}

#[test]
fn disassembly_keeps_the_same_contract() {
    let lines = [
        "00000000001100010000000010110011",
        "not binary",
        "",
        "00000000101000000000001010010011",
    ];
    let result = binary_to_riscv(&lines, AddressWidth::Byte);

    assert_eq!(result.output, vec!["add x1, x2, x3", "addi x5, x0, 10"]);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].line, 2);
    assert_eq!(
        result.errors[0].message,
        "Invalid or incomplete binary instruction"
    );
    assert_eq!(result.editor_to_output, vec![0, -1, -1, 1]);
    check_inverse(&result);
}

#[test]
fn identity_pass_maps_one_to_one() {
    let lines = ["anything", "", "at all"];
    let result = no_conversion(&lines);

    assert_eq!(result.output, vec!["anything", "", "at all"]);
    assert_eq!(result.editor_to_output, vec![0, 1, 2]);
    assert_eq!(result.output_to_editor, vec![0, 1, 2]);
    assert_eq!(result.errors.len(), 0);
    check_inverse(&result);
}
