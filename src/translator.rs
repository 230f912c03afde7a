//! Line-batch translation between RISC-V assembly, 32-bit binary
//! strings and hex words, with two-pass label resolution on assembly.
//!
//! Every operation takes a snapshot of the input lines and returns a
//! fresh [`TranslationResult`]; no state survives a call. Per-line
//! failures become error entries and the batch always runs to the end.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::encode::{decode_word, encode_line, tokenize};
use crate::immediate::{bits_to_u32, is_numeric};
use crate::tables::{B_TABLE, J_TABLE};

/// What one increment of an instruction address means: four bytes
/// (conventional RISC-V) or one abstract unit. Affects only the B/J
/// branch and jump immediates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressWidth {
    Byte,
    Unit,
}

impl AddressWidth {
    /// Concrete encoding used by callers: a memory width of 8 selects
    /// byte addressing, 32 selects unit addressing.
    pub fn from_memory_width(width: u8) -> Option<Self> {
        match width {
            8 => Some(AddressWidth::Byte),
            32 => Some(AddressWidth::Unit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineError {
    /// 1-based source line number.
    pub line: usize,
    pub message: String,
}

/// Complete output contract of a translation call. `editor_to_output`
/// has one entry per source line (-1 when the line produced nothing);
/// `output_to_editor` is its sparse-to-dense inverse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub output: Vec<String>,
    pub label_map: HashMap<String, usize>,
    pub errors: Vec<LineError>,
    pub editor_to_output: Vec<isize>,
    pub output_to_editor: Vec<usize>,
}

/// Line-scoped accumulator shared by all translation directions.
/// Label indices count emitted instructions, so the current value of
/// `output.len()` is always the next instruction index.
#[derive(Default)]
struct Acc {
    result: TranslationResult,
}

impl Acc {
    fn skip(&mut self) {
        self.result.editor_to_output.push(-1);
    }

    fn emit(&mut self, line_index: usize, text: String) {
        self.result.output.push(text);
        self.result
            .editor_to_output
            .push(self.result.output.len() as isize - 1);
        self.result.output_to_editor.push(line_index);
    }

    fn error(&mut self, line_index: usize, message: impl Into<String>) {
        self.result.errors.push(LineError {
            line: line_index + 1,
            message: message.into(),
        });
        self.result.editor_to_output.push(-1);
    }

    // Pass-2 diagnostics attach to an already-mapped line.
    fn late_error(&mut self, line_index: usize, message: impl Into<String>) {
        self.result.errors.push(LineError {
            line: line_index + 1,
            message: message.into(),
        });
    }

    fn define_label(&mut self, line_index: usize, name: &str) {
        if self.result.label_map.contains_key(name) {
            // First definition wins; the duplicate is only reported.
            self.result.errors.push(LineError {
                line: line_index + 1,
                message: format!("Duplicated label \"{name}\""),
            });
        } else {
            let index = self.result.output.len();
            debug!(label = name, index, "registered label");
            self.result.label_map.insert(name.to_string(), index);
        }
        self.result.editor_to_output.push(-1);
    }
}

/// `identifier:` with nothing else on the line.
fn label_name(trimmed: &str) -> Option<&str> {
    let name = trimmed.strip_suffix(':')?;
    let mut chars = name.chars();
    let first = chars.next()?;
    if first != '_' && !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) {
        Some(name)
    } else {
        None
    }
}

fn is_branch_or_jump(mnemonic: &str) -> bool {
    B_TABLE.iter().chain(J_TABLE).any(|d| d.mnemonic == mnemonic)
}

struct Pending {
    line_index: usize,
    instruction: String,
}

/// Assemble RISC-V source lines to 32-bit binary strings. Pass 1
/// collects labels and encodes every line (label targets provisionally
/// read as offset 0); pass 2 back-patches the queued branches and
/// jumps in place by output index.
pub fn riscv_to_binary(lines: &[&str], width: AddressWidth) -> TranslationResult {
    let mut acc = Acc::default();
    let mut pending: Vec<Pending> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            acc.skip();
            continue;
        }
        if let Some(name) = label_name(trimmed) {
            acc.define_label(i, name);
            continue;
        }

        let tokens = tokenize(trimmed);
        let mnemonic = tokens.first().copied().unwrap_or("");
        let target = tokens.get(3).or_else(|| tokens.get(2)).copied();
        if is_branch_or_jump(mnemonic) {
            if let Some(t) = target {
                if !is_numeric(t) {
                    pending.push(Pending {
                        line_index: i,
                        instruction: trimmed.to_string(),
                    });
                }
            }
        }

        match encode_line(trimmed, width, None, None) {
            Some(binary) => acc.emit(i, binary),
            None => acc.error(i, "Invalid instruction"),
        }
    }

    for p in &pending {
        let tokens = tokenize(&p.instruction);
        let target = tokens.get(3).or_else(|| tokens.get(2)).copied().unwrap_or("");
        let output_index = match acc.result.editor_to_output.get(p.line_index) {
            Some(&idx) if idx >= 0 => idx as usize,
            _ => continue,
        };
        if !acc.result.label_map.contains_key(target) {
            acc.late_error(p.line_index, format!("Undefined label \"{target}\""));
            continue;
        }
        let resolved = encode_line(
            &p.instruction,
            width,
            Some(&acc.result.label_map),
            Some(output_index),
        );
        match resolved {
            Some(binary) => {
                debug!(line = p.line_index + 1, output_index, "back-patched target");
                acc.result.output[output_index] = binary;
            }
            None => acc.late_error(p.line_index, "Could not resolve label"),
        }
    }

    acc.result
}

/// Disassemble binary lines to RISC-V text. Single pass; label marker
/// lines are honored the same way assembly honors them.
pub fn binary_to_riscv(lines: &[&str], width: AddressWidth) -> TranslationResult {
    let mut acc = Acc::default();

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            acc.skip();
            continue;
        }
        if let Some(name) = label_name(trimmed) {
            acc.define_label(i, name);
            continue;
        }
        match decode_word(trimmed, width) {
            Some(text) => acc.emit(i, text),
            None => acc.error(i, "Invalid or incomplete binary instruction"),
        }
    }

    acc.result
}

/// Canonicalize assembly formatting by encoding then decoding each
/// line. Idempotent over its own output.
pub fn riscv_to_riscv(lines: &[&str], width: AddressWidth) -> TranslationResult {
    let mut acc = Acc::default();

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            acc.skip();
            continue;
        }
        if let Some(name) = label_name(trimmed) {
            acc.define_label(i, name);
            continue;
        }
        let binary = match encode_line(trimmed, width, None, None) {
            Some(b) => b,
            None => {
                acc.error(i, "Invalid RISC-V instruction");
                continue;
            }
        };
        match decode_word(&binary, width) {
            Some(text) => acc.emit(i, text),
            None => acc.error(i, "Could not normalize instruction"),
        }
    }

    acc.result
}

/// Round-trip binary lines through decode and re-encode.
pub fn binary_to_binary(lines: &[&str], width: AddressWidth) -> TranslationResult {
    let mut acc = Acc::default();

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            acc.skip();
            continue;
        }
        let decoded = match decode_word(trimmed, width) {
            Some(t) => t,
            None => {
                acc.error(i, "Invalid or incomplete binary instruction");
                continue;
            }
        };
        match encode_line(&decoded, width, None, None) {
            Some(binary) => acc.emit(i, binary),
            None => acc.error(i, "Could not reassemble binary instruction"),
        }
    }

    acc.result
}

/// Round-trip hex words through decode and re-encode.
pub fn hex_to_hex(lines: &[&str], width: AddressWidth) -> TranslationResult {
    let mut acc = Acc::default();

    for (i, line) in lines.iter().enumerate() {
        let trimmed = strip_hex_prefix(line.trim());
        if trimmed.is_empty() {
            acc.skip();
            continue;
        }
        let word = match u32::from_str_radix(trimmed, 16) {
            Ok(w) => w,
            Err(_) => {
                acc.error(i, "Invalid hex string");
                continue;
            }
        };
        let decoded = match decode_word(&format!("{word:032b}"), width) {
            Some(t) => t,
            None => {
                acc.error(i, "Invalid or incomplete hex instruction");
                continue;
            }
        };
        let reassembled = encode_line(&decoded, width, None, None)
            .and_then(|b| bits_to_u32(&b));
        match reassembled {
            Some(w) => acc.emit(i, format!("0x{w:08x}")),
            None => acc.error(i, "Could not reassemble hex instruction"),
        }
    }

    acc.result
}

/// Pure 32-bit reinterpretation of binary lines as hex words.
pub fn binary_to_hex(lines: &[&str]) -> TranslationResult {
    let mut acc = Acc::default();

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            acc.skip();
            continue;
        }
        match u32::from_str_radix(trimmed, 2) {
            Ok(w) => acc.emit(i, format!("0x{w:08x}")),
            Err(_) => acc.error(i, "Invalid binary string"),
        }
    }

    acc.result
}

/// Pure 32-bit reinterpretation of hex words as binary lines.
pub fn hex_to_binary(lines: &[&str]) -> TranslationResult {
    let mut acc = Acc::default();

    for (i, line) in lines.iter().enumerate() {
        let trimmed = strip_hex_prefix(line.trim());
        if trimmed.is_empty() {
            acc.skip();
            continue;
        }
        match u32::from_str_radix(trimmed, 16) {
            Ok(w) => acc.emit(i, format!("{w:032b}")),
            Err(_) => acc.error(i, "Invalid hexadecimal string"),
        }
    }

    acc.result
}

/// Identity pass with a 1:1 line mapping.
pub fn no_conversion(lines: &[&str]) -> TranslationResult {
    let mut result = TranslationResult {
        output: lines.iter().map(|l| l.to_string()).collect(),
        ..Default::default()
    };
    for i in 0..lines.len() {
        result.editor_to_output.push(i as isize);
        result.output_to_editor.push(i);
    }
    result
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
}
