use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use rv32i_rs::translator::{
    self, AddressWidth, TranslationResult,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "RV32I assembler/disassembler CLI", long_about = None)]
struct Cli {
    /// Input file, one instruction (or label) per line
    #[arg(value_name = "FILE")]
    input: String,
    /// Address width for branch/jump offsets
    #[arg(long, value_enum, default_value_t = Width::Byte)]
    width: Width,
    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write output to file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<String>,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assemble RISC-V source lines to 32-bit binary strings
    Assemble {
        /// Export the resolved label map to JSON (Vec<{ name, index }>)
        #[arg(long, value_name = "FILE")]
        labels_out: Option<String>,
    },
    /// Disassemble 32-bit binary lines to RISC-V source
    Disassemble,
    /// Reinterpret binary lines as zero-padded hex words
    ToHex,
    /// Reinterpret hex words as 32-bit binary lines
    FromHex,
    /// Round-trip lines through the codec to canonical formatting
    Normalize {
        #[arg(long, value_enum, default_value_t = Lang::Riscv)]
        lang: Lang,
    },
    /// Identity pass with a 1:1 line mapping
    Passthrough,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Width {
    /// Conventional RISC-V: one instruction spans 4 byte addresses
    Byte,
    /// One instruction spans one addressable unit
    Unit,
}

impl From<Width> for AddressWidth {
    fn from(w: Width) -> Self {
        match w {
            Width::Byte => AddressWidth::Byte,
            Width::Unit => AddressWidth::Unit,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Lang {
    Riscv,
    Binary,
    Hex,
}

#[derive(Debug, Clone, serde::Serialize)]
struct LabelKV {
    name: String,
    index: usize,
}

fn render_text(result: &TranslationResult) -> (String, String) {
    let mut out = String::new();
    for line in &result.output {
        out.push_str(line);
        out.push('\n');
    }
    let mut diag = String::new();
    for e in &result.errors {
        diag.push_str(&format!("line {}: {}\n", e.line, e.message));
    }
    (out, diag)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let text = std::fs::read_to_string(&cli.input)?;
    let lines: Vec<&str> = text.lines().collect();
    let width: AddressWidth = cli.width.into();

    let result = match &cli.cmd {
        Command::Assemble { labels_out } => {
            let result = translator::riscv_to_binary(&lines, width);
            if let Some(path) = labels_out {
                let mut kvs: Vec<LabelKV> = result
                    .label_map
                    .iter()
                    .map(|(name, index)| LabelKV {
                        name: name.clone(),
                        index: *index,
                    })
                    .collect();
                kvs.sort_by_key(|kv| kv.index);
                std::fs::write(path, serde_json::to_string_pretty(&kvs)?)?;
            }
            result
        }
        Command::Disassemble => translator::binary_to_riscv(&lines, width),
        Command::ToHex => translator::binary_to_hex(&lines),
        Command::FromHex => translator::hex_to_binary(&lines),
        Command::Normalize { lang } => match lang {
            Lang::Riscv => translator::riscv_to_riscv(&lines, width),
            Lang::Binary => translator::binary_to_binary(&lines, width),
            Lang::Hex => translator::hex_to_hex(&lines, width),
        },
        Command::Passthrough => translator::no_conversion(&lines),
    };

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)?;
            if let Some(path) = &cli.out {
                std::fs::write(path, json)?;
            } else {
                println!("{json}");
            }
        }
        OutputFormat::Text => {
            let (out, diag) = render_text(&result);
            if let Some(path) = &cli.out {
                std::fs::write(path, out)?;
            } else {
                print!("{out}");
            }
            eprint!("{diag}");
        }
    }

    Ok(())
}
