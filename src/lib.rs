pub mod immediate;
pub mod registers;
pub mod tables;
pub mod translator;

pub mod encode {
    pub mod b_type;
    pub mod i_type;
    pub mod j_type;
    pub mod r_type;
    pub mod s_type;
    pub mod special_i;
    pub mod u_type;

    mod dispatch;
    pub use dispatch::{decode_word, encode_line, tokenize};
}

pub use tables::{classify, Format, InstrDesc};
pub use translator::{AddressWidth, LineError, TranslationResult};

/// Typed diagnostics for the strict parsing entry points. The tolerant
/// core API never surfaces these; malformed tokens degrade to defaults
/// (register -> x0, immediate -> 0) so a live-typing caller is never
/// interrupted mid-keystroke.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid register token \"{token}\"")]
    BadRegister { token: String },
    #[error("invalid immediate token \"{token}\"")]
    BadImmediate { token: String },
}
