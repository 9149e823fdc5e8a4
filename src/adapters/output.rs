//! Payload Emitter
//!
//! Writes the encoded payload to stdout in one piece. Logs never go here.

use std::io::Write;

/// How the payload is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Raw ABI bytes
    #[default]
    Raw,
    /// `0x`-prefixed lowercase hex text
    Hex,
}

impl OutputFormat {
    pub fn from_hex_flag(hex: bool) -> Self {
        if hex {
            OutputFormat::Hex
        } else {
            OutputFormat::Raw
        }
    }

    /// Bytes that end up on the wire, no trailing newline
    pub fn render(&self, payload: &[u8]) -> Vec<u8> {
        match self {
            OutputFormat::Raw => payload.to_vec(),
            OutputFormat::Hex => format!("0x{}", hex::encode(payload)).into_bytes(),
        }
    }
}

/// Write the full payload and flush
pub fn emit<W: Write>(writer: &mut W, payload: &[u8], format: OutputFormat) -> std::io::Result<()> {
    writer.write_all(&format.render(payload))?;
    writer.flush()
}
