//! Listing driver.
//!
//! Drives a [`StreamDecoder`] over a byte stream and collects one
//! [`ListingLine`] per instruction, the way a host program would. Bytes are
//! still fed one at a time, so a [`Listing`] works equally well on a stream whose
//! end is not yet known.

use crate::disassembler::formatter::{format_hex, format_instruction};
use crate::disassembler::{DecodeStatus, StreamDecoder};

/// Pseudo-mnemonic used for bytes that do not form a complete instruction.
pub const DATA_DIRECTIVE: &str = ".byte";

/// A single line of disassembly output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingLine {
    /// Stream offset of the first byte of this line
    pub offset: usize,

    /// Raw bytes covered by this line (opcode and operand bytes)
    pub bytes: Vec<u8>,

    /// Instruction mnemonic, or [`DATA_DIRECTIVE`]
    pub mnemonic: &'static str,

    /// Rendered operand text, without leading whitespace
    pub operand: String,
}

impl ListingLine {
    /// Whether this line is raw data rather than a decoded instruction.
    pub fn is_data(&self) -> bool {
        self.mnemonic == DATA_DIRECTIVE
    }

    /// Mnemonic and operand, e.g. `"LDA #$02"`.
    pub fn text(&self) -> String {
        format_instruction(self.mnemonic, &self.operand)
    }
}

/// Options controlling listing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingOptions {
    /// Prefix each line with its stream offset
    pub show_offsets: bool,

    /// Include the raw instruction bytes
    pub hex_dump: bool,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            show_offsets: true,
            hex_dump: true,
        }
    }
}

/// Format a listing line as text
///
/// With all options enabled a line reads `"  6:\tA9 02     LDA #$02"`.
pub fn format_line(line: &ListingLine, options: &ListingOptions) -> String {
    let mut out = String::new();

    if options.show_offsets {
        out.push_str(&format!("{:>3X}:\t", line.offset));
    }

    if options.hex_dump {
        let dump: String = line.bytes.iter().map(|b| format!("{:02X} ", b)).collect();
        out.push_str(&format!("{:<9} ", dump));
    }

    out.push_str(&line.text());
    out
}

/// Incremental listing over a byte stream.
///
/// ```
/// use lib65c02dasm::Listing;
///
/// let mut listing = Listing::new();
///
/// assert_eq!(listing.push(0xA9), None);
/// let line = listing.push(0x2A).unwrap();
///
/// assert_eq!(line.offset, 0);
/// assert_eq!(line.text(), "LDA #$2A");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Listing {
    decoder: StreamDecoder,
    pending: Vec<u8>,
    start: usize,
}

impl Listing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one byte; returns a line whenever an instruction completes or a byte is
    /// discarded as unrecognised.
    pub fn push(&mut self, byte: u8) -> Option<ListingLine> {
        if self.pending.is_empty() {
            self.start = self.decoder.bytes_consumed();
        }
        self.pending.push(byte);

        match self.decoder.decode_byte(byte) {
            DecodeStatus::NoInstruction => {
                Some(self.take_line(DATA_DIRECTIVE, format_hex(u16::from(byte))))
            }
            DecodeStatus::InstructionComplete => {
                let mnemonic = self.decoder.mnemonic_text().unwrap_or(DATA_DIRECTIVE);
                let operand = self.decoder.render().unwrap_or_default();
                Some(self.take_line(mnemonic, operand.trim_start().to_string()))
            }
            DecodeStatus::AwaitingFirstOperandByte | DecodeStatus::AwaitingSecondOperandByte => {
                None
            }
        }
    }

    /// Flush a trailing incomplete instruction as a data line.
    pub fn finish(self) -> Option<ListingLine> {
        if self.pending.is_empty() {
            return None;
        }

        let operand = self
            .pending
            .iter()
            .map(|&b| format_hex(u16::from(b)))
            .collect::<Vec<_>>()
            .join(", ");

        Some(ListingLine {
            offset: self.start,
            bytes: self.pending,
            mnemonic: DATA_DIRECTIVE,
            operand,
        })
    }

    pub fn status(&self) -> DecodeStatus {
        self.decoder.status()
    }

    pub fn bytes_consumed(&self) -> usize {
        self.decoder.bytes_consumed()
    }

    pub fn decoder(&self) -> &StreamDecoder {
        &self.decoder
    }

    fn take_line(&mut self, mnemonic: &'static str, operand: String) -> ListingLine {
        ListingLine {
            offset: self.start,
            bytes: std::mem::take(&mut self.pending),
            mnemonic,
            operand,
        }
    }
}

/// Disassemble a byte slice into listing lines
///
/// # Arguments
///
/// * `bytes` - The machine code to disassemble
///
/// # Returns
///
/// One `ListingLine` per instruction, plus `.byte` lines for unrecognised opcodes
/// and for a trailing incomplete instruction
pub fn disassemble(bytes: &[u8]) -> Vec<ListingLine> {
    let mut listing = Listing::new();
    let mut lines: Vec<ListingLine> = bytes.iter().filter_map(|&b| listing.push(b)).collect();
    lines.extend(listing.finish());
    lines
}
