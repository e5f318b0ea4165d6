//! # 65C02 Streaming Disassembler
//!
//! A byte-at-a-time disassembler for the WDC/Rockwell 65C02 instruction set,
//! designed for byte sources that arrive piecemeal (serial links, bus sniffers,
//! incremental file reads) and for WebAssembly portability.
//!
//! The decoder never needs the whole program in memory and never looks ahead: it
//! is fed one byte per call and reports after every byte whether an instruction is
//! complete.
//!
//! ## Quick Start
//!
//! ```rust
//! use lib65c02dasm::{DecodeStatus, StreamDecoder};
//!
//! let mut decoder = StreamDecoder::new();
//!
//! // LDA #$2A
//! assert_eq!(decoder.decode_byte(0xA9), DecodeStatus::AwaitingFirstOperandByte);
//! assert_eq!(decoder.decode_byte(0x2A), DecodeStatus::InstructionComplete);
//!
//! // Read the result back before feeding the next byte
//! assert_eq!(decoder.mnemonic_text(), Some("LDA"));
//! assert_eq!(decoder.render().as_deref(), Some("#$2A"));
//! ```
//!
//! ## Architecture
//!
//! - **Table-Driven Classification**: opcode bytes map to a mnemonic and an
//!   addressing mode through two exhaustive lookups
//! - **Streaming**: one owned decoder per stream, no global state
//! - **Resynchronisation**: unrecognised opcode bytes are dropped and decoding
//!   resumes on the next byte; nothing in the core can fail fatally
//!
//! ## Modules
//!
//! - `mnemonic` - Instruction family enumeration
//! - `addressing` - Addressing mode enumeration
//! - `opcodes` - Opcode classification tables
//! - `disassembler` - Resolver, streaming decoder and operand formatter
//! - `listing` - Line-oriented driver built on the streaming decoder
//! - `hex` - Hex string input

pub mod addressing;
pub mod disassembler;
pub mod hex;
pub mod listing;
pub mod mnemonic;
pub mod opcodes;

pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use disassembler::decoder::resolve;
pub use disassembler::{DecodeStatus, InstructionDescriptor, Operand, StreamDecoder};
pub use hex::{decode_hex, HexError};
pub use listing::{disassemble, format_line, Listing, ListingLine, ListingOptions};
pub use mnemonic::Mnemonic;
pub use opcodes::{classify_addressing_mode, classify_mnemonic, supported_opcodes, OPCODE_COUNT};
