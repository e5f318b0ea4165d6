//! 65C02 Disassembler Module
//!
//! Decodes machine code one byte at a time into symbolic instructions.
//!
//! - [`decoder`] turns an opcode byte into an [`InstructionDescriptor`]
//! - [`stream`] is the per-byte state machine that assembles operands
//! - [`formatter`] renders the decoded operand as assembly text

pub mod decoder;
pub mod formatter;
pub mod stream;

use crate::addressing::AddressingMode;
use crate::mnemonic::Mnemonic;

pub use stream::{DecodeStatus, StreamDecoder};

/// Everything the opcode byte alone says about an instruction.
///
/// Built in one step by [`decoder::resolve`] and never modified afterwards. A new
/// instruction replaces the descriptor wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionDescriptor {
    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction family
    pub mnemonic: Mnemonic,

    /// Addressing mode used by this instruction
    pub addressing_mode: AddressingMode,

    /// Uppercase assembly mnemonic (e.g., "LDA", "BBR3")
    pub text: &'static str,

    /// Operand bytes expected after the opcode (0-2)
    pub operand_len: u8,
}

impl InstructionDescriptor {
    /// Total encoded size in bytes, opcode included (1-3).
    pub const fn size_bytes(&self) -> u8 {
        1 + self.operand_len
    }
}

/// Little-endian operand value of up to 16 bits.
///
/// The first operand byte of an instruction is the low byte, the second (if any)
/// the high byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Operand(u16);

impl Operand {
    pub const fn new(value: u16) -> Self {
        Operand(value)
    }

    pub const fn value(self) -> u16 {
        self.0
    }

    pub const fn low_byte(self) -> u8 {
        self.0 as u8
    }

    pub const fn high_byte(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Fold `byte` in at operand byte position `index` (0 = low, 1 = high).
    pub const fn with_byte(self, index: u8, byte: u8) -> Self {
        debug_assert!(index < 2);
        Operand(self.0 | ((byte as u16) << (8 * index as u32)))
    }
}

impl From<Operand> for u16 {
    fn from(operand: Operand) -> u16 {
        operand.0
    }
}
