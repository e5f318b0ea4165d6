//! Byte-at-a-time decoding state machine
//!
//! [`StreamDecoder`] never looks ahead: each call to
//! [`decode_byte`](StreamDecoder::decode_byte) either starts a new instruction or
//! folds one more operand byte into the instruction in progress. Completed
//! instructions are not buffered, so the caller must read them back before the next
//! byte is fed.

use log::{debug, trace};

use crate::addressing::AddressingMode;
use crate::disassembler::{decoder, formatter, InstructionDescriptor, Operand};
use crate::mnemonic::Mnemonic;

/// Decode progress of the current instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    /// No instruction: nothing fed yet, or the last opcode byte was unrecognised.
    NoInstruction,

    /// Opcode decoded, none of its operand bytes received yet.
    AwaitingFirstOperandByte,

    /// First operand byte received, the second is still due.
    AwaitingSecondOperandByte,

    /// Opcode and all operand bytes received; the instruction can be read back.
    InstructionComplete,
}

/// Instruction currently being assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InProgress {
    descriptor: InstructionDescriptor,
    operand: Option<Operand>,
    remaining: u8,
}

/// Streaming 65C02 decoder.
///
/// One instance decodes one logical byte stream. All state is owned by the
/// instance; decode independent streams with independent decoders.
///
/// # Examples
///
/// ```
/// use lib65c02dasm::{DecodeStatus, StreamDecoder};
///
/// let mut decoder = StreamDecoder::new();
///
/// assert_eq!(decoder.decode_byte(0x6D), DecodeStatus::AwaitingFirstOperandByte);
/// assert_eq!(decoder.decode_byte(0x34), DecodeStatus::AwaitingSecondOperandByte);
/// assert_eq!(decoder.decode_byte(0x12), DecodeStatus::InstructionComplete);
///
/// assert_eq!(decoder.mnemonic_text(), Some("ADC"));
/// assert_eq!(decoder.render().as_deref(), Some("$1234"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StreamDecoder {
    current: Option<InProgress>,
    bytes_consumed: usize,
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one byte of the stream and return the resulting status.
    ///
    /// Unrecognised opcode bytes are discarded: the decoder drops back to
    /// [`DecodeStatus::NoInstruction`] and treats the next byte as a fresh opcode.
    pub fn decode_byte(&mut self, byte: u8) -> DecodeStatus {
        let offset = self.bytes_consumed;
        self.bytes_consumed += 1;

        if let Some(progress) = self.current.as_mut().filter(|p| p.remaining > 0) {
            let index = progress.descriptor.operand_len - progress.remaining;
            let operand = progress.operand.unwrap_or_default();
            progress.operand = Some(operand.with_byte(index, byte));
            progress.remaining -= 1;
        } else {
            self.current = decoder::resolve(byte).map(|descriptor| InProgress {
                descriptor,
                operand: None,
                remaining: descriptor.operand_len,
            });

            if self.current.is_none() {
                debug!(
                    "discarding unrecognised opcode 0x{:02X} at offset {}",
                    byte, offset
                );
            }
        }

        let status = self.status();
        trace!("byte 0x{:02X} at offset {} -> {:?}", byte, offset, status);
        status
    }

    /// Feed a run of bytes and return the status after the last one.
    ///
    /// Any instruction completed before the final byte is overwritten, so this is
    /// only useful when the slice is known to end on an instruction boundary or
    /// the intermediate results do not matter.
    pub fn feed(&mut self, bytes: &[u8]) -> DecodeStatus {
        for &byte in bytes {
            self.decode_byte(byte);
        }
        self.status()
    }

    pub fn status(&self) -> DecodeStatus {
        match &self.current {
            None => DecodeStatus::NoInstruction,
            Some(progress) if progress.remaining == 0 => DecodeStatus::InstructionComplete,
            Some(progress) if progress.remaining == progress.descriptor.operand_len => {
                DecodeStatus::AwaitingFirstOperandByte
            }
            Some(_) => DecodeStatus::AwaitingSecondOperandByte,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status() == DecodeStatus::InstructionComplete
    }

    pub fn instruction(&self) -> Option<InstructionDescriptor> {
        self.current.map(|progress| progress.descriptor)
    }

    pub fn mnemonic(&self) -> Option<Mnemonic> {
        self.instruction().map(|descriptor| descriptor.mnemonic)
    }

    pub fn mnemonic_text(&self) -> Option<&'static str> {
        self.instruction().map(|descriptor| descriptor.text)
    }

    pub fn addressing_mode(&self) -> Option<AddressingMode> {
        self.instruction().map(|descriptor| descriptor.addressing_mode)
    }

    /// Raw opcode byte of the current instruction.
    pub fn opcode(&self) -> Option<u8> {
        self.instruction().map(|descriptor| descriptor.opcode)
    }

    /// Operand assembled so far; `None` until the first operand byte arrives.
    pub fn operand(&self) -> Option<Operand> {
        self.current.and_then(|progress| progress.operand)
    }

    /// Total bytes fed since construction, including discarded ones.
    pub fn bytes_consumed(&self) -> usize {
        self.bytes_consumed
    }

    /// Render the operand of the current instruction as assembly text.
    ///
    /// Returns `None` when there is no instruction, or when the operand is still
    /// incomplete. See [`formatter::render_operand`] for the syntax.
    pub fn render(&self) -> Option<String> {
        let progress = self.current.as_ref()?;
        formatter::render_operand(&progress.descriptor, progress.operand, self.bytes_consumed)
    }

    /// Mnemonic and operand joined into one line, e.g. `"LDA #$2A"` or `"ASL A"`.
    pub fn render_instruction(&self) -> Option<String> {
        let descriptor = self.instruction()?;
        let operand = self.render()?;
        Some(formatter::format_instruction(descriptor.text, &operand))
    }
}
