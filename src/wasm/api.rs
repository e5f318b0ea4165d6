//! WASM API for the 65C02 disassembler.
//!
//! Provides a JavaScript-callable streaming disassembler that accepts bytes,
//! byte arrays or hex strings and hands back completed listing lines.

use crate::disassembler::formatter::format_instruction;
use crate::{decode_hex, DecodeStatus, Listing, ListingLine};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// A completed line of disassembly
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    offset: usize,
    bytes: Vec<u8>,
    mnemonic: String,
    operand: String,
}

impl From<ListingLine> for DisassemblyLine {
    fn from(line: ListingLine) -> Self {
        DisassemblyLine {
            offset: line.offset,
            mnemonic: line.mnemonic.to_string(),
            operand: line.operand,
            bytes: line.bytes,
        }
    }
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn mnemonic(&self) -> String {
        self.mnemonic.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn operand(&self) -> String {
        self.operand.clone()
    }

    /// Mnemonic and operand joined, e.g. "LDA #$2A"
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        format_instruction(&self.mnemonic, &self.operand)
    }
}

/// Streaming disassembler interface for JavaScript
#[wasm_bindgen]
#[derive(Default)]
pub struct StreamDisassembler {
    listing: Listing,
}

#[wasm_bindgen]
impl StreamDisassembler {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a single byte, returning the line it completes (if any)
    pub fn push_byte(&mut self, byte: u8) -> Option<DisassemblyLine> {
        self.listing.push(byte).map(DisassemblyLine::from)
    }

    /// Feed a chunk of bytes, returning every line completed along the way
    pub fn feed(&mut self, bytes: &[u8]) -> js_sys::Array {
        bytes
            .iter()
            .filter_map(|&byte| self.listing.push(byte))
            .map(|line| JsValue::from(DisassemblyLine::from(line)))
            .collect()
    }

    /// Feed a hex-encoded chunk such as "a9028531"
    pub fn feed_hex(&mut self, hex: String) -> Result<js_sys::Array, JsError> {
        let bytes = decode_hex(&hex).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(self.feed(&bytes))
    }

    /// Flush any trailing incomplete instruction and start over
    pub fn finish(&mut self) -> Option<DisassemblyLine> {
        std::mem::take(&mut self.listing)
            .finish()
            .map(DisassemblyLine::from)
    }

    #[wasm_bindgen(getter)]
    pub fn bytes_consumed(&self) -> usize {
        self.listing.bytes_consumed()
    }

    /// Decode status: 0 = none, 1 = awaiting first operand byte,
    /// 2 = awaiting second operand byte, 3 = instruction complete
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        match self.listing.status() {
            DecodeStatus::NoInstruction => 0,
            DecodeStatus::AwaitingFirstOperandByte => 1,
            DecodeStatus::AwaitingSecondOperandByte => 2,
            DecodeStatus::InstructionComplete => 3,
        }
    }
}
