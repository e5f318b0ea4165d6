//! Instruction resolver for the 65C02 disassembler

use crate::disassembler::InstructionDescriptor;
use crate::opcodes::{classify_addressing_mode, classify_mnemonic};

/// Resolve a single opcode byte into its instruction descriptor
///
/// # Arguments
///
/// * `opcode` - The byte to interpret as the start of an instruction
///
/// # Returns
///
/// Some(InstructionDescriptor) if both the mnemonic and addressing mode tables
/// recognise the byte, None for unassigned opcodes
pub fn resolve(opcode: u8) -> Option<InstructionDescriptor> {
    let mnemonic = classify_mnemonic(opcode)?;
    let addressing_mode = classify_addressing_mode(opcode)?;

    Some(InstructionDescriptor {
        opcode,
        mnemonic,
        addressing_mode,
        text: mnemonic.text(),
        operand_len: addressing_mode.operand_len(),
    })
}
