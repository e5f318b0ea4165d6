//! Formatting functions for decoded instructions

use crate::addressing::AddressingMode;
use crate::disassembler::{InstructionDescriptor, Operand};

/// Longest operand text [`render_operand`] can produce, e.g. `"($1234, X)"`.
pub const MAX_OPERAND_TEXT_LEN: usize = 10;

/// Format a value as `$`-prefixed uppercase hex.
///
/// A zero high byte is dropped, so the result is always `$XX` or `$XXXX`.
///
/// ```
/// use lib65c02dasm::disassembler::formatter::format_hex;
///
/// assert_eq!(format_hex(0x0000), "$00");
/// assert_eq!(format_hex(0x002A), "$2A");
/// assert_eq!(format_hex(0x1200), "$1200");
/// ```
pub fn format_hex(value: u16) -> String {
    if value > 0xFF {
        format!("${:04X}", value)
    } else {
        format!("${:02X}", value)
    }
}

/// Numeric value shown for an operand.
///
/// Relative operands are sign-extended and added to `bytes_consumed`. The result
/// is a target relative to the stream position, not a load address, and wraps
/// within 16 bits.
pub fn operand_value(mode: AddressingMode, operand: Operand, bytes_consumed: usize) -> u16 {
    match mode {
        AddressingMode::Relative => {
            let offset = operand.low_byte() as i8;
            (bytes_consumed as u16).wrapping_add_signed(i16::from(offset))
        }
        _ => operand.value(),
    }
}

/// Render the operand of an instruction in its addressing-mode syntax
///
/// # Arguments
///
/// * `descriptor` - The instruction being rendered
/// * `operand` - The assembled operand, if any operand bytes were received
/// * `bytes_consumed` - Stream position, used by relative branches
///
/// # Returns
///
/// The operand text (empty for implied and stack modes, `" A"` for accumulator), or
/// None if the operand presence does not match what the instruction expects
pub fn render_operand(
    descriptor: &InstructionDescriptor,
    operand: Option<Operand>,
    bytes_consumed: usize,
) -> Option<String> {
    use AddressingMode::*;

    if (descriptor.operand_len > 0) != operand.is_some() {
        return None;
    }

    let mode = descriptor.addressing_mode;
    let hex = operand
        .map(|operand| format_hex(operand_value(mode, operand, bytes_consumed)))
        .unwrap_or_default();

    let text = match mode {
        Absolute | Stack | ZeroPage | Implied | Relative => hex,
        AbsoluteIndexedIndirect | ZeroPageIndexedIndirect => format!("({}, X)", hex),
        AbsoluteX | ZeroPageX => format!("{}, X", hex),
        AbsoluteY | ZeroPageY => format!("{}, Y", hex),
        AbsoluteIndirect | ZeroPageIndirect => format!("({})", hex),
        Immediate => format!("#{}", hex),
        Accumulator => format!("{} A", hex),
        ZeroPageIndirectY => format!("({}), Y", hex),
    };

    Some(text)
}

/// Join a mnemonic and its rendered operand into one line of assembly
pub fn format_instruction(mnemonic: &str, operand: &str) -> String {
    let operand = operand.trim_start();

    if operand.is_empty() {
        mnemonic.to_string()
    } else {
        format!("{} {}", mnemonic, operand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disassembler::decoder::resolve;

    fn render(opcode: u8, operand: Option<u16>, bytes_consumed: usize) -> Option<String> {
        let descriptor = resolve(opcode).unwrap();
        render_operand(&descriptor, operand.map(Operand::new), bytes_consumed)
    }

    #[test]
    fn test_format_immediate() {
        assert_eq!(render(0xA9, Some(0x2A), 2).as_deref(), Some("#$2A"));
    }

    #[test]
    fn test_format_absolute() {
        assert_eq!(render(0x6D, Some(0x1234), 3).as_deref(), Some("$1234"));
    }

    #[test]
    fn test_format_absolute_drops_zero_high_byte() {
        assert_eq!(render(0x8D, Some(0x0034), 3).as_deref(), Some("$34"));
    }

    #[test]
    fn test_format_indexed_modes() {
        assert_eq!(render(0x7C, Some(0x2000), 3).as_deref(), Some("($2000, X)"));
        assert_eq!(render(0xA1, Some(0x40), 2).as_deref(), Some("($40, X)"));
        assert_eq!(render(0xBD, Some(0x1234), 3).as_deref(), Some("$1234, X"));
        assert_eq!(render(0xB6, Some(0x80), 2).as_deref(), Some("$80, Y"));
        assert_eq!(render(0x6C, Some(0xFFFC), 3).as_deref(), Some("($FFFC)"));
        assert_eq!(render(0xB2, Some(0x40), 2).as_deref(), Some("($40)"));
        assert_eq!(render(0xB1, Some(0x40), 2).as_deref(), Some("($40), Y"));
    }

    #[test]
    fn test_format_operandless_modes() {
        assert_eq!(render(0xEA, None, 1).as_deref(), Some(""));
        assert_eq!(render(0x48, None, 1).as_deref(), Some(""));
        assert_eq!(render(0x2A, None, 1).as_deref(), Some(" A"));
    }

    #[test]
    fn test_format_relative() {
        assert_eq!(render(0xF0, Some(0x05), 2).as_deref(), Some("$07"));
        assert_eq!(render(0xF0, Some(0xFB), 10).as_deref(), Some("$05"));
        assert_eq!(render(0xD0, Some(0xFB), 2).as_deref(), Some("$FFFD"));
    }

    #[test]
    fn test_format_rejects_mismatched_operand() {
        assert_eq!(render(0xEA, Some(0x00), 2), None);
        assert_eq!(render(0xA9, None, 1), None);
    }

    #[test]
    fn test_format_instruction() {
        assert_eq!(format_instruction("LDA", "#$2A"), "LDA #$2A");
        assert_eq!(format_instruction("ROL", " A"), "ROL A");
        assert_eq!(format_instruction("RTS", ""), "RTS");
    }
}
