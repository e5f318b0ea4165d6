//! # Addressing Modes
//!
//! This module defines the 16 addressing modes of the 65C02 processor.
//! Each mode determines how many operand bytes follow the opcode and how the
//! operand is decorated when rendered as assembly text.

/// 65C02 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Accumulator, Implied, Stack
/// - **1 byte**: Immediate, Relative, ZeroPage, ZeroPageIndexedIndirect, ZeroPageX,
///   ZeroPageY, ZeroPageIndirect, ZeroPageIndirectY
/// - **2 bytes**: Absolute, AbsoluteIndexedIndirect, AbsoluteX, AbsoluteY, AbsoluteIndirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X, then dereferenced. 65C02 only.
    ///
    /// Example: JMP ($1234, X)
    AbsoluteIndexedIndirect,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234, X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234, Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC)
    AbsoluteIndirect,

    /// Operates directly on the accumulator register.
    ///
    /// Example: ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, NOP, WAI
    Implied,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ $07
    Relative,

    /// Implied operand that touches the stack.
    ///
    /// Examples: PHA, PLX, RTS, BRK
    Stack,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40, X)
    ZeroPageIndexedIndirect,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80, X
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80, Y
    ZeroPageY,

    /// Zero page pointer dereference without indexing. 65C02 only.
    ///
    /// Example: LDA ($40)
    ZeroPageIndirect,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40), Y
    ZeroPageIndirectY,
}

impl AddressingMode {
    /// Every addressing mode, in declaration order.
    pub const ALL: [AddressingMode; 16] = [
        AddressingMode::Absolute,
        AddressingMode::AbsoluteIndexedIndirect,
        AddressingMode::AbsoluteX,
        AddressingMode::AbsoluteY,
        AddressingMode::AbsoluteIndirect,
        AddressingMode::Accumulator,
        AddressingMode::Immediate,
        AddressingMode::Implied,
        AddressingMode::Relative,
        AddressingMode::Stack,
        AddressingMode::ZeroPage,
        AddressingMode::ZeroPageIndexedIndirect,
        AddressingMode::ZeroPageX,
        AddressingMode::ZeroPageY,
        AddressingMode::ZeroPageIndirect,
        AddressingMode::ZeroPageIndirectY,
    ];

    /// Number of operand bytes that follow the opcode (0, 1 or 2).
    pub const fn operand_len(self) -> u8 {
        use AddressingMode::*;

        match self {
            Absolute | AbsoluteIndexedIndirect | AbsoluteX | AbsoluteY | AbsoluteIndirect => 2,
            Immediate | Relative | ZeroPage | ZeroPageIndexedIndirect | ZeroPageX | ZeroPageY
            | ZeroPageIndirect | ZeroPageIndirectY => 1,
            Accumulator | Implied | Stack => 0,
        }
    }
}
