//! # Opcode Classification Tables
//!
//! This module holds the two 256-way lookups that together define the 65C02
//! instruction set: opcode byte to [`Mnemonic`], and opcode byte to
//! [`AddressingMode`].
//!
//! The tables cover:
//! - **212 assigned opcodes** - the published 65C02 set, including the Rockwell/WDC
//!   bit instructions (BBRn, BBSn, RMBn, SMBn) and WAI/STP
//! - **44 unassigned opcodes** - both lookups return `None`
//!
//! Both lookups are exhaustive `match` expressions so the compiler keeps them total.
//! The two must agree on which bytes are assigned; `tests/opcode_table_test.rs`
//! checks that for every byte value.

use crate::addressing::AddressingMode;
use crate::mnemonic::Mnemonic;

/// Number of opcode bytes assigned to an instruction.
pub const OPCODE_COUNT: usize = 212;

/// Look up the instruction family of an opcode byte.
///
/// Returns `None` for byte values that are not part of the 65C02 instruction set.
///
/// # Examples
///
/// ```
/// use lib65c02dasm::{classify_mnemonic, Mnemonic};
///
/// assert_eq!(classify_mnemonic(0xA9), Some(Mnemonic::Lda));
/// assert_eq!(classify_mnemonic(0x02), None);
/// ```
pub const fn classify_mnemonic(opcode: u8) -> Option<Mnemonic> {
    use Mnemonic::*;

    let mnemonic = match opcode {
        0x61 | 0x65 | 0x69 | 0x6D | 0x71 | 0x72 | 0x75 | 0x79 | 0x7D => Adc,
        0x21 | 0x25 | 0x29 | 0x2D | 0x31 | 0x32 | 0x35 | 0x39 | 0x3D => And,
        0x06 | 0x0A | 0x0E | 0x16 | 0x1E => Asl,
        0x0F => Bbr0,
        0x1F => Bbr1,
        0x2F => Bbr2,
        0x3F => Bbr3,
        0x4F => Bbr4,
        0x5F => Bbr5,
        0x6F => Bbr6,
        0x7F => Bbr7,
        0x8F => Bbs0,
        0x9F => Bbs1,
        0xAF => Bbs2,
        0xBF => Bbs3,
        0xCF => Bbs4,
        0xDF => Bbs5,
        0xEF => Bbs6,
        0xFF => Bbs7,
        0x90 => Bcc,
        0xB0 => Bcs,
        0xF0 => Beq,
        0x24 | 0x2C | 0x34 | 0x3C | 0x89 => Bit,
        0x30 => Bmi,
        0xD0 => Bne,
        0x10 => Bpl,
        0x80 => Bra,
        0x00 => Brk,
        0x50 => Bvc,
        0x70 => Bvs,
        0x18 => Clc,
        0xD8 => Cld,
        0x58 => Cli,
        0xB8 => Clv,
        0xC1 | 0xC5 | 0xC9 | 0xCD | 0xD1 | 0xD2 | 0xD5 | 0xD9 | 0xDD => Cmp,
        0xE0 | 0xE4 | 0xEC => Cpx,
        0xC0 | 0xC4 | 0xCC => Cpy,
        0x3A | 0xC6 | 0xCE | 0xD6 | 0xDE => Dec,
        0xCA => Dex,
        0x88 => Dey,
        0x41 | 0x45 | 0x49 | 0x4D | 0x51 | 0x52 | 0x55 | 0x59 | 0x5D => Eor,
        0x1A | 0xE6 | 0xEE | 0xF6 | 0xFE => Inc,
        0xE8 => Inx,
        0xC8 => Iny,
        0x4C | 0x6C | 0x7C => Jmp,
        0x20 => Jsr,
        0xA1 | 0xA5 | 0xA9 | 0xAD | 0xB1 | 0xB2 | 0xB5 | 0xB9 | 0xBD => Lda,
        0xA2 | 0xA6 | 0xAE | 0xB6 | 0xBE => Ldx,
        0xA0 | 0xA4 | 0xAC | 0xB4 | 0xBC => Ldy,
        0x46 | 0x4A | 0x4E | 0x56 | 0x5E => Lsr,
        0xEA => Nop,
        0x01 | 0x05 | 0x09 | 0x0D | 0x11 | 0x12 | 0x15 | 0x19 | 0x1D => Ora,
        0x48 => Pha,
        0x08 => Php,
        0xDA => Phx,
        0x5A => Phy,
        0x68 => Pla,
        0x28 => Plp,
        0xFA => Plx,
        0x7A => Ply,
        0x07 => Rmb0,
        0x17 => Rmb1,
        0x27 => Rmb2,
        0x37 => Rmb3,
        0x47 => Rmb4,
        0x57 => Rmb5,
        0x67 => Rmb6,
        0x77 => Rmb7,
        0x26 | 0x2A | 0x2E | 0x36 | 0x3E => Rol,
        0x66 | 0x6A | 0x6E | 0x76 | 0x7E => Ror,
        0x40 => Rti,
        0x60 => Rts,
        0xE1 | 0xE5 | 0xE9 | 0xED | 0xF1 | 0xF2 | 0xF5 | 0xF9 | 0xFD => Sbc,
        0x38 => Sec,
        0xF8 => Sed,
        0x78 => Sei,
        0x87 => Smb0,
        0x97 => Smb1,
        0xA7 => Smb2,
        0xB7 => Smb3,
        0xC7 => Smb4,
        0xD7 => Smb5,
        0xE7 => Smb6,
        0xF7 => Smb7,
        0x81 | 0x85 | 0x8D | 0x91 | 0x92 | 0x95 | 0x99 | 0x9D => Sta,
        0xDB => Stp,
        0x86 | 0x8E | 0x96 => Stx,
        0x84 | 0x8C | 0x94 => Sty,
        0x64 | 0x74 | 0x9C | 0x9E => Stz,
        0xAA => Tax,
        0xA8 => Tay,
        0x14 | 0x1C => Trb,
        0x04 | 0x0C => Tsb,
        0xBA => Tsx,
        0x8A => Txa,
        0x9A => Txs,
        0x98 => Tya,
        0xCB => Wai,
        _ => return None,
    };

    Some(mnemonic)
}

/// Look up the addressing mode of an opcode byte.
///
/// Returns `None` for exactly the same byte values as [`classify_mnemonic`].
///
/// # Examples
///
/// ```
/// use lib65c02dasm::{classify_addressing_mode, AddressingMode};
///
/// assert_eq!(classify_addressing_mode(0x6D), Some(AddressingMode::Absolute));
/// assert_eq!(classify_addressing_mode(0xF0), Some(AddressingMode::Relative));
/// assert_eq!(classify_addressing_mode(0x02), None);
/// ```
pub const fn classify_addressing_mode(opcode: u8) -> Option<AddressingMode> {
    use AddressingMode::*;

    let mode = match opcode {
        0x0C
        | 0x0D
        | 0x0E
        | 0x1C
        | 0x20
        | 0x2C
        | 0x2D
        | 0x2E
        | 0x4C
        | 0x4D
        | 0x4E
        | 0x6D
        | 0x6E
        | 0x8C
        | 0x8D
        | 0x8E
        | 0x9C
        | 0xAC
        | 0xAD
        | 0xAE
        | 0xCC
        | 0xCD
        | 0xCE
        | 0xEC
        | 0xED
        | 0xEE => Absolute,
        0x7C => AbsoluteIndexedIndirect,
        0x6C => AbsoluteIndirect,
        0x1D
        | 0x1E
        | 0x3C
        | 0x3D
        | 0x3E
        | 0x5D
        | 0x5E
        | 0x7D
        | 0x7E
        | 0x9D
        | 0x9E
        | 0xBC
        | 0xBD
        | 0xDD
        | 0xDE
        | 0xFD
        | 0xFE => AbsoluteX,
        0x19 | 0x39 | 0x59 | 0x79 | 0x99 | 0xB9 | 0xBE | 0xD9 | 0xF9 => AbsoluteY,
        0x0A | 0x1A | 0x2A | 0x3A | 0x4A | 0x6A => Accumulator,
        0x09
        | 0x29
        | 0x49
        | 0x69
        | 0x89
        | 0xA0
        | 0xA2
        | 0xA9
        | 0xC0
        | 0xC9
        | 0xE0
        | 0xE9 => Immediate,
        0x18
        | 0x38
        | 0x58
        | 0x78
        | 0x88
        | 0x8A
        | 0x98
        | 0x9A
        | 0xA8
        | 0xAA
        | 0xB8
        | 0xBA
        | 0xC8
        | 0xCA
        | 0xCB
        | 0xD8
        | 0xDB
        | 0xE8
        | 0xEA
        | 0xF8 => Implied,
        0x0F
        | 0x10
        | 0x1F
        | 0x2F
        | 0x30
        | 0x3F
        | 0x4F
        | 0x50
        | 0x5F
        | 0x6F
        | 0x70
        | 0x7F
        | 0x80
        | 0x8F
        | 0x90
        | 0x9F
        | 0xAF
        | 0xB0
        | 0xBF
        | 0xCF
        | 0xD0
        | 0xDF
        | 0xEF
        | 0xF0
        | 0xFF => Relative,
        0x00 | 0x08 | 0x28 | 0x40 | 0x48 | 0x5A | 0x60 | 0x68 | 0x7A | 0xDA | 0xFA => Stack,
        0x04
        | 0x05
        | 0x06
        | 0x07
        | 0x14
        | 0x17
        | 0x24
        | 0x25
        | 0x26
        | 0x27
        | 0x37
        | 0x45
        | 0x46
        | 0x47
        | 0x57
        | 0x64
        | 0x65
        | 0x66
        | 0x67
        | 0x77
        | 0x84
        | 0x85
        | 0x86
        | 0x87
        | 0x97
        | 0xA4
        | 0xA5
        | 0xA6
        | 0xA7
        | 0xB7
        | 0xC4
        | 0xC5
        | 0xC6
        | 0xC7
        | 0xD7
        | 0xE4
        | 0xE5
        | 0xE6
        | 0xE7
        | 0xF7 => ZeroPage,
        0x01 | 0x21 | 0x41 | 0x61 | 0x81 | 0xA1 | 0xC1 | 0xE1 => ZeroPageIndexedIndirect,
        0x12 | 0x32 | 0x52 | 0x72 | 0x92 | 0xB2 | 0xD2 | 0xF2 => ZeroPageIndirect,
        0x11 | 0x31 | 0x51 | 0x71 | 0x91 | 0xB1 | 0xD1 | 0xF1 => ZeroPageIndirectY,
        0x15
        | 0x16
        | 0x34
        | 0x35
        | 0x36
        | 0x55
        | 0x56
        | 0x74
        | 0x75
        | 0x76
        | 0x94
        | 0x95
        | 0xB4
        | 0xB5
        | 0xD5
        | 0xD6
        | 0xF5
        | 0xF6 => ZeroPageX,
        0x96 | 0xB6 => ZeroPageY,
        _ => return None,
    };

    Some(mode)
}

/// Iterate over every opcode byte that both lookups recognise, in ascending order.
pub fn supported_opcodes() -> impl Iterator<Item = u8> {
    (0..=u8::MAX).filter(|&opcode| {
        classify_mnemonic(opcode).is_some() && classify_addressing_mode(opcode).is_some()
    })
}
