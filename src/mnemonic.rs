//! # Instruction Mnemonics
//!
//! The closed set of 65C02 instruction families. Each [`Mnemonic`] may appear
//! under several opcode bytes, one per addressing mode.

use std::fmt;

/// 65C02 instruction family.
///
/// Bit-numbered families (BBRn, BBSn, RMBn, SMBn) have one variant per bit, since
/// each bit is encoded as a distinct opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mnemonic {
    /// Add with carry
    Adc,
    /// Logical AND with accumulator
    And,
    /// Arithmetic shift left
    Asl,
    /// Branch if bit 0 of a zero-page byte is reset
    Bbr0,
    /// Branch if bit 1 of a zero-page byte is reset
    Bbr1,
    /// Branch if bit 2 of a zero-page byte is reset
    Bbr2,
    /// Branch if bit 3 of a zero-page byte is reset
    Bbr3,
    /// Branch if bit 4 of a zero-page byte is reset
    Bbr4,
    /// Branch if bit 5 of a zero-page byte is reset
    Bbr5,
    /// Branch if bit 6 of a zero-page byte is reset
    Bbr6,
    /// Branch if bit 7 of a zero-page byte is reset
    Bbr7,
    /// Branch if bit 0 of a zero-page byte is set
    Bbs0,
    /// Branch if bit 1 of a zero-page byte is set
    Bbs1,
    /// Branch if bit 2 of a zero-page byte is set
    Bbs2,
    /// Branch if bit 3 of a zero-page byte is set
    Bbs3,
    /// Branch if bit 4 of a zero-page byte is set
    Bbs4,
    /// Branch if bit 5 of a zero-page byte is set
    Bbs5,
    /// Branch if bit 6 of a zero-page byte is set
    Bbs6,
    /// Branch if bit 7 of a zero-page byte is set
    Bbs7,
    /// Branch if carry clear
    Bcc,
    /// Branch if carry set
    Bcs,
    /// Branch if equal (zero set)
    Beq,
    /// Test bits against accumulator
    Bit,
    /// Branch if minus
    Bmi,
    /// Branch if not equal (zero clear)
    Bne,
    /// Branch if plus
    Bpl,
    /// Branch always
    Bra,
    /// Software interrupt
    Brk,
    /// Branch if overflow clear
    Bvc,
    /// Branch if overflow set
    Bvs,
    /// Clear carry
    Clc,
    /// Clear decimal mode
    Cld,
    /// Clear interrupt disable
    Cli,
    /// Clear overflow
    Clv,
    /// Compare with accumulator
    Cmp,
    /// Compare with X
    Cpx,
    /// Compare with Y
    Cpy,
    /// Decrement
    Dec,
    /// Decrement X
    Dex,
    /// Decrement Y
    Dey,
    /// Exclusive OR with accumulator
    Eor,
    /// Increment
    Inc,
    /// Increment X
    Inx,
    /// Increment Y
    Iny,
    /// Jump
    Jmp,
    /// Jump to subroutine
    Jsr,
    /// Load accumulator
    Lda,
    /// Load X
    Ldx,
    /// Load Y
    Ldy,
    /// Logical shift right
    Lsr,
    /// No operation
    Nop,
    /// Logical OR with accumulator
    Ora,
    /// Push accumulator
    Pha,
    /// Push processor status
    Php,
    /// Push X
    Phx,
    /// Push Y
    Phy,
    /// Pull accumulator
    Pla,
    /// Pull processor status
    Plp,
    /// Pull X
    Plx,
    /// Pull Y
    Ply,
    /// Reset bit 0 of a zero-page byte
    Rmb0,
    /// Reset bit 1 of a zero-page byte
    Rmb1,
    /// Reset bit 2 of a zero-page byte
    Rmb2,
    /// Reset bit 3 of a zero-page byte
    Rmb3,
    /// Reset bit 4 of a zero-page byte
    Rmb4,
    /// Reset bit 5 of a zero-page byte
    Rmb5,
    /// Reset bit 6 of a zero-page byte
    Rmb6,
    /// Reset bit 7 of a zero-page byte
    Rmb7,
    /// Rotate left
    Rol,
    /// Rotate right
    Ror,
    /// Return from interrupt
    Rti,
    /// Return from subroutine
    Rts,
    /// Subtract with carry
    Sbc,
    /// Set carry
    Sec,
    /// Set decimal mode
    Sed,
    /// Set interrupt disable
    Sei,
    /// Set bit 0 of a zero-page byte
    Smb0,
    /// Set bit 1 of a zero-page byte
    Smb1,
    /// Set bit 2 of a zero-page byte
    Smb2,
    /// Set bit 3 of a zero-page byte
    Smb3,
    /// Set bit 4 of a zero-page byte
    Smb4,
    /// Set bit 5 of a zero-page byte
    Smb5,
    /// Set bit 6 of a zero-page byte
    Smb6,
    /// Set bit 7 of a zero-page byte
    Smb7,
    /// Store accumulator
    Sta,
    /// Stop the processor
    Stp,
    /// Store X
    Stx,
    /// Store Y
    Sty,
    /// Store zero
    Stz,
    /// Transfer accumulator to X
    Tax,
    /// Transfer accumulator to Y
    Tay,
    /// Test and reset bits
    Trb,
    /// Test and set bits
    Tsb,
    /// Transfer stack pointer to X
    Tsx,
    /// Transfer X to accumulator
    Txa,
    /// Transfer X to stack pointer
    Txs,
    /// Transfer Y to accumulator
    Tya,
    /// Wait for interrupt
    Wai,
}

impl Mnemonic {
    /// Longest mnemonic text, in characters (e.g. "BBR0").
    pub const MAX_LEN: usize = 4;

    /// Uppercase assembly text for this mnemonic.
    ///
    /// ```
    /// use lib65c02dasm::Mnemonic;
    ///
    /// assert_eq!(Mnemonic::Lda.text(), "LDA");
    /// assert_eq!(Mnemonic::Bbs3.text(), "BBS3");
    /// ```
    pub const fn text(self) -> &'static str {
        use Mnemonic::*;

        match self {
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bbr0 => "BBR0",
            Bbr1 => "BBR1",
            Bbr2 => "BBR2",
            Bbr3 => "BBR3",
            Bbr4 => "BBR4",
            Bbr5 => "BBR5",
            Bbr6 => "BBR6",
            Bbr7 => "BBR7",
            Bbs0 => "BBS0",
            Bbs1 => "BBS1",
            Bbs2 => "BBS2",
            Bbs3 => "BBS3",
            Bbs4 => "BBS4",
            Bbs5 => "BBS5",
            Bbs6 => "BBS6",
            Bbs7 => "BBS7",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Bra => "BRA",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Phx => "PHX",
            Phy => "PHY",
            Pla => "PLA",
            Plp => "PLP",
            Plx => "PLX",
            Ply => "PLY",
            Rmb0 => "RMB0",
            Rmb1 => "RMB1",
            Rmb2 => "RMB2",
            Rmb3 => "RMB3",
            Rmb4 => "RMB4",
            Rmb5 => "RMB5",
            Rmb6 => "RMB6",
            Rmb7 => "RMB7",
            Rol => "ROL",
            Ror => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Smb0 => "SMB0",
            Smb1 => "SMB1",
            Smb2 => "SMB2",
            Smb3 => "SMB3",
            Smb4 => "SMB4",
            Smb5 => "SMB5",
            Smb6 => "SMB6",
            Smb7 => "SMB7",
            Sta => "STA",
            Stp => "STP",
            Stx => "STX",
            Sty => "STY",
            Stz => "STZ",
            Tax => "TAX",
            Tay => "TAY",
            Trb => "TRB",
            Tsb => "TSB",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
            Wai => "WAI",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.text())
    }
}
