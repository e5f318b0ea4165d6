//! Integration tests for the streaming 65C02 disassembler

use lib65c02dasm::disassembler::formatter::MAX_OPERAND_TEXT_LEN;
use lib65c02dasm::{
    decode_hex, disassemble, supported_opcodes, AddressingMode, DecodeStatus, Mnemonic, Operand,
    StreamDecoder,
};

/// Feed `bytes` into a fresh decoder, returning it with the status after each byte
fn decode_all(bytes: &[u8]) -> (StreamDecoder, Vec<DecodeStatus>) {
    let mut decoder = StreamDecoder::new();
    let statuses = bytes.iter().map(|&b| decoder.decode_byte(b)).collect();
    (decoder, statuses)
}

#[test]
fn test_lda_immediate() {
    let (decoder, statuses) = decode_all(&[0xA9, 0x2A]);

    assert_eq!(
        statuses,
        vec![
            DecodeStatus::AwaitingFirstOperandByte,
            DecodeStatus::InstructionComplete
        ]
    );
    assert_eq!(decoder.mnemonic(), Some(Mnemonic::Lda));
    assert_eq!(decoder.mnemonic_text(), Some("LDA"));
    assert_eq!(decoder.render().as_deref(), Some("#$2A"));
}

#[test]
fn test_adc_absolute_is_little_endian() {
    let (decoder, statuses) = decode_all(&[0x6D, 0x34, 0x12]);

    assert_eq!(
        statuses,
        vec![
            DecodeStatus::AwaitingFirstOperandByte,
            DecodeStatus::AwaitingSecondOperandByte,
            DecodeStatus::InstructionComplete
        ]
    );
    assert_eq!(decoder.operand(), Some(Operand::new(0x1234)));
    assert_eq!(decoder.render_instruction().as_deref(), Some("ADC $1234"));
}

#[test]
fn test_status_sequence_for_every_opcode() {
    for opcode in supported_opcodes() {
        let mut decoder = StreamDecoder::new();
        let descriptor = lib65c02dasm::resolve(opcode).unwrap();

        let mut expected = match descriptor.operand_len {
            0 => vec![],
            1 => vec![DecodeStatus::AwaitingFirstOperandByte],
            _ => vec![
                DecodeStatus::AwaitingFirstOperandByte,
                DecodeStatus::AwaitingSecondOperandByte,
            ],
        };
        expected.push(DecodeStatus::InstructionComplete);

        let mut bytes = vec![opcode];
        bytes.extend(std::iter::repeat(0x5A).take(descriptor.operand_len as usize));
        let statuses: Vec<_> = bytes.iter().map(|&b| decoder.decode_byte(b)).collect();

        assert_eq!(statuses, expected, "Opcode 0x{:02X}", opcode);
        assert_eq!(decoder.opcode(), Some(opcode));
        assert!(decoder.render().is_some(), "Opcode 0x{:02X}", opcode);
    }
}

#[test]
fn test_undefined_byte_resynchronises() {
    let mut decoder = StreamDecoder::new();

    assert_eq!(decoder.decode_byte(0x02), DecodeStatus::NoInstruction);
    assert_eq!(decoder.instruction(), None);
    assert_eq!(decoder.operand(), None);
    assert_eq!(decoder.render(), None);

    // The next byte is a fresh opcode, not an operand of the discarded byte
    assert_eq!(decoder.decode_byte(0xEA), DecodeStatus::InstructionComplete);
    assert_eq!(decoder.mnemonic(), Some(Mnemonic::Nop));
    assert_eq!(decoder.bytes_consumed(), 2);
}

#[test]
fn test_undefined_byte_after_complete_instruction() {
    let mut decoder = StreamDecoder::new();

    decoder.feed(&[0xA9, 0x2A]);
    assert_eq!(decoder.decode_byte(0x03), DecodeStatus::NoInstruction);
    assert_eq!(decoder.operand(), None);
    assert_eq!(decoder.mnemonic(), None);
}

#[test]
fn test_undefined_value_as_operand_is_kept() {
    // 0x02 is only unassigned as an opcode; as an operand byte it is plain data
    let (decoder, _) = decode_all(&[0xA9, 0x02]);

    assert!(decoder.is_complete());
    assert_eq!(decoder.render().as_deref(), Some("#$02"));
}

#[test]
fn test_relative_forward_target() {
    let (decoder, _) = decode_all(&[0xF0, 0x05]);

    assert_eq!(decoder.addressing_mode(), Some(AddressingMode::Relative));
    assert_eq!(decoder.bytes_consumed(), 2);
    assert_eq!(decoder.render().as_deref(), Some("$07"));
}

#[test]
fn test_relative_backward_target() {
    let mut bytes = vec![0xEA; 8];
    bytes.extend([0xF0, 0xFB]);
    let (decoder, _) = decode_all(&bytes);

    // N = 10, offset -5
    assert_eq!(decoder.render().as_deref(), Some("$05"));
}

#[test]
fn test_relative_target_wraps_below_zero() {
    let (decoder, _) = decode_all(&[0xF0, 0xFB]);

    assert_eq!(decoder.render().as_deref(), Some("$FFFD"));
}

#[test]
fn test_relative_target_counts_discarded_bytes() {
    // Discarded bytes still advance the stream position
    let (decoder, _) = decode_all(&[0x02, 0x03, 0x80, 0x00]);

    assert_eq!(decoder.mnemonic(), Some(Mnemonic::Bra));
    assert_eq!(decoder.render().as_deref(), Some("$04"));
}

#[test]
fn test_accumulator_rendering() {
    let (decoder, _) = decode_all(&[0x6A]);

    assert_eq!(decoder.render().as_deref(), Some(" A"));
    assert_eq!(decoder.render_instruction().as_deref(), Some("ROR A"));
}

#[test]
fn test_render_before_operand_arrives() {
    let (decoder, _) = decode_all(&[0x6D]);

    assert_eq!(decoder.status(), DecodeStatus::AwaitingFirstOperandByte);
    assert_eq!(decoder.render(), None);
    assert_eq!(decoder.render_instruction(), None);
}

#[test]
fn test_accessors_are_idempotent() {
    let (decoder, _) = decode_all(&[0xEA, 0x7C, 0x00]);

    assert_eq!(decoder.status(), decoder.status());
    assert_eq!(decoder.instruction(), decoder.instruction());
    assert_eq!(decoder.mnemonic(), decoder.mnemonic());
    assert_eq!(decoder.addressing_mode(), decoder.addressing_mode());
    assert_eq!(decoder.opcode(), decoder.opcode());
    assert_eq!(decoder.operand(), decoder.operand());
    assert_eq!(decoder.render(), decoder.render());
    assert_eq!(decoder.bytes_consumed(), decoder.bytes_consumed());
}

#[test]
fn test_independent_decoders() {
    let mut first = StreamDecoder::new();
    let mut second = StreamDecoder::new();

    first.decode_byte(0xAD);
    second.decode_byte(0xEA);
    first.decode_byte(0x00);

    assert_eq!(first.status(), DecodeStatus::AwaitingSecondOperandByte);
    assert_eq!(second.status(), DecodeStatus::InstructionComplete);
    assert_eq!(second.bytes_consumed(), 1);
}

#[test]
fn test_operand_text_fits_max_len() {
    for opcode in supported_opcodes() {
        for operand in [[0x00, 0x00], [0xFF, 0xFF], [0x80, 0x12]] {
            let mut decoder = StreamDecoder::new();
            decoder.decode_byte(opcode);
            while !decoder.is_complete() {
                let index = decoder.operand().map_or(0, |_| 1);
                decoder.decode_byte(operand[index]);
            }

            let text = decoder.render().unwrap();
            assert!(
                text.len() <= MAX_OPERAND_TEXT_LEN,
                "Opcode 0x{:02X} rendered {:?}",
                opcode,
                text
            );
        }
    }
}

// "brick" demo program, from https://github.com/jborza/6502dasm
const BRICK_PREFIX: &str = "200606205106201006203b0620440660a9028531a902a200203106a908a240203106\
                            a905a280203106a907a2c0203106608630a040889130d0fb60";

#[test]
fn test_brick_program_listing() {
    let bytes = decode_hex(BRICK_PREFIX).unwrap();
    let lines = disassemble(&bytes);

    let text: Vec<(usize, String)> = lines.iter().map(|l| (l.offset, l.text())).collect();

    assert_eq!(text[0], (0x00, "JSR $0606".to_string()));
    assert_eq!(text[5], (0x0F, "RTS".to_string()));
    assert_eq!(text[6], (0x10, "LDA #$02".to_string()));
    assert_eq!(text[7], (0x12, "STA $31".to_string()));
    assert_eq!(text[22], (0x33, "LDY #$40".to_string()));
    assert_eq!(text[23], (0x35, "DEY".to_string()));
    assert_eq!(text[24], (0x36, "STA ($30), Y".to_string()));
    // BNE back to the DEY: stream position 0x3A minus 5
    assert_eq!(text[25], (0x38, "BNE $35".to_string()));
    assert_eq!(text[26], (0x3A, "RTS".to_string()));
    assert_eq!(lines.len(), 27);
    assert!(lines.iter().all(|l| !l.is_data()));
}
