//! Fuzz target for the streaming decoder.
//!
//! This target feeds arbitrary byte sequences to the decoder, in arbitrary
//! chunk sizes, to find edge cases and crashes in instruction assembly.

#![no_main]

use arbitrary::Arbitrary;
use lib65c02dasm::disassembler::formatter::MAX_OPERAND_TEXT_LEN;
use lib65c02dasm::{disassemble, DecodeStatus, StreamDecoder};
use libfuzzer_sys::fuzz_target;

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    /// Chunk size for the `feed` pass (0 means byte-at-a-time only)
    chunk: u8,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 {
        return;
    }

    let mut decoder = StreamDecoder::new();

    for (i, &byte) in input.bytes.iter().enumerate() {
        let status = decoder.decode_byte(byte);

        // Every byte is counted, even discarded ones
        assert_eq!(decoder.bytes_consumed(), i + 1);

        match status {
            DecodeStatus::NoInstruction => {
                assert!(decoder.instruction().is_none());
                assert!(decoder.render().is_none());
            }
            DecodeStatus::InstructionComplete => {
                let text = decoder.render().expect("complete instruction must render");
                assert!(text.len() <= MAX_OPERAND_TEXT_LEN);
            }
            DecodeStatus::AwaitingFirstOperandByte => {
                assert!(decoder.operand().is_none());
            }
            DecodeStatus::AwaitingSecondOperandByte => {
                assert!(decoder.operand().is_some());
            }
        }
    }

    // Chunked feeding must end in the same state as byte-at-a-time feeding
    if input.chunk > 0 {
        let mut chunked = StreamDecoder::new();
        for chunk in input.bytes.chunks(input.chunk as usize) {
            chunked.feed(chunk);
        }
        assert_eq!(chunked.status(), decoder.status());
        assert_eq!(chunked.instruction(), decoder.instruction());
        assert_eq!(chunked.operand(), decoder.operand());
    }

    // Listing lines must cover the input exactly
    let lines = disassemble(&input.bytes);
    let covered: usize = lines.iter().map(|line| line.bytes.len()).sum();
    assert_eq!(covered, input.bytes.len());
});
