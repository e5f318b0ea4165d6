//! Streaming disassembly of a hex-encoded program.
//!
//! Feeds the program to a `StreamDecoder` one byte at a time and prints a line as
//! soon as each instruction completes. Set `RUST_LOG=trace` to watch the decoder
//! state after every byte.
//!
//! Program: "brick", from https://github.com/jborza/6502dasm

use lib65c02dasm::{
    decode_hex, format_line, DecodeStatus, ListingLine, ListingOptions, StreamDecoder,
};

const BRICK: &str = "\
    200606205106201006203b0620440660a9028531a902a200203106a908a240203106a905a280203106a907a2c0\
    203106608630a040889130d0fb60a9058501a9f0850360a9118512a91e8513a900851660203107203007200e07\
    20660620b80620d3064c5106206d0620800660a405c403f00ca9009100a403a9069100840560209606a000a900\
    9114a9019110a5108514a511851560a9008511a5138510061006100610061026110610261118a51065128510e6\
    11e61160a9012416d005c6124cc506e612a9022416d005c6134cd206e61360a5121007200007e612e612c920d0\
    07200007c612c612a5131007200707e613e613c920d007200707c613c61360a5164901851660a5164902851660\
    a602e008f005e002f00c60a503c9e0f010c603c61260a503c9fff005e603e612606060a5ffa20086ffc961f007\
    c964f0084c4c07a908850260a902850260a900850260";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let program = decode_hex(BRICK)?;
    let options = ListingOptions::default();

    let mut decoder = StreamDecoder::new();
    let mut bytes = Vec::new();
    let mut offset = 0;

    for byte in program {
        if bytes.is_empty() {
            offset = decoder.bytes_consumed();
        }
        bytes.push(byte);

        match decoder.decode_byte(byte) {
            DecodeStatus::InstructionComplete => {
                let line = ListingLine {
                    offset,
                    bytes: std::mem::take(&mut bytes),
                    mnemonic: decoder.mnemonic_text().unwrap_or_default(),
                    operand: decoder.render().unwrap_or_default().trim_start().to_string(),
                };
                println!("{}", format_line(&line, &options));
            }
            DecodeStatus::NoInstruction => {
                println!("{:>3X}:\t{:02X}        ???", offset, byte);
                bytes.clear();
            }
            DecodeStatus::AwaitingFirstOperandByte | DecodeStatus::AwaitingSecondOperandByte => {}
        }
    }

    Ok(())
}
