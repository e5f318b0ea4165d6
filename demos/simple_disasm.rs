//! Basic disassembler usage example

use lib65c02dasm::disassemble;

fn main() {
    // Example machine code bytes
    let code = &[
        0xA9, 0x42, // LDA #$42
        0x8D, 0x00, 0x80, // STA $8000
        0x7C, 0x00, 0x80, // JMP ($8000, X)
    ];

    let lines = disassemble(code);

    // Print instructions
    println!("Disassembled code:");
    for line in lines {
        println!("{:04X}: {}", line.offset, line.text());
    }
}
