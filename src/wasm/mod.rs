//! WebAssembly bindings for the 65C02 disassembler.
//!
//! This module provides JavaScript-callable interfaces to the streaming decoder,
//! enabling browser-side disassembly of byte streams as they arrive.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::StreamDisassembler;
