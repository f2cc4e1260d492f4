//! # Game Boy Bit Primitives
//!
//! Bit-precise building blocks for a cycle-accurate Game Boy emulator.
//!
//! This crate provides the fixed-width, word-packed [`BitVector`] used by the
//! video subsystem to compose scan lines, the single-use [`Builder`] that
//! assembles vectors one byte at a time, and the MBC1 cartridge bank
//! controller that decodes bus addresses into banked ROM/RAM offsets.
//!
//! ## Quick Start
//!
//! ```rust
//! use gameboj::{BitVector, Builder};
//!
//! // A 32-bit vector holding 0x00FF0000
//! let line = Builder::new(32)?.set_byte(2, 0xFF)?.build()?;
//! assert_eq!(line.to_string(), "00000000111111110000000000000000");
//!
//! // Scroll it by 8 bits, blank past the edge
//! let scrolled = line.extract_zero_extended(8, 32)?;
//! assert_eq!(format!("{:X}", scrolled), "0000FF00");
//!
//! // Or wrap around, as a repeating tile row would
//! let all_ones = BitVector::filled(64, true)?;
//! assert_eq!(all_ones.extract_wrapped(-7, 32)?, BitVector::filled(32, true)?);
//! # Ok::<(), gameboj::BitVectorError>(())
//! ```
//!
//! ## Modules
//!
//! - `bits` - Bit vector, builder and integer bit helpers
//! - `devices` - Bus `Device` trait and ROM/RAM storage
//! - `cartridge` - MBC1 bank controller
//! - `wasm` - JavaScript bindings (feature `wasm`)

pub mod bits;
pub mod cartridge;
pub mod devices;
pub mod wasm;

// Re-export public API
pub use bits::{BitVector, BitVectorError, Builder, WORD_BITS};
pub use cartridge::{Mbc1, Mode};
pub use devices::{Device, DeviceError, Ram, Rom};
