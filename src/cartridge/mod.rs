//! Cartridge memory bank controllers.
//!
//! Game Boy cartridges larger than 32KB of ROM (or carrying RAM) contain a
//! memory bank controller that maps banks of the cartridge's storage into the
//! CPU's fixed address windows:
//!
//! | Range           | Region bits 15-13 | Contents                  |
//! |-----------------|-------------------|---------------------------|
//! | `0x0000-0x3FFF` | 0, 1              | ROM bank 0 (or upper set) |
//! | `0x4000-0x7FFF` | 2, 3              | Switchable ROM bank       |
//! | `0xA000-0xBFFF` | 5                 | Switchable RAM bank       |
//!
//! Writes into the ROM windows do not modify ROM; they set the controller's
//! bank registers.

pub mod mbc1;

pub use mbc1::{Mbc1, Mode};
