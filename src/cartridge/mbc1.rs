//! MBC1 memory bank controller.
//!
//! The MBC1 supports up to 2MB of ROM and 32KB of RAM through four
//! registers written via the ROM address windows:
//!
//! - `0x0000-0x1FFF`: RAM enable (`0xA` in the low nibble enables)
//! - `0x2000-0x3FFF`: 5 low bits of the ROM bank (0 reads as 1)
//! - `0x4000-0x5FFF`: 2-bit register, upper ROM bank bits or RAM bank
//! - `0x6000-0x7FFF`: banking mode select
//!
//! In mode 0 the 2-bit register only affects the switchable ROM window. In
//! mode 1 it also selects the upper bits of the fixed ROM window and the RAM
//! bank.

use log::{debug, trace};

use crate::bits;
use crate::devices::{Device, DeviceError, Ram, Rom};

/// Value of the low nibble that enables cartridge RAM.
const RAM_ENABLE: u32 = 0xA;

/// Byte returned by reads of disabled or absent RAM.
const RAM_DISABLED_VALUE: u8 = 0xFF;

/// Banking mode selected by writes to `0x6000-0x7FFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Mode 0: the 2-bit register only selects upper ROM bank bits for the
    /// switchable window.
    RomBanking,
    /// Mode 1: the 2-bit register also applies to the fixed ROM window and
    /// selects the RAM bank.
    RamBanking,
}

/// MBC1 cartridge: ROM, optional RAM, and the bank registers.
///
/// # Examples
///
/// ```rust
/// use gameboj::{Device, Mbc1, Rom};
///
/// // 128KB ROM where each byte holds its bank number
/// let image: Vec<u8> = (0..0x20000).map(|i| (i / 0x4000) as u8).collect();
/// let mut cartridge = Mbc1::new(Rom::new(image), 0x2000)?;
///
/// assert_eq!(cartridge.read(0x4000), Some(1));
///
/// cartridge.write(0x2000, 5); // select bank 5
/// assert_eq!(cartridge.read(0x4000), Some(5));
/// assert_eq!(cartridge.read(0x0000), Some(0));
/// # Ok::<(), gameboj::DeviceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Mbc1 {
    rom: Rom,
    ram: Ram,

    ram_enabled: bool,
    mode: Mode,
    rom_lsb5: u32,
    ram_rom2: u32,

    rom_mask: usize,
    ram_mask: usize,
}

impl Mbc1 {
    /// Creates a controller for `rom` with `ram_size` bytes of zeroed RAM.
    ///
    /// Registers start in their power-on state: RAM disabled, mode 0,
    /// ROM bank 1.
    ///
    /// # Errors
    ///
    /// - `DeviceError::InvalidRomSize` if the ROM length is not a power of two
    /// - `DeviceError::InvalidRamSize` if `ram_size` is neither zero nor a
    ///   power of two
    pub fn new(rom: Rom, ram_size: usize) -> Result<Self, DeviceError> {
        if !rom.size().is_power_of_two() {
            return Err(DeviceError::InvalidRomSize(rom.size()));
        }
        if ram_size != 0 && !ram_size.is_power_of_two() {
            return Err(DeviceError::InvalidRamSize(ram_size));
        }

        let rom_mask = rom.size() - 1;
        Ok(Self {
            rom,
            ram: Ram::new(ram_size),
            ram_enabled: false,
            mode: Mode::RomBanking,
            rom_lsb5: 1,
            ram_rom2: 0,
            rom_mask,
            ram_mask: ram_size.saturating_sub(1),
        })
    }

    /// Current banking mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether cartridge RAM is currently enabled.
    pub fn is_ram_enabled(&self) -> bool {
        self.ram_enabled
    }

    /// Size of the cartridge RAM in bytes (0 if the cartridge has none).
    pub fn ram_size(&self) -> usize {
        self.ram.size()
    }

    /// Copies the entire RAM, for battery-backed save files.
    pub fn read_whole_ram(&self) -> Vec<u8> {
        self.ram.as_bytes().to_vec()
    }

    /// Restores RAM from a save image.
    ///
    /// An image shorter than the RAM overwrites only its prefix.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::RamImageTooLarge` if `data` is longer than the
    /// RAM. The RAM is left unchanged in that case.
    pub fn write_whole_ram(&mut self, data: &[u8]) -> Result<(), DeviceError> {
        if data.len() > self.ram.size() {
            return Err(DeviceError::RamImageTooLarge {
                len: data.len(),
                capacity: self.ram.size(),
            });
        }

        debug!("MBC1: restoring {} of {} RAM bytes", data.len(), self.ram.size());
        self.ram.load_bytes(data);
        Ok(())
    }

    /// Upper two address bits for the fixed ROM window and the RAM.
    fn msb2(&self) -> u32 {
        match self.mode {
            Mode::RomBanking => 0,
            Mode::RamBanking => self.ram_rom2,
        }
    }

    fn rom_offset(&self, bits_20_19: u32, bits_18_14: u32, address: u16) -> usize {
        let offset = (bits_20_19 << 19) | (bits_18_14 << 14) | bits::clip(14, address as u32);
        offset as usize & self.rom_mask
    }

    fn ram_offset(&self, address: u16) -> usize {
        let offset = (self.msb2() << 13) | bits::clip(13, address as u32);
        offset as usize & self.ram_mask
    }

    fn ram_available(&self) -> bool {
        self.ram_enabled && self.ram.size() > 0
    }
}

impl Device for Mbc1 {
    fn read(&self, address: u16) -> Option<u8> {
        match bits::extract(address as u32, 13, 3) {
            0 | 1 => Some(self.rom.read(self.rom_offset(self.msb2(), 0, address))),
            2 | 3 => Some(
                self.rom
                    .read(self.rom_offset(self.ram_rom2, self.rom_lsb5, address)),
            ),
            5 if self.ram_available() => Some(self.ram.read(self.ram_offset(address))),
            5 => Some(RAM_DISABLED_VALUE),
            _ => None,
        }
    }

    fn write(&mut self, address: u16, value: u8) {
        let value = value as u32;
        match bits::extract(address as u32, 13, 3) {
            0 => {
                self.ram_enabled = bits::clip(4, value) == RAM_ENABLE;
                trace!("MBC1: RAM enabled = {}", self.ram_enabled);
            }
            1 => {
                self.rom_lsb5 = bits::clip(5, value).max(1);
                trace!("MBC1: ROM bank low bits = {:#04X}", self.rom_lsb5);
            }
            2 => {
                self.ram_rom2 = bits::clip(2, value);
                trace!("MBC1: 2-bit bank register = {}", self.ram_rom2);
            }
            3 => {
                self.mode = if bits::test(value, 0) {
                    Mode::RamBanking
                } else {
                    Mode::RomBanking
                };
                trace!("MBC1: mode = {:?}", self.mode);
            }
            5 if self.ram_available() => {
                let offset = self.ram_offset(address);
                self.ram.write(offset, value as u8);
            }
            _ => {}
        }
    }
}
