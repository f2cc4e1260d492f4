//! Bus-attached hardware components.
//!
//! This module provides the `Device` trait implemented by components that sit
//! on the Game Boy's 16-bit address bus, along with the plain `Rom` and `Ram`
//! storage they are built from.
//!
//! # Architecture
//!
//! - **Device trait**: Components answer reads and accept writes by absolute
//!   bus address. A component that does not decode an address answers `None`
//!   so the bus can try the next component or float the line.
//! - **Storage**: `Rom` and `Ram` are indexed by offset, not bus address. A
//!   component such as a cartridge controller translates addresses into
//!   offsets before touching them.
//!
//! # Example
//!
//! ```rust
//! use gameboj::{Device, Mbc1, Rom};
//!
//! let mut image = vec![0; 0x8000];
//! image[0x0150] = 0xC3;
//!
//! let cartridge = Mbc1::new(Rom::new(image), 0)?;
//! assert_eq!(cartridge.read(0x0150), Some(0xC3));
//!
//! // Video RAM is not decoded by the cartridge
//! assert_eq!(cartridge.read(0x8000), None);
//! # Ok::<(), gameboj::DeviceError>(())
//! ```

pub mod ram;
pub mod rom;

pub use ram::Ram;
pub use rom::Rom;

/// Abstract interface for components attached to the address bus.
///
/// # Design
///
/// - **Absolute addressing**: The device receives the full 16-bit bus address
/// - **Optional data**: `read` returns `None` for addresses the device does
///   not decode
/// - **No panics**: Writes to undecoded or read-only addresses are ignored
///
/// # Examples
///
/// ```rust
/// use gameboj::Device;
///
/// struct HighRam {
///     data: [u8; 0x7F],
/// }
///
/// impl Device for HighRam {
///     fn read(&self, address: u16) -> Option<u8> {
///         match address {
///             0xFF80..=0xFFFE => Some(self.data[(address - 0xFF80) as usize]),
///             _ => None,
///         }
///     }
///
///     fn write(&mut self, address: u16, value: u8) {
///         if let 0xFF80..=0xFFFE = address {
///             self.data[(address - 0xFF80) as usize] = value;
///         }
///     }
/// }
/// ```
pub trait Device {
    /// Reads the byte at `address`, or `None` if the device does not answer.
    fn read(&self, address: u16) -> Option<u8>;

    /// Writes `value` at `address`. Ignored if the device does not decode it.
    fn write(&mut self, address: u16, value: u8);
}

/// Error returned when a device cannot be constructed or restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// ROM image length is zero or not a power of two.
    InvalidRomSize(usize),

    /// RAM size is neither zero nor a power of two.
    InvalidRamSize(usize),

    /// Saved RAM image is larger than the device's RAM.
    RamImageTooLarge {
        /// Length of the supplied image
        len: usize,
        /// RAM size of the device
        capacity: usize,
    },
}

impl std::fmt::Display for DeviceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DeviceError::InvalidRomSize(size) => {
                write!(f, "Invalid ROM size {}: must be a non-zero power of two", size)
            }
            DeviceError::InvalidRamSize(size) => {
                write!(f, "Invalid RAM size {}: must be zero or a power of two", size)
            }
            DeviceError::RamImageTooLarge { len, capacity } => write!(
                f,
                "RAM image of {} bytes does not fit in {} bytes of RAM",
                len, capacity
            ),
        }
    }
}

impl std::error::Error for DeviceError {}
