//! ROM storage.
//!
//! Provides read-only byte storage indexed by offset.

/// Immutable byte image, such as a cartridge dump.
///
/// There is no write method: the contents are fixed at construction. Reads
/// go through the device that owns the ROM, which masks offsets to its size.
///
/// # Examples
///
/// ```rust
/// use gameboj::Rom;
///
/// let rom = Rom::new(vec![0x00, 0xC3, 0x50, 0x01]);
/// assert_eq!(rom.size(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rom {
    data: Box<[u8]>,
}

impl Rom {
    /// Wraps `data` as ROM contents.
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }

    /// Reads the byte at `index`. `index` must be below `size()`.
    pub(crate) fn read(&self, index: usize) -> u8 {
        self.data[index]
    }

    /// Number of bytes in the image.
    pub fn size(&self) -> usize {
        self.data.len()
    }
}
