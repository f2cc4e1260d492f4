//! RAM storage.
//!
//! Provides readable and writable byte storage indexed by offset.

/// Zero-initialized, writable byte storage.
///
/// Offset access is internal to the devices that own the RAM, which mask
/// every offset to the RAM size first. Outside the crate the contents are
/// visible as a whole through [`as_bytes`](Ram::as_bytes).
///
/// # Examples
///
/// ```rust
/// use gameboj::Ram;
///
/// let ram = Ram::new(0x2000); // 8KB cartridge RAM
///
/// assert_eq!(ram.size(), 0x2000);
/// assert!(ram.as_bytes().iter().all(|&b| b == 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ram {
    data: Vec<u8>,
}

impl Ram {
    /// Creates `size` bytes of RAM, all zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size],
        }
    }

    /// Reads the byte at `index`. `index` must be below `size()`.
    pub(crate) fn read(&self, index: usize) -> u8 {
        self.data[index]
    }

    /// Writes `value` at `index`. `index` must be below `size()`.
    pub(crate) fn write(&mut self, index: usize, value: u8) {
        self.data[index] = value;
    }

    /// Number of bytes of storage.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Entire contents, in offset order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Copies `bytes` into the start of the RAM, leaving the rest untouched.
    /// `bytes` must be no longer than the RAM.
    pub(crate) fn load_bytes(&mut self, bytes: &[u8]) {
        self.data[..bytes.len()].copy_from_slice(bytes);
    }
}
