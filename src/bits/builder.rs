//! Single-use byte-oriented builder for [`BitVector`].

use super::{is_valid_size, BitVector, BitVectorError};

/// Staging buffer that assembles a [`BitVector`] one byte at a time.
///
/// The buffer starts zeroed. Byte 0 is the least significant byte (bits
/// 0-7). Bytes can be written in any order and overwritten freely until
/// [`build`](Builder::build) is called, which hands the buffer to the new
/// vector. After that every call fails with `BitVectorError::AlreadyBuilt`.
///
/// # Examples
///
/// ```rust
/// use gameboj::{BitVectorError, Builder};
///
/// let mut builder = Builder::new(32)?;
/// let v = builder.set_byte(0, 0xEE)?.set_byte(3, 0xFC)?.build()?;
/// assert_eq!(v.words(), &[0xFC00_00EE]);
///
/// assert_eq!(builder.build(), Err(BitVectorError::AlreadyBuilt));
/// # Ok::<(), gameboj::BitVectorError>(())
/// ```
#[derive(Debug)]
pub struct Builder {
    /// `None` once the buffer has been handed to a vector
    bytes: Option<Vec<u8>>,
}

impl Builder {
    /// Creates a builder for a vector of `size` bits.
    ///
    /// # Errors
    ///
    /// Returns `BitVectorError::InvalidSize` if `size` is zero or not a
    /// multiple of 32.
    pub fn new(size: usize) -> Result<Self, BitVectorError> {
        if !is_valid_size(size) {
            return Err(BitVectorError::InvalidSize(size));
        }
        Ok(Self {
            bytes: Some(vec![0; size / 8]),
        })
    }

    /// Writes `value` at byte `index`, leaving every other byte untouched.
    ///
    /// Returns the builder so writes can be chained.
    ///
    /// # Errors
    ///
    /// - `BitVectorError::AlreadyBuilt` if `build()` has been called
    /// - `BitVectorError::IndexOutOfRange` if `index >= size / 8`
    pub fn set_byte(&mut self, index: usize, value: u8) -> Result<&mut Self, BitVectorError> {
        let bytes = self.bytes.as_mut().ok_or(BitVectorError::AlreadyBuilt)?;
        let len = bytes.len();
        let byte = bytes
            .get_mut(index)
            .ok_or(BitVectorError::IndexOutOfRange { index, len })?;
        *byte = value;
        Ok(self)
    }

    /// Finalizes the buffer into an immutable vector.
    ///
    /// Bytes are packed four per word, byte 0 least significant.
    ///
    /// # Errors
    ///
    /// Returns `BitVectorError::AlreadyBuilt` on every call after the first.
    pub fn build(&mut self) -> Result<BitVector, BitVectorError> {
        let bytes = self.bytes.take().ok_or(BitVectorError::AlreadyBuilt)?;
        let words = bytes
            .chunks_exact(4)
            .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();
        Ok(BitVector::from_boxed_words(words))
    }

    /// Returns `true` once `build()` has succeeded.
    pub fn is_built(&self) -> bool {
        self.bytes.is_none()
    }
}
