//! Bit-level primitives.
//!
//! This module contains the word-packed [`BitVector`], its staging
//! [`Builder`], and a handful of integer helpers used by hardware components
//! to slice register values.
//!
//! # Storage Layout
//!
//! Vectors are stored as 32-bit words in increasing significance: word 0
//! holds bits 0-31, word 1 holds bits 32-63, and so on. The textual form
//! produced by `Display` is the reverse (most significant bit first), but
//! that ordering only exists in the formatter.

pub mod bit_vector;
pub mod builder;

pub use bit_vector::BitVector;
pub use builder::Builder;

/// Number of bits in one storage word.
pub const WORD_BITS: usize = 32;

/// Errors reported by bit vector construction and operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitVectorError {
    /// Vector size is zero or not a multiple of [`WORD_BITS`].
    InvalidSize(usize),

    /// Extraction window size is zero or not a multiple of [`WORD_BITS`].
    InvalidWindowSize(usize),

    /// Binary operation between vectors of different sizes.
    SizeMismatch {
        /// Size of the receiver
        left: usize,
        /// Size of the argument
        right: usize,
    },

    /// Bit or byte index past the end of the vector.
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of valid indices
        len: usize,
    },

    /// Builder used after its single `build()` call.
    AlreadyBuilt,
}

impl std::fmt::Display for BitVectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BitVectorError::InvalidSize(size) => write!(
                f,
                "Invalid vector size {}: must be a positive multiple of {}",
                size, WORD_BITS
            ),
            BitVectorError::InvalidWindowSize(size) => write!(
                f,
                "Invalid window size {}: must be a positive multiple of {}",
                size, WORD_BITS
            ),
            BitVectorError::SizeMismatch { left, right } => {
                write!(f, "Vector size mismatch: {} bits vs {} bits", left, right)
            }
            BitVectorError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range 0..{}", index, len)
            }
            BitVectorError::AlreadyBuilt => write!(f, "Builder has already been built"),
        }
    }
}

impl std::error::Error for BitVectorError {}

/// Returns `true` if `size` is a legal vector or window size.
pub(crate) fn is_valid_size(size: usize) -> bool {
    size > 0 && size % WORD_BITS == 0
}

/// Mask with the `len` low bits set. Lengths past 32 give a full mask.
fn mask(len: u32) -> u32 {
    if len >= 32 {
        u32::MAX
    } else {
        (1 << len) - 1
    }
}

/// Keeps the `len` least significant bits of `value`, clearing the rest.
///
/// A `len` of 32 or more keeps `value` unchanged.
///
/// # Examples
///
/// ```rust
/// use gameboj::bits::clip;
///
/// assert_eq!(clip(4, 0xAB), 0x0B);
/// assert_eq!(clip(0, 0xAB), 0x00);
/// assert_eq!(clip(32, 0xDEAD_BEEF), 0xDEAD_BEEF);
/// assert_eq!(clip(33, 0xFF), 0xFF);
/// ```
pub fn clip(len: u32, value: u32) -> u32 {
    value & mask(len)
}

/// Extracts `len` bits of `value` starting at bit `start`, right-aligned.
///
/// Bits above bit 31 read as zero, so a range reaching past the top of the
/// word is zero-extended rather than rejected.
///
/// # Examples
///
/// ```rust
/// use gameboj::bits::extract;
///
/// // Top three bits of a 16-bit bus address
/// assert_eq!(extract(0xA123, 13, 3), 0b101);
///
/// // Only bits 30 and 31 exist
/// assert_eq!(extract(0xF000_0000, 30, 4), 0b0011);
/// assert_eq!(extract(0xFFFF_FFFF, 32, 8), 0);
/// ```
pub fn extract(value: u32, start: u32, len: u32) -> u32 {
    value.checked_shr(start).map_or(0, |v| clip(len, v))
}

/// Returns `true` if bit `index` of `value` is set. Indices past 31 are clear.
pub fn test(value: u32, index: u32) -> bool {
    value.checked_shr(index).map_or(false, |v| v & 1 != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_size() {
        assert!(is_valid_size(32));
        assert!(is_valid_size(256));
        assert!(!is_valid_size(0));
        assert!(!is_valid_size(1));
        assert!(!is_valid_size(33));
    }

    #[test]
    fn test_clip_and_extract() {
        assert_eq!(clip(5, 0xFF), 0x1F);
        assert_eq!(extract(0xFC16_AFEE, 28, 4), 0xF);
        assert_eq!(extract(0xFC16_AFEE, 0, 32), 0xFC16_AFEE);
        assert_eq!(extract(0x1234, 0, 0), 0);
    }

    #[test]
    fn test_helpers_past_word_width() {
        assert!(!test(1, 32));
        assert!(!test(u32::MAX, u32::MAX));
        assert_eq!(clip(33, 0xFF), 0xFF);
        assert_eq!(clip(u32::MAX, 0xDEAD_BEEF), 0xDEAD_BEEF);
        // start + len > 32: missing high bits are zero
        assert_eq!(extract(0xF000_0000, 30, 4), 0b0011);
        assert_eq!(extract(0x8000_0000, 31, 32), 1);
        assert_eq!(extract(u32::MAX, 32, 1), 0);
        assert_eq!(extract(u32::MAX, u32::MAX, u32::MAX), 0);
    }

    #[test]
    fn test_bit_test() {
        assert!(test(0b1000, 3));
        assert!(!test(0b1000, 2));
        assert!(test(0x8000_0000, 31));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            BitVectorError::InvalidSize(1).to_string(),
            "Invalid vector size 1: must be a positive multiple of 32"
        );
        assert_eq!(
            BitVectorError::SizeMismatch { left: 256, right: 32 }.to_string(),
            "Vector size mismatch: 256 bits vs 32 bits"
        );
    }
}
