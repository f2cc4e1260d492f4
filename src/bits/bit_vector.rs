//! Immutable, word-packed bit vector.
//!
//! A [`BitVector`] is a fixed-size sequence of bits whose size is always a
//! positive multiple of 32. Every operation returns a new vector; the backing
//! words are never modified after construction, so a vector can be shared
//! freely between readers.
//!
//! # Windowed Extraction
//!
//! The video subsystem composes scan lines by sliding a window over a source
//! vector. Two edge policies are supported:
//!
//! - **Zero-extended**: bits outside the source read as `0`
//! - **Wrapped**: the source repeats with period `size()` in both directions
//!
//! Both policies accept any start offset, including negative ones and offsets
//! past the end. When the offset is a multiple of 32 each output word is a
//! single source word; otherwise each output word is merged from two adjacent
//! source words.

use std::fmt;
use std::ops;

use super::{is_valid_size, BitVectorError, WORD_BITS};

/// Fixed-size, immutable sequence of bits stored in 32-bit words.
///
/// Word 0 holds bits 0-31 (least significant). Equality and hashing are
/// structural: two vectors are equal iff they have the same words.
///
/// # Examples
///
/// ```rust
/// use gameboj::BitVector;
///
/// let zeros = BitVector::new(64)?;
/// let ones = BitVector::filled(64, true)?;
///
/// assert_eq!(zeros.not(), ones);
/// assert_eq!(zeros.and(&ones)?, zeros);
/// assert_eq!(zeros.or(&ones)?, ones);
/// # Ok::<(), gameboj::BitVectorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitVector {
    words: Box<[u32]>,
}

/// Edge policy for windowed extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extension {
    Zero,
    Wrapped,
}

impl BitVector {
    /// Creates a vector of `size` bits, all cleared.
    ///
    /// # Errors
    ///
    /// Returns `BitVectorError::InvalidSize` if `size` is zero or not a
    /// multiple of 32.
    pub fn new(size: usize) -> Result<Self, BitVectorError> {
        Self::filled(size, false)
    }

    /// Creates a vector of `size` bits, every bit equal to `bit`.
    ///
    /// # Errors
    ///
    /// Returns `BitVectorError::InvalidSize` if `size` is zero or not a
    /// multiple of 32.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gameboj::BitVector;
    ///
    /// let v = BitVector::filled(32, true)?;
    /// assert_eq!(v.words(), &[0xFFFF_FFFF]);
    ///
    /// assert!(BitVector::filled(31, true).is_err());
    /// # Ok::<(), gameboj::BitVectorError>(())
    /// ```
    pub fn filled(size: usize, bit: bool) -> Result<Self, BitVectorError> {
        if !is_valid_size(size) {
            return Err(BitVectorError::InvalidSize(size));
        }

        let fill = if bit { u32::MAX } else { 0 };
        Ok(Self {
            words: vec![fill; size / WORD_BITS].into_boxed_slice(),
        })
    }

    /// Creates a vector from its words, least significant word first.
    ///
    /// # Errors
    ///
    /// Returns `BitVectorError::InvalidSize(0)` if `words` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gameboj::BitVector;
    ///
    /// let v = BitVector::from_words(vec![0x0000_0001, 0x8000_0000])?;
    /// assert_eq!(v.size(), 64);
    /// assert!(v.test_bit(0)?);
    /// assert!(v.test_bit(63)?);
    /// # Ok::<(), gameboj::BitVectorError>(())
    /// ```
    pub fn from_words(words: Vec<u32>) -> Result<Self, BitVectorError> {
        if words.is_empty() {
            return Err(BitVectorError::InvalidSize(0));
        }
        Ok(Self {
            words: words.into_boxed_slice(),
        })
    }

    /// Wraps words already known to be non-empty.
    pub(crate) fn from_boxed_words(words: Box<[u32]>) -> Self {
        debug_assert!(!words.is_empty());
        Self { words }
    }

    /// Number of bits in the vector.
    pub fn size(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// Backing words, least significant first.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Returns the bit at `index` (0 = least significant).
    ///
    /// # Errors
    ///
    /// Returns `BitVectorError::IndexOutOfRange` if `index >= size()`.
    pub fn test_bit(&self, index: usize) -> Result<bool, BitVectorError> {
        if index >= self.size() {
            return Err(BitVectorError::IndexOutOfRange {
                index,
                len: self.size(),
            });
        }
        let word = self.words[index / WORD_BITS];
        Ok(super::test(word, (index % WORD_BITS) as u32))
    }

    /// Returns the bitwise complement.
    #[allow(clippy::should_implement_trait)]
    pub fn not(&self) -> BitVector {
        Self::from_boxed_words(self.words.iter().map(|w| !w).collect())
    }

    /// Bitwise AND of two vectors of the same size.
    ///
    /// # Errors
    ///
    /// Returns `BitVectorError::SizeMismatch` if the sizes differ.
    pub fn and(&self, other: &BitVector) -> Result<BitVector, BitVectorError> {
        self.zip_words(other, |a, b| a & b)
    }

    /// Bitwise OR of two vectors of the same size.
    ///
    /// # Errors
    ///
    /// Returns `BitVectorError::SizeMismatch` if the sizes differ.
    pub fn or(&self, other: &BitVector) -> Result<BitVector, BitVectorError> {
        self.zip_words(other, |a, b| a | b)
    }

    /// Bitwise XOR of two vectors of the same size.
    ///
    /// # Errors
    ///
    /// Returns `BitVectorError::SizeMismatch` if the sizes differ.
    pub fn xor(&self, other: &BitVector) -> Result<BitVector, BitVectorError> {
        self.zip_words(other, |a, b| a ^ b)
    }

    fn zip_words(
        &self,
        other: &BitVector,
        op: impl Fn(u32, u32) -> u32,
    ) -> Result<BitVector, BitVectorError> {
        if self.words.len() != other.words.len() {
            return Err(BitVectorError::SizeMismatch {
                left: self.size(),
                right: other.size(),
            });
        }

        Ok(Self::from_boxed_words(
            self.words
                .iter()
                .zip(other.words.iter())
                .map(|(&a, &b)| op(a, b))
                .collect(),
        ))
    }

    /// Extracts `size` bits starting at bit `start`, reading zeros outside
    /// the vector.
    ///
    /// Bit `i` of the result is bit `start + i` of `self` when that index is
    /// in `0..self.size()`, and `0` otherwise.
    ///
    /// # Errors
    ///
    /// Returns `BitVectorError::InvalidWindowSize` if `size` is zero or not
    /// a multiple of 32.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gameboj::BitVector;
    ///
    /// let v = BitVector::from_words(vec![0xFC16_AFEE])?;
    /// let window = v.extract_zero_extended(3, 32)?;
    /// assert_eq!(window.words(), &[0x1F82_D5FD]);
    ///
    /// // Entirely past the end
    /// assert_eq!(v.extract_zero_extended(64, 32)?, BitVector::new(32)?);
    /// # Ok::<(), gameboj::BitVectorError>(())
    /// ```
    pub fn extract_zero_extended(
        &self,
        start: i64,
        size: usize,
    ) -> Result<BitVector, BitVectorError> {
        if !is_valid_size(size) {
            return Err(BitVectorError::InvalidWindowSize(size));
        }
        Ok(self.extract(start, size, Extension::Zero))
    }

    /// Extracts `size` bits starting at bit `start`, treating the vector as
    /// infinitely repeated in both directions.
    ///
    /// Bit `i` of the result is bit `(start + i) mod self.size()` of `self`,
    /// using the non-negative modulo. Windows larger than the vector tile it.
    ///
    /// # Errors
    ///
    /// Returns `BitVectorError::InvalidWindowSize` if `size` is zero or not
    /// a multiple of 32.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gameboj::BitVector;
    ///
    /// let v = BitVector::from_words(vec![0xFC16_AFEE])?;
    /// let window = v.extract_wrapped(3, 32)?;
    /// assert_eq!(window.words(), &[0xDF82_D5FD]);
    ///
    /// // One full period back is the vector itself
    /// assert_eq!(v.extract_wrapped(-32, 32)?, v);
    /// # Ok::<(), gameboj::BitVectorError>(())
    /// ```
    pub fn extract_wrapped(&self, start: i64, size: usize) -> Result<BitVector, BitVectorError> {
        if !is_valid_size(size) {
            return Err(BitVectorError::InvalidWindowSize(size));
        }
        Ok(self.extract(start, size, Extension::Wrapped))
    }

    /// Shifts every bit `distance` places towards the most significant end
    /// (towards the least significant end when negative), filling with zeros.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gameboj::BitVector;
    ///
    /// let v = BitVector::from_words(vec![0x8000_0001, 0x0000_0000])?;
    /// assert_eq!(v.shift(4).words(), &[0x0000_0010, 0x0000_0008]);
    /// assert_eq!(v.shift(-1).words(), &[0x4000_0000, 0x0000_0000]);
    /// # Ok::<(), gameboj::BitVectorError>(())
    /// ```
    pub fn shift(&self, distance: i64) -> BitVector {
        self.extract(distance.saturating_neg(), self.size(), Extension::Zero)
    }

    /// Core of both extraction policies. `size` must already be validated.
    fn extract(&self, start: i64, size: usize, extension: Extension) -> BitVector {
        let word_bits = WORD_BITS as i64;
        let word_offset = start.div_euclid(word_bits);
        let bit_offset = start.rem_euclid(word_bits) as u32;

        let words = (0..(size / WORD_BITS) as i64)
            .map(|i| {
                let index = word_offset + i;
                let low = self.word_at(index, extension);
                if bit_offset == 0 {
                    low
                } else {
                    let high = self.word_at(index + 1, extension);
                    (low >> bit_offset) | (high << (WORD_BITS as u32 - bit_offset))
                }
            })
            .collect();

        Self::from_boxed_words(words)
    }

    /// Word at a possibly out-of-range word index under the given policy.
    fn word_at(&self, index: i64, extension: Extension) -> u32 {
        let len = self.words.len() as i64;
        match extension {
            Extension::Zero => {
                if (0..len).contains(&index) {
                    self.words[index as usize]
                } else {
                    0
                }
            }
            // Sizes are whole words, so wrapping bits wraps words.
            Extension::Wrapped => self.words[index.rem_euclid(len) as usize],
        }
    }
}

impl ops::Not for &BitVector {
    type Output = BitVector;

    fn not(self) -> BitVector {
        BitVector::not(self)
    }
}

impl ops::Not for BitVector {
    type Output = BitVector;

    fn not(self) -> BitVector {
        !&self
    }
}

/// Canonical form: one `0`/`1` per bit, most significant bit first.
impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for word in self.words.iter().rev() {
            write!(f, "{:032b}", word)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for word in self.words.iter().rev() {
            write!(f, "{:08X}", word)?;
        }
        Ok(())
    }
}

impl fmt::LowerHex for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for word in self.words.iter().rev() {
            write!(f, "{:08x}", word)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// E1B85117 0D018ECA 3A039EB0 DF72D16A, most significant word first
    fn fixture() -> BitVector {
        BitVector::from_words(vec![0xDF72_D16A, 0x3A03_9EB0, 0x0D01_8ECA, 0xE1B8_5117]).unwrap()
    }

    #[test]
    fn test_new_is_zeroed() {
        let v = BitVector::new(96).unwrap();
        assert_eq!(v.size(), 96);
        assert_eq!(v.words(), &[0, 0, 0]);
    }

    #[test]
    fn test_invalid_sizes() {
        assert_eq!(BitVector::new(0), Err(BitVectorError::InvalidSize(0)));
        assert_eq!(BitVector::new(1), Err(BitVectorError::InvalidSize(1)));
        assert_eq!(BitVector::filled(40, true), Err(BitVectorError::InvalidSize(40)));
        assert_eq!(BitVector::from_words(vec![]), Err(BitVectorError::InvalidSize(0)));
    }

    #[test]
    fn test_display_msb_first() {
        let v = BitVector::from_words(vec![0x0000_0001, 0x8000_0000]).unwrap();
        let s = v.to_string();
        assert_eq!(s.len(), 64);
        assert!(s.starts_with('1'));
        assert!(s.ends_with('1'));
        assert_eq!(s.matches('1').count(), 2);
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(format!("{:X}", fixture()), "E1B851170D018ECA3A039EB0DF72D16A");
        assert_eq!(format!("{:x}", fixture()), "e1b851170d018eca3a039eb0df72d16a");
    }

    #[test]
    fn test_bit_access() {
        let v = fixture();
        // 0x...D16A: bit 0 clear, bit 1 set
        assert_eq!(v.test_bit(0), Ok(false));
        assert_eq!(v.test_bit(1), Ok(true));
        // 0xE1...: top bit set
        assert_eq!(v.test_bit(127), Ok(true));
        assert_eq!(
            v.test_bit(128),
            Err(BitVectorError::IndexOutOfRange { index: 128, len: 128 })
        );
    }

    #[test]
    fn test_not_operator_matches_method() {
        let v = fixture();
        assert_eq!(!&v, v.not());
        assert_eq!(v.not().not(), v);
        assert_eq!(!v.clone(), v.not());
        assert_eq!(!!v.clone(), v);
    }

    #[test]
    fn test_xor() {
        let v = fixture();
        assert_eq!(v.xor(&v).unwrap(), BitVector::new(128).unwrap());
        assert_eq!(v.xor(&v.not()).unwrap(), BitVector::filled(128, true).unwrap());
        assert!(v.xor(&BitVector::new(32).unwrap()).is_err());
    }

    #[test]
    fn test_aligned_extraction_copies_words() {
        let v = fixture();
        let w = v.extract_zero_extended(32, 64).unwrap();
        assert_eq!(w.words(), &[0x3A03_9EB0, 0x0D01_8ECA]);
        let w = v.extract_wrapped(96, 64).unwrap();
        assert_eq!(w.words(), &[0xE1B8_5117, 0xDF72_D16A]);
    }

    #[test]
    fn test_extraction_far_out_of_range() {
        let v = fixture();
        assert_eq!(
            v.extract_zero_extended(-1_000_000, 64).unwrap(),
            BitVector::new(64).unwrap()
        );
        assert_eq!(
            v.extract_zero_extended(i64::MAX, 32).unwrap(),
            BitVector::new(32).unwrap()
        );
        // 128 * 7813 = 1_000_064, so -1_000_064 is a whole number of periods
        assert_eq!(v.extract_wrapped(-1_000_064, 128).unwrap(), v);
        assert_eq!(v.extract_wrapped(i64::MIN, 32).unwrap().size(), 32);
    }

    #[test]
    fn test_invalid_window_size() {
        let v = fixture();
        assert_eq!(
            v.extract_zero_extended(0, 0),
            Err(BitVectorError::InvalidWindowSize(0))
        );
        assert_eq!(
            v.extract_wrapped(0, 31),
            Err(BitVectorError::InvalidWindowSize(31))
        );
    }

    #[test]
    fn test_shift() {
        let v = fixture();
        assert_eq!(v.shift(0), v);
        assert_eq!(v.shift(128), BitVector::new(128).unwrap());
        assert_eq!(v.shift(-128), BitVector::new(128).unwrap());
        assert_eq!(v.shift(32).words(), &[0, 0xDF72_D16A, 0x3A03_9EB0, 0x0D01_8ECA]);
        assert_eq!(v.shift(i64::MIN), BitVector::new(128).unwrap());
    }
}
