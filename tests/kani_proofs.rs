//! Kani formal verification proofs for the bit primitives.
//!
//! These proofs use bounded model checking to verify extraction and
//! bank-decoding invariants for ALL inputs within the stated bounds.
//!
//! To run these proofs, install Kani and run:
//! ```
//! cargo kani --tests
//! ```
//!
//! They are compiled only under the `kani` cfg and ignored by regular tests.

// Allow the `kani` cfg which is set by the Kani verifier
#![allow(unexpected_cfgs)]

#[cfg(kani)]
mod kani_proofs {
    use gameboj::bits::{clip, extract};
    use gameboj::BitVector;

    // ========== Extraction Proofs ==========

    /// Proof: a wrapped window on a single word is a right rotation
    #[kani::proof]
    fn proof_single_word_wrap_is_rotation() {
        let word: u32 = kani::any();
        let start: i8 = kani::any();

        let v = BitVector::from_words(vec![word]).unwrap();
        let window = v.extract_wrapped(start as i64, 32).unwrap();

        let expected = word.rotate_right((start as i64).rem_euclid(32) as u32);
        kani::assert(window.words()[0] == expected, "Wrapped window must rotate");
    }

    /// Proof: a zero-extended window on a single word is a logical shift
    #[kani::proof]
    fn proof_single_word_zero_extension_is_shift() {
        let word: u32 = kani::any();
        let start: i8 = kani::any();
        kani::assume(start > -32 && start < 32);

        let v = BitVector::from_words(vec![word]).unwrap();
        let window = v.extract_zero_extended(start as i64, 32).unwrap();

        let expected = if start >= 0 {
            word >> start
        } else {
            word << -start
        };
        kani::assert(window.words()[0] == expected, "Zero window must shift");
    }

    /// Proof: double complement is the identity
    #[kani::proof]
    fn proof_double_complement() {
        let word: u32 = kani::any();
        let v = BitVector::from_words(vec![word]).unwrap();

        kani::assert(v.not().not() == v, "not(not(v)) must equal v");
    }

    // ========== Bit Helper Proofs ==========

    /// Proof: clip never leaves bits above `len`
    #[kani::proof]
    fn proof_clip_bounded() {
        let value: u32 = kani::any();
        let len: u32 = kani::any();
        kani::assume(len < 32);

        kani::assert(clip(len, value) < (1 << len), "Clipped value must fit in len bits");
    }

    /// Proof: the bank region of a 16-bit address is always 0-7
    #[kani::proof]
    fn proof_address_region_in_range() {
        let address: u16 = kani::any();

        kani::assert(extract(address as u32, 13, 3) < 8, "Region must fit in 3 bits");
    }
}
