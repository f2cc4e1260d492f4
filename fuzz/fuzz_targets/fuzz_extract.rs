//! Fuzz target for windowed extraction.
//!
//! This target feeds arbitrary vectors, offsets and window sizes to both
//! extraction policies and checks every output bit against its source bit.

#![no_main]

use arbitrary::Arbitrary;
use gameboj::{BitVector, BitVectorError, WORD_BITS};
use libfuzzer_sys::fuzz_target;

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    words: Vec<u32>,
    start: i64,
    window_size: u16,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to keep the bit-level check fast
    if input.words.is_empty() || input.words.len() > 64 {
        return;
    }

    let v = BitVector::from_words(input.words.clone()).unwrap();
    let size = input.window_size as usize;
    let n = v.size() as i64;

    let zero = v.extract_zero_extended(input.start, size);
    let wrapped = v.extract_wrapped(input.start, size);

    if size == 0 || size % WORD_BITS != 0 {
        assert_eq!(zero, Err(BitVectorError::InvalidWindowSize(size)));
        assert_eq!(wrapped, Err(BitVectorError::InvalidWindowSize(size)));
        return;
    }

    let zero = zero.unwrap();
    let wrapped = wrapped.unwrap();
    assert_eq!(zero.size(), size);
    assert_eq!(wrapped.size(), size);

    for i in 0..size {
        let source = input.start.saturating_add(i as i64);

        let expected_zero = (0..n).contains(&source) && v.test_bit(source as usize).unwrap();
        assert_eq!(zero.test_bit(i).unwrap(), expected_zero);

        // Saturation only happens at i64::MAX, which is never in range
        if source < i64::MAX {
            let expected_wrapped = v.test_bit(source.rem_euclid(n) as usize).unwrap();
            assert_eq!(wrapped.test_bit(i).unwrap(), expected_wrapped);
        }
    }
});
