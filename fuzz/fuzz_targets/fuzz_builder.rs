//! Fuzz target for the builder.
//!
//! This target replays arbitrary byte writes into a builder and checks that
//! the built vector holds the last value written to every byte.

#![no_main]

use arbitrary::Arbitrary;
use gameboj::{BitVectorError, Builder};
use libfuzzer_sys::fuzz_target;

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    word_count: u8,
    writes: Vec<(u16, u8)>,
}

fuzz_target!(|input: FuzzInput| {
    let size = input.word_count as usize * 32;
    let mut builder = match Builder::new(size) {
        Ok(builder) => builder,
        Err(e) => {
            assert_eq!(size, 0);
            assert_eq!(e, BitVectorError::InvalidSize(0));
            return;
        }
    };

    let mut model = vec![0u8; size / 8];
    for &(index, value) in &input.writes {
        let index = index as usize;
        match builder.set_byte(index, value) {
            Ok(_) => model[index] = value,
            Err(e) => {
                assert!(index >= model.len());
                assert_eq!(e, BitVectorError::IndexOutOfRange { index, len: model.len() });
            }
        }
    }

    let v = builder.build().unwrap();
    for (i, word) in v.words().iter().enumerate() {
        assert_eq!(word.to_le_bytes(), model[4 * i..4 * i + 4]);
    }

    assert_eq!(builder.build(), Err(BitVectorError::AlreadyBuilt));
});
