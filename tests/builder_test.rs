//! Builder tests
//!
//! Verifies byte placement, bounds checking and the single-use contract.

use gameboj::{BitVector, BitVectorError, Builder};

#[test]
fn test_builder_rejects_invalid_size() {
    for size in [0, 1, 8, 16, 48] {
        assert_eq!(
            Builder::new(size).unwrap_err(),
            BitVectorError::InvalidSize(size)
        );
    }
}

#[test]
fn test_byte_zero_is_least_significant() {
    let v = Builder::new(32)
        .unwrap()
        .set_byte(0, 0x01)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(v.test_bit(0), Ok(true));
    assert!(v.to_string().ends_with("00000001"));
}

#[test]
fn test_bytes_span_words() {
    let mut builder = Builder::new(96).unwrap();
    builder.set_byte(4, 0xAB).unwrap();
    builder.set_byte(11, 0xCD).unwrap();
    let v = builder.build().unwrap();

    assert_eq!(v.words(), &[0x0000_0000, 0x0000_00AB, 0xCD00_0000]);
    assert_eq!(format!("{:X}", v), "CD000000000000AB00000000");
}

#[test]
fn test_write_order_does_not_matter() {
    let mut forward = Builder::new(64).unwrap();
    let mut backward = Builder::new(64).unwrap();
    let bytes = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0];

    for (i, b) in bytes.iter().enumerate() {
        forward.set_byte(i, *b).unwrap();
    }
    for (i, b) in bytes.iter().enumerate().rev() {
        backward.set_byte(i, *b).unwrap();
    }

    assert_eq!(forward.build().unwrap(), backward.build().unwrap());
}

#[test]
fn test_set_byte_only_touches_its_byte() {
    let mut builder = Builder::new(32).unwrap();
    builder.set_byte(0, 0xFF).unwrap();
    builder.set_byte(2, 0xFF).unwrap();
    builder.set_byte(1, 0x00).unwrap();

    assert_eq!(builder.build().unwrap().words(), &[0x00FF_00FF]);
}

#[test]
fn test_set_byte_out_of_range() {
    let mut builder = Builder::new(64).unwrap();

    assert_eq!(
        builder.set_byte(8, 0xFF).unwrap_err(),
        BitVectorError::IndexOutOfRange { index: 8, len: 8 }
    );
    assert_eq!(
        builder.set_byte(usize::MAX, 0xFF).unwrap_err(),
        BitVectorError::IndexOutOfRange {
            index: usize::MAX,
            len: 8
        }
    );
    assert_eq!(builder.build().unwrap(), BitVector::new(64).unwrap());
}

#[test]
fn test_build_twice_fails() {
    let mut builder = Builder::new(32).unwrap();
    builder.set_byte(3, 0x80).unwrap();

    let v = builder.build().unwrap();
    assert_eq!(v.words(), &[0x8000_0000]);

    assert_eq!(builder.build(), Err(BitVectorError::AlreadyBuilt));
}

#[test]
fn test_set_byte_after_build_fails() {
    let mut builder = Builder::new(32).unwrap();
    let v = builder.build().unwrap();

    assert_eq!(
        builder.set_byte(0, 0xFF).unwrap_err(),
        BitVectorError::AlreadyBuilt
    );
    // Bounds are not checked once built
    assert_eq!(
        builder.set_byte(100, 0xFF).unwrap_err(),
        BitVectorError::AlreadyBuilt
    );
    // The vector already built is unaffected
    assert_eq!(v, BitVector::new(32).unwrap());
}
