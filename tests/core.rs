use bitseq::{BitSeq, Endian, ErrorKind, bits2bytes};

#[test]
fn test_new() {
    let v = BitSeq::new(Endian::Big);
    assert!(v.is_empty());
    assert_eq!(v.len(), 0);
    assert_eq!(v.nbytes(), 0);
    assert_eq!(v.alloc(), 0);
    assert_eq!(v.padbits(), 0);
    assert_eq!(v.address(), 0);
    assert!(!v.readonly());
    assert!(!v.is_imported());
}

#[test]
fn test_bits2bytes_formula() {
    assert_eq!(bits2bytes(0), 0);
    for n in 1..=200usize {
        assert_eq!(bits2bytes(n), (n - 1) / 8 + 1);
    }
}

#[test]
fn test_length_invariant() {
    for n in 0..100 {
        for endian in [Endian::Little, Endian::Big] {
            let v = BitSeq::zeros(n, endian);
            assert_eq!(v.len() + v.padbits(), 8 * v.nbytes());
            assert!(v.padbits() < 8);
            assert_eq!(v.alloc(), v.nbytes(), "exact construction over-allocated");
        }
    }
}

#[test]
fn test_basic_get_set() {
    let mut v = BitSeq::zeros(50, Endian::Big);
    v.set(10, true).unwrap();
    v.set(42, true).unwrap();

    assert_eq!(v.get(10), Some(true));
    assert_eq!(v.get(42), Some(true));
    assert_eq!(v.get(11), Some(false));
    assert_eq!(v.get(50), None);
    assert_eq!(v.count_ones(), 2);

    v.set(10, false).unwrap();
    assert_eq!(v.get(10), Some(false));

    let err = v.set(50, true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Index);
}

#[test]
fn test_push_pop() {
    let mut v = BitSeq::new(Endian::Little);
    v.push(true).unwrap();
    v.push(false).unwrap();
    v.push(true).unwrap();
    assert_eq!(v.len(), 3);
    assert_eq!(v.to_bools(), vec![true, false, true]);

    assert_eq!(v.pop().unwrap(), Some(true));
    assert_eq!(v.pop().unwrap(), Some(false));
    assert_eq!(v.pop().unwrap(), Some(true));
    assert_eq!(v.pop().unwrap(), None);
    assert!(v.is_empty());
}

#[test]
fn test_repeat_and_ones() {
    let v = BitSeq::ones(13, Endian::Big);
    assert_eq!(v.count_ones(), 13);
    assert_eq!(v.padbits(), 3);
    // Pad bits stay cleared even in an all-ones vector.
    assert_eq!(v.to_bytes(), vec![0xFF, 0b1111_1000]);

    let z = BitSeq::repeat(false, 13, Endian::Big);
    assert_eq!(z.count_ones(), 0);
}

#[test]
fn test_bytes_round_trip() {
    let data = [0xDEu8, 0xAD, 0xBE, 0xEF];
    for endian in [Endian::Little, Endian::Big] {
        let v = BitSeq::from_bytes(&data, endian);
        assert_eq!(v.len(), 32);
        assert_eq!(v.to_bytes(), data.to_vec());
    }
}

#[test]
fn test_partial_byte_round_trip() {
    // Serialization-introduced pad bits are ignored on read-back.
    let v: BitSeq = "10110".parse().unwrap();
    let bytes = v.to_bytes();
    let back = BitSeq::from_bytes_truncated(&bytes, 5, Endian::Big).unwrap();
    assert_eq!(v, back);
}

#[test]
fn test_endian_copy_preserves_content() {
    let v: BitSeq = "1100101110".parse().unwrap();
    let w = v.to_endian(Endian::Little);
    assert_eq!(w.endian(), Endian::Little);
    assert_eq!(v, w);
    // Different byte layout for the same logical bits.
    assert_eq!(v.to_bytes()[0], 0b1100_1011);
    assert_eq!(w.to_bytes()[0], 0b1101_0011);
}

#[test]
fn test_parse_and_display() {
    let v: BitSeq = "0100 1111_0".parse().unwrap();
    assert_eq!(v.len(), 9);
    assert_eq!(v.to_string(), "010011110");

    let err = "01x".parse::<BitSeq>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
    assert!(err.to_string().contains('x'));
}

#[test]
fn test_from_iterator_and_extend() {
    let v: BitSeq = [true, false, true, true].into_iter().collect();
    assert_eq!(v.to_string(), "1011");

    let mut w = v.clone();
    w.try_extend([false, false]).unwrap();
    assert_eq!(w.to_string(), "101100");

    let bits: Vec<bool> = (&w).into_iter().collect();
    assert_eq!(bits.len(), 6);
}

#[test]
fn test_insert_truncate_clear() {
    let mut v: BitSeq = "1111".parse().unwrap();
    v.insert(2, false).unwrap();
    assert_eq!(v.to_string(), "11011");
    v.insert(5, false).unwrap();
    assert_eq!(v.to_string(), "110110");

    v.truncate(3).unwrap();
    assert_eq!(v.to_string(), "110");
    v.truncate(10).unwrap();
    assert_eq!(v.len(), 3);

    v.clear().unwrap();
    assert!(v.is_empty());
}

#[test]
fn test_reverse() {
    let mut v: BitSeq = "1101001".parse().unwrap();
    v.reverse().unwrap();
    assert_eq!(v.to_string(), "1001011");
}

#[test]
fn test_byte_reverse() {
    let mut v = BitSeq::from_bytes(&[0b1000_0000, 0b0000_0001], Endian::Big);
    v.byte_reverse().unwrap();
    assert_eq!(v.to_bytes(), vec![0b0000_0001, 0b1000_0000]);
}

#[test]
fn test_parity_any_all() {
    let v: BitSeq = "10110".parse().unwrap();
    assert!(v.parity());
    assert!(v.any());
    assert!(!v.all());

    let ones = BitSeq::ones(4, Endian::Big);
    assert!(ones.all());
    assert!(!ones.parity());

    let zeros = BitSeq::zeros(4, Endian::Big);
    assert!(!zeros.any());
}

#[test]
fn test_comparison_is_logical() {
    let a = BitSeq::parse_str("10110", Endian::Big).unwrap();
    let b = BitSeq::parse_str("10110", Endian::Little).unwrap();
    assert_eq!(a, b);

    let c: BitSeq = "10111".parse().unwrap();
    assert!(a < c);

    // A strict prefix sorts first.
    let prefix: BitSeq = "101".parse().unwrap();
    assert!(prefix < a);
    assert!(a > prefix);

    let empty = BitSeq::new(Endian::Big);
    assert!(empty < prefix);
}

#[test]
fn test_toggle() {
    let mut v: BitSeq = "000".parse().unwrap();
    assert_eq!(v.toggle(1).unwrap(), false);
    assert_eq!(v.get(1), Some(true));
    assert_eq!(v.toggle(1).unwrap(), true);
    assert_eq!(v.get(1), Some(false));
    assert!(v.toggle(3).is_err());
}

#[test]
fn test_debug_format() {
    let v: BitSeq = "101".parse().unwrap();
    assert_eq!(format!("{v:?}"), "BitSeq(\"101\", big)");
}
