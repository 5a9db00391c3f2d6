use bitseq::{BitSeq, Endian, ErrorKind};

#[test]
fn test_base2() {
    let v: BitSeq = "01001111".parse().unwrap();
    assert_eq!(v.to_base(1).unwrap(), "01001111");
    let back = BitSeq::from_base(1, "01001111", Endian::Big).unwrap();
    assert_eq!(back, v);
}

#[test]
fn test_base4_and_octal() {
    let v: BitSeq = "011011".parse().unwrap();
    assert_eq!(v.to_base(2).unwrap(), "123");
    assert_eq!(v.to_base(3).unwrap(), "33");
    assert_eq!(BitSeq::from_base(2, "123", Endian::Big).unwrap(), v);
    assert_eq!(BitSeq::from_base(3, "33", Endian::Big).unwrap(), v);
}

#[test]
fn test_hex_grouping_respects_endianness() {
    // Big endian: the first bit of each group is most significant.
    let big = BitSeq::parse_str("01001111", Endian::Big).unwrap();
    assert_eq!(big.to_base(4).unwrap(), "4f");

    // Little endian: the first bit of each group is least significant.
    let little = BitSeq::parse_str("01001111", Endian::Little).unwrap();
    assert_eq!(little.to_base(4).unwrap(), "2f");

    assert_eq!(BitSeq::from_base(4, "2f", Endian::Little).unwrap(), little);
    assert_eq!(BitSeq::from_base(4, "4F", Endian::Big).unwrap(), big);
}

#[test]
fn test_base32_base64() {
    let v: BitSeq = "11111 00000 10001".parse().unwrap();
    assert_eq!(v.to_base(5).unwrap(), "7AR");
    assert_eq!(BitSeq::from_base(5, "7AR", Endian::Big).unwrap(), v);

    let w: BitSeq = "000000 111111 000001".parse().unwrap();
    assert_eq!(w.to_base(6).unwrap(), "A/B");
    assert_eq!(BitSeq::from_base(6, "A/B", Endian::Big).unwrap(), w);
}

#[test]
fn test_base_round_trips_all_groups() {
    let bits: Vec<bool> = (0..60).map(|i| (i * 11) % 7 < 3).collect();
    for endian in [Endian::Little, Endian::Big] {
        let v = BitSeq::from_bools(&bits, endian);
        for group in 1..=6usize {
            let text = v.to_base(group).unwrap();
            assert_eq!(text.len(), 60 / group);
            let back = BitSeq::from_base(group, &text, endian).unwrap();
            assert_eq!(back, v, "group {group} endian {endian:?}");
        }
    }
}

#[test]
fn test_base_length_must_be_multiple() {
    let v: BitSeq = "10110".parse().unwrap();
    let err = v.to_base(4).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
}

#[test]
fn test_base_group_size_bounds() {
    let v: BitSeq = "101010".parse().unwrap();
    assert_eq!(v.to_base(0).unwrap_err().kind(), ErrorKind::Value);
    assert_eq!(v.to_base(7).unwrap_err().kind(), ErrorKind::Value);
    assert_eq!(
        BitSeq::from_base(9, "a", Endian::Big).unwrap_err().kind(),
        ErrorKind::Value
    );
}

#[test]
fn test_invalid_digit_names_offender() {
    let err = BitSeq::from_base(4, "4g", Endian::Big).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
    assert!(err.to_string().contains('g'));

    // '8' is a valid hex digit but not an octal one.
    let err = BitSeq::from_base(3, "78", Endian::Big).unwrap_err();
    assert!(err.to_string().contains('8'));

    // '0' and '1' are not in the base32 alphabet.
    let err = BitSeq::from_base(5, "A0", Endian::Big).unwrap_err();
    assert!(err.to_string().contains('0'));
}

#[test]
fn test_extend_from_str_keeps_prefix_on_failure() {
    let mut v: BitSeq = "11".parse().unwrap();
    let err = v.extend_from_str("0101x01").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
    // Everything appended before the failing character is retained.
    assert_eq!(v.to_string(), "110101");
}

#[test]
fn test_parse_ignores_whitespace() {
    let v = BitSeq::parse_str(" 1 0\t1\n1 ", Endian::Big).unwrap();
    assert_eq!(v.to_string(), "1011");
}

#[test]
fn test_to_01_matches_display() {
    let v: BitSeq = "0011010".parse().unwrap();
    assert_eq!(v.to_01(), v.to_string());
}
