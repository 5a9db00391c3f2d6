use bitseq::{BitSeq, bitseq};

#[test]
fn test_empty() {
    let v = bitseq![];
    assert!(v.is_empty());
    assert_eq!(v.nbytes(), 0);
}

#[test]
fn test_bit_list() {
    let v = bitseq![1, 0, 1, 1, 0];
    assert_eq!(v.to_string(), "10110");
    assert_eq!(v.len(), 5);
    assert_eq!(v.count_ones(), 3);
}

#[test]
fn test_trailing_comma() {
    let v = bitseq![1, 1, 0,];
    assert_eq!(v.to_string(), "110");
}

#[test]
fn test_repeat_form() {
    let ones = bitseq![1; 12];
    assert_eq!(ones.len(), 12);
    assert_eq!(ones.count_ones(), 12);

    let zeros = bitseq![0; 9];
    assert_eq!(zeros.len(), 9);
    assert_eq!(zeros.count_ones(), 0);
}

#[test]
fn test_macro_equals_parse() {
    let a = bitseq![0, 1, 0, 0, 1];
    let b: BitSeq = "01001".parse().unwrap();
    assert_eq!(a, b);
}
