use bitseq::{BitSeq, Endian, SliceSpec};

#[test]
fn test_scenario_count_after_clear() {
    let mut v = BitSeq::ones(8, Endian::Big);
    assert_eq!(v.count_in(true, SliceSpec::range(0, 8)).unwrap(), 8);
    v.set(2, false).unwrap();
    assert_eq!(v.count_in(true, SliceSpec::range(2, 6)).unwrap(), 3);
}

#[test]
fn test_count_zeros_uses_complement() {
    let v: BitSeq = "1100 1010 0111".parse().unwrap();
    assert_eq!(v.count_ones(), 7);
    assert_eq!(v.count_zeros(), 5);
    assert_eq!(v.count_in(false, SliceSpec::range(1, 9)).unwrap(), 5);
}

#[test]
fn test_count_strided() {
    let v: BitSeq = "1010101010".parse().unwrap();
    assert_eq!(
        v.count_in(true, SliceSpec::full().with_step(2)).unwrap(),
        5
    );
    assert_eq!(
        v.count_in(true, SliceSpec::full().with_step(-2)).unwrap(),
        0
    );
}

#[test]
fn test_count_reflects_mutation() {
    // The segment cache must be invalidated by writes, including writes
    // made through an aliasing handle.
    let mut v = BitSeq::zeros(10_000, Endian::Little);
    assert_eq!(v.count_in(true, SliceSpec::full()).unwrap(), 0);
    v.set(4_321, true).unwrap();
    assert_eq!(v.count_in(true, SliceSpec::full()).unwrap(), 1);

    let mut alias = v.share();
    alias.set(8_765, true).unwrap();
    assert_eq!(v.count_in(true, SliceSpec::full()).unwrap(), 2);
    assert_eq!(alias.count_in(true, SliceSpec::full()).unwrap(), 2);
}

#[test]
fn test_count_large_cross_segment() {
    // Spans several 4096-bit segments with a known pattern.
    let bits: Vec<bool> = (0..20_000).map(|i| i % 3 == 0).collect();
    let v = BitSeq::from_bools(&bits, Endian::Big);
    for (start, stop) in [(0usize, 20_000usize), (1, 19_999), (4_000, 13_000), (5_000, 5_001)] {
        let expect = bits[start..stop].iter().filter(|&&b| b).count();
        let got = v
            .count_in(true, SliceSpec::range(start as i64, stop as i64))
            .unwrap();
        assert_eq!(got, expect, "range {start}..{stop}");
    }
}

#[test]
fn test_find_value() {
    let v: BitSeq = "00000000 00100000 00000100".parse().unwrap();
    assert_eq!(v.find_value(true, 0, v.len(), false), Some(10));
    assert_eq!(v.find_value(true, 0, v.len(), true), Some(21));
    assert_eq!(v.find_value(true, 11, 21, false), None);
    assert_eq!(v.first_one(), Some(10));
    assert_eq!(v.last_one(), Some(21));

    let ones = BitSeq::ones(20, Endian::Big);
    assert_eq!(ones.find_value(false, 0, 20, false), None);
}

#[test]
fn test_find_value_bounds() {
    let v: BitSeq = "0110".parse().unwrap();
    assert_eq!(v.find_value(true, 2, 4, false), Some(2));
    assert_eq!(v.find_value(true, 3, 4, false), None);
    assert_eq!(v.find_value(false, 0, v.len(), true), Some(3));
    // Stop beyond the end clamps.
    assert_eq!(v.find_value(true, 0, 99, true), Some(2));
}

#[test]
fn test_find_pattern() {
    let v: BitSeq = "10110110".parse().unwrap();
    let p: BitSeq = "011".parse().unwrap();
    assert_eq!(v.find(&p, 0, v.len(), false), Some(1));
    assert_eq!(v.find(&p, 2, v.len(), false), Some(4));
    assert_eq!(v.find(&p, 0, v.len(), true), Some(4));
    assert_eq!(v.find(&p, 0, 4, true), Some(1));

    let missing: BitSeq = "0000".parse().unwrap();
    assert_eq!(v.find(&missing, 0, v.len(), false), None);
}

#[test]
fn test_find_empty_pattern() {
    // An empty pattern matches at every position in [start, stop]
    // inclusive, one past the end included.
    let v: BitSeq = "1010".parse().unwrap();
    let empty = BitSeq::new(Endian::Big);
    assert_eq!(v.find(&empty, 0, v.len(), false), Some(0));
    assert_eq!(v.find(&empty, 3, v.len(), false), Some(3));
    assert_eq!(v.find(&empty, 0, v.len(), true), Some(4));
    assert_eq!(v.find(&empty, 4, v.len(), false), Some(4));
}

#[test]
fn test_find_nth() {
    let v: BitSeq = "0101 0100 0001".parse().unwrap();
    assert_eq!(v.find_nth(true, 0), Some(1));
    assert_eq!(v.find_nth(true, 1), Some(3));
    assert_eq!(v.find_nth(true, 2), Some(5));
    assert_eq!(v.find_nth(true, 3), Some(11));
    assert_eq!(v.find_nth(true, 4), None);

    assert_eq!(v.find_nth(false, 0), Some(0));
    assert_eq!(v.find_nth(false, 3), Some(6));
}

#[test]
fn test_search_forward_and_backward() {
    let v: BitSeq = "10101010".parse().unwrap();
    let p: BitSeq = "101".parse().unwrap();
    let fwd: Vec<usize> = v.search(&p, 0, v.len(), false).collect();
    assert_eq!(fwd, vec![0, 4]);
    let bwd: Vec<usize> = v.search(&p, 0, v.len(), true).collect();
    assert_eq!(bwd, vec![4, 0]);
}

#[test]
fn test_search_empty_pattern_positions() {
    let v: BitSeq = "111".parse().unwrap();
    let empty = BitSeq::new(Endian::Big);
    let fwd: Vec<usize> = v.search(&empty, 0, v.len(), false).collect();
    assert_eq!(fwd, vec![0, 1, 2, 3]);
    let bwd: Vec<usize> = v.search(&empty, 0, v.len(), true).collect();
    assert_eq!(bwd, vec![3, 2, 1, 0]);
}

#[test]
fn test_search_subrange() {
    let v: BitSeq = "1111".parse().unwrap();
    let p: BitSeq = "11".parse().unwrap();
    let hits: Vec<usize> = v.search(&p, 1, 4, false).collect();
    assert_eq!(hits, vec![1]);
}

#[test]
fn test_search_pattern_snapshot() {
    // A pattern aliasing the haystack is copied up front, so the cursor
    // keeps matching the original needle bits.
    let v: BitSeq = "110110".parse().unwrap();
    let alias = v.share();
    let hits: Vec<usize> = v.search(&alias, 0, v.len(), false).collect();
    assert_eq!(hits, vec![0]);
}

#[test]
fn test_iter_ones() {
    let v: BitSeq = "0100 0010 001".parse().unwrap();
    let ones: Vec<usize> = v.iter_ones().collect();
    assert_eq!(ones, vec![1, 6, 10]);
}

#[test]
fn test_count_cross_endian_same_result() {
    let bits: Vec<bool> = (0..777).map(|i| i % 7 == 2 || i % 11 == 5).collect();
    let big = BitSeq::from_bools(&bits, Endian::Big);
    let little = BitSeq::from_bools(&bits, Endian::Little);
    let spec = SliceSpec::range(13, 700);
    assert_eq!(
        big.count_in(true, spec).unwrap(),
        little.count_in(true, spec).unwrap()
    );
    assert_eq!(big.find_value(true, 0, 777, false), little.find_value(true, 0, 777, false));
}
