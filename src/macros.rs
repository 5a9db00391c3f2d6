/// Creates a [`BitSeq`](crate::BitSeq) from `0`/`1` literals.
///
/// The resulting vector is big-endian; endianness only affects byte
/// layout, never the logical content.
///
/// # Examples
///
/// ```
/// use bitseq::bitseq;
///
/// let v = bitseq![1, 0, 1, 1];
/// assert_eq!(v.to_string(), "1011");
///
/// let zeros = bitseq![0; 10];
/// assert_eq!(zeros.len(), 10);
/// assert_eq!(zeros.count_ones(), 0);
///
/// let empty = bitseq![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! bitseq {
    () => {
        $crate::BitSeq::new($crate::Endian::Big)
    };
    ($bit:expr; $n:expr) => {
        $crate::BitSeq::repeat($bit != 0, $n, $crate::Endian::Big)
    };
    ($($bit:expr),+ $(,)?) => {
        $crate::BitSeq::from_bools(&[$(($bit != 0)),+], $crate::Endian::Big)
    };
}
