//! Trait implementations for `BitSeq`.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};
use core::str::FromStr;

use crate::bits::{BitSeq, Endian};
use crate::error::Error;
use crate::prim;
use crate::prim::to_big;

impl Default for BitSeq {
    fn default() -> Self {
        Self::new(Endian::Big)
    }
}

impl Clone for BitSeq {
    /// An independent, writable deep copy preserving endianness.
    fn clone(&self) -> Self {
        self.snapshot()
    }
}

impl fmt::Display for BitSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSeq(\"{self}\", {})", self.endian())
    }
}

impl FromStr for BitSeq {
    type Err = Error;

    /// Parses a `0`/`1` string into a big-endian vector; whitespace and
    /// `_` are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitseq::BitSeq;
    ///
    /// let v: BitSeq = "0100 1111".parse()?;
    /// assert_eq!(v.len(), 8);
    /// # Ok::<(), bitseq::Error>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Error> {
        Self::parse_str(s, Endian::Big)
    }
}

impl From<&[bool]> for BitSeq {
    fn from(bits: &[bool]) -> Self {
        Self::from_bools(bits, Endian::Big)
    }
}

impl From<Vec<bool>> for BitSeq {
    fn from(bits: Vec<bool>) -> Self {
        Self::from_bools(&bits, Endian::Big)
    }
}

impl<const N: usize> From<[bool; N]> for BitSeq {
    fn from(bits: [bool; N]) -> Self {
        Self::from_bools(&bits, Endian::Big)
    }
}

// ============================================================================
// Logical comparison
// ============================================================================

/// Compares the logical bit sequences, independent of endianness tags and
/// padding. Bytes are normalized to big layout, where numeric byte order
/// equals lexicographic bit order; the final partial byte is masked down
/// to the bits both operands share.
fn logical_cmp(a: &BitSeq, b: &BitSeq) -> Ordering {
    let common = a.len().min(b.len());
    let full = common / 8;
    let ord = a.with_window(|ab, ae| {
        b.with_window(|bb, be| {
            for i in 0..full {
                let x = to_big(ab[i], ae);
                let y = to_big(bb[i], be);
                match x.cmp(&y) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
            let rem = common % 8;
            if rem > 0 {
                let mask = prim::seg_mask(Endian::Big, 0, rem);
                let x = to_big(ab[full], ae) & mask;
                let y = to_big(bb[full], be) & mask;
                match x.cmp(&y) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
            Ordering::Equal
        })
    });
    ord.then_with(|| a.len().cmp(&b.len()))
}

impl PartialEq for BitSeq {
    /// Logical equality: same bit sequence, endianness tags ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitseq::{BitSeq, Endian};
    ///
    /// let a = BitSeq::parse_str("1010", Endian::Big)?;
    /// let b = BitSeq::parse_str("1010", Endian::Little)?;
    /// assert_eq!(a, b);
    /// # Ok::<(), bitseq::Error>(())
    /// ```
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && logical_cmp(self, other) == Ordering::Equal
    }
}

impl Eq for BitSeq {}

impl PartialOrd for BitSeq {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BitSeq {
    /// Lexicographic over the logical bits; a strict prefix sorts first.
    fn cmp(&self, other: &Self) -> Ordering {
        logical_cmp(self, other)
    }
}

// ============================================================================
// Operator sugar
// ============================================================================
//
// The operator traits delegate to the checked methods and panic on length
// or endianness mismatch; fallible callers use `and`/`or`/`xor` directly.

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait for &BitSeq {
            type Output = BitSeq;

            /// # Panics
            ///
            /// Panics on length or endianness mismatch.
            fn $method(self, rhs: Self) -> BitSeq {
                match self.$checked(rhs) {
                    Ok(v) => v,
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl $trait for BitSeq {
            type Output = BitSeq;

            /// # Panics
            ///
            /// Panics on length or endianness mismatch.
            fn $method(self, rhs: Self) -> BitSeq {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! forward_binop_assign {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait<&Self> for BitSeq {
            /// # Panics
            ///
            /// Panics on length or endianness mismatch, or on readonly
            /// storage.
            fn $method(&mut self, rhs: &Self) {
                if let Err(e) = self.$checked(rhs) {
                    panic!("{e}");
                }
            }
        }

        impl $trait for BitSeq {
            fn $method(&mut self, rhs: Self) {
                self.$method(&rhs);
            }
        }
    };
}

forward_binop!(BitAnd, bitand, and);
forward_binop!(BitOr, bitor, or);
forward_binop!(BitXor, bitxor, xor);
forward_binop_assign!(BitAndAssign, bitand_assign, and_with);
forward_binop_assign!(BitOrAssign, bitor_assign, or_with);
forward_binop_assign!(BitXorAssign, bitxor_assign, xor_with);

impl Not for &BitSeq {
    type Output = BitSeq;

    fn not(self) -> BitSeq {
        self.inverted()
    }
}

impl Not for BitSeq {
    type Output = Self;

    fn not(self) -> Self {
        self.inverted()
    }
}

impl Shl<usize> for &BitSeq {
    type Output = BitSeq;

    fn shl(self, n: usize) -> BitSeq {
        BitSeq::shl(self, n)
    }
}

impl Shl<usize> for BitSeq {
    type Output = Self;

    fn shl(self, n: usize) -> Self {
        BitSeq::shl(&self, n)
    }
}

impl Shr<usize> for &BitSeq {
    type Output = BitSeq;

    fn shr(self, n: usize) -> BitSeq {
        BitSeq::shr(self, n)
    }
}

impl Shr<usize> for BitSeq {
    type Output = Self;

    fn shr(self, n: usize) -> Self {
        BitSeq::shr(&self, n)
    }
}

impl ShlAssign<usize> for BitSeq {
    /// # Panics
    ///
    /// Panics on readonly storage.
    fn shl_assign(&mut self, n: usize) {
        if let Err(e) = BitSeq::shl_assign(self, n) {
            panic!("{e}");
        }
    }
}

impl ShrAssign<usize> for BitSeq {
    /// # Panics
    ///
    /// Panics on readonly storage.
    fn shr_assign(&mut self, n: usize) {
        if let Err(e) = BitSeq::shr_assign(self, n) {
            panic!("{e}");
        }
    }
}
