//! Bitwise algebra: AND/OR/XOR/INVERT and logical shifts.
//!
//! Binary operations require equal length **and** equal endianness; a
//! mismatch is an error, never an implicit conversion. Because every
//! vector keeps its pad bits cleared and equal-endian operands share a
//! byte layout, the combining loops run byte-at-a-time.

use crate::bits::BitSeq;
use crate::error::{Error, Result};
use crate::prim;

impl BitSeq {
    fn check_algebra(&self, other: &Self) -> Result<()> {
        if self.nbits != other.nbits {
            return Err(Error::LengthMismatch {
                left: self.nbits,
                right: other.nbits,
            });
        }
        if self.endian != other.endian {
            return Err(Error::EndianMismatch);
        }
        Ok(())
    }

    fn combine_with(&mut self, other: &Self, f: impl Fn(u8, u8) -> u8) -> Result<()> {
        self.check_writable()?;
        self.check_algebra(other)?;
        let snap = if self.same_buffer(other) {
            Some(other.snapshot())
        } else {
            None
        };
        let rhs = snap.as_ref().unwrap_or(other);
        rhs.with_window(|src, _| {
            self.with_window_mut(|dst, _| {
                for (d, s) in dst.iter_mut().zip(src) {
                    *d = f(*d, *s);
                }
            });
        });
        Ok(())
    }

    /// In-place bitwise AND with `other`.
    ///
    /// # Errors
    ///
    /// Value kind on length or endianness mismatch; type kind on readonly
    /// storage.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitseq::BitSeq;
    /// let mut a: BitSeq = "1100".parse()?;
    /// let b: BitSeq = "1010".parse()?;
    /// a.and_with(&b)?;
    /// assert_eq!(a.to_string(), "1000");
    /// # Ok::<(), bitseq::Error>(())
    /// ```
    pub fn and_with(&mut self, other: &Self) -> Result<()> {
        self.combine_with(other, |a, b| a & b)
    }

    /// In-place bitwise OR with `other`.
    pub fn or_with(&mut self, other: &Self) -> Result<()> {
        self.combine_with(other, |a, b| a | b)
    }

    /// In-place bitwise XOR with `other`.
    pub fn xor_with(&mut self, other: &Self) -> Result<()> {
        self.combine_with(other, |a, b| a ^ b)
    }

    /// Bitwise AND, producing a new vector.
    pub fn and(&self, other: &Self) -> Result<Self> {
        let mut out = self.snapshot();
        out.and_with(other)?;
        Ok(out)
    }

    /// Bitwise OR, producing a new vector.
    pub fn or(&self, other: &Self) -> Result<Self> {
        let mut out = self.snapshot();
        out.or_with(other)?;
        Ok(out)
    }

    /// Bitwise XOR, producing a new vector.
    pub fn xor(&self, other: &Self) -> Result<Self> {
        let mut out = self.snapshot();
        out.xor_with(other)?;
        Ok(out)
    }

    /// Inverts every bit in place. Pad bits stay cleared.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitseq::BitSeq;
    /// let mut v: BitSeq = "10011".parse()?;
    /// v.invert()?;
    /// assert_eq!(v.to_string(), "01100");
    /// # Ok::<(), bitseq::Error>(())
    /// ```
    pub fn invert(&mut self) -> Result<()> {
        self.check_writable()?;
        self.with_window_mut(|bytes, _| {
            for b in bytes {
                *b = !*b;
            }
        });
        self.clear_pad();
        Ok(())
    }

    /// Inverts the bits in `[start, stop)` in place.
    pub fn invert_range(&mut self, start: usize, stop: usize) -> Result<()> {
        self.check_writable()?;
        let stop = stop.min(self.nbits);
        if start >= stop {
            return Ok(());
        }
        self.with_window_mut(|bytes, endian| {
            for i in start..stop {
                let v = prim::get_bit(bytes, endian, i);
                prim::set_bit(bytes, endian, i, !v);
            }
        });
        Ok(())
    }

    /// The inverse of this vector, as a new vector.
    #[must_use]
    pub fn inverted(&self) -> Self {
        let mut out = self.snapshot();
        // Fresh owned storage is always writable.
        let _ = out.invert();
        out
    }

    /// Shifts bits toward index 0 by `n`, zero-filling the tail. Shifts by
    /// `n >= len` yield all-zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitseq::BitSeq;
    /// let v: BitSeq = "00101".parse()?;
    /// assert_eq!(v.shl(2).to_string(), "10100");
    /// assert_eq!(v.shl(9).to_string(), "00000");
    /// # Ok::<(), bitseq::Error>(())
    /// ```
    #[must_use]
    pub fn shl(&self, n: usize) -> Self {
        let len = self.nbits;
        let mut out = Self::zeros(len, self.endian);
        if n < len {
            self.with_window(|src, se| {
                out.with_window_mut(|dst, de| {
                    prim::copy_bits(dst, de, 0, src, se, n, len - n);
                });
            });
        }
        out
    }

    /// Shifts bits toward the end by `n`, zero-filling the front. Shifts
    /// by `n >= len` yield all-zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitseq::BitSeq;
    /// let v: BitSeq = "10100".parse()?;
    /// assert_eq!(v.shr(2).to_string(), "00101");
    /// # Ok::<(), bitseq::Error>(())
    /// ```
    #[must_use]
    pub fn shr(&self, n: usize) -> Self {
        let len = self.nbits;
        let mut out = Self::zeros(len, self.endian);
        if n < len {
            self.with_window(|src, se| {
                out.with_window_mut(|dst, de| {
                    prim::copy_bits(dst, de, n, src, se, 0, len - n);
                });
            });
        }
        out
    }

    /// In-place variant of [`shl`](Self::shl).
    pub fn shl_assign(&mut self, n: usize) -> Result<()> {
        self.check_writable()?;
        let len = self.nbits;
        self.with_window_mut(|bytes, endian| {
            if n >= len {
                prim::fill_bits(bytes, endian, 0, len, false);
            } else {
                prim::copy_bits_within(bytes, endian, 0, endian, n, len - n);
                prim::fill_bits(bytes, endian, len - n, len, false);
            }
        });
        Ok(())
    }

    /// In-place variant of [`shr`](Self::shr).
    pub fn shr_assign(&mut self, n: usize) -> Result<()> {
        self.check_writable()?;
        let len = self.nbits;
        self.with_window_mut(|bytes, endian| {
            if n >= len {
                prim::fill_bits(bytes, endian, 0, len, false);
            } else {
                prim::copy_bits_within(bytes, endian, n, endian, 0, len - n);
                prim::fill_bits(bytes, endian, 0, n, false);
            }
        });
        Ok(())
    }
}
