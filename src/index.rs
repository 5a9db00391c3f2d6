//! Indexing and mutation engine.
//!
//! Index keys form a closed set ([`Key::Index`], [`Key::Slice`],
//! [`Key::Mask`], [`Key::Indices`]) resolved once at the call boundary.
//! The typed entry points below the dispatchers do the actual work by
//! composing the primitive engine; none of them re-dispatch per element.

use alloc::format;
use alloc::vec::Vec;
use core::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::bits::BitSeq;
use crate::error::{Error, Result};
use crate::lut::{POPCOUNT, SELECT};
use crate::prim;
use crate::prim::to_little;

/// A `start:stop:step` selection with Python list-slice semantics.
///
/// Unset fields default per the step's direction; out-of-range bounds
/// clamp instead of failing; negative values count from the end. A zero
/// step is rejected at normalization time.
///
/// # Examples
///
/// ```
/// # use bitseq::{BitSeq, SliceSpec};
/// let v: BitSeq = "0100111100001".parse()?;
/// let picked = v.get_slice(SliceSpec::new(Some(13), Some(2), Some(-3)))?;
/// assert_eq!(picked.to_string(), "1010");
/// # Ok::<(), bitseq::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceSpec {
    /// First position, possibly negative; defaults per step direction.
    pub start: Option<i64>,
    /// One-past-last position, possibly negative; defaults per step
    /// direction.
    pub stop: Option<i64>,
    /// Stride, possibly negative, never zero; defaults to 1.
    pub step: Option<i64>,
}

impl SliceSpec {
    /// A fully explicit selection.
    #[must_use]
    pub const fn new(start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Self {
        Self { start, stop, step }
    }

    /// Selects everything, in order.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            start: None,
            stop: None,
            step: None,
        }
    }

    /// Selects `[start, stop)` with unit step.
    #[must_use]
    pub const fn range(start: i64, stop: i64) -> Self {
        Self {
            start: Some(start),
            stop: Some(stop),
            step: None,
        }
    }

    /// Replaces the step.
    #[must_use]
    pub const fn with_step(self, step: i64) -> Self {
        Self {
            step: Some(step),
            ..self
        }
    }

    /// Resolves to `(start, step, slicelen)` against a vector of `len`
    /// bits. Selected positions are `start + k * step` for
    /// `k in 0..slicelen`.
    pub(crate) fn normalize(&self, len: usize) -> Result<(i64, i64, usize)> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(Error::ZeroStep);
        }
        let len = len as i64;
        let clamp = |v: i64| -> i64 {
            if v < 0 {
                let v = v + len;
                if v < 0 {
                    if step < 0 { -1 } else { 0 }
                } else {
                    v
                }
            } else if v >= len {
                if step < 0 { len - 1 } else { len }
            } else {
                v
            }
        };
        let start = match self.start {
            Some(v) => clamp(v),
            None => {
                if step < 0 {
                    len - 1
                } else {
                    0
                }
            }
        };
        let stop = match self.stop {
            Some(v) => clamp(v),
            None => {
                if step < 0 {
                    -1
                } else {
                    len
                }
            }
        };
        let slicelen = if step > 0 {
            if start < stop {
                ((stop - start - 1) / step + 1) as usize
            } else {
                0
            }
        } else if stop < start {
            ((start - stop - 1) / (-step) + 1) as usize
        } else {
            0
        };
        Ok((start, step, slicelen))
    }
}

impl From<Range<usize>> for SliceSpec {
    fn from(r: Range<usize>) -> Self {
        Self::range(r.start as i64, r.end as i64)
    }
}

impl From<RangeFrom<usize>> for SliceSpec {
    fn from(r: RangeFrom<usize>) -> Self {
        Self::new(Some(r.start as i64), None, None)
    }
}

impl From<RangeTo<usize>> for SliceSpec {
    fn from(r: RangeTo<usize>) -> Self {
        Self::new(None, Some(r.end as i64), None)
    }
}

impl From<RangeFull> for SliceSpec {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}

/// The closed set of index keys.
pub enum Key<'a> {
    /// A single position, possibly negative.
    Index(i64),
    /// A `start:stop:step` selection.
    Slice(SliceSpec),
    /// A boolean mask of the same length as the indexed vector.
    Mask(&'a BitSeq),
    /// Explicit positions, in order, duplicates allowed.
    Indices(&'a [i64]),
}

/// What a [`Key`] selected: a single bit or a new, independent vector.
#[derive(Debug, Clone)]
pub enum Fetched {
    /// Result of an [`Key::Index`] fetch.
    Bit(bool),
    /// Result of a slice, mask or index-sequence fetch. Never aliases the
    /// source.
    Seq(BitSeq),
}

/// Right-hand side of an assignment.
pub enum SetValue<'a> {
    /// Broadcast a single bit over the selection.
    Bit(bool),
    /// Write a vector's bits over the selection, in selection order.
    Seq(&'a BitSeq),
}

impl BitSeq {
    /// Normalizes a possibly negative index, bounds-checked.
    fn norm_index(&self, i: i64) -> Result<usize> {
        let len = self.nbits as i64;
        let pos = if i < 0 { i + len } else { i };
        if pos < 0 || pos >= len {
            return Err(Error::OutOfBounds {
                index: i,
                len: self.nbits,
            });
        }
        Ok(pos as usize)
    }

    /// Returns `other` snapshotted when it shares storage with `self`,
    /// so mutation of `self` cannot corrupt the operand mid-operation.
    fn localized(&self, other: &BitSeq) -> Option<BitSeq> {
        if self.same_buffer(other) {
            Some(other.snapshot())
        } else {
            None
        }
    }

    // ========================================================================
    // Dispatchers
    // ========================================================================

    /// Fetches whatever `key` selects.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitseq::{BitSeq, Fetched, Key, SliceSpec};
    /// let v: BitSeq = "10110".parse()?;
    /// match v.fetch(Key::Index(-1))? {
    ///     Fetched::Bit(b) => assert!(!b),
    ///     Fetched::Seq(_) => unreachable!(),
    /// }
    /// # Ok::<(), bitseq::Error>(())
    /// ```
    pub fn fetch(&self, key: Key<'_>) -> Result<Fetched> {
        match key {
            Key::Index(i) => Ok(Fetched::Bit(self.get_at(i)?)),
            Key::Slice(spec) => Ok(Fetched::Seq(self.get_slice(spec)?)),
            Key::Mask(mask) => Ok(Fetched::Seq(self.get_mask(mask)?)),
            Key::Indices(idxs) => Ok(Fetched::Seq(self.get_indices(idxs)?)),
        }
    }

    /// Assigns `value` to whatever `key` selects.
    pub fn assign(&mut self, key: Key<'_>, value: SetValue<'_>) -> Result<()> {
        match (key, value) {
            (Key::Index(i), SetValue::Bit(b)) => self.set_at(i, b),
            (Key::Index(_), SetValue::Seq(_)) => Err(Error::ValueCategory {
                expected: "single-bit",
            }),
            (Key::Slice(spec), SetValue::Bit(b)) => self.fill_slice(spec, b),
            (Key::Slice(spec), SetValue::Seq(v)) => self.set_slice(spec, v),
            (Key::Mask(_), SetValue::Bit(_)) => Err(Error::Unsupported(format!(
                "mask assignment of a scalar is not supported; \
                 use `v &= !mask` to clear or `v |= mask` to set the selected bits"
            ))),
            (Key::Mask(mask), SetValue::Seq(v)) => self.set_mask(mask, v),
            (Key::Indices(idxs), SetValue::Bit(b)) => self.set_indices_bit(idxs, b),
            (Key::Indices(idxs), SetValue::Seq(v)) => self.set_indices(idxs, v),
        }
    }

    /// Deletes whatever `key` selects, shifting survivors together.
    pub fn remove(&mut self, key: Key<'_>) -> Result<()> {
        match key {
            Key::Index(i) => self.del_at(i),
            Key::Slice(spec) => self.del_slice(spec),
            Key::Mask(mask) => self.del_mask(mask),
            Key::Indices(idxs) => self.del_indices(idxs),
        }
    }

    // ========================================================================
    // Get
    // ========================================================================

    /// The bit at `i`; negative indices count from the end.
    pub fn get_at(&self, i: i64) -> Result<bool> {
        let pos = self.norm_index(i)?;
        Ok(self.with_window(|bytes, endian| prim::get_bit(bytes, endian, pos)))
    }

    /// The bits a slice selects, as a new, independent vector preserving
    /// this vector's endianness. Never an alias.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitseq::{BitSeq, SliceSpec};
    /// let v: BitSeq = "10110".parse()?;
    /// assert_eq!(v.get_slice(SliceSpec::range(1, 4))?.to_string(), "011");
    /// assert_eq!(v.get_slice(SliceSpec::full().with_step(-1))?.to_string(), "01101");
    /// # Ok::<(), bitseq::Error>(())
    /// ```
    pub fn get_slice(&self, spec: SliceSpec) -> Result<BitSeq> {
        let (start, step, slicelen) = spec.normalize(self.nbits)?;
        let mut out = Self::zeros(slicelen, self.endian);
        if slicelen == 0 {
            return Ok(out);
        }
        self.with_window(|src, se| {
            out.with_window_mut(|dst, de| {
                if step == 1 {
                    prim::copy_bits(dst, de, 0, src, se, start as usize, slicelen);
                } else {
                    for k in 0..slicelen {
                        let pos = (start + k as i64 * step) as usize;
                        let v = prim::get_bit(src, se, pos);
                        if v {
                            prim::set_bit(dst, de, k, true);
                        }
                    }
                }
            });
        });
        Ok(out)
    }

    /// The bits at positions where `mask` is set, in ascending order.
    ///
    /// # Errors
    ///
    /// Index kind when the mask length differs from this vector's.
    pub fn get_mask(&self, mask: &BitSeq) -> Result<BitSeq> {
        if mask.len() != self.nbits {
            return Err(Error::MaskLength {
                expected: self.nbits,
                actual: mask.len(),
            });
        }
        let mut out = Self::zeros(mask.count_ones(), self.endian);
        let mut w = 0usize;
        self.with_window(|src, se| {
            mask.with_window(|mb, me| {
                out.with_window_mut(|dst, de| {
                    for (byte_i, &b) in mb.iter().enumerate() {
                        let lb = to_little(b, me);
                        for k in 0..POPCOUNT[lb as usize] as usize {
                            let pos = byte_i * 8 + SELECT[lb as usize][k] as usize;
                            if prim::get_bit(src, se, pos) {
                                prim::set_bit(dst, de, w, true);
                            }
                            w += 1;
                        }
                    }
                });
            });
        });
        Ok(out)
    }

    /// The bits at exactly the given positions, in the given order and
    /// multiplicity, each independently bounds-checked.
    pub fn get_indices(&self, idxs: &[i64]) -> Result<BitSeq> {
        let mut positions = Vec::with_capacity(idxs.len());
        for &i in idxs {
            positions.push(self.norm_index(i)?);
        }
        let mut out = Self::zeros(positions.len(), self.endian);
        self.with_window(|src, se| {
            out.with_window_mut(|dst, de| {
                for (k, &pos) in positions.iter().enumerate() {
                    if prim::get_bit(src, se, pos) {
                        prim::set_bit(dst, de, k, true);
                    }
                }
            });
        });
        Ok(out)
    }

    // ========================================================================
    // Set
    // ========================================================================

    /// Sets the bit at `i`; negative indices count from the end.
    pub fn set_at(&mut self, i: i64, value: bool) -> Result<()> {
        self.check_writable()?;
        let pos = self.norm_index(i)?;
        self.with_window_mut(|bytes, endian| prim::set_bit(bytes, endian, pos, value));
        Ok(())
    }

    /// Broadcasts one bit over every position a slice selects. Unit-step
    /// ranges are filled byte-at-a-time, not per element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitseq::{BitSeq, Endian, SliceSpec};
    /// let mut v = BitSeq::zeros(10, Endian::Big);
    /// v.fill_slice(SliceSpec::range(2, 8), true)?;
    /// assert_eq!(v.to_string(), "0011111100");
    /// # Ok::<(), bitseq::Error>(())
    /// ```
    pub fn fill_slice(&mut self, spec: SliceSpec, value: bool) -> Result<()> {
        self.check_writable()?;
        let (start, step, slicelen) = spec.normalize(self.nbits)?;
        if slicelen == 0 {
            return Ok(());
        }
        self.with_window_mut(|bytes, endian| {
            if step == 1 {
                let s = start as usize;
                prim::fill_bits(bytes, endian, s, s + slicelen, value);
            } else {
                for k in 0..slicelen {
                    let pos = (start + k as i64 * step) as usize;
                    prim::set_bit(bytes, endian, pos, value);
                }
            }
        });
        Ok(())
    }

    /// Writes `value`'s bits over the positions a slice selects.
    ///
    /// With unit step, a length mismatch resizes the vector: the tail
    /// shifts to make room or close the gap, which is how insertion and
    /// deletion by assignment work. Any other step requires the lengths to
    /// match exactly.
    ///
    /// The value may alias this vector (it is snapshotted first), so
    /// `v[..reversed] = v` reverses correctly.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitseq::{BitSeq, SliceSpec};
    /// let mut v: BitSeq = "111111111111".parse()?;
    /// let patch: BitSeq = "0010".parse()?;
    /// v.set_slice(SliceSpec::range(2, 6), &patch)?;
    /// assert_eq!(v.to_string(), "110010111111");
    /// # Ok::<(), bitseq::Error>(())
    /// ```
    pub fn set_slice(&mut self, spec: SliceSpec, value: &BitSeq) -> Result<()> {
        self.check_writable()?;
        let (start, step, slicelen) = spec.normalize(self.nbits)?;
        let m = value.len();
        if step != 1 && m != slicelen {
            return Err(Error::SizeMismatch {
                expected: slicelen,
                actual: m,
            });
        }
        if step == 1 && m != slicelen {
            self.check_resizable()?;
        }
        let snap = self.localized(value);
        let value = snap.as_ref().unwrap_or(value);

        if step != 1 {
            value.with_window(|src, se| {
                self.with_window_mut(|dst, de| {
                    for k in 0..slicelen {
                        let pos = (start + k as i64 * step) as usize;
                        let v = prim::get_bit(src, se, k);
                        prim::set_bit(dst, de, pos, v);
                    }
                });
            });
            return Ok(());
        }

        let start = start as usize;
        if m != slicelen {
            let old_len = self.nbits;
            let tail_src = start + slicelen;
            let tail_len = old_len - tail_src;
            let new_len = old_len - slicelen + m;
            if m > slicelen {
                self.resize(new_len)?;
                self.with_window_mut(|bytes, endian| {
                    prim::copy_bits_within(bytes, endian, start + m, endian, tail_src, tail_len);
                });
            } else {
                self.with_window_mut(|bytes, endian| {
                    prim::copy_bits_within(bytes, endian, start + m, endian, tail_src, tail_len);
                });
                self.resize(new_len)?;
            }
        }
        value.with_window(|src, se| {
            self.with_window_mut(|dst, de| {
                prim::copy_bits(dst, de, start, src, se, 0, m);
            });
        });
        Ok(())
    }

    /// Writes `value`'s bits, in order, to the positions where `mask` is
    /// set.
    ///
    /// # Errors
    ///
    /// Index kind when the mask length differs from this vector's; value
    /// kind when `value.len()` differs from the mask's population count.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitseq::BitSeq;
    /// let mut v: BitSeq = "0000".parse()?;
    /// let mask: BitSeq = "1010".parse()?;
    /// let value: BitSeq = "11".parse()?;
    /// v.set_mask(&mask, &value)?;
    /// assert_eq!(v.to_string(), "1010");
    /// # Ok::<(), bitseq::Error>(())
    /// ```
    pub fn set_mask(&mut self, mask: &BitSeq, value: &BitSeq) -> Result<()> {
        self.check_writable()?;
        if mask.len() != self.nbits {
            return Err(Error::MaskLength {
                expected: self.nbits,
                actual: mask.len(),
            });
        }
        let ones = mask.count_ones();
        if value.len() != ones {
            return Err(Error::SizeMismatch {
                expected: ones,
                actual: value.len(),
            });
        }
        let mask_snap = self.localized(mask);
        let mask = mask_snap.as_ref().unwrap_or(mask);
        let value_snap = self.localized(value);
        let value = value_snap.as_ref().unwrap_or(value);

        let mut w = 0usize;
        mask.with_window(|mb, me| {
            value.with_window(|src, se| {
                self.with_window_mut(|dst, de| {
                    for (byte_i, &b) in mb.iter().enumerate() {
                        let lb = to_little(b, me);
                        for k in 0..POPCOUNT[lb as usize] as usize {
                            let pos = byte_i * 8 + SELECT[lb as usize][k] as usize;
                            let v = prim::get_bit(src, se, w);
                            prim::set_bit(dst, de, pos, v);
                            w += 1;
                        }
                    }
                });
            });
        });
        Ok(())
    }

    /// Broadcasts one bit to every listed position. Duplicates are
    /// harmless; all positions are validated before the first write.
    pub fn set_indices_bit(&mut self, idxs: &[i64], value: bool) -> Result<()> {
        self.check_writable()?;
        let mut positions = Vec::with_capacity(idxs.len());
        for &i in idxs {
            positions.push(self.norm_index(i)?);
        }
        self.with_window_mut(|bytes, endian| {
            for pos in positions {
                prim::set_bit(bytes, endian, pos, value);
            }
        });
        Ok(())
    }

    /// Writes `value[k]` to position `idxs[k]`. Duplicate indices: the
    /// last write wins. All positions are validated before the first
    /// write.
    pub fn set_indices(&mut self, idxs: &[i64], value: &BitSeq) -> Result<()> {
        self.check_writable()?;
        if value.len() != idxs.len() {
            return Err(Error::SizeMismatch {
                expected: idxs.len(),
                actual: value.len(),
            });
        }
        let mut positions = Vec::with_capacity(idxs.len());
        for &i in idxs {
            positions.push(self.norm_index(i)?);
        }
        let snap = self.localized(value);
        let value = snap.as_ref().unwrap_or(value);
        value.with_window(|src, se| {
            self.with_window_mut(|dst, de| {
                for (k, &pos) in positions.iter().enumerate() {
                    let v = prim::get_bit(src, se, k);
                    prim::set_bit(dst, de, pos, v);
                }
            });
        });
        Ok(())
    }

    // ========================================================================
    // Delete
    // ========================================================================

    /// Removes one bit without the resizability preamble; callers have
    /// already checked.
    fn remove_pos(&mut self, pos: usize) -> Result<()> {
        let len = self.nbits;
        self.with_window_mut(|bytes, endian| {
            prim::copy_bits_within(bytes, endian, pos, endian, pos + 1, len - pos - 1);
        });
        self.resize(len - 1)
    }

    /// Deletes the bit at `i`, shifting the tail down.
    pub fn del_at(&mut self, i: i64) -> Result<()> {
        self.check_resizable()?;
        let pos = self.norm_index(i)?;
        self.remove_pos(pos)
    }

    /// Deletes every position a slice selects.
    ///
    /// Unit-step spans are removed with one contiguous shift; other steps
    /// remove positions highest-index-first so surviving indices stay
    /// valid. This is a length-changing operation even when the selection
    /// is empty, so imported, shared or exported buffers always reject it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitseq::{BitSeq, SliceSpec};
    /// let mut v: BitSeq = "00111000".parse()?;
    /// v.del_slice(SliceSpec::range(2, 5))?;
    /// assert_eq!(v.to_string(), "00000");
    /// # Ok::<(), bitseq::Error>(())
    /// ```
    pub fn del_slice(&mut self, spec: SliceSpec) -> Result<()> {
        self.check_resizable()?;
        let (start, step, slicelen) = spec.normalize(self.nbits)?;
        if slicelen == 0 {
            return Ok(());
        }
        if step == 1 {
            let start = start as usize;
            let len = self.nbits;
            self.with_window_mut(|bytes, endian| {
                prim::copy_bits_within(
                    bytes,
                    endian,
                    start,
                    endian,
                    start + slicelen,
                    len - start - slicelen,
                );
            });
            return self.resize(len - slicelen);
        }
        let mut positions: Vec<usize> = (0..slicelen)
            .map(|k| (start + k as i64 * step) as usize)
            .collect();
        positions.sort_unstable();
        for pos in positions.into_iter().rev() {
            self.remove_pos(pos)?;
        }
        Ok(())
    }

    /// Deletes every position where `mask` is set, retaining the
    /// complement in one pass.
    pub fn del_mask(&mut self, mask: &BitSeq) -> Result<()> {
        self.check_resizable()?;
        if mask.len() != self.nbits {
            return Err(Error::MaskLength {
                expected: self.nbits,
                actual: mask.len(),
            });
        }
        let snap = self.localized(mask);
        let mask = snap.as_ref().unwrap_or(mask);
        let len = self.nbits;
        let kept = mask.with_window(|mb, me| {
            self.with_window_mut(|bytes, endian| {
                let mut w = 0usize;
                for i in 0..len {
                    if !prim::get_bit(mb, me, i) {
                        let v = prim::get_bit(bytes, endian, i);
                        prim::set_bit(bytes, endian, w, v);
                        w += 1;
                    }
                }
                w
            })
        });
        self.resize(kept)
    }

    /// Deletes the listed positions; duplicates collapse to one removal.
    pub fn del_indices(&mut self, idxs: &[i64]) -> Result<()> {
        self.check_resizable()?;
        let mut positions = Vec::with_capacity(idxs.len());
        for &i in idxs {
            positions.push(self.norm_index(i)?);
        }
        positions.sort_unstable();
        positions.dedup();
        for pos in positions.into_iter().rev() {
            self.remove_pos(pos)?;
        }
        Ok(())
    }
}

