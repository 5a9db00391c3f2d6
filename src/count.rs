//! Segmented counting engine: range counts, scalar and pattern search.
//!
//! Cumulative popcounts at fixed segment boundaries make `step == 1` range
//! counts O(segment) instead of O(n). The cache is rebuilt lazily on first
//! use after any mutation; validity is tracked by comparing against the
//! buffer's mutation epoch, never by patching inside mutation paths.

use alloc::vec::Vec;

use crate::bits::{BitSeq, Endian};
use crate::error::Result;
use crate::index::SliceSpec;
use crate::lut::{POPCOUNT, SELECT};
use crate::prim;
use crate::prim::to_little;

/// Segment granularity in bytes (a power of two).
pub(crate) const SEG_BYTES: usize = 512;
pub(crate) const SEG_BITS: usize = SEG_BYTES * 8;

/// Lazily rebuilt prefix popcounts at segment boundaries.
///
/// `prefix[i]` is the number of set bits in `[0, i * SEG_BITS)`, clamped to
/// the vector length. Valid only while `epoch` matches the buffer's.
pub(crate) struct CountCache {
    epoch: u64,
    prefix: Vec<u64>,
}

impl BitSeq {
    fn build_cache(&self, epoch: u64) -> CountCache {
        let prefix = self.with_window(|bytes, _| {
            let nsegs = bytes.len().div_ceil(SEG_BYTES);
            let mut prefix = Vec::with_capacity(nsegs + 1);
            prefix.push(0u64);
            let mut total = 0u64;
            for seg in bytes.chunks(SEG_BYTES) {
                total += seg.iter().map(|&b| u64::from(POPCOUNT[b as usize])).sum::<u64>();
                prefix.push(total);
            }
            prefix
        });
        CountCache { epoch, prefix }
    }

    /// Number of set bits in `[0, pos)`, using the segment cache for whole
    /// segments and scanning only the fringe.
    fn ones_below(&self, pos: usize) -> usize {
        debug_assert!(pos <= self.nbits);
        let epoch = self.buf.borrow().epoch();
        let mut slot = self.cache.borrow_mut();
        let rebuild = match &*slot {
            Some(c) => c.epoch != epoch,
            None => true,
        };
        if rebuild {
            *slot = Some(self.build_cache(epoch));
        }
        let Some(cache) = slot.as_ref() else {
            // Just inserted above.
            return 0;
        };
        let seg = pos / SEG_BITS;
        let base = cache.prefix[seg] as usize;
        let fringe = self.with_window(|bytes, endian| {
            let from = seg * SEG_BYTES;
            let upto = pos / 8;
            let mut ones: usize = bytes[from..upto]
                .iter()
                .map(|&b| POPCOUNT[b as usize] as usize)
                .sum();
            let rem = pos % 8;
            if rem > 0 {
                let mask = prim::seg_mask(endian, 0, rem);
                ones += POPCOUNT[(bytes[upto] & mask) as usize] as usize;
            }
            ones
        });
        base + fringe
    }

    /// Number of set bits in the whole vector.
    ///
    /// Pad bits are always cleared, so a plain byte-table sum is exact.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitseq::BitSeq;
    /// let v: BitSeq = "1011 0010".parse()?;
    /// assert_eq!(v.count_ones(), 4);
    /// # Ok::<(), bitseq::Error>(())
    /// ```
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.with_window(|bytes, _| {
            bytes.iter().map(|&b| POPCOUNT[b as usize] as usize).sum()
        })
    }

    /// Number of clear bits in the whole vector.
    #[must_use]
    pub fn count_zeros(&self) -> usize {
        self.nbits - self.count_ones()
    }

    /// Counts occurrences of `value` over the positions a slice selects.
    ///
    /// For unit step this costs two boundary lookups plus an O(segment)
    /// fringe; other steps walk the selected positions.
    ///
    /// # Errors
    ///
    /// Value kind for a zero step.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitseq::{BitSeq, SliceSpec};
    /// let v: BitSeq = "11111111".parse()?;
    /// assert_eq!(v.count_in(true, SliceSpec::range(0, 8))?, 8);
    /// # Ok::<(), bitseq::Error>(())
    /// ```
    pub fn count_in(&self, value: bool, spec: SliceSpec) -> Result<usize> {
        let (start, step, slicelen) = spec.normalize(self.nbits)?;
        if slicelen == 0 {
            return Ok(0);
        }
        if step == 1 {
            let start = start as usize;
            let stop = start + slicelen;
            let ones = self.ones_below(stop) - self.ones_below(start);
            return Ok(if value { ones } else { slicelen - ones });
        }
        let hits = self.with_window(|bytes, endian| {
            (0..slicelen)
                .filter(|&k| {
                    let pos = (start + k as i64 * step) as usize;
                    prim::get_bit(bytes, endian, pos) == value
                })
                .count()
        });
        Ok(hits)
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Position of the first (or last, with `right`) occurrence of `value`
    /// within `[start, stop)`, scanning byte-at-a-time so that all-zero or
    /// all-one bytes are skipped in bulk.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitseq::BitSeq;
    /// let v: BitSeq = "0010 0100".parse()?;
    /// assert_eq!(v.find_value(true, 0, v.len(), false), Some(2));
    /// assert_eq!(v.find_value(true, 0, v.len(), true), Some(5));
    /// assert_eq!(v.find_value(true, 6, 8, false), None);
    /// # Ok::<(), bitseq::Error>(())
    /// ```
    #[must_use]
    pub fn find_value(&self, value: bool, start: usize, stop: usize, right: bool) -> Option<usize> {
        let stop = stop.min(self.nbits);
        if start >= stop {
            return None;
        }
        self.with_window(|bytes, endian| {
            let first = start / 8;
            let last = (stop - 1) / 8;
            let probe = |byte_i: usize| -> Option<usize> {
                let m = if value {
                    bytes[byte_i]
                } else {
                    !bytes[byte_i]
                };
                let lo = if byte_i == first { start % 8 } else { 0 };
                let hi = if byte_i == last { (stop - 1) % 8 + 1 } else { 8 };
                let hits = to_little(m, endian) & prim::seg_mask(Endian::Little, lo, hi);
                if hits == 0 {
                    return None;
                }
                let off = if right {
                    7 - hits.leading_zeros() as usize
                } else {
                    hits.trailing_zeros() as usize
                };
                Some(byte_i * 8 + off)
            };
            if right {
                (first..=last).rev().find_map(probe)
            } else {
                (first..=last).find_map(probe)
            }
        })
    }

    /// Position of the first set bit, or `None`.
    #[must_use]
    pub fn first_one(&self) -> Option<usize> {
        self.find_value(true, 0, self.nbits, false)
    }

    /// Position of the last set bit, or `None`.
    #[must_use]
    pub fn last_one(&self) -> Option<usize> {
        self.find_value(true, 0, self.nbits, true)
    }

    /// Position of the `n`-th (0-based) occurrence of `value`, or `None`
    /// when there are not that many.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitseq::BitSeq;
    /// let v: BitSeq = "01010100".parse()?;
    /// assert_eq!(v.find_nth(true, 0), Some(1));
    /// assert_eq!(v.find_nth(true, 2), Some(5));
    /// assert_eq!(v.find_nth(true, 3), None);
    /// # Ok::<(), bitseq::Error>(())
    /// ```
    #[must_use]
    pub fn find_nth(&self, value: bool, n: usize) -> Option<usize> {
        let nbits = self.nbits;
        self.with_window(|bytes, endian| {
            let mut seen = 0usize;
            for (byte_i, &b) in bytes.iter().enumerate() {
                let lb = to_little(b, endian);
                let hi = if byte_i == bytes.len() - 1 {
                    (nbits - 1) % 8 + 1
                } else {
                    8
                };
                let hits = (if value { lb } else { !lb }) & prim::seg_mask(Endian::Little, 0, hi);
                let cnt = POPCOUNT[hits as usize] as usize;
                if seen + cnt > n {
                    let off = SELECT[hits as usize][n - seen] as usize;
                    return Some(byte_i * 8 + off);
                }
                seen += cnt;
            }
            None
        })
    }

    /// Whether `pattern` occurs starting at `pos`. An empty pattern
    /// matches everywhere, including one past the end.
    fn matches_at(&self, pattern: &BitSeq, pos: usize) -> bool {
        if pos + pattern.nbits > self.nbits {
            return false;
        }
        self.with_window(|hay, he| {
            pattern.with_window(|pat, pe| {
                (0..pattern.nbits)
                    .all(|k| prim::get_bit(hay, he, pos + k) == prim::get_bit(pat, pe, k))
            })
        })
    }

    /// Position of the first (or last, with `right`) match of `pattern`
    /// within `[start, stop)` candidate starts, or `None`.
    ///
    /// An empty pattern matches at every position in `[start, stop]`
    /// inclusive, one past the end included.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitseq::BitSeq;
    /// let v: BitSeq = "10110110".parse()?;
    /// let p: BitSeq = "011".parse()?;
    /// assert_eq!(v.find(&p, 0, v.len(), false), Some(1));
    /// assert_eq!(v.find(&p, 0, v.len(), true), Some(4));
    /// assert_eq!(v.find(&BitSeq::new(v.endian()), 3, v.len(), false), Some(3));
    /// # Ok::<(), bitseq::Error>(())
    /// ```
    #[must_use]
    pub fn find(&self, pattern: &BitSeq, start: usize, stop: usize, right: bool) -> Option<usize> {
        let stop = stop.min(self.nbits);
        let start = start.min(stop);
        if pattern.is_empty() {
            return Some(if right { stop } else { start });
        }
        if pattern.nbits == 1 {
            // Scalar fast path: bulk-skips uniform bytes.
            let bit = pattern.with_window(|p, pe| prim::get_bit(p, pe, 0));
            return self.find_value(bit, start, stop, right);
        }
        if stop - start < pattern.nbits {
            return None;
        }
        let last_start = stop - pattern.nbits;
        if right {
            (start..=last_start)
                .rev()
                .find(|&p| self.matches_at(pattern, p))
        } else {
            (start..=last_start).find(|&p| self.matches_at(pattern, p))
        }
    }

    /// Lazy, directional iterator over non-overlapping match starts of
    /// `pattern` within `[start, stop)`.
    ///
    /// The cursor is single-pass: each step searches the vector as it is
    /// at that moment. The pattern is copied up front, so a pattern
    /// aliasing the haystack stays stable.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitseq::BitSeq;
    /// let v: BitSeq = "1010 1010".parse()?;
    /// let p: BitSeq = "101".parse()?;
    /// let hits: Vec<usize> = v.search(&p, 0, v.len(), false).collect();
    /// assert_eq!(hits, vec![0, 4]);
    /// let back: Vec<usize> = v.search(&p, 0, v.len(), true).collect();
    /// assert_eq!(back, vec![4, 0]);
    /// # Ok::<(), bitseq::Error>(())
    /// ```
    #[must_use]
    pub fn search<'a>(
        &'a self,
        pattern: &BitSeq,
        start: usize,
        stop: usize,
        right: bool,
    ) -> SearchIter<'a> {
        let stop = stop.min(self.nbits);
        let start = start.min(stop);
        SearchIter {
            hay: self,
            needle: pattern.snapshot(),
            lo: start,
            hi: stop,
            cursor: if right { stop } else { start },
            right,
            done: false,
        }
    }
}

/// Iterator returned by [`BitSeq::search`].
///
/// Yields non-overlapping match start positions, ascending (or descending
/// when searching from the right). An empty needle yields every position
/// in the searched range, one past the end included.
pub struct SearchIter<'a> {
    hay: &'a BitSeq,
    needle: BitSeq,
    lo: usize,
    hi: usize,
    /// Next candidate start (forward) or one-past the next candidate
    /// region (backward).
    cursor: usize,
    right: bool,
    done: bool,
}

impl Iterator for SearchIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.done {
            return None;
        }
        let plen = self.needle.len();
        if plen == 0 {
            // Every position in [lo, hi] inclusive.
            if self.right {
                let pos = self.cursor;
                if pos == self.lo {
                    self.done = true;
                } else {
                    self.cursor -= 1;
                }
                return Some(pos);
            }
            if self.cursor > self.hi {
                self.done = true;
                return None;
            }
            let pos = self.cursor;
            self.cursor += 1;
            return Some(pos);
        }
        let found = if self.right {
            self.hay.find(&self.needle, self.lo, self.cursor, true)
        } else {
            self.hay.find(&self.needle, self.cursor, self.hi, false)
        };
        let Some(pos) = found else {
            self.done = true;
            return None;
        };
        if self.right {
            // Next candidate region ends before this match.
            self.cursor = pos;
        } else {
            self.cursor = pos + plen;
        }
        Some(pos)
    }
}

impl core::iter::FusedIterator for SearchIter<'_> {}
