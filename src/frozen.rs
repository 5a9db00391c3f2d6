//! Frozen (immutable, hashable) bit vectors.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Deref;

use crate::bits::BitSeq;
use crate::prim::to_little;

/// An immutable, hashable bit vector.
///
/// Freezing marks the storage readonly; every mutating operation fails
/// with a type-error kind, and length changes with a resize-conflict
/// kind, exactly as for any readonly vector. In exchange the value can be
/// hashed: the hash covers the logical bit sequence only, so two frozen
/// vectors that compare equal hash equal regardless of their endianness
/// tags.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
///
/// use bitseq::{BitSeq, Endian, FrozenBitSeq};
///
/// let a = FrozenBitSeq::from(BitSeq::parse_str("1010", Endian::Big)?);
/// let b = FrozenBitSeq::from(BitSeq::parse_str("1010", Endian::Little)?);
/// assert_eq!(a, b);
///
/// let mut set = HashSet::new();
/// set.insert(a);
/// assert!(set.contains(&b));
/// # Ok::<(), bitseq::Error>(())
/// ```
pub struct FrozenBitSeq {
    inner: BitSeq,
}

impl FrozenBitSeq {
    /// Freezes a vector in place; no bytes are copied.
    #[must_use]
    pub fn freeze(mut seq: BitSeq) -> Self {
        seq.readonly = true;
        Self { inner: seq }
    }

    /// An independent, writable deep copy.
    #[must_use]
    pub fn thaw(&self) -> BitSeq {
        self.inner.snapshot()
    }

    /// Borrows the underlying vector (readonly).
    #[must_use]
    pub fn as_bitseq(&self) -> &BitSeq {
        &self.inner
    }
}

impl From<BitSeq> for FrozenBitSeq {
    fn from(seq: BitSeq) -> Self {
        Self::freeze(seq)
    }
}

impl Deref for FrozenBitSeq {
    type Target = BitSeq;

    fn deref(&self) -> &BitSeq {
        &self.inner
    }
}

impl Clone for FrozenBitSeq {
    /// Clones by sharing: frozen storage never changes, so another handle
    /// is as good as a copy.
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.share(),
        }
    }
}

impl PartialEq for FrozenBitSeq {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for FrozenBitSeq {}

impl PartialEq<BitSeq> for FrozenBitSeq {
    fn eq(&self, other: &BitSeq) -> bool {
        &self.inner == other
    }
}

impl Hash for FrozenBitSeq {
    /// Hashes the logical bit sequence: bytes are normalized to one
    /// canonical layout first, so the hash is endianness-independent.
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.inner.len());
        self.inner.with_window(|bytes, endian| {
            for &b in bytes {
                state.write_u8(to_little(b, endian));
            }
        });
    }
}

impl fmt::Display for FrozenBitSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for FrozenBitSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrozenBitSeq(\"{}\", {})", self.inner, self.inner.endian())
    }
}
