//! Error type shared by every fallible operation in the crate.

use alloc::string::String;
use core::fmt;

/// The closed set of error categories.
///
/// Every [`Error`] maps to exactly one kind via [`Error::kind`], so callers
/// can match on categories without enumerating message variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input value: bad text, zero step, length or endianness
    /// mismatch in a bitwise operation, assignment size mismatch.
    Value,
    /// Index outside the normalized bounds of the vector.
    Index,
    /// Operation is incompatible with the storage category, e.g. mutation
    /// of readonly storage.
    Type,
    /// A length change was attempted while it is forbidden: live views,
    /// shared or imported storage. Applies even when the net change is zero.
    ResizeConflict,
    /// Requested size exceeds the addressable range.
    Overflow,
    /// Deliberately unsupported operation; the message names the idiom to
    /// use instead.
    Unsupported,
}

/// Errors produced by [`BitSeq`](crate::BitSeq) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid character in `0`/`1` or base-2^k text input.
    InvalidChar {
        /// The offending character.
        ch: char,
        /// Byte position within the input.
        pos: usize,
    },
    /// Slice step of zero.
    ZeroStep,
    /// Binary bitwise operation on vectors of differing length.
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },
    /// Binary bitwise operation on vectors of differing endianness.
    EndianMismatch,
    /// Assignment where the value length must match the selection length.
    SizeMismatch {
        /// Number of bits the selection covers.
        expected: usize,
        /// Number of bits the value supplies.
        actual: usize,
    },
    /// Mask length differs from the length of the vector it selects from.
    MaskLength {
        /// Length of the vector being indexed.
        expected: usize,
        /// Length of the mask.
        actual: usize,
    },
    /// Index outside the vector bounds.
    OutOfBounds {
        /// The index as given (before negative normalization).
        index: i64,
        /// Length of the vector.
        len: usize,
    },
    /// Mutation attempted through a readonly vector.
    Readonly,
    /// Value of the wrong category for the key, e.g. a vector where a
    /// single bit is required.
    ValueCategory {
        /// What the key accepts.
        expected: &'static str,
    },
    /// Base-2^k conversion with a group size outside `1..=6`.
    BadGroupSize {
        /// The rejected group size.
        group: usize,
    },
    /// Length change attempted while the buffer cannot be resized.
    ResizeConflict {
        /// Why the buffer is pinned: "imported", "shared" or "exported".
        reason: &'static str,
    },
    /// Requested bit count has no representable byte count.
    TooLarge {
        /// The requested number of bits.
        nbits: u128,
    },
    /// Base-2^k conversion where the length is not a symbol multiple.
    LengthNotMultiple {
        /// Bits per symbol.
        group: usize,
        /// Length of the vector.
        len: usize,
    },
    /// Operation refused by design; the message names the replacement.
    Unsupported(String),
}

impl Error {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidChar { .. }
            | Self::ZeroStep
            | Self::LengthMismatch { .. }
            | Self::EndianMismatch
            | Self::SizeMismatch { .. }
            | Self::LengthNotMultiple { .. }
            | Self::BadGroupSize { .. } => ErrorKind::Value,
            Self::MaskLength { .. } | Self::OutOfBounds { .. } => ErrorKind::Index,
            Self::Readonly | Self::ValueCategory { .. } => ErrorKind::Type,
            Self::ResizeConflict { .. } => ErrorKind::ResizeConflict,
            Self::TooLarge { .. } => ErrorKind::Overflow,
            Self::Unsupported(_) => ErrorKind::Unsupported,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar { ch, pos } => {
                write!(f, "invalid character {ch:?} at position {pos}")
            }
            Self::ZeroStep => f.write_str("slice step cannot be zero"),
            Self::LengthMismatch { left, right } => {
                write!(f, "operands differ in length: {left} != {right}")
            }
            Self::EndianMismatch => f.write_str("operands differ in bit endianness"),
            Self::SizeMismatch { expected, actual } => {
                write!(f, "attempt to assign {actual} bits to a selection of {expected}")
            }
            Self::MaskLength { expected, actual } => {
                write!(f, "mask length {actual} does not match vector length {expected}")
            }
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::Readonly => f.write_str("cannot modify readonly storage"),
            Self::ValueCategory { expected } => {
                write!(f, "this key requires a {expected} value")
            }
            Self::BadGroupSize { group } => {
                write!(f, "group size {group} is outside the supported range 1..=6")
            }
            Self::ResizeConflict { reason } => {
                write!(f, "cannot change length of {reason} buffer")
            }
            Self::TooLarge { nbits } => {
                write!(f, "bit count {nbits} exceeds the addressable range")
            }
            Self::LengthNotMultiple { group, len } => {
                write!(f, "length {len} is not a multiple of the {group}-bit group size")
            }
            Self::Unsupported(msg) => f.write_str(msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, Error>;
