//! A resizable, endianness-aware bit-vector with shared backing storage.
//!
//! This crate provides [`BitSeq`], an ordered sequence of single-bit
//! values packed into byte storage, plus [`FrozenBitSeq`], its immutable
//! hashable counterpart. The design centers on four things:
//!
//! - **O(1) random access** and arbitrary-stride slicing with Python
//!   list-slice semantics (negative indices and steps included), through a
//!   closed set of index keys: single index, slice, boolean mask, index
//!   sequence.
//! - **Set algebra**: AND/OR/XOR/INVERT and logical shifts, with strict
//!   length-and-endianness checking on binary operations.
//! - **Storage sharing**: several handles may alias overlapping byte
//!   ranges of one buffer, foreign byte regions can be imported without
//!   copying, and RAII byte views pin the storage while they live.
//! - **Cheap counting and search**: segmented prefix popcounts make range
//!   counts O(segment), and scalar searches skip uniform bytes in bulk.
//!
//! # Examples
//!
//! ```
//! use bitseq::{BitSeq, Endian, SliceSpec};
//!
//! // Parse, slice, count.
//! let v: BitSeq = "01001111 00001".parse()?;
//! let picked = v.get_slice(SliceSpec::new(Some(13), Some(2), Some(-3)))?;
//! assert_eq!(picked.to_string(), "1010");
//! assert_eq!(v.count_ones(), 6);
//!
//! // Algebra.
//! let a = BitSeq::parse_str("1100", Endian::Big)?;
//! let b = BitSeq::parse_str("1010", Endian::Big)?;
//! assert_eq!((&a & &b).to_string(), "1000");
//!
//! // Sharing: two handles over one buffer.
//! let mut x = BitSeq::zeros(16, Endian::Big);
//! let y = x.share();
//! x.set(3, true)?;
//! assert_eq!(y.get(3), Some(true));
//! # Ok::<(), bitseq::Error>(())
//! ```
//!
//! # Endianness
//!
//! Every vector carries a bit-endianness tag describing how logical bit
//! positions map onto the bits of each backing byte. The tag is purely a
//! byte-layout convention: it decides what [`BitSeq::to_bytes`] produces
//! and how base-2^k text groups bits, but never affects logical value,
//! equality or ordering.
//!
//! # Concurrency
//!
//! `BitSeq` is a single-threaded structure (`!Send`, `!Sync`); buffer
//! sharing uses reference counting without locks. No operation blocks or
//! performs I/O.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
mod bits;
pub mod buffer;
mod count;
mod error;
mod frozen;
mod index;
mod iter;
mod lut;
mod macros;
mod prim;
mod set_ops;
mod text;
mod traits;

#[cfg(feature = "serde")]
mod serde;

// Re-exports
pub use bits::{BitSeq, Endian};
pub use buffer::{ByteView, ByteViewMut, bits2bytes};
pub use count::SearchIter;
pub use error::{Error, ErrorKind, Result};
pub use frozen::FrozenBitSeq;
pub use index::{Fetched, Key, SetValue, SliceSpec};
pub use iter::{IntoIter, Iter, Ones};
