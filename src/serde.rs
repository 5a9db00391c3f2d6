//! Serde support for `BitSeq`.
//!
//! A vector serializes as the 3-tuple `(endian, nbits, bytes)` where
//! `endian` is `"little"` or `"big"`, `nbits` the logical length and
//! `bytes` the packed window bytes. The tuple keeps the byte layout
//! intact, so a round trip reproduces both the content and the tag.

use alloc::vec::Vec;
use core::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bits::{BitSeq, Endian};
use crate::buffer::bits2bytes;

impl Serialize for BitSeq {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(match self.endian() {
            Endian::Little => "little",
            Endian::Big => "big",
        })?;
        tuple.serialize_element(&(self.len() as u64))?;
        tuple.serialize_element(&self.to_bytes())?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for BitSeq {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BitSeqVisitor;

        impl<'de> Visitor<'de> for BitSeqVisitor {
            type Value = BitSeq;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an (endian, nbits, bytes) tuple")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<BitSeq, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let endian: alloc::string::String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let endian = match endian.as_str() {
                    "little" => Endian::Little,
                    "big" => Endian::Big,
                    other => {
                        return Err(de::Error::unknown_variant(other, &["little", "big"]));
                    }
                };
                let nbits: u64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let bytes: Vec<u8> = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(2, &self))?;
                let nbits = usize::try_from(nbits)
                    .map_err(|_| de::Error::custom("bit count exceeds the addressable range"))?;
                if bits2bytes(nbits) != bytes.len() {
                    return Err(de::Error::custom("byte count does not match bit count"));
                }
                BitSeq::from_bytes_truncated(&bytes, nbits, endian)
                    .map_err(|e| de::Error::custom(e))
            }
        }

        deserializer.deserialize_tuple(3, BitSeqVisitor)
    }
}
