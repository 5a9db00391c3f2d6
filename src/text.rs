//! Text conversions: `0`/`1` strings and base-2^k encodings.
//!
//! Base-2^k symbols group `k` consecutive bits. The vector's endianness
//! decides the significance order within each group: big-endian vectors
//! put the first bit of a group in the symbol's most significant place,
//! little-endian vectors in its least significant place.

use alloc::string::String;
use alloc::vec::Vec;

use crate::bits::{BitSeq, Endian};
use crate::error::{Error, Result};
use crate::prim;

const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

fn digit_value(group: usize, ch: char) -> Option<u8> {
    match group {
        1..=4 => {
            let v = ch.to_digit(16)? as u8;
            if (v as u32) < (1 << group) { Some(v) } else { None }
        }
        5 => match ch {
            'A'..='Z' => Some(ch as u8 - b'A'),
            'a'..='z' => Some(ch as u8 - b'a'),
            '2'..='7' => Some(ch as u8 - b'2' + 26),
            _ => None,
        },
        6 => match ch {
            'A'..='Z' => Some(ch as u8 - b'A'),
            'a'..='z' => Some(ch as u8 - b'a' + 26),
            '0'..='9' => Some(ch as u8 - b'0' + 52),
            '+' => Some(62),
            '/' => Some(63),
            _ => None,
        },
        _ => None,
    }
}

fn digit_char(group: usize, value: u8) -> char {
    debug_assert!((value as u32) < (1 << group));
    match group {
        1..=4 => HEX_DIGITS[value as usize] as char,
        5 => BASE32_ALPHABET[value as usize] as char,
        _ => BASE64_ALPHABET[value as usize] as char,
    }
}

impl BitSeq {
    /// Parses a `0`/`1` string; whitespace and `_` are ignored.
    ///
    /// # Errors
    ///
    /// Value kind naming the offending character and position.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitseq::{BitSeq, Endian};
    /// let v = BitSeq::parse_str("0100 1111_0", Endian::Big)?;
    /// assert_eq!(v.len(), 9);
    /// assert!(BitSeq::parse_str("01x0", Endian::Big).is_err());
    /// # Ok::<(), bitseq::Error>(())
    /// ```
    pub fn parse_str(s: &str, endian: Endian) -> Result<Self> {
        let mut bits = Vec::with_capacity(s.len());
        for (pos, ch) in s.char_indices() {
            match ch {
                '0' => bits.push(false),
                '1' => bits.push(true),
                '_' => {}
                c if c.is_whitespace() => {}
                c => return Err(Error::InvalidChar { ch: c, pos }),
            }
        }
        Ok(Self::from_bools(&bits, endian))
    }

    /// Appends bits parsed from a `0`/`1` string.
    ///
    /// On an invalid character the bits appended so far are retained and
    /// the error names the offender.
    pub fn extend_from_str(&mut self, s: &str) -> Result<()> {
        self.check_resizable()?;
        for (pos, ch) in s.char_indices() {
            match ch {
                '0' => self.push(false)?,
                '1' => self.push(true)?,
                '_' => {}
                c if c.is_whitespace() => {}
                c => return Err(Error::InvalidChar { ch: c, pos }),
            }
        }
        Ok(())
    }

    /// The bits as a `0`/`1` string.
    #[must_use]
    pub fn to_01(&self) -> String {
        self.with_window(|bytes, endian| {
            (0..self.nbits)
                .map(|i| {
                    if prim::get_bit(bytes, endian, i) {
                        '1'
                    } else {
                        '0'
                    }
                })
                .collect()
        })
    }

    /// Encodes the vector in base 2^`group` for `group` in `1..=6`,
    /// grouping bits per this vector's endianness.
    ///
    /// # Errors
    ///
    /// Value kind when `group` is outside `1..=6` or the length is not a
    /// multiple of `group`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitseq::BitSeq;
    /// let v: BitSeq = "01001111".parse()?;
    /// assert_eq!(v.to_base(4)?, "4f");
    /// assert_eq!(v.to_base(1)?, "01001111");
    /// # Ok::<(), bitseq::Error>(())
    /// ```
    pub fn to_base(&self, group: usize) -> Result<String> {
        if !(1..=6).contains(&group) {
            return Err(Error::BadGroupSize { group });
        }
        if self.nbits % group != 0 {
            return Err(Error::LengthNotMultiple {
                group,
                len: self.nbits,
            });
        }
        let out = self.with_window(|bytes, endian| {
            (0..self.nbits / group)
                .map(|g| {
                    let mut value = 0u8;
                    for j in 0..group {
                        if prim::get_bit(bytes, endian, g * group + j) {
                            let weight = match endian {
                                Endian::Big => group - 1 - j,
                                Endian::Little => j,
                            };
                            value |= 1 << weight;
                        }
                    }
                    digit_char(group, value)
                })
                .collect()
        });
        Ok(out)
    }

    /// Decodes a base-2^`group` string into a vector, `group` bits per
    /// symbol, grouped per `endian`.
    ///
    /// # Errors
    ///
    /// Value kind when `group` is outside `1..=6` or a digit is invalid
    /// for the base; the error names the offending character.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bitseq::{BitSeq, Endian};
    /// let v = BitSeq::from_base(4, "4f", Endian::Big)?;
    /// assert_eq!(v.to_string(), "01001111");
    /// assert!(BitSeq::from_base(4, "4g", Endian::Big).is_err());
    /// # Ok::<(), bitseq::Error>(())
    /// ```
    pub fn from_base(group: usize, s: &str, endian: Endian) -> Result<Self> {
        if !(1..=6).contains(&group) {
            return Err(Error::BadGroupSize { group });
        }
        let mut bits = Vec::with_capacity(s.len() * group);
        for (pos, ch) in s.char_indices() {
            let Some(value) = digit_value(group, ch) else {
                return Err(Error::InvalidChar { ch, pos });
            };
            for j in 0..group {
                let weight = match endian {
                    Endian::Big => group - 1 - j,
                    Endian::Little => j,
                };
                bits.push(value & (1 << weight) != 0);
            }
        }
        Ok(Self::from_bools(&bits, endian))
    }
}
