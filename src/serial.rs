//! Serial numbers.
//!
//! DNS uses serial numbers in various places that are conceptionally viewed
//! as the modulus of a larger number space. Because of that, special rules
//! apply when processing these values. This module provides the type
//! [`Sna`] that implements these rules for serial number spaces between one
//! and 64 bits wide, as well as the function [`sna_max`] that picks the
//! largest of a sequence of serial numbers.
//!
//! [`Sna`]: struct.Sna.html
//! [`sna_max`]: fn.sna_max.html

use super::cmp::CanonicalOrd;
use core::cmp::Ordering;
use core::{cmp, fmt, hash, str};

//------------ Sna -----------------------------------------------------------

/// A serial number.
///
/// A serial number is a point in the cyclic number space of all integers
/// from zero up to `2^SERIAL_BITS - 1`. [RFC 1982] defines the semantics
/// for doing arithmetics in the face of wrap-arounds in such a space. This
/// type implements these semantics atop a native `u64` with a width of
/// between one and 64 bits. The width is fixed when the value is created
/// and defaults to 32 bits, which is the width used by DNS.
///
/// Creating a serial number never fails. The raw value given is reduced
/// modulo `2^SERIAL_BITS`, so it simply wraps into the serial number space.
///
/// The RFC defines two operations: addition and comparison.
///
/// For addition, the amount added can only be a positive number of up to
/// `2^(SERIAL_BITS - 1) - 1`. Because of this, we decided to not implement
/// the `Add` trait but rather have a dedicated method
/// [`checked_add`][Self::checked_add] that returns an error for additions
/// that are not defined.
///
/// Serial numbers only implement a partial ordering. That is, there are
/// pairs of values that are not equal but there still isn’t one value larger
/// than the other. Since this is neatly implemented by the `PartialOrd`
/// trait, the type implements that. Serial numbers of different width are
/// never equal and never ordered.
///
/// A serial number produced by [`checked_add`][Self::checked_add]
/// remembers where the chain of additions leading to it started. Two equal
/// serial numbers may therefore differ in how far they can still be
/// advanced. Equality, hashing, and ordering only consider the value.
///
/// [RFC 1982]: https://tools.ietf.org/html/rfc1982
#[derive(Clone, Copy, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SnaRepr", into = "SnaRepr")
)]
pub struct Sna {
    value: u64,
    bits: u8,

    /// The value the chain of additions started at plus everything added
    /// since, without wrapping. `None` if the value was created directly.
    chain: Option<u128>,
}

impl Sna {
    /// The width of a serial number space if none is given explicitly.
    pub const DEFAULT_BITS: u8 = 32;

    /// The widest serial number space supported.
    pub const MAX_BITS: u8 = 64;

    /// Creates a serial number in the default 32 bit space.
    pub fn new(value: impl Into<i128>) -> Self {
        Self::normalize(value.into(), Self::DEFAULT_BITS)
    }

    /// Creates a serial number in a space of `bits` bits.
    ///
    /// The value is reduced modulo `2^bits`. Negative values wrap, too.
    ///
    /// # Panics
    ///
    /// This method panics if `bits` is zero or greater than 64.
    pub fn with_bits(value: impl Into<i128>, bits: u8) -> Self {
        assert!(
            (1..=Self::MAX_BITS).contains(&bits),
            "serial bits must be between 1 and 64"
        );
        Self::normalize(value.into(), bits)
    }

    /// Creates a serial number in a space of `bits` bits if that is valid.
    pub fn try_with_bits(
        value: impl Into<i128>,
        bits: u8,
    ) -> Result<Self, InvalidSerialBits> {
        if (1..=Self::MAX_BITS).contains(&bits) {
            Ok(Self::normalize(value.into(), bits))
        } else {
            Err(InvalidSerialBits(bits))
        }
    }

    fn normalize(value: i128, bits: u8) -> Self {
        Sna {
            value: value.rem_euclid(1i128 << bits) as u64,
            bits,
            chain: None,
        }
    }

    /// Returns the serial number as a raw integer.
    pub fn into_int(self) -> u64 {
        self.value
    }

    /// Returns the width of the serial number space in bits.
    pub fn serial_bits(&self) -> u8 {
        self.bits
    }

    /// Returns the number of values in the serial number space.
    pub fn modulo(&self) -> u128 {
        1u128 << self.bits
    }

    /// Returns the largest value of the serial number space.
    pub fn max_val(&self) -> u64 {
        (self.modulo() - 1) as u64
    }

    /// Returns half the size of the serial number space.
    ///
    /// Two values exactly this far apart cannot be ordered.
    pub fn half_ring(&self) -> u64 {
        1u64 << (self.bits - 1)
    }

    /// Returns the largest value that can be added to a serial number.
    pub fn max_add(&self) -> u64 {
        self.half_ring() - 1
    }

    /// Returns the same serial number with its addition history cleared.
    ///
    /// See [`checked_add`][Self::checked_add] for why this matters.
    #[must_use]
    pub fn rebased(self) -> Self {
        Sna { chain: None, ..self }
    }

    /// Adds `other` to `self`.
    ///
    /// Serial numbers only allow values of up to `2^(SERIAL_BITS - 1) - 1`
    /// to be added to them. Adding a larger value fails with
    /// [`AddError::AddendTooLarge`]. Both values need to be of the same
    /// width, otherwise [`AddError::BitsMismatch`] is returned.
    ///
    /// A chain of additions may carry past the end of the serial number
    /// space at most onto zero. If `self` is itself the result of an
    /// addition and the chain’s starting value plus everything added to it
    /// would exceed `2^SERIAL_BITS`, the addition fails with
    /// [`AddError::ChainOverflow`]. Results may still become smaller than
    /// earlier values of the chain. In an 8 bit space, `200 + 100` is `44`
    /// and `0 + 1` can be chained 256 times, but `(100 + 100) + 100` fails.
    /// Use [`rebased`][Self::rebased] to start a new chain.
    pub fn checked_add(self, other: Sna) -> Result<Self, AddError> {
        if self.bits != other.bits {
            return Err(self.reject(other, AddError::BitsMismatch));
        }
        let max_add = self.max_add();
        if other.value > max_add {
            return Err(self.reject(other, AddError::AddendTooLarge));
        }
        let chain = self.chain.unwrap_or(u128::from(self.value))
            + u128::from(other.value);
        if self.chain.is_some() && chain > self.modulo() {
            return Err(self.reject(other, AddError::ChainOverflow));
        }
        Ok(Sna {
            value: ((u128::from(self.value) + u128::from(other.value))
                % self.modulo()) as u64,
            bits: self.bits,
            chain: Some(chain),
        })
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn reject(self, other: Sna, err: AddError) -> AddError {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            serial_bits = self.bits,
            value = self.value,
            chain = ?self.chain,
            addend = other.value,
            addend_bits = other.bits,
            "rejected serial number addition: {err}"
        );
        err
    }
}

//--- Default

impl Default for Sna {
    fn default() -> Self {
        Sna::new(0)
    }
}

//--- From and FromStr

impl From<u32> for Sna {
    fn from(value: u32) -> Sna {
        Sna::new(value)
    }
}

impl From<Sna> for u64 {
    fn from(sna: Sna) -> u64 {
        sna.value
    }
}

impl str::FromStr for Sna {
    type Err = <u32 as str::FromStr>::Err;

    /// Parses a decimal serial number in the default 32 bit space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <u32 as str::FromStr>::from_str(s).map(Into::into)
    }
}

//--- Display

impl fmt::Display for Sna {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

//--- PartialEq, Eq, and Hash
//
// The addition history is not part of the value.

impl PartialEq for Sna {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.bits == other.bits
    }
}

impl Eq for Sna {}

impl hash::Hash for Sna {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.bits.hash(state);
    }
}

//--- PartialOrd and CanonicalOrd

impl cmp::PartialOrd for Sna {
    fn partial_cmp(&self, other: &Sna) -> Option<cmp::Ordering> {
        if self.bits != other.bits {
            return None;
        }
        let half_ring = self.half_ring();
        match self.value.cmp(&other.value) {
            Ordering::Equal => Some(Ordering::Equal),
            Ordering::Less => {
                let sub = other.value - self.value;
                match sub.cmp(&half_ring) {
                    Ordering::Less => Some(Ordering::Less),
                    Ordering::Greater => Some(Ordering::Greater),
                    Ordering::Equal => None,
                }
            }
            Ordering::Greater => {
                let sub = self.value - other.value;
                match sub.cmp(&half_ring) {
                    Ordering::Less => Some(Ordering::Greater),
                    Ordering::Greater => Some(Ordering::Less),
                    Ordering::Equal => None,
                }
            }
        }
    }
}

impl CanonicalOrd for Sna {
    fn canonical_cmp(&self, other: &Self) -> cmp::Ordering {
        self.bits
            .cmp(&other.bits)
            .then_with(|| self.value.cmp(&other.value))
    }
}

//------------ SnaRepr -------------------------------------------------------

/// The serialized form of a serial number.
#[cfg(feature = "serde")]
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename = "Sna")]
struct SnaRepr {
    value: u64,
    serial_bits: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<SnaRepr> for Sna {
    type Error = InvalidSerialBits;

    fn try_from(repr: SnaRepr) -> Result<Self, Self::Error> {
        Sna::try_with_bits(repr.value, repr.serial_bits)
    }
}

#[cfg(feature = "serde")]
impl From<Sna> for SnaRepr {
    fn from(sna: Sna) -> Self {
        SnaRepr {
            value: sna.value,
            serial_bits: sna.bits,
        }
    }
}

//------------ sna_max -------------------------------------------------------

/// Returns the largest of a sequence of optional serial numbers.
///
/// A missing value is smaller than any serial number. If there are no
/// serial numbers at all, returns `None`. Because serial numbers are only
/// partially ordered, the sequence is scanned once from the front and the
/// current candidate is only replaced by a value strictly greater than it.
/// Of several equal largest values, the first one is returned.
///
/// The function works with any partially ordered type, so it can be used
/// with both [`Sna`] and [`DateSna`][crate::date::DateSna].
pub fn sna_max<T, I>(items: I) -> Option<T>
where
    T: PartialOrd,
    I: IntoIterator<Item = Option<T>>,
{
    let mut res: Option<T> = None;
    for item in items.into_iter().flatten() {
        let replace = match res {
            Some(ref current) => item > *current,
            None => true,
        };
        if replace {
            res = Some(item)
        }
    }
    res
}

//------------ AddError ------------------------------------------------------

/// An addition of serial numbers was not defined.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddError {
    /// The value added was larger than `2^(SERIAL_BITS - 1) - 1`.
    AddendTooLarge,

    /// A chain of additions would carry past the end of the space.
    ChainOverflow,

    /// The two serial numbers were of different width.
    BitsMismatch,
}

impl AddError {
    /// Returns whether the addition left the range defined by RFC 1982.
    pub fn is_out_of_range(self) -> bool {
        matches!(self, AddError::AddendTooLarge | AddError::ChainOverflow)
    }
}

impl fmt::Display for AddError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            AddError::AddendTooLarge => "serial number addend too large",
            AddError::ChainOverflow => {
                "serial number chain carried past the end of the space"
            }
            AddError::BitsMismatch => "serial numbers of different width",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AddError {}

//------------ InvalidSerialBits ---------------------------------------------

/// A serial number space width outside of 1 to 64 bits was requested.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvalidSerialBits(u8);

impl InvalidSerialBits {
    /// Returns the rejected width.
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl fmt::Display for InvalidSerialBits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid serial number width {}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidSerialBits {}

//============ Testing =======================================================
