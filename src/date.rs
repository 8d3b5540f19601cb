//! Date-valued serial numbers.
//!
//! DNS uses 32 bit timestamps that are viewed as seconds since the Unix
//! epoch modulo `2^32`. Because they are serial numbers, such timestamps
//! can be compared across the 2038 and 2106 roll-overs, but they can only
//! ever be advanced by a bit more than 68 years at once.

use super::cmp::CanonicalOrd;
use super::serial::{AddError, Sna};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};
use core::{cmp, fmt, str};
#[cfg(feature = "std")]
use std::string::{String, ToString};
#[cfg(feature = "std")]
use std::time::{SystemTime, UNIX_EPOCH};
use time::{Date, Duration, Month, OffsetDateTime, PrimitiveDateTime, Time};

//------------ DateSna -------------------------------------------------------

/// A serial number holding a point in time.
///
/// The value is a 32 bit serial number giving the number of seconds
/// elapsed since 1 January 1970 00:00:00 UTC, ignoring leap seconds.
/// Arithmetic and comparison follow the rules of [RFC 1982] as implemented
/// by [`Sna`].
///
/// The presentation format of the value is a date in `YYYYMMDDhhmmss`
/// format in UTC. This is what the `Display` and `FromStr` impls use.
///
/// [RFC 1982]: https://tools.ietf.org/html/rfc1982
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u32", into = "u32")
)]
pub struct DateSna(Sna);

impl DateSna {
    /// Creates a date serial from a raw number of seconds.
    #[must_use]
    pub fn from_int(value: u32) -> Self {
        Self(Sna::new(value))
    }

    /// Creates a date serial from the value of a serial number.
    ///
    /// The value is reduced modulo `2^32` if the serial number is wider.
    #[must_use]
    pub fn from_sna(sna: Sna) -> Self {
        Self(Sna::new(sna.into_int()))
    }

    /// Creates a date serial from a date in `YYYYMMDDhhmmss` format.
    ///
    /// The date is taken to be in UTC. Dates before the epoch or after
    /// early 2106 wrap around.
    pub fn from_date(src: &str) -> Result<Self, IllegalDate> {
        let buf = src.as_bytes();
        if buf.len() != 14 || !buf.iter().all(u8::is_ascii_digit) {
            return Err(IllegalDate(()));
        }
        let year = u32_from_buf(&buf[0..4]) as i32;
        let month = Month::try_from(u8_from_buf(&buf[4..6]))
            .map_err(|_| IllegalDate(()))?;
        let day = u8_from_buf(&buf[6..8]);
        let hour = u8_from_buf(&buf[8..10]);
        let minute = u8_from_buf(&buf[10..12]);
        let second = u8_from_buf(&buf[12..14]);
        Ok(Self::from_timestamp(
            PrimitiveDateTime::new(
                Date::from_calendar_date(year, month, day)
                    .map_err(|_| IllegalDate(()))?,
                Time::from_hms(hour, minute, second)
                    .map_err(|_| IllegalDate(()))?,
            )
            .assume_utc()
            .unix_timestamp(),
        ))
    }

    /// Returns a date serial for the current system time.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn now() -> Self {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(value) => Self::from_timestamp(value.as_secs()),
            Err(err) => {
                Self::from_timestamp(-i128::from(err.duration().as_secs()))
            }
        }
    }

    fn from_timestamp(timestamp: impl Into<i128>) -> Self {
        Self(Sna::new(timestamp))
    }

    /// Returns the date serial as a raw integer.
    #[must_use]
    pub fn into_int(self) -> u32 {
        self.0.into_int() as u32
    }

    /// Returns the underlying serial number.
    #[must_use]
    pub fn as_sna(self) -> Sna {
        self.0
    }

    /// Returns the point in time the value refers to.
    ///
    /// Since the value is not aware of any wrap-arounds that have already
    /// happened, the result is between 1970 and early 2106.
    #[must_use]
    pub fn to_datetime(self) -> OffsetDateTime {
        OffsetDateTime::UNIX_EPOCH
            + Duration::seconds(i64::from(self.into_int()))
    }

    /// Returns the value in `YYYYMMDDhhmmss` format.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn as_date(&self) -> String {
        self.to_string()
    }

    /// Adds the serial number `other` to `self`.
    ///
    /// Only 32 bit serial numbers of up to `2^31 - 1`, i.e., a bit over
    /// 68 years, can be added. See [`Sna::checked_add`] for details.
    pub fn checked_add(self, other: Sna) -> Result<Self, AddError> {
        self.0.checked_add(other).map(Self)
    }
}

//--- Default

impl Default for DateSna {
    /// Returns the epoch, 1 January 1970 00:00:00 UTC.
    fn default() -> Self {
        Self::from_int(0)
    }
}

//--- From and FromStr

impl From<u32> for DateSna {
    fn from(value: u32) -> Self {
        Self::from_int(value)
    }
}

impl From<DateSna> for u32 {
    fn from(date: DateSna) -> u32 {
        date.into_int()
    }
}

impl From<DateSna> for Sna {
    fn from(date: DateSna) -> Sna {
        date.0
    }
}

impl From<OffsetDateTime> for DateSna {
    fn from(value: OffsetDateTime) -> Self {
        Self::from_timestamp(value.unix_timestamp())
    }
}

#[cfg(feature = "chrono")]
#[cfg_attr(docsrs, doc(cfg(feature = "chrono")))]
impl<T: TimeZone> From<DateTime<T>> for DateSna {
    fn from(value: DateTime<T>) -> Self {
        Self::from_timestamp(value.timestamp())
    }
}

impl str::FromStr for DateSna {
    type Err = IllegalDate;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::from_date(src)
    }
}

//--- PartialEq

impl PartialEq<Sna> for DateSna {
    fn eq(&self, other: &Sna) -> bool {
        self.0 == *other
    }
}

impl PartialEq<DateSna> for Sna {
    fn eq(&self, other: &DateSna) -> bool {
        *self == other.0
    }
}

//--- PartialOrd and CanonicalOrd

impl cmp::PartialOrd for DateSna {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl cmp::PartialOrd<Sna> for DateSna {
    fn partial_cmp(&self, other: &Sna) -> Option<cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}

impl cmp::PartialOrd<DateSna> for Sna {
    fn partial_cmp(&self, other: &DateSna) -> Option<cmp::Ordering> {
        self.partial_cmp(&other.0)
    }
}

impl CanonicalOrd for DateSna {
    fn canonical_cmp(&self, other: &Self) -> cmp::Ordering {
        self.0.canonical_cmp(&other.0)
    }
}

//--- Display

impl fmt::Display for DateSna {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let datetime = self.to_datetime();
        write!(
            f,
            "{:04}{:02}{:02}{:02}{:02}{:02}",
            datetime.year(),
            u8::from(datetime.month()),
            datetime.day(),
            datetime.hour(),
            datetime.minute(),
            datetime.second(),
        )
    }
}

//------------ Helper Functions ----------------------------------------------

fn u8_from_buf(buf: &[u8]) -> u8 {
    let mut res = 0;
    for ch in buf {
        res = res * 10 + (*ch - b'0');
    }
    res
}

fn u32_from_buf(buf: &[u8]) -> u32 {
    let mut res = 0;
    for ch in buf {
        res = res * 10 + u32::from(*ch - b'0');
    }
    res
}

//------------ IllegalDate ---------------------------------------------------

/// A string was not a valid date in `YYYYMMDDhhmmss` format.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IllegalDate(());

impl fmt::Display for IllegalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("illegal date")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IllegalDate {}

//============ Testing =======================================================
