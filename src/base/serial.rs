//! Serial numbers and signature timestamps.
//!
//! DNS uses 32 bit serial numbers in various places that are conceptionally
//! viewed as the 32 bit modulus of a larger number space. Because of that,
//! special rules apply when processing these values. This module provides
//! the type [`Serial`] that implements these rules and [`Timestamp`], the
//! signature inception and expiration times of RRSIG records built atop it.

use core::cmp::Ordering;
use core::str::FromStr;
use core::{cmp, fmt, str};
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time};

//------------ Serial --------------------------------------------------------

/// A serial number.
///
/// Since these numbers are only 32 bits long, they can wrap. [RFC 1982]
/// defined the semantics for doing arithmetics in the face of these
/// wrap-arounds. This type implements the comparison part atop a native
/// `u32`.
///
/// Serial numbers only implement a partial ordering. That is, there are
/// pairs of values that are not equal but there still isn’t one value larger
/// than the other. Since this is neatly implemented by the `PartialOrd`
/// trait, the type implements that.
///
/// [RFC 1982]: https://tools.ietf.org/html/rfc1982
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Serial(pub u32);

impl Serial {
    /// Returns the serial number as a raw integer.
    pub fn into_int(self) -> u32 {
        self.0
    }
}

//--- From and FromStr

impl From<u32> for Serial {
    fn from(value: u32) -> Serial {
        Serial(value)
    }
}

impl From<Serial> for u32 {
    fn from(serial: Serial) -> u32 {
        serial.0
    }
}

impl str::FromStr for Serial {
    type Err = <u32 as str::FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <u32 as str::FromStr>::from_str(s).map(Into::into)
    }
}

//--- Display

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//--- PartialOrd

impl cmp::PartialOrd for Serial {
    fn partial_cmp(&self, other: &Serial) -> Option<cmp::Ordering> {
        match self.0.cmp(&other.0) {
            Ordering::Equal => Some(Ordering::Equal),
            Ordering::Less => {
                let sub = other.0 - self.0;
                match sub.cmp(&0x8000_0000) {
                    Ordering::Less => Some(Ordering::Less),
                    Ordering::Greater => Some(Ordering::Greater),
                    Ordering::Equal => None,
                }
            }
            Ordering::Greater => {
                let sub = self.0 - other.0;
                match sub.cmp(&0x8000_0000) {
                    Ordering::Less => Some(Ordering::Greater),
                    Ordering::Greater => Some(Ordering::Less),
                    Ordering::Equal => None,
                }
            }
        }
    }
}

//------------ Timestamp -----------------------------------------------------

/// A timestamp for RRSIG records.
///
/// [RFC 4034] defines timestamps as the number of seconds elapsed since
/// 1 January 1970 00:00:00 UTC, ignoring leap seconds, modulo 2^32.
/// Timestamps are compared using serial number arithmetic.
///
/// In zonefiles, a timestamp is either given as a date in
/// `YYYYMMDDHHmmSS` format or directly as its integer value.
///
/// When serialized with serde, human-readable formats get the
/// `YYYYMMDDHHmmSS` form while compact formats get the integer.
///
/// [RFC 4034]: https://tools.ietf.org/html/rfc4034#section-3.2
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Timestamp(Serial);

impl Timestamp {
    /// Returns the timestamp as a raw integer.
    #[must_use]
    pub fn into_int(self) -> u32 {
        self.0.into_int()
    }

    /// Returns the point in time of the timestamp.
    ///
    /// Since the value wraps, this picks the time between 1970 and 2106.
    #[must_use]
    pub fn to_datetime(self) -> OffsetDateTime {
        // Every u32 is a valid unix timestamp for the time crate.
        OffsetDateTime::from_unix_timestamp(i64::from(self.into_int()))
            .unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }

    /// Parses a date in `YYYYMMDDHHmmSS` format.
    fn from_date_str(src: &str) -> Result<Self, IllegalSignatureTime> {
        fn field<T: str::FromStr>(
            src: &str,
        ) -> Result<T, IllegalSignatureTime> {
            if !src.bytes().all(|ch| ch.is_ascii_digit()) {
                return Err(IllegalSignatureTime(()));
            }
            T::from_str(src).map_err(|_| IllegalSignatureTime(()))
        }

        let year = field::<i32>(&src[0..4])?;
        let month = Month::try_from(field::<u8>(&src[4..6])?)
            .map_err(|_| IllegalSignatureTime(()))?;
        let day = field::<u8>(&src[6..8])?;
        let hour = field::<u8>(&src[8..10])?;
        let minute = field::<u8>(&src[10..12])?;
        let second = field::<u8>(&src[12..14])?;
        let datetime = PrimitiveDateTime::new(
            Date::from_calendar_date(year, month, day)
                .map_err(|_| IllegalSignatureTime(()))?,
            Time::from_hms(hour, minute, second)
                .map_err(|_| IllegalSignatureTime(()))?,
        )
        .assume_utc();
        // Wrapping into the 32 bit number space is intended.
        Ok(Timestamp(Serial(datetime.unix_timestamp() as u32)))
    }
}

//--- From and FromStr

impl From<u32> for Timestamp {
    fn from(item: u32) -> Self {
        Self(Serial::from(item))
    }
}

impl str::FromStr for Timestamp {
    type Err = IllegalSignatureTime;

    /// Parses a timestamp value from a string.
    ///
    /// The presentation format can either be their integer value or a
    /// specific date in `YYYYMMDDHHmmSS` format.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        if src.is_empty() || !src.bytes().all(|ch| ch.is_ascii_digit()) {
            return Err(IllegalSignatureTime(()));
        }
        if src.len() == 14 {
            Self::from_date_str(src)
        } else if src.len() <= 10 {
            Serial::from_str(src)
                .map(Timestamp)
                .map_err(|_| IllegalSignatureTime(()))
        } else {
            Err(IllegalSignatureTime(()))
        }
    }
}

//--- Display

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let dt = self.to_datetime();
        write!(
            f,
            "{:04}{:02}{:02}{:02}{:02}{:02}",
            dt.year(),
            u8::from(dt.month()),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second()
        )
    }
}

//--- PartialOrd

impl cmp::PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for Timestamp {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_u32(self.into_int())
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Timestamp {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        struct Visitor;

        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = Timestamp;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a signature timestamp")
            }

            fn visit_u64<E: serde::de::Error>(
                self,
                value: u64,
            ) -> Result<Self::Value, E> {
                u32::try_from(value).map(Timestamp::from).map_err(E::custom)
            }

            fn visit_str<E: serde::de::Error>(
                self,
                value: &str,
            ) -> Result<Self::Value, E> {
                Timestamp::from_str(value).map_err(E::custom)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_any(Visitor)
        } else {
            <u32 as serde::Deserialize>::deserialize(deserializer)
                .map(Timestamp::from)
        }
    }
}

//------------ IllegalSignatureTime ------------------------------------------

/// A string couldn’t be converted into a signature timestamp.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IllegalSignatureTime(());

impl fmt::Display for IllegalSignatureTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("illegal signature time")
    }
}

impl std::error::Error for IllegalSignatureTime {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn serial_comparison() {
        assert!(Serial(0) < Serial(1));
        assert!(Serial(0xFFFF_FFFF) < Serial(0));
        assert_eq!(Serial(0).partial_cmp(&Serial(0x8000_0000)), None);
    }

    #[test]
    fn timestamp_from_date() {
        assert_eq!(
            Timestamp::from_str("20040509183619").map(Timestamp::into_int),
            Ok(1_084_127_779)
        );
        assert_eq!(
            Timestamp::from_str("19700101000000").map(Timestamp::into_int),
            Ok(0)
        );
    }

    #[test]
    fn timestamp_from_integer() {
        assert_eq!(
            Timestamp::from_str("1084127779").map(Timestamp::into_int),
            Ok(1_084_127_779)
        );
        assert!(Timestamp::from_str("4294967296").is_err());
    }

    #[test]
    fn illegal_timestamps() {
        assert!(Timestamp::from_str("").is_err());
        assert!(Timestamp::from_str("2004050918361").is_err());
        assert!(Timestamp::from_str("20041309183619").is_err());
        assert!(Timestamp::from_str("20040231183619").is_err());
        assert!(Timestamp::from_str("20040509246019").is_err());
        assert!(Timestamp::from_str("2004-05-09T18:36").is_err());
        assert!(Timestamp::from_str("+1").is_err());
    }

    #[test]
    fn timestamp_display() {
        assert_eq!(
            format!("{}", Timestamp::from(1_084_127_779)),
            "20040509183619"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn timestamp_serde_json() {
        let ts = Timestamp::from_str("20240201000000").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"20240201000000\"");
        assert_eq!(serde_json::from_str::<Timestamp>(&json).unwrap(), ts);
        assert_eq!(
            serde_json::from_str::<Timestamp>("1706745600").unwrap(),
            ts
        );
        assert!(serde_json::from_str::<Timestamp>("\"2024\"").is_ok());
        assert!(serde_json::from_str::<Timestamp>("\"20241301000000\"")
            .is_err());
    }
}
