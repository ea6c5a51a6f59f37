//! Calendar date utilities.

use std::{cmp::Ordering, marker::PhantomData};

use derive_more::{Debug, Display, Error};
use time::{format_description::BorrowedFormatItem, macros::format_description};

/// [ISO 8601] calendar date format (`YYYY-MM-DD`).
///
/// [ISO 8601]: https://www.iso.org/iso-8601-date-and-time-format.html
const ISO8601_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Untyped calendar date.
pub type Date = DateOf;

/// Calendar date, without a time-of-day or an offset.
#[derive(Debug)]
pub struct DateOf<Of: ?Sized = ()> {
    /// Inner representation of the date.
    inner: time::Date,

    /// Type parameter describing the kind of date.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateOf<Of> {
    /// Creates a new [`Date`] from the provided [ISO 8601] `YYYY-MM-DD`
    /// string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid [ISO 8601] calendar
    /// date.
    ///
    /// [ISO 8601]: https://www.iso.org/iso-8601-date-and-time-format.html
    pub fn from_iso8601(input: &str) -> Result<Self, ParseError> {
        time::Date::parse(input, ISO8601_DATE)
            .map(|inner| Self {
                inner,
                _of: PhantomData,
            })
            .map_err(ParseError::Parse)
    }

    /// Returns the [`Date`] as an [ISO 8601] `YYYY-MM-DD` string.
    ///
    /// [ISO 8601]: https://www.iso.org/iso-8601-date-and-time-format.html
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn to_iso8601(&self) -> String {
        self.inner.format(ISO8601_DATE).unwrap_or_else(|e| {
            panic!("cannot format `Date` as ISO 8601: {e}")
        })
    }

    /// Returns the number of whole days from this [`Date`] until the `other`
    /// one.
    ///
    /// Negative if the `other` [`Date`] is earlier than this one.
    #[must_use]
    pub fn whole_days_until(&self, other: &Self) -> i64 {
        (other.inner - self.inner).whole_days()
    }

    /// Returns the [`Date`] following this one.
    ///
    /// [`None`] is returned if the next date is out of range.
    #[must_use]
    pub fn next_day(self) -> Option<Self> {
        Some(Self {
            inner: self.inner.next_day()?,
            _of: PhantomData,
        })
    }

    /// Coerces one kind of [`Date`] into another.
    #[must_use]
    pub fn coerce<NewOf: ?Sized>(self) -> DateOf<NewOf> {
        DateOf {
            inner: self.inner,
            _of: PhantomData,
        }
    }
}

/// Error of parsing [`Date`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ParseError {
    /// Failed to parse the string into a [`Date`].
    Parse(time::error::Parse),
}

impl<Of: ?Sized> Copy for DateOf<Of> {}
impl<Of: ?Sized> Clone for DateOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateOf<Of> {}
impl<Of: ?Sized> PartialEq for DateOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> Ord for DateOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> From<time::Date> for DateOf<Of> {
    fn from(inner: time::Date) -> Self {
        Self {
            inner,
            _of: PhantomData,
        }
    }
}

impl<Of: ?Sized> From<DateOf<Of>> for time::Date {
    fn from(date: DateOf<Of>) -> Self {
        date.inner
    }
}

#[cfg(feature = "serde")]
pub mod serde {
    //! Module providing integration with [`serde`] crate.

    pub mod iso8601 {
        //! Module providing serialization and deserialization of [`DateOf`]
        //! as an ISO 8601 `YYYY-MM-DD` string.

        use serde::{de::Error, Deserialize, Deserializer, Serializer};

        use super::super::DateOf;

        /// Serializes the [`DateOf`] as an ISO 8601 string.
        ///
        /// # Errors
        ///
        /// Returns an error if the date cannot be serialized.
        pub fn serialize<Of, S>(
            date: &DateOf<Of>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
            Of: ?Sized,
        {
            serializer.serialize_str(&date.to_iso8601())
        }

        /// Deserializes the ISO 8601 string into a [`DateOf`].
        ///
        /// # Errors
        ///
        /// Returns an error if the string is not a valid ISO 8601 date.
        pub fn deserialize<'de, D, Of>(
            deserializer: D,
        ) -> Result<DateOf<Of>, D::Error>
        where
            D: Deserializer<'de>,
            Of: ?Sized,
        {
            DateOf::from_iso8601(&String::deserialize(deserializer)?)
                .map_err(Error::custom)
        }
    }
}

#[cfg(test)]
mod spec {
    use super::Date;

    #[test]
    fn parses_iso8601() {
        let date = Date::from_iso8601("2025-01-15").unwrap();
        assert_eq!(date.to_iso8601(), "2025-01-15");

        assert!(Date::from_iso8601("2025-1-15").is_err());
        assert!(Date::from_iso8601("2025-13-01").is_err());
        assert!(Date::from_iso8601("not-a-date").is_err());
    }

    #[test]
    fn counts_whole_days() {
        let from = Date::from_iso8601("2025-01-15").unwrap();
        let to = Date::from_iso8601("2025-01-18").unwrap();

        assert_eq!(from.whole_days_until(&to), 3);
        assert_eq!(to.whole_days_until(&from), -3);
        assert_eq!(from.whole_days_until(&from), 0);
    }
}
