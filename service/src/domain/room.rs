//! [`RoomType`] definitions.

use common::Money;
use derive_more::{AsRef, Display, From, FromStr, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{booking::Stay, resort};
#[cfg(doc)]
use crate::domain::Booking;

/// Category of bookable accommodation units sharing a [`Rate`], capacity and
/// quantity.
#[derive(Clone, Debug)]
pub struct RoomType {
    /// ID of this [`RoomType`].
    pub id: Id,

    /// ID of the resort this [`RoomType`] belongs to.
    pub resort_id: resort::Id,

    /// [`Name`] of this [`RoomType`].
    pub name: Name,

    /// Number of guests a unit of this [`RoomType`] accommodates without a
    /// surcharge.
    pub capacity: Capacity,

    /// Nightly [`Rate`] of a unit of this [`RoomType`].
    pub rate: Rate,

    /// Number of identical bookable units of this [`RoomType`].
    pub quantity: Quantity,
}

impl RoomType {
    /// Indicates whether a unit of this [`RoomType`] is free for the
    /// provided [`Stay`].
    ///
    /// `occupying` must yield the [`Stay`]s of all the [`Booking`]s of this
    /// [`RoomType`] counting against its inventory (cancelled ones
    /// excluded). A unit is free while fewer than [`RoomType::quantity`] of
    /// them overlap the candidate [`Stay`].
    #[must_use]
    pub fn has_vacancy<'s>(
        &self,
        occupying: impl IntoIterator<Item = &'s Stay>,
        stay: &Stay,
    ) -> bool {
        let overlapping = occupying
            .into_iter()
            .filter(|occupied| occupied.overlaps(stay))
            .count();
        overlapping < usize::from(self.quantity)
    }
}

/// ID of a [`RoomType`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Name of a [`RoomType`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` is not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Nightly rate of a [`RoomType`].
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub struct Rate(Money);

impl Rate {
    /// Creates a new [`Rate`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `rate` is not negative.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(rate: Money) -> Self {
        Self(rate)
    }

    /// Creates a new [`Rate`] if the given `rate` is valid.
    #[must_use]
    pub fn new(rate: Money) -> Option<Self> {
        (rate.amount >= Decimal::ZERO).then_some(Self(rate))
    }

    /// Returns this [`Rate`] as a [`Money`] amount per night.
    #[must_use]
    pub fn money(&self) -> Money {
        self.0
    }
}

impl FromStr for Rate {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid `Rate`")
    }
}

/// Number of guests a [`RoomType`] unit accommodates without a surcharge.
pub type Capacity = u16;

/// Number of identical bookable units of a [`RoomType`].
pub type Quantity = u16;

#[cfg(test)]
mod spec {
    use common::Date;

    use crate::domain::{booking::Stay, resort};

    use super::{Id, Name, RoomType};

    fn stay(check_in: &str, check_out: &str) -> Stay {
        Stay::new(
            Date::from_iso8601(check_in).unwrap(),
            Date::from_iso8601(check_out).unwrap(),
        )
        .unwrap()
    }

    fn room(quantity: u16) -> RoomType {
        RoomType {
            id: Id::new(),
            resort_id: resort::Id::new(),
            name: Name::new("Deluxe Villa").unwrap(),
            capacity: 2,
            rate: "4500PHP".parse().unwrap(),
            quantity,
        }
    }

    #[test]
    fn vacant_until_quantity_overlaps() {
        let room = room(2);
        let candidate = stay("2025-01-10", "2025-01-13");

        let one = [stay("2025-01-09", "2025-01-11")];
        assert!(room.has_vacancy(&one, &candidate));

        let two = [
            stay("2025-01-09", "2025-01-11"),
            stay("2025-01-12", "2025-01-14"),
        ];
        assert!(!room.has_vacancy(&two, &candidate));
    }

    #[test]
    fn non_overlapping_stays_do_not_count() {
        let room = room(1);
        let candidate = stay("2025-01-10", "2025-01-13");

        let elsewhere = [
            stay("2025-01-01", "2025-01-10"),
            stay("2025-01-13", "2025-01-20"),
        ];
        assert!(room.has_vacancy(&elsewhere, &candidate));
    }

    #[test]
    fn zero_quantity_is_never_vacant() {
        let room = room(0);
        let candidate = stay("2025-01-10", "2025-01-13");

        assert!(!room.has_vacancy([], &candidate));
    }
}
