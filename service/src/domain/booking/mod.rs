//! [`Booking`] definitions.

pub mod payment;
pub mod status;
pub mod stay;

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf, Money};
use derive_more::{Display, Error, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{resort, room, user};
#[cfg(doc)]
use crate::domain::RoomType;

pub use self::{status::Status, stay::Stay};

/// Reservation of one unit of a [`RoomType`] for a [`Stay`].
///
/// Bookings reference their [`RoomType`] and guest by ID only, and are never
/// deleted: cancellation is a [`Status`], not a removal.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Booking {
    /// ID of this [`Booking`].
    pub id: Id,

    /// ID of the resort this [`Booking`] is made at.
    pub resort_id: resort::Id,

    /// ID of the booked [`RoomType`].
    pub room_type_id: room::Id,

    /// ID of the guest this [`Booking`] is made by.
    pub guest_id: user::Id,

    /// [`Stay`] this [`Booking`] reserves a unit for.
    pub stay: Stay,

    /// Number of guests staying.
    pub guests: Guests,

    /// Total price of this [`Booking`], as quoted at creation.
    pub total_price: Money,

    /// [`Status`] of this [`Booking`].
    pub status: Status,

    /// Payment status of this [`Booking`].
    pub payment_status: payment::Status,

    /// Free-form [`Notes`] attached to this [`Booking`], if any.
    pub notes: Option<Notes>,

    /// Name of the staff member who confirmed this [`Booking`], if anyone.
    pub confirmed_by: Option<user::Name>,

    /// Name of the staff member who checked the guest in, if anyone.
    pub checked_in_by: Option<user::Name>,

    /// Name of the staff member who checked the guest out, if anyone.
    pub checked_out_by: Option<user::Name>,

    /// [`DateTime`] when this [`Booking`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Booking`] was last updated.
    pub updated_at: UpdateDateTime,
}

impl Booking {
    /// Indicates whether this [`Booking`] occupies a unit of its
    /// [`RoomType`].
    ///
    /// Cancelled [`Booking`]s release their unit and never count against
    /// inventory.
    #[must_use]
    pub fn occupies(&self) -> bool {
        !matches!(self.status, Status::Cancelled)
    }

    /// Advances this [`Booking`] into the `to` [`Status`].
    ///
    /// Records the acting staff member into the audit field matching the
    /// target [`Status`] and refreshes [`Booking::updated_at`].
    ///
    /// # Errors
    ///
    /// If the [`Status`] state machine doesn't allow the transition. This
    /// [`Booking`] is left untouched in that case.
    pub fn advance(
        &mut self,
        to: Status,
        actor: user::Name,
        at: UpdateDateTime,
    ) -> Result<(), TransitionError> {
        if !self.status.allows(to) {
            return Err(TransitionError {
                from: self.status,
                to,
            });
        }

        match to {
            Status::Confirmed => self.confirmed_by = Some(actor),
            Status::CheckedIn => self.checked_in_by = Some(actor),
            Status::Completed => self.checked_out_by = Some(actor),
            Status::Pending | Status::Cancelled => {}
        }
        self.status = to;
        self.updated_at = at;

        Ok(())
    }
}

/// ID of a [`Booking`].
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

/// Number of guests staying under a [`Booking`].
pub type Guests = u16;

/// Free-form notes attached to a [`Booking`].
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub struct Notes(String);

impl Notes {
    /// Creates a new [`Notes`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `notes` are not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(notes: impl Into<String>) -> Self {
        Self(notes.into())
    }

    /// Creates a new [`Notes`] if the given `notes` are valid.
    #[must_use]
    pub fn new(notes: impl Into<String>) -> Option<Self> {
        let notes = notes.into();
        Self::check(&notes).then_some(Self(notes))
    }

    /// Checks whether the given `notes` are valid [`Notes`].
    fn check(notes: impl AsRef<str>) -> bool {
        let notes = notes.as_ref();
        notes.trim() == notes && !notes.is_empty() && notes.len() <= 512
    }
}

impl FromStr for Notes {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Notes`")
    }
}

/// Error of advancing a [`Booking`] into an illegal [`Status`].
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("cannot transition a `{from}` booking into `{to}`")]
pub struct TransitionError {
    /// [`Status`] the [`Booking`] is in.
    pub from: Status,

    /// [`Status`] the transition was attempted into.
    pub to: Status,
}

/// [`DateTime`] when a [`Booking`] was created.
pub type CreationDateTime = DateTimeOf<(Booking, unit::Creation)>;

/// [`DateTime`] when a [`Booking`] was last updated.
pub type UpdateDateTime = DateTimeOf<(Booking, unit::Update)>;

#[cfg(test)]
mod spec {
    use common::Date;

    use crate::domain::{resort, room, user};

    use super::{
        payment, Booking, CreationDateTime, Id, Status, Stay, UpdateDateTime,
    };

    fn actor(name: &str) -> user::Name {
        user::Name::new(name).unwrap()
    }

    fn at(timestamp: i64) -> UpdateDateTime {
        UpdateDateTime::from_unix_timestamp(timestamp).unwrap()
    }

    fn booking(status: Status) -> Booking {
        let stay = Stay::new(
            Date::from_iso8601("2025-01-15").unwrap(),
            Date::from_iso8601("2025-01-18").unwrap(),
        )
        .unwrap();

        Booking {
            id: Id::new(),
            resort_id: resort::Id::new(),
            room_type_id: room::Id::new(),
            guest_id: user::Id::new(),
            stay,
            guests: 2,
            total_price: "14850PHP".parse().unwrap(),
            status,
            payment_status: payment::Status::Pending,
            notes: None,
            confirmed_by: None,
            checked_in_by: None,
            checked_out_by: None,
            created_at: CreationDateTime::UNIX_EPOCH,
            updated_at: UpdateDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn advance_confirms_and_records_actor() {
        let mut b = booking(Status::Pending);

        b.advance(Status::Confirmed, actor("Ana Cruz"), at(100)).unwrap();

        assert_eq!(b.status, Status::Confirmed);
        assert_eq!(b.confirmed_by, Some(actor("Ana Cruz")));
        assert_eq!(b.checked_in_by, None);
        assert_eq!(b.updated_at, at(100));
    }

    #[test]
    fn advance_walks_the_whole_chain() {
        let mut b = booking(Status::Pending);

        b.advance(Status::Confirmed, actor("Ana"), at(1)).unwrap();
        b.advance(Status::CheckedIn, actor("Ben"), at(2)).unwrap();
        b.advance(Status::Completed, actor("Cara"), at(3)).unwrap();

        assert_eq!(b.status, Status::Completed);
        assert_eq!(b.confirmed_by, Some(actor("Ana")));
        assert_eq!(b.checked_in_by, Some(actor("Ben")));
        assert_eq!(b.checked_out_by, Some(actor("Cara")));
        assert_eq!(b.updated_at, at(3));
    }

    #[test]
    fn advance_rejects_skipping_ahead() {
        let mut b = booking(Status::Pending);
        let before = b.clone();

        let e = b
            .advance(Status::CheckedIn, actor("Ana"), at(100))
            .unwrap_err();

        assert_eq!(e.from, Status::Pending);
        assert_eq!(e.to, Status::CheckedIn);
        assert_eq!(b, before, "failed transition must not mutate");
    }

    #[test]
    fn advance_rejects_leaving_cancelled() {
        for to in [
            Status::Pending,
            Status::Confirmed,
            Status::CheckedIn,
            Status::Completed,
            Status::Cancelled,
        ] {
            let mut b = booking(Status::Cancelled);
            let before = b.clone();

            assert!(b.advance(to, actor("Ana"), at(100)).is_err());
            assert_eq!(b, before);
        }
    }

    #[test]
    fn advance_rejects_repeating_current_status() {
        let mut b = booking(Status::Confirmed);
        let before = b.clone();

        assert!(b.advance(Status::Confirmed, actor("Ana"), at(100)).is_err());
        assert_eq!(b, before);
    }

    #[test]
    fn cancelled_bookings_do_not_occupy() {
        assert!(booking(Status::Pending).occupies());
        assert!(booking(Status::Confirmed).occupies());
        assert!(booking(Status::CheckedIn).occupies());
        assert!(booking(Status::Completed).occupies());
        assert!(!booking(Status::Cancelled).occupies());
    }
}
