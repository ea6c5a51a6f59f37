//! [`Command`] for creating a new [`Booking`].

use common::{
    operations::{By, Commit, Insert, Lock, Select, Transact, Transacted},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        booking::{self, payment, Guests, Notes, Status, Stay},
        room, user, Booking, Quote, RoomType,
    },
    infra::{database, Database},
    read::booking::Occupying,
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Booking`].
///
/// The created [`Booking`] starts [`Confirmed`] when the payment [`Method`]
/// collects upfront, and [`Pending`] when payment is deferred to the resort.
///
/// [`Confirmed`]: Status::Confirmed
/// [`Method`]: payment::Method
/// [`Pending`]: Status::Pending
#[derive(Clone, Debug)]
pub struct CreateBooking {
    /// ID of the [`RoomType`] to book a unit of.
    pub room_type_id: room::Id,

    /// ID of the guest the [`Booking`] is made by.
    pub guest_id: user::Id,

    /// [`Stay`] to reserve the unit for.
    pub stay: Stay,

    /// Number of guests staying.
    pub guests: Guests,

    /// [`payment::Method`] the [`Booking`] is paid with.
    pub method: payment::Method,

    /// Free-form [`Notes`] to attach to the [`Booking`].
    pub notes: Option<Notes>,
}

impl<Db> Command<CreateBooking> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>
        + Database<
            Select<By<Option<RoomType>, room::Id>>,
            Ok = Option<RoomType>,
            Err = Traced<database::Error>,
        >,
    Transacted<Db>: Database<
            Select<By<Vec<Occupying<Booking>>, room::Id>>,
            Ok = Vec<Occupying<Booking>>,
            Err = Traced<database::Error>,
        > + Database<Lock<By<RoomType, room::Id>>, Err = Traced<database::Error>>
        + Database<Insert<Booking>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Booking;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateBooking,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateBooking {
            room_type_id,
            guest_id,
            stay,
            guests,
            method,
            notes,
        } = cmd;

        let room = self
            .database()
            .execute(Select(By::<Option<RoomType>, _>::new(room_type_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::RoomNotExists(room_type_id))
            .map_err(tracerr::wrap!())?;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Avoid concurrent bookings of the same `RoomType`.
        tx.execute(Lock(By::new(room.id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        let occupying = tx
            .execute(Select(By::<Vec<Occupying<Booking>>, _>::new(room.id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if !room
            .has_vacancy(occupying.iter().map(|Occupying(b)| &b.stay), &stay)
        {
            return Err(tracerr::new!(E::RoomUnavailable(room.id)));
        }

        let quote =
            Quote::calculate(&room, &stay, guests, &self.config().quote);

        let now = DateTime::now();
        let booking = Booking {
            id: booking::Id::new(),
            resort_id: room.resort_id,
            room_type_id: room.id,
            guest_id,
            stay,
            guests,
            total_price: quote.total,
            status: Status::initial(method),
            payment_status: payment::Status::initial(method),
            notes,
            confirmed_by: None,
            checked_in_by: None,
            checked_out_by: None,
            created_at: now.coerce(),
            updated_at: now.coerce(),
        };
        tx.execute(Insert(booking.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!(
            booking_id = %booking.id,
            room_type_id = %booking.room_type_id,
            status = %booking.status,
            "`Booking` created",
        );

        Ok(booking)
    }
}

/// Error of [`CreateBooking`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`RoomType`] with the provided ID does not exist.
    #[display("`RoomType(id: {_0})` does not exist")]
    RoomNotExists(#[error(not(source))] room::Id),

    /// [`RoomType`] has no free unit for the requested [`Stay`].
    #[display("`RoomType(id: {_0})` has no free unit for the requested stay")]
    RoomUnavailable(#[error(not(source))] room::Id),
}
