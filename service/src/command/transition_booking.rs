//! [`Command`] for transitioning a [`Booking`] between [`Status`]es.

use common::operations::{
    By, Commit, Lock, Select, Transact, Transacted, Update,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{booking, user, Booking},
    infra::{database, Database},
    Service,
};
#[cfg(doc)]
use crate::domain::booking::Status;

use super::Command;

/// [`Command`] for transitioning a [`Booking`] into another [`Status`],
/// driven by a staff action.
///
/// Only transitions allowed by the [`Status`] state machine are applied;
/// anything else fails and leaves the [`Booking`] as it was.
#[derive(Clone, Debug)]
pub struct TransitionBooking {
    /// ID of the [`Booking`] to transition.
    pub booking_id: booking::Id,

    /// [`Status`] to transition the [`Booking`] into.
    pub to: booking::Status,

    /// Name of the staff member performing the action, recorded into the
    /// audit field matching the target [`Status`].
    pub actor: user::Name,

    /// [`DateTime`] of the action.
    ///
    /// [`DateTime`]: common::DateTime
    pub at: booking::UpdateDateTime,
}

impl<Db> Command<TransitionBooking> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>
        + Database<
            Select<By<Option<Booking>, booking::Id>>,
            Ok = Option<Booking>,
            Err = Traced<database::Error>,
        >,
    Transacted<Db>: Database<
            Lock<By<Booking, booking::Id>>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Booking>, booking::Id>>,
            Ok = Option<Booking>,
            Err = Traced<database::Error>,
        > + Database<Update<Booking>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Booking;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: TransitionBooking,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let TransitionBooking {
            booking_id,
            to,
            actor,
            at,
        } = cmd;

        self.database()
            .execute(Select(By::<Option<Booking>, _>::new(booking_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::BookingNotExists(booking_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Avoid concurrent actions upon the same `Booking`.
        tx.execute(Lock(By::new(booking_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        let mut booking = tx
            .execute(Select(By::<Option<Booking>, _>::new(booking_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::BookingNotExists(booking_id))
            .map_err(tracerr::wrap!())?;

        let from = booking.status;
        booking
            .advance(to, actor, at)
            .map_err(tracerr::from_and_wrap!(=> E))?;

        tx.execute(Update(booking.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!(
            booking_id = %booking.id,
            %from,
            to = %booking.status,
            "`Booking` transitioned",
        );

        Ok(booking)
    }
}

/// Error of [`TransitionBooking`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Booking`] with the provided ID does not exist.
    #[display("`Booking(id: {_0})` does not exist")]
    BookingNotExists(#[error(not(source))] booking::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Requested transition is not allowed by the [`Status`] state machine.
    #[display("{_0}")]
    #[from]
    InvalidTransition(booking::TransitionError),
}
