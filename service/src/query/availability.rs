//! [`RoomVacancy`] definition.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{booking::Stay, room, Booking, RoomType},
    infra::{database, Database},
    read::booking::Occupying,
    Query, Service,
};

/// [`Query`] checking whether a unit of a [`RoomType`] is free for a
/// [`Stay`].
///
/// Pure read: nothing is reserved by running it.
#[derive(Clone, Copy, Debug)]
pub struct RoomVacancy {
    /// ID of the [`RoomType`] to check.
    pub room_type_id: room::Id,

    /// [`Stay`] to check the vacancy for.
    pub stay: Stay,
}

impl<Db> Query<RoomVacancy> for Service<Db>
where
    Db: Database<
            Select<By<Option<RoomType>, room::Id>>,
            Ok = Option<RoomType>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Occupying<Booking>>, room::Id>>,
            Ok = Vec<Occupying<Booking>>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = bool;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        RoomVacancy { room_type_id, stay }: RoomVacancy,
    ) -> Result<Self::Ok, Self::Err> {
        // Unknown rooms are never vacant.
        let Some(room) = self
            .database()
            .execute(Select(By::<Option<RoomType>, _>::new(room_type_id)))
            .await
            .map_err(tracerr::wrap!())?
        else {
            return Ok(false);
        };

        let occupying = self
            .database()
            .execute(Select(By::<Vec<Occupying<Booking>>, _>::new(
                room_type_id,
            )))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(room
            .has_vacancy(occupying.iter().map(|Occupying(b)| &b.stay), &stay))
    }
}
