//! [`Database`] implementations.

use common::operations::{By, Commit, Insert, Lock, Select, Transact, Update};
use tracerr::Traced;

use crate::{
    domain::{booking, room, Booking, RoomType},
    infra::{database, Database},
    read::{self, booking::Occupying},
};

use super::{Client, Plain, Stash, Tx};

impl<C: Client> Database<Select<By<Option<RoomType>, room::Id>>>
    for Stash<C>
{
    type Ok = Option<RoomType>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<RoomType>, room::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.0.read(|s| s.room(id)).await)
    }
}

impl<C: Client> Database<Select<By<Option<Booking>, booking::Id>>>
    for Stash<C>
{
    type Ok = Option<Booking>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Booking>, booking::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.0.read(|s| s.booking(id)).await)
    }
}

impl<C: Client>
    Database<Select<By<Vec<Booking>, read::booking::list::Filter>>>
    for Stash<C>
{
    type Ok = Vec<Booking>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Booking>, read::booking::list::Filter>>,
    ) -> Result<Self::Ok, Self::Err> {
        let filter = by.into_inner();
        Ok(self.0.read(|s| s.bookings(&filter)).await)
    }
}

impl<C: Client> Database<Select<By<Vec<Occupying<Booking>>, room::Id>>>
    for Stash<C>
{
    type Ok = Vec<Occupying<Booking>>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Occupying<Booking>>, room::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.0.read(|s| s.occupying_bookings(id)).await)
    }
}

impl<C: Client> Database<Insert<RoomType>> for Stash<C> {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(room): Insert<RoomType>,
    ) -> Result<Self::Ok, Self::Err> {
        self.0
            .write(|s| s.insert_room(room))
            .await
            .map_err(tracerr::from_and_wrap!(=> database::Error))
    }
}

impl<C: Client> Database<Insert<Booking>> for Stash<C> {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(booking): Insert<Booking>,
    ) -> Result<Self::Ok, Self::Err> {
        self.0
            .write(|s| s.insert_booking(booking))
            .await
            .map_err(tracerr::from_and_wrap!(=> database::Error))
    }
}

impl<C: Client> Database<Update<Booking>> for Stash<C> {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(booking): Update<Booking>,
    ) -> Result<Self::Ok, Self::Err> {
        self.0
            .write(|s| s.update_booking(booking))
            .await
            .map_err(tracerr::from_and_wrap!(=> database::Error))
    }
}

impl<C: Client> Database<Lock<By<RoomType, room::Id>>> for Stash<C> {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Lock(by): Lock<By<RoomType, room::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.0
            .read(|s| {
                s.contains_room(id)
                    .then_some(())
                    .ok_or(super::Error::MissingEntity("RoomType"))
            })
            .await
            .map_err(tracerr::from_and_wrap!(=> database::Error))
    }
}

impl<C: Client> Database<Lock<By<Booking, booking::Id>>> for Stash<C> {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Lock(by): Lock<By<Booking, booking::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        self.0
            .read(|s| {
                s.contains_booking(id)
                    .then_some(())
                    .ok_or(super::Error::MissingEntity("Booking"))
            })
            .await
            .map_err(tracerr::from_and_wrap!(=> database::Error))
    }
}

impl Database<Transact> for Stash<Plain> {
    type Ok = Stash<Tx>;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
        Ok(Stash(Tx::open(&self.0).await))
    }
}

impl Database<Transact> for Stash<Tx> {
    type Ok = Self;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
        Ok(self.clone())
    }
}

impl Database<Commit> for Stash<Tx> {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Commit) -> Result<Self::Ok, Self::Err> {
        self.0.commit().await;
        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use common::{
        operations::{By, Commit, Insert, Select, Transact},
        Date, DateTimeOf,
    };

    use crate::{
        domain::{
            booking::{self, payment, Status, Stay},
            resort, room, user, Booking, RoomType,
        },
        infra::Database as _,
    };

    use super::Stash;

    fn room_type() -> RoomType {
        RoomType {
            id: room::Id::new(),
            resort_id: resort::Id::new(),
            name: room::Name::new("Deluxe Villa").unwrap(),
            capacity: 2,
            rate: "4500PHP".parse().unwrap(),
            quantity: 1,
        }
    }

    fn booking_of(room: &RoomType) -> Booking {
        Booking {
            id: booking::Id::new(),
            resort_id: room.resort_id,
            room_type_id: room.id,
            guest_id: user::Id::new(),
            stay: Stay::new(
                Date::from_iso8601("2025-01-15").unwrap(),
                Date::from_iso8601("2025-01-18").unwrap(),
            )
            .unwrap(),
            guests: 2,
            total_price: "14850PHP".parse().unwrap(),
            status: Status::Confirmed,
            payment_status: payment::Status::Paid,
            notes: None,
            confirmed_by: None,
            checked_in_by: None,
            checked_out_by: None,
            created_at: DateTimeOf::UNIX_EPOCH,
            updated_at: DateTimeOf::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn commit_publishes_the_draft() {
        let stash = Stash::new();
        let room = room_type();
        let booking = booking_of(&room);

        stash.execute(Insert(room)).await.unwrap();

        let tx = stash.execute(Transact).await.unwrap();
        tx.execute(Insert(booking.clone())).await.unwrap();
        tx.execute(Commit).await.unwrap();
        drop(tx);

        let stored = stash
            .execute(Select(By::<Option<Booking>, _>::new(booking.id)))
            .await
            .unwrap();
        assert_eq!(stored, Some(booking));
    }

    #[tokio::test]
    async fn dropped_transaction_discards_the_draft() {
        let stash = Stash::new();
        let room = room_type();
        let booking = booking_of(&room);

        stash.execute(Insert(room)).await.unwrap();

        let tx = stash.execute(Transact).await.unwrap();
        tx.execute(Insert(booking.clone())).await.unwrap();
        drop(tx);

        let stored = stash
            .execute(Select(By::<Option<Booking>, _>::new(booking.id)))
            .await
            .unwrap();
        assert_eq!(stored, None);
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let stash = Stash::new();
        let room = room_type();

        stash.execute(Insert(room.clone())).await.unwrap();
        assert!(stash.execute(Insert(room)).await.is_err());
    }
}
