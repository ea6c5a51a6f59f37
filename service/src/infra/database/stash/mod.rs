//! In-memory [`Database`] implementation.

mod impls;

use std::{collections::HashMap, future::Future, sync::Arc};

use derive_more::{Deref, Display, Error as StdError};
use tokio::sync::{Mutex, OwnedRwLockWriteGuard, RwLock};
use uuid::Uuid;

use crate::{
    domain::{booking, room, Booking, RoomType},
    read::{self, booking::Occupying},
};
#[cfg(doc)]
use crate::infra::Database;

/// In-memory [`Database`] keeping every entity in a single [`State`] behind
/// a lock.
///
/// The analog of a browser's local storage for demo and test purposes: one
/// writer at a time, everything gone with the process.
#[derive(Clone, Debug, Deref)]
pub struct Stash<T = Plain>(T);

impl Stash {
    /// Creates a new empty [`Stash`].
    #[must_use]
    pub fn new() -> Self {
        Self(Plain {
            state: Arc::new(RwLock::new(State::default())),
        })
    }
}

impl Default for Stash {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain (non-transactional) [`Stash`] client.
#[derive(Clone, Debug)]
pub struct Plain {
    /// Shared [`State`] of the [`Stash`].
    state: Arc<RwLock<State>>,
}

/// Transactional [`Stash`] client.
///
/// Holds the exclusive write guard over the live [`State`] for its whole
/// lifetime and edits a draft copy of it, so a transaction is an atomic
/// read-check-write unit: `Commit` publishes the draft, dropping the client
/// without committing discards every edit.
#[derive(Clone, Debug)]
pub struct Tx {
    /// Inner representation of this client.
    inner: Arc<Mutex<TxInner>>,
}

/// Inner representation of the [`Tx`] client.
#[derive(Debug)]
struct TxInner {
    /// Exclusive guard over the live [`State`].
    live: OwnedRwLockWriteGuard<State>,

    /// Draft [`State`] this transaction edits.
    draft: State,
}

impl Tx {
    /// Opens a new [`Tx`] over the [`State`] of the provided [`Plain`]
    /// client.
    ///
    /// Waits until every other transaction and reader is done.
    async fn open(plain: &Plain) -> Self {
        let live = Arc::clone(&plain.state).write_owned().await;
        let draft = live.clone();
        Self {
            inner: Arc::new(Mutex::new(TxInner { live, draft })),
        }
    }

    /// Publishes the draft [`State`] of this [`Tx`] as the live one.
    async fn commit(&self) {
        let mut inner = self.inner.lock().await;
        let draft = inner.draft.clone();
        *inner.live = draft;
    }
}

/// Access to the [`State`] of a [`Stash`] client.
pub trait Client {
    /// Runs the provided function over the [`State`] of this client.
    fn read<F, R>(&self, f: F) -> impl Future<Output = R>
    where
        F: FnOnce(&State) -> R;

    /// Runs the provided function over the mutable [`State`] of this client.
    fn write<F, R>(&self, f: F) -> impl Future<Output = R>
    where
        F: FnOnce(&mut State) -> R;
}

impl Client for Plain {
    async fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&State) -> R,
    {
        f(&*self.state.read().await)
    }

    async fn write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut State) -> R,
    {
        f(&mut *self.state.write().await)
    }
}

impl Client for Tx {
    async fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&State) -> R,
    {
        f(&self.inner.lock().await.draft)
    }

    async fn write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut State) -> R,
    {
        f(&mut self.inner.lock().await.draft)
    }
}

/// Whole stored [`State`] of a [`Stash`].
#[derive(Clone, Debug, Default)]
pub struct State {
    /// Stored [`RoomType`]s, by their IDs.
    rooms: HashMap<room::Id, RoomType>,

    /// Stored [`Booking`]s, by their IDs.
    bookings: HashMap<booking::Id, Booking>,
}

impl State {
    /// Returns the stored [`RoomType`] with the provided ID.
    #[must_use]
    pub fn room(&self, id: room::Id) -> Option<RoomType> {
        self.rooms.get(&id).cloned()
    }

    /// Indicates whether a [`RoomType`] with the provided ID is stored.
    #[must_use]
    pub fn contains_room(&self, id: room::Id) -> bool {
        self.rooms.contains_key(&id)
    }

    /// Returns the stored [`Booking`] with the provided ID.
    #[must_use]
    pub fn booking(&self, id: booking::Id) -> Option<Booking> {
        self.bookings.get(&id).cloned()
    }

    /// Indicates whether a [`Booking`] with the provided ID is stored.
    #[must_use]
    pub fn contains_booking(&self, id: booking::Id) -> bool {
        self.bookings.contains_key(&id)
    }

    /// Returns the stored [`Booking`]s matching the provided [`Filter`],
    /// ordered by creation.
    ///
    /// [`Filter`]: read::booking::list::Filter
    #[must_use]
    pub fn bookings(
        &self,
        filter: &read::booking::list::Filter,
    ) -> Vec<Booking> {
        let mut bookings = self
            .bookings
            .values()
            .filter(|b| filter.matches(b))
            .cloned()
            .collect::<Vec<_>>();
        bookings.sort_unstable_by_key(|b| (b.created_at, Uuid::from(b.id)));
        bookings
    }

    /// Returns the stored [`Occupying`] [`Booking`]s of the provided
    /// [`RoomType`], ordered by creation.
    #[must_use]
    pub fn occupying_bookings(
        &self,
        room_type_id: room::Id,
    ) -> Vec<Occupying<Booking>> {
        let mut bookings = self
            .bookings
            .values()
            .filter(|b| b.room_type_id == room_type_id && b.occupies())
            .cloned()
            .collect::<Vec<_>>();
        bookings.sort_unstable_by_key(|b| (b.created_at, Uuid::from(b.id)));
        bookings.into_iter().map(Occupying).collect()
    }

    /// Stores the provided [`RoomType`] as a new one.
    ///
    /// # Errors
    ///
    /// If a [`RoomType`] with the same ID is stored already.
    pub fn insert_room(&mut self, room: RoomType) -> Result<(), Error> {
        if self.contains_room(room.id) {
            return Err(Error::DuplicateEntity("RoomType"));
        }
        _ = self.rooms.insert(room.id, room);
        Ok(())
    }

    /// Stores the provided [`Booking`] as a new one.
    ///
    /// # Errors
    ///
    /// If a [`Booking`] with the same ID is stored already.
    pub fn insert_booking(&mut self, booking: Booking) -> Result<(), Error> {
        if self.contains_booking(booking.id) {
            return Err(Error::DuplicateEntity("Booking"));
        }
        _ = self.bookings.insert(booking.id, booking);
        Ok(())
    }

    /// Replaces the stored [`Booking`] with the provided one.
    ///
    /// # Errors
    ///
    /// If no [`Booking`] with the same ID is stored.
    pub fn update_booking(&mut self, booking: Booking) -> Result<(), Error> {
        if !self.contains_booking(booking.id) {
            return Err(Error::MissingEntity("Booking"));
        }
        _ = self.bookings.insert(booking.id, booking);
        Ok(())
    }
}

/// [`Stash`] error.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// Entity with the same ID is stored already.
    #[display("`{_0}` with the same ID is stored already")]
    DuplicateEntity(#[error(not(source))] &'static str),

    /// Entity to operate on is not stored.
    #[display("no stored `{_0}` to operate on")]
    MissingEntity(#[error(not(source))] &'static str),
}
