//! [`Query`] collection related to a single [`RoomType`].

use common::operations::By;

use crate::domain::{room, RoomType};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`RoomType`] by its [`room::Id`].
pub type ById = DatabaseQuery<By<Option<RoomType>, room::Id>>;
