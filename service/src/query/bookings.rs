//! [`Query`] collection related to the multiple [`Booking`]s.

use common::operations::By;

use crate::{domain::Booking, read};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a list of [`Booking`]s matching a [`Filter`], ordered by
/// creation.
///
/// [`Filter`]: read::booking::list::Filter
pub type List =
    DatabaseQuery<By<Vec<Booking>, read::booking::list::Filter>>;
