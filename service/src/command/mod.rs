//! [`Command`] definition.

pub mod create_booking;
pub mod transition_booking;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    create_booking::CreateBooking, transition_booking::TransitionBooking,
};
