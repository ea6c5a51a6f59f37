//! Domain definitions.

pub mod booking;
pub mod quote;
pub mod resort;
pub mod room;
pub mod user;

pub use self::{booking::Booking, quote::Quote, room::RoomType};
