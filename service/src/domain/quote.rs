//! [`Quote`] definitions.

use common::{Money, Percent};
use rust_decimal::Decimal;
use smart_default::SmartDefault;

use crate::domain::{
    booking::{Guests, Stay},
    RoomType,
};
#[cfg(doc)]
use crate::domain::Booking;

/// Itemized price breakdown of a prospective [`Booking`].
///
/// All the amounts are in the currency of the quoted [`RoomType`]'s rate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Quote {
    /// Number of nights being priced.
    pub nights: u32,

    /// Nightly rate multiplied by the number of nights.
    pub base: Money,

    /// Surcharge for guests above the [`RoomType`] capacity.
    pub extra_guest_fee: Money,

    /// Service fee on top of the base price.
    pub service_fee: Money,

    /// Total of the above.
    pub total: Money,
}

impl Quote {
    /// Calculates a [`Quote`] for a [`Stay`] of `guests` in a unit of the
    /// provided [`RoomType`].
    ///
    /// The service fee is a percentage of the base price rounded to the
    /// nearest whole currency unit, halves away from zero. The extra-guest
    /// surcharge applies per night to every guest above the [`RoomType`]
    /// capacity.
    #[must_use]
    pub fn calculate(
        room: &RoomType,
        stay: &Stay,
        guests: Guests,
        config: &Config,
    ) -> Self {
        let nights = stay.nights();
        let per_night = room.rate.money();
        let nights_dec = Decimal::from(nights);

        let base = Money {
            amount: per_night.amount * nights_dec,
            currency: per_night.currency,
        };
        let extra_guests = Decimal::from(guests.saturating_sub(room.capacity));
        let extra_guest_fee = Money {
            amount: extra_guests * config.extra_guest_rate * nights_dec,
            currency: per_night.currency,
        };
        let service_fee = Money {
            amount: config.service_fee.of(base.amount),
            currency: per_night.currency,
        }
        .rounded();
        let total = Money {
            amount: base.amount + extra_guest_fee.amount + service_fee.amount,
            currency: per_night.currency,
        };

        Self {
            nights,
            base,
            extra_guest_fee,
            service_fee,
            total,
        }
    }
}

/// Pricing configuration for [`Quote`] calculation.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Service fee percentage applied to the base lodging price.
    #[default(Percent::new(Decimal::TEN).expect("valid percent"))]
    pub service_fee: Percent,

    /// Nightly surcharge per guest above the [`RoomType`] capacity, in the
    /// currency of the booked room's rate.
    #[default(Decimal::from(500_u16))]
    pub extra_guest_rate: Decimal,
}
