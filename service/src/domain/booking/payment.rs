//! Payment-related definitions of a [`Booking`].

use common::define_kind;

#[cfg(doc)]
use super::Booking;

define_kind! {
    #[doc = "Method a [`Booking`] is paid with."]
    enum Method {
        #[doc = "GCash mobile wallet."]
        Gcash = 1,

        #[doc = "Maya mobile wallet."]
        Paymaya = 2,

        #[doc = "Direct bank transfer."]
        BankTransfer = 3,

        #[doc = "Cash on arrival at the resort."]
        PayAtResort = 4,
    }
}

impl Method {
    /// Indicates whether payment is collected at the resort rather than
    /// upfront.
    #[must_use]
    pub const fn is_deferred(self) -> bool {
        matches!(self, Self::PayAtResort)
    }
}

define_kind! {
    #[doc = "Payment status of a [`Booking`]."]
    enum Status {
        #[doc = "Nothing has been paid yet."]
        Pending = 1,

        #[doc = "A downpayment has been made."]
        Partial = 2,

        #[doc = "Paid in full."]
        Paid = 3,

        #[doc = "Refunded after a cancellation."]
        Refunded = 4,
    }
}

impl Status {
    /// Returns the initial payment [`Status`] of a [`Booking`] paid with the
    /// provided [`Method`].
    #[must_use]
    pub const fn initial(method: Method) -> Self {
        if method.is_deferred() {
            Self::Pending
        } else {
            Self::Paid
        }
    }
}
