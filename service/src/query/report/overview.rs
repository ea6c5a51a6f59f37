//! [`Overview`] definition.

use common::{
    money,
    operations::{By, Select},
    Date, Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{booking::Status, Booking},
    infra::{database, Database},
    read,
    Query, Service,
};

/// [`Query`] summarizing the stored [`Booking`]s for a back-office
/// dashboard.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Overview {
    /// Current [`Date`], for counting the expected check-ins.
    pub today: Date,
}

/// Output of the [`Overview`] [`Query`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Output {
    /// Total count of [`Booking`]s ever made, cancelled ones included.
    pub total_bookings: usize,

    /// Summed total price of the [`CheckedIn`] and [`Completed`]
    /// [`Booking`]s.
    ///
    /// [`None`] if there are none.
    ///
    /// [`CheckedIn`]: Status::CheckedIn
    /// [`Completed`]: Status::Completed
    pub revenue: Option<Money>,

    /// Count of [`Booking`]s awaiting confirmation.
    pub pending_bookings: usize,

    /// Count of [`Confirmed`] [`Booking`]s checking in today.
    ///
    /// [`Confirmed`]: Status::Confirmed
    pub today_check_ins: usize,
}

impl<Db> Query<Overview> for Service<Db>
where
    Db: Database<
        Select<By<Vec<Booking>, read::booking::list::Filter>>,
        Ok = Vec<Booking>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        Overview { today }: Overview,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let bookings = self
            .database()
            .execute(Select(By::<Vec<Booking>, _>::new(
                read::booking::list::Filter::default(),
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let revenue = Money::sum(
            bookings
                .iter()
                .filter(|b| {
                    matches!(b.status, Status::CheckedIn | Status::Completed)
                })
                .map(|b| b.total_price),
        )
        .map_err(tracerr::from_and_wrap!(=> E))?;

        Ok(Output {
            total_bookings: bookings.len(),
            revenue,
            pending_bookings: bookings
                .iter()
                .filter(|b| b.status == Status::Pending)
                .count(),
            today_check_ins: bookings
                .iter()
                .filter(|b| {
                    b.status == Status::Confirmed
                        && b.stay.check_in() == today
                })
                .count(),
        })
    }
}

/// Error of [`Overview`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Revenue cannot be summed over mixed currencies.
    #[display("cannot sum up the revenue: {_0}")]
    #[from]
    Revenue(money::CurrencyMismatchError),
}

#[cfg(all(test, feature = "stash"))]
mod spec {
    use common::{operations::Insert, Date, DateTimeOf};

    use crate::{
        domain::{
            booking::{self, payment, Status, Stay},
            resort, room, user, Booking,
        },
        infra::{database::Stash, Database as _},
        Config, Query as _, Service,
    };

    use super::Overview;

    fn booking(
        status: Status,
        check_in: &str,
        check_out: &str,
        price: &str,
    ) -> Booking {
        Booking {
            id: booking::Id::new(),
            resort_id: resort::Id::new(),
            room_type_id: room::Id::new(),
            guest_id: user::Id::new(),
            stay: Stay::new(
                Date::from_iso8601(check_in).unwrap(),
                Date::from_iso8601(check_out).unwrap(),
            )
            .unwrap(),
            guests: 2,
            total_price: price.parse().unwrap(),
            status,
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
    async fn summarizes_bookings() {
        let stash = Stash::new();
        for b in [
            booking(Status::Pending, "2025-01-20", "2025-01-22", "2200PHP"),
            booking(Status::Confirmed, "2025-01-15", "2025-01-18", "3300PHP"),
            booking(Status::Confirmed, "2025-01-16", "2025-01-18", "2200PHP"),
            booking(Status::CheckedIn, "2025-01-14", "2025-01-16", "2200PHP"),
            booking(Status::Completed, "2025-01-01", "2025-01-04", "3300PHP"),
            booking(Status::Cancelled, "2025-01-15", "2025-01-18", "3300PHP"),
        ] {
            stash.execute(Insert(b)).await.unwrap();
        }
        let service = Service::new(Config::default(), stash);

        let output = service
            .execute(Overview {
                today: Date::from_iso8601("2025-01-15").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(output.total_bookings, 6);
        // Checked-in 2200 + completed 3300.
        assert_eq!(output.revenue, Some("5500PHP".parse().unwrap()));
        assert_eq!(output.pending_bookings, 1);
        assert_eq!(output.today_check_ins, 1);
    }

    #[tokio::test]
    async fn empty_storage_has_no_revenue() {
        let service = Service::new(Config::default(), Stash::new());

        let output = service
            .execute(Overview {
                today: Date::from_iso8601("2025-01-15").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(output.total_bookings, 0);
        assert_eq!(output.revenue, None);
        assert_eq!(output.pending_bookings, 0);
        assert_eq!(output.today_check_ins, 0);
    }
}
