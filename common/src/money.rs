//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rust_decimal::{prelude::ToPrimitive as _, Decimal, RoundingStrategy};

use crate::define_kind;

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Rounds this [`Money`] to the nearest whole currency unit, with halves
    /// rounding away from zero.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            amount: self
                .amount
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
            currency: self.currency,
        }
    }

    /// Adds the `other` [`Money`] to this one.
    ///
    /// [`None`] is returned if the [`Currency`]s differ.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        (self.currency == other.currency).then(|| Self {
            amount: self.amount + other.amount,
            currency: self.currency,
        })
    }

    /// Sums the provided [`Money`] amounts.
    ///
    /// [`None`] is returned if there is nothing to sum.
    ///
    /// # Errors
    ///
    /// If the amounts are not all in the same [`Currency`].
    pub fn sum(
        iter: impl IntoIterator<Item = Self>,
    ) -> Result<Option<Self>, CurrencyMismatchError> {
        iter.into_iter().try_fold(None, |acc: Option<Self>, m| {
            let Some(acc) = acc else {
                return Ok(Some(m));
            };
            acc.checked_add(m)
                .map(Some)
                .ok_or(CurrencyMismatchError {
                    expected: acc.currency,
                    actual: m.currency,
                })
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        if amount.is_integer() {
            write!(f, "{}{currency}", amount.to_i128().expect("integer"))
        } else {
            write!(f, "{amount}{currency}")
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 4 {
            return Err("too short");
        }

        let (amount, currency) = s.split_at(s.len() - 3);
        let amount = Decimal::from_str(amount).map_err(|_| "invalid amount")?;
        let currency =
            Currency::from_str(currency).map_err(|_| "invalid currency")?;

        Ok(Self { amount, currency })
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "Philippine Peso."]
        Php = 1,

        #[doc = "US Dollar."]
        Usd = 2,

        #[doc = "Euro."]
        Eur = 3,
    }
}

/// Error of summing [`Money`] amounts in different [`Currency`]s.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("cannot sum `{actual}` amount into a `{expected}` total")]
pub struct CurrencyMismatchError {
    /// [`Currency`] of the running total.
    pub expected: Currency,

    /// [`Currency`] of the mismatched amount.
    pub actual: Currency,
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::{Currency, Money};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn php(s: &str) -> Money {
        Money {
            amount: decimal(s),
            currency: Currency::Php,
        }
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Money::from_str("123.45PHP").unwrap(),
            Money {
                amount: decimal("123.45"),
                currency: Currency::Php,
            },
        );

        assert_eq!(
            Money::from_str("123.45USD").unwrap(),
            Money {
                amount: decimal("123.45"),
                currency: Currency::Usd,
            },
        );

        assert_eq!(
            Money::from_str("123.45EUR").unwrap(),
            Money {
                amount: decimal("123.45"),
                currency: Currency::Eur,
            },
        );

        assert!(Money::from_str("123.45").is_err());
        assert!(Money::from_str("123.45Ph").is_err());
        assert!(Money::from_str("123.45Pesos").is_err());

        assert!(Money::from_str("123.00PHP").is_ok());
        assert!(Money::from_str("123.0PHP").is_ok());
        assert!(Money::from_str("123PHP").is_ok());
    }

    #[test]
    fn to_string() {
        assert_eq!(php("123.45").to_string(), "123.45PHP");
        assert_eq!(
            Money {
                amount: decimal("123.45"),
                currency: Currency::Usd,
            }
            .to_string(),
            "123.45USD",
        );

        assert_eq!(php("123.00").to_string(), "123PHP");
        assert_eq!(php("123.0").to_string(), "123PHP");
        assert_eq!(php("123").to_string(), "123PHP");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(php("330.4").rounded(), php("330"));
        assert_eq!(php("330.5").rounded(), php("331"));
        assert_eq!(php("330.6").rounded(), php("331"));
        assert_eq!(php("-330.5").rounded(), php("-331"));
        assert_eq!(php("330").rounded(), php("330"));
    }

    #[test]
    fn sums_same_currency_only() {
        assert_eq!(Money::sum([]).unwrap(), None);
        assert_eq!(
            Money::sum([php("100"), php("23.45")]).unwrap(),
            Some(php("123.45")),
        );

        let mixed = Money::sum([
            php("100"),
            Money {
                amount: decimal("1"),
                currency: Currency::Usd,
            },
        ]);
        assert!(mixed.is_err());
    }

    #[test]
    fn checked_add() {
        assert_eq!(
            php("100").checked_add(php("50")),
            Some(php("150")),
        );
        assert_eq!(
            php("100").checked_add(Money {
                amount: decimal("50"),
                currency: Currency::Eur,
            }),
            None,
        );
    }
}
