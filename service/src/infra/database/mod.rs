//! [`Database`]-related implementations.

#[cfg(feature = "stash")]
pub mod stash;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "stash")]
pub use self::stash::Stash;

/// Database operation.
pub use common::Handler as Database;

/// [`Database`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "stash")]
    /// [`Stash`] error.
    Stash(stash::Error),
}
