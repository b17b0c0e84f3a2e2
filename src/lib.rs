pub mod config;

pub mod account;
pub mod donation;

pub mod storage;

/// The module for unit testing, will only be availabled in dev env.
#[cfg(test)]
mod tests;

pub use kindnet_shared as shared;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("donation error: {0}")]
    Donation(donation::Error),
    #[error("account error: {0}")]
    Account(account::Error),
    #[error("storage error: {0}")]
    Storage(storage::Error),
    #[error("config error: {0}")]
    Config(toml::de::Error),

    #[error("not logged in")]
    NotLoggedIn,
}

impl Error {
    /// Indicates whether this error is caused by the actor's role
    /// rather than by the state of the listings.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Error::Donation(donation::Error::PermissionDenied))
    }
}

/// Implements `From<T>` for [`Error`].
macro_rules! impl_from {
    ($($t:ty => $v:ident),* $(,)?) => {
        $(
            impl From<$t> for $crate::Error {
                #[inline]
                fn from(err: $t) -> Self {
                    Self::$v(err)
                }
            }
        )*
    };
}

impl_from! {
    donation::Error => Donation,
    account::Error => Account,
    storage::Error => Storage,
    toml::de::Error => Config,
}
