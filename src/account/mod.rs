//! The mocked login session.
//!
//! Any password is accepted, the session only records who is acting.

use crate::{
    config::Config,
    storage::{self, SharedStorage},
};
use chrono::Utc;
use kindnet_shared::account::handle::LoginDescriptor;
use parking_lot::RwLock;

pub use kindnet_shared::account::*;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid email address: {0}")]
    InvalidEmail(lettre::address::AddressError),
}

/// Supplies the actor operations are performed as.
pub trait SessionProvider {
    /// The current actor, `None` if nobody is logged in.
    fn current_actor(&self) -> Option<Actor>;
}

impl SessionProvider for Actor {
    fn current_actor(&self) -> Option<Actor> {
        Some(self.clone())
    }
}

impl SessionProvider for Option<Actor> {
    fn current_actor(&self) -> Option<Actor> {
        self.clone()
    }
}

/// Keeps the logged in user, mirrored into a storage.
pub struct SessionManager {
    storage: SharedStorage,
    key: String,
    current: RwLock<Option<Session>>,
}

impl SessionManager {
    /// Restore the session stored under the configured key, if any.
    pub fn load(storage: SharedStorage, config: &Config) -> Self {
        let key = config.keys.session.clone();

        let current = match storage::read_json::<Session>(&*storage, &key) {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!("stored session under {key} unreadable: {err}");
                None
            }
        };

        Self {
            storage,
            key,
            current: RwLock::new(current),
        }
    }

    /// Log in without checking the password.
    pub fn login(&self, descriptor: LoginDescriptor) -> Result<Session, Error> {
        let email: lettre::Address = descriptor
            .email
            .trim()
            .parse()
            .map_err(Error::InvalidEmail)?;

        let session = Session {
            role: descriptor.role,
            name: display_name(&email),
            email,
            login_time: Utc::now(),
        };

        if let Err(err) = storage::write_json(&*self.storage, &self.key, &session) {
            tracing::warn!("failed to save session under {}: {err}", self.key);
        }

        tracing::info!("{} logged in as {}", session.name, session.role);
        *self.current.write() = Some(session.clone());

        Ok(session)
    }

    pub fn logout(&self) {
        if let Some(session) = self.current.write().take() {
            tracing::info!("{} logged out", session.name);
        }

        if let Err(err) = self.storage.remove(&self.key) {
            tracing::warn!("failed to clear session under {}: {err}", self.key);
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.current.read().clone()
    }
}

impl SessionProvider for SessionManager {
    fn current_actor(&self) -> Option<Actor> {
        self.current.read().as_ref().map(Session::actor)
    }
}

/// Name shown for an email address: its local part with the first letter capitalized.
pub fn display_name(email: &lettre::Address) -> String {
    let mut chars = email.user().chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Page a user lands on after logging in.
pub fn landing_page(role: Role) -> &'static str {
    match role {
        Role::Donor | Role::Recipient => "food-donations.html",
        Role::Ngo => "ngo.html",
    }
}
