use super::*;

use crate::{
    account::{self, Actor, Role, SessionManager, SessionProvider},
    storage::Storage,
};
use kindnet_shared::account::{handle::LoginDescriptor, Session};

fn login(role: Role, email: &str) -> LoginDescriptor {
    LoginDescriptor {
        role,
        email: email.to_string(),
        password: "password123456".to_string(),
    }
}

#[test]
fn login_derives_name_and_persists() {
    let (storage, config) = reset_all();
    let session = SessionManager::load(storage.clone(), &config);
    assert!(session.current().is_none());
    assert_eq!(session.current_actor(), None);

    let logged_in = session.login(login(Role::Ngo, " helpinghands@kindnet.org ")).unwrap();

    assert_eq!(logged_in.name, "Helpinghands");
    assert_eq!(logged_in.email.to_string(), "helpinghands@kindnet.org");
    assert_eq!(
        session.current_actor(),
        Some(Actor::new(Role::Ngo, "Helpinghands"))
    );

    let raw = storage.get(&config.keys.session).unwrap().unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored["type"], "ngo");
    assert_eq!(stored["name"], "Helpinghands");
    assert!(stored.get("loginTime").is_some());

    // a later page load restores the session
    let restored = SessionManager::load(storage, &config);
    assert_eq!(restored.current(), Some(logged_in));
}

#[test]
fn logout_clears_session() {
    let (storage, config) = reset_all();
    let session = SessionManager::load(storage.clone(), &config);

    session.login(login(Role::Donor, "priya@example.com")).unwrap();
    session.logout();

    assert!(session.current().is_none());
    assert_eq!(storage.get(&config.keys.session).unwrap(), None);
    assert!(SessionManager::load(storage, &config).current().is_none());

    // logging out twice is harmless
    session.logout();
}

#[test]
fn login_rejects_malformed_email() {
    let (storage, config) = reset_all();
    let session = SessionManager::load(storage.clone(), &config);

    let err = session.login(login(Role::Recipient, "not-an-email")).unwrap_err();
    assert!(matches!(err, account::Error::InvalidEmail(_)));
    assert!(session.current().is_none());
    assert_eq!(storage.get(&config.keys.session).unwrap(), None);
}

#[test]
fn corrupt_session_is_logged_out() {
    let (storage, config) = reset_all();
    storage.set(&config.keys.session, r#"{"type":"admin"}"#).unwrap();

    assert!(SessionManager::load(storage, &config).current().is_none());
}

#[test]
fn display_names() {
    let email: lettre::Address = "ravi.k@example.com".parse().unwrap();
    assert_eq!(account::display_name(&email), "Ravi.k");

    let email: lettre::Address = "anita@example.com".parse().unwrap();
    assert_eq!(account::display_name(&email), "Anita");
}

#[test]
fn roles() {
    assert!(Role::Donor.can_post());
    assert!(!Role::Donor.can_accept());
    assert!(Role::Recipient.can_accept());
    assert!(Role::Ngo.can_accept());
    assert!(!Role::Ngo.can_post());

    assert_eq!("recipient".parse::<Role>(), Ok(Role::Recipient));
    assert!("admin".parse::<Role>().is_err());

    assert_eq!(account::landing_page(Role::Donor), "food-donations.html");
    assert_eq!(account::landing_page(Role::Recipient), "food-donations.html");
    assert_eq!(account::landing_page(Role::Ngo), "ngo.html");
}

#[test]
fn actor_providers() {
    let actor = Actor::new(Role::Recipient, "B");
    assert_eq!(actor.current_actor(), Some(actor.clone()));
    assert_eq!(None::<Actor>.current_actor(), None);

    let session = Session {
        role: Role::Donor,
        email: "a@example.com".parse().unwrap(),
        name: "A".to_string(),
        login_time: chrono::Utc::now(),
    };
    assert_eq!(session.actor(), Actor::new(Role::Donor, "A"));
}
