mod account;

use crate::{
    config::Config,
    storage::{MemoryStorage, SharedStorage},
};
use kindnet_shared::donation::{handle::DonationDraft, Category, Urgency};
use std::sync::Arc;

/// Fresh in-memory storage and a config that does not seed samples.
fn reset_all() -> (SharedStorage, Config) {
    let storage: SharedStorage = Arc::new(MemoryStorage::new());
    let config = Config {
        seed_samples: false,
        ..Config::default()
    };

    (storage, config)
}

fn draft(
    title: &str,
    category: Category,
    quantity: &str,
    expiry: &str,
    urgency: Urgency,
    city: &str,
) -> DonationDraft {
    DonationDraft {
        title: title.to_string(),
        description: format!("{title} for pickup"),
        category,
        quantity: quantity.to_string(),
        expiry: expiry.to_string(),
        urgency,
        location: format!("Main Road, {city}"),
        city: city.to_string(),
        contact: "+91 90000 00000".to_string(),
        image: None,
    }
}
