use kindnet_listings::{
    account::{SessionManager, SessionProvider},
    config,
    donation::{handle, DonationStore},
    shared::donation::handle::{FilterCriteria, GetDonationsDescriptor},
    storage::{FileStorage, SharedStorage},
};
use std::sync::Arc;

fn main() {
    let config = &*config::INSTANCE;

    tracing_subscriber::fmt()
        .with_max_level(config.max_level())
        .init();

    if let Some(err) = config::load_error() {
        tracing::warn!(
            "failed to read {}, using defaults: {err}",
            config::CONFIG_PATH
        );
    }

    let storage: SharedStorage = Arc::new(FileStorage::new(config.data_dir.clone()));
    let session = SessionManager::load(storage.clone(), config);
    let store = DonationStore::load(storage, config);

    let actor = session.current_actor();
    match &actor {
        Some(actor) => tracing::info!("browsing as {} ({})", actor.name, actor.role),
        None => tracing::info!("browsing without login"),
    }

    let descriptor = GetDonationsDescriptor {
        criteria: FilterCriteria::default(),
        sort: config.default_sort,
    };
    let now = chrono::Utc::now();

    for donation in handle::get_donations(&store, &descriptor) {
        let status = match donation.accepted_by() {
            Some(acceptance) => format!("accepted by {}", acceptance.name),
            None if handle::can_accept(actor.as_ref()) => "available, can accept".to_string(),
            None => "available".to_string(),
        };

        println!(
            "#{} {}{} [{} | {}]\n    {} | expires {} | {} | {}\n    posted {} by {}, {}",
            donation.id,
            donation.title,
            if donation.is_urgent() { " (urgent)" } else { "" },
            donation.category.label(),
            donation.urgency.label(),
            donation.quantity,
            donation.expiry,
            donation.location,
            donation.contact,
            donation.posted_ago(now),
            donation.donor.name,
            status,
        );
    }
}
