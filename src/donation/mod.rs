pub mod derive;
pub mod handle;
pub mod sample;

use crate::{
    config::Config,
    storage::{self, SharedStorage},
};
use chrono::{DateTime, Utc};
use kindnet_shared::{
    account::Actor,
    donation::handle::{DonationDraft, FilterCriteria, SortKey},
};
use std::{cmp::Reverse, collections::HashSet};

pub use kindnet_shared::donation::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("permission denied")]
    PermissionDenied,
    #[error("donation {0} not found")]
    NotFound(u64),
    #[error("donation {0} has already been accepted")]
    AlreadyAccepted(u64),
}

/// Select the donations matching `criteria`, ordered by `sort`.
///
/// Equal keys keep their relative order from `all`.
pub fn list(all: &[DonationRecord], criteria: &FilterCriteria, sort: SortKey) -> Vec<DonationRecord> {
    let mut visible: Vec<DonationRecord> = all
        .iter()
        .filter(|d| criteria.matches(d))
        .cloned()
        .collect();

    match sort {
        SortKey::Recency => visible.sort_by_key(|d| Reverse(d.posted_time)),
        SortKey::Expiry => visible.sort_by_cached_key(|d| derive::expiry_hours(&d.expiry)),
        SortKey::Quantity => {
            visible.sort_by_cached_key(|d| Reverse(derive::quantity_magnitude(&d.quantity)))
        }
        SortKey::Location => visible.sort_by_cached_key(|d| d.location.to_lowercase()),
    }

    visible
}

/// Owns every donation and mirrors each change into a storage.
pub struct DonationStore {
    donations: Vec<DonationRecord>,
    storage: SharedStorage,
    key: String,
}

impl DonationStore {
    /// Create an empty store persisting under `key`, ignoring anything already stored.
    pub fn new(storage: SharedStorage, key: impl Into<String>) -> Self {
        Self {
            donations: Vec::new(),
            storage,
            key: key.into(),
        }
    }

    /// Load the donations stored under the configured key.
    ///
    /// An unset key is seeded with sample donations when the config asks for it.
    /// Unreadable stored data is logged and treated as empty.
    pub fn load(storage: SharedStorage, config: &Config) -> Self {
        let mut this = Self::new(storage, config.keys.donations.clone());

        match load_all(&*this.storage, &this.key) {
            Ok(Some(donations)) => {
                tracing::debug!("loaded {} donations", donations.len());
                this.donations = donations;
                if this.rekey_duplicates() {
                    this.persist();
                }
            }
            Ok(None) if config.seed_samples => {
                tracing::info!("no stored donations, seeding samples");
                this.donations = sample::sample_donations(Utc::now());
                this.persist();
            }
            Ok(None) => (),
            Err(err) => {
                tracing::warn!("stored donations under {} unreadable: {err}", this.key);
            }
        }

        this
    }

    /// All donations, newest submission first.
    pub fn records(&self) -> &[DonationRecord] {
        &self.donations
    }

    pub fn get(&self, id: u64) -> Option<&DonationRecord> {
        self.donations.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.donations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.donations.is_empty()
    }

    /// The visible subset of this store's donations.
    pub fn list(&self, criteria: &FilterCriteria, sort: SortKey) -> Vec<DonationRecord> {
        let visible = list(&self.donations, criteria, sort);
        tracing::debug!(
            "listing {} of {} donations sorted by {}",
            visible.len(),
            self.donations.len(),
            sort.as_str()
        );
        visible
    }

    /// Post a new donation as `actor`, who must be a donor.
    pub fn submit(&mut self, draft: DonationDraft, actor: &Actor) -> Result<DonationRecord, Error> {
        self.submit_at(draft, actor, Utc::now())
    }

    pub fn submit_at(
        &mut self,
        draft: DonationDraft,
        actor: &Actor,
        now: DateTime<Utc>,
    ) -> Result<DonationRecord, Error> {
        if !actor.role.can_post() {
            return Err(Error::PermissionDenied);
        }

        let donation = DonationRecord {
            id: self.fresh_id(now),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            quantity: draft.quantity,
            expiry: draft.expiry,
            location: draft.location,
            city: draft.city,
            urgency: draft.urgency,
            contact: draft.contact,
            donor: DonorInfo {
                name: actor.name.clone(),
                avatar: Some(sample::default_avatar()),
            },
            image: Some(draft.image.unwrap_or_else(sample::default_image)),
            posted_time: now,
            status: DonationStatus::Available,
        };

        // newest first without a sort pass
        self.donations.insert(0, donation.clone());
        self.persist();

        tracing::info!(
            "donation {} \"{}\" posted by {}",
            donation.id,
            donation.title,
            actor.name
        );

        Ok(donation)
    }

    /// Accept an available donation as `actor`, who must be a recipient or an ngo.
    pub fn accept(&mut self, id: u64, actor: &Actor) -> Result<DonationRecord, Error> {
        self.accept_at(id, actor, Utc::now())
    }

    pub fn accept_at(
        &mut self,
        id: u64,
        actor: &Actor,
        now: DateTime<Utc>,
    ) -> Result<DonationRecord, Error> {
        let donation = self
            .donations
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(Error::NotFound(id))?;

        if !actor.role.can_accept() {
            return Err(Error::PermissionDenied);
        }

        if !donation.is_available() {
            return Err(Error::AlreadyAccepted(id));
        }

        donation.status = DonationStatus::Accepted(Acceptance {
            name: actor.name.clone(),
            role: actor.role,
            time: now,
        });

        let donation = donation.clone();
        self.persist();

        tracing::info!(
            "donation {} accepted by {} ({})",
            id,
            actor.name,
            actor.role
        );

        Ok(donation)
    }

    /// Write every donation into the storage.
    pub fn save_all(&self) -> Result<(), storage::Error> {
        storage::write_json(&*self.storage, &self.key, &self.donations)
    }

    /// Save without failing the calling operation, the last write wins.
    fn persist(&self) {
        if let Err(err) = self.save_all() {
            tracing::warn!("failed to save donations under {}: {err}", self.key);
        }
    }

    /// A timestamp based id, bumped past every id in use.
    fn fresh_id(&self, now: DateTime<Utc>) -> u64 {
        let stamp = u64::try_from(now.timestamp_millis()).unwrap_or_default();
        let used: HashSet<u64> = self.donations.iter().map(|d| d.id).collect();
        unused_id(&used, stamp)
    }

    /// Give every repeated id after its first occurrence an unused one.
    /// Returns whether any record changed.
    fn rekey_duplicates(&mut self) -> bool {
        let mut used: HashSet<u64> = self.donations.iter().map(|d| d.id).collect();
        let mut seen = HashSet::with_capacity(self.donations.len());
        let mut changed = false;

        for donation in &mut self.donations {
            if seen.insert(donation.id) {
                continue;
            }

            let id = unused_id(&used, 0);
            tracing::warn!(
                "stored donation \"{}\" repeats id {}, moved to {id}",
                donation.title,
                donation.id
            );
            donation.id = id;
            used.insert(id);
            seen.insert(id);
            changed = true;
        }

        changed
    }
}

/// `stamp` if it is past every id in `used`, else the largest id plus one.
/// Falls back to the smallest free id once the largest is `u64::MAX`.
fn unused_id(used: &HashSet<u64>, stamp: u64) -> u64 {
    match used.iter().max() {
        Some(&max) if max >= stamp => max
            .checked_add(1)
            .or_else(|| (0..u64::MAX).find(|id| !used.contains(id)))
            .unwrap_or_default(),
        _ => stamp,
    }
}

/// Read every donation stored under `key`.
pub fn load_all(
    storage: &dyn storage::Storage,
    key: &str,
) -> Result<Option<Vec<DonationRecord>>, storage::Error> {
    storage::read_json(storage, key)
}
