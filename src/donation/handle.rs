use super::{DonationRecord, DonationStore};
use crate::account::SessionProvider;
use kindnet_shared::{
    account::{Actor, Role},
    donation::handle::*,
};

/// Post a donation as the logged in user.
pub fn new_donation(
    session: &impl SessionProvider,
    store: &mut DonationStore,
    descriptor: DonationDraft,
) -> Result<DonationRecord, crate::Error> {
    let actor = session.current_actor().ok_or(crate::Error::NotLoggedIn)?;
    let donation = store.submit(descriptor, &actor)?;

    notify_new_donation(&donation);

    Ok(donation)
}

/// Accept a donation as the logged in user.
pub fn accept_donation(
    session: &impl SessionProvider,
    store: &mut DonationStore,
    descriptor: AcceptDonationDescriptor,
) -> Result<DonationRecord, crate::Error> {
    let actor = session.current_actor().ok_or(crate::Error::NotLoggedIn)?;
    let donation = store.accept(descriptor.donation, &actor)?;

    notify_donor_accepted(&donation);

    Ok(donation)
}

/// The donations to render for the given selections.
pub fn get_donations(store: &DonationStore, descriptor: &GetDonationsDescriptor) -> Vec<DonationRecord> {
    store.list(&descriptor.criteria, descriptor.sort)
}

/// If the post button should be shown to `actor`.
pub fn can_post(actor: Option<&Actor>) -> bool {
    actor.map_or(false, |a| a.role.can_post())
}

/// If accept buttons should be shown to `actor`.
pub fn can_accept(actor: Option<&Actor>) -> bool {
    actor.map_or(false, |a| a.role.can_accept())
}

fn notify_new_donation(donation: &DonationRecord) {
    for role in Role::ALL.into_iter().filter(Role::can_accept) {
        tracing::info!(
            target: "kindnet::notify",
            "notifying {role}s about new donation: {}",
            donation.title
        );
    }
}

fn notify_donor_accepted(donation: &DonationRecord) {
    if let Some(acceptance) = donation.accepted_by() {
        tracing::info!(
            target: "kindnet::notify",
            "notifying {} that \"{}\" was accepted by {}",
            donation.donor.name,
            donation.title,
            acceptance.name
        );
    }
}
