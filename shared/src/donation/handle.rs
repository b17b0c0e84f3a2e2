use super::{Category, DonationRecord, Urgency};
use serde::{Deserialize, Serialize};

/// Fields of a donation filled in by the donor when posting.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DonationDraft {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub quantity: String,
    pub expiry: String,
    pub urgency: Urgency,
    pub location: String,
    pub city: String,
    pub contact: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SimpleDonationStatus {
    Available,
    Accepted,
}

/// Equality constraints on the listing, `None` means no constraint.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: Option<Category>,
    pub city: Option<String>,
    pub urgency: Option<Urgency>,
}

impl FilterCriteria {
    /// Build criteria from raw select values.
    /// Empty or unrecognized values put no constraint on that field.
    pub fn from_selection(category: &str, city: &str, urgency: &str) -> Self {
        Self {
            category: category.parse().ok(),
            city: Some(city).filter(|c| !c.is_empty()).map(str::to_string),
            urgency: urgency.parse().ok(),
        }
    }

    /// If the target donation satisfies every present constraint.
    pub fn matches(&self, donation: &DonationRecord) -> bool {
        self.category.map_or(true, |c| donation.category == c)
            && self
                .city
                .as_deref()
                .map_or(true, |c| donation.city == c)
            && self.urgency.map_or(true, |u| donation.urgency == u)
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.city.is_none() && self.urgency.is_none()
    }
}

/// Ordering of the listing.
///
/// Serialized under the page's select values, see [`SortKey::as_str`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Newest first.
    #[default]
    #[serde(rename = "recent", alias = "recency")]
    Recency,
    /// Soonest expiring first, unparseable expiry last.
    Expiry,
    /// Largest quantity first.
    Quantity,
    /// Pickup address A-Z.
    #[serde(rename = "distance", alias = "location")]
    Location,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Recency => "recent",
            SortKey::Expiry => "expiry",
            SortKey::Quantity => "quantity",
            SortKey::Location => "distance",
        }
    }

    /// Parse a raw select value, falling back to [`SortKey::Recency`].
    pub fn from_selection(value: &str) -> Self {
        match value {
            "expiry" => SortKey::Expiry,
            "quantity" => SortKey::Quantity,
            "distance" | "location" => SortKey::Location,
            _ => SortKey::Recency,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GetDonationsDescriptor {
    #[serde(default)]
    pub criteria: FilterCriteria,
    #[serde(default)]
    pub sort: SortKey,
}

impl GetDonationsDescriptor {
    /// Build a listing request from the page's four select values.
    pub fn from_selection(category: &str, city: &str, urgency: &str, sort: &str) -> Self {
        Self {
            criteria: FilterCriteria::from_selection(category, city, urgency),
            sort: SortKey::from_selection(sort),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct AcceptDonationDescriptor {
    pub donation: u64,
}
