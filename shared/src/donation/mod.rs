pub mod handle;

use crate::account::Role;
use chrono::{DateTime, Utc};
use handle::SimpleDonationStatus;
use serde::{Deserialize, Serialize};

/// Represents a food donation posted by a donor.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "StoredDonation", into = "StoredDonation")]
pub struct DonationRecord {
    /// The only id of this donation.
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Free text such as `20 servings`, its first number is used for sorting.
    pub quantity: String,
    /// Free text such as `4 hours` or `2-3 days`.
    pub expiry: String,
    /// Pickup address.
    pub location: String,
    pub city: String,
    pub urgency: Urgency,
    /// Contact phone or other reachable info of the donor.
    pub contact: String,
    pub donor: DonorInfo,
    /// Picture of the food.
    pub image: Option<String>,
    pub posted_time: DateTime<Utc>,
    pub status: DonationStatus,
}

impl DonationRecord {
    /// Indicates whether this donation needs an immediate pickup.
    pub fn is_urgent(&self) -> bool {
        self.urgency == Urgency::Immediate
    }

    pub fn is_available(&self) -> bool {
        matches!(self.status, DonationStatus::Available)
    }

    pub fn accepted_by(&self) -> Option<&Acceptance> {
        match &self.status {
            DonationStatus::Available => None,
            DonationStatus::Accepted(acceptance) => Some(acceptance),
        }
    }

    /// Describes how long ago this donation was posted, relative to `now`.
    pub fn posted_ago(&self, now: DateTime<Utc>) -> String {
        let elapsed = now - self.posted_time;
        let minutes = elapsed.num_minutes();
        let hours = elapsed.num_hours();

        if minutes < 60 {
            format!("{minutes} minutes ago")
        } else if hours < 24 {
            format!("{hours} hours ago")
        } else {
            format!("{} days ago", elapsed.num_days())
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DonorInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Describes status of a donation.
///
/// A donation starts `Available` and may be accepted exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DonationStatus {
    Available,
    Accepted(Acceptance),
}

/// Who accepted a donation and when.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Acceptance {
    pub name: String,
    #[serde(rename = "type")]
    pub role: Role,
    pub time: DateTime<Utc>,
}

/// Kind of food being donated.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cooked,
    Raw,
    Packaged,
    Fruits,
    Dairy,
    Grains,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Cooked,
        Category::Raw,
        Category::Packaged,
        Category::Fruits,
        Category::Dairy,
        Category::Grains,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cooked => "cooked",
            Category::Raw => "raw",
            Category::Packaged => "packaged",
            Category::Fruits => "fruits",
            Category::Dairy => "dairy",
            Category::Grains => "grains",
        }
    }

    /// Human readable badge text.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cooked => "Cooked Food",
            Category::Raw => "Raw Ingredients",
            Category::Packaged => "Packaged Food",
            Category::Fruits => "Fruits & Vegetables",
            Category::Dairy => "Dairy Products",
            Category::Grains => "Grains & Cereals",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// How soon the food has to be picked up.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Immediate,
    Today,
    Tomorrow,
    Flexible,
}

impl Urgency {
    pub const ALL: [Urgency; 4] = [
        Urgency::Immediate,
        Urgency::Today,
        Urgency::Tomorrow,
        Urgency::Flexible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Immediate => "immediate",
            Urgency::Today => "today",
            Urgency::Tomorrow => "tomorrow",
            Urgency::Flexible => "flexible",
        }
    }

    /// Human readable badge text.
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Immediate => "Immediate Pickup",
            Urgency::Today => "Pickup Today",
            Urgency::Tomorrow => "Pickup Tomorrow",
            Urgency::Flexible => "Flexible Pickup",
        }
    }
}

impl std::str::FromStr for Urgency {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Urgency::ALL
            .into_iter()
            .find(|u| u.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// A select value that names no known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl std::fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown variant \"{}\"", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

/// Persisted shape of a donation, with status and acceptance stored side by side.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredDonation {
    id: u64,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "type")]
    category: Category,
    quantity: String,
    expiry: String,
    location: String,
    city: String,
    urgency: Urgency,
    #[serde(default)]
    contact: String,
    donor: DonorInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    posted_time: DateTime<Utc>,
    status: SimpleDonationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    accepted_by: Option<Acceptance>,
}

/// A stored donation whose `status` and `acceptedBy` disagree.
#[derive(Debug)]
pub struct InconsistentStatus {
    pub id: u64,
    pub status: SimpleDonationStatus,
}

impl std::fmt::Display for InconsistentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            SimpleDonationStatus::Available => write!(
                f,
                "donation {} is available but carries an acceptance",
                self.id
            ),
            SimpleDonationStatus::Accepted => write!(
                f,
                "donation {} is accepted but has no acceptance",
                self.id
            ),
        }
    }
}

impl TryFrom<StoredDonation> for DonationRecord {
    type Error = InconsistentStatus;

    fn try_from(value: StoredDonation) -> Result<Self, Self::Error> {
        let status = match (value.status, value.accepted_by) {
            (SimpleDonationStatus::Available, None) => DonationStatus::Available,
            (SimpleDonationStatus::Accepted, Some(acceptance)) => {
                DonationStatus::Accepted(acceptance)
            }
            (status, _) => {
                return Err(InconsistentStatus {
                    id: value.id,
                    status,
                })
            }
        };

        Ok(Self {
            id: value.id,
            title: value.title,
            description: value.description,
            category: value.category,
            quantity: value.quantity,
            expiry: value.expiry,
            location: value.location,
            city: value.city,
            urgency: value.urgency,
            contact: value.contact,
            donor: value.donor,
            image: value.image,
            posted_time: value.posted_time,
            status,
        })
    }
}

impl From<DonationRecord> for StoredDonation {
    fn from(value: DonationRecord) -> Self {
        let (status, accepted_by) = match value.status {
            DonationStatus::Available => (SimpleDonationStatus::Available, None),
            DonationStatus::Accepted(acceptance) => {
                (SimpleDonationStatus::Accepted, Some(acceptance))
            }
        };

        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            category: value.category,
            quantity: value.quantity,
            expiry: value.expiry,
            location: value.location,
            city: value.city,
            urgency: value.urgency,
            contact: value.contact,
            donor: value.donor,
            image: value.image,
            posted_time: value.posted_time,
            status,
            accepted_by,
        }
    }
}
