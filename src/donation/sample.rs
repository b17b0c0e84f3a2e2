use super::{Category, DonationRecord, DonationStatus, DonorInfo, Urgency};
use chrono::{DateTime, Duration, Utc};

const DONOR_AVATAR: &str = "https://images.pexels.com/photos/3769021/pexels-photo-3769021.jpeg?auto=compress&cs=tinysrgb&w=30&h=30";

const MEAL_IMAGE: &str = "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg?auto=compress&cs=tinysrgb&w=300&h=200";

/// Donations shown on a fresh install, posted relative to `now`.
pub fn sample_donations(now: DateTime<Utc>) -> Vec<DonationRecord> {
    vec![
        DonationRecord {
            id: 1,
            title: "Traditional South Indian Meal".to_string(),
            description: "Fresh sambar, rasam, rice, and vegetables. Prepared for 50 people but only 30 attended our function.".to_string(),
            category: Category::Cooked,
            quantity: "20 servings".to_string(),
            expiry: "4 hours".to_string(),
            location: "T. Nagar, Chennai".to_string(),
            city: "chennai".to_string(),
            urgency: Urgency::Immediate,
            contact: "+91 98765 43210".to_string(),
            donor: DonorInfo {
                name: "Priya Sharma".to_string(),
                avatar: Some(DONOR_AVATAR.to_string()),
            },
            image: Some(MEAL_IMAGE.to_string()),
            posted_time: now - Duration::minutes(30),
            status: DonationStatus::Available,
        },
        DonationRecord {
            id: 2,
            title: "Packaged Snacks & Biscuits".to_string(),
            description: "Assorted packaged snacks, biscuits, and ready-to-eat items. All items are well within expiry date.".to_string(),
            category: Category::Packaged,
            quantity: "50 packets".to_string(),
            expiry: "2-6 months".to_string(),
            location: "Koramangala, Bangalore".to_string(),
            city: "bangalore".to_string(),
            urgency: Urgency::Today,
            contact: "+91 87654 32109".to_string(),
            donor: DonorInfo {
                name: "Rajesh Kumar".to_string(),
                avatar: Some("https://images.pexels.com/photos/3785104/pexels-photo-3785104.jpeg?auto=compress&cs=tinysrgb&w=30&h=30".to_string()),
            },
            image: Some("https://images.pexels.com/photos/4198019/pexels-photo-4198019.jpeg?auto=compress&cs=tinysrgb&w=300&h=200".to_string()),
            posted_time: now - Duration::hours(2),
            status: DonationStatus::Available,
        },
        DonationRecord {
            id: 3,
            title: "Fresh Fruits & Vegetables".to_string(),
            description: "Fresh seasonal fruits and vegetables from our farm. Slightly overripe but perfectly edible and nutritious.".to_string(),
            category: Category::Fruits,
            quantity: "25 kg mixed".to_string(),
            expiry: "2-3 days".to_string(),
            location: "Jubilee Hills, Hyderabad".to_string(),
            city: "hyderabad".to_string(),
            urgency: Urgency::Tomorrow,
            contact: "+91 76543 21098".to_string(),
            donor: DonorInfo {
                name: "Anita Reddy".to_string(),
                avatar: Some("https://images.pexels.com/photos/3777943/pexels-photo-3777943.jpeg?auto=compress&cs=tinysrgb&w=30&h=30".to_string()),
            },
            image: Some("https://images.pexels.com/photos/1132047/pexels-photo-1132047.jpeg?auto=compress&cs=tinysrgb&w=300&h=200".to_string()),
            posted_time: now - Duration::hours(5),
            status: DonationStatus::Available,
        },
    ]
}

/// Picture used for donations posted without one.
pub fn default_image() -> String {
    MEAL_IMAGE.to_string()
}

/// Avatar given to every newly posted donation's donor.
pub fn default_avatar() -> String {
    DONOR_AVATAR.to_string()
}
