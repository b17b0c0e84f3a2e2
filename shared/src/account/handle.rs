use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginDescriptor {
    #[serde(rename = "type")]
    pub role: super::Role,
    /// Raw email text as typed into the login form.
    pub email: String,
    /// Accepted but never checked.
    pub password: String,
}
