use serde::{Deserialize, Serialize};

/// GitHub identity known to the dashboard
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct User {
    pub id: String,
    pub login: String,
    /// Display name from the GitHub profile, if any
    #[serde(default)]
    pub name: Option<String>,
    pub avatar_url: String,
    /// Profile page
    pub url: String,
    /// Whether the user has an invoicing store set up and can receive payouts
    #[serde(default)]
    pub btcpay_client: bool,
}

impl User {
    /// Profile name when set, login otherwise
    pub fn best_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.login)
    }
}
