use serde::{Deserialize, Serialize};

/// A user or guest as the rest of the app sees it.
///
/// Authenticated identities come from the identity provider and are stored
/// in the cookie session after login. Guest identities are generated per
/// session and never persisted anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque identifier, unique per user (or per guest session).
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub guest: bool,
}

impl Identity {
    /// First character of the display name, for the nav avatar bubble.
    pub fn avatar_initial(&self) -> String {
        self.username
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string()
    }
}
