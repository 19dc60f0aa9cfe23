use std::collections::HashMap;

/// Display name and avatar URL for one user from the intranet feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntry {
    pub name: String,
    pub avatar_url: String,
}

/// Users known to the intranet feed, keyed by the raw `id` attribute string.
/// Numeric ids from the presence log must be stringified before lookup.
pub type UserDirectory = HashMap<String, UserEntry>;
