// ABOUTME: Centralized constants for the lnr CLI
// ABOUTME: Contains cache location, TTL, and the cache key namespace

/// On-disk cache settings and key namespace.
///
/// Team-scoped entries carry the team id in the key so switching teams never
/// reuses another team's labels, users, or states.
pub mod cache {
    use std::time::Duration;

    /// Directory under the per-user cache root
    pub const DIR_NAME: &str = "lnr";

    /// Reference data is refetched after this age
    pub const TTL: Duration = Duration::from_secs(24 * 60 * 60);

    /// Workspace-wide team list
    pub const TEAMS_KEY: &str = "teams";

    /// Last-used form answers
    pub const SELECTIONS_KEY: &str = "user-selections";

    pub fn labels_key(team_id: &str) -> String {
        format!("labels-{team_id}")
    }

    pub fn users_key(team_id: &str) -> String {
        format!("users-{team_id}")
    }

    pub fn states_key(team_id: &str) -> String {
        format!("states-{team_id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_ttl_is_24_hours() {
        assert_eq!(cache::TTL, Duration::from_secs(86_400));
    }

    #[test]
    fn test_team_scoped_keys_are_namespaced() {
        assert_eq!(cache::labels_key("t1"), "labels-t1");
        assert_eq!(cache::users_key("t1"), "users-t1");
        assert_eq!(cache::states_key("t1"), "states-t1");
        assert_ne!(cache::labels_key("t1"), cache::labels_key("t2"));
    }
}
