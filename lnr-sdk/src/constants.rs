// ABOUTME: Centralized constants for the lnr SDK
// ABOUTME: Contains API URLs, request timeouts, and pagination limits

/// HTTP and request timeouts
pub mod timeouts {
    use std::time::Duration;

    /// Default timeout for HTTP requests
    pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

/// Linear API URLs
pub mod urls {
    /// Base URL for the Linear API
    pub const LINEAR_API_BASE: &str = "https://api.linear.app";

    /// Path of the GraphQL endpoint under the API base
    pub const GRAPHQL_PATH: &str = "/graphql";
}

/// Cursor pagination limits
pub mod pagination {
    /// Nodes requested per page of a list query
    pub const PAGE_SIZE: i64 = 50;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_timeout_constants() {
        assert_eq!(timeouts::HTTP_REQUEST_TIMEOUT, Duration::from_secs(30));
    }

    #[test]
    fn test_url_constants() {
        assert!(urls::LINEAR_API_BASE.starts_with("https://"));
        assert!(urls::GRAPHQL_PATH.starts_with('/'));
    }

    #[test]
    fn test_pagination_constants() {
        assert_eq!(pagination::PAGE_SIZE, 50);
    }
}
