//! The greeting served at the site root.

/// Body returned for every request to `/`
pub const GREETING: &str = "Hello World from Immutable EC2 Instance\n";

/// Index handler.
///
/// Ignores the request entirely; axum renders the `&'static str` as a
/// `text/plain; charset=utf-8` 200 response.
pub async fn index() -> &'static str {
    GREETING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_returns_greeting() {
        assert_eq!(index().await, "Hello World from Immutable EC2 Instance\n");
    }

    #[tokio::test]
    async fn test_index_is_idempotent() {
        assert_eq!(index().await, index().await);
    }
}
