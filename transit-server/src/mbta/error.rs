//! Transit data source error types.

/// Errors that can occur when fetching routes or stops.
///
/// Callers recover from all of these as "no data"; none is fatal.
#[derive(Debug, thiserror::Error)]
pub enum DataFetchError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check MBTA_API_KEY")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by the MBTA API")]
    RateLimited,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Offline data could not be read
    #[error("mock data error: {message}")]
    MockData { message: String },
}
