/// Errors from the marketplace API client.
#[derive(Debug, thiserror::Error)]
pub enum MarketplaceError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The marketplace returned a non-2xx status code.
    #[error("Marketplace API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response envelope reported failure (`status: false`).
    #[error("Marketplace API rejected the request: {message}")]
    Envelope { message: String },
}
