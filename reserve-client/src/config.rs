//! Client configuration

/// Backend used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "https://localhost:7112/api";

/// Client configuration for connecting to the reservation backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL including the API prefix (e.g., "https://localhost:7112/api")
    pub base_url: String,

    /// Request timeout in seconds; `None` keeps the transport default
    pub timeout: Option<u64>,

    /// Accept self-signed certificates (local development backends)
    pub accept_invalid_certs: bool,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            accept_invalid_certs: false,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Accept invalid TLS certificates
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<super::NetworkHttpClient> {
        super::NetworkHttpClient::new(self)
    }

    /// Create the typed reservation API client from this configuration
    pub fn build_api(&self) -> crate::ClientResult<super::ReservationClient> {
        Ok(super::ReservationClient::new(self.build_http_client()?))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("http://localhost:5000/api")
            .with_timeout(10)
            .with_accept_invalid_certs(true);
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert_eq!(config.timeout, Some(10));
        assert!(config.accept_invalid_certs);
    }

    #[test]
    fn test_default_has_no_timeout() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, None);
        assert!(!config.accept_invalid_certs);
    }
}
