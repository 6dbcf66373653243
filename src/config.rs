//! Configuration options for the Upkeep client

use std::time::Duration;

/// Configuration options for the Upkeep client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The request timeout applied to every HTTP call, or `None` to wait
    /// indefinitely
    pub request_timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl ClientOptions {
    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }
}
