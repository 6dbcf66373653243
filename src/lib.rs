//! Upkeep Rust Client Library
//!
//! A Rust client library for the Upkeep property-maintenance backend,
//! coordinating tenants, the maintenance team, and the manager around the
//! shared request and tenant collections.
//!
//! A dashboard session creates a store, hydrates it once from the backend,
//! and then mutates it optimistically: every change applies to memory first
//! while the matching remote write runs fire-and-forget in the background.

pub mod api;
pub mod config;
pub mod error;
pub mod fetch;
pub mod id;
pub mod model;
pub mod projection;
pub mod store;

use reqwest::Client;

use crate::api::UpkeepApi;
use crate::config::ClientOptions;
use crate::store::{RequestStore, TenantStore};

/// The main entry point for the Upkeep Rust client
pub struct Upkeep {
    /// The base URL for the backend
    pub url: String,
    /// HTTP client used for requests
    pub http_client: Client,
    /// Client options
    pub options: ClientOptions,
}

impl Upkeep {
    /// Create a new Upkeep client
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the backend
    ///
    /// # Example
    ///
    /// ```
    /// use upkeep_rust::Upkeep;
    ///
    /// let upkeep = Upkeep::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: &str) -> Self {
        Self::new_with_options(base_url, ClientOptions::default())
    }

    /// Create a new Upkeep client with custom options
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the backend
    /// * `options` - Custom client options
    ///
    /// # Example
    ///
    /// ```
    /// use upkeep_rust::{config::ClientOptions, Upkeep};
    ///
    /// let options = ClientOptions::default().with_request_timeout(None);
    /// let upkeep = Upkeep::new_with_options("http://localhost:8080", options);
    /// ```
    pub fn new_with_options(base_url: &str, options: ClientOptions) -> Self {
        Self {
            url: base_url.to_string(),
            http_client: Client::new(),
            options,
        }
    }

    /// Create a client for the typed API endpoints
    pub fn api(&self) -> UpkeepApi {
        UpkeepApi::new(
            &self.url,
            self.http_client.clone(),
            self.options.request_timeout,
        )
    }

    /// Create a request store for this session
    ///
    /// # Example
    ///
    /// ```
    /// use upkeep_rust::Upkeep;
    ///
    /// let upkeep = Upkeep::new("http://localhost:8080");
    /// let store = upkeep.request_store();
    /// ```
    pub fn request_store(&self) -> RequestStore {
        RequestStore::new(self.api())
    }

    /// Create a tenant store for this session
    ///
    /// # Example
    ///
    /// ```
    /// use upkeep_rust::Upkeep;
    ///
    /// let upkeep = Upkeep::new("http://localhost:8080");
    /// let store = upkeep.tenant_store();
    /// ```
    pub fn tenant_store(&self) -> TenantStore {
        TenantStore::new(self.api())
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::ClientOptions;
    pub use crate::error::{Error, ValidationError};
    pub use crate::model::{MaintenanceRequest, NewRequest, NewTenant, Status, Tenant};
    pub use crate::projection::RequestFilter;
    pub use crate::store::{RemoteWrite, RequestStore, TenantStore};
    pub use crate::Upkeep;
}
