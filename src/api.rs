//! Typed access to the backend's REST endpoints
//!
//! Every operation the stores perform against the system of record goes
//! through [`UpkeepApi`]. Responses to mutations are required to parse as
//! JSON but their content is never used to correct local state.

use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use crate::error::Error;
use crate::fetch::Fetch;
use crate::model::{MaintenanceRequest, Status, Tenant};

/// Client for the maintenance API endpoints
#[derive(Debug, Clone)]
pub struct UpkeepApi {
    /// The base URL for the backend
    url: String,

    /// HTTP client
    client: Client,

    /// Per-request timeout
    timeout: Option<Duration>,
}

impl UpkeepApi {
    /// Create a new UpkeepApi
    pub(crate) fn new(url: &str, client: Client, timeout: Option<Duration>) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            client,
            timeout,
        }
    }

    /// Get the URL for an API path
    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.url, path)
    }

    /// Fetch the full request collection
    pub async fn requests(&self) -> Result<Vec<MaintenanceRequest>, Error> {
        Fetch::get(&self.client, &self.endpoint("requests"))
            .timeout(self.timeout)
            .execute()
            .await
    }

    /// Fetch the request collection for one apartment, filtered server-side
    pub async fn requests_by_apartment(
        &self,
        apartment: &str,
    ) -> Result<Vec<MaintenanceRequest>, Error> {
        let path = format!("requests_by_apt/{}", apartment);
        Fetch::get(&self.client, &self.endpoint(&path))
            .timeout(self.timeout)
            .execute()
            .await
    }

    /// Submit a new request record
    pub async fn create_request(&self, request: &MaintenanceRequest) -> Result<(), Error> {
        let _: Value = Fetch::post(&self.client, &self.endpoint("data"))
            .timeout(self.timeout)
            .json(request)?
            .execute()
            .await?;
        Ok(())
    }

    /// Update the status of an existing request
    pub async fn update_request_status(&self, id: &str, status: Status) -> Result<(), Error> {
        let path = format!("update_request/{}", id);
        let _: Value = Fetch::post(&self.client, &self.endpoint(&path))
            .timeout(self.timeout)
            .json(&json!({ "status": status }))?
            .execute()
            .await?;
        Ok(())
    }

    /// Attach a staff comment to a request
    pub async fn add_comment(&self, id: &str, comment: &str) -> Result<(), Error> {
        let path = format!("add_comment/{}", id);
        let _: Value = Fetch::post(&self.client, &self.endpoint(&path))
            .timeout(self.timeout)
            .json(&json!({ "comment": comment }))?
            .execute()
            .await?;
        Ok(())
    }

    /// Fetch the full tenant collection
    pub async fn tenants(&self) -> Result<Vec<Tenant>, Error> {
        Fetch::get(&self.client, &self.endpoint("tenants/"))
            .timeout(self.timeout)
            .execute()
            .await
    }

    /// Submit a new tenant record
    pub async fn add_tenant(&self, tenant: &Tenant) -> Result<(), Error> {
        let _: Value = Fetch::post(&self.client, &self.endpoint("add_tenant"))
            .timeout(self.timeout)
            .json(tenant)?
            .execute()
            .await?;
        Ok(())
    }

    /// Update the apartment number of an existing tenant
    pub async fn update_tenant_apartment(&self, id: &str, apartment: &str) -> Result<(), Error> {
        let path = format!("update_tenant_apt/{}", id);
        let _: Value = Fetch::post(&self.client, &self.endpoint(&path))
            .timeout(self.timeout)
            .json(&json!({ "apartmentnumber": apartment }))?
            .execute()
            .await?;
        Ok(())
    }

    /// Remove a tenant record
    pub async fn remove_tenant(&self, id: &str) -> Result<(), Error> {
        let path = format!("remove_tenant/{}", id);
        let _: Value = Fetch::delete(&self.client, &self.endpoint(&path))
            .timeout(self.timeout)
            .execute()
            .await?;
        Ok(())
    }
}
