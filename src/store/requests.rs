//! In-memory session store for maintenance requests

use std::collections::HashMap;

use chrono::Utc;

use crate::api::UpkeepApi;
use crate::error::{Error, ValidationError};
use crate::id;
use crate::model::{MaintenanceRequest, NewRequest, Status, Urgency};
use crate::projection::{self, RequestFilter};
use crate::store::RemoteWrite;

/// Session-local collection of maintenance requests.
///
/// Hydrated once from the backend, then mutated optimistically: status
/// changes, comments, and new requests apply to memory immediately while
/// the matching remote write runs in the background.
pub struct RequestStore {
    api: UpkeepApi,
    requests: Vec<MaintenanceRequest>,

    // Draft comment input per request id, cleared on submit.
    drafts: HashMap<String, String>,

    // Comments submitted this session; shown in place of the persisted
    // comment field, including when the submitted text is empty.
    comments: HashMap<String, String>,
}

impl RequestStore {
    /// Create a new RequestStore
    pub(crate) fn new(api: UpkeepApi) -> Self {
        Self {
            api,
            requests: Vec::new(),
            drafts: HashMap::new(),
            comments: HashMap::new(),
        }
    }

    /// Replace the in-memory collection
    pub fn load(&mut self, collection: Vec<MaintenanceRequest>) {
        self.requests = collection;
    }

    /// Hydrate from the backend's full request collection
    pub async fn refresh(&mut self) -> Result<(), Error> {
        let collection = self.api.requests().await?;
        self.load(collection);
        Ok(())
    }

    /// Hydrate from the server-side per-apartment listing
    pub async fn refresh_by_apartment(&mut self, apartment: &str) -> Result<(), Error> {
        let collection = self.api.requests_by_apartment(apartment).await?;
        self.load(collection);
        Ok(())
    }

    /// The unfiltered in-memory collection
    pub fn requests(&self) -> &[MaintenanceRequest] {
        &self.requests
    }

    /// Look up a request by id
    pub fn get(&self, id: &str) -> Option<&MaintenanceRequest> {
        self.requests.iter().find(|request| request.id == id)
    }

    /// Validate and submit a new maintenance request.
    ///
    /// On success the record is prepended to the collection and the create
    /// request is dispatched to the backend; the optimistic record stands
    /// regardless of the remote outcome. On validation failure nothing is
    /// mutated and no remote call is made.
    pub fn create(
        &mut self,
        new: NewRequest,
    ) -> Result<(MaintenanceRequest, RemoteWrite), ValidationError> {
        let mut errors = ValidationError::new();
        errors.require("area", &new.area, "Area is required");
        errors.require("description", &new.description, "Description is required");
        errors.into_result()?;

        let request = MaintenanceRequest {
            id: id::request_id(),
            apartment_number: new.apartment_number,
            area: new.area,
            description: new.description,
            date_time: Utc::now(),
            photo: new.photo,
            status: Status::Pending,
            urgency: Urgency::Moderate.as_str().to_string(),
            comment: None,
        };
        self.requests.insert(0, request.clone());

        let api = self.api.clone();
        let payload = request.clone();
        let write = RemoteWrite::spawn("create request", async move {
            api.create_request(&payload).await
        });
        Ok((request, write))
    }

    /// Mark a pending request as completed.
    ///
    /// Idempotent: a request that is already completed, or an id with no
    /// matching record, leaves the collection unchanged. The remote status
    /// update is dispatched either way and its outcome never rolls back the
    /// local transition.
    pub fn mark_completed(&mut self, id: &str) -> RemoteWrite {
        if let Some(request) = self.requests.iter_mut().find(|r| r.id == id) {
            if request.status == Status::Pending {
                request.status = Status::Completed;
            }
        }

        let api = self.api.clone();
        let id = id.to_string();
        RemoteWrite::spawn("update request status", async move {
            api.update_request_status(&id, Status::Completed).await
        })
    }

    /// Record the session comment for a request and send it to the backend.
    ///
    /// The empty string is permitted and still overrides the persisted
    /// comment in [`comment_for`].
    ///
    /// [`comment_for`]: RequestStore::comment_for
    pub fn set_comment(&mut self, id: &str, text: &str) -> RemoteWrite {
        self.comments.insert(id.to_string(), text.to_string());

        let api = self.api.clone();
        let id = id.to_string();
        let text = text.to_string();
        RemoteWrite::spawn("add comment", async move {
            api.add_comment(&id, &text).await
        })
    }

    /// Buffer comment input for a request without submitting it
    pub fn set_draft(&mut self, id: &str, text: &str) {
        self.drafts.insert(id.to_string(), text.to_string());
    }

    /// The buffered comment input for a request
    pub fn draft(&self, id: &str) -> &str {
        self.drafts.get(id).map(String::as_str).unwrap_or("")
    }

    /// Submit the buffered draft for a request and clear the buffer.
    ///
    /// An absent draft submits the empty string.
    pub fn submit_comment(&mut self, id: &str) -> RemoteWrite {
        let text = self.drafts.remove(id).unwrap_or_default();
        self.set_comment(id, &text)
    }

    /// The comment to display for a request: the session-submitted comment
    /// when one exists, otherwise the persisted comment field.
    pub fn comment_for(&self, id: &str) -> Option<&str> {
        if let Some(overlay) = self.comments.get(id) {
            return Some(overlay);
        }
        self.get(id).and_then(|request| request.comment.as_deref())
    }

    /// Project a filtered, urgency-ordered view of the collection
    pub fn project(&self, filter: &RequestFilter) -> Vec<MaintenanceRequest> {
        projection::project(&self.requests, filter)
    }

    /// Pending requests in the full collection, ignoring any active filter
    pub fn pending_count(&self) -> usize {
        projection::pending_count(&self.requests)
    }
}
