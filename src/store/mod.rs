//! Session stores for the request and tenant collections
//!
//! A store owns the in-memory copy of one collection for the lifetime of a
//! dashboard session. Every mutation is optimistic: memory changes first,
//! then the matching remote write is dispatched on the runtime. The remote
//! outcome never alters already-applied local state.

mod requests;
mod tenants;

pub use requests::RequestStore;
pub use tenants::TenantStore;

use std::future::Future;

use tokio::task::JoinHandle;

use crate::error::Error;

/// Handle to an in-flight remote write.
///
/// Dropping the handle detaches the write (fire-and-forget): it keeps
/// running, its outcome is logged, and local state stands either way.
/// Callers that want to observe the remote outcome await [`wait`]
/// instead and decide for themselves what to do on failure.
///
/// [`wait`]: RemoteWrite::wait
pub struct RemoteWrite {
    handle: JoinHandle<Result<(), Error>>,
}

impl RemoteWrite {
    /// Dispatch `future` on the runtime, logging its outcome
    pub(crate) fn spawn<F>(operation: &'static str, future: F) -> Self
    where
        F: Future<Output = Result<(), Error>> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let result = future.await;
            match &result {
                Ok(()) => log::debug!("{} acknowledged by backend", operation),
                Err(e) => log::warn!("{} failed, local state kept: {}", operation, e),
            }
            result
        });
        Self { handle }
    }

    /// Wait for the remote write to finish and return its outcome
    pub async fn wait(self) -> Result<(), Error> {
        self.handle
            .await
            .map_err(|e| Error::general(format!("remote write task failed: {}", e)))?
    }
}
