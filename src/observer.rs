use crate::{
    domain::{MailingList, SubmittedRecord},
    mailchimp_client::ApiResponse,
};

/// Callbacks run around a sync. Every method defaults to a no-op, so observers only
/// implement what they need. Observers run in the order they were registered.
pub trait SyncObserver: Send + Sync {
    /// Runs once the sync is known to go ahead, before the payload is built. Values
    /// written to `record` are what gets sent.
    fn before_sync(&self, _record: &mut SubmittedRecord) {}

    /// Runs with the response of the last call made. `None` when that call never got a
    /// response.
    fn after_sync(&self, _response: Option<&ApiResponse>) {}

    /// Runs after lists were fetched, including when fetching failed and `lists` is
    /// empty.
    fn update_lists(&self, _lists: &mut Vec<MailingList>) {}
}

/// Records every sync in the current span.
pub struct TracingObserver;

impl SyncObserver for TracingObserver {
    fn after_sync(&self, response: Option<&ApiResponse>) {
        match response {
            Some(response) if response.is_success() => {
                tracing::info!(status = %response.status(), "List member synced")
            }
            Some(response) => tracing::warn!(
                status = %response.status(),
                body = %response.body(),
                "List API rejected the member"
            ),
            None => tracing::warn!("List API could not be reached"),
        }
    }

    fn update_lists(&self, lists: &mut Vec<MailingList>) {
        tracing::debug!(count = lists.len(), "Mailing lists available");
    }
}
