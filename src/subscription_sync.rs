use crate::{
    domain::{
        FieldMappingConfig, MailingList, SubmittedRecord, SubscriberHash, SubscriberPayload,
        SyncError, SyncOutcome, SyncResult,
    },
    mailchimp_client::{ApiResponse, MailchimpClient},
    observer::SyncObserver,
};
use std::sync::Arc;
use tracing::Span;

/// Pushes signup field submissions to a mailing list.
#[derive(Clone)]
pub struct SubscriptionSync {
    client: MailchimpClient,
    observers: Vec<Arc<dyn SyncObserver>>,
}

impl SubscriptionSync {
    pub fn new(client: MailchimpClient) -> Self {
        Self {
            client,
            observers: Vec::new(),
        }
    }

    pub fn with_observer(mut self, observer: impl SyncObserver + 'static) -> Self {
        self.observers.push(Arc::new(observer));
        self
    }

    /// Creates a list member from the submission, updating the existing member instead
    /// when the address is already on the list and `update_contact` is set.
    ///
    /// Nothing is sent when the signup field `field_name` was not filled in or no list
    /// is configured. A field posted with an empty value counts as not filled in, the
    /// same as an unchecked checkbox that is left out of the form body.
    ///
    /// API and network failures end up as [`SyncResult::NotSubscribed`]; only mapped
    /// fields missing from the submission are returned as errors.
    #[tracing::instrument(
        name = "Syncing signup to mailing list",
        skip(self, record, config),
        fields(list_id = tracing::field::Empty, subscriber_email = tracing::field::Empty)
    )]
    pub async fn sync(
        &self,
        field_name: &str,
        mut record: SubmittedRecord,
        config: &FieldMappingConfig,
    ) -> Result<SyncOutcome, SyncError> {
        let list_id = match config.list_id() {
            Some(list_id) if record.has_value(field_name) => list_id,
            _ => return Ok(SyncOutcome::Skipped),
        };

        for observer in &self.observers {
            observer.before_sync(&mut record);
        }

        let payload = SubscriberPayload::build(&record, config)?;
        Span::current()
            .record("list_id", list_id)
            .record("subscriber_email", payload.email_address.as_ref());

        let mut response = self.client.create_member(list_id, &payload).await;

        if config.update_contact && matches!(&response, Ok(r) if r.is_member_exists()) {
            let subscriber_hash = SubscriberHash::of(&payload.email_address);
            response = self
                .client
                .update_member(list_id, &subscriber_hash, &payload.to_update())
                .await;
        }

        let response = response
            .map_err(|e| {
                tracing::error!(
                    error_cause_chain = ?e,
                    error.message = %e,
                    "Failed to reach the list API"
                )
            })
            .ok();

        for observer in &self.observers {
            observer.after_sync(response.as_ref());
        }

        let success = response.as_ref().is_some_and(ApiResponse::is_success);

        Ok(SyncOutcome::Finished(SyncResult::from_success(success)))
    }

    /// Lists a signup field can be pointed at. Empty when the API cannot be queried.
    #[tracing::instrument(name = "Listing available mailing lists", skip(self))]
    pub async fn list_available_lists(&self) -> Vec<MailingList> {
        let mut lists = self.client.get_lists().await.unwrap_or_else(|e| {
            tracing::warn!(
                error_cause_chain = ?e,
                error.message = %e,
                "Failed to fetch mailing lists"
            );
            Vec::new()
        });

        for observer in &self.observers {
            observer.update_lists(&mut lists);
        }

        lists
    }
}
