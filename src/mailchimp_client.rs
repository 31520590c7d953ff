use crate::domain::{MailingList, MemberUpdate, SubscriberHash, SubscriberPayload};
use anyhow::Context;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const MEMBER_EXISTS_TITLE: &str = "Member Exists";

#[derive(Clone, Debug)]
pub struct MailchimpClient {
    http_client: Client,
    base_url: Url,
    api_key: Secret<String>,
}

impl MailchimpClient {
    pub fn new(
        base_url: &str,
        api_key: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("`{base_url}` is not a valid API base URL"))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("`{base_url}` cannot be used as an API base URL");
        }

        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the HTTP client")?;

        Ok(Self {
            http_client,
            base_url,
            api_key,
        })
    }

    #[tracing::instrument(name = "Fetching mailing lists", skip(self), err)]
    pub async fn get_lists(&self) -> Result<Vec<MailingList>, reqwest::Error> {
        let url = self.endpoint(&["lists"]);

        let response = self
            .authorized(self.http_client.get(url))
            .send()
            .await?
            .error_for_status()?
            .json::<ListsResponse>()
            .await?;

        Ok(response.lists)
    }

    #[tracing::instrument(name = "Creating list member", skip(self, payload))]
    pub async fn create_member(
        &self,
        list_id: &str,
        payload: &SubscriberPayload,
    ) -> Result<ApiResponse, reqwest::Error> {
        let url = self.endpoint(&["lists", list_id, "members"]);

        let response = self
            .authorized(self.http_client.post(url))
            .json(payload)
            .send()
            .await?;

        ApiResponse::read(response).await
    }

    #[tracing::instrument(name = "Updating list member", skip(self, update))]
    pub async fn update_member(
        &self,
        list_id: &str,
        subscriber_hash: &SubscriberHash,
        update: &MemberUpdate,
    ) -> Result<ApiResponse, reqwest::Error> {
        let url = self.endpoint(&["lists", list_id, "members", subscriber_hash.as_ref()]);

        let response = self
            .authorized(self.http_client.patch(url))
            .json(update)
            .send()
            .await?;

        ApiResponse::read(response).await
    }

    /// Appends `segments` to the base path, percent-encoding each one, so an id taken
    /// from configuration cannot reach outside its own path segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` only accepts base URLs that have a path to extend.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth("apikey", Some(self.api_key.expose_secret()))
    }
}

#[derive(Deserialize)]
struct ListsResponse {
    lists: Vec<MailingList>,
}

/// A completed call to the API, successful or not.
#[derive(Debug)]
pub struct ApiResponse {
    status: StatusCode,
    body: Value,
}

impl ApiResponse {
    async fn read(response: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = response.status();
        let bytes = response.bytes().await?;
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        Ok(Self { status, body })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Error bodies follow RFC 7807 and repeat the status code. Other 400s (invalid
    /// resource, forgotten email, compliance state) do not get the `Member Exists` title.
    pub fn is_member_exists(&self) -> bool {
        self.body.get("status").and_then(Value::as_u64) == Some(400)
            && self.body.get("title").and_then(Value::as_str) == Some(MEMBER_EXISTS_TITLE)
    }
}
