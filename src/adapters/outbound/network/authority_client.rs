use crate::shared::Result;
use anyhow::Context;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Response envelope shared by the capacity and technology services
#[derive(Debug, Deserialize)]
struct ApiEnvelope<D> {
    data: Option<D>,
}

/// AuthorityClient - HTTP access to one resource collection of a remote service
///
/// Issues `GET {base_url}/{resource}/{id}` and unwraps the `data` field of the
/// response envelope. A 404 is reported as `Ok(None)`; every other non-2xx
/// status, a malformed body, or an envelope without `data` is an error.
#[derive(Debug, Clone)]
pub struct AuthorityClient {
    client: reqwest::Client,
    base_url: String,
    resource: &'static str,
}

impl AuthorityClient {
    /// Creates a client for `resource` under `base_url`
    ///
    /// `request_timeout` bounds the whole request at the transport level; the
    /// fan-out applies its own per-call timeout on top.
    pub fn new(base_url: &str, resource: &'static str, request_timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("bootcamp-service/{}", version);
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            resource,
        })
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    fn url_for(&self, id: i64) -> String {
        format!("{}/{}/{}", self.base_url, self.resource, id)
    }

    /// Fetches one entity payload by id
    pub async fn get<D: DeserializeOwned>(&self, id: i64) -> Result<Option<D>> {
        let url = self.url_for(id);
        tracing::debug!(resource = self.resource, id, %url, "fetching");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            anyhow::bail!("{} service returned status code {}", self.resource, status);
        }

        let envelope: ApiEnvelope<D> = response
            .json()
            .await
            .with_context(|| format!("malformed {} response for id {}", self.resource, id))?;

        match envelope.data {
            Some(data) => Ok(Some(data)),
            None => anyhow::bail!("{} response for id {} has no data", self.resource, id),
        }
    }
}
