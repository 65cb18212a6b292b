use super::AuthorityClient;
use crate::bootcamp::domain::{Technology, TechnologyId};
use crate::ports::outbound::Authority;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct TechnologyPayload {
    id: TechnologyId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
}

/// TechnologyServiceClient adapter for the technology service
#[derive(Debug, Clone)]
pub struct TechnologyServiceClient {
    inner: AuthorityClient,
}

impl TechnologyServiceClient {
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self> {
        Ok(Self {
            inner: AuthorityClient::new(base_url, "technologies", request_timeout)?,
        })
    }
}

#[async_trait]
impl Authority for TechnologyServiceClient {
    type Entity = Technology;

    fn resource(&self) -> &'static str {
        self.inner.resource()
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Option<Technology>> {
        let payload: Option<TechnologyPayload> = self.inner.get(id).await?;
        Ok(payload.map(|p| Technology {
            id: p.id,
            name: p.name,
            description: p.description,
        }))
    }
}
