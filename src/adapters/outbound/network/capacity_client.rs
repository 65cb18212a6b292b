use super::AuthorityClient;
use crate::bootcamp::domain::{Capacity, CapacityId, TechnologyId};
use crate::ports::outbound::Authority;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CapacityPayload {
    id: CapacityId,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    technology_ids: Vec<TechnologyId>,
}

impl From<CapacityPayload> for Capacity {
    fn from(payload: CapacityPayload) -> Self {
        Capacity {
            id: payload.id,
            name: payload.name,
            description: payload.description,
            technology_ids: payload.technology_ids,
        }
    }
}

/// CapacityServiceClient adapter for the capacity service
///
/// Only the id, name, description and technology ids of a capacity are read;
/// any other field in the payload is ignored.
#[derive(Debug, Clone)]
pub struct CapacityServiceClient {
    inner: AuthorityClient,
}

impl CapacityServiceClient {
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self> {
        Ok(Self {
            inner: AuthorityClient::new(base_url, "capacities", request_timeout)?,
        })
    }
}

#[async_trait]
impl Authority for CapacityServiceClient {
    type Entity = Capacity;

    fn resource(&self) -> &'static str {
        self.inner.resource()
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Option<Capacity>> {
        let payload: Option<CapacityPayload> = self.inner.get(id).await?;
        Ok(payload.map(Capacity::from))
    }
}
