use crate::bootcamp::services::FanOut;
use crate::ports::outbound::Authority;

/// Best-effort batch fetch from an authority.
///
/// Never fails: ids whose fetch errors out or times out are simply missing
/// from the result. The result is unordered; callers key it by entity id.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnrichmentFanout {
    fan_out: FanOut,
}

impl EnrichmentFanout {
    pub fn new(fan_out: FanOut) -> Self {
        Self { fan_out }
    }

    pub async fn fetch_all<A>(&self, ids: &[i64], authority: &A) -> Vec<A::Entity>
    where
        A: Authority + ?Sized,
    {
        if ids.is_empty() {
            return Vec::new();
        }

        let fetched = authority.fetch_by_ids(ids, &self.fan_out).await;
        tracing::debug!(
            resource = authority.resource(),
            requested = ids.len(),
            fetched = fetched.len(),
            "enrichment fan-out finished"
        );
        fetched
    }
}
