use crate::bootcamp::domain::{Capacity, Technology};
use crate::bootcamp::services::{FailurePolicy, FanOut, FanOutError};
use crate::shared::Result;
use async_trait::async_trait;

/// Authority port for an external service that owns a kind of entity
///
/// Implementations only provide the single-id lookup; the batch operations
/// are built on top of it with the shared [`FanOut`] primitive so that every
/// authority gets the same concurrency, timeout and failure semantics.
#[async_trait]
pub trait Authority: Send + Sync {
    type Entity: Send + 'static;

    /// Short name of the remote resource, used in logs
    fn resource(&self) -> &'static str;

    /// Looks up a single entity
    ///
    /// # Returns
    /// * `Ok(Some(entity))` - the authority knows the id
    /// * `Ok(None)` - the authority answered that the id does not exist
    ///
    /// # Errors
    /// Returns an error for transport failures, unexpected status codes and
    /// malformed bodies.
    async fn fetch_by_id(&self, id: i64) -> Result<Option<Self::Entity>>;

    /// Returns the ids confirmed to exist (strict)
    ///
    /// # Errors
    /// The first transport failure or timeout aborts the whole lookup.
    async fn find_existing_ids(
        &self,
        ids: &[i64],
        fan_out: &FanOut,
    ) -> std::result::Result<Vec<i64>, FanOutError> {
        let found = fan_out
            .run(ids, FailurePolicy::Propagate, |id| self.fetch_by_id(id))
            .await?;
        Ok(found.into_iter().map(|(id, _)| id).collect())
    }

    /// Fetches whatever can be fetched (lenient)
    ///
    /// Failed, timed-out and absent ids are left out. The result is in
    /// completion order.
    async fn fetch_by_ids(&self, ids: &[i64], fan_out: &FanOut) -> Vec<Self::Entity> {
        fan_out
            .run(ids, FailurePolicy::Suppress, |id| self.fetch_by_id(id))
            .await
            .map(|found| found.into_iter().map(|(_, entity)| entity).collect())
            .unwrap_or_default()
    }
}

/// Authority for capacities
pub trait CapacityAuthority: Authority<Entity = Capacity> {}

impl<T: Authority<Entity = Capacity>> CapacityAuthority for T {}

/// Authority for technologies
pub trait TechnologyAuthority: Authority<Entity = Technology> {}

impl<T: Authority<Entity = Technology>> TechnologyAuthority for T {}
