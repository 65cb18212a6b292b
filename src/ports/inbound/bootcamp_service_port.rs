use crate::application::read_models::BootcampListItem;
use crate::bootcamp::domain::{
    Bootcamp, BootcampCandidate, BootcampId, Order, Page, PageRequest, SortBy,
};
use crate::shared::BootcampError;
use async_trait::async_trait;

/// BootcampServicePort - Inbound port for the bootcamp use cases
///
/// This port defines the interface that external adapters (HTTP, tests, etc.)
/// use to register and query bootcamps. It represents the application's
/// public API.
#[async_trait]
pub trait BootcampServicePort: Send + Sync {
    /// Registers a new bootcamp
    ///
    /// # Arguments
    /// * `candidate` - Unvalidated input; `None` when the request had no body
    ///
    /// # Errors
    /// Returns an error if:
    /// - A field rule is violated (checked before any I/O)
    /// - Any referenced capacity does not exist
    /// - The capacity service cannot be reached
    /// - The name is already taken
    async fn register(
        &self,
        candidate: Option<BootcampCandidate>,
    ) -> Result<Bootcamp, BootcampError>;

    /// Lists one page of bootcamps enriched with capacity and technology details
    async fn list_page(
        &self,
        page: PageRequest,
        sort_by: SortBy,
        order: Order,
    ) -> Result<Page<BootcampListItem>, BootcampError>;

    /// Lists every bootcamp with its capacity ids
    async fn list_all(&self) -> Result<Vec<Bootcamp>, BootcampError>;

    /// Looks up a bootcamp by id; an unknown id is `Ok(None)`
    async fn find_by_id(&self, id: BootcampId) -> Result<Option<Bootcamp>, BootcampError>;
}
