use crate::bootcamp::domain::{
    Bootcamp, BootcampId, CapacityId, NewBootcamp, Order, PageRequest, SortBy,
};
use crate::shared::Result;
use async_trait::async_trait;

/// BootcampRepository port for bootcamp persistence
///
/// This port abstracts the store holding bootcamp rows and the link rows that
/// tie each bootcamp to its capacity ids.
///
/// # Async Support
/// All methods are async and implementations must be `Send + Sync` so a single
/// store can serve concurrent requests.
#[async_trait]
pub trait BootcampRepository: Send + Sync {
    /// Counts every stored bootcamp
    async fn count_all(&self) -> Result<u64>;

    /// Returns one page of bootcamps, without capacity ids populated
    ///
    /// # Ordering
    /// * `SortBy::Name` - by name in the requested order, no secondary key
    /// * `SortBy::CapacityCount` - by number of linked capacities in the
    ///   requested order, ties broken by name ascending regardless of `order`
    async fn find_page(
        &self,
        page: &PageRequest,
        sort_by: SortBy,
        order: Order,
    ) -> Result<Vec<Bootcamp>>;

    async fn exists_by_name(&self, name: &str) -> Result<bool>;

    /// Persists a bootcamp together with one link row per capacity id
    ///
    /// # Returns
    /// The stored bootcamp with its assigned id and exactly the submitted
    /// capacity ids
    ///
    /// # Errors
    /// Returns an error if either the bootcamp row or any link row cannot be
    /// written; in that case nothing is visible to readers.
    async fn save(&self, bootcamp: NewBootcamp) -> Result<Bootcamp>;

    /// Returns every bootcamp with capacity ids populated
    async fn find_all(&self) -> Result<Vec<Bootcamp>>;

    async fn find_by_id(&self, id: BootcampId) -> Result<Option<Bootcamp>>;

    async fn find_linked_ids(&self, bootcamp_id: BootcampId) -> Result<Vec<CapacityId>>;

    /// Returns `(bootcamp_id, capacity_id)` pairs for every requested bootcamp
    async fn find_linked_ids_for_many(
        &self,
        bootcamp_ids: &[BootcampId],
    ) -> Result<Vec<(BootcampId, CapacityId)>>;
}
