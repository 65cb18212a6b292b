use crate::application::read_models::{BootcampListItem, CapacitySummary};
use crate::application::use_cases::{EnrichmentFanout, ExternalIdVerifier};
use crate::bootcamp::domain::{
    Bootcamp, BootcampCandidate, BootcampId, Capacity, CapacityId, Identified, Order, Page,
    PageRequest, SortBy,
};
use crate::bootcamp::policies::RegistrationRules;
use crate::bootcamp::services::FanOut;
use crate::ports::inbound::BootcampServicePort;
use crate::ports::outbound::{BootcampRepository, CapacityAuthority, TechnologyAuthority};
use crate::shared::BootcampError;
use async_trait::async_trait;
use futures::future::join_all;
use std::collections::HashMap;

/// BootcampUseCase - Core use case for bootcamp registration and listing
///
/// This use case orchestrates registration (field rules, strict capacity
/// existence check, name uniqueness, persistence) and the enriched,
/// paginated listing, using generic dependency injection for the store and
/// both external authorities.
///
/// # Type Parameters
/// * `R` - BootcampRepository implementation
/// * `CA` - Authority for capacities
/// * `TA` - Authority for technologies
pub struct BootcampUseCase<R, CA, TA> {
    repository: R,
    capacities: CA,
    technologies: TA,
    verifier: ExternalIdVerifier,
    enrichment: EnrichmentFanout,
}

impl<R, CA, TA> BootcampUseCase<R, CA, TA>
where
    R: BootcampRepository,
    CA: CapacityAuthority,
    TA: TechnologyAuthority,
{
    /// Creates a new BootcampUseCase with injected dependencies
    ///
    /// # Arguments
    /// * `fan_out` - Concurrency limit and per-call timeout used for every
    ///   remote fan-out (existence check and both enrichment passes)
    pub fn new(repository: R, capacities: CA, technologies: TA, fan_out: FanOut) -> Self {
        Self {
            repository,
            capacities,
            technologies,
            verifier: ExternalIdVerifier::new(fan_out),
            enrichment: EnrichmentFanout::new(fan_out),
        }
    }

    /// Executes the registration pipeline
    ///
    /// Every synchronous rule is checked before any I/O; the store is written
    /// only after every check has passed.
    pub async fn register(
        &self,
        candidate: Option<BootcampCandidate>,
    ) -> Result<Bootcamp, BootcampError> {
        // Step 1: Field rules
        let new_bootcamp = RegistrationRules::validate(candidate).inspect_err(|e| {
            tracing::warn!(code = e.code(), param = e.param(), "registration rejected: {}", e);
        })?;

        // Step 2: Every referenced capacity must exist
        self.verifier
            .verify_all_exist(new_bootcamp.capacity_ids(), &self.capacities)
            .await?;

        // Step 3: Name must be free
        self.ensure_name_is_unique(new_bootcamp.name()).await?;

        // Step 4: Persist bootcamp and links as one unit
        let saved = self
            .repository
            .save(new_bootcamp)
            .await
            .map_err(Self::store_failure)?;

        tracing::info!(
            id = saved.id,
            name = %saved.name,
            capacities = saved.capacity_ids.len(),
            "bootcamp registered"
        );
        Ok(saved)
    }

    /// Builds one page of enriched bootcamps
    ///
    /// Items keep the order of the page slice returned by the store even
    /// though their enrichment runs concurrently.
    pub async fn list_page(
        &self,
        page: PageRequest,
        sort_by: SortBy,
        order: Order,
    ) -> Result<Page<BootcampListItem>, BootcampError> {
        // Step 1: Total and page slice, concurrently
        let (total, rows) = tokio::try_join!(
            self.repository.count_all(),
            self.repository.find_page(&page, sort_by, order)
        )
        .map_err(Self::store_failure)?;

        // Step 2: Attach capacity ids to the slice
        let rows = self.attach_capacity_ids(rows).await?;

        // Step 3: Enrich every bootcamp
        let items = join_all(rows.into_iter().map(|bootcamp| self.enrich(bootcamp))).await;

        Ok(Page::new(items, &page, total))
    }

    pub async fn list_all(&self) -> Result<Vec<Bootcamp>, BootcampError> {
        self.repository
            .find_all()
            .await
            .map_err(Self::store_failure)
    }

    pub async fn find_by_id(&self, id: BootcampId) -> Result<Option<Bootcamp>, BootcampError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::store_failure)
    }

    async fn ensure_name_is_unique(&self, name: &str) -> Result<(), BootcampError> {
        let exists = self
            .repository
            .exists_by_name(name)
            .await
            .map_err(Self::store_failure)?;

        if exists {
            tracing::warn!(name, "registration rejected: name already exists");
            return Err(BootcampError::AlreadyExists);
        }
        Ok(())
    }

    /// Fills `capacity_ids` for a page slice with a single store call
    async fn attach_capacity_ids(
        &self,
        mut rows: Vec<Bootcamp>,
    ) -> Result<Vec<Bootcamp>, BootcampError> {
        if rows.is_empty() {
            return Ok(rows);
        }

        let ids: Vec<BootcampId> = rows.iter().map(|b| b.id).collect();
        let links = self
            .repository
            .find_linked_ids_for_many(&ids)
            .await
            .map_err(Self::store_failure)?;

        let mut by_bootcamp: HashMap<BootcampId, Vec<CapacityId>> = HashMap::new();
        for (bootcamp_id, capacity_id) in links {
            by_bootcamp.entry(bootcamp_id).or_default().push(capacity_id);
        }

        for row in &mut rows {
            row.capacity_ids = by_bootcamp.remove(&row.id).unwrap_or_default();
        }
        Ok(rows)
    }

    async fn enrich(&self, bootcamp: Bootcamp) -> BootcampListItem {
        let capacities = self
            .enrichment
            .fetch_all(&bootcamp.capacity_ids, &self.capacities)
            .await;

        let mut summaries =
            join_all(capacities.into_iter().map(|c| self.summarize_capacity(c))).await;
        summaries.sort_by_key(|s| s.id);

        BootcampListItem::new(bootcamp, summaries)
    }

    async fn summarize_capacity(&self, capacity: Capacity) -> CapacitySummary {
        let mut technologies = self
            .enrichment
            .fetch_all(&capacity.technology_ids, &self.technologies)
            .await;
        technologies.sort_by_key(|t| t.id());

        CapacitySummary::new(capacity, technologies)
    }

    fn store_failure(err: anyhow::Error) -> BootcampError {
        tracing::error!(error = %format!("{err:#}"), "bootcamp store failure");
        BootcampError::internal(err)
    }
}

#[async_trait]
impl<R, CA, TA> BootcampServicePort for BootcampUseCase<R, CA, TA>
where
    R: BootcampRepository,
    CA: CapacityAuthority,
    TA: TechnologyAuthority,
{
    async fn register(
        &self,
        candidate: Option<BootcampCandidate>,
    ) -> Result<Bootcamp, BootcampError> {
        BootcampUseCase::register(self, candidate).await
    }

    async fn list_page(
        &self,
        page: PageRequest,
        sort_by: SortBy,
        order: Order,
    ) -> Result<Page<BootcampListItem>, BootcampError> {
        BootcampUseCase::list_page(self, page, sort_by, order).await
    }

    async fn list_all(&self) -> Result<Vec<Bootcamp>, BootcampError> {
        BootcampUseCase::list_all(self).await
    }

    async fn find_by_id(&self, id: BootcampId) -> Result<Option<Bootcamp>, BootcampError> {
        BootcampUseCase::find_by_id(self, id).await
    }
}
