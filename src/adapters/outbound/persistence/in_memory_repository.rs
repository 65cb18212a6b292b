use crate::bootcamp::domain::{
    Bootcamp, BootcampId, CapacityId, NewBootcamp, Order, PageRequest, SortBy,
};
use crate::ports::outbound::BootcampRepository;
use crate::shared::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use tokio::sync::RwLock;

/// Bootcamp row without its links
#[derive(Debug, Clone)]
struct BootcampRow {
    id: BootcampId,
    name: String,
    description: String,
    launch_date: Option<NaiveDate>,
    duration: Option<i32>,
}

#[derive(Debug, Default)]
struct Tables {
    next_id: BootcampId,
    bootcamps: BTreeMap<BootcampId, BootcampRow>,
    /// Link table keyed by (bootcamp id, capacity id)
    links: BTreeSet<(BootcampId, CapacityId)>,
}

impl Tables {
    fn linked_ids(&self, id: BootcampId) -> Vec<CapacityId> {
        self.links
            .range((id, CapacityId::MIN)..=(id, CapacityId::MAX))
            .map(|(_, capacity_id)| *capacity_id)
            .collect()
    }

    fn to_bootcamp(&self, row: &BootcampRow) -> Bootcamp {
        Bootcamp {
            id: row.id,
            name: row.name.clone(),
            description: row.description.clone(),
            launch_date: row.launch_date,
            duration: row.duration,
            capacity_ids: self.linked_ids(row.id),
        }
    }
}

/// InMemoryBootcampRepository adapter backing the store port with two tables
///
/// The bootcamp table and the link table live behind one lock, so a save
/// writes the row and all of its links in a single critical section and no
/// reader can observe a bootcamp with only some of its links. Linked ids are
/// returned in ascending capacity id order.
#[derive(Debug, Default)]
pub struct InMemoryBootcampRepository {
    tables: RwLock<Tables>,
}

impl InMemoryBootcampRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BootcampRepository for InMemoryBootcampRepository {
    async fn count_all(&self) -> Result<u64> {
        Ok(self.tables.read().await.bootcamps.len() as u64)
    }

    async fn find_page(
        &self,
        page: &PageRequest,
        sort_by: SortBy,
        order: Order,
    ) -> Result<Vec<Bootcamp>> {
        let tables = self.tables.read().await;

        let mut rows: Vec<(&BootcampRow, usize)> = tables
            .bootcamps
            .values()
            .map(|row| (row, tables.linked_ids(row.id).len()))
            .collect();

        let directed = |ordering: Ordering| match order {
            Order::Asc => ordering,
            Order::Desc => ordering.reverse(),
        };
        match sort_by {
            SortBy::Name => rows.sort_by(|(a, _), (b, _)| directed(a.name.cmp(&b.name))),
            // Ties always fall back to name ascending
            SortBy::CapacityCount => rows.sort_by(|(a, a_count), (b, b_count)| {
                directed(a_count.cmp(b_count)).then_with(|| a.name.cmp(&b.name))
            }),
        }

        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        Ok(rows
            .into_iter()
            .skip(offset)
            .take(page.limit() as usize)
            .map(|(row, _)| Bootcamp {
                id: row.id,
                name: row.name.clone(),
                description: row.description.clone(),
                launch_date: row.launch_date,
                duration: row.duration,
                capacity_ids: Vec::new(),
            })
            .collect())
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool> {
        Ok(self
            .tables
            .read()
            .await
            .bootcamps
            .values()
            .any(|row| row.name == name))
    }

    async fn save(&self, bootcamp: NewBootcamp) -> Result<Bootcamp> {
        let mut tables = self.tables.write().await;

        if tables.bootcamps.values().any(|row| row.name == bootcamp.name()) {
            anyhow::bail!("unique constraint violated: bootcamp name '{}'", bootcamp.name());
        }

        tables.next_id += 1;
        let id = tables.next_id;
        for capacity_id in bootcamp.capacity_ids() {
            tables.links.insert((id, *capacity_id));
        }
        tables.bootcamps.insert(
            id,
            BootcampRow {
                id,
                name: bootcamp.name().to_string(),
                description: bootcamp.description().to_string(),
                launch_date: bootcamp.launch_date(),
                duration: bootcamp.duration(),
            },
        );

        Ok(bootcamp.into_bootcamp(id))
    }

    async fn find_all(&self) -> Result<Vec<Bootcamp>> {
        let tables = self.tables.read().await;
        Ok(tables
            .bootcamps
            .values()
            .map(|row| tables.to_bootcamp(row))
            .collect())
    }

    async fn find_by_id(&self, id: BootcampId) -> Result<Option<Bootcamp>> {
        let tables = self.tables.read().await;
        Ok(tables.bootcamps.get(&id).map(|row| tables.to_bootcamp(row)))
    }

    async fn find_linked_ids(&self, id: BootcampId) -> Result<Vec<CapacityId>> {
        Ok(self.tables.read().await.linked_ids(id))
    }

    async fn find_linked_ids_for_many(
        &self,
        ids: &[BootcampId],
    ) -> Result<Vec<(BootcampId, CapacityId)>> {
        let ids: BTreeSet<BootcampId> = ids.iter().copied().collect();
        let tables = self.tables.read().await;
        let mut links: Vec<(BootcampId, CapacityId)> = ids
            .into_iter()
            .flat_map(|id| {
                tables
                    .linked_ids(id)
                    .into_iter()
                    .map(move |capacity_id| (id, capacity_id))
            })
            .collect();
        links.sort_by_key(|&(bootcamp_id, capacity_id)| (capacity_id, bootcamp_id));
        Ok(links)
    }
}
