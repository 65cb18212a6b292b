use bootcamp_service::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Mock capacity service for testing
#[derive(Default)]
pub struct MockCapacityAuthority {
    pub capacities: HashMap<i64, Capacity>,
    pub failing_ids: HashSet<i64>,
    pub slow_ids: HashSet<i64>,
    pub calls: AtomicUsize,
}

impl MockCapacityAuthority {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, id: i64, name: &str, technology_ids: Vec<i64>) -> Self {
        self.capacities.insert(
            id,
            Capacity {
                id,
                name: name.to_string(),
                description: format!("{} description", name),
                technology_ids,
            },
        );
        self
    }

    pub fn with_failure_on(mut self, id: i64) -> Self {
        self.failing_ids.insert(id);
        self
    }

    pub fn with_delay_on(mut self, id: i64) -> Self {
        self.slow_ids.insert(id);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Authority for MockCapacityAuthority {
    type Entity = Capacity;

    fn resource(&self) -> &'static str {
        "capacities"
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Option<Capacity>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.slow_ids.contains(&id) {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
        if self.failing_ids.contains(&id) {
            anyhow::bail!("Mock capacity service failure for id {}", id);
        }
        Ok(self.capacities.get(&id).cloned())
    }
}
