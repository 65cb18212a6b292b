use bootcamp_service::prelude::*;
use std::collections::{HashMap, HashSet};

/// Mock technology service for testing
#[derive(Default)]
pub struct MockTechnologyAuthority {
    pub technologies: HashMap<i64, Technology>,
    pub failing_ids: HashSet<i64>,
}

impl MockTechnologyAuthority {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_technology(mut self, id: i64, name: &str) -> Self {
        self.technologies.insert(
            id,
            Technology {
                id,
                name: name.to_string(),
                description: format!("{} description", name),
            },
        );
        self
    }

    pub fn with_failure_on(mut self, id: i64) -> Self {
        self.failing_ids.insert(id);
        self
    }
}

#[async_trait::async_trait]
impl Authority for MockTechnologyAuthority {
    type Entity = Technology;

    fn resource(&self) -> &'static str {
        "technologies"
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Option<Technology>> {
        if self.failing_ids.contains(&id) {
            anyhow::bail!("Mock technology service failure for id {}", id);
        }
        Ok(self.technologies.get(&id).cloned())
    }
}
