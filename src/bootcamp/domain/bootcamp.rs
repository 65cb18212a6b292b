use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type BootcampId = i64;
pub type CapacityId = i64;
pub type TechnologyId = i64;

/// Unvalidated registration input as received from a client.
///
/// Every field is optional so that the registration pipeline, not the
/// deserializer, decides which rule a missing value violates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootcampCandidate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub launch_date: Option<NaiveDate>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub capacity_ids: Option<Vec<CapacityId>>,
}

impl BootcampCandidate {
    pub fn new(name: &str, description: &str, capacity_ids: Vec<CapacityId>) -> Self {
        Self {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            launch_date: None,
            duration: None,
            capacity_ids: Some(capacity_ids),
        }
    }

    pub fn with_launch_date(mut self, launch_date: NaiveDate) -> Self {
        self.launch_date = Some(launch_date);
        self
    }

    pub fn with_duration(mut self, duration: i32) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// A bootcamp that passed every synchronous rule and has not been stored yet.
///
/// Only [`crate::bootcamp::policies::RegistrationRules`] constructs this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBootcamp {
    name: String,
    description: String,
    launch_date: Option<NaiveDate>,
    duration: Option<i32>,
    capacity_ids: Vec<CapacityId>,
}

impl NewBootcamp {
    pub(crate) fn new(
        name: String,
        description: String,
        launch_date: Option<NaiveDate>,
        duration: Option<i32>,
        capacity_ids: Vec<CapacityId>,
    ) -> Self {
        Self {
            name,
            description,
            launch_date,
            duration,
            capacity_ids,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn launch_date(&self) -> Option<NaiveDate> {
        self.launch_date
    }

    pub fn duration(&self) -> Option<i32> {
        self.duration
    }

    pub fn capacity_ids(&self) -> &[CapacityId] {
        &self.capacity_ids
    }

    /// Attaches the identifier assigned by the store.
    pub fn into_bootcamp(self, id: BootcampId) -> Bootcamp {
        Bootcamp {
            id,
            name: self.name,
            description: self.description,
            launch_date: self.launch_date,
            duration: self.duration,
            capacity_ids: self.capacity_ids,
        }
    }
}

/// A persisted bootcamp.
///
/// `capacity_ids` order is not stable across reloads from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bootcamp {
    pub id: BootcampId,
    pub name: String,
    pub description: String,
    pub launch_date: Option<NaiveDate>,
    pub duration: Option<i32>,
    pub capacity_ids: Vec<CapacityId>,
}
