//! Read-only views of entities owned by the capacity and technology services.

use super::bootcamp::{CapacityId, TechnologyId};
use serde::Serialize;

/// Anything fetched from an authority by numeric id.
pub trait Identified {
    fn id(&self) -> i64;
}

/// Projection of a capacity: only the fields this service reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capacity {
    pub id: CapacityId,
    pub name: String,
    pub description: String,
    pub technology_ids: Vec<TechnologyId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Technology {
    pub id: TechnologyId,
    pub name: String,
    pub description: String,
}

impl Identified for Capacity {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Technology {
    fn id(&self) -> i64 {
        self.id
    }
}
