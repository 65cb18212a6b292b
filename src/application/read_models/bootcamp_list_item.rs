//! Listing views for bootcamps
//!
//! These structs provide a denormalized view of a bootcamp together with the
//! capacities and technologies fetched from the external authorities.

use crate::bootcamp::domain::{Bootcamp, BootcampId, Capacity, CapacityId, Technology};
use chrono::NaiveDate;
use serde::Serialize;

/// View of one bootcamp in a listing page
///
/// `capacity_count` counts only the capacities that were fetched successfully,
/// so a transient failure of the capacity service lowers it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootcampListItem {
    pub id: BootcampId,
    pub name: String,
    pub description: String,
    pub launch_date: Option<NaiveDate>,
    pub duration: Option<i32>,
    pub capacity_count: usize,
    pub capacities: Vec<CapacitySummary>,
}

/// View of a capacity with its fetched technologies
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacitySummary {
    pub id: CapacityId,
    pub name: String,
    pub description: String,
    pub tech_count: usize,
    pub technologies: Vec<Technology>,
}

impl BootcampListItem {
    pub fn new(bootcamp: Bootcamp, capacities: Vec<CapacitySummary>) -> Self {
        Self {
            id: bootcamp.id,
            name: bootcamp.name,
            description: bootcamp.description,
            launch_date: bootcamp.launch_date,
            duration: bootcamp.duration,
            capacity_count: capacities.len(),
            capacities,
        }
    }
}

impl CapacitySummary {
    pub fn new(capacity: Capacity, technologies: Vec<Technology>) -> Self {
        Self {
            id: capacity.id,
            name: capacity.name,
            description: capacity.description,
            tech_count: technologies.len(),
            technologies,
        }
    }
}
