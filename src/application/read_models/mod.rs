//! Read models for the listing path
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of bootcamps for queries.

pub mod bootcamp_list_item;

pub use bootcamp_list_item::{BootcampListItem, CapacitySummary};
