//! bootcamp-service - Bootcamp registration and listing service
//!
//! This library registers bootcamps after cross-checking their capacities
//! against a remote capacity service, and serves paginated listings enriched
//! with capacity and technology details fetched from the remote services.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`bootcamp`): Domain models, registration rules and the fan-out primitive
//! - **Application Layer** (`application`): Use cases and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP entry point, remote clients and the store
//! - **Shared** (`shared`): Common error and result types
//!
//! # Example
//!
//! ```no_run
//! use bootcamp_service::prelude::*;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<()> {
//! let fan_out = FanOut::default();
//! let capacities = CapacityServiceClient::new("http://localhost:8081", Duration::from_secs(5))?;
//! let technologies = TechnologyServiceClient::new("http://localhost:8082", Duration::from_secs(5))?;
//!
//! let use_case = BootcampUseCase::new(
//!     InMemoryBootcampRepository::new(),
//!     capacities,
//!     technologies,
//!     fan_out,
//! );
//!
//! let candidate = BootcampCandidate::new("Java Track", "Backend path", vec![10, 20]);
//! let saved = use_case.register(Some(candidate)).await?;
//! println!("registered bootcamp {}", saved.id);
//!
//! let router = routes(Arc::new(use_case));
//! # let _ = router;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod bootcamp;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::http::{routes, serve};
    pub use crate::adapters::outbound::network::{CapacityServiceClient, TechnologyServiceClient};
    pub use crate::adapters::outbound::persistence::InMemoryBootcampRepository;
    pub use crate::application::read_models::{BootcampListItem, CapacitySummary};
    pub use crate::application::use_cases::BootcampUseCase;
    pub use crate::bootcamp::domain::{
        Bootcamp, BootcampCandidate, Capacity, Order, Page, PageRequest, SortBy, Technology,
    };
    pub use crate::bootcamp::services::{FailurePolicy, FanOut};
    pub use crate::ports::inbound::BootcampServicePort;
    pub use crate::ports::outbound::{Authority, BootcampRepository};
    pub use crate::shared::{BootcampError, Result};
}
