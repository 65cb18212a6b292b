/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the bootcamp store and the external capacity and technology
/// services.
pub mod authority;
pub mod bootcamp_repository;

pub use authority::{Authority, CapacityAuthority, TechnologyAuthority};
pub use bootcamp_repository::BootcampRepository;
