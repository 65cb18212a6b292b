/// Network adapters for the capacity and technology services
mod authority_client;
mod capacity_client;
mod technology_client;

pub use authority_client::AuthorityClient;
pub use capacity_client::CapacityServiceClient;
pub use technology_client::TechnologyServiceClient;
