/// Mock implementations for testing
mod mock_capacity_authority;
mod mock_technology_authority;

pub use mock_capacity_authority::MockCapacityAuthority;
pub use mock_technology_authority::MockTechnologyAuthority;
