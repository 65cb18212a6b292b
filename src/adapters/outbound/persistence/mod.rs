/// Persistence adapters for the bootcamp store
mod in_memory_repository;

pub use in_memory_repository::InMemoryBootcampRepository;
