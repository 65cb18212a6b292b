/// Use cases module containing application business logic orchestration
mod bootcamp;
mod enrichment_fanout;
mod external_id_verifier;

pub use bootcamp::BootcampUseCase;
pub use enrichment_fanout::EnrichmentFanout;
pub use external_id_verifier::ExternalIdVerifier;
