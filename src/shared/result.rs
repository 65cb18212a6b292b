/// Result alias used by adapters and bootstrap code, where failures are
/// reported with context rather than mapped to a [`crate::shared::BootcampError`].
pub type Result<T> = std::result::Result<T, anyhow::Error>;
