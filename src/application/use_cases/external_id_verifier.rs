use crate::bootcamp::services::FanOut;
use crate::ports::outbound::Authority;
use crate::shared::BootcampError;
use std::collections::HashSet;

/// Strict, all-or-nothing existence check against an authority.
///
/// Any transport failure or timeout fails the check as an adapter failure;
/// any id the authority does not confirm fails it as `CapacityNotFound`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalIdVerifier {
    fan_out: FanOut,
}

impl ExternalIdVerifier {
    pub fn new(fan_out: FanOut) -> Self {
        Self { fan_out }
    }

    pub async fn verify_all_exist<A>(&self, ids: &[i64], authority: &A) -> Result<(), BootcampError>
    where
        A: Authority + ?Sized,
    {
        let requested: HashSet<i64> = ids.iter().copied().collect();
        if requested.is_empty() {
            return Ok(());
        }

        let confirmed: HashSet<i64> = authority
            .find_existing_ids(ids, &self.fan_out)
            .await
            .map_err(|e| {
                tracing::error!(
                    resource = authority.resource(),
                    error = %e,
                    "existence check aborted"
                );
                BootcampError::adapter(e)
            })?
            .into_iter()
            .collect();

        let missing: Vec<i64> = requested.difference(&confirmed).copied().collect();
        if !missing.is_empty() {
            tracing::warn!(
                resource = authority.resource(),
                ?missing,
                "referenced ids do not exist"
            );
            return Err(BootcampError::CapacityNotFound);
        }

        Ok(())
    }
}
