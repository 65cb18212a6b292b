use crate::bootcamp::domain::{BootcampCandidate, CapacityId, NewBootcamp};
use crate::shared::BootcampError;
use std::collections::HashSet;

pub const NAME_MAX_LENGTH: usize = 50;
pub const DESCRIPTION_MAX_LENGTH: usize = 255;
pub const MIN_CAPACITIES: usize = 1;
pub const MAX_CAPACITIES: usize = 4;

/// RegistrationRules policy for the synchronous part of bootcamp registration
///
/// Rules are evaluated in a fixed order and the first violation is returned:
/// 1. candidate present
/// 2. name present, non-blank, at most 50 characters
/// 3. description present, non-blank, at most 255 characters
/// 4. between 1 and 4 capacity ids
/// 5. capacity ids pairwise distinct
///
/// Validation performs no I/O and has no side effects, so running it twice on
/// the same candidate yields the same outcome.
pub struct RegistrationRules;

impl RegistrationRules {
    /// Validates a candidate and, on success, produces the value that the
    /// asynchronous stages of registration operate on.
    pub fn validate(candidate: Option<BootcampCandidate>) -> Result<NewBootcamp, BootcampError> {
        let candidate = candidate.ok_or(BootcampError::InvalidRequest)?;

        let name = Self::validate_name(candidate.name)?;
        let description = Self::validate_description(candidate.description)?;
        let capacity_ids = Self::validate_capacity_ids(candidate.capacity_ids.unwrap_or_default())?;

        Ok(NewBootcamp::new(
            name,
            description,
            candidate.launch_date,
            candidate.duration,
            capacity_ids,
        ))
    }

    fn validate_name(name: Option<String>) -> Result<String, BootcampError> {
        let name = name
            .filter(|n| !n.trim().is_empty())
            .ok_or(BootcampError::NameRequired)?;
        if name.chars().count() > NAME_MAX_LENGTH {
            return Err(BootcampError::NameTooLong);
        }
        Ok(name)
    }

    fn validate_description(description: Option<String>) -> Result<String, BootcampError> {
        let description = description
            .filter(|d| !d.trim().is_empty())
            .ok_or(BootcampError::DescriptionRequired)?;
        if description.chars().count() > DESCRIPTION_MAX_LENGTH {
            return Err(BootcampError::DescriptionTooLong);
        }
        Ok(description)
    }

    fn validate_capacity_ids(ids: Vec<CapacityId>) -> Result<Vec<CapacityId>, BootcampError> {
        if ids.len() < MIN_CAPACITIES {
            return Err(BootcampError::MinCapacities);
        }
        if ids.len() > MAX_CAPACITIES {
            return Err(BootcampError::MaxCapacities);
        }

        let distinct: HashSet<&CapacityId> = ids.iter().collect();
        if distinct.len() != ids.len() {
            return Err(BootcampError::InvalidParameters);
        }

        Ok(ids)
    }
}
