use std::fmt;
use thiserror::Error;

/// Exit codes for the service binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Clean shutdown
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Startup failure (configuration, bind, client construction)
    StartupError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::StartupError => write!(f, "Startup Error (3)"),
        }
    }
}

/// Broad classification of a [`BootcampError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Field-level problem with the request
    Validation,
    /// Name already taken
    Conflict,
    /// A referenced capacity does not exist
    Referential,
    /// An external authority could not be reached or answered badly
    Adapter,
    /// Anything else (store failures)
    Internal,
}

/// Failures surfaced by the bootcamp use cases.
///
/// Every variant maps to a machine-readable code, a human-readable message
/// (the `Display` text) and, where it applies, the offending field name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootcampError {
    #[error("Bad Request, please verify data")]
    InvalidRequest,

    #[error("Bad Parameters, please verify data")]
    InvalidParameters,

    #[error("Bootcamp name is required")]
    NameRequired,

    #[error("Bootcamp name max length is 50")]
    NameTooLong,

    #[error("Bootcamp description is required")]
    DescriptionRequired,

    #[error("Bootcamp description max length is 255")]
    DescriptionTooLong,

    #[error("A bootcamp must have at least 1 capacity")]
    MinCapacities,

    #[error("A bootcamp must have at most 4 capacities")]
    MaxCapacities,

    #[error("Page must be greater than or equal to 0")]
    InvalidPage,

    #[error("Size must be between 1 and 100")]
    InvalidPageSize,

    #[error("Some capacity IDs do not exist")]
    CapacityNotFound,

    #[error("Bootcamp name already exists")]
    AlreadyExists,

    #[error("Something went wrong in adapters, please try again")]
    AdapterFailure { details: String },

    #[error("Something went wrong, please try again")]
    Internal { details: String },
}

const CAPACITY_IDS_PARAM: &str = "capacityIds";

impl BootcampError {
    pub fn internal(err: impl fmt::Display) -> Self {
        BootcampError::Internal {
            details: err.to_string(),
        }
    }

    pub fn adapter(err: impl fmt::Display) -> Self {
        BootcampError::AdapterFailure {
            details: err.to_string(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            BootcampError::CapacityNotFound => "404",
            BootcampError::AdapterFailure { .. } => "PRC501",
            BootcampError::Internal { .. } => "500",
            _ => "400",
        }
    }

    /// Field the failure refers to, if any.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            BootcampError::NameRequired
            | BootcampError::NameTooLong
            | BootcampError::AlreadyExists => Some("name"),
            BootcampError::DescriptionRequired | BootcampError::DescriptionTooLong => {
                Some("description")
            }
            BootcampError::MinCapacities
            | BootcampError::MaxCapacities
            | BootcampError::InvalidParameters
            | BootcampError::CapacityNotFound => Some(CAPACITY_IDS_PARAM),
            BootcampError::InvalidPage => Some("page"),
            BootcampError::InvalidPageSize => Some("size"),
            BootcampError::InvalidRequest
            | BootcampError::AdapterFailure { .. }
            | BootcampError::Internal { .. } => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BootcampError::AlreadyExists => ErrorKind::Conflict,
            BootcampError::CapacityNotFound => ErrorKind::Referential,
            BootcampError::AdapterFailure { .. } => ErrorKind::Adapter,
            BootcampError::Internal { .. } => ErrorKind::Internal,
            _ => ErrorKind::Validation,
        }
    }

    /// Whether the caller caused this failure (as opposed to the system).
    pub fn is_client_error(&self) -> bool {
        !matches!(self.kind(), ErrorKind::Adapter | ErrorKind::Internal)
    }
}
