pub mod error;
pub mod result;

pub use error::{BootcampError, ErrorKind, ExitCode};
pub use result::Result;
