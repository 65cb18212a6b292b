pub mod fan_out;

pub use fan_out::{FailurePolicy, FanOut, FanOutError};
