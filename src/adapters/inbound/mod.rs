/// Inbound adapters - Entry points driving the application
pub mod http;
