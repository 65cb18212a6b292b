/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod network;
pub mod persistence;
