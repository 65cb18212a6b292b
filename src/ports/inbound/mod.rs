/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., the HTTP
/// layer) use to interact with the application core.
pub mod bootcamp_service_port;

pub use bootcamp_service_port::BootcampServicePort;
