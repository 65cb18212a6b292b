//! Bootcamp domain: entities, registration rules and the fan-out primitive
//! shared by both external authorities.

pub mod domain;
pub mod policies;
pub mod services;
