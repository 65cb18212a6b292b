pub mod registration_rules;

pub use registration_rules::RegistrationRules;
