//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `url_rules`: base URL checks
//! - `config_validators`: validators for the configuration structures

mod config_validators;
mod trait_def;
mod url_rules;

pub use trait_def::Validate;
pub use url_rules::validate_api_url;
