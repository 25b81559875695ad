//! Full configuration validation.
//!
//! Validates numeric ranges. Each domain has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod animation;
mod helpers;
mod misc;
mod transition;


use crate::schema::HeroConfig;
use hero_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HeroConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    misc::validate_window(&mut errors, config);
    animation::validate_animation(&mut errors, config);
    transition::validate_transition(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
