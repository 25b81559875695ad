//! Validation for smaller config sections: window.

use crate::schema::HeroConfig;

use super::helpers::validate_range;

/// Validate window constraints.
pub(crate) fn validate_window(errors: &mut Vec<String>, config: &HeroConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 7680);
    validate_range(errors, "window.height", config.window.height, 200, 4320);
}
