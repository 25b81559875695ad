//! Transition validation: tween bounds.

use crate::schema::HeroConfig;

use super::helpers::{validate_positive, validate_range};

/// Validate transition constraints.
///
/// `target_url` is not checked here: an unusable URL only disables
/// navigation and must not invalidate the rest of the file.
pub(crate) fn validate_transition(errors: &mut Vec<String>, config: &HeroConfig) {
    let t = &config.transition;
    validate_range(errors, "transition.duration_ms", t.duration_ms, 1, 60_000);
    validate_positive(errors, "transition.target_scale", t.target_scale);

    if !t.camera_pullback.is_finite() {
        errors.push(format!(
            "transition.camera_pullback = {} must be finite",
            t.camera_pullback
        ));
    }
}
