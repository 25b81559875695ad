//! Animation loop validation.

use crate::schema::HeroConfig;

use super::helpers::{validate_positive, validate_range_f64};

pub(crate) fn validate_animation(errors: &mut Vec<String>, config: &HeroConfig) {
    validate_positive(errors, "animation.time_step", config.animation.time_step);
    validate_range_f64(
        errors,
        "animation.time_step",
        config.animation.time_step,
        0.0,
        1.0,
    );
}
