use crate::uniforms::UniformKind;

/// Errors raised while mutating scene state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("unknown uniform: {0}")]
    UnknownUniform(String),

    #[error("uniform {name} is {expected:?}, got {actual:?}")]
    UniformKindMismatch {
        name: String,
        expected: UniformKind,
        actual: UniformKind,
    },

    #[error("scene has no background plane")]
    NoBackground,
}

impl From<SceneError> for hero_common::HeroError {
    fn from(e: SceneError) -> Self {
        hero_common::HeroError::Scene(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_error_display() {
        let err = SceneError::UnknownUniform("speed".into());
        assert_eq!(err.to_string(), "unknown uniform: speed");

        let err = SceneError::UniformKindMismatch {
            name: "time".into(),
            expected: UniformKind::Float,
            actual: UniformKind::Vec2,
        };
        assert_eq!(err.to_string(), "uniform time is Float, got Vec2");

        assert_eq!(
            SceneError::NoBackground.to_string(),
            "scene has no background plane"
        );
    }

    #[test]
    fn scene_error_rolls_up_into_hero_error() {
        let err: hero_common::HeroError = SceneError::NoBackground.into();
        assert_eq!(err.to_string(), "scene error: scene has no background plane");
    }
}
