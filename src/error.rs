use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExerciseError {
    #[error("State count must be at least 1, got {0}")]
    EmptyStateSpace(u32),

    #[error("Episode must contain at least one state")]
    EmptyEpisode,

    #[error("Transition ({from}, {to}) names a state outside 1..={state_count}")]
    TransitionOutOfRange { from: u32, to: u32, state_count: u32 },

    #[error("Project {project} is outside 1..={project_count}")]
    UnknownProject { project: u32, project_count: u32 },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Shorthand for results whose error is [`ExerciseError`].
pub type Result<T> = std::result::Result<T, ExerciseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_out_of_range_display() {
        let err = ExerciseError::TransitionOutOfRange {
            from: 4,
            to: 1,
            state_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "Transition (4, 1) names a state outside 1..=3"
        );
    }

    #[test]
    fn toml_error_converts() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("= broken");
        let err: ExerciseError = parse.unwrap_err().into();
        assert!(matches!(err, ExerciseError::Toml(_)));
    }
}
