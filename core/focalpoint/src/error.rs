use thiserror::Error;

#[derive(Debug, Error)]
pub enum FocusError {
    #[error("failed to parse detection response: {0}")]
    MalformedResponse(String),

    #[error("label {label:?}: {field} is not a finite number")]
    NonFiniteLabelField { label: String, field: &'static str },

    #[error("label {label:?} instance {index}: {field} is not a finite number")]
    NonFiniteInstanceField {
        label: String,
        index: usize,
        field: &'static str,
    },

    #[error("aspect ratio must be finite and positive, got {0}")]
    InvalidAspect(f64),

    #[error("source dimensions are zero")]
    ZeroDimensions,
}
