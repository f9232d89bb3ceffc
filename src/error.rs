use thiserror::Error;

/// Errors raised before any samples are rendered.
///
/// Synthesis itself cannot fail once parameters are accepted, so every
/// variant here describes a caller mistake.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SynthError {
    #[error("invalid parameter `{name}`: {value} (must be positive and finite)")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("unknown recipe `{0}`")]
    UnknownRecipe(String),
}

impl SynthError {
    /// Reject non-positive or non-finite values.
    pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, SynthError> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(SynthError::InvalidParameter { name, value })
        }
    }
}
