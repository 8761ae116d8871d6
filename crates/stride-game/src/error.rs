/// Errors raised while setting up locomotion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocomotionError {
    #[error("locomotion parameter `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    #[error("locomotion parameter `{name}` must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
}
