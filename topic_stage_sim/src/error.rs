// Error taxonomy for the sampling and choreography core.
//
// All four variants are terminal for the run that raised them: they indicate
// a configuration or programming defect, not a transient condition, so
// nothing is retried and no emitted events are rolled back. The engine
// surfaces the first error and stops producing events.

/// Errors surfaced by configuration validation, sampling, addressing, and
/// the choreography engine.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// Malformed or missing probability configuration: vectors not summing
    /// to 1, mismatched vocabulary sizes, absent document entries.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Degenerate distribution (empty, or sum ≈ 0) or a uniform input
    /// outside `[0, 1)`.
    #[error("sampling failed: {0}")]
    Sampling(String),

    /// A coordinate outside the declared bounds of the scene.
    #[error("address out of bounds: {what} {index} (limit {limit})")]
    Address {
        what: &'static str,
        index: usize,
        limit: usize,
    },

    /// An event was requested after the choreography reached `Done`.
    #[error("event requested after the choreography finished")]
    SequenceExhausted,
}

pub type Result<T> = std::result::Result<T, SceneError>;
