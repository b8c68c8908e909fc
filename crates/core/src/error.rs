#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A place, a weather payload, or a record could not be resolved.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    /// An upstream provider (geocoding or weather) failed or timed out.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}
