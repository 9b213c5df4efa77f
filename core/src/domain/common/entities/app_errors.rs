use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Incomplete product data: nutriments and ingredients are both missing")]
    IncompleteData,

    #[error("Product analysis failed")]
    AnalysisFailed,

    #[error("Meal plan generation failed")]
    GenerationFailed,

    #[error("Failed to read persisted state: {0}")]
    PersistenceReadError(String),

    #[error("Failed to write persisted state: {0}")]
    PersistenceWriteError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// Terminal failure of a resolution pipeline, carrying the user-facing message.
    #[error("{0}")]
    Resolution(String),

    #[error("Invalid input")]
    Invalid,

    #[error("Internal server error")]
    InternalServerError,
}
