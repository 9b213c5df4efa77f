use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nutriscan_core::domain::{
    common::entities::app_errors::CoreError, meal_plan::MEAL_PLAN_FAILED_MESSAGE,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::NotFound(_) => "E_NOT_FOUND",
            ApiError::UnprocessableEntity(_) => "E_UNPROCESSABLE_ENTITY",
            ApiError::ServiceUnavailable(_) => "E_SERVICE_UNAVAILABLE",
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Resolution(message) => ApiError::UnprocessableEntity(message),
            CoreError::GenerationFailed => {
                ApiError::UnprocessableEntity(MEAL_PLAN_FAILED_MESSAGE.to_string())
            }
            CoreError::IncompleteData | CoreError::AnalysisFailed => {
                ApiError::UnprocessableEntity(error.to_string())
            }
            CoreError::Invalid => ApiError::BadRequest(error.to_string()),
            CoreError::ProductNotFound => ApiError::NotFound(error.to_string()),
            CoreError::ExternalServiceError(_) => ApiError::ServiceUnavailable(error.to_string()),
            CoreError::PersistenceReadError(_)
            | CoreError::PersistenceWriteError(_)
            | CoreError::InternalServerError => {
                tracing::error!("Internal error: {}", error);
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ApiErrorResponse {
            code: self.code().to_string(),
            status: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that runs `validator` rules before the handler sees the payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(format!("Validation error: {}", e)))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_failure_keeps_user_message() {
        let error = ApiError::from(CoreError::Resolution(
            "Sorry, I couldn't find or analyze this product.".to_string(),
        ));

        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            error.to_string(),
            "Sorry, I couldn't find or analyze this product."
        );
    }

    #[test]
    fn test_generation_failure_uses_fixed_message() {
        let error = ApiError::from(CoreError::GenerationFailed);

        assert_eq!(
            error,
            ApiError::UnprocessableEntity(MEAL_PLAN_FAILED_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_persistence_errors_are_not_leaked() {
        let error = ApiError::from(CoreError::PersistenceWriteError(
            "/var/lib/nutriscan: permission denied".to_string(),
        ));

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!error.to_string().contains("/var/lib"));
    }
}
