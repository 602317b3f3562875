// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper. Store failures never carry details.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling: `EMPTY_INPUT`,
    /// `MISSING_REQUIRED_FIELDS`, `VALIDATION_ERROR`, `NOT_FOUND` or
    /// `INTERNAL_ERROR`
    #[schema(example = "EMPTY_INPUT")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Provide 'input' field in body")]
    pub message: String,
}
