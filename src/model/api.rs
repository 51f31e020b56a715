use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for operations that only report an outcome
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    /// A human readable outcome message
    pub message: String,
}
