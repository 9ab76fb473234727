//! Token endpoint DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /auth/token`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TokenRequest {
    /// Client-chosen subject for the issued token.
    pub username: Option<String>,
    /// Accepted but not checked; credential validation sits outside
    /// this service.
    pub password: Option<String>,
}

/// Successful token issuance response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TokenResponse {
    /// Signed JWT to present as a bearer credential.
    pub access_token: String,
    /// Always `Bearer`.
    pub token_type: String,
    /// Token lifetime in seconds.
    pub expires_in: u64,
}
