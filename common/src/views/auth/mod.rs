use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response for the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthLoginResponse {
    /// Access token for authentication. Send it back as
    /// `Authorization: Bearer <token>` on protected routes.
    pub token: String,
}
