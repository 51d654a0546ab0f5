use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The caller behind a request that passed the bearer gate.
///
/// Built from the claims of a token whose signature and expiry were checked,
/// and dropped when the request completes. `id` is the subject minted at
/// login, so it changes with every new token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VerifiedIdentity {
    /// The configured username the token was issued to.
    pub username: String,

    /// The token subject.
    pub id: String,
}

impl VerifiedIdentity {
    pub fn new(username: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            id: id.into(),
        }
    }
}
