use thiserror::Error;

/// Per-request authentication failures.
///
/// The display strings are what clients see, so they must stay generic.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Token missing")]
    MissingToken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

impl AuthError {
    /// Whether this error should be reported to the client as 401.
    pub fn is_unauthorized(&self) -> bool {
        !matches!(self, Self::Signing(_))
    }
}
