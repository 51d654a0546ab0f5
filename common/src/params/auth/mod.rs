use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Validate, ValidationError};

#[derive(Clone, Deserialize, Serialize, ToSchema)]
pub struct AuthLoginParams {
    /// The username to authenticate as.
    #[schema(example = "johndoe")]
    pub username: String,

    /// The password of the user to authenticate as.
    #[schema(example = "SecureP@ss123")]
    pub password: String,
}

impl fmt::Debug for AuthLoginParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthLoginParams")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Validate for AuthLoginParams {
    /// Both fields only need to be strings, which deserialization already
    /// guarantees. Empty values are left to the credential check.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
