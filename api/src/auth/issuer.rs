use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use flightdeck_common::params::AuthLoginParams;
use tracing::{info, instrument, warn};

use super::{credentials::CredentialVerifier, error::AuthError, signing::TokenSigner};

/// Turns a successful login into a signed access token.
pub struct TokenIssuer {
    credentials: CredentialVerifier,
    signer: Arc<TokenSigner>,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(credentials: CredentialVerifier, signer: Arc<TokenSigner>, ttl: Duration) -> Self {
        Self {
            credentials,
            signer,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Verify `credentials` and issue a token valid from now.
    pub fn issue(&self, credentials: &AuthLoginParams) -> Result<String, AuthError> {
        self.issue_at(credentials, Utc::now())
    }

    /// Verify `credentials` and issue a token whose validity starts at `issued_at`.
    #[instrument(skip_all, fields(username = %credentials.username))]
    pub fn issue_at(
        &self,
        credentials: &AuthLoginParams,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let claims = self
            .credentials
            .verify(credentials, issued_at, self.ttl)
            .inspect_err(|_| warn!("Login rejected"))?;

        let token = self.signer.sign(&claims).map_err(AuthError::Signing)?;

        info!(id = %claims.sub, exp = claims.exp, "Issued access token");
        Ok(token)
    }
}
