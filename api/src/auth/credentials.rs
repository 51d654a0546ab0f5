use std::{fmt, time::Duration};

use chrono::{DateTime, Utc};
use flightdeck_common::params::AuthLoginParams;

use super::{claims::ClaimSet, error::AuthError};

/// The one identity allowed to log in, fixed for the life of the process.
#[derive(Clone, PartialEq, Eq)]
pub struct ConfiguredIdentity {
    username: String,
    password: String,
}

impl ConfiguredIdentity {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for ConfiguredIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfiguredIdentity")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Checks login credentials against the [`ConfiguredIdentity`].
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    identity: ConfiguredIdentity,
}

impl CredentialVerifier {
    pub fn new(identity: ConfiguredIdentity) -> Self {
        Self { identity }
    }

    /// Compare `credentials` with the configured identity and, on a match,
    /// mint a fresh claim set valid from `issued_at` for `ttl`.
    ///
    /// A wrong username and a wrong password produce the same error.
    pub fn verify(
        &self,
        credentials: &AuthLoginParams,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<ClaimSet, AuthError> {
        // Both fields are always compared.
        let username_ok = constant_time_eq(
            credentials.username.as_bytes(),
            self.identity.username.as_bytes(),
        );
        let password_ok = constant_time_eq(
            credentials.password.as_bytes(),
            self.identity.password.as_bytes(),
        );

        if !(username_ok & password_ok) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(ClaimSet::new(&self.identity.username, issued_at, ttl))
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(3600);

    fn verifier() -> CredentialVerifier {
        CredentialVerifier::new(ConfiguredIdentity::new("testuser", "testpassword1"))
    }

    fn login(username: &str, password: &str) -> AuthLoginParams {
        AuthLoginParams {
            username: username.into(),
            password: password.into(),
        }
    }

    #[test]
    fn test_matching_credentials_produce_claims() {
        let now = Utc::now();
        let claims = verifier()
            .verify(&login("testuser", "testpassword1"), now, TTL)
            .unwrap();

        assert_eq!(claims.username, "testuser");
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp, now.timestamp() + 3600);
    }

    #[test]
    fn test_mismatches_are_indistinguishable() {
        let cases = [
            login("testuser", "wrong"),
            login("someone", "testpassword1"),
            login("someone", "wrong"),
            login("testuser", ""),
            login("", ""),
            login("TESTUSER", "testpassword1"),
            login("testuser", "testpassword1 "),
        ];

        for case in cases {
            let err = verifier().verify(&case, Utc::now(), TTL).unwrap_err();
            assert!(
                matches!(err, AuthError::InvalidCredentials),
                "expected InvalidCredentials for {case:?}"
            );
            assert_eq!(err.to_string(), "Invalid credentials");
        }
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(constant_time_eq(b"", b""));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
    }

    #[test]
    fn test_identity_debug_hides_password() {
        let rendered = format!("{:?}", verifier());
        assert!(rendered.contains("testuser"));
        assert!(!rendered.contains("testpassword1"));
    }
}
