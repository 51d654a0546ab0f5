use std::sync::Arc;

use flightdeck_common::identity::VerifiedIdentity;
use tracing::{debug, info};

use super::{error::AuthError, signing::TokenSigner};

/// Turns a presented token into the identity it was issued to.
pub struct TokenVerifier {
    signer: Arc<TokenSigner>,
}

impl TokenVerifier {
    pub fn new(signer: Arc<TokenSigner>) -> Self {
        Self { signer }
    }

    /// Verify `token` and project its claims onto a [`VerifiedIdentity`].
    ///
    /// Malformed, forged and expired tokens all fail with
    /// [`AuthError::InvalidToken`]. Only the kind of failure is logged.
    pub fn verify(&self, token: &str) -> Result<VerifiedIdentity, AuthError> {
        let claims = self.signer.verify(token).map_err(|e| {
            debug!(reason = ?e.kind(), "Token verification failed");
            AuthError::InvalidToken
        })?;

        info!(username = %claims.username, id = %claims.sub, "Token verified");
        Ok(claims.into_identity())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
    use chrono::Utc;
    use jsonwebtoken::Algorithm;

    use super::*;
    use crate::auth::claims::ClaimSet;

    fn setup() -> (Arc<TokenSigner>, TokenVerifier) {
        let signer = Arc::new(TokenSigner::new(b"verifier-test-secret", Algorithm::HS256));
        let verifier = TokenVerifier::new(signer.clone());
        (signer, verifier)
    }

    #[test]
    fn test_valid_token_yields_identity() {
        let (signer, verifier) = setup();
        let claims = ClaimSet::new("testuser", Utc::now(), Duration::from_secs(60));
        let token = signer.sign(&claims).unwrap();

        let identity = verifier.verify(&token).unwrap();
        assert_eq!(identity, VerifiedIdentity::new("testuser", claims.sub));
    }

    #[test]
    fn test_every_signature_bit_flip_is_rejected() {
        let (signer, verifier) = setup();
        let claims = ClaimSet::new("testuser", Utc::now(), Duration::from_secs(60));
        let token = signer.sign(&claims).unwrap();

        let (signed_part, signature_b64) = token.rsplit_once('.').unwrap();
        let signature = URL_SAFE_NO_PAD.decode(signature_b64).unwrap();

        for bit in 0..signature.len() * 8 {
            let mut flipped = signature.clone();
            flipped[bit / 8] ^= 1 << (bit % 8);
            let tampered = format!("{}.{}", signed_part, URL_SAFE_NO_PAD.encode(&flipped));

            assert!(
                matches!(verifier.verify(&tampered), Err(AuthError::InvalidToken)),
                "bit {bit} flip should be rejected"
            );
        }
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let (signer, verifier) = setup();
        let issued = Utc::now() - chrono::Duration::seconds(120);
        let claims = ClaimSet::new("testuser", issued, Duration::from_secs(60));
        let token = signer.sign(&claims).unwrap();

        let err = verifier.verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
        assert_eq!(err.to_string(), "Invalid token");
    }

    #[test]
    fn test_failures_share_one_message() {
        let (_, verifier) = setup();
        let other = TokenSigner::new(b"someone-else", Algorithm::HS256);
        let foreign = other
            .sign(&ClaimSet::new("testuser", Utc::now(), Duration::from_secs(60)))
            .unwrap();

        for token in ["", "garbage", "a.b.c", foreign.as_str()] {
            let err = verifier.verify(token).unwrap_err();
            assert_eq!(err.to_string(), "Invalid token");
        }
    }
}
