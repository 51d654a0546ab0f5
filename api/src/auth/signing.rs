//! HMAC-signed JWTs for flightdeck access tokens.
//!
//! Tokens are compact JWS strings (`header.payload.signature`). Verification
//! pins the algorithm chosen at startup, so a token whose header names any
//! other algorithm is rejected before its signature is looked at.

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::Error,
};

use super::claims::ClaimSet;

pub struct TokenSigner {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenSigner {
    pub fn new(secret: &[u8], algorithm: Algorithm) -> Self {
        let mut validation = Validation::new(algorithm);
        // A token is valid up to and including its `exp` second, no later.
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Sign `claims`, producing an opaque token string.
    pub fn sign(&self, claims: &ClaimSet) -> Result<String, Error> {
        encode(&Header::new(self.algorithm), claims, &self.encoding_key)
    }

    /// Check the signature and expiry of `token` and return its claims.
    ///
    /// The error carries the specific cause; callers facing clients must not
    /// pass it on.
    pub fn verify(&self, token: &str) -> Result<ClaimSet, Error> {
        decode::<ClaimSet>(token, &self.decoding_key, &self.validation).map(|data| data.claims)
    }
}
