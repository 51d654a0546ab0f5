//! Authentication for the flightdeck API.
//!
//! `POST /api/v1/auth` goes through [`TokenIssuer`], which checks the
//! submitted credentials against the [`ConfiguredIdentity`] and signs a
//! short-lived token. Protected routes sit behind [`gate::require_bearer`],
//! which hands the presented token to [`TokenVerifier`] and attaches the
//! resulting identity to the request for the [`Auth`] extractor.

use std::sync::Arc;

pub mod claims;
pub mod credentials;
pub mod error;
pub mod extractor;
pub mod gate;
pub mod issuer;
pub mod signing;
pub mod verifier;

pub use claims::ClaimSet;
pub use credentials::{ConfiguredIdentity, CredentialVerifier};
pub use error::AuthError;
pub use extractor::Auth;
pub use issuer::TokenIssuer;
pub use signing::TokenSigner;
pub use verifier::TokenVerifier;

use crate::config::AuthSettings;

/// Build the issuer and verifier from validated settings. Both share one signer.
pub fn build(settings: AuthSettings) -> (TokenIssuer, TokenVerifier) {
    let signer = Arc::new(TokenSigner::new(&settings.secret, settings.algorithm));
    let issuer = TokenIssuer::new(
        CredentialVerifier::new(settings.identity),
        Arc::clone(&signer),
        settings.ttl,
    );
    (issuer, TokenVerifier::new(signer))
}
