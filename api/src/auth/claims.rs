//! Claims carried by flightdeck access tokens.

use std::time::Duration;

use chrono::{DateTime, Utc};
use flightdeck_common::identity::VerifiedIdentity;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the random subject minted on every login.
pub const SUBJECT_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSet {
    pub username: String,
    /// Random per-login subject, surfaced to handlers as the caller id
    pub sub: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl ClaimSet {
    /// Build claims for `username` with a freshly generated subject.
    pub fn new(username: impl Into<String>, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let iat = issued_at.timestamp();
        let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);

        Self {
            username: username.into(),
            sub: generate_subject(),
            iat,
            exp: iat.saturating_add(ttl_secs),
        }
    }

    pub fn into_identity(self) -> VerifiedIdentity {
        VerifiedIdentity {
            username: self.username,
            id: self.sub,
        }
    }
}

/// Eight lowercase hex characters taken from a v4 UUID.
pub fn generate_subject() -> String {
    let mut subject = Uuid::new_v4().simple().to_string();
    subject.truncate(SUBJECT_LEN);
    subject
}
