use std::{net::SocketAddr, str::FromStr, time::Duration};

use clap::Parser;
use jsonwebtoken::Algorithm;
use thiserror::Error;

use crate::auth::ConfiguredIdentity;

/// Special `--mongodb-uri` value that selects the in-process flight store.
pub const MEMORY_STORAGE_URI: &str = "memory";

#[derive(Clone, Debug, Parser)]
pub struct FlightdeckApiConfig {
    #[clap(
        short,
        long,
        env = "FLIGHTDECK_BIND_ADDR",
        default_value = "0.0.0.0:3000"
    )]
    pub bind_addr: SocketAddr,

    /// Origin allowed to make credentialed cross-origin requests.
    #[clap(
        long,
        env = "FLIGHTDECK_PUBLIC_URL",
        default_value = "http://localhost:3000"
    )]
    pub public_url: String,

    #[clap(long, default_value_t = false)]
    pub dump_openapi: bool,

    /// MongoDB connection string, or `memory` for a throwaway in-process store.
    #[clap(
        long,
        env = "FLIGHTDECK_MONGODB_URI",
        default_value = "mongodb://localhost:27017"
    )]
    pub mongodb_uri: String,

    #[clap(long, env = "FLIGHTDECK_DB_NAME", default_value = "flightdeck")]
    pub db_name: String,

    #[clap(long, env = "FLIGHTDECK_DB_FLIGHTS", default_value = "flights")]
    pub flights_collection: String,

    /// Shared secret used to sign and verify access tokens.
    #[clap(long, env = "FLIGHTDECK_JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// How long an access token stays valid, e.g. `3600s`, `15m`, `7d`,
    /// `2 days`. A bare number is read as milliseconds.
    #[clap(long, env = "FLIGHTDECK_JWT_EXPIRATION", default_value = "3600s")]
    pub jwt_expiration: String,

    /// HMAC algorithm used for access tokens: HS256, HS384 or HS512.
    #[clap(long, env = "FLIGHTDECK_JWT_ALGORITHM", default_value = "HS256")]
    pub jwt_algorithm: String,

    /// Username of the single identity allowed to log in.
    #[clap(long, env = "FLIGHTDECK_AUTH_USERNAME")]
    pub auth_username: String,

    /// Password of the single identity allowed to log in.
    #[clap(long, env = "FLIGHTDECK_AUTH_PASSWORD", hide_env_values = true)]
    pub auth_password: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set and non-empty")]
    Missing(&'static str),

    #[error("invalid token duration {0:?}: expected a number with an optional ms/s/m/h/d unit")]
    InvalidDuration(String),

    #[error("token duration {0:?} must be at least one second")]
    DurationTooShort(String),

    #[error("unsupported token algorithm {0:?}: expected HS256, HS384 or HS512")]
    UnsupportedAlgorithm(String),

    #[error("public url {0:?} is not a valid origin header value")]
    InvalidPublicUrl(String),
}

/// Validated inputs of the token issuer and verifier. Built once at startup.
#[derive(Clone)]
pub struct AuthSettings {
    pub secret: Vec<u8>,
    pub algorithm: Algorithm,
    pub ttl: Duration,
    pub identity: ConfiguredIdentity,
}

impl FlightdeckApiConfig {
    /// Check the authentication settings and convert them to their typed form.
    ///
    /// # Errors
    ///
    /// Returns an error if the secret, username or password is empty, if the
    /// expiration cannot be parsed or is under a second, or if the algorithm
    /// is not an HMAC algorithm.
    pub fn auth_settings(&self) -> Result<AuthSettings, ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::Missing("jwt secret"));
        }
        if self.auth_username.is_empty() {
            return Err(ConfigError::Missing("auth username"));
        }
        if self.auth_password.is_empty() {
            return Err(ConfigError::Missing("auth password"));
        }

        Ok(AuthSettings {
            secret: self.jwt_secret.as_bytes().to_vec(),
            algorithm: parse_algorithm(&self.jwt_algorithm)?,
            ttl: parse_token_duration(&self.jwt_expiration)?,
            identity: ConfiguredIdentity::new(&self.auth_username, &self.auth_password),
        })
    }
}

fn parse_algorithm(value: &str) -> Result<Algorithm, ConfigError> {
    match Algorithm::from_str(value.trim()) {
        Ok(alg @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => Ok(alg),
        _ => Err(ConfigError::UnsupportedAlgorithm(value.to_string())),
    }
}

/// Parse a token lifetime such as `3600s`, `15m`, `1.5h`, `2 days` or `1w`.
///
/// The amount may be fractional and may be followed by spaces. Units are
/// case-insensitive and take short or long names (`ms`, `s`, `m`, `h`, `d`,
/// `w`, `y`, `msecs`, `seconds`, `mins`, `hours`, `days`, `weeks`, `years`,
/// ...). A bare number is read as milliseconds. The result is truncated to
/// whole seconds.
pub fn parse_token_duration(value: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidDuration(value.to_string());

    let trimmed = value.trim();
    let split = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && c == '-')))
        .map_or(trimmed.len(), |(i, _)| i);
    let (number, unit) = trimmed.split_at(split);

    let digits = number.strip_prefix('-').unwrap_or(number);
    if !digits.ends_with(|c: char| c.is_ascii_digit()) || digits.matches('.').count() > 1 {
        return Err(invalid());
    }
    let amount: f64 = number.parse().map_err(|_| invalid())?;

    let millis_per_unit = unit_millis(&unit.trim_start_matches(' ').to_ascii_lowercase())
        .ok_or_else(invalid)?;
    let millis = amount * millis_per_unit;

    // Token timestamps have whole-second resolution.
    if millis < 1_000.0 {
        return Err(ConfigError::DurationTooShort(value.to_string()));
    }

    let secs = (millis / 1_000.0).floor();
    if !secs.is_finite() || secs >= u64::MAX as f64 {
        return Err(invalid());
    }

    Ok(Duration::from_secs(secs as u64))
}

fn unit_millis(unit: &str) -> Option<f64> {
    const SECOND: f64 = 1_000.0;
    const MINUTE: f64 = 60.0 * SECOND;
    const HOUR: f64 = 60.0 * MINUTE;
    const DAY: f64 = 24.0 * HOUR;

    let millis = match unit {
        "" | "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => 1.0,
        "s" | "sec" | "secs" | "second" | "seconds" => SECOND,
        "m" | "min" | "mins" | "minute" | "minutes" => MINUTE,
        "h" | "hr" | "hrs" | "hour" | "hours" => HOUR,
        "d" | "day" | "days" => DAY,
        "w" | "week" | "weeks" => 7.0 * DAY,
        "y" | "yr" | "yrs" | "year" | "years" => 365.25 * DAY,
        _ => return None,
    };
    Some(millis)
}
