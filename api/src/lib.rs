//! Flightdeck API service.
//!
//! Serves flight records over REST behind a bearer-token gate.
//!
//! # Configuration
//!
//! The API requires a token signing secret and the single identity allowed
//! to log in. See [`config::FlightdeckApiConfig`] for all options.
//!
//! # Authentication
//!
//! `POST /api/v1/auth` exchanges credentials for an HMAC-signed token; every
//! flight route requires it as `Authorization: Bearer <token>`. See [`auth`]
//! for the details.

pub mod auth;
pub mod config;
pub mod context;
pub mod error;
pub mod server;

pub(crate) mod extractors;
pub(crate) mod handlers;
