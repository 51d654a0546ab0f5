//! Types shared between the flightdeck API and its storage layer.
//!
//! [`params`] holds request bodies, [`views`] holds response bodies and
//! [`identity`] holds the authenticated caller attached to gated requests.

pub mod identity;
pub mod params;
pub mod views;
