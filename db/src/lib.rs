//! Flight record persistence for flightdeck.
//!
//! Handlers talk to a [`storage::Storage`] trait object; the MongoDB backend
//! is used in production and the in-memory backend in tests and local runs.

pub mod models;
pub mod storage;
