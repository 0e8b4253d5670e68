//! contrib-calendar crate
//!
//! Library side of the `contrib-calendar` service: scraping GitHub contribution calendars,
//! caching them briefly, and aggregating a team's month. The binary wires this up to a
//! command line and an HTTP server.

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod calendar;

pub mod config;

pub mod request;

pub mod server;
