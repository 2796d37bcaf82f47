//! HTTP front end for the sortd batch sort service.
//!
//! Binds `POST /process-single` to the sequential strategy and
//! `POST /process-concurrent` to the concurrent strategy. Both routes share
//! the JSON codec from `sortd-core`.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
