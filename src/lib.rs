//! Core library for the ShipRate pilot rating service.
//!
//! The `ratings` module holds the actual domain: resolving free-text vessel
//! identities to canonical ship records, normalizing raw form payloads,
//! appending immutable rating documents, and recomputing per-criterion
//! averages. Everything else is ambient plumbing for the binary.

pub mod config;
pub mod error;
pub mod ratings;
pub mod telemetry;
