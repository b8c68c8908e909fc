//! Domain layer for weatherdesk.
//!
//! Holds the error taxonomy, the provider capability traits, and the
//! validation / fetch logic that the HTTP handlers orchestrate. Nothing in
//! here knows about HTTP frameworks or the database.

pub mod csv_export;
pub mod dates;
pub mod error;
pub mod provider;
pub mod types;
pub mod weather;
