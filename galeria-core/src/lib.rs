//! galeria-core: shared configuration for the galeria service and CLI
//!
//! Database settings are environment-derived, layered through `.env`
//! files, and consumed by both the HTTP server and the diagnostic
//! command.

pub mod config;

pub use config::{mask_url, ConfigError, DatabaseSettings};
