//! galeria-server: HTTP service for the galeria image collection
//!
//! Fetches random dog images from the public Dog CEO API, stores their
//! URL and tag in PostgreSQL, and exposes a small JSON API to list and
//! retrieve the stored records.

pub mod db;
pub mod dogapi;
pub mod http;
