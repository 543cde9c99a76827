//! Schematics Core
//!
//! Resource model, schema registry and provider trait shared by the
//! Schematics provider and its command line front end.

pub mod provider;
pub mod resource;
pub mod schema;
