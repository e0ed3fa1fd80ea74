// src/integrations/mod.rs
//
// External Integrations Module
//
// The encyclopedia REST API is the only external system.

pub mod api;

pub use api::{ApiClient, EncyclopediaApi, ListQuery};
