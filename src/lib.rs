//! auditstore - a schema-driven audit log service
//!
//! Validates, stores, and serves structured audit records over HTTP
//! with deterministic ordering and pagination.

pub mod cli;
pub mod rest;
pub mod schema;
pub mod server;
pub mod settings;
pub mod store;
