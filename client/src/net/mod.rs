//! Networking modules for the managed backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the REST endpoints of the identity provider and document
//! store; `types` defines the response shapes.

pub mod api;
pub mod types;
