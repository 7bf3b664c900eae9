//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `contracts`) so individual pages can
//! depend on small focused models.

pub mod contracts;
pub mod session;
