//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, loading its data)
//! and leaves access decisions to the gate it is mounted under.

pub mod client_view;
pub mod clients;
pub mod contract_new;
pub mod contracts;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod payment_view;
pub mod register;
pub mod web3_login;
