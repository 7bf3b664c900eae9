//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared session state from Leptos context providers;
//! `auth_gate` binds the route gate to the router and the session feed.

pub mod auth_gate;
pub mod nav_bar;
