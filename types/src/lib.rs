//! Core domain types for Contacts.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod contact;
mod ids;
mod route;
pub mod ui;

pub use contact::{ContactProfile, Presence};
pub use ids::ContactId;
pub use route::Route;
