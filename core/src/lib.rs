//! Core domain logic for Contacts.
//!
//! This crate owns the contact dataset and the navigation state machine.
//! Nothing here performs IO or knows how screens are drawn.

mod dataset;
mod directory;
pub mod navigation;

pub use dataset::builtin_contacts;
pub use directory::{ContactNotFound, Directory, DirectoryError};
pub use navigation::{NavEvent, NavigationState};
