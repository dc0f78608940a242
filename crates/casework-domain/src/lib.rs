//! Domain types shared across Casework services.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; persistence and HTTP concerns
//! stay in the services.

pub mod collection;
pub mod date;
pub mod family;
pub mod id;
pub mod intervention;
pub mod reference;
pub mod student;
