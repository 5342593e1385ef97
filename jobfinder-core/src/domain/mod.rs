//! Core domain types
//!
//! These types describe the transient, client-side entities of the view.
//! They live only as long as the view does and are never persisted.

pub mod job;
pub mod resume;
pub mod status;
