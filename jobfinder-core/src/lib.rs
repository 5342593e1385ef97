//! Job Finder Core
//!
//! Core types shared by the Job Finder client crates.
//!
//! This crate contains:
//! - Domain types: what the view shows and holds (Job, Status, ResumeFile)
//! - DTOs: request and response bodies exchanged with the bridge backend

pub mod domain;
pub mod dto;
