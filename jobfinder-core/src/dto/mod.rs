//! Data Transfer Objects for talking to the bridge backend
//!
//! Request bodies are serialized exactly as the bridge expects them;
//! response bodies tolerate fields the client does not use.

pub mod apply;
pub mod reply;
pub mod search;
