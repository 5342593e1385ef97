//! The job finder view
//!
//! - `state`: the state container the view is drawn from
//! - `controller`: bridge calls and the state changes they cause
//! - `render`: pure rendering of a state to terminal text
//! - `input`: line commands standing in for form fields and buttons

pub mod controller;
pub mod input;
pub mod render;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::JobFinder;
pub use state::ViewState;
