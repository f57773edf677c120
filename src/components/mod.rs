//! Game object data.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned box for hit tests and spawn spacing
//! - [`lemon`] – a lemon and its lifecycle state machine

pub mod boxcollider;
pub mod lemon;
