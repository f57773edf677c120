//! Event and message types.
//!
//! - [`input`] what the input source reports each frame.
//! - [`audio`] audio requests and the audio thread protocol.
//! - [`gamestate`] the goal reached event and its observer.

pub mod audio;
pub mod gamestate;
pub mod input;
