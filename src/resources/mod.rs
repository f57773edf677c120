//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `audio` – audio requests queued during the frame
//! - `drawlist` – draw commands queued during the frame
//! - `gameconfig` – settings loaded from the INI file
//! - `gamestate` – collected counter, goal and pause flag
//! - `input` – input events waiting to be dispatched
//! - `lemons` – the lemon population, spawn placement and falling
//! - `worldtime` – session time and frame counter
pub mod audio;
pub mod drawlist;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod lemons;
pub mod worldtime;
