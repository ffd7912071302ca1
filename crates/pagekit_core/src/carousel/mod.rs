//! Slide carousel with circular navigation and cancellable autoplay.
//!
//! # Responsibility
//! - `controller`: index state machine driven by presentation events.
//! - `scheduler`: repeating timer sources whose ticks the owner forwards
//!   back into the controller.

pub mod controller;
pub mod scheduler;
