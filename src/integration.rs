//! Runtime wiring
//!
//! Connects the pure core to the terminal, the clock and the fullscreen host:
//! - `Runtime` queues messages and executes commands
//! - `AppRunner` owns the event loop and the host side effects
//! - `Renderer` draws the current state

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
