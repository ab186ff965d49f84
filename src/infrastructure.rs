//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation (real terminal and test backend)
//! - CLI argument processing
//! - Configuration loading
//! - Wall-clock sampling
//! - Terminal fullscreen requests

pub mod cli;
pub mod config;
pub mod fullscreen;
pub mod time_source;
pub mod tui;
