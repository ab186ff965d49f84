//! # Belfry - an analog clock for the terminal
//!
//! A decorative Westminster-style clock face drawn with braille dots, built
//! with Rust and Ratatui. This library implements an Elm-like architecture
//! for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): application state (clock sample, UI flags)
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (fullscreen, resize, render)
//! - **View** (`presentation::components`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use belfry::core::{msg::{ui::UiMsg, Msg}, state::AppState, update::update};
//!
//! let state = AppState::default();
//! let (state, _commands) = update(Msg::Ui(UiMsg::ToggleInfo), state);
//!
//! assert!(state.ui.show_info);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Elm architecture: messages, state, update, commands
//! - [`domain`] - Hand angles, dial geometry and text helpers
//! - [`infrastructure`] - Terminal, clock sampling, fullscreen host, config
//! - [`integration`] - Runtime and the application event loop
//! - [`presentation`] - Layout, components and widgets

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod test_helpers;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
