//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components drawing from `AppState`
//! - Reusable widgets (dial canvas, buttons, info panel, footer date)
//! - Screen layout shared by rendering and mouse hit testing
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod layout;
pub mod widgets;
