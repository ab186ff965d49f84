//! Domain logic
//!
//! This module contains the clock's pure computations:
//! - Hand angles derived from a time sample
//! - Dial geometry (ticks, markers, numerals, hands)
//! - Date and label formatting

pub mod angles;
pub mod dial;
pub mod text;
