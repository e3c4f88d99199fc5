//! Core types for the tokensmith design-token toolkit.
//!
//! This crate provides the foundational types used across the other
//! tokensmith crates:
//! - Color values and the linear derivation math (darken/lighten)
//! - Token category shapes (colors, dimensions, typography, shadows, borders)
//! - Error types

pub mod color;
pub mod errors;
pub mod tokens;

pub use color::*;
pub use errors::*;
pub use tokens::*;
