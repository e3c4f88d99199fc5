//! Component variant generation for tokensmith.
//!
//! This crate handles:
//! - pure expansion of a button spec into the full size × variant × state
//!   descriptor matrix
//! - the `DocumentBuilder` capability trait that abstracts the host
//!   document API
//! - the drivers that walk the matrix against a builder
//! - the UI → host message protocol

mod builder;
mod engine;
mod icons;
mod matrix;
mod protocol;

#[cfg(test)]
pub(crate) mod fake;

pub use builder::{DocumentBuilder, NodeId};
pub use engine::{create_button_set, create_icon_pair, create_text_styles, GeneratedSet};
pub use icons::{ARROW_LEFT_SVG, ARROW_RIGHT_SVG};
pub use matrix::{
    expand, ButtonDescriptor, ButtonSpec, SizeSpec, StateKind, Stroke, VariantKind, BUTTON_WIDTH,
    GRID_GAP, SIZES, STATES, VARIANTS,
};
pub use protocol::{dispatch, UiMessage};
