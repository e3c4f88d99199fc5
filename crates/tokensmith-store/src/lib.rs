//! Mutable token store for tokensmith.
//!
//! This crate owns the editable source of truth:
//! - `TokenStore`: ordered token categories with CRUD, rename, and toggle
//!   semantics
//! - documented defaults via `TokenStore::default()`
//! - a pure `render` projection that turns the store into a view model
//!   without touching any presentation layer

mod defaults;
mod store;
mod view;

pub use store::{DimensionCategory, DimensionField, ShadowField, TokenStore};
pub use view::{render, ColorRow, DimensionRow, ShadowRow, TextStyleRow, TypographyView, ViewModel};
