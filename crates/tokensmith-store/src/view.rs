//! Pure view projection.
//!
//! `render` turns a [`TokenStore`] into a serializable [`ViewModel`] with no
//! dependency on any presentation layer, so the editing surface can be
//! driven (and tested) without a UI runtime.

use serde::Serialize;
use tokensmith_core::fmt_number;

use crate::store::TokenStore;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorRow {
    pub key: String,
    pub value: String,
    pub description: String,
    pub enabled: bool,
    /// Every color row gets a working enable toggle.
    pub can_toggle: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionRow {
    pub key: String,
    pub value: f64,
    pub mobile: Option<f64>,
    pub tablet: Option<f64>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShadowRow {
    pub key: String,
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: String,
    pub description: String,
    /// Preview string in CSS shadow syntax.
    pub css: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyleRow {
    pub name: String,
    /// Resolved font, `None` when the style references the disabled
    /// secondary family.
    pub font_family: Option<String>,
    pub size: f64,
    pub weight: u32,
    pub line_height: f64,
    pub letter_spacing: f64,
    /// Compact spec line, e.g. "Inter / 48px / 700".
    pub specs: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypographyView {
    pub primary_font: String,
    pub secondary_font: String,
    pub secondary_enabled: bool,
    pub styles: Vec<TextStyleRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub colors: Vec<ColorRow>,
    pub spacing: Vec<DimensionRow>,
    pub padding: Vec<DimensionRow>,
    pub radius: Vec<DimensionRow>,
    pub typography: TypographyView,
    pub shadows: Vec<ShadowRow>,
    pub border_widths: Vec<DimensionRow>,
    pub border_styles: Vec<String>,
}

fn dimension_rows(
    map: &indexmap::IndexMap<String, tokensmith_core::DimensionToken>,
) -> Vec<DimensionRow> {
    map.iter()
        .map(|(key, token)| DimensionRow {
            key: key.clone(),
            value: token.value,
            mobile: token.mobile,
            tablet: token.tablet,
            description: token.description.clone(),
        })
        .collect()
}

/// Project the store into a view model.
pub fn render(store: &TokenStore) -> ViewModel {
    let colors = store
        .colors
        .iter()
        .map(|(key, token)| ColorRow {
            key: key.clone(),
            value: token.value.clone(),
            description: token.description.clone(),
            enabled: token.enabled,
            can_toggle: true,
        })
        .collect();

    let shadows = store
        .shadows
        .iter()
        .map(|(key, shadow)| ShadowRow {
            key: key.clone(),
            x: shadow.x,
            y: shadow.y,
            blur: shadow.blur,
            spread: shadow.spread,
            color: shadow.color.clone(),
            description: shadow.description.clone(),
            css: shadow.to_css(),
        })
        .collect();

    let styles = store
        .typography
        .styles
        .iter()
        .map(|(name, style)| {
            let font_family = store
                .typography
                .resolve_family(style.family)
                .map(str::to_string);
            let specs = format!(
                "{} / {}px / {}",
                font_family.as_deref().unwrap_or("—"),
                fmt_number(style.size),
                style.weight
            );
            TextStyleRow {
                name: name.clone(),
                font_family,
                size: style.size,
                weight: style.weight,
                line_height: style.line_height,
                letter_spacing: style.letter_spacing,
                specs,
            }
        })
        .collect();

    ViewModel {
        colors,
        spacing: dimension_rows(&store.spacing),
        padding: dimension_rows(&store.padding),
        radius: dimension_rows(&store.radius),
        typography: TypographyView {
            primary_font: store.typography.primary_font.clone(),
            secondary_font: store.typography.secondary_font.clone(),
            secondary_enabled: store.typography.secondary_enabled,
            styles,
        },
        shadows,
        border_widths: dimension_rows(&store.borders.widths),
        border_styles: store.borders.styles.clone(),
    }
}
