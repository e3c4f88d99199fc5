//! Default token data.
//!
//! These are the values a fresh editing session starts from. Keys and values
//! are part of the documented contract (tests and downstream tooling rely on
//! them), so changes here are breaking.

use indexmap::IndexMap;
use tokensmith_core::{
    BorderTokens, ButtonStateTokens, ButtonTokens, ButtonVariantTokens, ColorToken,
    ComponentTokens, DimensionToken, FontFamily, InputTokens, InputTypeTokens, ShadowToken,
    StateRefs, TextStyle, Theme, TypographyConfig,
};

use crate::store::TokenStore;

pub(crate) fn default_colors() -> IndexMap<String, ColorToken> {
    let entries = [
        ("primary", "#6366f1", "Primary brand color"),
        ("secondary", "#8b5cf6", "Secondary brand color"),
        ("success", "#10b981", "Success state color"),
        ("error", "#ef4444", "Error state color"),
        ("warning", "#f59e0b", "Warning/Process color"),
        ("neutral-1000", "#000000", "Black"),
        ("neutral-900", "#111827", "Darkest gray"),
        ("neutral-800", "#1f2937", ""),
        ("neutral-700", "#374151", ""),
        ("neutral-600", "#4b5563", ""),
        ("neutral-500", "#6b7280", "Mid gray"),
        ("neutral-400", "#9ca3af", ""),
        ("neutral-300", "#d1d5db", ""),
        ("neutral-200", "#e5e7eb", ""),
        ("neutral-100", "#f3f4f6", ""),
        ("neutral-50", "#f9fafb", "Lightest gray"),
        ("neutral-0", "#ffffff", "White"),
    ];
    entries
        .into_iter()
        .map(|(key, value, desc)| (key.to_string(), ColorToken::new(value, desc)))
        .collect()
}

fn scale(prefix: &str) -> IndexMap<String, DimensionToken> {
    let entries: [(u32, f64, f64, f64, &str); 11] = [
        (0, 0.0, 0.0, 0.0, if prefix == "spacing" { "No spacing" } else { "No padding" }),
        (1, 4.0, 4.0, 4.0, "Extra small"),
        (2, 8.0, 6.0, 8.0, "Small"),
        (3, 12.0, 10.0, 12.0, ""),
        (4, 16.0, 12.0, 16.0, "Medium"),
        (5, 20.0, 16.0, 20.0, ""),
        (6, 24.0, 20.0, 24.0, "Large"),
        (7, 32.0, 24.0, 32.0, ""),
        (8, 40.0, 32.0, 40.0, "Extra large"),
        (9, 48.0, 40.0, 48.0, ""),
        (10, 64.0, 48.0, 64.0, "XXL"),
    ];
    entries
        .into_iter()
        .map(|(i, value, mobile, tablet, desc)| {
            (
                format!("{prefix}-{i}"),
                DimensionToken::with_breakpoints(value, mobile, tablet, desc),
            )
        })
        .collect()
}

pub(crate) fn default_spacing() -> IndexMap<String, DimensionToken> {
    scale("spacing")
}

pub(crate) fn default_padding() -> IndexMap<String, DimensionToken> {
    scale("padding")
}

pub(crate) fn default_radius() -> IndexMap<String, DimensionToken> {
    let entries: [(&str, f64, f64, f64, &str); 6] = [
        ("none", 0.0, 0.0, 0.0, "No radius"),
        ("sm", 4.0, 4.0, 4.0, "Small radius"),
        ("md", 6.0, 6.0, 6.0, "Medium radius"),
        ("lg", 8.0, 8.0, 8.0, "Large radius"),
        ("xl", 12.0, 10.0, 12.0, "Extra large radius"),
        ("full", 9999.0, 9999.0, 9999.0, "Fully rounded"),
    ];
    entries
        .into_iter()
        .map(|(key, value, mobile, tablet, desc)| {
            (
                key.to_string(),
                DimensionToken::with_breakpoints(value, mobile, tablet, desc),
            )
        })
        .collect()
}

pub(crate) fn default_typography() -> TypographyConfig {
    let styles: [(&str, f64, u32, f64, f64); 10] = [
        ("h1", 48.0, 700, 1.2, -0.5),
        ("h2", 40.0, 700, 1.3, -0.3),
        ("h3", 32.0, 600, 1.3, 0.0),
        ("h4", 24.0, 600, 1.4, 0.0),
        ("h5", 20.0, 600, 1.4, 0.0),
        ("h6", 16.0, 600, 1.5, 0.0),
        ("body1", 16.0, 400, 1.5, 0.0),
        ("body2", 14.0, 400, 1.5, 0.0),
        ("body3", 12.0, 400, 1.4, 0.0),
        ("body4", 10.0, 400, 1.4, 0.0),
    ];
    TypographyConfig {
        primary_font: "Inter".to_string(),
        secondary_font: String::new(),
        secondary_enabled: false,
        styles: styles
            .into_iter()
            .map(|(name, size, weight, line_height, letter_spacing)| {
                (
                    name.to_string(),
                    TextStyle::new(FontFamily::Primary, size, weight, line_height, letter_spacing),
                )
            })
            .collect(),
    }
}

pub(crate) fn default_shadows() -> IndexMap<String, ShadowToken> {
    let entries: [(&str, f64, f64, f64, f64, &str, &str); 5] = [
        ("shadow-xs", 0.0, 1.0, 2.0, 0.0, "rgba(0,0,0,0.05)", "Extra small shadow"),
        ("shadow-sm", 0.0, 1.0, 3.0, 0.0, "rgba(0,0,0,0.1)", "Small shadow"),
        ("shadow-md", 0.0, 4.0, 6.0, -1.0, "rgba(0,0,0,0.1)", "Medium shadow"),
        ("shadow-lg", 0.0, 10.0, 15.0, -3.0, "rgba(0,0,0,0.1)", "Large shadow"),
        ("shadow-xl", 0.0, 20.0, 25.0, -5.0, "rgba(0,0,0,0.1)", "Extra large shadow"),
    ];
    entries
        .into_iter()
        .map(|(key, x, y, blur, spread, color, desc)| {
            (key.to_string(), ShadowToken::new(x, y, blur, spread, color, desc))
        })
        .collect()
}

pub(crate) fn default_borders() -> BorderTokens {
    let widths: [(&str, f64, f64, f64, &str); 3] = [
        ("thin", 1.0, 1.0, 1.0, "Thin border"),
        ("medium", 2.0, 2.0, 2.0, "Medium border"),
        ("thick", 4.0, 3.0, 4.0, "Thick border"),
    ];
    BorderTokens {
        widths: widths
            .into_iter()
            .map(|(key, value, mobile, tablet, desc)| {
                (
                    key.to_string(),
                    DimensionToken::with_breakpoints(value, mobile, tablet, desc),
                )
            })
            .collect(),
        styles: vec![
            "solid".to_string(),
            "dashed".to_string(),
            "dotted".to_string(),
        ],
    }
}

fn default_button_states() -> ButtonStateTokens {
    ButtonStateTokens {
        default: StateRefs {
            bg: "primary".to_string(),
            text: "neutral-0".to_string(),
            border: Some("primary".to_string()),
            shadow: Some("shadow-sm".to_string()),
            padding_x: Some("spacing-4".to_string()),
            padding_y: Some("spacing-2".to_string()),
            radius: Some("md".to_string()),
            font: Some("body".to_string()),
        },
        hover: StateRefs {
            bg: "primary".to_string(),
            text: "neutral-0".to_string(),
            ..StateRefs::default()
        },
        pressed: StateRefs {
            bg: "primary".to_string(),
            text: "neutral-0".to_string(),
            ..StateRefs::default()
        },
        disabled: StateRefs {
            bg: "neutral-200".to_string(),
            text: "neutral-400".to_string(),
            ..StateRefs::default()
        },
    }
}

pub(crate) fn default_components() -> ComponentTokens {
    let variant_names = ["primary", "secondary", "tertiary", "ghost", "destructive"];
    let size_names = ["small", "medium", "large"];

    let variants = variant_names
        .into_iter()
        .map(|variant| {
            let sizes = size_names
                .into_iter()
                .map(|size| (size.to_string(), default_button_states()))
                .collect();
            (variant.to_string(), ButtonVariantTokens { sizes })
        })
        .collect();

    let types = ["text", "password", "textarea", "select"]
        .into_iter()
        .map(|kind| (kind.to_string(), InputTypeTokens::default()))
        .collect();

    ComponentTokens {
        button: ButtonTokens { variants },
        input: InputTokens { types },
    }
}

pub(crate) fn default_themes() -> IndexMap<String, Theme> {
    let mut themes = IndexMap::new();
    themes.insert("default".to_string(), Theme::default());
    themes
}

impl Default for TokenStore {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            spacing: default_spacing(),
            padding: default_padding(),
            radius: default_radius(),
            typography: default_typography(),
            shadows: default_shadows(),
            borders: default_borders(),
            components: default_components(),
            themes: default_themes(),
            current_theme: "default".to_string(),
        }
    }
}
