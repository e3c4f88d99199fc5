//! Token category shapes.
//!
//! These structs mirror the editable token model: ordered maps from token
//! key to token data, one shape per category. Ordering is preserved with
//! `IndexMap` so that exports are deterministic.

use indexmap::IndexMap;

/// A named color with an export toggle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorToken {
    /// Hex string, e.g. "#6366f1".
    pub value: String,
    pub description: String,
    /// Disabled colors are kept in the store but excluded from export.
    pub enabled: bool,
}

impl ColorToken {
    pub fn new(value: &str, description: &str) -> Self {
        Self {
            value: value.to_string(),
            description: description.to_string(),
            enabled: true,
        }
    }
}

/// A pixel dimension (spacing, padding, radius, border width) with optional
/// breakpoint overrides.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionToken {
    pub value: f64,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub mobile: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub tablet: Option<f64>,
    pub description: String,
}

impl DimensionToken {
    pub fn px(value: f64, description: &str) -> Self {
        Self {
            value,
            mobile: None,
            tablet: None,
            description: description.to_string(),
        }
    }

    pub fn with_breakpoints(value: f64, mobile: f64, tablet: f64, description: &str) -> Self {
        Self {
            value,
            mobile: Some(mobile),
            tablet: Some(tablet),
            description: description.to_string(),
        }
    }
}

/// Which configured font a text style uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FontFamily {
    Primary,
    Secondary,
}

/// A single named text style (h1, body2, ...).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TextStyle {
    pub family: FontFamily,
    pub size: f64,
    pub weight: u32,
    pub line_height: f64,
    pub letter_spacing: f64,
}

impl TextStyle {
    pub fn new(family: FontFamily, size: f64, weight: u32, line_height: f64, letter_spacing: f64) -> Self {
        Self {
            family,
            size,
            weight,
            line_height,
            letter_spacing,
        }
    }
}

/// Font configuration plus the named text styles.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TypographyConfig {
    pub primary_font: String,
    pub secondary_font: String,
    pub secondary_enabled: bool,
    pub styles: IndexMap<String, TextStyle>,
}

impl TypographyConfig {
    /// Resolve the effective font for a family reference.
    ///
    /// A secondary reference resolves to `None` while the secondary font is
    /// disabled. Callers must decide what to do with unresolved styles; the
    /// export pipeline emits `null` and the generation engine skips them.
    pub fn resolve_family(&self, family: FontFamily) -> Option<&str> {
        match family {
            FontFamily::Primary => Some(self.primary_font.as_str()),
            FontFamily::Secondary => {
                if self.secondary_enabled {
                    Some(self.secondary_font.as_str())
                } else {
                    None
                }
            }
        }
    }
}

/// A drop-shadow token. The color stays an opaque CSS color string
/// (typically `rgba(...)`) because it is only ever re-emitted as CSS.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadowToken {
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: String,
    pub description: String,
}

impl ShadowToken {
    pub fn new(x: f64, y: f64, blur: f64, spread: f64, color: &str, description: &str) -> Self {
        Self {
            x,
            y,
            blur,
            spread,
            color: color.to_string(),
            description: description.to_string(),
        }
    }

    /// CSS shadow syntax: `"{x}px {y}px {blur}px {spread}px {color}"`.
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px {}",
            fmt_number(self.x),
            fmt_number(self.y),
            fmt_number(self.blur),
            fmt_number(self.spread),
            self.color
        )
    }
}

/// Border widths plus the fixed list of stroke styles.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderTokens {
    pub widths: IndexMap<String, DimensionToken>,
    pub styles: Vec<String>,
}

/// Token references for one button state (values are keys into the other
/// token categories, not resolved values).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StateRefs {
    pub bg: String,
    pub text: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub border: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub shadow: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub padding_x: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub padding_y: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub radius: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub font: Option<String>,
}

/// The four interaction states of a button at one size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ButtonStateTokens {
    pub default: StateRefs,
    pub hover: StateRefs,
    pub pressed: StateRefs,
    pub disabled: StateRefs,
}

/// One button variant (primary, secondary, ...) across its sizes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ButtonVariantTokens {
    pub sizes: IndexMap<String, ButtonStateTokens>,
}

/// Button component token tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ButtonTokens {
    pub variants: IndexMap<String, ButtonVariantTokens>,
}

/// Input component token tree. The per-type configuration is currently
/// empty; the keys enumerate the supported input kinds.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputTypeTokens {}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputTokens {
    pub types: IndexMap<String, InputTypeTokens>,
}

/// Component token trees.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentTokens {
    pub button: ButtonTokens,
    pub input: InputTokens,
}

/// A named theme: overrides layered on top of the base tokens.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Theme {
    pub colors: IndexMap<String, String>,
    pub components: IndexMap<String, String>,
}

/// Format a pixel count the way JavaScript prints numbers: integral values
/// without a decimal point, everything else as-is.
pub fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
