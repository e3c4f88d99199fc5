//! The canonical export document and its serialization.

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use tokensmith_core::{ComponentTokens, DimensionToken, Theme};
use tokensmith_store::TokenStore;

use crate::naming::NamingConvention;
use crate::ExportError;

/// Default filename for downloaded exports.
pub const EXPORT_FILENAME: &str = "design-system.json";

const EXPORT_VERSION: &str = "1.0.0";
const GENERATED_BY: &str = "tokensmith";

/// Serialization whitespace. Controls only formatting, never the data shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Pretty,
    Minified,
}

/// Options for one export run.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub naming: NamingConvention,
    /// Pin the `meta.generatedAt` timestamp. `None` uses the current time;
    /// a fixed value makes the whole pipeline deterministic.
    pub generated_at: Option<DateTime<Utc>>,
}

/// A number that serializes as a JSON integer when it is integral, the way
/// JavaScript prints it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Num(pub f64);

impl Serialize for Num {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0.abs() < 9e15 {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMeta {
    pub version: String,
    /// ISO-8601 UTC timestamp.
    pub generated_at: String,
    pub generated_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportFonts {
    pub primary: String,
    /// `None` (JSON `null`) while the secondary font is disabled.
    pub secondary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTextStyle {
    /// Resolved font. `None` when the style references the disabled
    /// secondary family; deliberately not a fallback to the primary font.
    pub font_family: Option<String>,
    pub font_size: Num,
    pub font_weight: u32,
    pub line_height: Num,
    pub letter_spacing: Num,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportTypography {
    pub fonts: ExportFonts,
    pub styles: IndexMap<String, ExportTextStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportBorders {
    pub widths: IndexMap<String, Num>,
    pub styles: Vec<String>,
}

/// The canonical serializable snapshot of a token store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportDocument {
    pub meta: ExportMeta,
    pub colors: IndexMap<String, String>,
    pub spacing: IndexMap<String, Num>,
    pub padding: IndexMap<String, Num>,
    pub radius: IndexMap<String, Num>,
    pub typography: ExportTypography,
    pub shadows: IndexMap<String, String>,
    pub borders: ExportBorders,
    pub components: ComponentTokens,
    pub themes: IndexMap<String, Theme>,
}

fn dimension_values(
    map: &IndexMap<String, DimensionToken>,
    naming: NamingConvention,
) -> IndexMap<String, Num> {
    map.iter()
        .map(|(key, token)| (naming.apply(key), Num(token.value)))
        .collect()
}

/// Build the export document. Pure: identical stores and options (with a
/// pinned `generated_at`) produce identical documents.
pub fn export(store: &TokenStore, options: &ExportOptions) -> ExportDocument {
    let naming = options.naming;
    let generated_at = options
        .generated_at
        .unwrap_or_else(Utc::now)
        .to_rfc3339_opts(SecondsFormat::Millis, true);

    let colors = store
        .colors
        .iter()
        .filter(|(_, token)| token.enabled)
        .map(|(key, token)| (naming.apply(key), token.value.clone()))
        .collect();

    let typography = ExportTypography {
        fonts: ExportFonts {
            primary: store.typography.primary_font.clone(),
            secondary: store
                .typography
                .secondary_enabled
                .then(|| store.typography.secondary_font.clone()),
        },
        styles: store
            .typography
            .styles
            .iter()
            .map(|(name, style)| {
                (
                    naming.apply(name),
                    ExportTextStyle {
                        font_family: store
                            .typography
                            .resolve_family(style.family)
                            .map(str::to_string),
                        font_size: Num(style.size),
                        font_weight: style.weight,
                        line_height: Num(style.line_height),
                        letter_spacing: Num(style.letter_spacing),
                    },
                )
            })
            .collect(),
    };

    let shadows = store
        .shadows
        .iter()
        .map(|(key, shadow)| (naming.apply(key), shadow.to_css()))
        .collect();

    ExportDocument {
        meta: ExportMeta {
            version: EXPORT_VERSION.to_string(),
            generated_at,
            generated_by: GENERATED_BY.to_string(),
        },
        colors,
        spacing: dimension_values(&store.spacing, naming),
        padding: dimension_values(&store.padding, naming),
        radius: dimension_values(&store.radius, naming),
        typography,
        shadows,
        borders: ExportBorders {
            widths: dimension_values(&store.borders.widths, naming),
            styles: store.borders.styles.clone(),
        },
        components: store.components.clone(),
        themes: store.themes.clone(),
    }
}

/// Serialize a document. Pretty uses 2-space indentation; minified emits
/// compact JSON.
pub fn to_json_string(doc: &ExportDocument, format: ExportFormat) -> Result<String, ExportError> {
    let json = match format {
        ExportFormat::Pretty => serde_json::to_string_pretty(doc)?,
        ExportFormat::Minified => serde_json::to_string(doc)?,
    };
    Ok(json)
}

/// Write a serialized document to disk (e.g. `design-system.json`).
pub fn write_to_file(
    doc: &ExportDocument,
    format: ExportFormat,
    path: &std::path::Path,
) -> Result<(), ExportError> {
    let json = to_json_string(doc, format)?;
    std::fs::write(path, json)?;
    Ok(())
}
