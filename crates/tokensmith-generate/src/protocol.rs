//! UI → host message protocol.
//!
//! Messages arrive from the plugin UI as tagged JSON objects and are
//! dispatched against a `DocumentBuilder`.

use serde::{Deserialize, Serialize};
use tokensmith_core::{Color, GenerateError, TypographyConfig};

use crate::builder::DocumentBuilder;
use crate::engine::{create_button_set, create_icon_pair, create_text_styles};
use crate::matrix::ButtonSpec;

/// A message posted by the plugin UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiMessage {
    /// Create host text styles from the current typography config.
    CreateTextStyles { typography: TypographyConfig },
    /// Generate the full button variant set.
    #[serde(rename_all = "camelCase")]
    CreateButtonSet {
        text: String,
        bg_color: String,
        text_color: String,
        radius: f64,
    },
    /// Create the standalone arrow icon pair.
    AddIcons,
    /// Relay a toast to the user.
    Notify { message: String },
}

// Malformed hex from the UI falls back to black, matching the color
// picker's own failure mode.
fn parse_color(raw: &str) -> Color {
    Color::from_hex(raw).unwrap_or(Color::BLACK)
}

/// Dispatch one UI message against a builder.
pub fn dispatch<B: DocumentBuilder>(
    builder: &mut B,
    message: UiMessage,
) -> Result<(), GenerateError> {
    match message {
        UiMessage::CreateTextStyles { typography } => {
            create_text_styles(builder, &typography)?;
        }
        UiMessage::CreateButtonSet {
            text,
            bg_color,
            text_color,
            radius,
        } => {
            let spec = ButtonSpec {
                text,
                base_color: parse_color(&bg_color),
                text_color: parse_color(&text_color),
                corner_radius: radius,
            };
            create_button_set(builder, &spec)?;
        }
        UiMessage::AddIcons => {
            create_icon_pair(builder, Color::BLACK)?;
            builder.notify("Arrow icons created");
        }
        UiMessage::Notify { message } => {
            builder.notify(&message);
        }
    }
    Ok(())
}
