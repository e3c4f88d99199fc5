//! The mutable token store and its CRUD semantics.

use indexmap::IndexMap;
use tokensmith_core::{
    BorderTokens, Color, ColorToken, ComponentTokens, DimensionToken, FontFamily, ShadowToken,
    Theme, TypographyConfig,
};

/// Token categories whose entries are pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionCategory {
    Spacing,
    Padding,
    Radius,
    BorderWidth,
}

impl DimensionCategory {
    /// Prefix used for auto-generated keys.
    fn prefix(self) -> &'static str {
        match self {
            DimensionCategory::Spacing => "spacing",
            DimensionCategory::Padding => "padding",
            DimensionCategory::Radius => "radius",
            DimensionCategory::BorderWidth => "border-width",
        }
    }
}

/// Numeric fields of a dimension token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionField {
    Value,
    Mobile,
    Tablet,
}

/// Numeric fields of a shadow token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowField {
    X,
    Y,
    Blur,
    Spread,
}

/// The editable source of truth for one session.
///
/// Construct with [`TokenStore::default`] and pass explicitly to anything
/// that needs it; there is deliberately no global instance. All mutation
/// goes through methods so that rename and validation semantics stay in one
/// place, but reads go straight to the fields.
///
/// Invalid numeric input and renames to empty keys are silently ignored
/// rather than surfaced as errors: editing must never crash, and the caller
/// has no channel for per-keystroke validation feedback. Renaming onto an
/// existing key overwrites it (last-write-wins).
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStore {
    pub colors: IndexMap<String, ColorToken>,
    pub spacing: IndexMap<String, DimensionToken>,
    pub padding: IndexMap<String, DimensionToken>,
    pub radius: IndexMap<String, DimensionToken>,
    pub typography: TypographyConfig,
    pub shadows: IndexMap<String, ShadowToken>,
    pub borders: BorderTokens,
    pub components: ComponentTokens,
    pub themes: IndexMap<String, Theme>,
    pub current_theme: String,
}

/// Move `old` to `new`, keeping the value. Empty or identical new keys are
/// no-ops; an existing entry at `new` is overwritten.
fn rename_entry<V>(map: &mut IndexMap<String, V>, old: &str, new: &str) {
    if new.is_empty() || old == new {
        return;
    }
    if let Some(value) = map.shift_remove(old) {
        map.insert(new.to_string(), value);
    }
}

/// Parse user input as a non-negative pixel count.
fn parse_px(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn dimensions(&self, category: DimensionCategory) -> &IndexMap<String, DimensionToken> {
        match category {
            DimensionCategory::Spacing => &self.spacing,
            DimensionCategory::Padding => &self.padding,
            DimensionCategory::Radius => &self.radius,
            DimensionCategory::BorderWidth => &self.borders.widths,
        }
    }

    fn dimensions_mut(
        &mut self,
        category: DimensionCategory,
    ) -> &mut IndexMap<String, DimensionToken> {
        match category {
            DimensionCategory::Spacing => &mut self.spacing,
            DimensionCategory::Padding => &mut self.padding,
            DimensionCategory::Radius => &mut self.radius,
            DimensionCategory::BorderWidth => &mut self.borders.widths,
        }
    }

    // --- dimension categories -------------------------------------------

    /// Set a numeric field from raw user input. Unparseable or negative
    /// input and unknown keys are ignored.
    pub fn set_dimension(
        &mut self,
        category: DimensionCategory,
        key: &str,
        field: DimensionField,
        raw: &str,
    ) {
        let Some(value) = parse_px(raw) else { return };
        if let Some(token) = self.dimensions_mut(category).get_mut(key) {
            match field {
                DimensionField::Value => token.value = value,
                DimensionField::Mobile => token.mobile = Some(value),
                DimensionField::Tablet => token.tablet = Some(value),
            }
        }
    }

    pub fn set_dimension_description(
        &mut self,
        category: DimensionCategory,
        key: &str,
        description: &str,
    ) {
        if let Some(token) = self.dimensions_mut(category).get_mut(key) {
            token.description = description.to_string();
        }
    }

    pub fn rename_dimension(&mut self, category: DimensionCategory, old: &str, new: &str) {
        rename_entry(self.dimensions_mut(category), old, new);
    }

    /// Insert a new zero-valued entry. Without an explicit key the name is
    /// `"{category}-{count}"` where count is the current entry count.
    /// Returns the key used.
    pub fn add_dimension(&mut self, category: DimensionCategory, key: Option<&str>) -> String {
        let key = match key {
            Some(k) => k.to_string(),
            None => format!("{}-{}", category.prefix(), self.dimensions(category).len()),
        };
        self.dimensions_mut(category)
            .insert(key.clone(), DimensionToken::with_breakpoints(0.0, 0.0, 0.0, ""));
        key
    }

    /// Remove an entry. Destructive-action confirmation happens at the UI
    /// boundary, not here.
    pub fn delete_dimension(&mut self, category: DimensionCategory, key: &str) -> bool {
        self.dimensions_mut(category).shift_remove(key).is_some()
    }

    // --- colors ----------------------------------------------------------

    /// Set a color's hex value. Strings that do not parse as a color are
    /// ignored, which keeps malformed data out of the store so export never
    /// has to validate.
    pub fn set_color_value(&mut self, key: &str, hex: &str) {
        if Color::from_hex(hex).is_none() {
            return;
        }
        if let Some(token) = self.colors.get_mut(key) {
            token.value = hex.to_string();
        }
    }

    pub fn set_color_description(&mut self, key: &str, description: &str) {
        if let Some(token) = self.colors.get_mut(key) {
            token.description = description.to_string();
        }
    }

    /// Enable or disable a color for export. Works uniformly for every key.
    pub fn set_color_enabled(&mut self, key: &str, enabled: bool) {
        if let Some(token) = self.colors.get_mut(key) {
            token.enabled = enabled;
        }
    }

    pub fn rename_color(&mut self, old: &str, new: &str) {
        rename_entry(&mut self.colors, old, new);
    }

    /// Insert a new black, enabled color. Returns the key used.
    pub fn add_color(&mut self, key: Option<&str>) -> String {
        let key = match key {
            Some(k) => k.to_string(),
            None => format!("color-{}", self.colors.len() + 1),
        };
        self.colors.insert(key.clone(), ColorToken::new("#000000", ""));
        key
    }

    pub fn delete_color(&mut self, key: &str) -> bool {
        self.colors.shift_remove(key).is_some()
    }

    // --- typography ------------------------------------------------------

    pub fn set_primary_font(&mut self, font: &str) {
        self.typography.primary_font = font.to_string();
    }

    pub fn set_secondary_font(&mut self, font: &str) {
        self.typography.secondary_font = font.to_string();
    }

    pub fn set_secondary_enabled(&mut self, enabled: bool) {
        self.typography.secondary_enabled = enabled;
    }

    pub fn set_style_family(&mut self, name: &str, family: FontFamily) {
        if let Some(style) = self.typography.styles.get_mut(name) {
            style.family = family;
        }
    }

    pub fn set_style_size(&mut self, name: &str, raw: &str) {
        let Some(size) = parse_px(raw).filter(|v| *v > 0.0) else {
            return;
        };
        if let Some(style) = self.typography.styles.get_mut(name) {
            style.size = size;
        }
    }

    pub fn set_style_weight(&mut self, name: &str, raw: &str) {
        let Ok(weight) = raw.trim().parse::<u32>() else {
            return;
        };
        if let Some(style) = self.typography.styles.get_mut(name) {
            style.weight = weight;
        }
    }

    pub fn set_style_line_height(&mut self, name: &str, raw: &str) {
        let Some(line_height) = raw.trim().parse::<f64>().ok().filter(|v| *v > 0.0) else {
            return;
        };
        if let Some(style) = self.typography.styles.get_mut(name) {
            style.line_height = line_height;
        }
    }

    pub fn set_style_letter_spacing(&mut self, name: &str, raw: &str) {
        let Ok(letter_spacing) = raw.trim().parse::<f64>() else {
            return;
        };
        if let Some(style) = self.typography.styles.get_mut(name) {
            style.letter_spacing = letter_spacing;
        }
    }

    // --- shadows ---------------------------------------------------------

    /// Set a shadow offset/blur/spread from raw input. Unlike dimensions,
    /// negative values are legal here (offsets and spread).
    pub fn set_shadow_field(&mut self, key: &str, field: ShadowField, raw: &str) {
        let Ok(value) = raw.trim().parse::<f64>() else {
            return;
        };
        if !value.is_finite() {
            return;
        }
        if let Some(shadow) = self.shadows.get_mut(key) {
            match field {
                ShadowField::X => shadow.x = value,
                ShadowField::Y => shadow.y = value,
                ShadowField::Blur => shadow.blur = value,
                ShadowField::Spread => shadow.spread = value,
            }
        }
    }

    pub fn set_shadow_color(&mut self, key: &str, color: &str) {
        if let Some(shadow) = self.shadows.get_mut(key) {
            shadow.color = color.to_string();
        }
    }

    pub fn set_shadow_description(&mut self, key: &str, description: &str) {
        if let Some(shadow) = self.shadows.get_mut(key) {
            shadow.description = description.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_preserves_value() {
        let mut store = TokenStore::default();
        let original = store.spacing["spacing-4"].clone();
        store.rename_dimension(DimensionCategory::Spacing, "spacing-4", "gap-md");
        assert!(!store.spacing.contains_key("spacing-4"));
        assert_eq!(store.spacing["gap-md"], original);
    }

    #[test]
    fn test_rename_empty_key_is_noop() {
        let mut store = TokenStore::default();
        store.rename_color("primary", "");
        assert!(store.colors.contains_key("primary"));
    }

    #[test]
    fn test_rename_same_key_is_noop() {
        let mut store = TokenStore::default();
        let before = store.colors.clone();
        store.rename_color("primary", "primary");
        assert_eq!(store.colors, before);
    }

    #[test]
    fn test_rename_overwrites_existing_key() {
        let mut store = TokenStore::default();
        let secondary_value = store.colors["secondary"].value.clone();
        store.rename_color("secondary", "primary");
        assert!(!store.colors.contains_key("secondary"));
        assert_eq!(store.colors["primary"].value, secondary_value);
        assert_eq!(store.colors.len(), 16);
    }

    #[test]
    fn test_add_spacing_auto_key() {
        let mut store = TokenStore::default();
        // Defaults hold spacing-0 .. spacing-10.
        let key = store.add_dimension(DimensionCategory::Spacing, None);
        assert_eq!(key, "spacing-11");
        assert_eq!(store.spacing["spacing-11"].value, 0.0);
    }

    #[test]
    fn test_add_padding_auto_key() {
        let mut store = TokenStore::default();
        let key = store.add_dimension(DimensionCategory::Padding, None);
        assert_eq!(key, "padding-11");
    }

    #[test]
    fn test_add_color_auto_key() {
        let mut store = TokenStore::default();
        let key = store.add_color(None);
        assert_eq!(key, "color-18");
        assert!(store.colors[&key].enabled);
        assert_eq!(store.colors[&key].value, "#000000");
    }

    #[test]
    fn test_set_dimension_rejects_garbage() {
        let mut store = TokenStore::default();
        store.set_dimension(DimensionCategory::Spacing, "spacing-4", DimensionField::Value, "abc");
        assert_eq!(store.spacing["spacing-4"].value, 16.0);
    }

    #[test]
    fn test_set_dimension_rejects_negative() {
        let mut store = TokenStore::default();
        store.set_dimension(DimensionCategory::Radius, "md", DimensionField::Value, "-3");
        assert_eq!(store.radius["md"].value, 6.0);
    }

    #[test]
    fn test_set_dimension_breakpoints() {
        let mut store = TokenStore::default();
        store.set_dimension(DimensionCategory::Spacing, "spacing-2", DimensionField::Mobile, "5");
        store.set_dimension(DimensionCategory::Spacing, "spacing-2", DimensionField::Tablet, "7");
        assert_eq!(store.spacing["spacing-2"].mobile, Some(5.0));
        assert_eq!(store.spacing["spacing-2"].tablet, Some(7.0));
    }

    #[test]
    fn test_set_dimension_unknown_key_is_noop() {
        let mut store = TokenStore::default();
        store.set_dimension(DimensionCategory::Spacing, "nope", DimensionField::Value, "4");
        assert!(!store.spacing.contains_key("nope"));
    }

    #[test]
    fn test_set_color_value_rejects_invalid_hex() {
        let mut store = TokenStore::default();
        store.set_color_value("primary", "not-a-color");
        assert_eq!(store.colors["primary"].value, "#6366f1");
        store.set_color_value("primary", "#ff0000");
        assert_eq!(store.colors["primary"].value, "#ff0000");
    }

    #[test]
    fn test_toggle_any_color() {
        let mut store = TokenStore::default();
        store.set_color_enabled("neutral-500", false);
        assert!(!store.colors["neutral-500"].enabled);
        store.set_color_enabled("neutral-500", true);
        assert!(store.colors["neutral-500"].enabled);
    }

    #[test]
    fn test_delete_color() {
        let mut store = TokenStore::default();
        assert!(store.delete_color("warning"));
        assert!(!store.delete_color("warning"));
        assert_eq!(store.colors.len(), 16);
    }

    #[test]
    fn test_border_width_shares_dimension_semantics() {
        let mut store = TokenStore::default();
        store.set_dimension(DimensionCategory::BorderWidth, "thick", DimensionField::Value, "6");
        assert_eq!(store.borders.widths["thick"].value, 6.0);
    }

    #[test]
    fn test_shadow_fields_allow_negative_values() {
        let mut store = TokenStore::default();
        store.set_shadow_field("shadow-md", ShadowField::Spread, "-2");
        assert_eq!(store.shadows["shadow-md"].spread, -2.0);
        store.set_shadow_field("shadow-md", ShadowField::Blur, "oops");
        assert_eq!(store.shadows["shadow-md"].blur, 6.0);
    }

    #[test]
    fn test_style_setters_validate() {
        let mut store = TokenStore::default();
        store.set_style_size("h1", "0");
        assert_eq!(store.typography.styles["h1"].size, 48.0);
        store.set_style_size("h1", "52");
        assert_eq!(store.typography.styles["h1"].size, 52.0);
        store.set_style_weight("h1", "heavy");
        assert_eq!(store.typography.styles["h1"].weight, 700);
        store.set_style_line_height("h1", "-1");
        assert_eq!(store.typography.styles["h1"].line_height, 1.2);
        store.set_style_letter_spacing("h1", "0.25");
        assert_eq!(store.typography.styles["h1"].letter_spacing, 0.25);
    }

    #[test]
    fn test_set_style_family() {
        let mut store = TokenStore::default();
        store.set_style_family("body1", FontFamily::Secondary);
        assert_eq!(store.typography.styles["body1"].family, FontFamily::Secondary);
    }
}
