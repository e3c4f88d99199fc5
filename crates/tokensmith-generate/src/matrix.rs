//! Pure descriptor expansion.
//!
//! Expands a small button spec (text, base color, text color, radius) into
//! the full cross product of sizes, style variants, and interaction states,
//! with resolved colors and grid placement. Nothing here touches a host
//! document; the output is plain data.

use tokensmith_core::Color;

/// Fixed width of every generated button.
pub const BUTTON_WIDTH: f64 = 120.0;

/// Gap between grid cells and rows.
pub const GRID_GAP: f64 = 20.0;

/// Geometry for one button size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSpec {
    pub name: &'static str,
    pub height: f64,
    pub padding_x: f64,
    pub padding_y: f64,
    pub font_size: f64,
    pub icon_size: f64,
}

/// The size table is fixed, not token-driven.
pub const SIZES: [SizeSpec; 3] = [
    SizeSpec { name: "Small", height: 32.0, padding_x: 12.0, padding_y: 6.0, font_size: 12.0, icon_size: 14.0 },
    SizeSpec { name: "Medium", height: 40.0, padding_x: 16.0, padding_y: 10.0, font_size: 14.0, icon_size: 16.0 },
    SizeSpec { name: "Large", height: 48.0, padding_x: 20.0, padding_y: 12.0, font_size: 16.0, icon_size: 18.0 },
];

/// Style variant of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    /// Solid fill in the base color.
    Primary,
    /// White fill, 1px border in the base color.
    Secondary,
    /// Transparent fill, underlined text, no border.
    Link,
}

pub const VARIANTS: [VariantKind; 3] = [VariantKind::Primary, VariantKind::Secondary, VariantKind::Link];

impl VariantKind {
    pub fn name(self) -> &'static str {
        match self {
            VariantKind::Primary => "Primary",
            VariantKind::Secondary => "Secondary",
            VariantKind::Link => "Link",
        }
    }
}

/// Interaction state of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    Default,
    Hover,
    Click,
    Disabled,
}

pub const STATES: [StateKind; 4] = [
    StateKind::Default,
    StateKind::Hover,
    StateKind::Click,
    StateKind::Disabled,
];

impl StateKind {
    pub fn name(self) -> &'static str {
        match self {
            StateKind::Default => "Default",
            StateKind::Hover => "Hover",
            StateKind::Click => "Click",
            StateKind::Disabled => "Disabled",
        }
    }
}

/// A stroke: border color plus weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub weight: f64,
}

/// Input to the generation engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonSpec {
    pub text: String,
    pub base_color: Color,
    pub text_color: Color,
    pub corner_radius: f64,
}

/// One fully resolved (size, variant, state) combination.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonDescriptor {
    /// Variant-set property name, e.g. "Size=Small, Variant=Primary, State=Default".
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub padding_x: f64,
    pub padding_y: f64,
    pub font_size: f64,
    pub icon_size: f64,
    /// `None` means a transparent background.
    pub fill: Option<Color>,
    pub text_color: Color,
    pub border: Option<Stroke>,
    pub corner_radius: f64,
    pub underline: bool,
    /// Icon slots start hidden; visibility is toggled through the variant
    /// set's boolean properties.
    pub left_icon_visible: bool,
    pub right_icon_visible: bool,
}

struct StateStyle {
    fill: Option<Color>,
    text_color: Color,
    border: Option<Stroke>,
    underline: bool,
}

// Disabled states use fixed neutral grays regardless of the base color.
const DISABLED_FILL: Color = Color::rgb(0.88, 0.88, 0.88);
const DISABLED_TEXT: Color = Color::rgb(0.6, 0.6, 0.6);
const DISABLED_OUTLINE_FILL: Color = Color::rgb(0.98, 0.98, 0.98);
const DISABLED_OUTLINE_TEXT: Color = Color::rgb(0.7, 0.7, 0.7);
const DISABLED_OUTLINE_BORDER: Color = Color::rgb(0.85, 0.85, 0.85);

fn state_style(variant: VariantKind, state: StateKind, base: Color, text: Color) -> StateStyle {
    match variant {
        VariantKind::Primary => {
            let (fill, text_color) = match state {
                StateKind::Default => (base, text),
                StateKind::Hover => (base.darken(0.08), text),
                StateKind::Click => (base.darken(0.15), text),
                StateKind::Disabled => (DISABLED_FILL, DISABLED_TEXT),
            };
            StateStyle {
                fill: Some(fill),
                text_color,
                border: None,
                underline: false,
            }
        }
        VariantKind::Secondary => {
            let (fill, text_color, border_color) = match state {
                StateKind::Default => (Color::WHITE, base, base),
                StateKind::Hover => (base.lighten(0.85), base, base),
                StateKind::Click => (base.lighten(0.75), base, base),
                StateKind::Disabled => {
                    (DISABLED_OUTLINE_FILL, DISABLED_OUTLINE_TEXT, DISABLED_OUTLINE_BORDER)
                }
            };
            StateStyle {
                fill: Some(fill),
                text_color,
                border: Some(Stroke { color: border_color, weight: 1.0 }),
                underline: false,
            }
        }
        VariantKind::Link => {
            let text_color = match state {
                StateKind::Default => base,
                StateKind::Hover => base.darken(0.10),
                StateKind::Click => base.darken(0.15),
                StateKind::Disabled => DISABLED_OUTLINE_TEXT,
            };
            StateStyle {
                fill: None,
                text_color,
                border: None,
                underline: true,
            }
        }
    }
}

/// Expand a spec into the full descriptor matrix.
///
/// Layout: one row per (size, variant) pair, states left to right, rows
/// advancing by `height + GRID_GAP`. Always produces exactly
/// `SIZES.len() * VARIANTS.len() * STATES.len()` descriptors.
pub fn expand(spec: &ButtonSpec) -> Vec<ButtonDescriptor> {
    let mut descriptors = Vec::with_capacity(SIZES.len() * VARIANTS.len() * STATES.len());
    let mut y = 0.0;

    for size in &SIZES {
        for variant in VARIANTS {
            let mut x = 0.0;
            for state in STATES {
                let style = state_style(variant, state, spec.base_color, spec.text_color);
                descriptors.push(ButtonDescriptor {
                    name: format!(
                        "Size={}, Variant={}, State={}",
                        size.name,
                        variant.name(),
                        state.name()
                    ),
                    x,
                    y,
                    width: BUTTON_WIDTH,
                    height: size.height,
                    padding_x: size.padding_x,
                    padding_y: size.padding_y,
                    font_size: size.font_size,
                    icon_size: size.icon_size,
                    fill: style.fill,
                    text_color: style.text_color,
                    border: style.border,
                    corner_radius: spec.corner_radius,
                    underline: style.underline,
                    left_icon_visible: false,
                    right_icon_visible: false,
                });
                x += BUTTON_WIDTH + GRID_GAP;
            }
            y += size.height + GRID_GAP;
        }
    }

    descriptors
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn spec(base: &str, radius: f64) -> ButtonSpec {
        ButtonSpec {
            text: "Button".to_string(),
            base_color: Color::from_hex(base).unwrap(),
            text_color: Color::WHITE,
            corner_radius: radius,
        }
    }

    fn find<'a>(descriptors: &'a [ButtonDescriptor], name: &str) -> &'a ButtonDescriptor {
        descriptors
            .iter()
            .find(|d| d.name == name)
            .unwrap_or_else(|| panic!("missing descriptor {name}"))
    }

    #[test]
    fn test_descriptor_count() {
        let descriptors = expand(&spec("#FF0000", 8.0));
        assert_eq!(descriptors.len(), 36);
    }

    #[test]
    fn test_medium_primary_default_scenario() {
        let descriptors = expand(&spec("#FF0000", 8.0));
        let d = find(&descriptors, "Size=Medium, Variant=Primary, State=Default");
        assert_eq!(d.fill, Some(Color::rgb(1.0, 0.0, 0.0)));
        assert_eq!(d.corner_radius, 8.0);
        assert_eq!(d.height, 40.0);
        assert_eq!(d.width, 120.0);
    }

    #[test]
    fn test_medium_primary_hover_scenario() {
        let descriptors = expand(&spec("#FF0000", 8.0));
        let d = find(&descriptors, "Size=Medium, Variant=Primary, State=Hover");
        let fill = d.fill.unwrap();
        assert!((fill.r - 0.92).abs() < 1e-6);
        assert_eq!(fill.g, 0.0);
        assert_eq!(fill.b, 0.0);
    }

    #[test]
    fn test_disabled_grays_ignore_base_color() {
        let red = expand(&spec("#FF0000", 4.0));
        let blue = expand(&spec("#0000FF", 4.0));
        for name in [
            "Size=Small, Variant=Primary, State=Disabled",
            "Size=Large, Variant=Secondary, State=Disabled",
        ] {
            assert_eq!(find(&red, name).fill, find(&blue, name).fill);
            assert_eq!(find(&red, name).text_color, find(&blue, name).text_color);
        }
        let d = find(&red, "Size=Small, Variant=Primary, State=Disabled");
        assert_eq!(d.fill, Some(Color::rgb(0.88, 0.88, 0.88)));
        assert_eq!(d.text_color, Color::rgb(0.6, 0.6, 0.6));
    }

    #[test]
    fn test_secondary_is_outlined() {
        let descriptors = expand(&spec("#6366F1", 6.0));
        let d = find(&descriptors, "Size=Medium, Variant=Secondary, State=Default");
        assert_eq!(d.fill, Some(Color::WHITE));
        let stroke = d.border.unwrap();
        assert_eq!(stroke.weight, 1.0);
        assert_eq!(stroke.color, Color::from_hex("#6366F1").unwrap());
    }

    #[test]
    fn test_link_is_transparent_and_underlined() {
        let descriptors = expand(&spec("#6366F1", 6.0));
        let d = find(&descriptors, "Size=Large, Variant=Link, State=Default");
        assert_eq!(d.fill, None);
        assert!(d.underline);
        assert!(d.border.is_none());
    }

    #[test]
    fn test_grid_placement() {
        let descriptors = expand(&spec("#FF0000", 4.0));
        // First row: Small/Primary, states left to right.
        let row: Vec<_> = descriptors[0..4].iter().map(|d| (d.x, d.y)).collect();
        assert_eq!(row, vec![(0.0, 0.0), (140.0, 0.0), (280.0, 0.0), (420.0, 0.0)]);
        // Second row advances by Small height + gap.
        assert_eq!(descriptors[4].y, 52.0);
        assert_eq!(descriptors[4].x, 0.0);
        // Medium rows start after the three Small rows.
        let d = find(&descriptors, "Size=Medium, Variant=Primary, State=Default");
        assert_eq!(d.y, 3.0 * 52.0);
    }

    #[test]
    fn test_icon_slots_start_hidden() {
        let descriptors = expand(&spec("#FF0000", 4.0));
        assert!(descriptors.iter().all(|d| !d.left_icon_visible && !d.right_icon_visible));
    }

    proptest! {
        #[test]
        fn prop_count_is_input_independent(
            r in 0.0f32..=1.0,
            g in 0.0f32..=1.0,
            b in 0.0f32..=1.0,
            radius in 0.0f64..=64.0,
        ) {
            let spec = ButtonSpec {
                text: "x".to_string(),
                base_color: Color::rgb(r, g, b),
                text_color: Color::BLACK,
                corner_radius: radius,
            };
            prop_assert_eq!(expand(&spec).len(), 36);
        }
    }
}
