//! Drivers that walk the descriptor matrix against a builder.

use tokensmith_core::{Color, GenerateError, TypographyConfig};

use crate::builder::{DocumentBuilder, NodeId};
use crate::icons::{ARROW_LEFT_SVG, ARROW_RIGHT_SVG};
use crate::matrix::{expand, ButtonSpec, SIZES, STATES, VARIANTS};

const FONT_FAMILY: &str = "Inter";
const FONT_STYLE: &str = "Medium";
const ICON_SIZE: f64 = 16.0;

/// Handles to everything a successful button-set run created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedSet {
    pub variant_set: NodeId,
    pub left_icon: NodeId,
    pub right_icon: NodeId,
    pub component_count: usize,
}

/// Create the two shared arrow icon components.
pub fn create_icon_pair<B: DocumentBuilder>(
    builder: &mut B,
    color: Color,
) -> Result<(NodeId, NodeId), GenerateError> {
    let left = builder.create_icon("Icon/arrow-left", ARROW_LEFT_SVG, color, ICON_SIZE)?;
    let right = builder.create_icon("Icon/arrow-right", ARROW_RIGHT_SVG, color, ICON_SIZE)?;
    Ok((left, right))
}

/// Create the full button variant set in the host document.
///
/// Walks the 36-descriptor matrix, groups the created components into one
/// variant set, wires the `LeftIcon`/`RightIcon` toggle properties to icon
/// visibility across every child, and reports the total to the user.
///
/// Any builder failure aborts the run; nodes created before the failure
/// stay in the document.
pub fn create_button_set<B: DocumentBuilder>(
    builder: &mut B,
    spec: &ButtonSpec,
) -> Result<GeneratedSet, GenerateError> {
    builder.load_font(FONT_FAMILY, FONT_STYLE)?;

    let (left_icon, right_icon) = create_icon_pair(builder, spec.text_color)?;

    let descriptors = expand(spec);
    let mut components = Vec::with_capacity(descriptors.len());
    for descriptor in &descriptors {
        components.push(builder.create_component(descriptor, left_icon, right_icon)?);
    }

    let variant_set = builder.group_as_variant_set("Button", &components)?;

    let left_prop = builder.add_toggle_property(variant_set, "LeftIcon", false)?;
    let right_prop = builder.add_toggle_property(variant_set, "RightIcon", false)?;
    builder.bind_visibility(variant_set, "LeftIcon", &left_prop)?;
    builder.bind_visibility(variant_set, "RightIcon", &right_prop)?;

    builder.focus(&[variant_set, left_icon, right_icon]);
    builder.notify(&format!(
        "Button component set created with {} sizes, {} variants, {} states! Total: {} components",
        SIZES.len(),
        VARIANTS.len(),
        STATES.len(),
        descriptors.len()
    ));

    Ok(GeneratedSet {
        variant_set,
        left_icon,
        right_icon,
        component_count: descriptors.len(),
    })
}

/// Create one host text style per resolvable typography style.
///
/// Styles that reference the disabled secondary family are skipped rather
/// than silently falling back to the primary font; only the created count
/// is reported. Returns that count.
pub fn create_text_styles<B: DocumentBuilder>(
    builder: &mut B,
    typography: &TypographyConfig,
) -> Result<usize, GenerateError> {
    let mut created = 0;
    for (name, style) in &typography.styles {
        let Some(family) = typography.resolve_family(style.family) else {
            continue;
        };
        builder.create_text_style(
            name,
            family,
            style.size,
            style.weight,
            style.line_height,
            style.letter_spacing,
        )?;
        created += 1;
    }
    builder.notify(&format!("Created {created} text styles"));
    Ok(created)
}
