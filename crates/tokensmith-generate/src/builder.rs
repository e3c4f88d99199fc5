//! The host document capability interface.

use tokensmith_core::{Color, GenerateError};

use crate::matrix::ButtonDescriptor;

/// Opaque handle to a node created in the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// Capability interface over the host's document API.
///
/// The generation engine only ever talks to the host through this trait, so
/// it can be driven by a real plugin adapter or by a fake in tests. All
/// methods that touch the document are fallible; the engine aborts on the
/// first error and performs no rollback.
pub trait DocumentBuilder {
    /// Load a font. Must be called before any text-producing method.
    fn load_font(&mut self, family: &str, style: &str) -> Result<(), GenerateError>;

    /// Create a shared icon component from an SVG string, tinted with
    /// `color` and fitted into a `size` × `size` box.
    fn create_icon(
        &mut self,
        name: &str,
        svg: &str,
        color: Color,
        size: f64,
    ) -> Result<NodeId, GenerateError>;

    /// Create one button component for a descriptor. The two icon handles
    /// are referenced as hidden instances inside the component, not copied.
    fn create_component(
        &mut self,
        descriptor: &ButtonDescriptor,
        left_icon: NodeId,
        right_icon: NodeId,
    ) -> Result<NodeId, GenerateError>;

    /// Create a named text style in the host document.
    fn create_text_style(
        &mut self,
        name: &str,
        font_family: &str,
        size: f64,
        weight: u32,
        line_height: f64,
        letter_spacing: f64,
    ) -> Result<NodeId, GenerateError>;

    /// Group components into a variant set owning them as children.
    fn group_as_variant_set(
        &mut self,
        name: &str,
        components: &[NodeId],
    ) -> Result<NodeId, GenerateError>;

    /// Add a boolean toggle property to a variant set. Returns the property
    /// key used for binding.
    fn add_toggle_property(
        &mut self,
        set: NodeId,
        name: &str,
        default: bool,
    ) -> Result<String, GenerateError>;

    /// Bind the visibility of every child layer named `layer` to a toggle
    /// property of the set.
    fn bind_visibility(
        &mut self,
        set: NodeId,
        layer: &str,
        property: &str,
    ) -> Result<(), GenerateError>;

    /// Scroll/zoom the host viewport to the given nodes. Best effort.
    fn focus(&mut self, nodes: &[NodeId]);

    /// Show a message to the user. Fire-and-forget; this is the only
    /// feedback channel the engine has.
    fn notify(&mut self, message: &str);
}
