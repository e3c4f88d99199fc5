//! Recording builder used by the engine tests.

use tokensmith_core::{Color, GenerateError};

use crate::builder::{DocumentBuilder, NodeId};
use crate::matrix::ButtonDescriptor;

/// One recorded builder call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    LoadFont {
        family: String,
        style: String,
    },
    CreateIcon {
        name: String,
        color: Color,
        size: f64,
    },
    CreateComponent {
        name: String,
        left_icon: NodeId,
        right_icon: NodeId,
    },
    CreateTextStyle {
        name: String,
        font_family: String,
        size: f64,
        weight: u32,
    },
    GroupAsVariantSet {
        name: String,
        components: Vec<NodeId>,
    },
    AddToggleProperty {
        set: NodeId,
        name: String,
        default: bool,
    },
    BindVisibility {
        set: NodeId,
        layer: String,
        property: String,
    },
    Focus {
        nodes: Vec<NodeId>,
    },
}

/// In-memory `DocumentBuilder` that records every call and hands out
/// sequential node ids. Failure injection is per concern.
#[derive(Debug, Default)]
pub struct RecordingBuilder {
    pub calls: Vec<Call>,
    pub notifications: Vec<String>,
    pub fail_font_load: bool,
    /// Fail `create_component` once this many components exist.
    pub fail_after_components: Option<usize>,
    next_id: u64,
}

impl RecordingBuilder {
    fn next_id(&mut self) -> NodeId {
        self.next_id += 1;
        NodeId(self.next_id)
    }

    fn component_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::CreateComponent { .. }))
            .count()
    }
}

impl DocumentBuilder for RecordingBuilder {
    fn load_font(&mut self, family: &str, style: &str) -> Result<(), GenerateError> {
        if self.fail_font_load {
            return Err(GenerateError::FontLoadFailed {
                family: family.to_string(),
                style: style.to_string(),
            });
        }
        self.calls.push(Call::LoadFont {
            family: family.to_string(),
            style: style.to_string(),
        });
        Ok(())
    }

    fn create_icon(
        &mut self,
        name: &str,
        _svg: &str,
        color: Color,
        size: f64,
    ) -> Result<NodeId, GenerateError> {
        self.calls.push(Call::CreateIcon {
            name: name.to_string(),
            color,
            size,
        });
        Ok(self.next_id())
    }

    fn create_component(
        &mut self,
        descriptor: &ButtonDescriptor,
        left_icon: NodeId,
        right_icon: NodeId,
    ) -> Result<NodeId, GenerateError> {
        if let Some(limit) = self.fail_after_components {
            if self.component_count() >= limit {
                return Err(GenerateError::NodeCreationFailed {
                    reason: format!("injected failure at {}", descriptor.name),
                });
            }
        }
        self.calls.push(Call::CreateComponent {
            name: descriptor.name.clone(),
            left_icon,
            right_icon,
        });
        Ok(self.next_id())
    }

    fn create_text_style(
        &mut self,
        name: &str,
        font_family: &str,
        size: f64,
        weight: u32,
        _line_height: f64,
        _letter_spacing: f64,
    ) -> Result<NodeId, GenerateError> {
        self.calls.push(Call::CreateTextStyle {
            name: name.to_string(),
            font_family: font_family.to_string(),
            size,
            weight,
        });
        Ok(self.next_id())
    }

    fn group_as_variant_set(
        &mut self,
        name: &str,
        components: &[NodeId],
    ) -> Result<NodeId, GenerateError> {
        self.calls.push(Call::GroupAsVariantSet {
            name: name.to_string(),
            components: components.to_vec(),
        });
        Ok(self.next_id())
    }

    fn add_toggle_property(
        &mut self,
        set: NodeId,
        name: &str,
        default: bool,
    ) -> Result<String, GenerateError> {
        self.calls.push(Call::AddToggleProperty {
            set,
            name: name.to_string(),
            default,
        });
        Ok(format!("prop:{name}"))
    }

    fn bind_visibility(
        &mut self,
        set: NodeId,
        layer: &str,
        property: &str,
    ) -> Result<(), GenerateError> {
        self.calls.push(Call::BindVisibility {
            set,
            layer: layer.to_string(),
            property: property.to_string(),
        });
        Ok(())
    }

    fn focus(&mut self, nodes: &[NodeId]) {
        self.calls.push(Call::Focus {
            nodes: nodes.to_vec(),
        });
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}
