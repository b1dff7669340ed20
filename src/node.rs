use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::{AttributeError, TreeError};
use crate::list::{ChildId, ChildList};
use crate::serialize;

/// One element of a document: a name, attributes and either inner text or
/// child elements.
///
/// Text and children are meant to be exclusive, but nothing stops a caller
/// from setting both. Serialization prefers the text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlNode {
    name: Option<String>,
    text: Option<String>,
    is_text_node: bool,
    attributes: IndexMap<String, String>,
    children: ChildList,
}

impl XmlNode {
    /// Unnamed node without text or children
    pub fn new() -> Self {
        XmlNode::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        XmlNode {
            name: Some(name.into()),
            ..XmlNode::default()
        }
    }

    /// Create a text node with the given inner text.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut node = XmlNode::named(name);
        node.set_text(text);
        node
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Assign inner text and mark the node as a text node. Existing children
    /// are kept.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
        self.is_text_node = true;
    }

    /// Text nodes do not have any child nodes.
    pub fn is_text_node(&self) -> bool {
        self.is_text_node
    }

    pub fn set_text_node(&mut self, is_text_node: bool) {
        self.is_text_node = is_text_node;
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Insert or overwrite an attribute. Overwriting keeps the attribute's
    /// original position.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl ToString) {
        self.attributes.insert(name.into(), value.to_string());
    }

    /// Attributes in the order they were first set
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `false` if absent, an error if present but neither `true` nor `false`.
    pub fn bool_attribute(&self, name: &str) -> Result<bool, AttributeError> {
        Ok(self.try_bool_attribute(name)?.unwrap_or_default())
    }

    /// `0` if absent, an error if present but not an `i32`.
    pub fn int_attribute(&self, name: &str) -> Result<i32, AttributeError> {
        Ok(self.try_int_attribute(name)?.unwrap_or_default())
    }

    /// `0.0` if absent, an error if present but not a number.
    pub fn float_attribute(&self, name: &str) -> Result<f32, AttributeError> {
        Ok(self.try_float_attribute(name)?.unwrap_or_default())
    }

    pub fn try_bool_attribute(&self, name: &str) -> Result<Option<bool>, AttributeError> {
        self.convert_attribute(name, "bool", |value| {
            if value.eq_ignore_ascii_case("true") {
                Some(true)
            } else if value.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        })
    }

    pub fn try_int_attribute(&self, name: &str) -> Result<Option<i32>, AttributeError> {
        self.convert_attribute(name, "int", |value| i32::from_str(value).ok())
    }

    pub fn try_float_attribute(&self, name: &str) -> Result<Option<f32>, AttributeError> {
        self.convert_attribute(name, "float", |value| {
            f64::from_str(value).ok().map(|f| f as f32)
        })
    }

    fn convert_attribute<T>(
        &self,
        name: &str,
        expected: &'static str,
        convert: impl FnOnce(&str) -> Option<T>,
    ) -> Result<Option<T>, AttributeError> {
        let value = match self.attributes.get(name) {
            Some(value) => value,
            None => return Ok(None),
        };
        match convert(value.trim()) {
            Some(converted) => Ok(Some(converted)),
            None => Err(AttributeError::InvalidValue {
                name: name.to_string(),
                value: value.clone(),
                expected,
            }),
        }
    }

    /// Append a child. O(1).
    pub fn add_child(&mut self, node: XmlNode) -> ChildId {
        self.children.add_node(node)
    }

    /// Insert a child before all others. O(1).
    pub fn prepend_child(&mut self, node: XmlNode) -> ChildId {
        self.children.push_front(node)
    }

    /// Detach a child. Store the returned node on its own rather than keeping
    /// its old handle around.
    pub fn remove_child(&mut self, id: ChildId) -> Result<XmlNode, TreeError> {
        self.children.remove_node(id)
    }

    pub fn child(&self, id: ChildId) -> Option<&XmlNode> {
        self.children.get(id)
    }

    pub fn child_mut(&mut self, id: ChildId) -> Option<&mut XmlNode> {
        self.children.get_mut(id)
    }

    pub fn first_child(&self) -> Option<&XmlNode> {
        self.children.first_node()
    }

    pub fn has_children(&self) -> bool {
        self.children.has_nodes()
    }

    /// O(n) in the number of children.
    pub fn num_children(&self) -> usize {
        self.children.count_nodes()
    }

    pub fn children(&self) -> &ChildList {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut ChildList {
        &mut self.children
    }

    /// Write this node and everything below it as XML text.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        serialize::write_node(self, &mut out);
        out
    }
}
