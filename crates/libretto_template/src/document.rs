//! Owned document tree and the TOML adapter that produces it.

use libretto_error::{TemplateValidationError, TemplateValidationErrorKind};
use libretto_interface::DocumentNode;
use std::path::Path;

/// Table key whose string value becomes a node's body text.
pub const TEXT_KEY: &str = "text";

/// Name given to the root node of a parsed document.
pub const ROOT_NODE: &str = "root";

/// An owned, parser-independent document node.
///
/// Build trees by hand for tests or adapters, or parse TOML with
/// [`TreeNode::from_toml_str`].
///
/// # Examples
///
/// ```
/// use libretto_interface::DocumentNode;
/// use libretto_template::TreeNode;
///
/// let step = TreeNode::new("step")
///     .with_attribute("name", "create")
///     .with_text("Write a tagline.");
/// let root = TreeNode::new("root")
///     .with_child(TreeNode::new("prompt").with_attribute("type", "tagline").with_child(step));
///
/// assert_eq!(root.children_named("prompt").len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<TreeNode>,
    text: String,
}

impl TreeNode {
    /// Create an empty node with the given element name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add an attribute, replacing any earlier value for the same key.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    /// Append a child node.
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Set the body text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Parse a TOML document into a node tree.
    ///
    /// Mapping rules, applied recursively from a root node named `root`:
    /// - an array of tables `[[key]]` becomes one child named `key` per table;
    /// - a nested table `[key]` becomes a single child named `key`;
    /// - a string under [`TEXT_KEY`] becomes the body text;
    /// - every other value becomes an attribute; strings keep their raw
    ///   content, other values use their TOML representation (`0.7`, `true`).
    ///
    /// ```toml
    /// [[prompt]]
    /// type = "tagline"
    ///
    ///   [[prompt.step]]
    ///   name = "create"
    ///   temperature = 0.7
    ///   text = "Write a tagline for a ${shopType}."
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, TemplateValidationError> {
        let table: toml::Table = toml::from_str(content).map_err(|e| {
            TemplateValidationError::new(TemplateValidationErrorKind::Document(e.to_string()))
        })?;

        Ok(Self::from_toml_table(ROOT_NODE, &table))
    }

    /// Read and parse a TOML document from disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, TemplateValidationError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            TemplateValidationError::new(TemplateValidationErrorKind::FileRead(format!(
                "{}: {}",
                path.as_ref().display(),
                e
            )))
        })?;

        Self::from_toml_str(&content)
    }

    fn from_toml_table(name: &str, table: &toml::Table) -> Self {
        let mut node = Self::new(name);

        for (key, value) in table {
            match value {
                toml::Value::String(text) if key == TEXT_KEY => node.text = text.clone(),
                toml::Value::Table(child) => {
                    node.children.push(Self::from_toml_table(key, child));
                }
                toml::Value::Array(items)
                    if !items.is_empty() && items.iter().all(toml::Value::is_table) =>
                {
                    node.children.extend(
                        items
                            .iter()
                            .filter_map(toml::Value::as_table)
                            .map(|child| Self::from_toml_table(key, child)),
                    );
                }
                toml::Value::String(s) => node.set_attribute(key.as_str(), s.as_str()),
                other => node.set_attribute(key.as_str(), other.to_string()),
            }
        }

        node
    }
}

impl DocumentNode for TreeNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn attributes(&self) -> Vec<(&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    fn children(&self) -> Vec<&Self> {
        self.children.iter().collect()
    }

    fn text(&self) -> &str {
        &self.text
    }
}
