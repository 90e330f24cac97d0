//! Parser-independent view of a template definition document.

/// A node of a parsed template document.
///
/// The template store walks documents only through this trait, so any
/// parser (TOML, XML, YAML, a database row set) can feed it by exposing its
/// tree as nodes with a name, string attributes, child nodes, and body text.
pub trait DocumentNode {
    /// Element name, e.g. `prompt` or `step`.
    fn name(&self) -> &str;

    /// Value of one attribute.
    fn attribute(&self, key: &str) -> Option<&str>;

    /// All attributes as key/value pairs, in the order the parser reports them.
    fn attributes(&self) -> Vec<(&str, &str)>;

    /// Child nodes, in document order.
    fn children(&self) -> Vec<&Self>;

    /// Body text, exactly as it appears in the document.
    fn text(&self) -> &str;

    /// Children with the given element name.
    fn children_named(&self, name: &str) -> Vec<&Self> {
        self.children()
            .into_iter()
            .filter(|child| child.name() == name)
            .collect()
    }
}
