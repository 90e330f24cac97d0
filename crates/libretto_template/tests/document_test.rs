//! Tests for the owned document tree and its TOML adapter.

use libretto_error::TemplateValidationErrorKind;
use libretto_interface::DocumentNode;
use libretto_template::{ROOT_NODE, TreeNode};

#[test]
fn test_builder_methods() {
    let node = TreeNode::new("step")
        .with_attribute("name", "a")
        .with_attribute("temperature", "0.1")
        .with_attribute("temperature", "0.5")
        .with_text("body");

    assert_eq!(node.name(), "step");
    assert_eq!(node.attribute("name"), Some("a"));
    assert_eq!(node.attribute("temperature"), Some("0.5"));
    assert_eq!(node.attributes().len(), 2);
    assert_eq!(node.text(), "body");
    assert!(node.children().is_empty());
}

#[test]
fn test_children_named_filters_by_element() {
    let root = TreeNode::new("root")
        .with_child(TreeNode::new("prompt"))
        .with_child(TreeNode::new("comment"))
        .with_child(TreeNode::new("prompt"));

    assert_eq!(root.children().len(), 3);
    assert_eq!(root.children_named("prompt").len(), 2);
    assert!(root.children_named("step").is_empty());
}

#[test]
fn test_toml_maps_tables_attributes_and_text() {
    let doc = r#"
[[prompt]]
type = "shop"

  [[prompt.step]]
  name = "first"
  temperature = 0.7
  max_tokens = 256
  text = "Hello ${who}"

  [[prompt.step]]
  name = "second"
  text = "Goodbye"
"#;

    let root = TreeNode::from_toml_str(doc).expect("valid TOML");
    assert_eq!(root.name(), ROOT_NODE);

    let prompts = root.children_named("prompt");
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].attribute("type"), Some("shop"));

    let steps = prompts[0].children_named("step");
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].attribute("name"), Some("first"));
    assert_eq!(steps[0].attribute("temperature"), Some("0.7"));
    assert_eq!(steps[0].attribute("max_tokens"), Some("256"));
    assert_eq!(steps[0].attribute("text"), None);
    assert_eq!(steps[0].text(), "Hello ${who}");
    assert_eq!(steps[1].attribute("name"), Some("second"));
}

#[test]
fn test_toml_nested_table_becomes_single_child() {
    let doc = r#"
[meta]
owner = "docs"
"#;

    let root = TreeNode::from_toml_str(doc).expect("valid TOML");
    let meta = root.children_named("meta");
    assert_eq!(meta.len(), 1);
    assert_eq!(meta[0].attribute("owner"), Some("docs"));
}

#[test]
fn test_toml_syntax_error() {
    let err = TreeNode::from_toml_str("[[prompt]\ntype = ").expect_err("invalid TOML");
    assert!(matches!(err.kind, TemplateValidationErrorKind::Document(_)));
}

#[test]
fn test_toml_missing_file() {
    let err = TreeNode::from_toml_file("/nonexistent/libretto/prompts.toml")
        .expect_err("missing file");
    assert!(matches!(err.kind, TemplateValidationErrorKind::FileRead(_)));
}
