//! Tests for template loading and validation.

use libretto_error::TemplateValidationErrorKind;
use libretto_template::{TemplateStore, TreeNode, normalize_body};
use std::io::Write;

const SHOP_PROMPTS: &str = r#"
[[prompt]]
type = "shop"

  [[prompt.step]]
  name = "name"
  temperature = 0.7
  text = """
      Name a ${shopType} in ${country}.
      Give one name only.
  """

  [[prompt.step]]
  name = "history"
  text = """
      Write a short history of the shop.

      Keep it under 100 words.
  """

[[prompt]]
type = "tagline"

  [[prompt.step]]
  name = "create"
  text = "Write a tagline."
"#;

fn prompt(key: &str) -> TreeNode {
    TreeNode::new("prompt").with_attribute("type", key)
}

fn step(name: &str, text: &str) -> TreeNode {
    TreeNode::new("step")
        .with_attribute("name", name)
        .with_text(text)
}

#[test]
fn test_load_from_toml() {
    let store = TemplateStore::from_toml_str(SHOP_PROMPTS).expect("valid templates");

    assert_eq!(store.len(), 2);
    assert_eq!(store.keys(), vec!["shop", "tagline"]);

    let shop = store.get("shop").expect("shop template");
    assert_eq!(shop.key(), "shop");
    assert_eq!(shop.len(), 2);

    let names: Vec<&str> = shop.steps().iter().map(|s| s.name().as_str()).collect();
    assert_eq!(names, vec!["name", "history"]);

    let first = &shop.steps()[0];
    assert_eq!(
        first.template_text(),
        "Name a ${shopType} in ${country}.\nGive one name only."
    );
    assert_eq!(
        first.parameters().get("temperature").map(String::as_str),
        Some("0.7")
    );
    assert!(!first.parameters().contains_key("name"));

    let second = shop.step("history").expect("history step");
    assert_eq!(
        second.template_text(),
        "Write a short history of the shop.\n\nKeep it under 100 words."
    );
    assert!(second.parameters().is_empty());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(SHOP_PROMPTS.as_bytes()).expect("write templates");

    let store = TemplateStore::from_file(file.path()).expect("valid templates");
    assert!(store.contains("tagline"));
    assert!(!store.contains("missing"));
}

#[test]
fn test_missing_file_is_validation_error() {
    let err = TemplateStore::from_file("/nonexistent/libretto/prompts.toml")
        .expect_err("missing file");
    assert!(matches!(err.kind, TemplateValidationErrorKind::FileRead(_)));
}

#[test]
fn test_require_unknown_key() {
    let store = TemplateStore::from_toml_str(SHOP_PROMPTS).expect("valid templates");
    let err = store.require("unknown").expect_err("unknown key");
    assert_eq!(err.key, "unknown");
    assert!(store.require("shop").is_ok());
}

#[test]
fn test_fails_when_prompt_has_no_key() {
    let root = TreeNode::new("root")
        .with_child(prompt("ok").with_child(step("a", "x")))
        .with_child(TreeNode::new("prompt").with_child(step("a", "x")));

    let err = TemplateStore::load(&root).expect_err("missing type");
    assert_eq!(err.kind, TemplateValidationErrorKind::MissingTemplateKey(2));
}

#[test]
fn test_blank_key_counts_as_missing() {
    let root = TreeNode::new("root").with_child(prompt("  ").with_child(step("a", "x")));

    let err = TemplateStore::load(&root).expect_err("blank type");
    assert!(matches!(
        err.kind,
        TemplateValidationErrorKind::MissingTemplateKey(1)
    ));
}

#[test]
fn test_fails_when_step_has_no_name() {
    let root = TreeNode::new("root").with_child(
        prompt("shop")
            .with_child(step("a", "x"))
            .with_child(TreeNode::new("step").with_text("unnamed")),
    );

    let err = TemplateStore::load(&root).expect_err("missing name");
    assert_eq!(
        err.kind,
        TemplateValidationErrorKind::MissingStepName {
            template: "shop".to_string(),
            position: 2,
        }
    );
}

#[test]
fn test_fails_on_duplicate_step_names() {
    let doc = r#"
[[prompt]]
type = "dup"

  [[prompt.step]]
  name = "same"
  text = "one"

  [[prompt.step]]
  name = "same"
  text = "two"
"#;

    let err = TemplateStore::from_toml_str(doc).expect_err("duplicate names");
    assert_eq!(
        err.kind,
        TemplateValidationErrorKind::DuplicateStepName {
            template: "dup".to_string(),
            step: "same".to_string(),
        }
    );
    assert!(err.to_string().contains("unique names"));
}

#[test]
fn test_same_step_name_in_different_prompts_is_allowed() {
    let root = TreeNode::new("root")
        .with_child(prompt("one").with_child(step("a", "x")))
        .with_child(prompt("two").with_child(step("a", "y")));

    let store = TemplateStore::load(&root).expect("valid templates");
    assert_eq!(store.len(), 2);
}

#[test]
fn test_prompt_without_steps_is_loaded() {
    let root = TreeNode::new("root").with_child(prompt("empty"));

    let store = TemplateStore::load(&root).expect("valid templates");
    let empty = store.get("empty").expect("empty template");
    assert!(empty.is_empty());
}

#[test]
fn test_later_duplicate_prompt_replaces_earlier() {
    let root = TreeNode::new("root")
        .with_child(prompt("shop").with_child(step("old", "x")))
        .with_child(prompt("shop").with_child(step("new", "y")));

    let store = TemplateStore::load(&root).expect("valid templates");
    assert_eq!(store.len(), 1);

    let shop = store.get("shop").expect("shop template");
    assert!(shop.step("new").is_some());
    assert!(shop.step("old").is_none());
}

#[test]
fn test_unrelated_elements_are_ignored() {
    let root = TreeNode::new("root")
        .with_child(TreeNode::new("meta").with_attribute("owner", "docs"))
        .with_child(prompt("shop").with_child(step("a", "x")));

    let store = TemplateStore::load(&root).expect("valid templates");
    assert_eq!(store.keys(), vec!["shop"]);
}

#[test]
fn test_empty_document() {
    let store = TemplateStore::from_toml_str("").expect("empty document");
    assert!(store.is_empty());
}

#[test]
fn test_normalize_body() {
    assert_eq!(normalize_body("  one  \n\t two"), "one\ntwo");
    assert_eq!(normalize_body("\n\n   \n"), "");
    assert_eq!(normalize_body("a\n\n\nb"), "a\n\n\nb");
}
