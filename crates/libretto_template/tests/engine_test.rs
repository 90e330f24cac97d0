//! Tests for placeholder substitution.

use libretto_core::RunContext;
use libretto_error::RenderErrorKind;
use libretto_template::{TemplateEngine, placeholders};

#[test]
fn test_process_replaces_every_occurrence() {
    let engine = TemplateEngine::new();
    let ctx = RunContext::new().set("x", "Z");
    assert_eq!(engine.process("a${x}b${x}c", &ctx), "aZbZc");
}

#[test]
fn test_process_multiple_variables() {
    let engine = TemplateEngine::new();
    let ctx = RunContext::new()
        .set("shopType", "car repair shop")
        .set("country", "France");
    assert_eq!(
        engine.process("Name a ${shopType} in ${country}.", &ctx),
        "Name a car repair shop in France."
    );
}

#[test]
fn test_process_empty_context_is_identity() {
    let engine = TemplateEngine::new();
    let text = "Keep ${this} exactly";
    assert_eq!(engine.process(text, &RunContext::new()), text);
}

#[test]
fn test_process_missing_variable_becomes_empty() {
    let engine = TemplateEngine::new();
    let ctx = RunContext::new().set("other", "1");
    assert_eq!(engine.process("[${missing}]", &ctx), "[]");
}

#[test]
fn test_process_without_placeholders_is_unchanged() {
    let engine = TemplateEngine::new();
    let ctx = RunContext::new().set("x", "1");
    assert_eq!(engine.process("plain $x {x} text", &ctx), "plain $x {x} text");
}

#[test]
fn test_process_does_not_resubstitute_values() {
    let engine = TemplateEngine::new();
    let ctx = RunContext::new().set("a", "${b}").set("b", "nope");
    assert_eq!(engine.process("${a}", &ctx), "${b}");
}

#[test]
fn test_lenient_render_matches_process() {
    let engine = TemplateEngine::new();
    let ctx = RunContext::new().set("x", "1");
    let rendered = engine.render("${x}-${y}", &ctx).expect("lenient render");
    assert_eq!(rendered, engine.process("${x}-${y}", &ctx));
    assert_eq!(rendered, "1-");
}

#[test]
fn test_strict_render_rejects_unresolved_variable() {
    let engine = TemplateEngine::strict();
    assert!(engine.is_strict());

    let ctx = RunContext::new().set("x", "1");
    let err = engine
        .render("${x} and ${missing}", &ctx)
        .expect_err("strict render should fail");
    assert_eq!(
        err.kind,
        RenderErrorKind::UnresolvedVariable("missing".to_string())
    );
}

#[test]
fn test_strict_render_checks_empty_context() {
    let engine = TemplateEngine::with_strict(true);
    let err = engine
        .render("Hello ${name}", &RunContext::new())
        .expect_err("strict render should fail");
    assert!(err.to_string().contains("'name'"));
}

#[test]
fn test_strict_render_succeeds_when_resolved() {
    let engine = TemplateEngine::strict();
    let ctx = RunContext::new().set("name", "Ada");
    assert_eq!(
        engine.render("Hello ${name}", &ctx).expect("resolved"),
        "Hello Ada"
    );
}

#[test]
fn test_placeholders_are_distinct_and_ordered() {
    assert_eq!(
        placeholders("${b} then ${a} then ${b} again"),
        vec!["b".to_string(), "a".to_string()]
    );
    assert!(placeholders("no variables here").is_empty());
}
