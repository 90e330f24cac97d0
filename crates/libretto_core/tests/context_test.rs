//! Tests for run variables and execution records.

use libretto_core::{ExecutedStep, ExecutedSteps, Params, PromptTemplate, RunContext, Step};
use libretto_error::TemplateValidationErrorKind;
use std::collections::HashMap;

#[test]
fn test_context_from_iterator() {
    let ctx: RunContext = [("shopType", "fruit shop"), ("country", "China")]
        .into_iter()
        .collect();
    assert_eq!(ctx.get("shopType"), Some("fruit shop"));
    assert_eq!(ctx.get("missing"), None);
}

#[test]
fn test_context_from_hash_map() {
    let mut vars = HashMap::new();
    vars.insert("x".to_string(), "1".to_string());
    let ctx = RunContext::from(vars);
    assert_eq!(ctx.len(), 1);
    assert!(!ctx.is_empty());
}

#[test]
fn test_context_stringifies_values() {
    let mut ctx = RunContext::new().set("count", 3);
    ctx.insert("ratio", 0.5);
    assert_eq!(ctx.get("count"), Some("3"));
    assert_eq!(ctx.get("ratio"), Some("0.5"));
}

#[test]
fn test_template_step_lookup() {
    let template = PromptTemplate::new(
        "shop",
        vec![
            Step::new("name", "Name a ${shopType}", Params::new()),
            Step::builder()
                .name("history")
                .template_text("Tell its history")
                .build()
                .unwrap(),
        ],
    )
    .unwrap();

    assert_eq!(template.len(), 2);
    assert!(template.step("history").is_some());
    assert!(template.step("nope").is_none());
    assert!(template.step("history").unwrap().parameters().is_empty());
}

#[test]
fn test_template_rejects_duplicate_step_names() {
    let err = PromptTemplate::new(
        "dup",
        vec![
            Step::new("a", "one", Params::new()),
            Step::new("b", "two", Params::new()),
            Step::new("a", "three", Params::new()),
        ],
    )
    .unwrap_err();

    assert_eq!(
        err.kind,
        TemplateValidationErrorKind::DuplicateStepName {
            template: "dup".to_string(),
            step: "a".to_string(),
        }
    );
}

#[test]
fn test_template_allows_no_steps() {
    let template = PromptTemplate::new("empty", Vec::new()).unwrap();
    assert!(template.is_empty());
}

#[test]
fn test_executed_steps_serialize_in_order() {
    let steps: ExecutedSteps = vec![
        ExecutedStep::new("a", 0, "p", "X", Params::new(), 5),
        ExecutedStep::new("b", 1, "q", "Y", Params::new(), 9),
    ]
    .into_iter()
    .collect();

    let json = serde_json::to_value(&steps).unwrap();
    assert_eq!(json[0]["step_name"], "a");
    assert_eq!(json[1]["response"], "Y");
    assert_eq!(steps.last().map(|s| *s.transcript_len()), Some(9));
}
