//! Tests for directive-annotation rendering.
//!
//! <https://spec.graphql.org/October2021/#sec-Language.Directives>

use crate::DirectiveAnnotation;
use crate::RenderError;
use crate::Value;
use crate::directive_annotation::render_directive_list;

#[test]
fn bare_directive() {
    assert_eq!(
        DirectiveAnnotation::new("uncached").to_graphql_string(),
        Ok("@uncached".to_string()),
    );
}

#[test]
fn directive_with_arguments() {
    let directive = DirectiveAnnotation::with_arguments(
        "skip",
        [("if", Value::variable("someTest"))],
    );
    assert_eq!(
        directive.to_graphql_string(),
        Ok("@skip(if: $someTest)".to_string()),
    );
}

/// A directive whose argument list is empty renders as `@name` alone —
/// not `@name()`.
#[test]
fn empty_arguments_emit_no_parens() {
    let no_args: [(&str, Value); 0] = [];
    let directive = DirectiveAnnotation::with_arguments("deprecated", no_args);
    assert_eq!(
        directive.to_graphql_string(),
        Ok("@deprecated".to_string()),
    );
}

#[test]
fn directive_names_are_validated() {
    let result = DirectiveAnnotation::new("no spaces").to_graphql_string();
    if let Err(RenderError::InvalidName(err)) = result {
        assert_eq!(err.name, "no spaces");
    } else {
        panic!("Expected InvalidName, got: {result:?}");
    }
}

/// The rendered list leads with a space so it composes directly after a
/// field or operation signature.
#[test]
fn directive_list_leads_with_space() {
    let directives = vec![
        DirectiveAnnotation::new("a"),
        DirectiveAnnotation::with_arguments("b", [("x", 1)]),
    ];
    assert_eq!(
        render_directive_list(&directives),
        Ok(" @a @b(x: 1)".to_string()),
    );
}

#[test]
fn empty_directive_list_renders_nothing() {
    assert_eq!(render_directive_list(&[]), Ok(String::new()));
}
