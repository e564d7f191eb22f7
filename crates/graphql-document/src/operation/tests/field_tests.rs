//! Tests for field rendering and the shorthand-to-[`Field`] normalization
//! conversions.

use crate::DirectiveAnnotation;
use crate::Name;
use crate::RenderError;
use crate::Selection;
use crate::Value;
use crate::field;
use crate::name::InvalidNameError;
use crate::operation::Field;
use crate::operation::SelectionSet;

// =============================================================================
// Normalization
// =============================================================================

#[test]
fn bare_name_normalizes_to_leaf_field() {
    if let Selection::Field(field) = Selection::from("id") {
        assert_eq!(field.name().as_str(), "id");
        assert!(field.selection_set().is_empty());
    } else {
        panic!("Expected a bare name to normalize to a Field");
    }
}

#[test]
fn name_and_selections_tuple_normalizes() {
    let selection = Selection::from(("items", ["description", "amount"]));
    if let Selection::Field(field) = selection {
        assert_eq!(field.name().as_str(), "items");
        assert_eq!(field.selection_set().selections().len(), 2);
        assert!(field.arguments.is_empty());
    } else {
        panic!("Expected the 2-tuple shorthand to normalize to a Field");
    }
}

#[test]
fn name_arguments_selections_triple_normalizes() {
    let selection = Selection::from((
        "invoices",
        [("customer", "123456")],
        ["id"],
    ));
    if let Selection::Field(field) = selection {
        assert_eq!(field.name().as_str(), "invoices");
        assert_eq!(
            field.arguments.get(&Name::from("customer")),
            Some(&Value::String("123456".to_string())),
        );
    } else {
        panic!("Expected the 3-tuple shorthand to normalize to a Field");
    }
}

#[test]
fn explicit_spec_passes_through() {
    let spec = field("user").alias("me").argument("id", 4);
    if let Selection::Field(field) = Selection::from(spec) {
        assert_eq!(field.alias, Some(Name::from("me")));
        assert_eq!(field.name().as_str(), "user");
    } else {
        panic!("Expected an explicit Field spec to pass through");
    }
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn leaf_field_renders_bare_name() {
    assert_eq!(
        Field::new("launch_rockets").to_graphql_string(1),
        Ok("launch_rockets".to_string()),
    );
}

/// An empty argument list must contribute nothing — never `()`.
#[test]
fn empty_arguments_emit_no_parens() {
    let no_args: [(&str, Value); 0] = [];
    let rendered = field("launch_rockets")
        .arguments(no_args)
        .to_graphql_string(1)
        .unwrap();
    assert_eq!(rendered, "launch_rockets");
}

/// An empty selection set must contribute nothing — never ` {}`.
#[test]
fn empty_selection_set_emits_no_braces() {
    let rendered = field("launch_rockets")
        .argument("where", "outer space")
        .select(SelectionSet::new())
        .to_graphql_string(1)
        .unwrap();
    assert_eq!(rendered, "launch_rockets(where: \"outer space\")");
}

#[test]
fn alias_renders_before_name() {
    let rendered = field("user")
        .alias("currentUser")
        .argument("id", 4)
        .to_graphql_string(1)
        .unwrap();
    assert_eq!(rendered, "currentUser: user(id: 4)");
}

#[test]
fn alias_arguments_directives_and_selections_compose_in_order() {
    let rendered = field("user")
        .alias("me")
        .argument("id", 4)
        .directive(DirectiveAnnotation::new("uncached"))
        .select(["name"])
        .to_graphql_string(1)
        .unwrap();
    assert_eq!(rendered, "me: user(id: 4) @uncached {\n    name\n  }");
}

#[test]
fn invalid_field_name_fails() {
    assert_eq!(
        Field::new("launch rockets").to_graphql_string(1),
        Err(RenderError::InvalidName(InvalidNameError {
            name: "launch rockets".to_string(),
        })),
    );
}

#[test]
fn invalid_alias_fails() {
    let result = field("user").alias("bad alias").to_graphql_string(1);
    if let Err(RenderError::InvalidName(err)) = result {
        assert_eq!(err.name, "bad alias");
    } else {
        panic!("Expected InvalidName for the alias, got: {result:?}");
    }
}
