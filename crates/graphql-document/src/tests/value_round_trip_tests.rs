//! Semantic round-trip tests: rendered value text, embedded as an
//! argument in a minimal query, must parse back (via `graphql_parser`)
//! into an equivalent structure.
//!
//! The comparison is semantic rather than byte-level — object key order
//! is preserved by the renderer but carries no meaning in the grammar
//! (and `graphql_parser` stores objects in a `BTreeMap`).

use crate::Name;
use crate::Value;
use graphql_parser::query as parsed;
use indexmap::IndexMap;
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Parses `{ f(arg: <rendered>) }` and plucks out the argument value.
fn reparse_value(rendered: &str) -> parsed::Value<'static, String> {
    let document = format!("query {{ f(arg: {rendered}) }}");
    let document = graphql_parser::parse_query::<String>(&document)
        .expect("rendered value should re-parse")
        .into_static();
    let operation = match document.definitions.into_iter().next() {
        Some(parsed::Definition::Operation(operation)) => operation,
        other => panic!("Expected an operation definition, got: {other:?}"),
    };
    let selection_set = match operation {
        parsed::OperationDefinition::Query(query) => query.selection_set,
        other => panic!("Expected a query operation, got: {other:?}"),
    };
    match selection_set.items.into_iter().next() {
        Some(parsed::Selection::Field(mut field)) => {
            let (_, value) = field.arguments.remove(0);
            value
        },
        other => panic!("Expected a field selection, got: {other:?}"),
    }
}

/// Maps a [`Value`] tree (without variables, enums, or extension
/// scalars) onto the structure `graphql_parser` should produce for it.
fn expected_parsed_value(value: &Value) -> parsed::Value<'static, String> {
    match value {
        Value::Int(v) => parsed::Value::Int(
            (i32::try_from(*v).expect("test ints fit in i32")).into(),
        ),
        Value::Float(v) => parsed::Value::Float(*v),
        Value::String(v) => parsed::Value::String(v.clone()),
        Value::Bool(v) => parsed::Value::Boolean(*v),
        Value::Null => parsed::Value::Null,
        Value::List(values) => parsed::Value::List(
            values.iter().map(expected_parsed_value).collect(),
        ),
        Value::Object(entries) => parsed::Value::Object(
            entries.iter().map(|(key, value)| (
                key.as_str().to_string(),
                expected_parsed_value(value),
            )).collect::<BTreeMap<String, parsed::Value<'static, String>>>(),
        ),
        other => panic!("No parsed-value mapping for: {other:?}"),
    }
}

fn assert_round_trips(value: Value) {
    let rendered = value.to_graphql_string().unwrap();
    assert_eq!(
        reparse_value(&rendered),
        expected_parsed_value(&value),
        "`{rendered}` did not round-trip",
    );
}

#[test]
fn scalars_round_trip() {
    assert_round_trips(Value::Int(123));
    assert_round_trips(Value::Int(-456));
    assert_round_trips(Value::Float(1.5));
    assert_round_trips(Value::Bool(true));
    assert_round_trips(Value::Null);
    assert_round_trips(Value::from("outer space"));
}

#[test]
fn escaped_strings_round_trip() {
    assert_round_trips(Value::from("say \"hi\"\nthen \\ leave\tnow"));
}

#[test]
fn whole_float_round_trips_as_float() {
    // `1.0` must come back as a Float, not an Int.
    assert_eq!(reparse_value("1.0"), parsed::Value::Float(1.0));
}

#[test]
fn nested_structures_round_trip() {
    let mut entries = IndexMap::new();
    entries.insert(Name::from("ids"), Value::from(vec![1, 2, 3]));
    entries.insert(Name::from("cursor"), Value::Null);
    assert_round_trips(Value::List(vec![
        Value::Object(entries),
        Value::from("tail"),
    ]));
}

fn arb_value_tree() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|v| Value::Int(v.into())),
        "[ -~]{0,20}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(Value::List),
            prop::collection::vec(
                ("[_A-Za-z][_0-9A-Za-z]{0,8}", inner),
                0..4,
            ).prop_map(|entries| Value::Object(
                entries.into_iter().map(
                    |(key, value)| (Name::from(key), value),
                ).collect::<IndexMap<Name, Value>>(),
            )),
        ]
    })
}

proptest! {
    /// For any variable-free, enum-free value tree, rendering then
    /// re-parsing yields an equivalent structure.
    #[test]
    fn value_trees_round_trip(value in arb_value_tree()) {
        let rendered = value.to_graphql_string().unwrap();
        prop_assert_eq!(
            reparse_value(&rendered),
            expected_parsed_value(&value),
        );
    }
}
