//! A library for rendering GraphQL operation documents from structured,
//! in-memory Rust data.
//!
//! This crate is a serializer for the GraphQL language only: it walks a
//! caller-built tree of selections, arguments, values, directives, and
//! fragments and produces one syntactically valid document string. It
//! never parses GraphQL, never talks to a server, and never validates
//! against a schema.
//!
//! ```
//! use graphql_document::OperationOptions;
//! use graphql_document::Selection;
//! use graphql_document::query;
//!
//! let document = query(
//!     [Selection::from((
//!         "invoices",
//!         [("customer", "123456")],
//!         ["id", "total"],
//!     ))],
//!     OperationOptions::default(),
//! ).unwrap();
//!
//! assert_eq!(document, concat!(
//!     "query {\n",
//!     "  invoices(customer: \"123456\") {\n",
//!     "    id\n",
//!     "    total\n",
//!     "  }\n",
//!     "}",
//! ));
//! ```
//!
//! Every identifier in the tree (field names, argument keys, enum values,
//! and so on) is validated against the GraphQL name grammar as it is
//! rendered, so crafted strings cannot splice raw syntax into the output.
//! Enum and variable references must be built explicitly with
//! [`enum_value`] and [`variable`]; a bare identifier passed as a value
//! fails with [`RenderError::DisallowedValueType`].
//!
//! Rendering is pure and synchronous: no I/O, no shared state, no
//! interior caches. Calls are independent and safe to make from any
//! number of threads. Recursion depth follows the nesting depth of the
//! input, bounded only by the call stack.

mod arguments;
mod directive_annotation;
mod name;
pub mod operation;
mod render_error;
pub mod types;
mod value;

pub use arguments::Arguments;
pub use directive_annotation::DirectiveAnnotation;
pub use name::InvalidNameError;
pub use name::Name;
pub use operation::Field;
pub use operation::Fragment;
pub use operation::FragmentSpread;
pub use operation::InlineFragment;
pub use operation::Operation;
pub use operation::OperationKind;
pub use operation::OperationOptions;
pub use operation::Selection;
pub use operation::SelectionSet;
pub use operation::Variable;
pub use render_error::RenderError;
pub use types::TypeAnnotation;
pub use value::Value;

/// Renders a complete operation document of the given kind: the canonical
/// entry point behind [`query`], [`mutation`], and [`subscription`].
pub fn render_operation(
    kind: OperationKind,
    selections: impl Into<SelectionSet>,
    options: OperationOptions,
) -> Result<String, RenderError> {
    Operation::new(kind, selections, options).to_graphql_string()
}

/// Renders a `query` operation document.
pub fn query(
    selections: impl Into<SelectionSet>,
    options: OperationOptions,
) -> Result<String, RenderError> {
    render_operation(OperationKind::Query, selections, options)
}

/// Renders a `mutation` operation document.
pub fn mutation(
    selections: impl Into<SelectionSet>,
    options: OperationOptions,
) -> Result<String, RenderError> {
    render_operation(OperationKind::Mutation, selections, options)
}

/// Renders a `subscription` operation document.
pub fn subscription(
    selections: impl Into<SelectionSet>,
    options: OperationOptions,
) -> Result<String, RenderError> {
    render_operation(OperationKind::Subscription, selections, options)
}

/// Starts an explicit field spec for positions where the tuple shorthands
/// can't express what's needed (aliases, directives, per-argument
/// chaining). See [`Field`].
pub fn field(name: impl Into<Name>) -> Field {
    Field::new(name)
}

/// Tags `name` as an enum reference. Shorthand for [`Value::enum_value`].
pub fn enum_value(name: impl Into<Name>) -> Value {
    Value::enum_value(name)
}

/// Tags `name` as a variable reference. Shorthand for [`Value::variable`].
pub fn variable(name: impl Into<Name>) -> Value {
    Value::variable(name)
}

#[cfg(test)]
mod tests;
