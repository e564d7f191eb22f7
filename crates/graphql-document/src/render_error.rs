use crate::name::InvalidNameError;
use thiserror::Error;

/// The single error type produced by every render operation in this crate.
///
/// Each variant is raised synchronously at the point of detection and
/// propagates up through the recursive render chain unmodified — a failed
/// render call reports exactly one failure reason, with the offending value
/// included in the message, and returns no partial output.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RenderError {
    /// A bare identifier was supplied directly as a value. Identifiers must
    /// be explicitly tagged as enum references
    /// ([`Value::enum_value`](crate::Value::enum_value)) or variable
    /// references ([`Value::variable`](crate::Value::variable)) so that
    /// unquoted text is never emitted by accident.
    #[error(
        "Bare identifier `{identifier}` is not permitted as a value; wrap \
        it with `Value::enum_value(..)` or `Value::variable(..)` to state \
        which unquoted form is intended."
    )]
    DisallowedValueType {
        identifier: String,
    },

    /// A selection set was rendered at indent level 0. The document's
    /// top-level block is always rendered at level 1 by the operation
    /// renderer; level 0 indicates a caller bug.
    #[error(
        "Selection sets render at indent level 1 or deeper; got level \
        {indent_level}."
    )]
    InvalidIndent {
        indent_level: usize,
    },

    /// An identifier-position string failed the GraphQL name grammar.
    #[error(transparent)]
    InvalidName(#[from] InvalidNameError),

    /// A string-shaped operation kind was not one of `query`, `mutation`,
    /// or `subscription`.
    #[error(
        "`{kind}` is not a GraphQL operation kind (expected `query`, \
        `mutation`, or `subscription`)."
    )]
    InvalidOperationKind {
        kind: String,
    },

    /// A construct that GraphQL requires to carry a non-empty selection
    /// set (an operation, an inline fragment, or a fragment definition)
    /// was rendered with an empty one.
    #[error("{detail}")]
    InvalidShape {
        detail: String,
    },

    /// A float value was NaN or infinite. GraphQL has no literal form for
    /// non-finite floats.
    #[error(
        "`{value}` has no GraphQL literal form; float values must be \
        finite."
    )]
    NonFiniteFloat {
        value: f64,
    },
}
