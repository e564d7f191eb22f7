use crate::Name;
use crate::RenderError;
use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;

/// Represents the annotated [type
/// reference](https://spec.graphql.org/October2021/#sec-Type-References)
/// of a [`Variable`](crate::operation::Variable): a named type, or a list
/// wrapping another annotation, with each nesting level independently
/// markable as non-null.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// A nullable named type annotation (e.g. `Int`).
    pub fn named(name: impl Into<Name>) -> Self {
        Self::Named(NamedTypeAnnotation {
            name: name.into(),
            nullable: true,
        })
    }

    /// A nullable list type wrapping `inner` (e.g. `[Int!]`).
    pub fn list_of(inner: impl Into<TypeAnnotation>) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type: Box::new(inner.into()),
            nullable: true,
        })
    }

    /// Marks the outermost level of this annotation non-null.
    pub fn non_null(self) -> Self {
        match self {
            Self::List(annot) => Self::List(ListTypeAnnotation {
                nullable: false,
                ..annot
            }),
            Self::Named(annot) => Self::Named(NamedTypeAnnotation {
                nullable: false,
                ..annot
            }),
        }
    }

    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Indicates if the outermost level of this [`TypeAnnotation`] is
    /// [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { nullable, .. }) =>
                *nullable,
            TypeAnnotation::Named(NamedTypeAnnotation { nullable, .. }) =>
                *nullable,
        }
    }

    /// Renders this annotation, recursively wrapping list levels in
    /// `[...]` and appending `!` after each non-null level (e.g.
    /// `[Boolean!]!`).
    pub fn to_graphql_string(&self) -> Result<String, RenderError> {
        match self {
            TypeAnnotation::List(annot) => Ok(format!(
                "[{}]{}",
                annot.inner_type.to_graphql_string()?,
                if annot.nullable { "" } else { "!" },
            )),
            TypeAnnotation::Named(annot) => Ok(format!(
                "{}{}",
                annot.name.validate()?,
                if annot.nullable { "" } else { "!" },
            )),
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::convert::From<&str> for TypeAnnotation {
    fn from(value: &str) -> Self {
        Self::named(value)
    }
}
