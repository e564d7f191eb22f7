use crate::Arguments;
use crate::Name;
use crate::RenderError;
use crate::operation::Field;
use crate::operation::FragmentSpread;
use crate::operation::InlineFragment;
use crate::operation::SelectionSet;

/// One entry of a [`SelectionSet`]: a field, a fragment spread, or an
/// inline fragment.
///
/// The field shorthands all funnel through `From` conversions into a
/// canonical [`Field`] record, so a selection list can be written with
/// minimal ceremony:
///
/// - a bare name: `"id"`;
/// - a `(name, selections)` pair: `("items", ["description", "amount"])`;
/// - a `(name, arguments, selections)` triple:
///   `("invoices", [("customer", "123456")], ["id", "total"])`;
/// - an explicit field spec built with [`field`](crate::field).
///
/// Anything outside this closed set is unrepresentable — there is no
/// fallback path by which an unrecognized shape could render.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}
impl Selection {
    pub fn to_graphql_string(
        &self,
        indent_level: usize,
    ) -> Result<String, RenderError> {
        match self {
            Selection::Field(field) =>
                field.to_graphql_string(indent_level),
            Selection::FragmentSpread(spread) =>
                spread.to_graphql_string(),
            Selection::InlineFragment(inline) =>
                inline.to_graphql_string(indent_level),
        }
    }
}
impl std::convert::From<Field> for Selection {
    fn from(value: Field) -> Self {
        Selection::Field(value)
    }
}
impl std::convert::From<FragmentSpread> for Selection {
    fn from(value: FragmentSpread) -> Self {
        Selection::FragmentSpread(value)
    }
}
impl std::convert::From<InlineFragment> for Selection {
    fn from(value: InlineFragment) -> Self {
        Selection::InlineFragment(value)
    }
}
impl std::convert::From<&str> for Selection {
    fn from(name: &str) -> Self {
        Selection::Field(Field::new(name))
    }
}
impl std::convert::From<Name> for Selection {
    fn from(name: Name) -> Self {
        Selection::Field(Field::new(name))
    }
}
impl<N, S> std::convert::From<(N, S)> for Selection
where
    N: Into<Name>,
    S: Into<SelectionSet>,
{
    fn from((name, selections): (N, S)) -> Self {
        Selection::Field(Field::new(name).select(selections))
    }
}
impl<N, A, S> std::convert::From<(N, A, S)> for Selection
where
    N: Into<Name>,
    A: Into<Arguments>,
    S: Into<SelectionSet>,
{
    fn from((name, arguments, selections): (N, A, S)) -> Self {
        Selection::Field(
            Field::new(name)
                .arguments(arguments)
                .select(selections),
        )
    }
}
