use crate::RenderError;
use crate::operation::Selection;

/// Two spaces per indent level.
const INDENT_UNIT: &str = "  ";

/// An ordered
/// [selection set](https://spec.graphql.org/October2021/#sec-Selection-Sets):
/// the braced, newline-delimited block of fields and fragments under an
/// operation, field, or fragment.
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct SelectionSet {
    pub(crate) selections: Vec<Selection>,
}
impl SelectionSet {
    pub fn new() -> Self {
        SelectionSet::default()
    }

    pub fn push(&mut self, selection: impl Into<Selection>) {
        self.selections.push(selection.into());
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn selections(&self) -> &Vec<Selection> {
        &self.selections
    }

    /// Renders this selection set as a ` {\n ... \n}` block whose lines
    /// are prefixed with `indent_level` indent units and whose closing
    /// brace sits one level shallower.
    ///
    /// An empty set renders as the empty string (a leaf field emits no
    /// ` {}`). `indent_level` must be at least 1 — the document's implicit
    /// top-level block is rendered at level 1 by
    /// [`Operation`](crate::operation::Operation).
    pub fn to_graphql_string(
        &self,
        indent_level: usize,
    ) -> Result<String, RenderError> {
        if indent_level == 0 {
            return Err(RenderError::InvalidIndent { indent_level });
        }
        if self.selections.is_empty() {
            return Ok(String::new());
        }

        let line_indent = INDENT_UNIT.repeat(indent_level);
        let lines = self.selections.iter().map(|selection| Ok(format!(
            "{line_indent}{}",
            selection.to_graphql_string(indent_level)?,
        ))).collect::<Result<Vec<String>, RenderError>>()?;

        Ok(format!(
            " {{\n{}\n{}}}",
            lines.join("\n"),
            INDENT_UNIT.repeat(indent_level - 1),
        ))
    }
}
impl<T: Into<Selection>> std::convert::From<Vec<T>> for SelectionSet {
    fn from(selections: Vec<T>) -> Self {
        selections.into_iter().collect()
    }
}
impl<T: Into<Selection>, const N: usize> std::convert::From<[T; N]>
    for SelectionSet
{
    fn from(selections: [T; N]) -> Self {
        selections.into_iter().collect()
    }
}
impl<T: Into<Selection>> FromIterator<T> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SelectionSet {
            selections: iter.into_iter().map(Into::into).collect(),
        }
    }
}
