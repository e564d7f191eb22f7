use crate::DirectiveAnnotation;
use crate::Name;
use crate::RenderError;
use crate::directive_annotation::render_directive_list;
use crate::operation::SelectionSet;

/// A named [fragment
/// definition](https://spec.graphql.org/October2021/#sec-Language.Fragments):
/// a reusable selection set declared once at the document level and
/// referenced via [`FragmentSpread`](crate::operation::FragmentSpread)s.
///
/// Definitions are supplied to
/// [`OperationOptions`](crate::operation::OperationOptions) as an ordered
/// list and appended at the end of the rendered document in that order.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Fragment {
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: Name,
    pub(crate) selection_set: SelectionSet,
    pub(crate) type_condition: Name,
}
impl Fragment {
    pub fn new(
        name: impl Into<Name>,
        type_condition: impl Into<Name>,
    ) -> Self {
        Fragment {
            directives: vec![],
            name: name.into(),
            selection_set: SelectionSet::default(),
            type_condition: type_condition.into(),
        }
    }

    pub fn directive(mut self, directive: DirectiveAnnotation) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn select(mut self, selections: impl Into<SelectionSet>) -> Self {
        self.selection_set = selections.into();
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_condition(&self) -> &Name {
        &self.type_condition
    }

    /// Renders as `fragment Name on Type @dirs { ... }` with the
    /// selection set at indent level 1.
    pub fn to_graphql_string(&self) -> Result<String, RenderError> {
        if self.selection_set.is_empty() {
            return Err(RenderError::InvalidShape {
                detail: format!(
                    "Fragment `{}` must select at least one field, but \
                    its selection set is empty.",
                    self.name,
                ),
            });
        }
        Ok(format!(
            "fragment {name} on {type_condition}{directives}{selection_set}",
            name = self.name.validate()?,
            type_condition = self.type_condition.validate()?,
            directives = render_directive_list(&self.directives)?,
            selection_set = self.selection_set.to_graphql_string(1)?,
        ))
    }
}

/// Renders the document's fragment-definition block: each definition
/// preceded by a blank-line separator, for appending after the operation.
/// An empty list renders as the empty string.
pub(crate) fn render_fragment_definitions(
    fragments: &[Fragment],
) -> Result<String, RenderError> {
    let mut rendered = String::new();
    for fragment in fragments {
        rendered.push_str("\n\n");
        rendered.push_str(fragment.to_graphql_string()?.as_str());
    }
    Ok(rendered)
}
