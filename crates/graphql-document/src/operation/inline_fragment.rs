use crate::DirectiveAnnotation;
use crate::Name;
use crate::RenderError;
use crate::directive_annotation::render_directive_list;
use crate::operation::SelectionSet;

/// An [inline
/// fragment](https://spec.graphql.org/October2021/#sec-Inline-Fragments):
/// an unnamed, in-place fragment that narrows the type condition or scopes
/// directives over a subset of fields.
///
/// The type condition is optional — [`InlineFragment::anonymous`] builds
/// one that applies directives without narrowing type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InlineFragment {
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) selection_set: SelectionSet,
    pub(crate) type_condition: Option<Name>,
}
impl InlineFragment {
    /// An inline fragment with an `on Type` condition.
    pub fn on(type_condition: impl Into<Name>) -> Self {
        InlineFragment {
            directives: vec![],
            selection_set: SelectionSet::default(),
            type_condition: Some(type_condition.into()),
        }
    }

    /// An inline fragment without a type condition.
    pub fn anonymous() -> Self {
        InlineFragment {
            directives: vec![],
            selection_set: SelectionSet::default(),
            type_condition: None,
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

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_condition(&self) -> Option<&Name> {
        self.type_condition.as_ref()
    }

    /// Renders as `... on Type @dirs { ... }` (or without ` on Type` when
    /// no condition is set), with the sub-selection set one level deeper
    /// than `indent_level`.
    pub fn to_graphql_string(
        &self,
        indent_level: usize,
    ) -> Result<String, RenderError> {
        if self.selection_set.is_empty() {
            return Err(RenderError::InvalidShape {
                detail: "Inline fragments must select at least one field, \
                    but this one has an empty selection set.".to_string(),
            });
        }
        let type_condition = match &self.type_condition {
            Some(type_condition) =>
                format!(" on {}", type_condition.validate()?),
            None => String::new(),
        };
        Ok(format!(
            "...{type_condition}{directives}{selection_set}",
            directives = render_directive_list(&self.directives)?,
            selection_set =
                self.selection_set.to_graphql_string(indent_level + 1)?,
        ))
    }
}
