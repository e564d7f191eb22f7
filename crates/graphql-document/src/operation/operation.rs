use crate::RenderError;
use crate::directive_annotation::render_directive_list;
use crate::operation::OperationKind;
use crate::operation::OperationOptions;
use crate::operation::SelectionSet;
use crate::operation::fragment::render_fragment_definitions;
use crate::operation::variable::render_variable_definition_list;

/// A complete GraphQL
/// [operation](https://spec.graphql.org/October2021/#sec-Language.Operations)
/// ready to render: kind, optional name, variable definitions, top-level
/// directives, the top-level selection set, and the document's fragment
/// definitions.
///
/// This is a transient, caller-built description — rendering walks it once
/// and produces one string; nothing is retained between calls.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Operation {
    pub(crate) kind: OperationKind,
    pub(crate) options: OperationOptions,
    pub(crate) selection_set: SelectionSet,
}
impl Operation {
    pub fn new(
        kind: OperationKind,
        selections: impl Into<SelectionSet>,
        options: OperationOptions,
    ) -> Self {
        Operation {
            kind,
            options,
            selection_set: selections.into(),
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// Renders the full document: kind keyword, operation name, variable
    /// definitions, top-level directives, the selection set at indent
    /// level 1, and fragment definitions appended at the end. The result
    /// carries no trailing newline.
    pub fn to_graphql_string(&self) -> Result<String, RenderError> {
        if self.selection_set.is_empty() {
            return Err(RenderError::InvalidShape {
                detail: format!(
                    "A {} operation must select at least one field, but \
                    its selection set is empty.",
                    self.kind.keyword(),
                ),
            });
        }
        let name = match &self.options.name {
            Some(name) => format!(" {}", name.validate()?),
            None => String::new(),
        };
        Ok(format!(
            "{kind}{name}{variables}{directives}{selection_set}{fragments}",
            kind = self.kind.keyword(),
            variables =
                render_variable_definition_list(&self.options.variables)?,
            directives = render_directive_list(&self.options.directives)?,
            selection_set = self.selection_set.to_graphql_string(1)?,
            fragments =
                render_fragment_definitions(&self.options.fragments)?,
        ))
    }
}
