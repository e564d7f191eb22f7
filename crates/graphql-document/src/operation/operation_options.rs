use crate::DirectiveAnnotation;
use crate::Name;
use crate::operation::Fragment;
use crate::operation::Variable;

/// The optional pieces of an [`Operation`](crate::operation::Operation)
/// beyond its kind and selection set: variable definitions, top-level
/// directives, fragment definitions, and an operation name.
///
/// Every field defaults to empty/absent, so
/// `OperationOptions::default()` is the "just render the selections"
/// configuration.
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct OperationOptions {
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fragments: Vec<Fragment>,
    pub(crate) name: Option<Name>,
    pub(crate) variables: Vec<Variable>,
}
impl OperationOptions {
    pub fn new() -> Self {
        OperationOptions::default()
    }

    pub fn directive(mut self, directive: DirectiveAnnotation) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn directives(
        mut self,
        directives: Vec<DirectiveAnnotation>,
    ) -> Self {
        self.directives = directives;
        self
    }

    pub fn fragment(mut self, fragment: Fragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    pub fn fragments(mut self, fragments: Vec<Fragment>) -> Self {
        self.fragments = fragments;
        self
    }

    /// Names the operation (`query FetchThings { ... }`).
    pub fn name(mut self, name: impl Into<Name>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn variable(mut self, variable: Variable) -> Self {
        self.variables.push(variable);
        self
    }

    pub fn variables(mut self, variables: Vec<Variable>) -> Self {
        self.variables = variables;
        self
    }
}
