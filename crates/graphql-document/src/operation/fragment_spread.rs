use crate::DirectiveAnnotation;
use crate::Name;
use crate::RenderError;
use crate::directive_annotation::render_directive_list;

/// A [fragment
/// spread](https://spec.graphql.org/October2021/#sec-Language.Fragments):
/// a `...name` reference to a [`Fragment`](crate::operation::Fragment)
/// defined at the document level.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentSpread {
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: Name,
}
impl FragmentSpread {
    pub fn new(name: impl Into<Name>) -> Self {
        FragmentSpread {
            directives: vec![],
            name: name.into(),
        }
    }

    pub fn directive(mut self, directive: DirectiveAnnotation) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn to_graphql_string(&self) -> Result<String, RenderError> {
        Ok(format!(
            "...{}{}",
            self.name.validate()?,
            render_directive_list(&self.directives)?,
        ))
    }
}
