use crate::Arguments;
use crate::Name;
use crate::RenderError;

/// A [directive](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// annotation placed on a field selection, fragment, variable position, or
/// operation: a directive name paired with an ordered argument list.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: Arguments,
    pub(crate) name: Name,
}
impl DirectiveAnnotation {
    pub fn new(name: impl Into<Name>) -> Self {
        DirectiveAnnotation {
            arguments: Arguments::new(),
            name: name.into(),
        }
    }

    pub fn with_arguments(
        name: impl Into<Name>,
        arguments: impl Into<Arguments>,
    ) -> Self {
        DirectiveAnnotation {
            arguments: arguments.into(),
            name: name.into(),
        }
    }

    /// The arguments passed to this annotation, in insertion order.
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Renders as `@name` or `@name(args)`. An empty argument list emits
    /// no parens at all.
    pub fn to_graphql_string(&self) -> Result<String, RenderError> {
        Ok(format!(
            "@{}{}",
            self.name.validate()?,
            self.arguments.to_graphql_string()?,
        ))
    }
}

/// Renders a directive list as ` @a @b(x: 1)` — space-separated, with one
/// leading space so the result composes directly after a field or operation
/// signature. An empty list renders as the empty string.
pub(crate) fn render_directive_list(
    directives: &[DirectiveAnnotation],
) -> Result<String, RenderError> {
    let mut rendered = String::new();
    for directive in directives {
        rendered.push(' ');
        rendered.push_str(directive.to_graphql_string()?.as_str());
    }
    Ok(rendered)
}
