use crate::Name;
use crate::RenderError;
use crate::Value;
use crate::types::TypeAnnotation;

/// A [variable
/// definition](https://spec.graphql.org/October2021/#sec-Language.Variables)
/// declared alongside an operation: a name, a type annotation, and an
/// optional default value.
///
/// An absent default (`None`) and an explicit null default
/// (`Some(Value::Null)`) are distinct: the former renders no `=` clause at
/// all, the latter renders `= null`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Variable {
    pub(crate) default_value: Option<Value>,
    pub(crate) name: Name,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Variable {
    pub fn new(
        name: impl Into<Name>,
        type_annotation: impl Into<TypeAnnotation>,
    ) -> Self {
        Variable {
            default_value: None,
            name: name.into(),
            type_annotation: type_annotation.into(),
        }
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    /// Renders as `$name: Type` or `$name: Type = default`.
    pub fn to_graphql_string(&self) -> Result<String, RenderError> {
        let mut rendered = format!(
            "${}: {}",
            self.name.validate()?,
            self.type_annotation.to_graphql_string()?,
        );
        if let Some(default_value) = &self.default_value {
            rendered.push_str(" = ");
            rendered.push_str(default_value.to_graphql_string()?.as_str());
        }
        Ok(rendered)
    }
}

/// Renders a variable-definition list as ` ($a: Int!, $b: String = "x")` —
/// comma-space separated, with one leading space so it composes directly
/// after the operation signature. An empty list renders as the empty
/// string.
pub(crate) fn render_variable_definition_list(
    variables: &[Variable],
) -> Result<String, RenderError> {
    if variables.is_empty() {
        return Ok(String::new());
    }
    let rendered = variables.iter().map(
        |variable| variable.to_graphql_string(),
    ).collect::<Result<Vec<String>, RenderError>>()?;
    Ok(format!(" ({})", rendered.join(", ")))
}
