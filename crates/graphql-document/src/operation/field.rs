use crate::Arguments;
use crate::DirectiveAnnotation;
use crate::Name;
use crate::RenderError;
use crate::Value;
use crate::directive_annotation::render_directive_list;
use crate::operation::SelectionSet;

/// The canonical record for a single
/// [field](https://spec.graphql.org/October2021/#sec-Language.Fields)
/// selection: every shorthand accepted by
/// [`Selection`](crate::operation::Selection) normalizes into one of
/// these.
///
/// [`Field`] doubles as the explicit field-spec builder — start a chain
/// with [`field`](crate::field) and attach the optional pieces:
///
/// ```
/// use graphql_document::field;
///
/// let selection = field("user")
///     .alias("currentUser")
///     .argument("id", 4)
///     .select(["name", "email"]);
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub(crate) alias: Option<Name>,
    pub(crate) arguments: Arguments,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: Name,
    pub(crate) selection_set: SelectionSet,
}
impl Field {
    pub fn new(name: impl Into<Name>) -> Self {
        Field {
            alias: None,
            arguments: Arguments::new(),
            directives: vec![],
            name: name.into(),
            selection_set: SelectionSet::default(),
        }
    }

    pub fn alias(mut self, alias: impl Into<Name>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn argument(
        mut self,
        name: impl Into<Name>,
        value: impl Into<Value>,
    ) -> Self {
        self.arguments.insert(name, value);
        self
    }

    pub fn arguments(mut self, arguments: impl Into<Arguments>) -> Self {
        self.arguments = arguments.into();
        self
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

    /// Renders this field at `indent_level`, emitting in fixed order:
    /// `alias: `, name, arguments, directives, sub-selection set (one
    /// level deeper). Empty pieces contribute nothing — a leaf field with
    /// no arguments renders as just its name.
    pub fn to_graphql_string(
        &self,
        indent_level: usize,
    ) -> Result<String, RenderError> {
        let alias = match &self.alias {
            Some(alias) => format!("{}: ", alias.validate()?),
            None => String::new(),
        };
        Ok(format!(
            "{alias}{name}{arguments}{directives}{selection_set}",
            name = self.name.validate()?,
            arguments = self.arguments.to_graphql_string()?,
            directives = render_directive_list(&self.directives)?,
            selection_set =
                self.selection_set.to_graphql_string(indent_level + 1)?,
        ))
    }
}
