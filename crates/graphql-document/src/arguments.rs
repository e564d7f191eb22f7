use crate::Name;
use crate::RenderError;
use crate::Value;
use indexmap::IndexMap;

/// An ordered collection of named
/// [argument](https://spec.graphql.org/October2021/#sec-Language.Arguments)
/// values, used on field selections and directive annotations.
///
/// This is the one canonical argument container in the crate: entries keep
/// their insertion order, and inserting under an existing name replaces the
/// earlier value in place (the original position is kept).
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Arguments(IndexMap<Name, Value>);
impl Arguments {
    pub fn new() -> Self {
        Arguments(IndexMap::new())
    }

    pub fn insert(
        &mut self,
        name: impl Into<Name>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &Name) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Name, Value> {
        self.0.iter()
    }

    /// Renders this argument list as `(name1: value1, name2: value2)`,
    /// preserving insertion order. An empty list renders as the empty
    /// string — never as `()`, which GraphQL does not permit.
    pub fn to_graphql_string(&self) -> Result<String, RenderError> {
        if self.0.is_empty() {
            return Ok(String::new());
        }
        let rendered = self.0.iter().map(|(name, value)| Ok(format!(
            "{}: {}",
            name.validate()?,
            value.to_graphql_string()?,
        ))).collect::<Result<Vec<String>, RenderError>>()?;
        Ok(format!("({})", rendered.join(", ")))
    }
}
impl<K: Into<Name>, V: Into<Value>, const N: usize>
    std::convert::From<[(K, V); N]> for Arguments
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
impl<K: Into<Name>, V: Into<Value>> FromIterator<(K, V)> for Arguments {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Arguments(iter.into_iter().map(
            |(name, value)| (name.into(), value.into()),
        ).collect())
    }
}
impl<K: Into<Name>, V: Into<Value>> Extend<(K, V)> for Arguments {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.0.extend(iter.into_iter().map(
            |(name, value)| (name.into(), value.into()),
        ));
    }
}
impl<'a> IntoIterator for &'a Arguments {
    type Item = (&'a Name, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Name, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
