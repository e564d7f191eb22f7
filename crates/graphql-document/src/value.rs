use crate::Name;
use crate::RenderError;
use chrono::SecondsFormat;
use indexmap::IndexMap;

/// An input [value](https://spec.graphql.org/October2021/#sec-Input-Values)
/// usable as an argument value, an object field value, a list element, or a
/// variable default.
///
/// Lists and objects nest arbitrarily. Object entries keep their insertion
/// order ([`IndexMap`]), so rendering the same [`Value`] twice always
/// produces the same text.
///
/// Value trees are assumed to be acyclic; rendering a cyclic tree does not
/// terminate. (Building one requires going out of your way — `Value` owns
/// its children — so this is documented rather than checked.)
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    /// A variable reference, rendered as `$name`.
    Variable(Name),
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
    /// An enum reference, rendered as a bare (unquoted) validated [`Name`].
    ///
    /// Construct with [`Value::enum_value`]. This wrapper is the only way
    /// to emit an unquoted identifier as a value — see [`Value::Ident`].
    Enum(Name),
    /// A bare identifier that was *not* explicitly tagged as an enum or
    /// variable reference. Always fails rendering with
    /// [`RenderError::DisallowedValueType`]: permitting it would let any
    /// string become unescaped document text.
    Ident(Name),
    /// An ISO-8601 calendar date, rendered as a quoted `"YYYY-MM-DD"`
    /// string literal.
    Date(chrono::NaiveDate),
    /// An RFC 3339 UTC timestamp, rendered as a quoted string literal.
    DateTime(chrono::DateTime<chrono::Utc>),
    /// An arbitrary-precision decimal, rendered unquoted in its canonical
    /// digit form.
    Decimal(rust_decimal::Decimal),
    List(Vec<Value>),
    Object(IndexMap<Name, Value>),
}
impl Value {
    /// Tags `name` as an enum reference, to be rendered as a bare validated
    /// identifier rather than a quoted string.
    pub fn enum_value(name: impl Into<Name>) -> Self {
        Value::Enum(name.into())
    }

    /// Tags `name` as a reference to an operation variable, rendered as
    /// `$name`.
    pub fn variable(name: impl Into<Name>) -> Self {
        Value::Variable(name.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// Renders this [`Value`] as GraphQL value text.
    ///
    /// Every identifier this value contains (enum references, variable
    /// references, object keys) is validated against the name grammar on
    /// the way out; [`Value::Ident`] and non-finite floats fail outright.
    pub fn to_graphql_string(&self) -> Result<String, RenderError> {
        match self {
            Value::Variable(name) =>
                Ok(format!("${}", name.validate()?)),

            Value::Int(value) =>
                Ok(value.to_string()),

            Value::Float(value) => {
                if !value.is_finite() {
                    return Err(RenderError::NonFiniteFloat {
                        value: *value,
                    });
                }
                // f64's Display drops the decimal point for whole numbers,
                // but `1` re-parses as an Int literal rather than a Float.
                let mut literal = value.to_string();
                if !literal.contains('.') {
                    literal.push_str(".0");
                }
                Ok(literal)
            },

            Value::String(value) =>
                Ok(escape_string(value)),

            Value::Bool(value) =>
                Ok(value.to_string()),

            Value::Null =>
                Ok("null".to_string()),

            Value::Enum(name) =>
                Ok(name.validate()?.to_string()),

            Value::Ident(name) =>
                Err(RenderError::DisallowedValueType {
                    identifier: name.to_string(),
                }),

            Value::Date(value) =>
                Ok(format!("\"{}\"", value.format("%Y-%m-%d"))),

            Value::DateTime(value) =>
                Ok(format!(
                    "\"{}\"",
                    value.to_rfc3339_opts(SecondsFormat::Millis, true),
                )),

            Value::Decimal(value) =>
                Ok(value.to_string()),

            Value::List(values) => {
                let rendered = values.iter().map(
                    |value| value.to_graphql_string(),
                ).collect::<Result<Vec<String>, RenderError>>()?;
                Ok(format!("[{}]", rendered.join(", ")))
            },

            Value::Object(entries) => {
                let rendered = entries.iter().map(|(key, value)| Ok(format!(
                    "{}: {}",
                    key.validate()?,
                    value.to_graphql_string()?,
                ))).collect::<Result<Vec<String>, RenderError>>()?;
                Ok(format!("{{{}}}", rendered.join(", ")))
            },
        }
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}
/// Produces [`Value::Ident`] — the deliberately rejected bare-identifier
/// form. The conversion exists so that passing an untagged [`Name`] where a
/// value is expected surfaces as a precise render-time diagnosis rather
/// than a trait-bound error far from the mistake.
impl std::convert::From<Name> for Value {
    fn from(value: Name) -> Self {
        Value::Ident(value)
    }
}
impl std::convert::From<chrono::NaiveDate> for Value {
    fn from(value: chrono::NaiveDate) -> Self {
        Value::Date(value)
    }
}
impl std::convert::From<chrono::DateTime<chrono::Utc>> for Value {
    fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
        Value::DateTime(value)
    }
}
impl std::convert::From<rust_decimal::Decimal> for Value {
    fn from(value: rust_decimal::Decimal) -> Self {
        Value::Decimal(value)
    }
}
impl<T: Into<Value>> std::convert::From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}
impl std::convert::From<IndexMap<Name, Value>> for Value {
    fn from(entries: IndexMap<Name, Value>) -> Self {
        Value::Object(entries)
    }
}

/// Double-quotes `value`, escaping quotes, backslashes, and control
/// characters per
/// <https://spec.graphql.org/October2021/#sec-String-Value>.
fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('"');
    for ch in value.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            ch if ch.is_control() =>
                escaped.push_str(&format!("\\u{:04X}", ch as u32)),
            ch => escaped.push(ch),
        }
    }
    escaped.push('"');
    escaped
}
