use thiserror::Error;

/// A GraphQL [name](https://spec.graphql.org/October2021/#sec-Names): the
/// identifier form used for field names, argument names, directive names,
/// type names, fragment names, variable names, aliases, and enum values.
///
/// A [`Name`] carries its payload unvalidated. Validation happens once, at
/// render time, via [`Name::validate`] — the single gate every
/// identifier-position string passes through before it is emitted into a
/// document. Constructing a [`Name`] from an arbitrary string is therefore
/// always cheap and infallible; rendering a document containing an invalid
/// one is not.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Name(String);
impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Name(name.into())
    }

    /// The raw (possibly invalid) string payload.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Indicates whether this [`Name`] satisfies the name grammar without
    /// producing the error value.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Checks this [`Name`] against the grammar
    /// `^[_A-Za-z][_0-9A-Za-z]*$` and returns the payload string on
    /// success.
    ///
    /// Everything rendered into an unquoted identifier position of a
    /// document must pass through here first. Enum values in particular are
    /// emitted bare (unquoted), so this check is what stops a crafted
    /// "enum value" like `MUSIC) { id }` from splicing raw GraphQL syntax
    /// into the output.
    pub fn validate(&self) -> Result<&str, InvalidNameError> {
        let mut bytes = self.0.bytes();
        let valid_start = match bytes.next() {
            Some(byte) => byte == b'_' || byte.is_ascii_alphabetic(),
            None => false,
        };
        let valid_rest = bytes.all(
            |byte| byte == b'_' || byte.is_ascii_alphanumeric(),
        );
        if valid_start && valid_rest {
            Ok(self.0.as_str())
        } else {
            Err(InvalidNameError::new(self.0.as_str()))
        }
    }
}
impl std::convert::From<&str> for Name {
    fn from(value: &str) -> Self {
        Name(value.to_string())
    }
}
impl std::convert::From<String> for Name {
    fn from(value: String) -> Self {
        Name(value)
    }
}
impl std::convert::From<&String> for Name {
    fn from(value: &String) -> Self {
        Name(value.to_string())
    }
}
impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Produced when an identifier-position string fails the GraphQL name
/// grammar (see [`Name::validate`]).
#[derive(Clone, Debug, Error, PartialEq)]
#[error(
    "`{name}` is not a valid GraphQL name \
    (names must match `[_A-Za-z][_0-9A-Za-z]*`)"
)]
pub struct InvalidNameError {
    /// The offending string, or `[empty string]` if it was empty.
    pub name: String,
}
impl InvalidNameError {
    pub(crate) fn new(name: &str) -> Self {
        InvalidNameError {
            name: if name.is_empty() {
                "[empty string]".to_string()
            } else {
                name.to_string()
            },
        }
    }
}
