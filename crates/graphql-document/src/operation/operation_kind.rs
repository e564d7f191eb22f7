use crate::RenderError;

/// The three [operation
/// types](https://spec.graphql.org/October2021/#sec-Language.Operations)
/// GraphQL defines.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    /// The keyword that opens a rendered operation of this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            OperationKind::Mutation => "mutation",
            OperationKind::Query => "query",
            OperationKind::Subscription => "subscription",
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
impl std::str::FromStr for OperationKind {
    type Err = RenderError;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "mutation" => Ok(OperationKind::Mutation),
            "query" => Ok(OperationKind::Query),
            "subscription" => Ok(OperationKind::Subscription),
            _ => Err(RenderError::InvalidOperationKind {
                kind: kind.to_string(),
            }),
        }
    }
}
