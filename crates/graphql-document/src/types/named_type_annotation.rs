use crate::Name;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeAnnotation {
    pub(super) name: Name,
    pub(super) nullable: bool,
}
impl NamedTypeAnnotation {
    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
