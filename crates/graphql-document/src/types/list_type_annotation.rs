use crate::types::TypeAnnotation;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListTypeAnnotation {
    pub(super) inner_type: Box<TypeAnnotation>,
    pub(super) nullable: bool,
}
impl ListTypeAnnotation {
    pub fn inner_type(&self) -> &TypeAnnotation {
        &self.inner_type
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
