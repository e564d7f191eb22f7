mod field;
mod fragment;
mod fragment_spread;
mod inline_fragment;
mod operation;
mod operation_kind;
mod operation_options;
mod selection;
mod selection_set;
mod variable;

pub use field::Field;
pub use fragment::Fragment;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use operation::Operation;
pub use operation_kind::OperationKind;
pub use operation_options::OperationOptions;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use variable::Variable;

#[cfg(test)]
mod tests;
