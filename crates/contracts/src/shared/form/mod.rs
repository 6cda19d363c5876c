//! Schema-driven edit forms
//!
//! A [`FormSchema`] is a static list of [`FieldSpec`]s. The edit dialog renders
//! one input per spec, keeps the entered data in [`FormValues`], validates it
//! against each field's [`ValidationRules`] and turns it into the JSON body of
//! the create/update call.

pub mod field_type;
pub mod list_field;
pub mod types;
pub mod validation;
pub mod values;

pub use field_type::FieldKind;
pub use list_field::ListField;
pub use types::{FieldSpec, FormSchema};
pub use validation::{TextFormat, ValidationErrors, ValidationRules};
pub use values::{FieldValue, FormValues};
