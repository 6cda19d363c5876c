pub mod form;
pub mod pagination;
