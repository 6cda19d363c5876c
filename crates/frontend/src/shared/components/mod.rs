pub mod avatar;
pub mod badge;
pub mod form_field;
pub mod list_field_editor;
pub mod list_status;
pub mod list_toolbar;
pub mod page_header;
pub mod resource_dialog;
pub mod search_input;
pub mod stat_card;
pub mod status_dialog;
