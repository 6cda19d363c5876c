//! Generic list / dialog workflow shared by every resource page
//!
//! - `list_controller.rs`: pagination, debounced search, stale-response handling
//! - `dialog_controller.rs`: create/edit form lifecycle and submit
//! - `row_actions.rs`: status change and delete
//! - `page.rs`: wiring of the controllers into Leptos signals

pub mod dialog_controller;
pub mod list_controller;
pub mod page;
pub mod row_actions;

pub use dialog_controller::{DialogController, DialogMode, DialogPhase, DialogSnapshot, ListEdit, SubmitError};
pub use list_controller::{ListController, ListSnapshot, LoadStatus};
pub use page::{CrudPage, DetailState};
pub use row_actions::RowActions;
