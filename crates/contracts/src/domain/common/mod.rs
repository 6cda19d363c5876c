//! Common types and traits for all gateway resources

pub mod entity_id;
pub mod resource;

// Re-exports
pub use entity_id::{entity_id, lenient_count, EntityId};
pub use resource::{Resource, ResourceDescriptor, StatusField, UpdateRoute};
