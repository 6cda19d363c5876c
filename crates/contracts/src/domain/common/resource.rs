use super::entity_id::EntityId;
use crate::shared::form::FormSchema;
use serde::{de::DeserializeOwned, Serialize};

/// How an update reaches the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateRoute {
    /// `PUT {collection}/{id}`
    ById,
    /// `PUT {path}` with the id carried in the JSON body
    IdInBody(&'static str),
}

/// Field edited by the change-status dialog and its allowed values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusField {
    pub name: &'static str,
    pub label: &'static str,
    pub options: &'static [&'static str],
}

/// Static routing and UI metadata of one gateway resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Stable key used for navigation (e.g. "a003_educator")
    pub key: &'static str,
    /// List endpoint, also the base for delete
    pub collection: &'static str,
    /// Detail endpoint base, `{detail}/{id}`
    pub detail: &'static str,
    /// Key wrapping the detail record, e.g. `{ "profile": {...} }`
    pub detail_envelope: Option<&'static str>,
    /// `POST` endpoint; `None` when the gateway does not create this resource
    pub create: Option<&'static str>,
    pub update: UpdateRoute,
    pub deletable: bool,
    /// Query parameter carrying the search term
    pub filter_param: &'static str,
    /// Edit forms need the full detail record, list rows are not enough
    pub fetch_detail_for_edit: bool,
    pub status: Option<StatusField>,
    /// Singular UI name (e.g. "Educator")
    pub element_name: &'static str,
    /// Plural UI name (e.g. "Educators")
    pub list_name: &'static str,
}

impl ResourceDescriptor {
    pub fn detail_path(&self, id: &str) -> String {
        format!("{}/{}", self.detail, id)
    }

    pub fn update_path(&self, id: &str) -> String {
        match self.update {
            UpdateRoute::ById => format!("{}/{}", self.collection, id),
            UpdateRoute::IdInBody(path) => path.to_string(),
        }
    }

    pub fn delete_path(&self, id: &str) -> String {
        format!("{}/{}", self.collection, id)
    }
}

/// A record type the gateway lists, reads, creates, updates and deletes.
///
/// `Self` is the full record returned by the detail endpoint and edited by
/// the dialog; [`Resource::Row`] is the (possibly narrower) list row.
pub trait Resource: Serialize + DeserializeOwned + Clone + EntityId + Send + Sync + 'static {
    type Row: Serialize + DeserializeOwned + Clone + EntityId + Send + Sync + 'static;

    const DESCRIPTOR: ResourceDescriptor;

    fn form_schema() -> FormSchema;
}
