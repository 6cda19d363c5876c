//! Per-row mutations that do not need the edit form: status change and
//! delete. Both refetch the list once on success.

use super::list_controller::ListController;
use crate::shared::gateway::{GatewayError, ResourceClient};
use crate::shared::notify::Notifier;
use contracts::domain::common::Resource;
use std::rc::Rc;

pub struct RowActions<R: Resource> {
    client: ResourceClient<R>,
    list: Rc<ListController<R>>,
    notifier: Rc<dyn Notifier>,
}

impl<R: Resource> RowActions<R> {
    pub fn new(
        client: ResourceClient<R>,
        list: Rc<ListController<R>>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            client,
            list,
            notifier,
        }
    }

    pub async fn change_status(&self, id: &str, value: &str) -> Result<(), GatewayError> {
        let d = R::DESCRIPTOR;
        let label = d.status.map(|s| s.label).unwrap_or("Status");
        match self.client.update_status(id, value).await {
            Ok(_) => {
                self.notifier.success(
                    &format!("{} updated", label),
                    &format!("{} is now {}", d.element_name, value),
                );
                self.list.refresh().await;
                Ok(())
            }
            Err(e) => {
                self.notifier
                    .error(&format!("Failed to update {}", label.to_lowercase()), &e.user_message());
                Err(e)
            }
        }
    }

    pub async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        let d = R::DESCRIPTOR;
        match self.client.delete(id).await {
            Ok(()) => {
                self.notifier.success(
                    &format!("{} deleted", d.element_name),
                    &format!("The {} was removed", d.element_name.to_lowercase()),
                );
                self.list.refresh().await;
                Ok(())
            }
            Err(e) => {
                self.notifier
                    .error(&format!("Failed to delete {}", d.element_name), &e.user_message());
                Err(e)
            }
        }
    }
}
