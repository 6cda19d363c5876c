//! Create/edit dialog of one resource
//!
//! The dialog is opened blank (create) or from a list row (edit). Resources
//! whose rows omit editable fields load the detail record first. A
//! successful submit closes the dialog and refetches the list exactly once.

use super::list_controller::ListController;
use crate::shared::gateway::{GatewayError, ResourceClient};
use crate::shared::notify::Notifier;
use contracts::domain::common::{EntityId, Resource};
use contracts::shared::form::{FormValues, ValidationErrors};
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogPhase {
    #[default]
    Closed,
    LoadingDetail,
    Ready,
    Submitting,
    /// Detail fetch failed; submitting is disabled
    LoadFailed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DialogSnapshot {
    pub mode: Option<DialogMode>,
    pub phase: DialogPhase,
    pub values: FormValues,
    pub errors: ValidationErrors,
    /// Last load or submit failure shown inside the dialog
    pub failure: Option<String>,
}

impl DialogSnapshot {
    pub fn is_open(&self) -> bool {
        self.phase != DialogPhase::Closed
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, Some(DialogMode::Edit { .. }))
    }

    pub fn can_submit(&self) -> bool {
        self.phase == DialogPhase::Ready
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    ConflictOrServer(GatewayError),

    #[error("Record details could not be loaded")]
    DetailUnavailable,

    #[error("No dialog is open")]
    NotOpen,

    #[error("A submit is already in flight")]
    InFlight,
}

/// One edit of a list-valued field
#[derive(Debug, Clone, PartialEq)]
pub enum ListEdit {
    Append { field: String },
    Remove { field: String, index: usize },
    Set { field: String, index: usize, value: String },
}

impl ListEdit {
    fn field(&self) -> &str {
        match self {
            ListEdit::Append { field }
            | ListEdit::Remove { field, .. }
            | ListEdit::Set { field, .. } => field,
        }
    }
}

#[derive(Default)]
struct DialogState {
    view: DialogSnapshot,
    /// Bumped on every open/close so late detail responses are dropped
    generation: u64,
}

type Observer = Box<dyn Fn(&DialogSnapshot)>;

pub struct DialogController<R: Resource> {
    client: ResourceClient<R>,
    list: Rc<ListController<R>>,
    notifier: Rc<dyn Notifier>,
    state: RefCell<DialogState>,
    observer: RefCell<Option<Observer>>,
}

impl<R: Resource> DialogController<R> {
    pub fn new(
        client: ResourceClient<R>,
        list: Rc<ListController<R>>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            client,
            list,
            notifier,
            state: RefCell::new(DialogState::default()),
            observer: RefCell::new(None),
        }
    }

    pub fn set_observer(&self, observer: impl Fn(&DialogSnapshot) + 'static) {
        *self.observer.borrow_mut() = Some(Box::new(observer));
        self.publish();
    }

    pub fn snapshot(&self) -> DialogSnapshot {
        self.state.borrow().view.clone()
    }

    fn publish(&self) {
        let snapshot = self.snapshot();
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(&snapshot);
        }
    }

    /// Reset to a new dialog and return its generation
    fn reset(&self, mode: DialogMode, phase: DialogPhase, values: FormValues) -> u64 {
        let mut state = self.state.borrow_mut();
        state.generation += 1;
        state.view = DialogSnapshot {
            mode: Some(mode),
            phase,
            values,
            errors: ValidationErrors::new(),
            failure: None,
        };
        state.generation
    }

    pub fn title(&self) -> String {
        let element = R::DESCRIPTOR.element_name;
        match self.state.borrow().view.mode {
            Some(DialogMode::Edit { .. }) => format!("Edit {}", element),
            _ => format!("Add {}", element),
        }
    }

    /// Blank form. Does nothing for resources the gateway cannot create.
    pub fn open_create(&self) {
        if R::DESCRIPTOR.create.is_none() {
            log::warn!("{}: create is not supported", R::DESCRIPTOR.key);
            return;
        }
        self.reset(
            DialogMode::Create,
            DialogPhase::Ready,
            FormValues::blank(&R::form_schema()),
        );
        self.publish();
    }

    /// Form filled from `row`, or from the detail record when the
    /// resource requires it
    pub async fn open_edit(&self, row: &R::Row) {
        let schema = R::form_schema();
        let id = row.entity_id().to_string();

        if !R::DESCRIPTOR.fetch_detail_for_edit {
            match FormValues::from_entity(&schema, row) {
                Ok(values) => {
                    self.reset(DialogMode::Edit { id }, DialogPhase::Ready, values);
                }
                Err(e) => {
                    self.reset(
                        DialogMode::Edit { id },
                        DialogPhase::LoadFailed,
                        FormValues::blank(&schema),
                    );
                    self.fail_load(&e.to_string());
                }
            }
            self.publish();
            return;
        }

        let generation = self.reset(
            DialogMode::Edit { id: id.clone() },
            DialogPhase::LoadingDetail,
            FormValues::blank(&schema),
        );
        self.publish();

        let result = self.client.get(&id).await;
        if self.state.borrow().generation != generation {
            log::debug!("{}: dialog closed before detail {} arrived", R::DESCRIPTOR.key, id);
            return;
        }

        let values = result
            .map_err(|e| e.user_message())
            .and_then(|record| FormValues::from_entity(&schema, &record).map_err(|e| e.to_string()));
        match values {
            Ok(values) => {
                let mut state = self.state.borrow_mut();
                state.view.values = values;
                state.view.phase = DialogPhase::Ready;
            }
            Err(message) => {
                self.state.borrow_mut().view.phase = DialogPhase::LoadFailed;
                self.fail_load(&message);
            }
        }
        self.publish();
    }

    fn fail_load(&self, message: &str) {
        log::warn!("{}: detail unavailable: {}", R::DESCRIPTOR.key, message);
        self.state.borrow_mut().view.failure = Some(message.to_string());
        self.notifier.error(
            &format!("Failed to load {}", R::DESCRIPTOR.element_name),
            message,
        );
    }

    pub fn close(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.view = DialogSnapshot::default();
        }
        self.publish();
    }

    fn edit_values(&self, field: &str, edit: impl FnOnce(&mut FormValues)) {
        {
            let mut state = self.state.borrow_mut();
            if !state.view.is_open() {
                return;
            }
            edit(&mut state.view.values);
            state.view.errors.remove(field);
        }
        self.publish();
    }

    pub fn set_text(&self, field: &str, value: impl Into<String>) {
        let value = value.into();
        self.edit_values(field, |values| values.set_text(field, value));
    }

    pub fn set_flag(&self, field: &str, value: bool) {
        self.edit_values(field, |values| values.set_flag(field, value));
    }

    pub fn edit_list(&self, edit: ListEdit) {
        let field = edit.field().to_string();
        self.edit_values(&field, |values| {
            let list = values.list_mut(&field);
            match edit {
                ListEdit::Append { .. } => list.push_blank(),
                ListEdit::Remove { index, .. } => {
                    list.remove_at(index);
                }
                ListEdit::Set { index, value, .. } => {
                    list.set(index, value);
                }
            }
        });
    }

    /// Validate and send the form. Validation failures never reach the
    /// gateway; gateway failures keep the dialog open with its values.
    pub async fn submit(&self) -> Result<(), SubmitError> {
        let schema = R::form_schema();
        let d = R::DESCRIPTOR;

        let (mode, values) = {
            let mut state = self.state.borrow_mut();
            match state.view.phase {
                DialogPhase::Closed => return Err(SubmitError::NotOpen),
                DialogPhase::Submitting => return Err(SubmitError::InFlight),
                DialogPhase::LoadingDetail | DialogPhase::LoadFailed => {
                    return Err(SubmitError::DetailUnavailable)
                }
                DialogPhase::Ready => {}
            }
            let Some(mode) = state.view.mode.clone() else {
                return Err(SubmitError::NotOpen);
            };
            if let Err(errors) = schema.validate(&state.view.values) {
                state.view.errors = errors.clone();
                drop(state);
                self.publish();
                return Err(SubmitError::Validation(errors));
            }
            state.view.errors = ValidationErrors::new();
            state.view.failure = None;
            state.view.phase = DialogPhase::Submitting;
            (mode, state.view.values.clone())
        };
        self.publish();

        let body = values.to_payload(&schema);
        let (result, verb) = match &mode {
            DialogMode::Create => (self.client.create(body).await.map(|_| ()), "created"),
            DialogMode::Edit { id } => (self.client.update(id, body).await.map(|_| ()), "updated"),
        };

        match result {
            Ok(()) => {
                self.notifier.success(
                    &format!("{} {}", d.element_name, verb),
                    &format!("The {} was {} successfully", d.element_name.to_lowercase(), verb),
                );
                self.close();
                self.list.refresh().await;
                Ok(())
            }
            Err(e) => {
                {
                    let mut state = self.state.borrow_mut();
                    if state.view.mode.as_ref() == Some(&mode) {
                        state.view.phase = DialogPhase::Ready;
                        state.view.failure = Some(e.user_message());
                    }
                }
                self.notifier.error(
                    &format!("Failed to save {}", d.element_name),
                    &e.user_message(),
                );
                self.publish();
                Err(SubmitError::ConflictOrServer(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::gateway::testing::{
        event_rows, gateway, page_body, MockTransport, RecordingNotifier, TokioTimer,
    };
    use crate::shared::gateway::Method;
    use crate::shared::notify::NotificationLevel;
    use contracts::domain::a001_alumni::aggregate::{Alumni, AlumniProfile};
    use contracts::domain::a003_educator::aggregate::Educator;
    use contracts::domain::a004_event::aggregate::Event;
    use serde_json::json;
    use std::time::Duration;

    struct Fixture<R: Resource> {
        transport: Rc<MockTransport>,
        notifier: Rc<RecordingNotifier>,
        dialog: DialogController<R>,
    }

    fn fixture<R: Resource>() -> Fixture<R> {
        let transport = MockTransport::new();
        let notifier = RecordingNotifier::new();
        let client = ResourceClient::<R>::new(gateway(&transport));
        let list = Rc::new(ListController::new(
            client.clone(),
            Rc::new(TokioTimer),
            notifier.clone(),
            20,
            Duration::from_millis(300),
        ));
        let dialog = DialogController::new(client, list, notifier.clone());
        Fixture {
            transport,
            notifier,
            dialog,
        }
    }

    fn educator() -> Educator {
        serde_json::from_value(json!({
            "id": 4,
            "name": "Dr. Sarah Wilson",
            "department": "Computer Science",
            "specialization": "Artificial Intelligence",
            "email": "sarah.wilson@example.com",
            "phone": "+1 234-567-8900",
            "experience": "15 years",
            "areasOfExpertise": ["Machine Learning", "Neural Networks"],
            "achievements": ["Best Teacher Award 2023"],
            "documents": [],
            "status": "active"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_blank_create_is_blocked_without_request() {
        let f = fixture::<Event>();
        f.dialog.open_create();
        f.dialog.set_text("title", "");

        let err = f.dialog.submit().await.unwrap_err();
        let SubmitError::Validation(errors) = err else {
            panic!("expected a validation error, got {:?}", err);
        };
        assert_eq!(errors.get("title"), Some("Title is required"));

        let snapshot = f.dialog.snapshot();
        assert!(snapshot.is_open());
        assert_eq!(snapshot.mode, Some(DialogMode::Create));
        assert!(snapshot.errors.contains("title"));
        assert_eq!(f.transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_editing_a_field_clears_its_error() {
        let f = fixture::<Event>();
        f.dialog.open_create();
        let _ = f.dialog.submit().await;
        assert!(f.dialog.snapshot().errors.contains("venue"));

        f.dialog.set_text("venue", "Main Campus");
        let snapshot = f.dialog.snapshot();
        assert!(!snapshot.errors.contains("venue"));
        assert!(snapshot.errors.contains("title"));
    }

    #[tokio::test]
    async fn test_create_posts_without_id_then_refetches_once() {
        let f = fixture::<Event>();
        f.transport.respond(201, json!({ "id": 12 }));
        f.transport.respond(200, page_body(event_rows(1, 3), 1, false, Some(3)));

        f.dialog.open_create();
        f.dialog.set_text("title", "Annual Alumni Meet 2025");
        f.dialog.set_text("description", "Join us for the annual gathering");
        f.dialog.set_text("date", "2025-03-15");
        f.dialog.set_text("time", "10:00 AM");
        f.dialog.set_text("venue", "Main Campus");
        f.dialog.set_text("category", "Networking");
        f.dialog.set_text("capacity", "300");
        f.dialog.submit().await.unwrap();

        let requests = f.transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::Post);
        let body = requests[0].body.clone().unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["capacity"], json!(300));
        assert_eq!(requests[1].method, Method::Get);
        assert_eq!(requests[1].param("page"), Some("1"));
        assert!(!f.dialog.snapshot().is_open());
        assert_eq!(f.notifier.count(NotificationLevel::Success), 1);
    }

    #[tokio::test]
    async fn test_edit_puts_original_id_and_refetches() {
        let f = fixture::<Educator>();
        f.transport.respond(200, json!({ "success": true }));
        f.transport.respond(200, page_body(Vec::new(), 1, false, None));

        f.dialog.open_edit(&educator()).await;
        assert_eq!(f.dialog.title(), "Edit Educator");
        f.dialog.set_text("experience", "16 years");
        f.dialog.submit().await.unwrap();

        let requests = f.transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].url, "http://gateway.test/educators/4");
        let body = requests[0].body.clone().unwrap();
        assert_eq!(body["experience"], json!("16 years"));
        assert_eq!(body["areasOfExpertise"], json!(["Machine Learning", "Neural Networks"]));
        assert_eq!(requests[1].method, Method::Get);
        assert!(!f.dialog.snapshot().is_open());
    }

    #[tokio::test]
    async fn test_server_failure_keeps_dialog_and_values() {
        let f = fixture::<Educator>();
        f.transport.respond(409, json!({ "message": "Email already in use" }));

        f.dialog.open_edit(&educator()).await;
        f.dialog.set_text("email", "taken@example.com");
        let err = f.dialog.submit().await.unwrap_err();
        assert!(matches!(err, SubmitError::ConflictOrServer(_)));

        let snapshot = f.dialog.snapshot();
        assert_eq!(snapshot.phase, DialogPhase::Ready);
        assert_eq!(snapshot.values.text("email"), "taken@example.com");
        assert_eq!(snapshot.failure.as_deref(), Some("Email already in use"));
        assert_eq!(f.notifier.count(NotificationLevel::Error), 1);
        // no refetch after a failed mutation
        assert_eq!(f.transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_list_fields_are_pruned_before_submit() {
        let f = fixture::<Educator>();
        f.transport.respond(200, json!({}));
        f.transport.respond(200, page_body(Vec::new(), 1, false, None));

        f.dialog.open_edit(&educator()).await;
        f.dialog.edit_list(ListEdit::Append {
            field: "achievements".into(),
        });
        f.dialog.edit_list(ListEdit::Append {
            field: "documents".into(),
        });
        f.dialog.edit_list(ListEdit::Set {
            field: "documents".into(),
            index: 0,
            value: "https://cdn.example.com/cv.pdf".into(),
        });
        f.dialog.edit_list(ListEdit::Remove {
            field: "areasOfExpertise".into(),
            index: 0,
        });
        assert_eq!(
            f.dialog.snapshot().values.list("achievements").map(|l| l.len()),
            Some(2)
        );
        f.dialog.submit().await.unwrap();

        let body = f.transport.requests()[0].body.clone().unwrap();
        assert_eq!(body["achievements"], json!(["Best Teacher Award 2023"]));
        assert_eq!(body["documents"], json!(["https://cdn.example.com/cv.pdf"]));
        assert_eq!(body["areasOfExpertise"], json!(["Neural Networks"]));
    }

    #[tokio::test]
    async fn test_emptied_required_list_blocks_submit() {
        let f = fixture::<Educator>();
        f.dialog.open_edit(&educator()).await;
        f.dialog.edit_list(ListEdit::Set {
            field: "achievements".into(),
            index: 0,
            value: "  ".into(),
        });
        let err = f.dialog.submit().await.unwrap_err();
        assert!(matches!(err, SubmitError::Validation(ref e) if e.contains("achievements")));
        assert_eq!(f.transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_edit_loads_detail_when_rows_are_partial() {
        let f = fixture::<AlumniProfile>();
        f.transport.respond(
            200,
            json!({ "profile": {
                "id": "u1",
                "name": "John Doe",
                "email": "john.doe@example.com",
                "mobile": "9876543210",
                "address": "12 MG Road",
                "city": "Pune",
                "state": "Maharashtra",
                "areasOfExpertise": ["Cloud"]
            }}),
        );
        let row: Alumni = serde_json::from_value(json!({ "id": "u1", "name": "John Doe" })).unwrap();

        f.dialog.open_edit(&row).await;

        let snapshot = f.dialog.snapshot();
        assert_eq!(snapshot.phase, DialogPhase::Ready);
        assert_eq!(snapshot.values.text("address"), "12 MG Road");
        assert_eq!(f.transport.requests()[0].url, "http://gateway.test/profile/u1");
    }

    #[tokio::test]
    async fn test_missing_detail_disables_submit() {
        let f = fixture::<Event>();
        f.transport.respond(404, json!({ "message": "Event not found" }));
        let row: Event = serde_json::from_value(json!({ "id": 8, "title": "Gala" })).unwrap();

        f.dialog.open_edit(&row).await;
        let snapshot = f.dialog.snapshot();
        assert_eq!(snapshot.phase, DialogPhase::LoadFailed);
        assert!(!snapshot.can_submit());
        assert_eq!(snapshot.failure.as_deref(), Some("Record not found"));

        assert_eq!(f.dialog.submit().await, Err(SubmitError::DetailUnavailable));
        assert_eq!(f.transport.request_count(), 1);
        assert_eq!(f.notifier.count(NotificationLevel::Error), 1);
    }

    #[tokio::test]
    async fn test_alumni_have_no_create_dialog() {
        let f = fixture::<AlumniProfile>();
        f.dialog.open_create();
        assert!(!f.dialog.snapshot().is_open());
        assert_eq!(f.dialog.submit().await, Err(SubmitError::NotOpen));
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_detail_after_close_is_ignored() {
        let f = fixture::<Event>();
        f.transport.respond_after(
            Duration::from_millis(200),
            200,
            json!({ "id": 8, "title": "Gala" }),
        );
        let row: Event = serde_json::from_value(json!({ "id": 8, "title": "Gala" })).unwrap();

        tokio::join!(f.dialog.open_edit(&row), async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            f.dialog.close();
        });
        assert!(!f.dialog.snapshot().is_open());
    }
}
