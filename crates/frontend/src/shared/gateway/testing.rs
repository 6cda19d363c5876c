//! In-memory doubles for controller and client tests

use super::{ApiRequest, ApiResponse, CredentialProvider, Gateway, GatewayError, Transport};
use crate::shared::notify::{NotificationLevel, Notifier};
use crate::shared::timer::Timer;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

struct Scripted {
    delay: Duration,
    result: Result<ApiResponse, GatewayError>,
}

/// Records every request and replays queued responses in order
#[derive(Default)]
pub struct MockTransport {
    requests: RefCell<Vec<ApiRequest>>,
    responses: RefCell<VecDeque<Scripted>>,
}

impl MockTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: Value) {
        self.respond_after(Duration::ZERO, status, body);
    }

    pub fn respond_raw(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Scripted {
            delay: Duration::ZERO,
            result: Ok(ApiResponse {
                status,
                body: body.to_string(),
            }),
        });
    }

    pub fn respond_after(&self, delay: Duration, status: u16, body: Value) {
        let body = if body.is_null() {
            String::new()
        } else {
            body.to_string()
        };
        self.responses.borrow_mut().push_back(Scripted {
            delay,
            result: Ok(ApiResponse { status, body }),
        });
    }

    pub fn fail(&self, error: GatewayError) {
        self.responses.borrow_mut().push_back(Scripted {
            delay: Duration::ZERO,
            result: Err(error),
        });
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, GatewayError> {
        self.requests.borrow_mut().push(request);
        let next = self.responses.borrow_mut().pop_front();
        match next {
            Some(scripted) => {
                if !scripted.delay.is_zero() {
                    tokio::time::sleep(scripted.delay).await;
                }
                scripted.result
            }
            None => Err(GatewayError::Transport("no response queued".to_string())),
        }
    }
}

pub struct StaticCredentials(pub Option<String>);

impl CredentialProvider for StaticCredentials {
    fn access_token(&self) -> Option<String> {
        self.0.clone()
    }
}

pub fn gateway_with_token(transport: &Rc<MockTransport>, token: Option<&str>) -> Rc<Gateway> {
    Rc::new(Gateway::new(
        "http://gateway.test",
        transport.clone(),
        Rc::new(StaticCredentials(token.map(str::to_string))),
    ))
}

pub fn gateway(transport: &Rc<MockTransport>) -> Rc<Gateway> {
    gateway_with_token(transport, Some("test-token"))
}

/// List envelope with the given items
pub fn page_body(items: Vec<Value>, page: u32, has_more: bool, total: Option<u64>) -> Value {
    json!({
        "items": items,
        "pagination": { "page": page, "limit": 20, "hasMore": has_more, "total": total }
    })
}

/// `count` event rows with ids starting at `first_id`
pub fn event_rows(first_id: u32, count: u32) -> Vec<Value> {
    (first_id..first_id + count)
        .map(|id| json!({ "id": id, "title": format!("Event {}", id), "status": "upcoming" }))
        .collect()
}

pub struct TokioTimer;

#[async_trait(?Send)]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notes: RefCell<Vec<(NotificationLevel, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn count(&self, level: NotificationLevel) -> usize {
        self.notes.borrow().iter().filter(|(l, _)| *l == level).count()
    }

    pub fn last(&self) -> Option<(NotificationLevel, String)> {
        self.notes.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NotificationLevel, title: &str, message: &str) {
        self.notes
            .borrow_mut()
            .push((level, format!("{}: {}", title, message)));
    }
}
