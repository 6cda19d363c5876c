//! Paginated, searchable list of one resource
//!
//! States: `Idle` (nothing in flight), `Loading` (previous items still
//! shown) and `Error` (last fetch failed, previous items kept). Every load
//! takes a sequence number; a response that arrives after a newer load was
//! started is dropped.

use crate::shared::gateway::ResourceClient;
use crate::shared::notify::Notifier;
use crate::shared::timer::Timer;
use contracts::domain::common::Resource;
use contracts::shared::pagination::{ListQuery, Pagination};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Error,
}

/// What the list page renders
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
    /// Search input as typed
    pub query: String,
    pub status: LoadStatus,
    /// At least one page was received
    pub loaded: bool,
}

impl<T> Default for ListSnapshot<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::default(),
            query: String::new(),
            status: LoadStatus::Idle,
            loaded: false,
        }
    }
}

impl<T> ListSnapshot<T> {
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn can_load_more(&self) -> bool {
        self.pagination.has_more && !self.is_loading()
    }

    /// First page still on its way, nothing to show yet
    pub fn is_initial_load(&self) -> bool {
        !self.loaded && self.is_loading()
    }

    pub fn is_empty_result(&self) -> bool {
        self.loaded && self.items.is_empty() && !self.is_loading()
    }
}

struct ListState<T> {
    view: ListSnapshot<T>,
    /// Query the held items were fetched with, used by `load_more`
    active_query: String,
    load_seq: u64,
    search_seq: u64,
}

type Observer<T> = Box<dyn Fn(&ListSnapshot<T>)>;

pub struct ListController<R: Resource> {
    client: ResourceClient<R>,
    timer: Rc<dyn Timer>,
    notifier: Rc<dyn Notifier>,
    page_size: u32,
    debounce: Duration,
    state: RefCell<ListState<R::Row>>,
    observer: RefCell<Option<Observer<R::Row>>>,
}

impl<R: Resource> ListController<R> {
    pub fn new(
        client: ResourceClient<R>,
        timer: Rc<dyn Timer>,
        notifier: Rc<dyn Notifier>,
        page_size: u32,
        debounce: Duration,
    ) -> Self {
        Self {
            client,
            timer,
            notifier,
            page_size,
            debounce,
            state: RefCell::new(ListState {
                view: ListSnapshot::default(),
                active_query: String::new(),
                load_seq: 0,
                search_seq: 0,
            }),
            observer: RefCell::new(None),
        }
    }

    /// Register the callback receiving every state change
    pub fn set_observer(&self, observer: impl Fn(&ListSnapshot<R::Row>) + 'static) {
        *self.observer.borrow_mut() = Some(Box::new(observer));
        self.publish();
    }

    pub fn snapshot(&self) -> ListSnapshot<R::Row> {
        self.state.borrow().view.clone()
    }

    fn publish(&self) {
        let snapshot = self.snapshot();
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(&snapshot);
        }
    }

    /// Fetch one page. Page 1 replaces the held items, later pages append.
    /// Failures keep the items and end up as a notification.
    pub async fn load(&self, page: u32, query: &str) {
        let seq = {
            let mut state = self.state.borrow_mut();
            state.load_seq += 1;
            state.view.status = LoadStatus::Loading;
            state.view.query = query.to_string();
            state.load_seq
        };
        self.publish();

        let request = ListQuery::new(page, self.page_size, query);
        let result = self.client.list(&request).await;

        let failure = {
            let mut state = self.state.borrow_mut();
            if state.load_seq != seq {
                log::debug!(
                    "{}: dropping superseded page {} for {:?}",
                    R::DESCRIPTOR.key,
                    request.page,
                    query
                );
                return;
            }
            match result {
                Ok(received) => {
                    if request.page == 1 {
                        state.view.items = received.items;
                    } else {
                        state.view.items.extend(received.items);
                    }
                    state.view.pagination = Pagination {
                        page: request.page,
                        ..received.pagination
                    };
                    state.active_query = query.to_string();
                    state.view.status = LoadStatus::Idle;
                    state.view.loaded = true;
                    None
                }
                Err(e) => {
                    state.view.status = LoadStatus::Error;
                    Some(e)
                }
            }
        };

        if let Some(e) = failure {
            log::warn!("{}: page {} failed: {}", R::DESCRIPTOR.key, request.page, e);
            self.notifier.error(
                &format!("Failed to load {}", R::DESCRIPTOR.list_name),
                &e.user_message(),
            );
        }
        self.publish();
    }

    /// Record the query and load page 1 once input has paused for the
    /// debounce window. A newer search or refresh cancels this one.
    pub async fn search(&self, query: impl Into<String>) {
        let query = query.into();
        let ticket = {
            let mut state = self.state.borrow_mut();
            state.search_seq += 1;
            state.view.query = query.clone();
            state.search_seq
        };
        self.publish();

        self.timer.sleep(self.debounce).await;

        if self.state.borrow().search_seq != ticket {
            return;
        }
        self.load(1, &query).await;
    }

    /// Next page for the current query; nothing happens without `hasMore`
    pub async fn load_more(&self) {
        let next = {
            let state = self.state.borrow();
            if state.view.is_loading() {
                None
            } else {
                state
                    .view
                    .pagination
                    .next_page()
                    .map(|page| (page, state.active_query.clone()))
            }
        };
        match next {
            Some((page, query)) => self.load(page, &query).await,
            None => log::debug!("{}: no further page to load", R::DESCRIPTOR.key),
        }
    }

    /// Page 1 for the query in the search box. Used on mount, by the
    /// refresh button and after every successful mutation.
    pub async fn refresh(&self) {
        let query = {
            let mut state = self.state.borrow_mut();
            state.search_seq += 1;
            state.view.query.clone()
        };
        self.load(1, &query).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::gateway::testing::{
        event_rows, gateway, page_body, MockTransport, RecordingNotifier, TokioTimer,
    };
    use crate::shared::gateway::{GatewayError, Method};
    use crate::shared::notify::NotificationLevel;
    use contracts::domain::a004_event::aggregate::Event;
    use serde_json::json;

    fn controller(
        transport: &Rc<MockTransport>,
        notifier: &Rc<RecordingNotifier>,
    ) -> ListController<Event> {
        ListController::new(
            ResourceClient::new(gateway(transport)),
            Rc::new(TokioTimer),
            notifier.clone(),
            20,
            Duration::from_millis(300),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_fires_one_fetch_after_pause() {
        let transport = MockTransport::new();
        transport.respond(200, page_body(event_rows(1, 2), 1, false, Some(2)));
        let notifier = RecordingNotifier::new();
        let list = controller(&transport, &notifier);

        list.search("workshop").await;

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].param("search"), Some("workshop"));
        assert_eq!(requests[0].param("page"), Some("1"));
        assert_eq!(list.snapshot().items.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_keystrokes_inside_debounce_window_fetch_only_last_query() {
        let transport = MockTransport::new();
        transport.respond(200, page_body(event_rows(1, 1), 1, false, None));
        let notifier = RecordingNotifier::new();
        let list = controller(&transport, &notifier);

        tokio::join!(list.search("a"), async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            list.search("ab").await;
        });

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].param("search"), Some("ab"));
        assert_eq!(list.snapshot().query, "ab");
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_fetch_before_debounce_window_ends() {
        let transport = MockTransport::new();
        transport.respond(200, page_body(Vec::new(), 1, false, None));
        let notifier = RecordingNotifier::new();
        let list = controller(&transport, &notifier);

        tokio::join!(list.search("gala"), async {
            tokio::time::sleep(Duration::from_millis(299)).await;
            assert_eq!(transport.request_count(), 0);
        });
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_more_appends_next_page() {
        let transport = MockTransport::new();
        transport.respond(200, page_body(event_rows(1, 20), 1, true, Some(27)));
        transport.respond(200, page_body(event_rows(21, 7), 2, false, Some(27)));
        let notifier = RecordingNotifier::new();
        let list = controller(&transport, &notifier);

        list.refresh().await;
        assert_eq!(list.snapshot().items.len(), 20);
        assert!(list.snapshot().can_load_more());

        list.load_more().await;

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].param("page"), Some("2"));
        let snapshot = list.snapshot();
        assert_eq!(snapshot.items.len(), 27);
        assert_eq!(snapshot.items[20].id, "21");
        assert_eq!(snapshot.pagination.page, 2);
        assert!(!snapshot.pagination.has_more);
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_more_without_more_pages_is_a_no_op() {
        let transport = MockTransport::new();
        transport.respond(200, page_body(event_rows(1, 3), 1, false, Some(3)));
        let notifier = RecordingNotifier::new();
        let list = controller(&transport, &notifier);

        list.load_more().await;
        assert_eq!(transport.request_count(), 0);

        list.refresh().await;
        list.load_more().await;
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_load_keeps_items_and_notifies() {
        let transport = MockTransport::new();
        transport.respond(200, page_body(event_rows(1, 20), 1, true, None));
        transport.respond(500, json!({ "message": "Database unavailable" }));
        transport.fail(GatewayError::Transport("offline".into()));
        let notifier = RecordingNotifier::new();
        let list = controller(&transport, &notifier);

        list.refresh().await;
        list.load_more().await;

        let snapshot = list.snapshot();
        assert_eq!(snapshot.status, LoadStatus::Error);
        assert_eq!(snapshot.items.len(), 20);
        assert_eq!(notifier.count(NotificationLevel::Error), 1);
        assert_eq!(
            notifier.last().map(|(_, text)| text),
            Some("Failed to load Events: Database unavailable".to_string())
        );

        list.refresh().await;
        assert_eq!(list.snapshot().items.len(), 20);
        assert_eq!(notifier.count(NotificationLevel::Error), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_after_error_returns_to_idle() {
        let transport = MockTransport::new();
        transport.fail(GatewayError::Transport("offline".into()));
        transport.respond(200, page_body(event_rows(1, 1), 1, false, None));
        let notifier = RecordingNotifier::new();
        let list = controller(&transport, &notifier);

        list.refresh().await;
        assert_eq!(list.snapshot().status, LoadStatus::Error);
        assert!(!list.snapshot().loaded);

        list.refresh().await;
        let snapshot = list.snapshot();
        assert_eq!(snapshot.status, LoadStatus::Idle);
        assert_eq!(snapshot.items.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_response_does_not_overwrite_newer_one() {
        let transport = MockTransport::new();
        transport.respond_after(
            Duration::from_millis(500),
            200,
            page_body(event_rows(1, 5), 1, false, None),
        );
        transport.respond_after(
            Duration::from_millis(10),
            200,
            page_body(event_rows(100, 1), 1, false, None),
        );
        let notifier = RecordingNotifier::new();
        let list = controller(&transport, &notifier);

        tokio::join!(list.load(1, "a"), async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            list.load(1, "ab").await;
        });

        let snapshot = list.snapshot();
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].id, "100");
        assert_eq!(snapshot.query, "ab");
        assert_eq!(snapshot.status, LoadStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_cancels_pending_search() {
        let transport = MockTransport::new();
        transport.respond(200, page_body(event_rows(1, 1), 1, false, None));
        let notifier = RecordingNotifier::new();
        let list = controller(&transport, &notifier);

        tokio::join!(list.search("meet"), async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            list.refresh().await;
        });

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].param("search"), Some("meet"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_query_sends_no_filter() {
        let transport = MockTransport::new();
        transport.respond(200, page_body(Vec::new(), 1, false, Some(0)));
        let notifier = RecordingNotifier::new();
        let list = controller(&transport, &notifier);

        list.search("   ").await;

        let requests = transport.requests();
        assert_eq!(requests[0].param("search"), None);
        assert!(list.snapshot().is_empty_result());
    }

    #[tokio::test(start_paused = true)]
    async fn test_observer_sees_loading_then_idle() {
        let transport = MockTransport::new();
        transport.respond(200, page_body(event_rows(1, 1), 1, false, None));
        let notifier = RecordingNotifier::new();
        let list = controller(&transport, &notifier);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        list.set_observer(move |snapshot| sink.borrow_mut().push(snapshot.status));
        list.refresh().await;

        assert_eq!(
            *seen.borrow(),
            vec![LoadStatus::Idle, LoadStatus::Loading, LoadStatus::Idle]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_more_after_failed_search_keeps_loaded_query() {
        let transport = MockTransport::new();
        transport.respond(200, page_body(event_rows(1, 20), 1, true, Some(27)));
        transport.respond(500, json!({ "message": "Search index offline" }));
        transport.respond(200, page_body(event_rows(21, 7), 2, false, Some(27)));
        let notifier = RecordingNotifier::new();
        let list = controller(&transport, &notifier);

        list.refresh().await;
        list.search("gala").await;
        assert_eq!(list.snapshot().status, LoadStatus::Error);

        list.load_more().await;

        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[1].param("search"), Some("gala"));
        assert_eq!(requests[2].param("page"), Some("2"));
        assert_eq!(requests[2].param("search"), None);
        let snapshot = list.snapshot();
        assert_eq!(snapshot.items.len(), 27);
        assert_eq!(snapshot.items[20].id, "21");
        assert_eq!(snapshot.query, "");
        assert_eq!(snapshot.status, LoadStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_during_load_more_drops_late_page() {
        let transport = MockTransport::new();
        transport.respond(200, page_body(event_rows(1, 20), 1, true, Some(40)));
        transport.respond_after(
            Duration::from_millis(500),
            200,
            page_body(event_rows(21, 20), 2, false, Some(40)),
        );
        transport.respond(200, page_body(event_rows(500, 20), 1, true, Some(41)));
        let notifier = RecordingNotifier::new();
        let list = controller(&transport, &notifier);

        list.refresh().await;
        tokio::join!(list.load_more(), async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            list.refresh().await;
        });

        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[1].param("page"), Some("2"));
        assert_eq!(requests[2].param("page"), Some("1"));
        let snapshot = list.snapshot();
        assert_eq!(snapshot.items.len(), 20);
        assert_eq!(snapshot.items[0].id, "500");
        assert!(snapshot.items.iter().all(|event| event.id != "21"));
        assert_eq!(snapshot.pagination.page, 1);
        assert!(snapshot.pagination.has_more);
        assert_eq!(snapshot.status, LoadStatus::Idle);
    }
}
