use std::rc::Rc;

use futures::{
    executor::{block_on, LocalPool},
    task::LocalSpawnExt,
};
use portal_host::{
    HttpMethod, HttpResponse, MemoryPrefsStore, PortalConfig, PortalServices, RequestError,
    ScriptedHttpClient, StaticCsrfToken,
};
use portal_runtime::notifications::{render, NotificationSync, PanelStore, EMPTY_PLACEHOLDER};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

const FEED: &str = "/applications/api/notifications/";
const READ_ALL: &str = "/applications/api/notifications/read-all/";

struct Harness {
    http: ScriptedHttpClient,
    store: PanelStore,
    sync: NotificationSync,
}

fn harness(csrf: StaticCsrfToken) -> Harness {
    let http = ScriptedHttpClient::default();
    let store = PanelStore::default();
    let services = PortalServices::new(
        Rc::new(http.clone()),
        Rc::new(csrf),
        Rc::new(MemoryPrefsStore::default()),
        PortalConfig::default(),
    );
    let sync = NotificationSync::new(services, store.dispatcher());
    Harness { http, store, sync }
}

fn feed(count: u32, ids: &[u64]) -> HttpResponse {
    let notifications: Vec<Value> = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "message": format!("Your application #{id} changed status"),
                "created_at": "Mar 04, 2025 10:15"
            })
        })
        .collect();
    HttpResponse::json(&json!({ "count": count, "notifications": notifications }))
}

fn rendered_ids(store: &PanelStore) -> Vec<u64> {
    store.snapshot().feed.items.iter().map(|n| n.id).collect()
}

#[test]
fn truncated_page_shows_full_count_and_single_item() {
    let h = harness(StaticCsrfToken::new("tok"));
    h.http.push_response(HttpMethod::Get, FEED, feed(3, &[1]));

    block_on(h.sync.refresh()).expect("refresh");

    let view = render(&h.store.snapshot().feed);
    assert_eq!(view.badge.as_deref(), Some("3"));
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].id, 1);
    assert!(!view.show_placeholder);
}

#[test]
fn badge_clamps_large_counts() {
    let h = harness(StaticCsrfToken::new("tok"));
    h.http.push_response(HttpMethod::Get, FEED, feed(140, &[1, 2]));

    block_on(h.sync.refresh()).expect("refresh");

    assert_eq!(
        render(&h.store.snapshot().feed).badge.as_deref(),
        Some("99+")
    );
}

#[test]
fn acknowledge_all_refreshes_to_empty_state() {
    let h = harness(StaticCsrfToken::new("tok"));
    h.http.push_response(HttpMethod::Get, FEED, feed(2, &[1, 2]));
    h.http
        .push_response(HttpMethod::Post, READ_ALL, HttpResponse::new(200, "{}"));
    h.http.push_response(HttpMethod::Get, FEED, feed(0, &[]));

    block_on(h.sync.refresh()).expect("initial refresh");
    block_on(h.sync.acknowledge_all()).expect("acknowledge all");

    let view = render(&h.store.snapshot().feed);
    assert_eq!(view.badge, None);
    assert!(view.show_placeholder);
    assert_eq!(EMPTY_PLACEHOLDER, "No new notifications");
    assert_eq!(h.http.request_count(HttpMethod::Get, FEED), 2);
}

#[test]
fn rejected_acknowledge_keeps_item_in_place() {
    let h = harness(StaticCsrfToken::new("tok"));
    h.http.push_response(HttpMethod::Get, FEED, feed(2, &[42, 43]));
    h.http.push_response(
        HttpMethod::Post,
        "/applications/api/notifications/42/read/",
        HttpResponse::new(500, ""),
    );

    block_on(h.sync.refresh()).expect("refresh");
    let before = h.store.snapshot().feed;
    let err = block_on(h.sync.acknowledge(42)).expect_err("rejected");

    assert_eq!(err, RequestError::Rejected { status: 500 });
    assert_eq!(h.store.snapshot().feed, before);
    assert_eq!(rendered_ids(&h.store), vec![42, 43]);
    assert_eq!(h.http.request_count(HttpMethod::Get, FEED), 1);
}

#[test]
fn acknowledge_removes_exactly_one_item_before_reconciling() {
    let h = harness(StaticCsrfToken::new("tok"));
    h.http.push_response(HttpMethod::Get, FEED, feed(3, &[1, 2, 3]));
    h.http.push_response(
        HttpMethod::Post,
        "/applications/api/notifications/2/read/",
        HttpResponse::new(200, "{}"),
    );
    let reconcile = h.http.push_deferred(HttpMethod::Get, FEED);

    block_on(h.sync.refresh()).expect("refresh");

    let mut pool = LocalPool::new();
    let sync = h.sync.clone();
    pool.spawner()
        .spawn_local(async move {
            let _ = sync.acknowledge(2).await;
        })
        .expect("spawn");
    pool.run_until_stalled();

    assert_eq!(rendered_ids(&h.store), vec![1, 3]);
    assert_eq!(h.store.snapshot().feed.count, 3);

    reconcile.respond(feed(2, &[1, 3]));
    pool.run_until_stalled();

    assert_eq!(h.store.snapshot().feed.count, 2);
}

#[test]
fn state_changing_requests_echo_decoded_csrf_cookie() {
    let cookie_header = "sessionid=abc; csrftoken=a%2Bb%3D%3D; theme=dark";
    let token = portal_host::cookie_value(cookie_header, "csrftoken");
    assert_eq!(token.as_deref(), Some("a+b=="));

    let h = harness(StaticCsrfToken(token));
    h.http
        .push_response(HttpMethod::Post, READ_ALL, HttpResponse::new(200, "{}"));
    h.http.push_response(HttpMethod::Get, FEED, feed(0, &[]));

    block_on(h.sync.acknowledge_all()).expect("acknowledge all");

    let sent = h.http.requests();
    assert_eq!(sent[0].method, HttpMethod::Post);
    assert_eq!(sent[0].header("X-CSRFToken"), Some("a+b=="));
    assert_eq!(sent[1].header("X-CSRFToken"), None);
}

#[test]
fn missing_csrf_cookie_still_sends_request_without_header() {
    let h = harness(StaticCsrfToken::default());
    h.http
        .push_response(HttpMethod::Post, READ_ALL, HttpResponse::new(403, ""));

    let err = block_on(h.sync.acknowledge_all()).expect_err("forbidden");

    assert_eq!(err, RequestError::Rejected { status: 403 });
    assert_eq!(h.http.requests()[0].header("X-CSRFToken"), None);
}

#[test]
fn failed_refresh_keeps_last_known_good_feed() {
    let h = harness(StaticCsrfToken::new("tok"));
    h.http.push_response(HttpMethod::Get, FEED, feed(1, &[7]));
    h.http.push_failure(HttpMethod::Get, FEED, "network down");
    h.http
        .push_response(HttpMethod::Get, FEED, HttpResponse::new(502, "bad gateway"));

    block_on(h.sync.refresh()).expect("refresh");
    let good = h.store.snapshot().feed;
    assert!(matches!(
        block_on(h.sync.refresh()),
        Err(RequestError::Transport(_))
    ));
    assert!(matches!(
        block_on(h.sync.refresh()),
        Err(RequestError::Rejected { status: 502 })
    ));

    let state = h.store.snapshot();
    assert_eq!(state.feed, good);
    assert_eq!(state.diagnostics.consecutive_failures, 2);
}

#[test]
fn repeated_identical_refresh_renders_the_same_feed() {
    let h = harness(StaticCsrfToken::new("tok"));
    h.http.push_response(HttpMethod::Get, FEED, feed(3, &[1]));
    h.http.push_response(HttpMethod::Get, FEED, feed(3, &[1]));

    block_on(h.sync.refresh()).expect("first refresh");
    let first = render(&h.store.snapshot().feed);
    block_on(h.sync.refresh()).expect("second refresh");
    let second = render(&h.store.snapshot().feed);

    assert_eq!(second, first);
    assert_eq!(second.badge.as_deref(), Some("3"));
    assert_eq!(rendered_ids(&h.store), vec![1]);
}

#[test]
fn unreachable_acknowledge_leaves_feed_and_skips_reconcile() {
    let h = harness(StaticCsrfToken::new("tok"));
    h.http.push_response(HttpMethod::Get, FEED, feed(2, &[42, 43]));
    h.http.push_failure(
        HttpMethod::Post,
        "/applications/api/notifications/42/read/",
        "connection reset",
    );
    h.http.push_failure(HttpMethod::Post, READ_ALL, "connection reset");

    block_on(h.sync.refresh()).expect("refresh");
    let before = h.store.snapshot().feed;

    assert!(matches!(
        block_on(h.sync.acknowledge(42)),
        Err(RequestError::Transport(_))
    ));
    assert!(matches!(
        block_on(h.sync.acknowledge_all()),
        Err(RequestError::Transport(_))
    ));

    let state = h.store.snapshot();
    assert_eq!(state.feed, before);
    assert_eq!(rendered_ids(&h.store), vec![42, 43]);
    assert_eq!(state.diagnostics.consecutive_failures, 2);
    assert_eq!(h.http.request_count(HttpMethod::Get, FEED), 1);
}

#[test]
fn overlapping_refreshes_apply_last_response_to_arrive() {
    let h = harness(StaticCsrfToken::new("tok"));
    let first = h.http.push_deferred(HttpMethod::Get, FEED);
    let second = h.http.push_deferred(HttpMethod::Get, FEED);

    let mut pool = LocalPool::new();
    for _ in 0..2 {
        let sync = h.sync.clone();
        pool.spawner()
            .spawn_local(async move {
                let _ = sync.refresh().await;
            })
            .expect("spawn");
    }
    pool.run_until_stalled();
    assert_eq!(h.http.request_count(HttpMethod::Get, FEED), 2);

    second.respond(feed(5, &[10, 11]));
    pool.run_until_stalled();
    assert_eq!(h.store.snapshot().feed.count, 5);

    first.respond(feed(1, &[10]));
    pool.run_until_stalled();

    let state = h.store.snapshot();
    assert_eq!(state.feed.count, 1);
    assert_eq!(rendered_ids(&h.store), vec![10]);
}
