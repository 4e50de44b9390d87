use std::collections::VecDeque;
use std::sync::Arc;

use cairn::api::ordered::update_entry::UpdateOrderedEntry;
use cairn::ordered::EntrySelector;
use cairn::{CloudClient, UniverseId};
use cairn_common::http_client::HttpClient;
use http::{Response as HttpResponse, StatusCode};
use serde_json::{Value, json};
use tokio::sync::Mutex;

#[derive(Clone, Default)]
struct MockClient {
    queue: Arc<Mutex<VecDeque<HttpResponse<Vec<u8>>>>>,
    log: Arc<Mutex<Vec<http::Request<Vec<u8>>>>>,
}

impl MockClient {
    async fn push_json(&self, body: Value) {
        self.queue.lock().await.push_back(
            HttpResponse::builder()
                .status(StatusCode::OK)
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(&body).unwrap())
                .unwrap(),
        );
    }
    async fn push_empty(&self, status: StatusCode) {
        self.queue
            .lock()
            .await
            .push_back(HttpResponse::builder().status(status).body(Vec::new()).unwrap());
    }
    async fn take_log(&self) -> Vec<http::Request<Vec<u8>>> {
        std::mem::take(&mut *self.log.lock().await)
    }
}

impl HttpClient for MockClient {
    type Error = std::convert::Infallible;

    fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> impl core::future::Future<
        Output = core::result::Result<http::Response<Vec<u8>>, Self::Error>,
    > + Send {
        let log = self.log.clone();
        let queue = self.queue.clone();
        async move {
            log.lock().await.push(request);
            Ok(queue.lock().await.pop_front().expect("no queued response"))
        }
    }
}

fn client(mock: &MockClient) -> CloudClient<MockClient> {
    CloudClient::with_transport(mock.clone(), "test-key")
}

fn entry_json(id: &str, value: i64) -> Value {
    json!({
        "path": format!("universes/9/orderedDataStores/scores/scopes/global/entries/{id}"),
        "id": id,
        "value": value
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn create_posts_value_body() {
    let mock = MockClient::default();
    mock.push_json(entry_json("champ", 100)).await;

    let store = client(&mock).ordered_data_store(UniverseId(9), "scores");
    let entry = store.create("champ", 100).await.unwrap();

    assert_eq!(entry.id(), "champ");
    assert_eq!(entry.value(), 100);

    let log = mock.take_log().await;
    let request = &log[0];
    assert_eq!(request.method(), http::Method::POST);
    assert_eq!(
        request.uri().to_string(),
        "https://apis.roblox.com/ordered-data-stores/v1/universes/9/orderedDataStores/scores/scopes/global/entries?id=champ"
    );
    assert_eq!(request.body().as_slice(), br#"{"value":100}"#);
}

#[tokio::test(flavor = "multi_thread")]
async fn increment_through_the_entry_handle() {
    let mock = MockClient::default();
    mock.push_json(entry_json("champ", 100)).await;
    mock.push_json(entry_json("champ", 125)).await;

    let store = client(&mock).ordered_data_store(UniverseId(9), "scores");
    let entry = store.get("champ").await.unwrap();
    let bumped = entry.increment(25).await.unwrap();

    // The original handle is an immutable snapshot.
    assert_eq!(entry.value(), 100);
    assert_eq!(bumped.value(), 125);

    let log = mock.take_log().await;
    // The increment addresses the entry by its service-reported path.
    let uri = log[1].uri().to_string();
    assert_eq!(
        uri,
        "https://apis.roblox.com/ordered-data-stores/v1/universes/9/orderedDataStores/scores/scopes/global/entries/champ:increment"
    );
    assert_eq!(log[1].body().as_slice(), br#"{"amount":25}"#);
}

#[tokio::test(flavor = "multi_thread")]
async fn selectors_resolve_ids_and_handles_the_same_way() {
    let mock = MockClient::default();
    mock.push_json(entry_json("user 1", 40)).await;

    let store = client(&mock).ordered_data_store(UniverseId(9), "scores");
    // Ids with separator characters are encoded into a single path segment.
    store.get("user 1").await.unwrap();

    let uri = mock.take_log().await[0].uri().to_string();
    assert!(uri.ends_with("/scopes/global/entries/user%201"), "uri was: {uri}");

    let selector: EntrySelector<'_> = "plain".into();
    assert!(matches!(selector, EntrySelector::Id("plain")));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_through_the_entry_handle() {
    let mock = MockClient::default();
    mock.push_json(entry_json("champ", 100)).await;
    mock.push_empty(StatusCode::NO_CONTENT).await;

    let store = client(&mock).ordered_data_store(UniverseId(9), "scores");
    let entry = store.get("champ").await.unwrap();
    entry.delete().await.unwrap();

    let log = mock.take_log().await;
    assert_eq!(log[1].method(), http::Method::DELETE);
    assert!(log[1].uri().path().ends_with("/entries/champ"));
}

#[tokio::test(flavor = "multi_thread")]
async fn upsert_via_raw_request() {
    let mock = MockClient::default();
    mock.push_json(entry_json("newcomer", 10)).await;

    let cloud = client(&mock);
    let request = UpdateOrderedEntry::new()
        .entry_path(cairn::api::ordered::entry_path(
            UniverseId(9),
            "scores",
            "global",
            "newcomer",
        ))
        .value(10)
        .allow_missing(true)
        .build();
    let entry = cloud.send(request).await.unwrap().parse().unwrap();
    assert_eq!(entry.value, 10);

    let log = mock.take_log().await;
    assert_eq!(log[0].method(), http::Method::PATCH);
    let uri = log[0].uri().to_string();
    assert!(uri.contains("allow_missing=true"), "uri was: {uri}");
    assert_eq!(log[0].body().as_slice(), br#"{"value":10}"#);
}

#[tokio::test(flavor = "multi_thread")]
async fn scoped_store_paths_include_the_scope() {
    let mock = MockClient::default();
    mock.push_json(entry_json("champ", 1)).await;

    let store =
        client(&mock).ordered_data_store_in_scope(UniverseId(9), "scores", "season-3");
    store.get("champ").await.unwrap();

    let uri = mock.take_log().await[0].uri().to_string();
    assert!(uri.contains("/scopes/season-3/entries/champ"), "uri was: {uri}");
}
