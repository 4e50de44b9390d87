use std::collections::VecDeque;
use std::sync::Arc;

use cairn::{ApiError, CloudClient, Error, UniverseId};
use cairn_common::http_client::HttpClient;
use http::{Response as HttpResponse, StatusCode};
use serde_json::{Value, json};
use tokio::sync::Mutex;

#[derive(Clone, Debug, Default)]
struct MockClient {
    // Queue of HTTP responses to pop for each send_http call
    queue: Arc<Mutex<VecDeque<HttpResponse<Vec<u8>>>>>,
    // Capture requests for assertions
    log: Arc<Mutex<Vec<http::Request<Vec<u8>>>>>,
}

impl MockClient {
    async fn push(&self, resp: HttpResponse<Vec<u8>>) {
        self.queue.lock().await.push_back(resp);
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

fn entry_response(body: Value, version: &str) -> HttpResponse<Vec<u8>> {
    HttpResponse::builder()
        .status(StatusCode::OK)
        .header(http::header::CONTENT_TYPE, "application/json")
        .header("roblox-entry-created-time", "2024-01-01T00:00:00Z")
        .header("roblox-entry-version-created-time", "2024-01-02T00:00:00Z")
        .header("roblox-entry-version", version)
        .header("roblox-entry-attributes", r#"{"source":"test"}"#)
        .header("roblox-entry-userids", "[123]")
        .body(serde_json::to_vec(&body).unwrap())
        .unwrap()
}

fn write_ok_response(version: &str) -> HttpResponse<Vec<u8>> {
    HttpResponse::builder()
        .status(StatusCode::OK)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(
            serde_json::to_vec(&json!({
                "version": version,
                "deleted": false,
                "contentLength": 11,
                "createdTime": "2024-01-03T00:00:00Z",
                "objectCreatedTime": "2024-01-01T00:00:00Z"
            }))
            .unwrap(),
        )
        .unwrap()
}

fn client(mock: &MockClient) -> CloudClient<MockClient> {
    CloudClient::with_transport(mock.clone(), "test-key")
}

#[tokio::test(flavor = "multi_thread")]
async fn update_merges_and_asserts_held_version() {
    let mock = MockClient::default();
    mock.push(entry_response(json!({"count": 0}), "v1")).await;
    mock.push(write_ok_response("v2")).await;

    let store = client(&mock).data_stores(UniverseId(77)).store("counters");
    let entry = store.get("hits").await.unwrap().expect("entry exists");

    assert_eq!(entry.value(), &json!({"count": 0}));
    assert_eq!(entry.version(), "v1");
    assert_eq!(entry.user_ids(), &[123]);

    let updated = entry.update(&json!({"count": 5})).await.unwrap();

    // The snapshot we wrote from is untouched; the new one holds the merge
    // result and the new version token.
    assert_eq!(entry.value(), &json!({"count": 0}));
    assert_eq!(updated.value(), &json!({"count": 5}));
    assert_eq!(updated.version(), "v2");

    let log = mock.take_log().await;
    assert_eq!(log.len(), 2);

    let get = &log[0];
    assert_eq!(get.method(), http::Method::GET);
    assert_eq!(
        get.uri().to_string(),
        "https://apis.roblox.com/datastores/v1/universes/77/standard-datastores/datastore/entries/entry?datastoreName=counters&entryKey=hits&scope=global"
    );
    assert_eq!(get.headers().get("x-api-key").unwrap(), "test-key");

    let write = &log[1];
    assert_eq!(write.method(), http::Method::POST);
    let query = write.uri().query().unwrap();
    assert!(query.contains("matchVersion=v1"), "query was: {query}");
    assert_eq!(write.body().as_slice(), br#"{"count":5}"#);
    // base64(md5(r#"{"count":5}"#))
    assert_eq!(
        write.headers().get("content-md5").unwrap(),
        "my5PTIN7QJCs6zsBPd1Vpw=="
    );
    // Held metadata is resubmitted as captured at fetch time.
    assert_eq!(
        write.headers().get("roblox-entry-attributes").unwrap(),
        r#"{"source":"test"}"#
    );
    assert_eq!(write.headers().get("roblox-entry-userids").unwrap(), "[123]");
}

#[tokio::test(flavor = "multi_thread")]
async fn set_merges_without_version_condition() {
    let mock = MockClient::default();
    mock.push(entry_response(
        json!({"coins": 10, "inventory": ["sword"], "profile": {"color": "red", "level": 3}}),
        "v7",
    ))
    .await;
    mock.push(write_ok_response("v8")).await;

    let store = client(&mock).data_stores(UniverseId(77)).store("players");
    let entry = store.get("player_1").await.unwrap().unwrap();
    let updated = entry.set(&json!({"profile": {"level": 4}})).await.unwrap();

    assert_eq!(
        updated.value(),
        &json!({"coins": 10, "inventory": ["sword"], "profile": {"color": "red", "level": 4}})
    );

    let log = mock.take_log().await;
    let write = &log[1];
    assert!(!write.uri().to_string().contains("matchVersion"));

    let body: Value = serde_json::from_slice(write.body()).unwrap();
    assert_eq!(
        body,
        json!({"coins": 10, "inventory": ["sword"], "profile": {"color": "red", "level": 4}})
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn deleted_lineage_short_circuits_writes() {
    let mock = MockClient::default();
    mock.push(entry_response(json!({"count": 1}), "v1")).await;
    mock.push(write_ok_response("v2")).await;
    mock.push(
        HttpResponse::builder()
            .status(StatusCode::NO_CONTENT)
            .body(Vec::new())
            .unwrap(),
    )
    .await;

    let store = client(&mock).data_stores(UniverseId(77)).store("counters");
    let entry = store.get("hits").await.unwrap().unwrap();
    let newer = entry.set(&json!({"count": 2})).await.unwrap();

    newer.delete().await.unwrap();
    assert!(newer.is_deleted());
    // The older snapshot belongs to the same lineage.
    assert!(entry.is_deleted());
    mock.take_log().await;

    // No request must go out for either snapshot.
    let err = entry.set(&json!({"count": 3})).await.unwrap_err();
    assert!(matches!(err, Error::EntryDeleted { ref key } if key == "hits"));
    let err = newer.update(&json!({"count": 3})).await.unwrap_err();
    assert!(matches!(err, Error::EntryDeleted { .. }));
    assert!(mock.take_log().await.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn tombstoned_key_reads_as_none() {
    let mock = MockClient::default();
    mock.push(
        HttpResponse::builder()
            .status(StatusCode::NO_CONTENT)
            .body(Vec::new())
            .unwrap(),
    )
    .await;

    let store = client(&mock).data_stores(UniverseId(77)).store("counters");
    assert!(store.get("gone").await.unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn version_conflict_is_distinguishable() {
    let mock = MockClient::default();
    mock.push(entry_response(json!({"count": 0}), "v1")).await;
    mock.push(
        HttpResponse::builder()
            .status(StatusCode::PRECONDITION_FAILED)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(br#"{"error":"PRECONDITION_FAILED","message":"version mismatch"}"#.to_vec())
            .unwrap(),
    )
    .await;

    let store = client(&mock).data_stores(UniverseId(77)).store("counters");
    let entry = store.get("hits").await.unwrap().unwrap();
    let err = entry.update(&json!({"count": 5})).await.unwrap_err();

    match err.as_api() {
        Some(ApiError::PreconditionFailed(body)) => {
            assert_eq!(body.message.as_deref(), Some("version mismatch"));
        }
        other => panic!("expected precondition failure, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn store_level_set_builds_a_fresh_snapshot() {
    let mock = MockClient::default();
    mock.push(write_ok_response("v1")).await;

    let store = client(&mock).data_stores(UniverseId(77)).store("counters");
    let entry = store
        .set("hits", json!({"count": 10}), Default::default())
        .await
        .unwrap();

    assert_eq!(entry.value(), &json!({"count": 10}));
    assert_eq!(entry.version(), "v1");
    assert!(!entry.is_deleted());

    let log = mock.take_log().await;
    // Cleared metadata is still transmitted explicitly.
    assert_eq!(log[0].headers().get("roblox-entry-attributes").unwrap(), "{}");
    assert_eq!(log[0].headers().get("roblox-entry-userids").unwrap(), "[]");
}
