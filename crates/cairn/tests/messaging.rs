use std::collections::VecDeque;
use std::sync::Arc;

use cairn::{CloudClient, Error, UniverseId};
use cairn_common::http_client::HttpClient;
use http::{Response as HttpResponse, StatusCode};
use serde::Serialize;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
struct MockClient {
    queue: Arc<Mutex<VecDeque<HttpResponse<Vec<u8>>>>>,
    log: Arc<Mutex<Vec<http::Request<Vec<u8>>>>>,
}

impl MockClient {
    async fn push_ok(&self) {
        self.queue.lock().await.push_back(
            HttpResponse::builder()
                .status(StatusCode::OK)
                .body(b"{}".to_vec())
                .unwrap(),
        );
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

fn messaging(mock: &MockClient) -> cairn::Messaging<MockClient> {
    CloudClient::with_transport(mock.clone(), "test-key").messaging(UniverseId(5))
}

#[tokio::test(flavor = "multi_thread")]
async fn publish_sends_string_payloads_verbatim() {
    let mock = MockClient::default();
    mock.push_ok().await;

    messaging(&mock).publish("server-restart", &"in 5 minutes").await.unwrap();

    let log = mock.take_log().await;
    let request = &log[0];
    assert_eq!(request.method(), http::Method::POST);
    assert_eq!(
        request.uri().to_string(),
        "https://apis.roblox.com/messaging-service/v1/universes/5/topics/server-restart"
    );
    assert_eq!(request.headers().get("content-type").unwrap(), "application/json");
    assert_eq!(request.body().as_slice(), br#"{"message":"in 5 minutes"}"#);
}

#[tokio::test(flavor = "multi_thread")]
async fn publish_encodes_structured_payloads() {
    #[derive(Serialize)]
    struct Announcement {
        kind: &'static str,
        minutes: u32,
    }

    let mock = MockClient::default();
    mock.push_ok().await;

    messaging(&mock)
        .publish("announcements", &Announcement { kind: "restart", minutes: 5 })
        .await
        .unwrap();

    let log = mock.take_log().await;
    assert_eq!(
        log[0].body().as_slice(),
        br#"{"message":"{\"kind\":\"restart\",\"minutes\":5}"}"#
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn limits_are_enforced_before_any_request() {
    let mock = MockClient::default();
    let service = messaging(&mock);

    let long_topic = "t".repeat(81);
    let err = service.publish(&long_topic, &"hi").await.unwrap_err();
    assert!(matches!(err, Error::TopicTooLong { len: 81 }));

    let long_message = "m".repeat(1025);
    let err = service.publish("ok-topic", &long_message).await.unwrap_err();
    assert!(matches!(err, Error::MessageTooLong { len: 1025 }));

    // Nothing was sent; nothing was queued either.
    assert!(mock.take_log().await.is_empty());
}
