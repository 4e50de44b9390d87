//! Cross-server messaging service handle.

use cairn_api::messaging::publish::PublishMessage;
use cairn_common::UniverseId;
use cairn_common::http_client::HttpClient;
use serde::Serialize;
use serde_json::Value;

use crate::client::CloudClient;
use crate::error::{Error, Result};

/// Service limits enforced before any request is made.
const MAX_TOPIC_LEN: usize = 80;
const MAX_MESSAGE_LEN: usize = 1024;

/// The messaging service of one universe: publish messages to topics that
/// live game servers subscribe to.
#[derive(Debug, Clone)]
pub struct Messaging<C> {
    client: CloudClient<C>,
    universe_id: UniverseId,
}

impl<C: HttpClient + Clone + Sync> Messaging<C> {
    pub(crate) fn new(client: CloudClient<C>, universe_id: UniverseId) -> Self {
        Self {
            client,
            universe_id,
        }
    }

    /// The universe messages are published into.
    pub fn universe_id(&self) -> UniverseId {
        self.universe_id
    }

    /// Publish a message to a topic.
    ///
    /// String payloads are sent as-is; anything else is JSON-encoded first.
    /// Topics are limited to 80 characters and messages to 1024 characters;
    /// both limits are checked locally and violations return
    /// [`Error::TopicTooLong`]/[`Error::MessageTooLong`] without a request.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, message))
    )]
    pub async fn publish<M: Serialize + Sync>(&self, topic: &str, message: &M) -> Result<()> {
        if topic.len() > MAX_TOPIC_LEN {
            return Err(Error::TopicTooLong { len: topic.len() });
        }

        let text = match serde_json::to_value(message).map_err(cairn_common::EncodeError::from) {
            Ok(Value::String(text)) => text,
            Ok(other) => other.to_string(),
            Err(e) => return Err(Error::Client(e.into())),
        };
        if text.len() > MAX_MESSAGE_LEN {
            return Err(Error::MessageTooLong { len: text.len() });
        }

        let request = PublishMessage::new()
            .universe_id(self.universe_id)
            .topic(topic)
            .message(text)
            .build();
        self.client.send(request).await?.parse()?;
        Ok(())
    }
}
