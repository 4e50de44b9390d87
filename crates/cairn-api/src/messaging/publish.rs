use cairn_common::{ApiMethod, ApiRequest, DecodeError, EncodeError, UniverseId};
use serde::Serialize;
use smol_str::SmolStr;

use crate::path_segment;

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

/// Publishes a message to a topic's live subscribers.
///
/// The service enforces an 80-character topic limit and a 1 KB message
/// limit; the high-level wrapper validates both before building this
/// request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, bon::Builder)]
#[builder(start_fn = new)]
pub struct PublishMessage {
    #[serde(skip)]
    pub universe_id: UniverseId,
    /// Topic to publish to
    #[serde(skip)]
    #[builder(into)]
    pub topic: SmolStr,
    /// Message text; non-string payloads are JSON-encoded by the caller
    #[serde(skip)]
    #[builder(into)]
    pub message: String,
}

impl ApiRequest for PublishMessage {
    const METHOD: ApiMethod = ApiMethod::Post("application/json");
    type Output = ();

    fn path(&self) -> String {
        format!(
            "/messaging-service/v1/universes/{}/topics/{}",
            self.universe_id,
            path_segment(&self.topic)
        )
    }

    fn encode_body(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(&MessageBody {
            message: &self.message,
        })?)
    }

    fn decode_output(_buffer: &[u8]) -> Result<Self::Output, DecodeError> {
        Ok(())
    }
}
