use anyhow::Context;
use async_trait::async_trait;
use aws_sdk_bedrockagentruntime::primitives::event_stream::EventReceiver;
use aws_sdk_bedrockagentruntime::types::error::ResponseStreamError;
use aws_sdk_bedrockagentruntime::types::ResponseStream;
use aws_sdk_bedrockagentruntime::Client;
use bytes::Bytes;
use futures::stream;

use super::{AgentRequest, Answerer, ChunkStream};

pub struct BedrockAgent {
    agent_id: String,
    agent_alias_id: String,
    client: Client,
}

impl BedrockAgent {
    pub fn new(sdk_config: &aws_config::SdkConfig, agent_id: String, agent_alias_id: String) -> Self {
        Self {
            agent_id,
            agent_alias_id,
            client: Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl Answerer for BedrockAgent {
    async fn invoke(&self, request: AgentRequest) -> anyhow::Result<ChunkStream> {
        let output = self
            .client
            .invoke_agent()
            .agent_id(&self.agent_id)
            .agent_alias_id(&self.agent_alias_id)
            .session_id(request.session_id.as_str())
            .input_text(request.input_text)
            .enable_trace(request.enable_trace)
            .send()
            .await
            .context("failed to call Bedrock InvokeAgent")?;

        let chunks = stream::try_unfold(output.completion, next_chunk);

        Ok(Box::pin(chunks))
    }
}

type Completion = EventReceiver<ResponseStream, ResponseStreamError>;

/// Pulls events until the next answer chunk.
async fn next_chunk(mut receiver: Completion) -> anyhow::Result<Option<(Bytes, Completion)>> {
    loop {
        let event = receiver
            .recv()
            .await
            .context("failed to read Bedrock response stream")?;

        match event {
            Some(event) => {
                if let Some(bytes) = chunk_bytes(event) {
                    return Ok(Some((bytes, receiver)));
                }
            }
            None => return Ok(None),
        }
    }
}

/// Only chunk events carry answer text; traces and the rest yield `None`.
fn chunk_bytes(event: ResponseStream) -> Option<Bytes> {
    match event {
        ResponseStream::Chunk(part) => Some(
            part.bytes
                .map(|b| Bytes::from(b.into_inner()))
                .unwrap_or_default(),
        ),
        ResponseStream::Trace(_) => {
            tracing::debug!("skipping agent trace event");
            None
        }
        _ => {
            tracing::debug!("skipping non-chunk agent event");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_bedrockagentruntime::primitives::Blob;
    use aws_sdk_bedrockagentruntime::types::{PayloadPart, TracePart};

    use super::*;

    #[test]
    fn chunk_event_yields_its_bytes() {
        let event = ResponseStream::Chunk(
            PayloadPart::builder()
                .bytes(Blob::new("Contract breach".as_bytes()))
                .build(),
        );
        assert_eq!(chunk_bytes(event), Some(Bytes::from_static(b"Contract breach")));
    }

    #[test]
    fn trace_event_is_skipped() {
        let event = ResponseStream::Trace(TracePart::builder().build());
        assert_eq!(chunk_bytes(event), None);
    }

    #[test]
    fn chunk_without_bytes_is_empty() {
        let event = ResponseStream::Chunk(PayloadPart::builder().build());
        assert_eq!(chunk_bytes(event), Some(Bytes::new()));
    }
}
