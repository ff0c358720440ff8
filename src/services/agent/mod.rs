pub mod bedrock;

use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;
use futures::StreamExt;
use rand::Rng;

use crate::errors::AppError;

/// Ordered, finite, single-pass sequence of answer fragments.
pub type ChunkStream = BoxStream<'static, anyhow::Result<Bytes>>;

/// Opaque token scoping one agent conversation. 128 random bits, hex encoded.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        let bytes: [u8; 16] = rand::thread_rng().gen();
        Self(hex::encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug)]
pub struct AgentRequest {
    pub session_id: SessionId,
    pub input_text: String,
    pub enable_trace: bool,
}

#[async_trait]
pub trait Answerer: Send + Sync {
    async fn invoke(&self, request: AgentRequest) -> anyhow::Result<ChunkStream>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AgentAnswer {
    pub text: String,
    pub chunks: usize,
}

impl AgentAnswer {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Asks the agent a single question in a fresh session and waits for the
/// whole streamed answer.
pub async fn ask(answerer: &dyn Answerer, question: &str) -> Result<AgentAnswer, AppError> {
    let session_id = SessionId::generate();
    tracing::info!(session_id = %session_id, "asking agent");

    let stream = answerer
        .invoke(AgentRequest {
            session_id,
            input_text: question.to_string(),
            enable_trace: true,
        })
        .await
        .map_err(AppError::Transport)?;

    let answer = accumulate(stream).await?;
    tracing::info!(chunks = answer.chunks, len = answer.text.len(), "agent answered");
    Ok(answer)
}

/// Folds the chunk stream into one string in arrival order. Each chunk must
/// be valid UTF-8 on its own.
pub async fn accumulate(mut stream: ChunkStream) -> Result<AgentAnswer, AppError> {
    let mut answer = AgentAnswer::default();

    while let Some(chunk) = stream.next().await {
        let bytes = chunk.map_err(AppError::Transport)?;
        let text = String::from_utf8(bytes.to_vec())?;
        answer.text.push_str(&text);
        answer.chunks += 1;
    }

    Ok(answer)
}
