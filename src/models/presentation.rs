use serde::Serialize;
use serde_json::Value;

use super::OutcomeKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Info,
    Success,
    Warning,
    Error,
    Answer,
    Json,
    Exception,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl Block {
    pub fn text(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: Some(text.into()),
            value: None,
        }
    }

    pub fn json(value: Value) -> Self {
        Self {
            kind: BlockKind::Json,
            text: None,
            value: Some(value),
        }
    }
}

/// What the results area shows, in display order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Presentation {
    pub outcome: OutcomeKind,
    pub blocks: Vec<Block>,
}

#[cfg(test)]
impl Presentation {
    pub fn texts(&self, kind: BlockKind) -> Vec<&str> {
        self.blocks
            .iter()
            .filter(|b| b.kind == kind)
            .filter_map(|b| b.text.as_deref())
            .collect()
    }
}
