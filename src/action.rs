pub mod list_batches;

use serde::Serialize;
use serde_json::Value;

use crate::{api::props::NamedProp, context::ExecutionContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Action,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub key: &'static str,
    pub version: &'static str,
    #[serde(rename = "type")]
    pub kind: ActionKind,
}

/// What the host shows for an action: its metadata and the props it takes.
#[derive(Debug, Clone, Serialize)]
pub struct ActionDescriptor {
    #[serde(flatten)]
    pub metadata: ActionMetadata,
    pub props: Vec<NamedProp>,
}

/// Result of a run together with the summary it recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionOutcome {
    #[serde(rename = "$summary")]
    pub summary: Option<String>,
    pub data: Value,
}

impl ActionOutcome {
    pub fn new(ctx: &ExecutionContext, data: Value) -> Self {
        Self {
            summary: ctx.summary().map(String::from),
            data,
        }
    }
}
