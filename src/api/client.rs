pub mod reqwest_api_client;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::context::ExecutionContext;

use super::{
    endpoint::batches_endpoint::BatchQuery,
    props::{paytrace_prop_definition, PropDefinition, PropName},
};

pub type ApiClientResult<T> = Result<T, ApiClientError>;

#[derive(Error, Debug)]
pub enum ApiClientError {
    #[error("Request failed: {0:?}")]
    Request(#[from] reqwest::Error),

    #[error("PayTrace responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to deserialize JSON from response: {source}\nRaw response: {raw}")]
    Deserialize {
        #[source]
        source: serde_json::Error,
        raw: String,
    },

    #[error("Other error: {0:?}")]
    Other(#[from] anyhow::Error),
}

/// The PayTrace app as actions see it: shared prop definitions plus API calls.
#[async_trait]
pub trait PayTraceApp: Send + Sync + 'static {
    fn prop_definition(&self, prop: PropName) -> PropDefinition {
        paytrace_prop_definition(prop)
    }

    async fn get_batches(&self, query: &BatchQuery, ctx: &ExecutionContext)
        -> ApiClientResult<Value>;
}
