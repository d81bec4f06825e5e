use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::Url;
use serde_json::Value;

use crate::{
    api::endpoint::batches_endpoint::BatchQuery, context::ExecutionContext,
    settings::PayTraceSettings,
};

use super::{ApiClientError, ApiClientResult, PayTraceApp};

pub struct ReqwestApiClient {
    batches_url: String,
    access_token: String,
    pub client: reqwest::Client,
}

impl ReqwestApiClient {
    pub fn new(settings: &PayTraceSettings) -> anyhow::Result<Self> {
        let base_url = Url::parse(&settings.base_url)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms))
            .build()?;

        Ok(Self {
            batches_url: base_url.join(&settings.batches_path)?.to_string(),
            access_token: settings.access_token.clone(),
            client,
        })
    }
}

#[async_trait]
impl PayTraceApp for ReqwestApiClient {
    async fn get_batches(
        &self,
        query: &BatchQuery,
        ctx: &ExecutionContext,
    ) -> ApiClientResult<Value> {
        debug!(
            "Requesting batches. [run_id = {}, start_date = {}, end_date = {}]",
            ctx.run_id(),
            query.start_date,
            query.end_date
        );

        let response = self
            .client
            .post(&self.batches_url)
            .bearer_auth(&self.access_token)
            .json(query)
            .send()
            .await?;

        let status = response.status();
        let result_string = response.text().await?;

        if !status.is_success() {
            error!(
                "PayTrace rejected batch request. [run_id = {}, status = {}]",
                ctx.run_id(),
                status
            );
            return Err(ApiClientError::Status {
                status: status.as_u16(),
                body: result_string,
            });
        }

        match serde_json::from_str::<Value>(&result_string) {
            Ok(parsed) => Ok(parsed),
            Err(e) => Err(ApiClientError::Deserialize {
                source: e,
                raw: result_string,
            }),
        }
    }
}
