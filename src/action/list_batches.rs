use std::sync::Arc;

use log::info;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    api::{
        client::{ApiClientResult, PayTraceApp},
        endpoint::batches_endpoint::BatchQuery,
        props::{NamedProp, PropDefinition, PropName, APP_SLUG},
    },
    context::{ExecutionContext, SUMMARY_EXPORT},
};

use super::{ActionDescriptor, ActionKind, ActionMetadata};

pub const SUCCESS_SUMMARY: &str = "Successfully retrieved batches";

pub static METADATA: ActionMetadata = ActionMetadata {
    name: "List Batches by Date Range",
    description: "This method can be used to export a set of batch summary details with a provided date range.  This method will return one or more batch summary records. [See docs here](https://developers.paytrace.com/support/home#14000045545)",
    key: "paytrace-list-batches",
    version: "0.0.5",
    kind: ActionKind::Action,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBatchesProps {
    pub start_date: String,
    pub end_date: String,
}

pub struct ListBatchesAction<TApp: PayTraceApp> {
    app: Arc<TApp>,
}

impl<TApp: PayTraceApp> ListBatchesAction<TApp> {
    pub fn new(app: Arc<TApp>) -> Self {
        Self { app }
    }

    pub fn metadata(&self) -> &'static ActionMetadata {
        &METADATA
    }

    /// The app binding followed by the date props, defined by the app itself.
    pub fn props(&self) -> Vec<NamedProp> {
        let mut props = vec![NamedProp::new(APP_SLUG, PropDefinition::app(APP_SLUG))];

        props.extend(
            [PropName::StartDate, PropName::EndDate]
                .into_iter()
                .map(|prop| NamedProp::new(prop.as_str(), self.app.prop_definition(prop))),
        );

        props
    }

    pub fn descriptor(&self) -> ActionDescriptor {
        ActionDescriptor {
            metadata: METADATA.clone(),
            props: self.props(),
        }
    }

    /// Errors from the app are returned as-is and leave no summary behind.
    pub async fn run(
        &self,
        props: &ListBatchesProps,
        ctx: &mut ExecutionContext,
    ) -> ApiClientResult<Value> {
        let query = BatchQuery::new(props.start_date.as_str(), props.end_date.as_str());

        let response = self.app.get_batches(&query, ctx).await?;

        info!(
            "Retrieved batches. [run_id = {}, key = {}]",
            ctx.run_id(),
            METADATA.key
        );
        ctx.export(SUMMARY_EXPORT, SUCCESS_SUMMARY);

        Ok(response)
    }
}
