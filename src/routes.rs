use actix_web::web;
use log::error;

use crate::{
    action::{
        list_batches::{ListBatchesAction, ListBatchesProps, METADATA},
        ActionDescriptor, ActionOutcome,
    },
    api::client::PayTraceApp,
    context::ExecutionContext,
};

pub fn configure<TApp: PayTraceApp>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(&format!("/actions/{}", METADATA.key))
            .route("", web::get().to(describe::<TApp>))
            .route("/run", web::post().to(run::<TApp>)),
    );
}

async fn describe<TApp: PayTraceApp>(
    action: web::Data<ListBatchesAction<TApp>>,
) -> web::Json<ActionDescriptor> {
    web::Json(action.descriptor())
}

async fn run<TApp: PayTraceApp>(
    action: web::Data<ListBatchesAction<TApp>>,
    props: web::Json<ListBatchesProps>,
) -> actix_web::Result<web::Json<ActionOutcome>> {
    let mut ctx = ExecutionContext::new();

    let data = action
        .run(&props.into_inner(), &mut ctx)
        .await
        .map_err(|e| {
            error!(
                "Action run failed. [run_id = {}, key = {}, error = {}]",
                ctx.run_id(),
                action.metadata().key,
                e
            );
            actix_web::error::ErrorInternalServerError(e)
        })?;

    Ok(web::Json(ActionOutcome::new(&ctx, data)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::action::list_batches::tests::{two_batches, unauthorized, MockApp};

    use super::*;

    fn action(app: MockApp) -> web::Data<ListBatchesAction<MockApp>> {
        web::Data::new(ListBatchesAction::new(Arc::new(app)))
    }

    #[actix_web::test]
    async fn given_descriptor_route__when_called__should_return_action_descriptor() {
        let app = test::init_service(
            App::new()
                .app_data(action(MockApp::new(two_batches)))
                .configure(configure::<MockApp>),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/actions/paytrace-list-batches")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["key"], "paytrace-list-batches");
        assert_eq!(body["type"], "action");
        assert_eq!(body["props"].as_array().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn given_date_range__when_run_route_called__should_return_data_with_summary() {
        let app = test::init_service(
            App::new()
                .app_data(action(MockApp::new(two_batches)))
                .configure(configure::<MockApp>),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/actions/paytrace-list-batches/run")
            .set_json(json!({ "startDate": "2023-01-01", "endDate": "2023-01-31" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            json!({
                "$summary": "Successfully retrieved batches",
                "data": [{ "id": "B1" }, { "id": "B2" }]
            })
        );
    }

    #[actix_web::test]
    async fn given_failing_app__when_run_route_called__should_respond_with_server_error() {
        let app = test::init_service(
            App::new()
                .app_data(action(MockApp::new(unauthorized)))
                .configure(configure::<MockApp>),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/actions/paytrace-list-batches/run")
            .set_json(json!({ "startDate": "2023-01-01", "endDate": "2023-01-31" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn given_missing_end_date__when_run_route_called__should_reject_request() {
        let app = test::init_service(
            App::new()
                .app_data(action(MockApp::new(two_batches)))
                .configure(configure::<MockApp>),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/actions/paytrace-list-batches/run")
            .set_json(json!({ "startDate": "2023-01-01" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
