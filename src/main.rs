use std::sync::Arc;

use action::list_batches::ListBatchesAction;
use actix_web::{web, App, HttpServer};
use api::client::reqwest_api_client::ReqwestApiClient;
use log::info;
use settings::Settings;

mod action;
mod api;
mod context;
mod routes;
mod settings;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let settings = Settings::new()?;
    let target_port = settings.api.target_port;
    let api_client = Arc::new(ReqwestApiClient::new(&settings.paytrace)?);

    let action = ListBatchesAction::new(api_client);
    info!(
        "Serving action. [key = {}, version = {}, port = {}]",
        action.metadata().key,
        action.metadata().version,
        target_port
    );
    let action_data = web::Data::new(action);

    HttpServer::new(move || {
        App::new()
            .app_data(action_data.clone())
            .configure(routes::configure::<ReqwestApiClient>)
    })
    .bind(("0.0.0.0", target_port))?
    .run()
    .await?;

    Ok(())
}
