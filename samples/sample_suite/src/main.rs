mod scenarios;

use bookmark_service_client::config::load_settings;
use bookmark_service_client::context::ServiceContext;

#[tokio::main]
async fn main() -> Result<(), String> {
    let settings = load_settings().map_err(|e| e.to_string())?;

    let (context, telemetry_worker) =
        ServiceContext::start(settings, Some("sample-suite")).map_err(|e| e.to_string())?;

    let client = context.bookmark_client().await.map_err(|e| e.to_string())?;

    scenarios::bookmarks::run(&client).await?;
    scenarios::telemetry::run(&context);

    drop(client);
    drop(context);
    telemetry_worker.await.map_err(|e| e.to_string())?;

    Ok(())
}
