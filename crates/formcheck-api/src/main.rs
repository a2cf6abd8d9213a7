use formcheck_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    formcheck_api::telemetry::init_tracing();
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    let router = formcheck_api::routes::router(config.clone());

    // Start the server
    formcheck_api::server::start_server(&config, router).await?;

    Ok(())
}
