use qrmedia_core::Config;

// Use mimalloc as the global allocator for better performance and lower
// fragmentation, especially when running on musl-based systems inside containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration (fails fast on missing provider credentials)
    let config = Config::from_env()?;

    // Initialize the application (telemetry, storage, routes)
    let (_state, router) = qrmedia_api::setup::initialize_app(config.clone())?;

    // Start the server
    qrmedia_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
