use api_rest::{AppState, build_router};
use api_shared::auth::DEFAULT_PASSWORD;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the MMS application
///
/// Starts the REST server with the in-memory report log and the medicine
/// predictor. All state lives in process memory; stopping the server
/// discards the report log and every issued session.
///
/// # Environment Variables
/// - `MMS_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `MMS_PASSWORD`: Shared login password (default: "TEST"; a placeholder,
///   not an authentication system)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If server startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("mms=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("MMS_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let password = std::env::var("MMS_PASSWORD").unwrap_or_else(|_| DEFAULT_PASSWORD.into());

    tracing::info!("++ Starting MMS REST on {}", rest_addr);
    tracing::info!(
        "++ Reference table loaded with {} records",
        mms_core::reference_table().len()
    );

    let app = build_router(AppState::new(password));

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
