use greenband::api::create_router;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = std::env::var("GREENBAND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    let app = create_router();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind port");

    info!("greenband NDVI API listening on http://{}", addr);
    info!("endpoints: GET / | POST /compute-ndvi | POST /compute-ndvi-json");

    axum::serve(listener, app).await.expect("Server error");
}
