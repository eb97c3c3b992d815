use std::{env, net::SocketAddr};

use qrcode_api::{app::env::Envy, router, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.unwrap_or(3000);
    tracing::info!(
        max_width = envy.qr_max_width,
        logo_fetch_timeout_ms = envy.logo_fetch_timeout_ms,
        "render limits"
    );

    let state = AppState::new(envy).expect("failed to build http client");
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("server error");
}
