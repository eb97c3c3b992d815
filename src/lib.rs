use std::{sync::Arc, time::Duration};

#[macro_use]
extern crate lazy_static;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::app::env::Envy;

pub mod app;
pub mod qrcodes;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(envy: Envy) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(envy.logo_fetch_timeout_ms))
            .build()?;

        Ok(Self {
            envy: Arc::new(envy),
            client,
        })
    }
}

pub fn router(state: AppState) -> Router {
    let qr_code_route = get(qrcodes::controller::render_qr_code)
        .options(qrcodes::controller::render_qr_code);

    Router::new()
        .route("/", get(app::controller::get_root))
        .route("/qrcode", qr_code_route.clone())
        .route("/.netlify/functions/qrcode", qr_code_route)
        .fallback(app::controller::fallback)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
