use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::Method,
};
use axum_macros::debug_handler;

use crate::AppState;

use super::{
    models::{function_event::FunctionEvent, function_response::FunctionResponse},
    service,
};

#[debug_handler(state = AppState)]
pub async fn render_qr_code(
    State(state): State<AppState>,
    method: Method,
    Query(params): Query<HashMap<String, String>>,
) -> FunctionResponse {
    let event = FunctionEvent {
        http_method: method.to_string(),
        query_string_parameters: Some(params),
    };

    service::handle_event(&event, &state).await
}
