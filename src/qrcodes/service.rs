use crate::AppState;

use super::{
    dtos::render_qr_code_dto::RenderQrCodeDto,
    enums::logo_outcome::LogoOutcome,
    errors::RenderError,
    models::{
        function_event::FunctionEvent, function_response::FunctionResponse,
        generated_qr_code::GeneratedQrCode, render_request::RenderRequest,
    },
    util::{
        compositor::{self, LogoSpec},
        png::encode_png,
        renderer::{self, RenderOptions},
    },
};

pub async fn handle_event(event: &FunctionEvent, state: &AppState) -> FunctionResponse {
    if event.is_preflight() {
        return FunctionResponse::preflight();
    }

    let dto = RenderQrCodeDto::from_query(event.query_string_parameters.as_ref());
    let request = dto.to_render_request();

    match generate_qr_code(&request, state.envy.qr_max_width, &state.client).await {
        Ok(generated) => FunctionResponse::png(&generated.png),
        Err(e) => {
            tracing::error!(%e, "failed to generate QR code");
            FunctionResponse::failure(&e.to_string())
        }
    }
}

// Holds no state between calls; the logo fetch is the only outside input.
pub async fn generate_qr_code(
    request: &RenderRequest,
    max_width: u32,
    client: &reqwest::Client,
) -> Result<GeneratedQrCode, RenderError> {
    let options = RenderOptions::resolve(request, max_width)?;

    let text = request.text.clone();
    let mut surface =
        tokio::task::spawn_blocking(move || renderer::render(&text, &options)).await??;

    let logo = LogoSpec {
        source: request.logo.as_deref(),
        width: request.logo_width,
        height: request.logo_height,
    };
    let logo = compositor::composite(&mut surface, &logo, options.light, client).await;

    if let LogoOutcome::Embedded(placement) = &logo {
        tracing::debug!(x = placement.x, y = placement.y, "embedded logo");
    }

    let png = tokio::task::spawn_blocking(move || encode_png(&surface)).await??;

    Ok(GeneratedQrCode { png, logo })
}
