use std::collections::HashMap;

use crate::qrcodes::models::render_request::{
    RenderRequest, DEFAULT_COLOR_DARK, DEFAULT_COLOR_LIGHT, DEFAULT_LOGO_HEIGHT,
    DEFAULT_LOGO_WIDTH, DEFAULT_MARGIN, DEFAULT_TEXT, DEFAULT_WIDTH,
};

use super::parse_int;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderQrCodeDto {
    pub text: Option<String>,
    pub width: Option<String>,
    pub color_dark: Option<String>,
    pub color_light: Option<String>,
    pub logo: Option<String>,
    pub logo_width: Option<String>,
    pub logo_height: Option<String>,
    pub margin: Option<String>,
}

impl RenderQrCodeDto {
    pub fn from_query(params: Option<&HashMap<String, String>>) -> Self {
        let Some(params) = params else {
            return Self::default();
        };
        let get = |key: &str| params.get(key).cloned();

        Self {
            text: get("text"),
            width: get("width"),
            color_dark: get("color_dark"),
            color_light: get("color_light"),
            logo: get("logo"),
            logo_width: get("logoWidth"),
            logo_height: get("logoHeight"),
            margin: get("margin"),
        }
    }

    pub fn to_render_request(&self) -> RenderRequest {
        let int_or = |value: &Option<String>, default: i64| match value {
            Some(value) => parse_int(value),
            None => Some(default),
        };

        RenderRequest {
            text: self.text.clone().unwrap_or_else(|| DEFAULT_TEXT.to_string()),
            width: int_or(&self.width, DEFAULT_WIDTH),
            color_dark: non_empty_or(&self.color_dark, DEFAULT_COLOR_DARK),
            color_light: non_empty_or(&self.color_light, DEFAULT_COLOR_LIGHT),
            logo: self.logo.clone().filter(|logo| !logo.is_empty()),
            logo_width: int_or(&self.logo_width, DEFAULT_LOGO_WIDTH),
            logo_height: int_or(&self.logo_height, DEFAULT_LOGO_HEIGHT),
            margin: int_or(&self.margin, DEFAULT_MARGIN),
        }
    }
}

fn non_empty_or(value: &Option<String>, default: &str) -> String {
    match value.as_deref() {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}
