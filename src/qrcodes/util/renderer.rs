use image::{Rgba, RgbaImage};
use qrcode::{Color, EcLevel, QrCode};

use crate::qrcodes::{errors::RenderError, models::render_request::RenderRequest};

use super::color::parse_hex_color;

// Quiet zone used when a negative margin is requested.
pub const NEGATIVE_MARGIN_FALLBACK: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: u32,
    pub margin: u32,
    pub dark: Rgba<u8>,
    pub light: Rgba<u8>,
}

impl RenderOptions {
    pub fn resolve(request: &RenderRequest, max_width: u32) -> Result<Self, RenderError> {
        let width = request
            .width
            .ok_or(RenderError::InvalidNumber { field: "width" })?;
        let margin = request
            .margin
            .ok_or(RenderError::InvalidNumber { field: "margin" })?;

        if width <= 0 {
            return Err(RenderError::InvalidWidth(width));
        }

        let width = match u32::try_from(width) {
            Ok(value) if value <= max_width => value,
            _ => {
                return Err(RenderError::WidthTooLarge {
                    width,
                    max: max_width,
                })
            }
        };

        let margin = match margin {
            m if m < 0 => NEGATIVE_MARGIN_FALLBACK,
            // Anything past u32 can never fit inside the surface anyway.
            m => u32::try_from(m).unwrap_or(u32::MAX),
        };

        Ok(Self {
            width,
            margin,
            dark: parse_hex_color(&request.color_dark)?,
            light: parse_hex_color(&request.color_light)?,
        })
    }
}

fn blank_surface(width: u32, fill: Rgba<u8>) -> Result<RgbaImage, RenderError> {
    let pixels = (width as usize)
        .checked_mul(width as usize)
        .ok_or(RenderError::Allocation(width))?;
    let len = pixels
        .checked_mul(4)
        .ok_or(RenderError::Allocation(width))?;

    let mut raw = Vec::new();
    raw.try_reserve_exact(len)
        .map_err(|_| RenderError::Allocation(width))?;
    for _ in 0..pixels {
        raw.extend_from_slice(&fill.0);
    }

    RgbaImage::from_raw(width, width, raw).ok_or(RenderError::Allocation(width))
}

// Pixel `p` shows module `p * modules / width`.
pub fn render(text: &str, options: &RenderOptions) -> Result<RgbaImage, RenderError> {
    if text.is_empty() {
        return Err(RenderError::EmptyText);
    }

    let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::M)?;
    let size = code.width();
    let colors = code.to_colors();

    let margin = options.margin as u64;
    let modules = size as u64 + 2 * margin;
    let width = options.width as u64;

    if width < modules {
        return Err(RenderError::WidthTooSmall {
            width: options.width,
            required: modules,
        });
    }

    // Module index inside the symbol for each pixel column (and row).
    let lookup: Vec<Option<usize>> = (0..width)
        .map(|p| {
            let module = p * modules / width;
            match module.checked_sub(margin) {
                Some(m) if m < size as u64 => Some(m as usize),
                _ => None,
            }
        })
        .collect();

    let mut surface = blank_surface(options.width, options.light)?;

    for (px, py, pixel) in surface.enumerate_pixels_mut() {
        if let (Some(x), Some(y)) = (lookup[px as usize], lookup[py as usize]) {
            if colors[y * size + x] == Color::Dark {
                *pixel = options.dark;
            }
        }
    }

    Ok(surface)
}
