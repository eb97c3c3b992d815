use image::{imageops, imageops::FilterType, Pixel, Rgba, RgbaImage};

use crate::{
    app::util::reqwest::get_bytes,
    qrcodes::{
        enums::logo_outcome::LogoOutcome, errors::LogoError,
        models::logo_placement::LogoPlacement,
    },
};

#[derive(Debug, Clone, Copy)]
pub struct LogoSpec<'a> {
    pub source: Option<&'a str>,
    pub width: Option<i64>,
    pub height: Option<i64>,
}

// Every fallible step runs before the surface is touched, so a failed logo
// leaves the plain QR code behind.
pub async fn composite(
    surface: &mut RgbaImage,
    logo: &LogoSpec<'_>,
    plate: Rgba<u8>,
    client: &reqwest::Client,
) -> LogoOutcome {
    let Some(source) = logo.source.filter(|source| !source.is_empty()) else {
        return LogoOutcome::Omitted(None);
    };

    match prepare(source, logo, surface.width(), client).await {
        Ok((image, placement)) => {
            paint(surface, &image, &placement, plate);
            LogoOutcome::Embedded(placement)
        }
        Err(e) => {
            tracing::warn!(%e, "continuing without logo");
            LogoOutcome::Omitted(Some(e))
        }
    }
}

async fn prepare(
    source: &str,
    logo: &LogoSpec<'_>,
    surface_width: u32,
    client: &reqwest::Client,
) -> Result<(RgbaImage, LogoPlacement), LogoError> {
    let width = logo_dimension("logoWidth", logo.width, surface_width)?;
    let height = logo_dimension("logoHeight", logo.height, surface_width)?;
    logo_len(width, height).ok_or(LogoError::SizeTooLarge {
        field: "logoWidth",
        value: width as i64,
        max: surface_width,
    })?;

    let bytes = acquire(source, client).await?;
    let image = image::load_from_memory(&bytes)?
        .resize_exact(width, height, FilterType::Triangle)
        .to_rgba8();

    Ok((image, LogoPlacement::centered(surface_width, width, height)))
}

// A logo larger than the surface would only be clipped.
fn logo_dimension(field: &'static str, value: Option<i64>, max: u32) -> Result<u32, LogoError> {
    let value = match value {
        Some(value) if value > 0 => value,
        _ => return Err(LogoError::InvalidSize { field }),
    };

    match u32::try_from(value) {
        Ok(size) if size <= max => Ok(size),
        _ => Err(LogoError::SizeTooLarge { field, value, max }),
    }
}

fn logo_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
}

pub async fn acquire(source: &str, client: &reqwest::Client) -> Result<Vec<u8>, LogoError> {
    let scheme = source
        .split_once(':')
        .map(|(scheme, _)| scheme.to_ascii_lowercase());

    match scheme.as_deref() {
        Some("http") | Some("https") => Ok(get_bytes(source, client).await?.to_vec()),
        Some("data") => decode_data_url(source),
        _ => Err(LogoError::UnsupportedSource(source.to_string())),
    }
}

fn decode_data_url(source: &str) -> Result<Vec<u8>, LogoError> {
    let Some((meta, data)) = source.split_once(',') else {
        return Err(LogoError::InvalidDataUrl("missing ','".to_string()));
    };

    if meta.to_ascii_lowercase().ends_with(";base64") {
        let data: String = data.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        base64::decode(data).map_err(|e| LogoError::InvalidDataUrl(e.to_string()))
    } else {
        Ok(data.as_bytes().to_vec())
    }
}

fn paint(surface: &mut RgbaImage, logo: &RgbaImage, placement: &LogoPlacement, plate: Rgba<u8>) {
    let (x, y, width, height) = placement.plate();
    fill_rect(surface, x, y, width, height, plate);

    imageops::overlay(surface, logo, placement.x, placement.y);
}

fn fill_rect(surface: &mut RgbaImage, x: i64, y: i64, width: u32, height: u32, color: Rgba<u8>) {
    let x0 = x.clamp(0, surface.width() as i64) as u32;
    let y0 = y.clamp(0, surface.height() as i64) as u32;
    let x1 = (x + width as i64).clamp(0, surface.width() as i64) as u32;
    let y1 = (y + height as i64).clamp(0, surface.height() as i64) as u32;

    for py in y0..y1 {
        for px in x0..x1 {
            surface.get_pixel_mut(px, py).blend(&color);
        }
    }
}
