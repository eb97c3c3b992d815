use image::ImageError;
use qrcode::types::QrError;
use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{field} must be a number")]
    InvalidNumber { field: &'static str },
    #[error("width must be positive, got {0}")]
    InvalidWidth(i64),
    #[error("No input text")]
    EmptyText,
    #[error("width {width} is too small for a {required}x{required} module QR code")]
    WidthTooSmall { width: u32, required: u64 },
    #[error("width {width} exceeds the maximum of {max}")]
    WidthTooLarge { width: i64, max: u32 },
    #[error("failed to allocate a {0}x{0} surface")]
    Allocation(u32),
    #[error("Invalid hex color: {0}")]
    InvalidColor(String),
    #[error("failed to encode text: {0}")]
    Encode(#[from] QrError),
    #[error("failed to encode png: {0}")]
    Png(#[from] ImageError),
    #[error("render task failed: {0}")]
    Task(#[from] JoinError),
}

// Logged by the compositor, never returned to the caller.
#[derive(Debug, Error)]
pub enum LogoError {
    #[error("failed to fetch logo: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("unsupported logo source: {0}")]
    UnsupportedSource(String),
    #[error("invalid data url: {0}")]
    InvalidDataUrl(String),
    #[error("failed to decode logo: {0}")]
    Decode(#[from] ImageError),
    #[error("{field} must be a positive number")]
    InvalidSize { field: &'static str },
    #[error("{field} {value} exceeds the maximum of {max}")]
    SizeTooLarge {
        field: &'static str,
        value: i64,
        max: u32,
    },
}
