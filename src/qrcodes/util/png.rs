use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder, ImageError, RgbaImage};

pub fn encode_png(surface: &RgbaImage) -> Result<Vec<u8>, ImageError> {
    let mut bytes = Vec::new();

    PngEncoder::new(&mut bytes).write_image(
        surface.as_raw(),
        surface.width(),
        surface.height(),
        ExtendedColorType::Rgba8,
    )?;

    Ok(bytes)
}
