use image::Rgba;
use regex::Regex;

use crate::qrcodes::errors::RenderError;

lazy_static! {
    pub static ref HEX_COLOR_REGEX: Regex =
        Regex::new(r"^#?([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap();
}

pub fn parse_hex_color(value: &str) -> Result<Rgba<u8>, RenderError> {
    let Some(captures) = HEX_COLOR_REGEX.captures(value) else {
        return Err(RenderError::InvalidColor(value.to_string()));
    };

    let digits = &captures[1];
    let mut long: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => digits.to_string(),
    };
    if long.len() == 6 {
        long.push_str("ff");
    }

    let packed = u32::from_str_radix(&long, 16)
        .map_err(|_| RenderError::InvalidColor(value.to_string()))?;

    Ok(Rgba(packed.to_be_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_form() {
        assert_eq!(parse_hex_color("#000000").unwrap(), Rgba([0, 0, 0, 255]));
        assert_eq!(parse_hex_color("#1a2B3c").unwrap(), Rgba([0x1a, 0x2b, 0x3c, 255]));
        assert_eq!(parse_hex_color("11223344").unwrap(), Rgba([0x11, 0x22, 0x33, 0x44]));
    }

    #[test]
    fn expands_short_form() {
        assert_eq!(parse_hex_color("#fff").unwrap(), Rgba([255, 255, 255, 255]));
        assert_eq!(parse_hex_color("#f008").unwrap(), Rgba([255, 0, 0, 0x88]));
    }

    #[test]
    fn rejects_other_strings() {
        for value in ["", "#", "#12", "#12345", "#1234567", "red", "#gggggg"] {
            let err = parse_hex_color(value).unwrap_err();
            assert_eq!(err.to_string(), format!("Invalid hex color: {}", value));
        }
    }
}
