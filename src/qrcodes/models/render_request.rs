pub const DEFAULT_TEXT: &str = "https://example.com";
pub const DEFAULT_WIDTH: i64 = 300;
pub const DEFAULT_COLOR_DARK: &str = "#000000";
pub const DEFAULT_COLOR_LIGHT: &str = "#ffffff";
pub const DEFAULT_LOGO_WIDTH: i64 = 50;
pub const DEFAULT_LOGO_HEIGHT: i64 = 50;
pub const DEFAULT_MARGIN: i64 = 2;

// `None` in a numeric field means the value was not a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub text: String,
    pub width: Option<i64>,
    pub color_dark: String,
    pub color_light: String,
    pub logo: Option<String>,
    pub logo_width: Option<i64>,
    pub logo_height: Option<i64>,
    pub margin: Option<i64>,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            width: Some(DEFAULT_WIDTH),
            color_dark: DEFAULT_COLOR_DARK.to_string(),
            color_light: DEFAULT_COLOR_LIGHT.to_string(),
            logo: None,
            logo_width: Some(DEFAULT_LOGO_WIDTH),
            logo_height: Some(DEFAULT_LOGO_HEIGHT),
            margin: Some(DEFAULT_MARGIN),
        }
    }
}
