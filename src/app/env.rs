use serde::Deserialize;

pub const DEFAULT_QR_MAX_WIDTH: u32 = 4096;
pub const DEFAULT_LOGO_FETCH_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    #[serde(default = "default_qr_max_width")]
    pub qr_max_width: u32,
    #[serde(default = "default_logo_fetch_timeout_ms")]
    pub logo_fetch_timeout_ms: u64,
}

impl Default for Envy {
    fn default() -> Self {
        Self {
            app_env: default_app_env(),
            port: None,
            qr_max_width: DEFAULT_QR_MAX_WIDTH,
            logo_fetch_timeout_ms: DEFAULT_LOGO_FETCH_TIMEOUT_MS,
        }
    }
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_qr_max_width() -> u32 {
    DEFAULT_QR_MAX_WIDTH
}

fn default_logo_fetch_timeout_ms() -> u64 {
    DEFAULT_LOGO_FETCH_TIMEOUT_MS
}
