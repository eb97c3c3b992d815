use crate::qrcodes::enums::logo_outcome::LogoOutcome;

#[derive(Debug)]
pub struct GeneratedQrCode {
    pub png: Vec<u8>,
    pub logo: LogoOutcome,
}
