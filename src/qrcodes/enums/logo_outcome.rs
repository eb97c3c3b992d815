use crate::qrcodes::{errors::LogoError, models::logo_placement::LogoPlacement};

#[derive(Debug)]
pub enum LogoOutcome {
    Embedded(LogoPlacement),
    Omitted(Option<LogoError>),
}
