use regex::Regex;

pub mod render_qr_code_dto;

lazy_static! {
    pub static ref INTEGER_PREFIX_REGEX: Regex = Regex::new(
        r"^\s*(?P<sign>[+-])?(?:(?P<hex>0[xX])(?P<hex_digits>[0-9a-fA-F]*)|(?P<digits>[0-9]*))"
    )
    .unwrap();
}

/// Reads the longest integer prefix of `value`, `0x` meaning hex. `None`
/// when there are no digits or the value overflows.
pub fn parse_int(value: &str) -> Option<i64> {
    let captures = INTEGER_PREFIX_REGEX.captures(value)?;
    let sign = captures.name("sign").map_or("", |m| m.as_str());

    let (digits, radix) = match captures.name("hex") {
        Some(_) => (captures.name("hex_digits")?.as_str(), 16),
        None => (captures.name("digits")?.as_str(), 10),
    };

    if digits.is_empty() {
        return None;
    }

    i64::from_str_radix(&[sign, digits].concat(), radix).ok()
}
