/// Color utilities.
use rand::RngExt;

/// Validate if a string is a valid hex color (e.g., #RRGGBB).
pub fn is_valid_hex(s: &str) -> bool {
    s.starts_with('#') && s.len() == 7 && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Generate a random `#rrggbb` color, uniform over all 24-bit values.
pub fn random_color() -> String {
    random_color_with(&mut rand::rng())
}

pub fn random_color_with<R: RngExt>(rng: &mut R) -> String {
    format_color(rng.random_range(0..=0xFF_FFFF))
}

/// Render the low 24 bits of `value` as `#rrggbb`.
pub fn format_color(value: u32) -> String {
    format!("#{:06x}", value & 0xFF_FFFF)
}

/// Split a hex color into its red, green and blue bytes. The leading `#` is optional.
pub fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
