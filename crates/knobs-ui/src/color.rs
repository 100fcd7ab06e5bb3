//! Color value encodings.
//!
//! `Color` carries a 24-bit `0xRRGGBB` value shown as `#rrggbb`.
//! `ColorAlpha` packs the same 24 bits above an 8-bit alpha:
//! `(rgb << 8) | alpha`.

/// `#rrggbb` view of the low 24 bits.
pub fn encode_hex(rgb: u32) -> String {
    format!("#{:06x}", rgb & 0xFF_FFFF)
}

/// Parse a `#rrggbb` string, `0` when it is not hex.
pub fn decode_hex(text: &str) -> u32 {
    u32::from_str_radix(text.trim().trim_start_matches('#'), 16)
        .map(|rgb| rgb & 0xFF_FFFF)
        .unwrap_or(0)
}

pub fn pack_rgba(rgb: u32, alpha: u8) -> u32 {
    ((rgb & 0xFF_FFFF) << 8) | u32::from(alpha)
}

/// Split a packed value into `(rgb, alpha)`.
pub fn unpack_rgba(value: u32) -> (u32, u8) {
    (value >> 8, (value & 0xFF) as u8)
}

/// Scale an opacity in `[0, 1]` to a byte. Out of range values are clamped
/// and NaN maps to 0.
pub fn alpha_to_byte(alpha: f64) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub fn byte_to_alpha(alpha: u8) -> f64 {
    f64::from(alpha) / 255.0
}
