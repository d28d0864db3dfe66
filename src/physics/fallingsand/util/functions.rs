use bevy::render::color::Color;

/// A modulo that works for negative numbers
pub fn modulo(x: i64, y: u64) -> u64 {
    x.rem_euclid(y as i64) as u64
}

/// A cheap integer hash, used to give particles a stable visual jitter
/// Returns a value in [-1, 1]
pub fn jitter(seed: u32) -> f32 {
    let mut h = seed.wrapping_mul(0x9E37_79B9);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    (h & 0xFFFF) as f32 / 0xFFFF as f32 * 2.0 - 1.0
}

/// Scales the rgb channels of a color, keeping alpha
pub fn scale_color(color: Color, factor: f32) -> Color {
    let [r, g, b, a] = color.as_rgba_f32();
    Color::rgba(
        (r * factor).clamp(0.0, 1.0),
        (g * factor).clamp(0.0, 1.0),
        (b * factor).clamp(0.0, 1.0),
        a,
    )
}
