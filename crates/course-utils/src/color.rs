use crate::course::Course;
use sha2::{Digest, Sha256};

/// Output format for a generated color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorFormat {
    /// `"#rrggbb"`
    #[default]
    Hex,
    /// `"rgb(r, g, b)"`
    Rgb,
}

/// Derives a deterministic light color from a seed string.
///
/// The seed's SHA-256 digest drives hue, saturation (40–70%), and
/// lightness (75–90%), so the same seed always yields the same
/// perceptually light color.
pub fn seeded_color(seed: &str, format: ColorFormat) -> String {
    let digest = Sha256::digest(seed.as_bytes());

    let hue = u16::from_be_bytes([digest[0], digest[1]]) % 360;
    let saturation = 40 + u16::from(digest[2] % 31);
    let lightness = 75 + u16::from(digest[3] % 16);

    let (r, g, b) = hsl_to_rgb(
        f64::from(hue),
        f64::from(saturation) / 100.0,
        f64::from(lightness) / 100.0,
    );

    match format {
        ColorFormat::Hex => format!("#{r:02x}{g:02x}{b:02x}"),
        ColorFormat::Rgb => format!("rgb({r}, {g}, {b})"),
    }
}

fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let hue_sector = hue / 60.0;
    let x = chroma * (1.0 - (hue_sector % 2.0 - 1.0).abs());

    let (r, g, b) = match hue_sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = lightness - chroma / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round() as u8;

    (channel(r), channel(g), channel(b))
}

impl Course {
    /// Deterministic display color for a section, seeded by its full code
    pub fn color(&self, format: ColorFormat) -> String {
        seeded_color(&self.full_code(), format)
    }
}
