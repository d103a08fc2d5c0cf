//! Terminal cells have no alpha channel, so opacity is faked by mixing the
//! foreground toward the background in Oklab, where the mix looks even.

use ratatui::style::Color;

/// Below this opacity, colours that cannot be mixed are hidden entirely.
const OPAQUE_SWITCH: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Oklab {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = decode(r);
        let g = decode(g);
        let b = decode(b);

        let l = (0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b).cbrt();
        let m = (0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b).cbrt();
        let s = (0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b).cbrt();

        Self {
            l: 0.2104542553 * l + 0.7936177850 * m - 0.0040720468 * s,
            a: 1.9779984951 * l - 2.4285922050 * m + 0.4505937099 * s,
            b: 0.0259040371 * l + 0.7827717662 * m - 0.8086757660 * s,
        }
    }

    pub fn to_rgb(self) -> (u8, u8, u8) {
        let l = self.l + 0.3963377774 * self.a + 0.2158037573 * self.b;
        let m = self.l - 0.1055613458 * self.a - 0.0638541728 * self.b;
        let s = self.l - 0.0894841775 * self.a - 1.2914855480 * self.b;

        let (l, m, s) = (l * l * l, m * m * m, s * s * s);

        (
            encode(4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s),
            encode(-1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s),
            encode(-0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s),
        )
    }

    pub fn mix(self, other: Self, t: f32) -> Self {
        Self {
            l: self.l + (other.l - self.l) * t,
            a: self.a + (other.a - self.a) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}

/// sRGB byte to linear light.
fn decode(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;

    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear light to sRGB byte.
fn encode(linear: f32) -> u8 {
    let c = linear.clamp(0.0, 1.0);
    let srgb = if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    };

    (srgb * 255.0 + 0.5) as u8
}

/// RGB form of a ratatui colour. `Reset` and indexed colours depend on the
/// terminal palette and have none.
pub fn rgb_of(color: Color) -> Option<(u8, u8, u8)> {
    let rgb = match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::Red => (128, 0, 0),
        Color::Green => (0, 128, 0),
        Color::Yellow => (128, 128, 0),
        Color::Blue => (0, 0, 128),
        Color::Magenta => (128, 0, 128),
        Color::Cyan => (0, 128, 128),
        Color::Gray => (192, 192, 192),
        Color::DarkGray => (128, 128, 128),
        Color::LightRed => (255, 0, 0),
        Color::LightGreen => (0, 255, 0),
        Color::LightYellow => (255, 255, 0),
        Color::LightBlue => (0, 0, 255),
        Color::LightMagenta => (255, 0, 255),
        Color::LightCyan => (0, 255, 255),
        Color::White => (255, 255, 255),
        Color::Reset | Color::Indexed(_) => return None,
    };

    Some(rgb)
}

/// Foreground to paint for `fg` at `opacity` over `bg`.
///
/// `None` means the glyph should not be drawn at all.
pub fn with_opacity(fg: Color, bg: Color, opacity: f32) -> Option<Color> {
    let opacity = opacity.clamp(0.0, 1.0);

    if opacity >= 1.0 {
        return Some(fg);
    }

    // Unknown backgrounds are assumed dark.
    let bg_rgb = rgb_of(bg).unwrap_or((0, 0, 0));

    match rgb_of(fg) {
        Some((r, g, b)) => {
            let from = Oklab::from_rgb(bg_rgb.0, bg_rgb.1, bg_rgb.2);
            let to = Oklab::from_rgb(r, g, b);
            let (r, g, b) = from.mix(to, opacity).to_rgb();
            Some(Color::Rgb(r, g, b))
        }
        None if opacity >= OPAQUE_SWITCH => Some(fg),
        None => None,
    }
}
