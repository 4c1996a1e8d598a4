//! RGBA color type and CSS-style color parsing

use serde::{Deserialize, Serialize};

/// An RGBA color with components in the 0.0..=1.0 range
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const ORANGE: Color = Color::rgb(1.0, 0.65, 0.0);
    pub const PURPLE: Color = Color::rgb(0.5, 0.0, 0.5);

    /// Create an opaque color from RGB components (0.0..=1.0)
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA components (0.0..=1.0)
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from a 0xRRGGBB integer
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create a color from a 0xRRGGBBAA integer
    pub const fn from_hex_alpha(hex: u32) -> Self {
        Self {
            r: ((hex >> 24) & 0xFF) as f32 / 255.0,
            g: ((hex >> 16) & 0xFF) as f32 / 255.0,
            b: ((hex >> 8) & 0xFF) as f32 / 255.0,
            a: (hex & 0xFF) as f32 / 255.0,
        }
    }

    /// Return the same color with a replaced alpha component
    pub const fn with_alpha(self, a: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: Color, to: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Format as `#rrggbb` (or `rgba(...)` when translucent)
    pub fn to_css_string(&self) -> String {
        if self.a < 1.0 {
            format!(
                "rgba({},{},{},{})",
                (self.r * 255.0) as u8,
                (self.g * 255.0) as u8,
                (self.b * 255.0) as u8,
                self.a
            )
        } else {
            format!(
                "#{:02x}{:02x}{:02x}",
                (self.r * 255.0) as u8,
                (self.g * 255.0) as u8,
                (self.b * 255.0) as u8
            )
        }
    }

    /// Parse a CSS-style color string
    ///
    /// Supports `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)`,
    /// `rgba(r, g, b, a)` (0-255 component ranges are normalized), and the
    /// common CSS named colors. Returns `None` for anything else.
    pub fn parse(input: &str) -> Option<Color> {
        let input = input.trim();

        if let Some(hex) = input.strip_prefix('#') {
            return parse_hex(hex);
        }

        if let Some(inner) = strip_function(input, "rgba") {
            let parts = parse_components(inner, 4)?;
            let (r, g, b) = normalize_rgb(parts[0], parts[1], parts[2]);
            return Some(Color::rgba(r, g, b, parts[3]));
        }

        if let Some(inner) = strip_function(input, "rgb") {
            let parts = parse_components(inner, 3)?;
            let (r, g, b) = normalize_rgb(parts[0], parts[1], parts[2]);
            return Some(Color::rgba(r, g, b, 1.0));
        }

        parse_named(input)
    }
}

/// Parse the digits of a hex color (prefix already stripped)
fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);
    match hex.len() {
        3 => {
            let r = channel(&hex[0..1].repeat(2))?;
            let g = channel(&hex[1..2].repeat(2))?;
            let b = channel(&hex[2..3].repeat(2))?;
            Some(Color::rgb(r, g, b))
        }
        6 => {
            let r = channel(&hex[0..2])?;
            let g = channel(&hex[2..4])?;
            let b = channel(&hex[4..6])?;
            Some(Color::rgb(r, g, b))
        }
        8 => {
            let r = channel(&hex[0..2])?;
            let g = channel(&hex[2..4])?;
            let b = channel(&hex[4..6])?;
            let a = channel(&hex[6..8])?;
            Some(Color::rgba(r, g, b, a))
        }
        _ => None,
    }
}

/// Strip a `name( ... )` function wrapper, case-insensitively
fn strip_function<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    let rest = input
        .get(..name.len())
        .filter(|head| head.eq_ignore_ascii_case(name))
        .map(|_| input[name.len()..].trim_start())?;
    rest.strip_prefix('(')?.strip_suffix(')')
}

fn parse_components(inner: &str, expected: usize) -> Option<Vec<f32>> {
    let parts: Vec<f32> = inner
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .ok()?;
    (parts.len() == expected).then_some(parts)
}

/// Normalize 0-255 range components down to 0.0..=1.0
fn normalize_rgb(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    if r > 1.0 || g > 1.0 || b > 1.0 {
        (r / 255.0, g / 255.0, b / 255.0)
    } else {
        (r, g, b)
    }
}

fn parse_named(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(Color::BLACK),
        "white" => Some(Color::WHITE),
        "red" => Some(Color::RED),
        "green" => Some(Color::rgb(0.0, 0.5, 0.0)),
        "blue" => Some(Color::BLUE),
        "yellow" => Some(Color::YELLOW),
        "cyan" | "aqua" => Some(Color::CYAN),
        "magenta" | "fuchsia" => Some(Color::MAGENTA),
        "gray" | "grey" => Some(Color::GRAY),
        "orange" => Some(Color::ORANGE),
        "purple" => Some(Color::PURPLE),
        "transparent" => Some(Color::TRANSPARENT),
        _ => None,
    }
}
