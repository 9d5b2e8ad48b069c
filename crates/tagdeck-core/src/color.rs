//! Deterministic chip colors.
//!
//! Every chip's colors derive from its tag text: the uppercased first
//! character selects a base color from a fixed palette, and the background,
//! foreground, border, and delete-button colors are pure functions of that
//! base plus the match flag and theme mode. Nothing is stored; the full
//! render state is recomputed per chip per frame.
//!
//! Transformations operate in HSV/HSL space: [`pastelize`] lightens and pins
//! saturation for chip backgrounds, [`desaturate`] mutes them further, and
//! [`darker`] derives border colors.

use phf::phf_map;

// ---------------------------------------------------------------------------
// Rgba
// ---------------------------------------------------------------------------

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Failure to parse a `#rrggbb` color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("expected #rrggbb, got {0:?}")]
    Format(String),
    #[error("invalid hex digit in {0:?}")]
    HexDigit(String),
}

impl Rgba {
    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse a `#rrggbb` string (as used for config overrides).
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::Format(s.to_string()))?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseColorError::Format(s.to_string()));
        }
        let byte = |range| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ParseColorError::HexDigit(s.to_string()))
        };
        Ok(Self::rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?))
    }

    /// Alpha-composite `self` over an opaque background, producing an opaque
    /// color. Terminal backends have no alpha channel, so the de-emphasis
    /// alphas in [`ChipColors`] are resolved by blending at render time.
    pub fn blend_over(self, background: Rgba) -> Rgba {
        let alpha = f32::from(self.a) / 255.0;
        let mix = |fg: u8, bg: u8| {
            (f32::from(fg) * alpha + f32::from(bg) * (1.0 - alpha)).round() as u8
        };
        Rgba::rgb(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }
}

// ---------------------------------------------------------------------------
// Base palette
// ---------------------------------------------------------------------------

/// Base color per uppercase first letter. Adjacent letters alternate between
/// a brighter and a darker shade of the same hue family so neighbouring
/// alphabet buckets stay distinguishable.
static LETTER_PALETTE: phf::Map<u8, (u8, u8, u8)> = phf_map! {
    b'A' => (200, 0, 0),
    b'B' => (150, 0, 0),
    b'C' => (200, 0, 100),
    b'D' => (150, 0, 50),
    b'E' => (200, 50, 200),
    b'F' => (150, 25, 150),
    b'G' => (120, 0, 200),
    b'H' => (95, 0, 150),
    b'I' => (0, 40, 200),
    b'J' => (0, 20, 150),
    b'K' => (0, 120, 200),
    b'L' => (0, 80, 150),
    b'M' => (0, 200, 200),
    b'N' => (0, 150, 150),
    b'O' => (0, 200, 120),
    b'P' => (0, 150, 80),
    b'Q' => (0, 200, 0),
    b'R' => (0, 150, 0),
    b'S' => (120, 200, 0),
    b'T' => (80, 150, 0),
    b'U' => (200, 190, 0),
    b'V' => (150, 140, 0),
    b'W' => (180, 140, 25),
    b'X' => (130, 90, 25),
    b'Y' => (200, 75, 0),
    b'Z' => (150, 50, 0),
};

/// Bucket for tags starting with a digit.
const NUM: (u8, u8, u8) = (50, 50, 50);
/// Bucket for everything else (punctuation, non-ASCII, empty).
const OTHER: (u8, u8, u8) = (50, 50, 50);

/// Map a tag's first character to its base color bucket.
///
/// Total over all inputs: `A..=Z` (either case) hit the letter palette,
/// numeric characters hit the NUM bucket, and anything else — including the
/// empty string — falls through to OTHER.
pub fn base_color(text: &str) -> Rgba {
    let (r, g, b) = match text.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => {
            let key = c.to_ascii_uppercase() as u8;
            *LETTER_PALETTE.get(&key).unwrap_or(&OTHER)
        }
        Some(c) if c.is_numeric() => NUM,
        _ => OTHER,
    };
    Rgba::rgb(r, g, b)
}

// ---------------------------------------------------------------------------
// Transformations
// ---------------------------------------------------------------------------

/// Lighten by `factor` percent (HSV value scale; 140 means "40% lighter").
pub fn lighter(color: Rgba, factor: u32) -> Rgba {
    let (h, s, v) = rgb_to_hsv(color);
    let v = (v * factor as f32 / 100.0).min(1.0);
    hsv_to_rgba(h, s, v, color.a)
}

/// Darken by `factor` percent (value divided by `factor/100`).
pub fn darker(color: Rgba, factor: u32) -> Rgba {
    let (h, s, v) = rgb_to_hsv(color);
    let v = (v * 100.0 / factor as f32).min(1.0);
    hsv_to_rgba(h, s, v, color.a)
}

/// Muted pastel variant used for chip backgrounds.
///
/// Lightens by 40%, then re-pins the color in HSL space: saturation fixed at
/// the 150/255 mid-level, lightness clamped into [100, 160] on the 0–255
/// scale. The clamp keeps very dark and very bright bases inside a band
/// where white foreground text stays readable.
pub fn pastelize(color: Rgba) -> Rgba {
    let lightened = lighter(color, 140);
    let (h, s, l) = rgb_to_hsl(lightened);
    let l = (l * 255.0).clamp(100.0, 160.0) / 255.0;
    // Achromatic colors (the NUM/OTHER buckets) have no hue to pin the
    // saturation against; they stay gray.
    let s = if s == 0.0 { 0.0 } else { 150.0 / 255.0 };
    hsl_to_rgba(h, s, l, color.a)
}

/// Reduce HSV saturation by `percent`, floored at zero. Hue and value are
/// unchanged.
pub fn desaturate(color: Rgba, percent: u32) -> Rgba {
    let (h, s, v) = rgb_to_hsv(color);
    let s = (s - percent as f32 / 100.0).max(0.0);
    hsv_to_rgba(h, s, v, color.a)
}

// ---------------------------------------------------------------------------
// Render state
// ---------------------------------------------------------------------------

/// Theme mode the chips are rendered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// The full per-chip color set handed to the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipColors {
    pub background: Rgba,
    pub foreground: Rgba,
    pub border: Rgba,
    pub button_foreground: Rgba,
}

/// Compute a chip's colors from its tag text, match flag, and theme mode.
///
/// Pure and total: same inputs, same colors, every call. Non-matching tags
/// get reduced alpha across all channels so matching chips stand out; dark
/// mode hides the border and renders the label at full alpha.
pub fn render_state(tag: &str, is_match: bool, mode: ThemeMode) -> ChipColors {
    let base = base_color(tag);

    let mut foreground = Rgba::rgb(255, 255, 255).with_alpha(235);
    let mut background = desaturate(pastelize(base), 15).with_alpha(255);
    let mut button_foreground = foreground.with_alpha(125);
    let mut border = darker(base, 125).with_alpha(255);

    if mode == ThemeMode::Dark {
        foreground.a = 255;
        border.a = 0;
    }

    if !is_match {
        background.a = 75;
        foreground.a = 150;
        button_foreground.a = 75;
        border.a = 50;

        if mode == ThemeMode::Dark {
            background.a = 50;
            foreground.a = 50;
            button_foreground.a = 50;
            border.a = 0;
        }
    }

    ChipColors {
        background,
        foreground,
        border,
        button_foreground,
    }
}

// ---------------------------------------------------------------------------
// Color space conversions
// ---------------------------------------------------------------------------

/// RGB → (hue degrees 0–360, saturation 0–1, value 0–1).
fn rgb_to_hsv(c: Rgba) -> (f32, f32, f32) {
    let r = f32::from(c.r) / 255.0;
    let g = f32::from(c.g) / 255.0;
    let b = f32::from(c.b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = hue(r, g, b, max, delta);
    let s = if max == 0.0 { 0.0 } else { delta / max };
    (h, s, max)
}

/// RGB → (hue degrees 0–360, saturation 0–1, lightness 0–1).
fn rgb_to_hsl(c: Rgba) -> (f32, f32, f32) {
    let r = f32::from(c.r) / 255.0;
    let g = f32::from(c.g) / 255.0;
    let b = f32::from(c.b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = hue(r, g, b, max, delta);
    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };
    (h, s, l)
}

fn hue(r: f32, g: f32, b: f32, max: f32, delta: f32) -> f32 {
    if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    }
}

fn hsv_to_rgba(h: f32, s: f32, v: f32, a: u8) -> Rgba {
    let chroma = v * s;
    let m = v - chroma;
    from_chroma(h, chroma, m, a)
}

fn hsl_to_rgba(h: f32, s: f32, l: f32, a: u8) -> Rgba {
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let m = l - chroma / 2.0;
    from_chroma(h, chroma, m, a)
}

fn from_chroma(h: f32, chroma: f32, m: f32, a: u8) -> Rgba {
    let sector = h / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let channel = |f: f32| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgba {
        r: channel(r),
        g: channel(g),
        b: channel(b),
        a,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
