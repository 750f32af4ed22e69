//! 32-bit ARGB colors and the CSS color syntaxes SVG documents use for paint.

mod keywords;

use crate::{Error, Result};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// An immutable ARGB color, alpha in the most significant byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Color(u32);

/// Built-in `Color.*` constants of the Compose graphics API, matched on RGB only.
const COMPOSE_NAMED: &[(&str, u32)] = &[
    ("Black", 0x000000),
    ("DarkGray", 0x444444),
    ("Gray", 0x888888),
    ("LightGray", 0xCCCCCC),
    ("White", 0xFFFFFF),
    ("Red", 0xFF0000),
    ("Green", 0x00FF00),
    ("Blue", 0x0000FF),
    ("Yellow", 0xFFFF00),
    ("Cyan", 0x00FFFF),
    ("Magenta", 0xFF00FF),
];

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const TRANSPARENT: Color = Color(0);

    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    pub fn from_rgb(red: i64, green: i64, blue: i64) -> Result<Self> {
        Self::from_rgba(red, green, blue, 255)
    }

    /// Packs channels into ARGB, rejecting anything outside `0..=255`.
    pub fn from_rgba(red: i64, green: i64, blue: i64, alpha: i64) -> Result<Self> {
        let r = channel("red", red)?;
        let g = channel("green", green)?;
        let b = channel("blue", blue)?;
        let a = channel("alpha", alpha)?;
        Ok(Self(
            (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b),
        ))
    }

    /// Parses `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    ///
    /// Short forms expand by doubling each digit; a trailing alpha byte is moved to the front.
    pub fn from_hex(value: &str) -> Result<Self> {
        let digits = value.trim().trim_start_matches('#');
        let invalid = || Error::InvalidColorFormat {
            value: value.trim().to_string(),
        };
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let doubled = |s: &str| s.chars().flat_map(|c| [c, c]).collect::<String>();
        let argb = match digits.len() {
            3 => format!("ff{}", doubled(digits)),
            4 => {
                let expanded = doubled(digits);
                format!("{}{}", &expanded[6..8], &expanded[0..6])
            }
            6 => format!("ff{digits}"),
            8 => format!("{}{}", &digits[6..8], &digits[0..6]),
            _ => return Err(invalid()),
        };
        u32::from_str_radix(&argb, 16)
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Case-insensitive lookup in the CSS3 keyword table.
    pub fn from_keyword(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        keywords::KEYWORDS
            .binary_search_by(|(k, _)| (*k).cmp(name.as_str()))
            .ok()
            .map(|idx| Self(keywords::KEYWORDS[idx].1))
    }

    pub fn argb(self) -> u32 {
        self.0
    }

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(self) -> u8 {
        self.0 as u8
    }

    pub fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }

    pub fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | (u32::from(alpha) << 24))
    }

    /// Scales alpha by `opacity`, truncating toward zero.
    pub fn with_opacity(self, opacity: f64) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        self.with_alpha((f64::from(self.alpha()) * opacity) as u8)
    }

    /// Name of the Compose built-in constant with the same RGB value, if any.
    pub fn compose_name(self) -> Option<&'static str> {
        let rgb = self.0 & 0x00FF_FFFF;
        COMPOSE_NAMED
            .iter()
            .find(|(_, v)| *v == rgb)
            .map(|(name, _)| *name)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.red(),
            self.green(),
            self.blue(),
            self.alpha()
        )
    }
}

fn channel(name: &'static str, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::ChannelOutOfRange {
        channel: name,
        value,
    })
}

fn color_function_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(rgba?|hsla?)\s*\((.*)\)$").expect("valid regex"))
}

fn argument_separator_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s,/]+").expect("valid regex"))
}

/// Parses a paint color.
///
/// `Ok(None)` means "no paint" (`none` / `transparent`). `currentColor` has no context to inherit
/// from here and resolves to opaque black.
pub fn parse_color(value: &str) -> Result<Option<Color>> {
    let trimmed = value.trim();
    let lower = trimmed.to_ascii_lowercase();

    match lower.as_str() {
        "none" | "transparent" => return Ok(None),
        "currentcolor" => return Ok(Some(Color::BLACK)),
        _ => {}
    }

    if let Some(color) = Color::from_keyword(&lower) {
        return Ok(Some(color));
    }
    if lower.starts_with('#') {
        return Color::from_hex(&lower).map(Some);
    }

    let unsupported = || Error::UnsupportedColorFormat {
        value: trimmed.to_string(),
    };
    let Some(caps) = color_function_regex().captures(&lower) else {
        return Err(unsupported());
    };
    let func = caps.get(1).map_or("", |m| m.as_str());
    let args: Vec<&str> = argument_separator_regex()
        .split(caps.get(2).map_or("", |m| m.as_str()).trim())
        .filter(|s| !s.is_empty())
        .collect();

    let channels = |r: &str, g: &str, b: &str| -> Result<(i64, i64, i64)> {
        match (rgb_channel(r), rgb_channel(g), rgb_channel(b)) {
            (Some(r), Some(g), Some(b)) => Ok((r, g, b)),
            _ => Err(unsupported()),
        }
    };

    let color = match (func, args.as_slice()) {
        ("rgb" | "rgba", [r, g, b]) => {
            let (r, g, b) = channels(r, g, b)?;
            Color::from_rgb(r, g, b)?
        }
        ("rgb" | "rgba", [r, g, b, a]) => {
            let (r, g, b) = channels(r, g, b)?;
            Color::from_rgba(r, g, b, alpha_channel(a).ok_or_else(unsupported)?)?
        }
        ("hsl" | "hsla", [h, s, l]) => hsl_color(h, s, l, "1").ok_or_else(unsupported)??,
        ("hsl" | "hsla", [h, s, l, a]) => hsl_color(h, s, l, a).ok_or_else(unsupported)??,
        _ => return Err(unsupported()),
    };
    Ok(Some(color))
}

/// Integer or percentage channel; range checking is left to [`Color::from_rgba`].
fn rgb_channel(raw: &str) -> Option<i64> {
    let value = match raw.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f64>().ok()? * 255.0 / 100.0,
        None => raw.trim().parse::<f64>().ok()?,
    };
    value.is_finite().then(|| value.round() as i64)
}

/// `0..1` float or percentage, scaled to `0..=255` and rounded.
fn alpha_channel(raw: &str) -> Option<i64> {
    let fraction = match raw.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f64>().ok()? / 100.0,
        None => raw.trim().parse::<f64>().ok()?,
    };
    if !fraction.is_finite() {
        return None;
    }
    Some((fraction * 255.0).round() as i64)
}

fn hsl_color(h: &str, s: &str, l: &str, a: &str) -> Option<Result<Color>> {
    let hue = h.trim_end_matches("deg").parse::<f64>().ok()?;
    let sat = s.strip_suffix('%')?.parse::<f64>().ok()? / 100.0;
    let light = l.strip_suffix('%')?.parse::<f64>().ok()? / 100.0;
    let alpha = alpha_channel(a)?;
    if !(hue.is_finite() && sat.is_finite() && light.is_finite()) {
        return None;
    }

    let sat = sat.clamp(0.0, 1.0);
    let light = light.clamp(0.0, 1.0);
    let hue = hue.rem_euclid(360.0) / 360.0;

    let q = if light < 0.5 {
        light * (1.0 + sat)
    } else {
        light + sat - light * sat
    };
    let p = 2.0 * light - q;
    let to_channel = |t: f64| (hue_to_rgb(p, q, t) * 255.0).round() as i64;

    Some(Color::from_rgba(
        to_channel(hue + 1.0 / 3.0),
        to_channel(hue),
        to_channel(hue - 1.0 / 3.0),
        alpha,
    ))
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
