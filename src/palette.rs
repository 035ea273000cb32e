//! Color identities and per-color palettes
//!
//! Every color the player can select has its own palette; the whole scene is
//! re-tinted with the palette of the current color.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A selectable color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorId {
    Blue,
    Red,
    Green,
    Yellow,
}

impl ColorId {
    pub const ALL: [ColorId; 4] = [ColorId::Blue, ColorId::Red, ColorId::Green, ColorId::Yellow];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorId::Blue => "blue",
            ColorId::Red => "red",
            ColorId::Green => "green",
            ColorId::Yellow => "yellow",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "blue" => Some(ColorId::Blue),
            "red" => Some(ColorId::Red),
            "green" => Some(ColorId::Green),
            "yellow" => Some(ColorId::Yellow),
            _ => None,
        }
    }

    /// Dense index for per-color tables
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (leading `#` optional)
    pub fn from_hex(value: &str) -> Option<Self> {
        let hex = value.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Linear blend toward `other` (`t` in 0..=1)
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Palette as written in settings (hex strings)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteSpec {
    pub background: String,
    pub spiral_color: String,
    pub border_color: String,
    pub pale: String,
    pub avatar: String,
    pub p1: String,
    pub p2: String,
    pub p3: String,
    pub p4: String,
}

impl PaletteSpec {
    #[allow(clippy::too_many_arguments)]
    fn from_strs(
        background: &str,
        spiral_color: &str,
        border_color: &str,
        pale: &str,
        avatar: &str,
        p1: &str,
        p2: &str,
        p3: &str,
        p4: &str,
    ) -> Self {
        Self {
            background: background.to_string(),
            spiral_color: spiral_color.to_string(),
            border_color: border_color.to_string(),
            pale: pale.to_string(),
            avatar: avatar.to_string(),
            p1: p1.to_string(),
            p2: p2.to_string(),
            p3: p3.to_string(),
            p4: p4.to_string(),
        }
    }

    /// Built-in palette for a color
    pub fn default_for(color: ColorId) -> Self {
        match color {
            ColorId::Blue => Self::from_strs(
                "#545B74", "#FFBB00", "#616F9B", "#203065", "#203065", "#009999", "#2419B2",
                "#FFC500", "#FF7400",
            ),
            ColorId::Red => Self::from_strs(
                "#AC7B75", "#00B74A", "#E58E84", "#8D1520", "#8D1520", "#E40045", "#FF7C00",
                "#04859D", "#67E300",
            ),
            ColorId::Green => Self::from_strs(
                "#3E621F", "#F5001D", "#75AB48", "#70E500", "#85EB6A", "#B72F00", "#00B454",
                "#FF3900", "#BC008D",
            ),
            ColorId::Yellow => Self::from_strs(
                "#A69600", "#510FAD", "#FFF173", "#FFDA00", "#FFED40", "#FFD700", "#DFFA00",
                "#8C04A8", "#3E13AF",
            ),
        }
    }

    /// Parse every entry; any bad hex string is a configuration error
    pub fn resolve(&self, color: ColorId) -> Result<Palette, ConfigError> {
        let parse = |field: &'static str, value: &str| {
            Rgb::from_hex(value).ok_or_else(|| ConfigError::InvalidColor {
                palette: color.as_str(),
                field,
                value: value.to_string(),
            })
        };
        Ok(Palette {
            background: parse("background", &self.background)?,
            spiral_color: parse("spiral_color", &self.spiral_color)?,
            border_color: parse("border_color", &self.border_color)?,
            pale: parse("pale", &self.pale)?,
            avatar: parse("avatar", &self.avatar)?,
            particles: [
                parse("p1", &self.p1)?,
                parse("p2", &self.p2)?,
                parse("p3", &self.p3)?,
                parse("p4", &self.p4)?,
            ],
        })
    }
}

/// Validated palette for one color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub spiral_color: Rgb,
    pub border_color: Rgb,
    /// Paths of a color other than the current one
    pub pale: Rgb,
    pub avatar: Rgb,
    /// Particle gradient (p1..p4)
    pub particles: [Rgb; 4],
}

impl Palette {
    /// Sample the particle gradient at `proportion` of a particle's life
    pub fn particle_color(&self, proportion: f32) -> Rgb {
        let scaled = proportion.clamp(0.0, 1.0) * (self.particles.len() - 1) as f32;
        let i = (scaled.floor() as usize).min(self.particles.len() - 2);
        self.particles[i].lerp(self.particles[i + 1], scaled - i as f32)
    }
}

/// All four palettes, indexed by `ColorId`
#[derive(Debug, Clone)]
pub struct Palettes([Palette; 4]);

impl Palettes {
    pub fn get(&self, color: ColorId) -> &Palette {
        &self.0[color.index()]
    }

    pub fn from_specs(specs: &[PaletteSpec; 4]) -> Result<Self, ConfigError> {
        Ok(Self([
            specs[0].resolve(ColorId::Blue)?,
            specs[1].resolve(ColorId::Red)?,
            specs[2].resolve(ColorId::Green)?,
            specs[3].resolve(ColorId::Yellow)?,
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("#FFBB00"), Some(Rgb::new(255, 187, 0)));
        assert_eq!(Rgb::from_hex("203065"), Some(Rgb::new(0x20, 0x30, 0x65)));
        assert_eq!(Rgb::from_hex("#FFF"), None);
        assert_eq!(Rgb::from_hex("#GG0000"), None);
    }

    #[test]
    fn test_default_palettes_resolve() {
        for color in ColorId::ALL {
            let palette = PaletteSpec::default_for(color).resolve(color);
            assert!(palette.is_ok(), "{} palette failed", color.as_str());
        }
    }

    #[test]
    fn test_invalid_palette_entry_is_reported() {
        let mut spec = PaletteSpec::default_for(ColorId::Green);
        spec.pale = "not-a-color".to_string();
        match spec.resolve(ColorId::Green) {
            Err(ConfigError::InvalidColor { palette, field, .. }) => {
                assert_eq!(palette, "green");
                assert_eq!(field, "pale");
            }
            other => panic!("expected InvalidColor, got {:?}", other),
        }
    }

    #[test]
    fn test_color_id_round_trip_names() {
        for color in ColorId::ALL {
            assert_eq!(ColorId::from_str(color.as_str()), Some(color));
        }
        assert_eq!(ColorId::from_str("Purple"), None);
        assert_eq!(ColorId::from_str("YELLOW"), Some(ColorId::Yellow));
    }

    #[test]
    fn test_particle_gradient_endpoints() {
        let palette = PaletteSpec::default_for(ColorId::Blue)
            .resolve(ColorId::Blue)
            .unwrap();
        assert_eq!(palette.particle_color(0.0), palette.particles[0]);
        assert_eq!(palette.particle_color(1.0), palette.particles[3]);
    }
}
