//! Hue/saturation/brightness color model
//!
//! Hue is measured in whole degrees, saturation and brightness in percent.
//! Conversion goes through `f32` with `libm` so it stays usable in `no_std`.

use libm::{floorf, roundf};

use crate::color::Rgb;

/// Number of degrees in the hue circle
pub const HUE_CIRCLE: u16 = 360;

const PERCENT_MAX: u8 = 100;
const SECTOR_DEGREES: f32 = 60.0;

/// Color in the HSB model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hsb {
    /// Hue in degrees (0-359)
    pub hue: u16,
    /// Saturation in percent (0-100)
    pub saturation: u8,
    /// Brightness in percent (0-100)
    pub brightness: u8,
}

impl Hsb {
    pub const fn new(hue: u16, saturation: u8, brightness: u8) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }
}

impl From<Hsb> for Rgb {
    fn from(hsb: Hsb) -> Self {
        hsb_to_rgb(hsb)
    }
}

/// Convert an HSB color to 8-bit RGB
///
/// Hue is taken modulo 360 and percentages are capped at 100, so any input
/// produces a valid color.
#[allow(clippy::many_single_char_names)]
pub fn hsb_to_rgb(hsb: Hsb) -> Rgb {
    let hue = f32::from(hsb.hue % HUE_CIRCLE);
    let v = f32::from(hsb.brightness.min(PERCENT_MAX)) / f32::from(PERCENT_MAX);
    let s = f32::from(hsb.saturation.min(PERCENT_MAX)) / f32::from(PERCENT_MAX);

    let position = hue / SECTOR_DEGREES;
    let sector = floorf(position);
    let f = position - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (r, g, b) = match (sector as u8) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(component: f32) -> u8 {
    roundf(component * 255.0).clamp(0.0, 255.0) as u8
}
