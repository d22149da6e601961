mod hsb;

pub use hsb::{HUE_CIRCLE, Hsb, hsb_to_rgb};
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Fill every LED with the same color
pub fn fill(leds: &mut [Rgb], color: Rgb) {
    for led in leds {
        *led = color;
    }
}
