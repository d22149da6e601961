//! Swirl effect
//!
//! Spreads the color wheel evenly along the strip and rotates it.

use super::Effect;
use crate::{
    color::{HUE_CIRCLE, Hsb, Rgb, hsb_to_rgb},
    state::LightingState,
};

/// Phase units added per tick for each speed level
const SWIRL_SPEED_FACTOR: u16 = 2;

/// Rotating rainbow effect
#[derive(Debug, Clone, Copy, Default)]
pub struct SwirlEffect;

impl SwirlEffect {
    /// Hue distance between neighbouring LEDs on a strip of `count` LEDs
    ///
    /// Integer division, so strips longer than 360 LEDs get no spread.
    #[allow(clippy::cast_possible_truncation)]
    pub fn spacing(count: usize) -> u16 {
        usize::from(HUE_CIRCLE)
            .checked_div(count)
            .map_or(0, |spacing| spacing as u16)
    }
}

impl Effect for SwirlEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&self, state: &mut LightingState, leds: &mut [Rgb]) {
        let spacing = usize::from(Self::spacing(leds.len()));
        let phase = usize::from(state.animation_step % HUE_CIRCLE);

        for (i, led) in leds.iter_mut().enumerate() {
            let hue = ((spacing * i + phase) % usize::from(HUE_CIRCLE)) as u16;
            *led = hsb_to_rgb(Hsb::new(hue, state.saturation, state.brightness));
        }

        state.animation_step = (state.animation_step % HUE_CIRCLE
            + u16::from(state.animation_speed) * SWIRL_SPEED_FACTOR)
            % HUE_CIRCLE;
    }
}
