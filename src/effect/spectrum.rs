//! Spectrum effect
//!
//! The whole strip shows one hue that rotates around the color wheel.

use super::Effect;
use crate::{
    color::{HUE_CIRCLE, Hsb, Rgb, fill, hsb_to_rgb},
    state::LightingState,
};

/// Spectrum cycling effect
#[derive(Debug, Clone, Copy, Default)]
pub struct SpectrumEffect;

impl Effect for SpectrumEffect {
    fn render(&self, state: &mut LightingState, leds: &mut [Rgb]) {
        let hue = state.animation_step % HUE_CIRCLE;
        fill(
            leds,
            hsb_to_rgb(Hsb::new(hue, state.saturation, state.brightness)),
        );

        state.animation_step = (hue + u16::from(state.animation_speed)) % HUE_CIRCLE;
    }
}
