//! Solid color fill effect
//!
//! Fills all LEDs with the state's hue, saturation and brightness.

use super::Effect;
use crate::{
    color::{Rgb, fill, hsb_to_rgb},
    state::LightingState,
};

/// Solid color effect - no animation
#[derive(Debug, Clone, Copy, Default)]
pub struct SolidEffect;

impl Effect for SolidEffect {
    fn render(&self, state: &mut LightingState, leds: &mut [Rgb]) {
        fill(leds, hsb_to_rgb(state.hsb()));
    }
}
