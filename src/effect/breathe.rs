//! Breathing effect
//!
//! Brightness follows a triangular wave over the phase: full at both ends
//! of the cycle and dark in the middle. The state's own brightness is not
//! used.

use super::Effect;
use crate::{
    color::{Hsb, Rgb, fill, hsb_to_rgb},
    state::LightingState,
};

/// Length of one breathing cycle in phase units
pub const BREATHE_CYCLE: u16 = 2400;

const BREATHE_MIDPOINT: u16 = BREATHE_CYCLE / 2;
/// Phase units per brightness percent
const BREATHE_SCALE: u16 = 12;
/// Phase units added per tick for each speed level
const BREATHE_SPEED_FACTOR: u16 = 10;

/// Breathing effect
#[derive(Debug, Clone, Copy, Default)]
pub struct BreatheEffect;

impl BreatheEffect {
    /// Brightness in percent at the given phase
    #[allow(clippy::cast_possible_truncation)]
    pub const fn brightness_at(step: u16) -> u8 {
        let step = if step > BREATHE_CYCLE { BREATHE_CYCLE } else { step };
        (step.abs_diff(BREATHE_MIDPOINT) / BREATHE_SCALE) as u8
    }
}

impl Effect for BreatheEffect {
    fn render(&self, state: &mut LightingState, leds: &mut [Rgb]) {
        let hsb = Hsb::new(
            state.hue,
            state.saturation,
            Self::brightness_at(state.animation_step),
        );
        fill(leds, hsb_to_rgb(hsb));

        // Past the end of the cycle the phase restarts from 0 instead of wrapping
        let next = state
            .animation_step
            .saturating_add(u16::from(state.animation_speed) * BREATHE_SPEED_FACTOR);
        state.animation_step = if next > BREATHE_CYCLE { 0 } else { next };
    }
}
