//! Lighting state and bounded adjustments
//!
//! `hue` and the selected effect wrap around, saturation, brightness and
//! speed are clamped to their ranges.

use crate::color::Hsb;
use crate::effect::EffectId;

/// Largest hue the adjustments can reach before wrapping back to 0
pub const HUE_MAX: u16 = 350;
pub const SATURATION_MAX: u8 = 100;
pub const BRIGHTNESS_MAX: u8 = 100;
pub const SPEED_MIN: u8 = 1;
pub const SPEED_MAX: u8 = 5;

const DEFAULT_SPEED: u8 = 3;

/// Current underglow settings and animation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightingState {
    /// Hue in degrees (0-350)
    pub hue: u16,
    /// Saturation in percent (0-100)
    pub saturation: u8,
    /// Brightness in percent (0-100)
    pub brightness: u8,
    /// Animation speed (1-5)
    pub animation_speed: u8,
    /// Selected effect
    pub current_effect: EffectId,
    /// Effect-local phase accumulator
    pub animation_step: u16,
    /// Whether the strip is lit
    pub on: bool,
}

impl Default for LightingState {
    fn default() -> Self {
        Self {
            hue: 0,
            saturation: SATURATION_MAX,
            brightness: BRIGHTNESS_MAX,
            animation_speed: DEFAULT_SPEED,
            current_effect: EffectId::Solid,
            animation_step: 0,
            on: true,
        }
    }
}

impl LightingState {
    /// Base color of the state
    pub const fn hsb(&self) -> Hsb {
        Hsb::new(self.hue, self.saturation, self.brightness)
    }

    /// Select another effect, wrapping over the effect list
    ///
    /// The animation phase restarts whenever the effect changes.
    pub fn cycle_effect(&mut self, direction: i32) {
        if direction == 0 {
            return;
        }
        self.current_effect = self.current_effect.cycle(direction);
        self.animation_step = 0;
    }

    /// Flip the power flag and return the new value
    pub fn toggle(&mut self) -> bool {
        self.on = !self.on;
        if self.on {
            self.animation_step = 0;
        }
        self.on
    }

    /// Shift hue by `direction` steps
    ///
    /// Going below 0 lands on [`HUE_MAX`], going above it lands on 0.
    pub fn change_hue(&mut self, direction: i32, step: u16) {
        let next = offset(i32::from(self.hue), direction, i32::from(step));
        self.hue = if next < 0 {
            HUE_MAX
        } else if next > i32::from(HUE_MAX) {
            0
        } else {
            narrow(next)
        };
    }

    pub fn change_saturation(&mut self, direction: i32, step: u8) {
        self.saturation = clamp_percent(self.saturation, direction, step, SATURATION_MAX);
    }

    pub fn change_brightness(&mut self, direction: i32, step: u8) {
        self.brightness = clamp_percent(self.brightness, direction, step, BRIGHTNESS_MAX);
    }

    pub fn change_speed(&mut self, direction: i32) {
        let next = offset(i32::from(self.animation_speed), direction, 1);
        self.animation_speed = narrow(next.clamp(i32::from(SPEED_MIN), i32::from(SPEED_MAX)));
    }
}

#[inline]
const fn offset(value: i32, direction: i32, step: i32) -> i32 {
    value.saturating_add(direction.saturating_mul(step))
}

fn clamp_percent(value: u8, direction: i32, step: u8, max: u8) -> u8 {
    let next = offset(i32::from(value), direction, i32::from(step));
    narrow(next.clamp(0, i32::from(max)))
}

/// Narrow an already range-checked value
#[inline]
fn narrow<T: TryFrom<i32> + Default>(value: i32) -> T {
    T::try_from(value).unwrap_or_default()
}
