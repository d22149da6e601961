//! Effect system with compile-time known effect variants
//!
//! Effects keep no state of their own: the animation phase lives in
//! [`LightingState::animation_step`], so switching effects is just a tag
//! change. Each effect implements the `Effect` trait.

mod breathe;
mod solid;
mod spectrum;
mod swirl;

pub use breathe::{BREATHE_CYCLE, BreatheEffect};
pub use solid::SolidEffect;
pub use spectrum::SpectrumEffect;
pub use swirl::SwirlEffect;

use crate::{color::Rgb, state::LightingState};

const EFFECT_NAME_SOLID: &str = "solid";
const EFFECT_NAME_BREATHE: &str = "breathe";
const EFFECT_NAME_SPECTRUM: &str = "spectrum";
const EFFECT_NAME_SWIRL: &str = "swirl";

const EFFECT_ID_SOLID: u8 = 0;
const EFFECT_ID_BREATHE: u8 = 1;
const EFFECT_ID_SPECTRUM: u8 = 2;
const EFFECT_ID_SWIRL: u8 = 3;

pub trait Effect {
    /// Render a single frame and advance the animation phase
    fn render(&self, state: &mut LightingState, leds: &mut [Rgb]);
}

/// Known effect ids, in cycling order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum EffectId {
    #[default]
    Solid = EFFECT_ID_SOLID,
    Breathe = EFFECT_ID_BREATHE,
    Spectrum = EFFECT_ID_SPECTRUM,
    Swirl = EFFECT_ID_SWIRL,
}

impl EffectId {
    /// All effects in cycling order
    pub const ALL: [Self; 4] = [Self::Solid, Self::Breathe, Self::Spectrum, Self::Swirl];

    /// Number of effects
    pub const COUNT: usize = Self::ALL.len();

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_SOLID => Self::Solid,
            EFFECT_ID_BREATHE => Self::Breathe,
            EFFECT_ID_SPECTRUM => Self::Spectrum,
            EFFECT_ID_SWIRL => Self::Swirl,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => EFFECT_NAME_SOLID,
            Self::Breathe => EFFECT_NAME_BREATHE,
            Self::Spectrum => EFFECT_NAME_SPECTRUM,
            Self::Swirl => EFFECT_NAME_SWIRL,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_SOLID => Some(Self::Solid),
            EFFECT_NAME_BREATHE => Some(Self::Breathe),
            EFFECT_NAME_SPECTRUM => Some(Self::Spectrum),
            EFFECT_NAME_SWIRL => Some(Self::Swirl),
            _ => None,
        }
    }

    /// Move `direction` places through the effect list, wrapping at both ends
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cycle(self, direction: i32) -> Self {
        let count = Self::COUNT as i32;
        let index = (i32::from(self as u8) + direction.rem_euclid(count)) % count;
        Self::ALL[index as usize]
    }

    /// Render the effect into `leds`
    pub fn render(self, state: &mut LightingState, leds: &mut [Rgb]) {
        match self {
            Self::Solid => SolidEffect.render(state, leds),
            Self::Breathe => BreatheEffect.render(state, leds),
            Self::Spectrum => SpectrumEffect.render(state, leds),
            Self::Swirl => SwirlEffect.render(state, leds),
        }
    }
}
