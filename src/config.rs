//! Startup configuration

use embassy_time::Duration;

/// Default strip identifier looked up at startup
pub const DEFAULT_STRIP_ID: &str = "underglow";

/// Default period between animation ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(50);

pub const DEFAULT_HUE_STEP: u16 = 10;
pub const DEFAULT_SATURATION_STEP: u8 = 10;
pub const DEFAULT_BRIGHTNESS_STEP: u8 = 10;

/// Configuration for the underglow controller
///
/// The number of LEDs is not part of the configuration: it is the `N`
/// parameter of [`crate::Underglow`] and fixed at compile time.
#[derive(Debug, Clone, Copy)]
pub struct UnderglowConfig {
    /// Identifier passed to the [`crate::SinkLocator`]
    pub strip_id: &'static str,
    /// Period between animation ticks
    pub tick_interval: Duration,
    /// Degrees added to hue per adjustment step
    pub hue_step: u16,
    /// Percent added to saturation per adjustment step
    pub saturation_step: u8,
    /// Percent added to brightness per adjustment step
    pub brightness_step: u8,
}

impl Default for UnderglowConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STRIP_ID)
    }
}

impl UnderglowConfig {
    pub const fn new(strip_id: &'static str) -> Self {
        Self {
            strip_id,
            tick_interval: DEFAULT_TICK_INTERVAL,
            hue_step: DEFAULT_HUE_STEP,
            saturation_step: DEFAULT_SATURATION_STEP,
            brightness_step: DEFAULT_BRIGHTNESS_STEP,
        }
    }

    /// Set the tick period
    #[must_use]
    pub const fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Set the hue step in degrees
    #[must_use]
    pub const fn with_hue_step(mut self, step: u16) -> Self {
        self.hue_step = step;
        self
    }

    /// Set the saturation step in percent
    #[must_use]
    pub const fn with_saturation_step(mut self, step: u8) -> Self {
        self.saturation_step = step;
        self
    }

    /// Set the brightness step in percent
    #[must_use]
    pub const fn with_brightness_step(mut self, step: u8) -> Self {
        self.brightness_step = step;
        self
    }
}
