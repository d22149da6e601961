#![no_std]

pub mod color;
pub mod config;
pub mod driver;
pub mod effect;
pub mod error;
pub mod scheduler;
pub mod state;
pub mod underglow;

pub use color::{BLACK, Hsb, Rgb, hsb_to_rgb};
pub use config::UnderglowConfig;
pub use driver::SmartLedsSink;
pub use effect::{Effect, EffectId};
pub use error::UnderglowError;
pub use scheduler::{SchedulerState, TickScheduler};
pub use state::LightingState;
pub use underglow::Underglow;

pub use embassy_time::Duration;

/// Abstract LED strip transport
///
/// Implement this trait to support different hardware platforms.
/// The underglow controller is generic over this trait.
pub trait OutputSink {
    type Error: core::fmt::Debug;

    /// Write one frame of colors to the LED strip
    fn push_frame(&mut self, frame: &[Rgb]) -> Result<(), Self::Error>;
}

/// Finds the LED strip at startup
pub trait SinkLocator {
    type Sink: OutputSink;

    /// Look up the strip by its identifier
    fn find_output_sink(&mut self, id: &str) -> Option<Self::Sink>;
}

/// Route `log` output through `esp-println`
#[cfg(feature = "esp32-log")]
pub fn init_esp_logger(level: log::LevelFilter) {
    esp_println::logger::init_logger(level);
}
