//! Output sink adapters

use core::fmt::Debug;

use smart_leds::SmartLedsWrite;

use crate::{OutputSink, color::Rgb};

/// Adapts any `smart-leds` driver (WS2812 over SPI, RMT, ...) to an
/// [`OutputSink`].
#[derive(Debug)]
pub struct SmartLedsSink<W> {
    writer: W,
}

impl<W> SmartLedsSink<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Release the wrapped driver
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputSink for SmartLedsSink<W>
where
    W: SmartLedsWrite<Color = Rgb>,
    W::Error: Debug,
{
    type Error = W::Error;

    fn push_frame(&mut self, frame: &[Rgb]) -> Result<(), Self::Error> {
        self.writer.write(frame.iter().copied())
    }
}
