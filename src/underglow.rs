use core::cell::Cell;

use critical_section::Mutex;
use embassy_futures::join::join;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::{Mutex as SinkMutex, MutexGuard};
use log::{debug, error, info, trace, warn};

use crate::color::{BLACK, Rgb};
use crate::config::UnderglowConfig;
use crate::error::UnderglowError;
use crate::scheduler::TickScheduler;
use crate::state::LightingState;
use crate::{OutputSink, SinkLocator};

type SinkGuard<'a, S> = MutexGuard<'a, CriticalSectionRawMutex, S>;

/// Underglow controller - the main orchestrator
///
/// Owns the lighting state, the frame buffer of `N` LEDs, the output sink
/// and the tick scheduler. Adjustments may be called from any context
/// while the animation runs: every state update and every render happen
/// inside a critical section, so a tick sees either all of an adjustment
/// or none of it.
///
/// Frames are pushed outside of critical sections. The sink sits behind
/// its own lock, which a tick takes together with the state check and
/// releases together with the re-check after the push. A toggle-off that
/// finds the sink taken leaves the black frame to that tick.
///
/// Without a sink the controller is inert and every call returns
/// [`UnderglowError::NotReady`].
pub struct Underglow<S: OutputSink, const N: usize> {
    config: UnderglowConfig,
    state: Mutex<Cell<LightingState>>,
    frame: Mutex<Cell<[Rgb; N]>>,
    sink: Option<SinkMutex<CriticalSectionRawMutex, S>>,
    scheduler: TickScheduler,
}

impl<S: OutputSink, const N: usize> Underglow<S, N> {
    /// Look up the LED strip and start the animation
    ///
    /// If the locator does not know the strip, the controller is inert.
    pub fn new<L>(locator: &mut L, config: UnderglowConfig) -> Self
    where
        L: SinkLocator<Sink = S>,
    {
        match locator.find_output_sink(config.strip_id) {
            Some(sink) => {
                info!("Found LED strip device {}", config.strip_id);
                Self::with_sink(sink, config)
            }
            None => {
                error!("LED strip device {} not found", config.strip_id);
                Self::inert(config)
            }
        }
    }

    /// Start the animation on an already opened sink
    pub fn with_sink(sink: S, config: UnderglowConfig) -> Self {
        let underglow = Self {
            sink: Some(SinkMutex::new(sink)),
            ..Self::inert(config)
        };
        underglow.scheduler.resume();
        underglow
    }

    /// Create a controller without a strip
    pub fn inert(config: UnderglowConfig) -> Self {
        Self {
            config,
            state: Mutex::new(Cell::new(LightingState::default())),
            frame: Mutex::new(Cell::new([BLACK; N])),
            sink: None,
            scheduler: TickScheduler::new(config.tick_interval),
        }
    }

    /// Check if the strip was found at startup
    pub const fn is_ready(&self) -> bool {
        self.sink.is_some()
    }

    pub const fn config(&self) -> &UnderglowConfig {
        &self.config
    }

    pub const fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    /// Snapshot of the lighting state
    pub fn state(&self) -> LightingState {
        critical_section::with(|cs| self.state.borrow(cs).get())
    }

    /// Copy of the last rendered frame
    ///
    /// The frame is kept even if pushing it to the strip failed.
    pub fn frame(&self) -> Option<[Rgb; N]> {
        self.is_ready()
            .then(|| critical_section::with(|cs| self.frame.borrow(cs).get()))
    }

    /// Select the next (`direction > 0`) or previous effect
    pub fn cycle_effect(&self, direction: i32) -> Result<LightingState, UnderglowError<S::Error>> {
        self.adjust("cycle effect", |state| state.cycle_effect(direction))
    }

    pub fn change_hue(&self, direction: i32) -> Result<LightingState, UnderglowError<S::Error>> {
        let step = self.config.hue_step;
        self.adjust("change hue", |state| state.change_hue(direction, step))
    }

    pub fn change_saturation(
        &self,
        direction: i32,
    ) -> Result<LightingState, UnderglowError<S::Error>> {
        let step = self.config.saturation_step;
        self.adjust("change saturation", |state| {
            state.change_saturation(direction, step);
        })
    }

    pub fn change_brightness(
        &self,
        direction: i32,
    ) -> Result<LightingState, UnderglowError<S::Error>> {
        let step = self.config.brightness_step;
        self.adjust("change brightness", |state| {
            state.change_brightness(direction, step);
        })
    }

    pub fn change_speed(&self, direction: i32) -> Result<LightingState, UnderglowError<S::Error>> {
        self.adjust("change speed", |state| state.change_speed(direction))
    }

    /// Switch the underglow on or off
    ///
    /// Switching off blanks the strip immediately and stops the ticks.
    /// Switching on restarts the animation phase and the ticks.
    pub fn toggle(&self) -> Result<LightingState, UnderglowError<S::Error>> {
        let sink = self.sink.as_ref().ok_or(UnderglowError::NotReady)?;

        let (state, guard) = critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            state.toggle();
            cell.set(state);

            if state.on {
                return (state, None);
            }
            self.frame.borrow(cs).set([BLACK; N]);
            (state, sink.try_lock().ok())
        });

        if state.on {
            info!("underglow: on");
            self.scheduler.resume();
            return Ok(state);
        }

        info!("underglow: off");
        self.scheduler.suspend();
        match guard {
            Some(mut sink) => sink.push_frame(&[BLACK; N]).map_err(UnderglowError::Io)?,
            None => debug!("underglow: strip busy, the running tick blanks it"),
        }
        Ok(state)
    }

    /// Render one frame with the selected effect and push it to the strip
    ///
    /// Does nothing while the underglow is off. The animation phase advances
    /// even if the push fails.
    pub fn tick(&self) -> Result<(), UnderglowError<S::Error>> {
        let sink = self.sink.as_ref().ok_or(UnderglowError::NotReady)?;

        let Some((mut guard, frame)) = critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            if !state.on {
                return None;
            }
            let Ok(guard) = sink.try_lock() else {
                trace!("underglow: strip busy, tick skipped");
                return None;
            };

            let frame_cell = self.frame.borrow(cs);
            let mut frame = frame_cell.get();
            let effect = state.current_effect;
            effect.render(&mut state, &mut frame);
            frame_cell.set(frame);
            cell.set(state);
            Some((guard, frame))
        }) else {
            return Ok(());
        };

        let pushed = guard.push_frame(&frame);

        // Checked and released in one critical section, a toggle-off either
        // lands before the check or finds the sink free
        match self.release_if_on(guard) {
            None => pushed.map_err(UnderglowError::Io),
            Some(mut sink) => {
                debug!("underglow: switched off during tick, blanking strip");
                pushed
                    .and(sink.push_frame(&[BLACK; N]))
                    .map_err(UnderglowError::Io)
            }
        }
    }

    /// Wait for the next scheduled tick and process it
    ///
    /// Push failures are logged, there is no caller to report them to.
    pub async fn process_next_tick(&self) {
        self.scheduler.wait_tick().await;
        if let Err(error) = self.tick() {
            warn!("underglow: tick failed: {}", error);
        }
    }

    /// Run the timer and the tick worker
    ///
    /// Returns immediately if the controller is inert.
    pub async fn run(&self) {
        if !self.is_ready() {
            warn!("underglow: no LED strip, animation disabled");
            return;
        }

        join(self.scheduler.run(), async {
            loop {
                self.process_next_tick().await;
            }
        })
        .await;
    }

    /// Drop the sink lock unless the underglow was switched off meanwhile
    fn release_if_on<'a>(&self, guard: SinkGuard<'a, S>) -> Option<SinkGuard<'a, S>> {
        critical_section::with(|cs| (!self.state.borrow(cs).get().on).then_some(guard))
    }

    fn adjust(
        &self,
        operation: &str,
        update: impl FnOnce(&mut LightingState),
    ) -> Result<LightingState, UnderglowError<S::Error>> {
        if !self.is_ready() {
            return Err(UnderglowError::NotReady);
        }

        let state = critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            update(&mut state);
            cell.set(state);
            state
        });
        debug!("underglow: {}: {:?}", operation, state);

        Ok(state)
    }
}
