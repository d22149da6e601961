//! Tick scheduling
//!
//! The scheduler owns the timer side of the animation: while running it
//! submits a tick on every interval, while suspended it stays disarmed.
//! Ticks are submitted through a [`Signal`], so submissions coalesce and at
//! most one tick is ever pending. The controller's worker drains them one at
//! a time, which keeps frame computation strictly serialized.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};
use log::{debug, trace};

/// Timer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Timer armed, ticks fire every interval
    Running,
    /// Timer disarmed
    Suspended,
}

/// Periodic tick source with a coalescing work item.
///
/// # Usage
///
/// ```ignore
/// // Timer side, e.g. a dedicated task
/// scheduler.run().await;
///
/// // Worker side
/// loop {
///     scheduler.wait_tick().await;
///     render_and_push();
/// }
/// ```
pub struct TickScheduler {
    interval: Duration,
    state: Mutex<Cell<SchedulerState>>,
    /// Pending tick work item
    ticks: Signal<CriticalSectionRawMutex, ()>,
    /// Raised when the timer must be re-armed
    resumed: Signal<CriticalSectionRawMutex, ()>,
}

impl TickScheduler {
    /// Create a suspended scheduler
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: Mutex::new(Cell::new(SchedulerState::Suspended)),
            ticks: Signal::new(),
            resumed: Signal::new(),
        }
    }

    /// Tick period
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> SchedulerState {
        critical_section::with(|cs| self.state.borrow(cs).get())
    }

    pub fn is_running(&self) -> bool {
        self.state() == SchedulerState::Running
    }

    /// Arm the timer and submit a tick right away
    pub fn resume(&self) {
        critical_section::with(|cs| self.state.borrow(cs).set(SchedulerState::Running));
        debug!("tick scheduler: running every {} ms", self.interval.as_millis());
        self.resumed.signal(());
        self.ticks.signal(());
    }

    /// Disarm the timer and drop any pending tick
    pub fn suspend(&self) {
        critical_section::with(|cs| self.state.borrow(cs).set(SchedulerState::Suspended));
        debug!("tick scheduler: suspended");
        self.ticks.reset();
    }

    /// Submit a tick from a timer context
    ///
    /// Returns `false` without submitting when the scheduler is suspended.
    /// A tick submitted while another one is still pending is merged with it.
    pub fn request_tick(&self) -> bool {
        if !self.is_running() {
            return false;
        }
        if self.ticks.signaled() {
            trace!("tick scheduler: tick already pending");
        }
        self.ticks.signal(());
        true
    }

    /// Check if a tick is waiting to be processed
    pub fn has_pending_tick(&self) -> bool {
        self.ticks.signaled()
    }

    /// Wait until a tick is submitted and consume it
    pub async fn wait_tick(&self) {
        self.ticks.wait().await;
    }

    /// Timer loop
    ///
    /// Submits a tick every interval while running. A resume while armed
    /// restarts the interval from that moment.
    pub async fn run(&self) {
        loop {
            if !self.is_running() {
                self.resumed.wait().await;
                continue;
            }
            self.resumed.reset();

            let mut ticker = Ticker::every(self.interval);
            loop {
                match select(ticker.next(), self.resumed.wait()).await {
                    Either::First(()) => {
                        if !self.request_tick() {
                            break;
                        }
                    }
                    // Re-arm
                    Either::Second(()) => break,
                }
            }
        }
    }
}
