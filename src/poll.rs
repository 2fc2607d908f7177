//! Fixed-rate poll/send task.
//!
//! Every `interval_ms` the buttons are sampled and, when the host can take
//! it, one gamepad report is handed to the transport:
//!
//! - buttons pressed: send the encoded report
//! - nothing pressed right after a pressed report: send one centered report
//! - nothing pressed otherwise: send nothing
//!
//! While the bus is suspended a press asks the host to resume instead.
//! Ticks where the transport is busy are dropped; the next tick samples
//! fresh state.

use crate::error::Error;
use crate::gamepad::{self, GamepadReport, REPORT_ID_GAMEPAD};
use crate::input::{InputLines, Sampler};

/// Transport the poll task pushes reports into.
pub trait ReportSink {
    /// The host has configured the device and a report can be queued now.
    fn is_ready(&self) -> bool;

    /// The host has suspended the bus.
    fn is_suspended(&self) -> bool;

    /// Queue one report. `report` excludes the report ID byte.
    fn send(&mut self, report_id: u8, report: &[u8]) -> Result<(), Error>;

    /// Ask the host to resume the bus.
    fn request_wakeup(&mut self);
}

/// What a call to [`PollTask::poll`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// Less than one interval since the previous tick.
    NotDue,
    /// Suspended with buttons pressed; wakeup requested, nothing sent.
    WakeupRequested,
    /// The transport could not take a report this tick.
    NotReady,
    /// Nothing pressed and the host already has a centered report.
    Idle,
    /// Report handed to the transport.
    Sent(GamepadReport),
    /// The transport rejected the report.
    Dropped(Error),
}

/// Poll task state: the tick clock and whether the last report sent had
/// buttons pressed.
#[derive(Debug)]
pub struct PollTask {
    interval_ms: u64,
    start_ms: u64,
    has_pressed: bool,
}

impl PollTask {
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            start_ms: 0,
            has_pressed: false,
        }
    }

    /// Time at which the next tick becomes due.
    pub fn next_due_ms(&self) -> u64 {
        self.start_ms + self.interval_ms
    }

    /// `true` if the last report handed to the transport had buttons pressed.
    pub fn has_pressed(&self) -> bool {
        self.has_pressed
    }

    /// Run one tick if it is due at `now_ms`.
    ///
    /// The tick clock advances by exactly one interval per due call, so a
    /// caller that fell behind catches up on the following calls.
    pub fn poll<L, S>(&mut self, now_ms: u64, sampler: &mut Sampler<L>, sink: &mut S) -> Tick
    where
        L: InputLines,
        S: ReportSink,
    {
        if now_ms.saturating_sub(self.start_ms) < self.interval_ms {
            return Tick::NotDue;
        }
        self.start_ms += self.interval_ms;

        let mask = sampler.sample();

        if sink.is_suspended() && !mask.is_empty() {
            sink.request_wakeup();
            return Tick::WakeupRequested;
        }

        if !sink.is_ready() {
            return Tick::NotReady;
        }

        let pressed = !mask.is_empty();
        if !pressed && !self.has_pressed {
            return Tick::Idle;
        }

        let report = gamepad::encode(mask);
        match sink.send(REPORT_ID_GAMEPAD, &report.to_bytes()) {
            Ok(()) => {
                self.has_pressed = pressed;
                Tick::Sent(report)
            }
            Err(e) => Tick::Dropped(e),
        }
    }
}
