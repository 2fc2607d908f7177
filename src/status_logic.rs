//! Status LED blink policy.

use crate::config;

/// USB state as far as the status LED cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UsbStatus {
    NotMounted,
    Mounted,
    Suspended,
}

impl UsbStatus {
    pub fn from_flags(configured: bool, suspended: bool) -> Self {
        if suspended {
            UsbStatus::Suspended
        } else if configured {
            UsbStatus::Mounted
        } else {
            UsbStatus::NotMounted
        }
    }

    /// Time between two LED toggles.
    pub fn blink_interval_ms(self) -> u64 {
        match self {
            UsbStatus::NotMounted => config::BLINK_NOT_MOUNTED_MS,
            UsbStatus::Mounted => config::BLINK_MOUNTED_MS,
            UsbStatus::Suspended => config::BLINK_SUSPENDED_MS,
        }
    }
}

/// Toggles the LED once per blink interval.
#[derive(Debug, Default)]
pub struct Blinker {
    start_ms: u64,
    led_on: bool,
}

impl Blinker {
    pub const fn new() -> Self {
        Self {
            start_ms: 0,
            led_on: false,
        }
    }

    /// Returns the new LED level when a toggle is due at `now_ms`.
    pub fn tick(&mut self, now_ms: u64, status: UsbStatus) -> Option<bool> {
        if now_ms.saturating_sub(self.start_ms) < status.blink_interval_ms() {
            return None;
        }
        self.start_ms += status.blink_interval_ms();
        self.led_on = !self.led_on;
        Some(self.led_on)
    }

    /// Time at which the next toggle becomes due for `status`.
    pub fn next_due_ms(&self, status: UsbStatus) -> u64 {
        self.start_ms + status.blink_interval_ms()
    }
}
