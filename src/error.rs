//! Unified error type for pico-gamepad.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Transport
    /// The host has not configured the device, or the bus is suspended.
    NotReady,

    /// The report queue towards the HID endpoint is full.
    QueueFull,

    /// The HID endpoint was disabled while writing.
    Endpoint,

    /// The host did not accept the remote wakeup request.
    RemoteWakeup,

    // Generic
    /// Buffer too small for the requested operation.
    BufferOverflow,
}
