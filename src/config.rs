//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place.

// Input polling

/// Interval between two button samples (ms).
pub const POLL_INTERVAL_MS: u64 = 5;

// GPIO pin assignments (Raspberry Pi Pico)
//
// Every button is wired between its GPIO and GND, the internal pull-up
// keeps the line high while released (active-low).
//
//   R       → GP5      Select → GP9       A → GP12     Left  → GP16
//   ZR      → GP6      Start  → GP10      B → GP13     Down  → GP17
//   L       → GP7      Mode   → GP11      X → GP14     Up    → GP18
//   ZL      → GP8                         Y → GP15     Right → GP19
//
// The embassy pin singletons are picked in `main.rs`; keep them in sync.

pub const GPIO_BUTTON_R: u8 = 5;
pub const GPIO_BUTTON_ZR: u8 = 6;
pub const GPIO_BUTTON_L: u8 = 7;
pub const GPIO_BUTTON_ZL: u8 = 8;

pub const GPIO_BUTTON_SELECT: u8 = 9;
pub const GPIO_BUTTON_START: u8 = 10;
pub const GPIO_BUTTON_MODE: u8 = 11;

pub const GPIO_BUTTON_A: u8 = 12;
pub const GPIO_BUTTON_B: u8 = 13;
pub const GPIO_BUTTON_X: u8 = 14;
pub const GPIO_BUTTON_Y: u8 = 15;

pub const GPIO_LEFT: u8 = 16;
pub const GPIO_DOWN: u8 = 17;
pub const GPIO_UP: u8 = 18;
pub const GPIO_RIGHT: u8 = 19;

/// On-board status LED.
pub const GPIO_STATUS_LED: u8 = 25;

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0001;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "pico-gamepad";
pub const USB_PRODUCT: &str = "Pico 15-Button Gamepad";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// USB HID endpoint polling interval (ms).
pub const USB_HID_POLL_MS: u8 = 1;

/// Reports that may wait for the HID endpoint before the sink reports busy.
pub const REPORT_QUEUE_DEPTH: usize = 2;

// Status LED

/// Blink period while the device is not enumerated (ms).
pub const BLINK_NOT_MOUNTED_MS: u64 = 250;

/// Blink period while the device is configured by the host (ms).
pub const BLINK_MOUNTED_MS: u64 = 1000;

/// Blink period while the bus is suspended (ms).
pub const BLINK_SUSPENDED_MS: u64 = 2500;
