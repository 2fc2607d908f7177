//! USB HID gamepad report.
//!
//! Layout (7 bytes, packed, little-endian):
//! ```text
//! Byte 0:   X  (signed, always 0)
//! Byte 1:   Y  (signed, always 0)
//! Byte 2:   Z  (signed, always 0)
//! Byte 3:   Rz (signed, always 0)
//! Byte 4:   Hat switch (0 = centered, 1..=8 = Up, clockwise)
//! Byte 5-6: Button bitfield (u16 LE)
//! ```
//! On the endpoint the report is preceded by [`REPORT_ID_GAMEPAD`].

use super::hat::Hat;

/// Gamepad report size in bytes, without the report ID.
pub const GAMEPAD_REPORT_SIZE: usize = 7;

/// The only report ID this device uses.
pub const REPORT_ID_GAMEPAD: u8 = 1;

// Output button bits (standard gamepad button numbering).

pub const GAMEPAD_BUTTON_A: u16 = 1 << 0;
pub const GAMEPAD_BUTTON_B: u16 = 1 << 1;
pub const GAMEPAD_BUTTON_X: u16 = 1 << 3;
pub const GAMEPAD_BUTTON_Y: u16 = 1 << 4;
pub const GAMEPAD_BUTTON_TL: u16 = 1 << 6;
pub const GAMEPAD_BUTTON_TR: u16 = 1 << 7;
pub const GAMEPAD_BUTTON_TL2: u16 = 1 << 8;
pub const GAMEPAD_BUTTON_TR2: u16 = 1 << 9;
pub const GAMEPAD_BUTTON_SELECT: u16 = 1 << 10;
pub const GAMEPAD_BUTTON_START: u16 = 1 << 11;
pub const GAMEPAD_BUTTON_MODE: u16 = 1 << 12;

/// Gamepad input report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GamepadReport {
    /// Analog axes - no analog inputs are wired, always 0.
    pub x: i8,
    pub y: i8,
    pub z: i8,
    pub rz: i8,
    /// D-pad direction.
    pub hat: Hat,
    /// Button bitfield, see `GAMEPAD_BUTTON_*`.
    pub buttons: u16,
}

impl GamepadReport {
    /// All axes zero, hat centered, no buttons.
    pub const CENTERED: Self = Self {
        x: 0,
        y: 0,
        z: 0,
        rz: 0,
        hat: Hat::Centered,
        buttons: 0,
    };

    /// Serialise into a byte slice for USB HID transmission.
    /// Returns the number of bytes written (7, or 0 if `buf` is too small).
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < GAMEPAD_REPORT_SIZE {
            return 0;
        }
        buf[..GAMEPAD_REPORT_SIZE].copy_from_slice(&self.to_bytes());
        GAMEPAD_REPORT_SIZE
    }

    pub fn to_bytes(&self) -> [u8; GAMEPAD_REPORT_SIZE] {
        let buttons = self.buttons.to_le_bytes();
        [
            self.x as u8,
            self.y as u8,
            self.z as u8,
            self.rz as u8,
            self.hat.value(),
            buttons[0],
            buttons[1],
        ]
    }

    /// Returns `true` when nothing is pressed.
    pub fn is_idle(&self) -> bool {
        *self == Self::CENTERED
    }
}

// USB HID report descriptor matching the layout above

/// USB HID Report Descriptor for the gamepad.
///
///   - Report ID 1
///   - 4 signed 8-bit axes (X, Y, Z, Rz)
///   - 8-bit hat switch with null state
///   - 16 buttons
pub const GAMEPAD_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x05, // Usage (Gamepad)
    0xA1, 0x01, // Collection (Application)
    0x85, REPORT_ID_GAMEPAD, //   Report ID (1)
    //
    //   - X, Y, Z, Rz (4 × i8) -
    0x05, 0x01, //   Usage Page (Generic Desktop)
    0x09, 0x30, //   Usage (X)
    0x09, 0x31, //   Usage (Y)
    0x09, 0x32, //   Usage (Z)
    0x09, 0x35, //   Usage (Rz)
    0x15, 0x81, //   Logical Minimum (-127)
    0x25, 0x7F, //   Logical Maximum (127)
    0x95, 0x04, //   Report Count (4)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    //   - Hat switch (1 byte) -
    0x05, 0x01, //   Usage Page (Generic Desktop)
    0x09, 0x39, //   Usage (Hat switch)
    0x15, 0x01, //   Logical Minimum (1)
    0x25, 0x08, //   Logical Maximum (8)
    0x35, 0x00, //   Physical Minimum (0)
    0x46, 0x3B, 0x01, // Physical Maximum (315)
    0x95, 0x01, //   Report Count (1)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x42, //   Input (Data, Variable, Absolute, Null State)
    //
    //   - Buttons (16 bits) -
    0x05, 0x09, //   Usage Page (Button)
    0x19, 0x01, //   Usage Minimum (Button 1)
    0x29, 0x10, //   Usage Maximum (Button 16)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x95, 0x10, //   Report Count (16)
    0x75, 0x01, //   Report Size (1)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    0xC0, // End Collection
];
