//! USB Device subsystem - presents a HID gamepad to the host.
//!
//! The RP2040's built-in USB 1.1 Full-Speed controller is driven by
//! `embassy-usb`. The device exposes a single HID interface with one
//! interrupt IN endpoint carrying report ID 1.
//!
//! The poll loop never touches the endpoint directly: it queues reports
//! through [`hid_device::UsbReportSink`], and the HID writer task moves
//! them to the endpoint.

pub mod hid_device;
