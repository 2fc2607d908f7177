//! Hardware-independent core of the pico-gamepad firmware.
//!
//! This crate holds the pure logic that can be tested on the host (no
//! embedded hardware required): button sampling behind the `InputLines`
//! capability, mask → report encoding, the poll/send state machine and
//! the status LED policy.
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary (main.rs, `--features embedded`) adds the
//! embassy USB stack and drives these types from async tasks.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod gamepad;
pub mod input;
pub mod poll;
pub mod status_logic;

pub use error::Error;
pub use gamepad::{encode, GamepadReport, Hat};
pub use input::{ButtonMask, InputLines, LogicalButton, Sampler};
pub use poll::{PollTask, ReportSink, Tick};
