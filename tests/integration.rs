//! Integration tests for pico-gamepad host-testable logic.
//!
//! Drives the poll task end to end: mock GPIO pins → sampler → encoder →
//! a recording transport, checking the bytes that would reach the host.

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, InputPin};
use pico_gamepad::gamepad::{Hat, GAMEPAD_REPORT_SIZE, REPORT_ID_GAMEPAD};
use pico_gamepad::input::BUTTON_COUNT;
use pico_gamepad::{Error, GamepadReport, LogicalButton, PollTask, ReportSink, Sampler, Tick};

/// GPIO line with a pull-up: high unless the test "presses" it.
#[derive(Clone)]
struct PulledUpPin {
    pressed: Rc<Cell<bool>>,
}

impl ErrorType for PulledUpPin {
    type Error = Infallible;
}

impl InputPin for PulledUpPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.pressed.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.pressed.get())
    }
}

/// Fifteen pins plus handles to press and release them.
struct Board {
    switches: Vec<Rc<Cell<bool>>>,
}

impl Board {
    fn new() -> (Self, [PulledUpPin; BUTTON_COUNT]) {
        let switches: Vec<_> = (0..BUTTON_COUNT).map(|_| Rc::new(Cell::new(false))).collect();
        let pins = core::array::from_fn(|i| PulledUpPin {
            pressed: switches[i].clone(),
        });
        (Self { switches }, pins)
    }

    fn hold(&self, buttons: &[LogicalButton]) {
        for switch in &self.switches {
            switch.set(false);
        }
        for button in buttons {
            self.switches[button.bit() as usize].set(true);
        }
    }
}

/// Transport double recording what the host would receive.
#[derive(Default)]
struct Host {
    configured: bool,
    suspended: bool,
    wakeups: usize,
    frames: Vec<Vec<u8>>,
}

impl ReportSink for Host {
    fn is_ready(&self) -> bool {
        self.configured && !self.suspended
    }

    fn is_suspended(&self) -> bool {
        self.suspended
    }

    fn send(&mut self, report_id: u8, report: &[u8]) -> Result<(), Error> {
        if !self.is_ready() {
            return Err(Error::NotReady);
        }
        let mut frame = vec![report_id];
        frame.extend_from_slice(report);
        self.frames.push(frame);
        Ok(())
    }

    fn request_wakeup(&mut self) {
        self.wakeups += 1;
        self.suspended = false;
    }
}

fn configured_host() -> Host {
    Host {
        configured: true,
        ..Default::default()
    }
}

#[test]
fn up_and_a_reach_the_host_as_one_frame() {
    let (board, pins) = Board::new();
    let mut sampler = Sampler::new(pins);
    let mut host = configured_host();
    let mut task = PollTask::new(5);

    board.hold(&[LogicalButton::Up, LogicalButton::A]);
    let tick = task.poll(5, &mut sampler, &mut host);

    let expected = GamepadReport {
        hat: Hat::Up,
        buttons: 0x0001,
        ..GamepadReport::CENTERED
    };
    assert_eq!(tick, Tick::Sent(expected));
    assert_eq!(host.frames.len(), 1);
    assert_eq!(host.frames[0], [REPORT_ID_GAMEPAD, 0, 0, 0, 0, 1, 0x01, 0x00]);
    assert_eq!(host.frames[0].len(), GAMEPAD_REPORT_SIZE + 1);
}

#[test]
fn tap_produces_press_and_release_only() {
    let (board, pins) = Board::new();
    let mut sampler = Sampler::new(pins);
    let mut host = configured_host();
    let mut task = PollTask::new(5);

    let mut now = 0;
    let mut run = |ticks: u64, host: &mut Host, sampler: &mut Sampler<[PulledUpPin; BUTTON_COUNT]>| {
        for _ in 0..ticks {
            now += 5;
            task.poll(now, sampler, host);
        }
    };

    run(10, &mut host, &mut sampler);
    assert!(host.frames.is_empty());

    board.hold(&[LogicalButton::Right, LogicalButton::Down, LogicalButton::ZR]);
    run(1, &mut host, &mut sampler);
    board.hold(&[]);
    run(20, &mut host, &mut sampler);

    assert_eq!(host.frames.len(), 2);
    assert_eq!(host.frames[0][5], Hat::DownRight.value());
    assert_eq!(u16::from_le_bytes([host.frames[0][6], host.frames[0][7]]), 1 << 9);
    assert_eq!(host.frames[1][1..], GamepadReport::CENTERED.to_bytes());
}

#[test]
fn suspended_host_is_woken_then_receives_reports() {
    let (board, pins) = Board::new();
    let mut sampler = Sampler::new(pins);
    let mut host = Host {
        configured: true,
        suspended: true,
        ..Default::default()
    };
    let mut task = PollTask::new(5);

    // Idle while suspended: no wakeup.
    assert_eq!(task.poll(5, &mut sampler, &mut host), Tick::NotReady);
    assert_eq!(host.wakeups, 0);

    board.hold(&[LogicalButton::Start]);
    assert_eq!(task.poll(10, &mut sampler, &mut host), Tick::WakeupRequested);
    assert_eq!(host.wakeups, 1);
    assert!(host.frames.is_empty());

    // Host resumed: the held button now goes out.
    assert!(matches!(task.poll(15, &mut sampler, &mut host), Tick::Sent(_)));
    assert_eq!(host.frames.len(), 1);
}

#[test]
fn unconfigured_device_never_sends() {
    let (board, pins) = Board::new();
    let mut sampler = Sampler::new(pins);
    let mut host = Host::default();
    let mut task = PollTask::new(5);

    board.hold(&[LogicalButton::A, LogicalButton::Left]);
    for t in 1..=10 {
        assert_eq!(task.poll(t * 5, &mut sampler, &mut host), Tick::NotReady);
    }
    assert!(host.frames.is_empty());
    assert!(!task.has_pressed());
}
