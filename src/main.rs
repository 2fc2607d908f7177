//! pico-gamepad firmware entry point.
//!
//! Three cooperative tasks share the single-threaded executor:
//!
//! - USB device task (enumeration, suspend/resume, remote wakeup)
//! - HID writer task (report queue → interrupt endpoint)
//! - status LED task
//!
//! and `main` itself runs the fixed-rate button poll loop.

#![no_std]
#![no_main]

mod status;
mod usb;

use defmt::{debug, info, trace, unwrap, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::{Instant, Timer};
use embassy_usb::class::hid::HidWriter;
use embassy_usb::UsbDevice;
use panic_probe as _;
use pico_gamepad::config;
use pico_gamepad::input::BUTTON_COUNT;
use pico_gamepad::{PollTask, Sampler, Tick};
use usb::hid_device::{self, UsbDriver, UsbReportSink, REPORT_BUF_LEN};

type ButtonLines = [Input<'static>; BUTTON_COUNT];

#[embassy_executor::task]
async fn usb_device_task(device: UsbDevice<'static, UsbDriver>) -> ! {
    hid_device::run_usb_device(device).await
}

#[embassy_executor::task]
async fn hid_writer_task(writer: HidWriter<'static, UsbDriver, REPORT_BUF_LEN>) -> ! {
    hid_device::hid_writer_task(writer).await
}

#[embassy_executor::task]
async fn status_led_task(led: Output<'static>) -> ! {
    status::status_led_task(led).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    info!("pico-gamepad starting...");

    let usb = hid_device::init(p.USB);
    unwrap!(spawner.spawn(usb_device_task(usb.device)));
    unwrap!(spawner.spawn(hid_writer_task(usb.writer)));

    // GP25, see config::GPIO_STATUS_LED.
    let led = Output::new(p.PIN_25, Level::Low);
    unwrap!(spawner.spawn(status_led_task(led)));

    // Same order as LogicalButton::ALL; GPIO numbers from config.
    let lines: ButtonLines = [
        Input::new(p.PIN_16, Pull::Up), // Left
        Input::new(p.PIN_17, Pull::Up), // Down
        Input::new(p.PIN_18, Pull::Up), // Up
        Input::new(p.PIN_19, Pull::Up), // Right
        Input::new(p.PIN_12, Pull::Up), // A
        Input::new(p.PIN_13, Pull::Up), // B
        Input::new(p.PIN_14, Pull::Up), // X
        Input::new(p.PIN_15, Pull::Up), // Y
        Input::new(p.PIN_9, Pull::Up),  // Select
        Input::new(p.PIN_10, Pull::Up), // Start
        Input::new(p.PIN_11, Pull::Up), // Mode
        Input::new(p.PIN_5, Pull::Up),  // R
        Input::new(p.PIN_6, Pull::Up),  // ZR
        Input::new(p.PIN_7, Pull::Up),  // L
        Input::new(p.PIN_8, Pull::Up),  // ZL
    ];

    info!("Buttons ready, polling every {} ms", config::POLL_INTERVAL_MS);

    run_poll_loop(Sampler::new(lines), UsbReportSink::new()).await
}

/// Sample, encode and queue gamepad reports on the configured cadence.
async fn run_poll_loop(mut sampler: Sampler<ButtonLines>, mut sink: UsbReportSink) -> ! {
    let mut task = PollTask::new(config::POLL_INTERVAL_MS);

    loop {
        match task.poll(Instant::now().as_millis(), &mut sampler, &mut sink) {
            Tick::NotDue | Tick::NotReady | Tick::Idle => {}
            Tick::Sent(report) => trace!("Report queued: {}", report),
            Tick::WakeupRequested => debug!("Bus suspended with input, wakeup requested"),
            Tick::Dropped(e) => warn!("Gamepad report dropped: {}", e),
        }

        Timer::at(Instant::from_millis(task.next_due_ms())).await;
    }
}
