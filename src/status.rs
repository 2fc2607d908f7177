//! Status LED - blinks at a rate that reflects the USB state.
//!
//! - 250 ms: not enumerated
//! - 1 s:    configured by the host
//! - 2.5 s:  bus suspended

use crate::usb::hid_device;
use defmt::info;
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Instant, Timer};
use pico_gamepad::status_logic::Blinker;

/// Run the LED blink loop forever.
pub async fn status_led_task(mut led: Output<'static>) -> ! {
    let mut blinker = Blinker::new();
    let mut last_status = hid_device::usb_status();
    info!("Status: {}", last_status);

    loop {
        let status = hid_device::usb_status();
        if status != last_status {
            info!("Status: {} -> {}", last_status, status);
            last_status = status;
        }

        if let Some(on) = blinker.tick(Instant::now().as_millis(), status) {
            led.set_level(if on { Level::High } else { Level::Low });
        }

        Timer::at(Instant::from_millis(blinker.next_due_ms(status))).await;
    }
}
