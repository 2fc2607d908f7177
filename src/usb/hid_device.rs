//! USB HID gamepad device.
//!
//! Initialises the Embassy USB stack on the RP2040 USB peripheral and
//! exposes one HID endpoint.

use core::sync::atomic::{AtomicBool, Ordering};

use defmt::{info, trace, warn};
use embassy_futures::select::{select, Either};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::{Driver, InterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use embassy_usb::class::hid::{Config as HidConfig, HidWriter, State};
use embassy_usb::{Builder, Config, UsbDevice};
use pico_gamepad::config;
use pico_gamepad::gamepad::{GAMEPAD_REPORT_DESCRIPTOR, GAMEPAD_REPORT_SIZE};
use pico_gamepad::status_logic::UsbStatus;
use pico_gamepad::{Error, ReportSink};
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => InterruptHandler<USB>;
});

pub type UsbDriver = Driver<'static, USB>;

/// Bytes on the endpoint: report ID + report.
pub const REPORT_BUF_LEN: usize = GAMEPAD_REPORT_SIZE + 1;

static HID_STATE: StaticCell<State> = StaticCell::new();
static USB_CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_CTRL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static USB_STATE_HANDLER: StaticCell<UsbStateHandler> = StaticCell::new();

static USB_CONFIGURED: AtomicBool = AtomicBool::new(false);
static USB_SUSPENDED: AtomicBool = AtomicBool::new(false);
static WAKEUP_REQUEST: Signal<CriticalSectionRawMutex, ()> = Signal::new();
static REPORT_CHANNEL: ReportChannel = Channel::new();

type ReportChannel =
    Channel<CriticalSectionRawMutex, [u8; REPORT_BUF_LEN], { config::REPORT_QUEUE_DEPTH }>;

/// Mirrors bus state changes into the flags the poll loop reads.
struct UsbStateHandler;

impl embassy_usb::Handler for UsbStateHandler {
    fn enabled(&mut self, enabled: bool) {
        if !enabled {
            USB_CONFIGURED.store(false, Ordering::Relaxed);
            USB_SUSPENDED.store(false, Ordering::Relaxed);
            info!("USB disabled");
        }
    }

    fn reset(&mut self) {
        USB_CONFIGURED.store(false, Ordering::Relaxed);
        info!("USB bus reset");
    }

    fn configured(&mut self, configured: bool) {
        USB_CONFIGURED.store(configured, Ordering::Relaxed);
        info!("USB configured={}", configured);
    }

    fn suspended(&mut self, suspended: bool) {
        USB_SUSPENDED.store(suspended, Ordering::Relaxed);
        info!("USB suspended={}", suspended);
    }
}

/// Current bus state for the status LED.
pub fn usb_status() -> UsbStatus {
    UsbStatus::from_flags(
        USB_CONFIGURED.load(Ordering::Relaxed),
        USB_SUSPENDED.load(Ordering::Relaxed),
    )
}

/// Build result containing the USB device runner and the HID writer.
pub struct UsbGamepad {
    pub device: UsbDevice<'static, UsbDriver>,
    pub writer: HidWriter<'static, UsbDriver, REPORT_BUF_LEN>,
}

/// Initialise the USB stack and create the HID gamepad device.
///
/// Must be called exactly once.  All static buffers are consumed here.
pub fn init(usb: USB) -> UsbGamepad {
    let driver = Driver::new(usb, Irqs);

    // USB device-level configuration.
    let mut usb_config = Config::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = 100; // mA
    usb_config.max_packet_size_0 = 64;
    usb_config.supports_remote_wakeup = true;

    let mut builder = Builder::new(
        driver,
        usb_config,
        USB_CONFIG_DESC.init([0u8; 256]),
        USB_BOS_DESC.init([0u8; 256]),
        USB_MSOS_DESC.init([0u8; 256]),
        USB_CTRL_BUF.init([0u8; 64]),
    );

    builder.handler(USB_STATE_HANDLER.init(UsbStateHandler));

    let hid_config = HidConfig {
        report_descriptor: GAMEPAD_REPORT_DESCRIPTOR,
        request_handler: None,
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: REPORT_BUF_LEN as u16,
    };
    let writer = HidWriter::new(&mut builder, HID_STATE.init(State::new()), hid_config);

    let device = builder.build();

    info!("USB HID gamepad initialised");

    UsbGamepad { device, writer }
}

/// Run the USB device stack - must be spawned as a dedicated Embassy task.
///
/// Handles enumeration and endpoint servicing. While suspended it waits
/// for either the host to resume the bus or the poll loop to ask for a
/// remote wakeup.
pub async fn run_usb_device(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    info!("USB device task started");
    loop {
        device.run_until_suspend().await;

        let woken = select(device.wait_resume(), WAKEUP_REQUEST.wait()).await;
        match woken {
            Either::First(()) => {
                // A press seen while resuming must not wake the next suspend.
                WAKEUP_REQUEST.reset();
            }
            Either::Second(()) => {
                info!("Requesting remote wakeup");
                if device.remote_wakeup().await.is_err() {
                    warn!("Remote wakeup failed: {}", Error::RemoteWakeup);
                }
            }
        }
    }
}

/// HID report forwarding task - drains the report queue into the
/// gamepad endpoint.
pub async fn hid_writer_task(mut writer: HidWriter<'static, UsbDriver, REPORT_BUF_LEN>) -> ! {
    info!("HID writer task started - waiting for reports");

    loop {
        writer.ready().await;
        let report = REPORT_CHANNEL.receive().await;

        match writer.write(&report).await {
            Ok(()) => on_report_complete(0, &report),
            Err(_e) => warn!("USB gamepad write failed: {}", Error::Endpoint),
        }
    }
}

/// Called after each report has left the device.
///
/// Only one report is ever in flight, so there is no follow-up report to
/// chain here.
fn on_report_complete(instance: u8, report: &[u8]) {
    trace!("Report complete: instance={} len={}", instance, report.len());
}

/// [`ReportSink`] backed by the HID writer task's queue.
pub struct UsbReportSink {
    reports: &'static ReportChannel,
}

impl UsbReportSink {
    pub fn new() -> Self {
        Self {
            reports: &REPORT_CHANNEL,
        }
    }
}

impl ReportSink for UsbReportSink {
    fn is_ready(&self) -> bool {
        USB_CONFIGURED.load(Ordering::Relaxed)
            && !USB_SUSPENDED.load(Ordering::Relaxed)
            && !self.reports.is_full()
    }

    fn is_suspended(&self) -> bool {
        USB_SUSPENDED.load(Ordering::Relaxed)
    }

    fn send(&mut self, report_id: u8, report: &[u8]) -> Result<(), Error> {
        if report.len() != GAMEPAD_REPORT_SIZE {
            return Err(Error::BufferOverflow);
        }
        if !USB_CONFIGURED.load(Ordering::Relaxed) {
            return Err(Error::NotReady);
        }

        let mut buf = [0u8; REPORT_BUF_LEN];
        buf[0] = report_id;
        buf[1..].copy_from_slice(report);

        self.reports.try_send(buf).map_err(|_| Error::QueueFull)
    }

    fn request_wakeup(&mut self) {
        WAKEUP_REQUEST.signal(());
    }
}
