#![no_std]
#![no_main]

use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_time::Timer;
use panic_persist as _;
use rtdb_pico::{pico_log, Settings};

#[cfg(feature = "usb-logger")]
use embassy_rp::bind_interrupts;
#[cfg(feature = "usb-logger")]
use embassy_rp::peripherals::USB;
#[cfg(feature = "usb-logger")]
use embassy_rp::usb::{Driver, InterruptHandler as UsbInterruptHandler};

const REPORT_INTERVAL_SECS: u64 = 60;

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"RTDB-PICO"),
    embassy_rp::binary_info::rp_program_description!(
        c"WiFi and Firebase Realtime Database configuration check for Raspberry Pico 2 W"
    ),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[cfg(feature = "usb-logger")]
bind_interrupts!(struct UsbIrqs {
    USBCTRL_IRQ => UsbInterruptHandler<USB>;
});

/// Entry point principale secondo Embassy
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // Parte il logger su USB
    #[cfg(feature = "usb-logger")]
    spawner.must_spawn(logger_task(Driver::new(p.USB, UsbIrqs)));
    #[cfg(not(feature = "usb-logger"))]
    let _ = (spawner, p);

    if let Some(panic_message) = panic_persist::get_panic_message_utf8() {
        pico_log!(error, "{}", panic_message);
        loop {
            Timer::after_secs(5).await;
        }
    }

    // Leave time for the host to open the serial port
    Timer::after_secs(2).await;

    match Settings::builtin() {
        Ok(settings) => loop {
            report(&settings);
            Timer::after_secs(REPORT_INTERVAL_SECS).await;
        },
        Err(err) => loop {
            pico_log!(error, "Invalid configuration: {}", err);
            Timer::after_secs(REPORT_INTERVAL_SECS).await;
        },
    }
}

fn report(settings: &Settings<'static>) {
    pico_log!(info, "WiFi SSID: {}", settings.wifi.ssid());

    let mode = settings.database.mode();
    pico_log!(info, "Database: {}", settings.database.url.host());
    pico_log!(info, "Access mode: {}", mode);
    pico_log!(info, "Required database rules:\n{}", mode.rules());
}

#[cfg(feature = "usb-logger")]
#[embassy_executor::task]
async fn logger_task(driver: Driver<'static, USB>) {
    embassy_usb_logger::run!(1024, log::LevelFilter::Info, driver);
}
