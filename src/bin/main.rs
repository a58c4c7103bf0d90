#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use embassy_executor::Spawner;
use embassy_time::Timer;
use esp_hal::{
    clock::CpuClock,
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    i2c::master::{Config as I2cConfig, I2c},
    time::{Instant, Rate},
    timer::timg::TimerGroup,
};
use log::{LevelFilter, info};
use uplink_core::{
    app::{TickResult, UplinkApp},
    config::{Capabilities, DeviceConfig, WifiAccess},
};
use uplink_hal::{
    input::buttons::{ButtonConfig, ButtonPad},
    platform::display::{self, Backlight},
    render,
};

use link::{LinkBridge, LinkUpdate};

#[path = "main/link.rs"]
mod link;

const I2C_HZ: u32 = 400_000;
const FW_VERSION: &str = env!("CARGO_PKG_VERSION");
const BOOT_LOGO_MS: u64 = 1_500;
const MENU_IDLE_TIMEOUT_MS: u64 = 20_000;
const BIND_NOTICE_MS: u64 = 1_200;
const LOOP_POLL_MS: u64 = 5;
const DEBOUNCE_POLLS: u8 = 4;
const HAS_MOTION_SENSOR: bool = false;
const HAS_THERMAL_SENSOR: bool = false;

const WIFI_ACCESS: WifiAccess = WifiAccess::AccessPoint {
    ssid: "Uplink TX",
    password: "uplink",
    address: "10.0.0.1",
};

#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

#[allow(
    clippy::large_stack_frames,
    reason = "it's not unusual to allocate larger buffers etc. in main"
)]
#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    esp_println::logger::init_logger(LevelFilter::Info);
    esp_println::println!("boot: uplink starting");

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // OLED wiring used by this build:
    // SDA=GPIO17, SCL=GPIO18, backlight=GPIO21
    let i2c = I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_hz(I2C_HZ)),
    )
    .unwrap()
    .with_sda(peripherals.GPIO17)
    .with_scl(peripherals.GPIO18);

    esp_println::println!("display: init begin (SDA=17 SCL=18)");
    let mut display = display::init(i2c);
    esp_println::println!("display: init done");
    let mut display_fault_logged = false;
    let mut display_first_flush_logged = false;

    let mut backlight = Backlight::new(Output::new(
        peripherals.GPIO21,
        Level::Low,
        OutputConfig::default(),
    ));
    let _ = backlight.set(true);

    // Button wiring used by this build:
    // UP=GPIO4, DOWN=GPIO5, CONFIRM=GPIO6, BACK=GPIO7, all switching to ground
    let pull_up = InputConfig::default().with_pull(Pull::Up);
    let buttons = ButtonPad::new(
        Input::new(peripherals.GPIO4, pull_up),
        Input::new(peripherals.GPIO5, pull_up),
        Input::new(peripherals.GPIO6, pull_up),
        Input::new(peripherals.GPIO7, pull_up),
        ButtonConfig::default().with_debounce_polls(DEBOUNCE_POLLS),
    )
    .unwrap();

    let device_config = DeviceConfig {
        fw_version: FW_VERSION,
        capabilities: Capabilities::new()
            .with_motion_sensor(HAS_MOTION_SENSOR)
            .with_thermal_sensor(HAS_THERMAL_SENSOR),
        wifi: WIFI_ACCESS,
    };
    let mut app = UplinkApp::new(buttons, LinkBridge::new(), device_config);
    let link_updates = link::updates();

    info!(
        "uplink started: fw={} i2c_hz={} buttons UP=4 DOWN=5 CONFIRM=6 BACK=7 backlight=21",
        FW_VERSION, I2C_HZ
    );

    // Boot logo stays up while the rest of the module comes alive.
    if app.tick(0) == TickResult::RenderRequested {
        let mut painted = Ok(true);
        app.with_screen(|screen| painted = render::draw(&screen, &mut display));
        match painted {
            Ok(true) => {
                if let Err(err) = display.flush() {
                    if !display_fault_logged {
                        esp_println::println!("display: flush failed");
                        info!("display flush failed: {:?}", err);
                        display_fault_logged = true;
                    }
                } else if !display_first_flush_logged {
                    esp_println::println!("display: first flush ok");
                    display_first_flush_logged = true;
                }
            }
            Ok(false) => {}
            Err(err) => {
                if !display_fault_logged {
                    info!("display draw failed: {:?}", err);
                    display_fault_logged = true;
                }
            }
        }
    }
    Timer::after_millis(BOOT_LOGO_MS).await;
    app.enter_idle();

    let loop_start = Instant::now();
    loop {
        while let Ok(update) = link_updates.try_receive() {
            match update {
                LinkUpdate::Telemetry { rate, power, ratio } => {
                    app.handle_telemetry(rate, power, ratio);
                }
                LinkUpdate::Temperature(celsius) => app.handle_temperature(celsius),
                LinkUpdate::BindComplete => {
                    info!("link: bind complete");
                    // Leave the binding page visible for a beat.
                    Timer::after_millis(BIND_NOTICE_MS).await;
                    app.enter_idle();
                }
            }
        }

        let now_ms = loop_start.elapsed().as_millis();
        if app.auto_idle_due(now_ms, MENU_IDLE_TIMEOUT_MS) {
            info!("menu idle timeout");
            app.enter_idle();
        }

        if app.tick(now_ms) == TickResult::RenderRequested {
            let mut painted = Ok(true);
            app.with_screen(|screen| painted = render::draw(&screen, &mut display));
            match painted {
                Ok(true) => {
                    if let Err(err) = display.flush() {
                        if !display_fault_logged {
                            esp_println::println!("display: flush failed");
                            info!("display flush failed: {:?}", err);
                            display_fault_logged = true;
                        }
                    } else if !display_first_flush_logged {
                        esp_println::println!("display: first flush ok");
                        display_first_flush_logged = true;
                    }
                }
                Ok(false) => {}
                Err(err) => {
                    if !display_fault_logged {
                        info!("display draw failed: {:?}", err);
                        display_fault_logged = true;
                    }
                }
            }
        }

        Timer::after_millis(LOOP_POLL_MS).await;
    }
}
