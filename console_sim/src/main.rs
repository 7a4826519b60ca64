use std::error::Error;
use std::io::stdout;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::ExecutableCommand;

use node_control::bsp::pin::Pin;
use node_control::display::DisplayLoop;
use node_control::leq::LeqCalculator;

use crate::keyboard_pin::KeyboardPin;
use crate::lcd_screen::LcdScreen;
use crate::serial_monitor::SerialMonitor;
use crate::sim_dht::SimDht;
use crate::sim_mic::SimMic;
use crate::system_clock::SystemClock;

mod keyboard_pin;
mod lcd_screen;
mod serial_monitor;
mod sim_dht;
mod sim_mic;
mod system_clock;

/// Microphone sampling period, milliseconds.
const TS_MS: f64 = 6.0;
/// Samples per Li window.
const VRM_SAMPLES: u16 = 32;
/// Li windows per Leq window.
const LI_SAMPLES: u16 = 10;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let (esc_pin, fault_pin, loud_pin) = keys();
    let clock = SystemClock::start();
    let mic = SimMic::create(loud_pin);
    let dht = SimDht::create(fault_pin);
    let lcd = LcdScreen::create();
    let serial = SerialMonitor::create();

    let mut display = DisplayLoop::new(&lcd, &dht, &serial, &clock);
    let mut leq = LeqCalculator::new(&mic, &clock, TS_MS, VRM_SAMPLES, LI_SAMPLES);

    stdout()
        .execute(Clear(ClearType::All))?
        .execute(Hide)?
        .execute(MoveTo(0, 5))?
        .execute(Print(
            "ESC: quit | hold LEFT: DHT11 fault | hold RIGHT: loud",
        ))?;

    loop {
        if esc_pin.is_down() {
            break;
        }

        display.tick();

        // one full Li window of microphone sampling per display iteration
        for _ in 0..VRM_SAMPLES {
            leq.accumulate();
        }
        if leq.compute() {
            log::info!("Leq = {:.1} dB", leq.leq());
        }
        draw_levels(&leq)?;
    }

    stdout().execute(Show)?;
    Ok(())
}

fn draw_levels(leq: &LeqCalculator) -> Result<(), Box<dyn Error>> {
    stdout().execute(MoveTo(0, 6))?.execute(Print(format!(
        "Vrms: {:6.4} V   Li: {:5.1} dB   Leq: {:5.1} dB   ",
        leq.vrms(),
        leq.li(),
        leq.leq()
    )))?;
    Ok(())
}

#[cfg(target_os = "linux")]
fn keys() -> (KeyboardPin, KeyboardPin, KeyboardPin) {
    (
        KeyboardPin::create(1),
        KeyboardPin::create(105),
        KeyboardPin::create(106),
    )
}

#[cfg(target_os = "windows")]
fn keys() -> (KeyboardPin, KeyboardPin, KeyboardPin) {
    (
        KeyboardPin::create(27),
        KeyboardPin::create(37),
        KeyboardPin::create(39),
    )
}
