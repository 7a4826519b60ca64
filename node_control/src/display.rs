use core::fmt::Write;

use heapless::String;

use crate::bsp::clock::Clock;
use crate::bsp::dht::Dht;
use crate::bsp::lcd::Lcd;
use crate::bsp::serial::Serial;
use crate::delay::wait_until;

/// Extra loop iterations a message stays on screen before the mode flips;
/// each mode is shown for `NB_MSG_COUNT + 1` iterations.
pub const NB_MSG_COUNT: i16 = 2;
/// Display-on portion of the blink, milliseconds.
pub const DISPLAY_ON_MS: u32 = 2000;
/// Display-off portion of the blink, milliseconds.
pub const DISPLAY_OFF_MS: u32 = 1000;

/// Alternates a welcome message and the DHT11 reading on the LCD,
/// blinking the display once per loop iteration.
pub struct DisplayLoop<'a> {
    lcd: &'a dyn Lcd,
    dht: &'a dyn Dht,
    serial: &'a dyn Serial,
    clock: &'a dyn Clock,
    message_count: i16,
    showing_reading: bool,
}

impl<'a> DisplayLoop<'a> {
    pub fn new(
        lcd: &'a dyn Lcd,
        dht: &'a dyn Dht,
        serial: &'a dyn Serial,
        clock: &'a dyn Clock,
    ) -> Self {
        DisplayLoop {
            lcd,
            dht,
            serial,
            clock,
            message_count: 0,
            showing_reading: true,
        }
    }

    /// One iteration of the polling loop: render when a new message period
    /// starts, advance the counter, then blink the display.
    pub fn tick(&mut self) {
        if self.message_count == 0 {
            self.lcd.clear();
            if self.showing_reading {
                self.show_reading();
            } else {
                self.welcome();
            }
        }

        self.message_count += 1;
        if self.message_count > NB_MSG_COUNT {
            self.message_count = 0;
            self.showing_reading = !self.showing_reading;
        }

        // slow blink
        self.lcd.display();
        wait_until(self.clock, DISPLAY_ON_MS);
        self.lcd.no_display();
        wait_until(self.clock, DISPLAY_OFF_MS);
    }

    /// True when the sensor reading is the mode rendered next.
    pub fn showing_reading(&self) -> bool {
        self.showing_reading
    }

    fn welcome(&self) {
        self.serial.println("Acoustic/climate monitoring node");
        self.lcd.set_cursor(0, 0);
        self.lcd.print("Acoustic node");
        self.lcd.set_cursor(0, 1);
        self.lcd.print("T/RH + Leq");
    }

    fn show_reading(&self) {
        match self.dht.read() {
            Ok(reading) => {
                let mut line: String<32> = String::new();
                let _ = write!(line, "Temperature = {:.1}", reading.temperature);
                self.serial.println(line.as_str());
                line.clear();
                let _ = write!(line, "Humidity = {:.1}", reading.humidity);
                self.serial.println(line.as_str());

                line.clear();
                let _ = write!(line, "Temp: {:.1} C", reading.temperature);
                self.lcd.set_cursor(0, 0);
                self.lcd.print(line.as_str());
                line.clear();
                let _ = write!(line, "Humidity: {:.0}%", reading.humidity);
                self.lcd.set_cursor(0, 1);
                self.lcd.print(line.as_str());
            }
            Err(err) => {
                log::warn!("DHT11 read failed, code {}", err.code());
                let mut line: String<32> = String::new();
                let _ = write!(line, "DHT11 error = {}", err.code());
                self.serial.println(line.as_str());

                self.lcd.set_cursor(0, 0);
                self.lcd.print("DHT11: error");
                line.clear();
                let _ = write!(line, "DHT11: code {}", err.code());
                self.lcd.set_cursor(0, 1);
                self.lcd.print(line.as_str());
            }
        }
    }
}
