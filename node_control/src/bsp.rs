pub mod clock {
    /// A monotonic millisecond counter, the only notion of time the node has.
    pub trait Clock {
        fn millis(&self) -> u32;

        /// Called on every iteration of a busy-wait so a host implementation
        /// can yield instead of burning the CPU. The default does nothing,
        /// which is the bare-metal behaviour.
        fn idle(&self) {}
    }
}

pub mod pin {
    /// A pin (of a button) which may be down (tied to the ground) or up (floating pin)
    pub trait Pin {
        fn is_down(&self) -> bool;
    }
}

pub mod adc {
    /// Full scale of the 10-bit ADC.
    pub const ADC_MAX: u16 = 1023;
    /// ADC reference voltage in volts.
    pub const V_MAX: f64 = 5.0;

    /// An analog input pin, read one conversion at a time.
    pub trait AnalogPin {
        fn read(&self) -> u16;
    }
}

pub mod dht {
    /// One successful DHT11 conversion.
    #[derive(Clone, Debug, PartialEq, Copy)]
    pub struct Reading {
        pub temperature: f32,
        pub humidity: f32,
    }

    /// Failure modes of a DHT11 transfer, with the numeric status codes
    /// the sensor library reports.
    #[derive(Clone, Debug, Eq, PartialEq, Copy)]
    pub enum DhtError {
        Checksum,
        Timeout,
    }

    impl DhtError {
        pub fn code(&self) -> i8 {
            match self {
                DhtError::Checksum => -1,
                DhtError::Timeout => -2,
            }
        }
    }

    /// Temperature/humidity sensor on a single digital pin.
    pub trait Dht {
        fn read(&self) -> Result<Reading, DhtError>;
    }
}

pub mod lcd {
    /// Characters per LCD row.
    pub const COLS: u8 = 16;
    /// Number of LCD rows.
    pub const ROWS: u8 = 2;

    /// A 16x2 character LCD with row/column cursor addressing.
    pub trait Lcd {
        /// Blank both rows and home the cursor.
        fn clear(&self);
        fn set_cursor(&self, col: u8, row: u8);
        /// Write text starting at the cursor; characters past the end of
        /// the row are dropped.
        fn print(&self, text: &str);
        /// Turn the display on (text becomes visible).
        fn display(&self);
        /// Turn the display off without losing the text.
        fn no_display(&self);
    }
}

pub mod serial {
    /// Line-oriented serial console output.
    pub trait Serial {
        fn println(&self, line: &str);
    }
}
