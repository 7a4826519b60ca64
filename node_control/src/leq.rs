use libm::{log10, pow};

use crate::bsp::adc::AnalogPin;
use crate::bsp::clock::Clock;
use crate::delay::wait_until;
use crate::vrms::LiCalculator;

/// Accumulates Li windows into an energy-averaged sound level Leq.
///
/// One [LeqCalculator::accumulate] call paces the sampling (it blocks for
/// `ts` milliseconds) and takes one microphone sample. Every `vrm_samples`
/// samples close one Li window; every `li_samples` Li windows close one
/// Leq window and [LeqCalculator::compute] reports ready.
pub struct LeqCalculator<'a> {
    li: LiCalculator<'a>,
    clock: &'a dyn Clock,
    ts: f64,
    vrm_samples: u16,
    li_samples: u16,
    sum_leq: f64,
    leq: f64,
}

impl<'a> LeqCalculator<'a> {
    /// `ts` is the sampling period in milliseconds. Zero values for any of
    /// the configuration parameters are an unguarded precondition; the Leq
    /// division is not protected against them.
    pub fn new(
        adc: &'a dyn AnalogPin,
        clock: &'a dyn Clock,
        ts: f64,
        vrm_samples: u16,
        li_samples: u16,
    ) -> Self {
        LeqCalculator {
            li: LiCalculator::new(adc),
            clock,
            ts,
            vrm_samples,
            li_samples,
            sum_leq: 0.0,
            leq: 0.0,
        }
    }

    /// Waits one sampling period, then takes one microphone sample.
    pub fn accumulate(&mut self) {
        wait_until(self.clock, self.ts as u32);
        self.li.accumulate();
    }

    /// Folds completed Li windows into the running energy sum and closes
    /// the Leq window when enough of them have been collected.
    ///
    /// The two checks are independent: a single call can both fold a new
    /// Li value and finalize the Leq window when the counts line up.
    /// Returns true exactly when a new Leq value has been produced.
    pub fn compute(&mut self) -> bool {
        if self.li.samples_in_window() == self.vrm_samples {
            self.li.compute();
            self.sum_leq +=
                self.ts * f64::from(self.vrm_samples) * pow(10.0, 0.1 * self.li.li());
        }

        if self.li.li_count() == u32::from(self.li_samples) && self.li.total_samples() != 0 {
            let window = self.ts * f64::from(self.vrm_samples) * f64::from(self.li_samples);
            self.leq = 10.0 * log10(self.sum_leq / window);
            self.sum_leq = 0.0;
            self.li.reset_li_count();
            log::debug!("leq window closed: {} dB", self.leq);
            true
        } else {
            false
        }
    }

    pub fn leq(&self) -> f64 {
        self.leq
    }

    /// Running energy sum of the Leq window being filled.
    pub fn sum_leq(&self) -> f64 {
        self.sum_leq
    }

    pub fn ts(&self) -> f64 {
        self.ts
    }

    pub fn vrm_samples(&self) -> u16 {
        self.vrm_samples
    }

    pub fn li_samples(&self) -> u16 {
        self.li_samples
    }

    /// The coordinator can retune the Li window length at runtime.
    pub fn set_vrm_samples(&mut self, vrm_samples: u16) {
        self.vrm_samples = vrm_samples;
    }

    /// The coordinator can retune the Leq window length at runtime.
    pub fn set_li_samples(&mut self, li_samples: u16) {
        self.li_samples = li_samples;
    }

    pub fn vrms(&self) -> f64 {
        self.li.vrms()
    }

    pub fn dbv(&self) -> f64 {
        self.li.dbv()
    }

    pub fn li(&self) -> f64 {
        self.li.li()
    }

    pub fn samples_in_window(&self) -> u16 {
        self.li.samples_in_window()
    }

    pub fn total_samples(&self) -> u32 {
        self.li.total_samples()
    }

    pub fn li_count(&self) -> u32 {
        self.li.li_count()
    }
}
