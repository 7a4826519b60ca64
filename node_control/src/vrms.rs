use libm::{log10, sqrt};

use crate::bsp::adc::{AnalogPin, ADC_MAX, V_MAX};

/// Electret capsule output at the 94 dB SPL reference, in dBV/Pa.
pub const MIC_SENSITIVITY_DBV: f64 = -44.0;
/// MAX4466 amplifier gain, 125 V/V expressed in dB.
pub const AMP_GAIN_DB: f64 = 42.0;
/// Sound pressure level at which the sensitivity is specified.
pub const REFERENCE_SPL_DB: f64 = 94.0;

/// Computes the instantaneous sound level Li of the microphone signal.
///
/// Squared sample voltages are accumulated over a window; once the window
/// is full, [LiCalculator::compute] derives the RMS voltage, the dBV value
/// and the sound level Li from the capsule sensitivity and amplifier gain.
pub struct LiCalculator<'a> {
    adc: &'a dyn AnalogPin,
    sum_squares: f64,
    nb_samples: u16,
    total_samples: u32,
    vrms: f64,
    dbv: f64,
    li: f64,
    nb_li: u32,
}

impl<'a> LiCalculator<'a> {
    pub fn new(adc: &'a dyn AnalogPin) -> Self {
        LiCalculator {
            adc,
            sum_squares: 0.0,
            nb_samples: 0,
            total_samples: 0,
            vrms: 0.0,
            dbv: 0.0,
            li: 0.0,
            nb_li: 0,
        }
    }

    /// Takes one ADC conversion and folds its squared voltage into the
    /// current window. Pacing is the caller's responsibility.
    pub fn accumulate(&mut self) {
        let v = f64::from(self.adc.read()) * V_MAX / f64::from(ADC_MAX);
        self.sum_squares += v * v;
        self.nb_samples += 1;
        self.total_samples += 1;
    }

    /// Closes the current window: computes Vrms, dBV and Li, then clears
    /// the window sum and count.
    ///
    /// Unguarded when no samples have been accumulated; the result is NaN,
    /// exactly as dividing by a zero count would behave upstream.
    pub fn compute(&mut self) {
        self.vrms = sqrt(self.sum_squares / f64::from(self.nb_samples));
        self.dbv = 20.0 * log10(self.vrms);
        self.li = self.dbv - AMP_GAIN_DB - MIC_SENSITIVITY_DBV + REFERENCE_SPL_DB;
        self.nb_li += 1;
        self.sum_squares = 0.0;
        self.nb_samples = 0;
    }

    pub fn vrms(&self) -> f64 {
        self.vrms
    }

    pub fn dbv(&self) -> f64 {
        self.dbv
    }

    pub fn li(&self) -> f64 {
        self.li
    }

    /// Samples accumulated in the window currently being filled.
    pub fn samples_in_window(&self) -> u16 {
        self.nb_samples
    }

    /// Samples accumulated since construction.
    pub fn total_samples(&self) -> u32 {
        self.total_samples
    }

    /// Number of Li values produced since the last [LiCalculator::reset_li_count].
    pub fn li_count(&self) -> u32 {
        self.nb_li
    }

    pub fn reset_li_count(&mut self) {
        self.nb_li = 0;
    }

    pub fn sensitivity(&self) -> f64 {
        MIC_SENSITIVITY_DBV
    }

    pub fn gain(&self) -> f64 {
        AMP_GAIN_DB
    }

    pub fn reference_spl(&self) -> f64 {
        REFERENCE_SPL_DB
    }
}
