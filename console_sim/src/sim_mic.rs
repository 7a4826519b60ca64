use std::cell::Cell;

use node_control::bsp::adc::AnalogPin;
use node_control::bsp::pin::Pin;

const MIDSCALE: f64 = 512.0;
const QUIET_AMPLITUDE: f64 = 40.0;
const LOUD_AMPLITUDE: f64 = 320.0;
const PHASE_STEP: f64 = 0.37;

/// Microphone which produces a sine wave around ADC midscale, for
/// simulation. Holding the "loud" key raises the amplitude.
pub struct SimMic<P: Pin> {
    loud: P,
    phase: Cell<f64>,
}

impl<P: Pin> SimMic<P> {
    pub fn create(loud: P) -> Self {
        SimMic {
            loud,
            phase: Cell::new(0.0),
        }
    }
}

impl<P: Pin> AnalogPin for SimMic<P> {
    fn read(&self) -> u16 {
        let amplitude = if self.loud.is_down() {
            LOUD_AMPLITUDE
        } else {
            QUIET_AMPLITUDE
        };
        let phase = self.phase.get();
        self.phase.set(phase + PHASE_STEP);
        (MIDSCALE + amplitude * phase.sin()) as u16
    }
}
