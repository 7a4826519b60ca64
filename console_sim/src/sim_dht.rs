use std::cell::Cell;

use node_control::bsp::dht::{Dht, DhtError, Reading};
use node_control::bsp::pin::Pin;

/// DHT11 which wanders slowly around room conditions, for simulation.
/// Holding the fault key makes every read time out, which exercises the
/// error branch of the display loop.
pub struct SimDht<P: Pin> {
    fault: P,
    reads: Cell<u32>,
}

impl<P: Pin> SimDht<P> {
    pub fn create(fault: P) -> Self {
        SimDht {
            fault,
            reads: Cell::new(0),
        }
    }
}

impl<P: Pin> Dht for SimDht<P> {
    fn read(&self) -> Result<Reading, DhtError> {
        if self.fault.is_down() {
            return Err(DhtError::Timeout);
        }
        let reads = self.reads.get();
        self.reads.set(reads + 1);
        // slow sawtooth so consecutive readings differ a little
        let wander = (reads % 8) as f32 * 0.1;
        Ok(Reading {
            temperature: 22.5 + wander,
            humidity: 45.0 + 2.0 * wander,
        })
    }
}
