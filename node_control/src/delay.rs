use crate::bsp::clock::Clock;

/// Blocks until `w` milliseconds have elapsed on the given clock.
///
/// The wait is a busy poll; the clock's [Clock::idle] hook lets a host
/// implementation sleep between polls.
pub fn wait_until(clock: &dyn Clock, w: u32) {
    let t = clock.millis();
    while clock.millis() < t + w {
        clock.idle();
    }
}
