use std::thread::sleep;
use std::time::{Duration, Instant};

/// Trait for types that set the pace of the game loop.
#[cfg_attr(test, mockall::automock)]
pub trait Pacer {
    /// Blocks until the next frame is due.
    fn tick(&mut self);

    /// Blocks for the given duration.
    fn pause(&mut self, duration: Duration);
}

/// Caps the frame rate by sleeping whatever is left of each interval.
///
/// Ticks that arrive late are not made up for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    /// Constructs a throttle that lets one tick through per `interval`.
    pub fn new(interval: Duration) -> Self {
        Throttle {
            interval,
            last: None,
        }
    }
}

impl Pacer for Throttle {
    fn tick(&mut self) {
        if let Some(deadline) = self.last.and_then(|t| t.checked_add(self.interval)) {
            let now = Instant::now();
            if deadline > now {
                sleep(deadline - now);
            }
        }

        self.last = Some(Instant::now());
    }

    fn pause(&mut self, duration: Duration) {
        sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest(cases = 8)]
    fn first_tick_does_not_block() {
        let timer = Instant::now();
        Throttle::new(Duration::from_secs(3600)).tick();
        assert!(timer.elapsed() < Duration::from_secs(60));
    }

    #[proptest(cases = 8)]
    fn consecutive_ticks_are_at_least_one_interval_apart(#[strategy(1u64..=20)] ms: u64) {
        let interval = Duration::from_millis(ms);
        let mut throttle = Throttle::new(interval);

        let timer = Instant::now();
        throttle.tick();
        throttle.tick();
        assert!(timer.elapsed() >= interval);
    }

    #[proptest(cases = 8)]
    fn pause_blocks_for_the_given_duration(#[strategy(1u64..=20)] ms: u64) {
        let timer = Instant::now();
        Throttle::new(Duration::ZERO).pause(Duration::from_millis(ms));
        assert!(timer.elapsed() >= Duration::from_millis(ms));
    }
}
