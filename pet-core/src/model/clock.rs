use crate::Time;
use serde::{Deserialize, Serialize};

/// Model time tracking.
///
/// `current_step` is the only counter used to index the forcing series.
/// Outside a fractional `update_until`, `current_time - start_time` equals
/// `current_step * time_step_size_s`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelClock {
    /// Number of steps taken since the start of the run
    pub current_step: usize,
    /// Current time (s since the Unix epoch)
    pub current_time: Time,
    /// Time elapsed since the start of the run (s)
    pub current_time_step: Time,
    /// Size of one step (s)
    pub time_step_size_s: Time,
    pub num_timesteps: usize,
    /// Time at step 0 (s since the Unix epoch)
    pub start_time: Time,
}

impl ModelClock {
    pub fn new(start_time: Time, time_step_size_s: Time, num_timesteps: usize) -> Self {
        Self {
            current_step: 0,
            current_time: start_time,
            current_time_step: 0.0,
            time_step_size_s,
            num_timesteps,
            start_time,
        }
    }

    /// Move forward by one step of `time_step_size_s`.
    pub fn advance(&mut self) {
        self.current_time_step += self.time_step_size_s;
        self.current_step += 1;
        self.current_time += self.time_step_size_s;
    }

    /// Time at the end of the run.
    ///
    /// A run of a single step is treated as having no defined length and ends
    /// at the largest `f32` value past the start.
    pub fn end_time(&self) -> Time {
        if self.num_timesteps == 1 {
            self.start_time + f32::MAX as Time
        } else {
            self.start_time + self.num_timesteps as Time * self.time_step_size_s
        }
    }

    /// Whether every configured step has been taken
    pub fn finished(&self) -> bool {
        self.current_step >= self.num_timesteps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance() {
        let mut clock = ModelClock::new(1000.0, 60.0, 3);
        clock.advance();
        clock.advance();

        assert_eq!(clock.current_step, 2);
        assert_eq!(clock.current_time, 1120.0);
        assert_eq!(clock.current_time_step, 120.0);
        assert!(!clock.finished());
        clock.advance();
        assert!(clock.finished());
    }

    #[test]
    fn end_time() {
        assert_eq!(ModelClock::new(100.0, 3600.0, 24).end_time(), 86_500.0);
        assert_eq!(
            ModelClock::new(100.0, 3600.0, 1).end_time(),
            100.0 + f32::MAX as Time
        );
    }
}
