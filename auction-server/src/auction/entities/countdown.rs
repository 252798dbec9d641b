use time::OffsetDateTime;

pub const ENDING_SOON_THRESHOLD_SECONDS: u64 = 60;

/// Whole seconds left until `end_time`, never negative.
pub fn tick(now: OffsetDateTime, end_time: OffsetDateTime) -> u64 {
    (end_time - now).whole_seconds().max(0) as u64
}

/// The caller owns `already_fired` and has to set it once this returns true.
pub fn check_threshold(remaining_seconds: u64, threshold_seconds: u64, already_fired: bool) -> bool {
    remaining_seconds == threshold_seconds && !already_fired
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountdownTick {
    pub remaining_seconds: u64,
    pub ending_soon:       bool,
}

/// Countdown of one observed listing session.
///
/// The ending soon signal fires at most once, and only when the threshold is crossed
/// from above while the session is observed. A tick that skips the threshold second
/// still counts as a crossing.
#[derive(Clone, Debug)]
pub struct Countdown {
    end_time:          OffsetDateTime,
    threshold_seconds: u64,
    fired:             bool,
    last_remaining:    Option<u64>,
}

impl Countdown {
    pub fn new(end_time: OffsetDateTime, threshold_seconds: u64) -> Self {
        Self {
            end_time,
            threshold_seconds,
            fired: false,
            last_remaining: None,
        }
    }

    pub fn observe(&mut self, now: OffsetDateTime) -> CountdownTick {
        let remaining_seconds = tick(now, self.end_time);
        let skipped_threshold = remaining_seconds > 0
            && remaining_seconds < self.threshold_seconds
            && self
                .last_remaining
                .is_some_and(|last| last > self.threshold_seconds);
        // A closed session never gets the warning, whatever the threshold.
        let ending_soon = remaining_seconds > 0
            && (check_threshold(remaining_seconds, self.threshold_seconds, self.fired)
                || (skipped_threshold && !self.fired));
        if ending_soon {
            self.fired = true;
        }
        self.last_remaining = Some(remaining_seconds);
        CountdownTick {
            remaining_seconds,
            ending_soon,
        }
    }
}
