//! Wall-clock collaborator for merge-timing policies.

use chrono::{Datelike, Utc, Weekday};

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;

/// Answers whether today is a weekday.
///
/// The release policy gates auto-merge on weekdays so a broken release is
/// not shipped into an unstaffed weekend. Abstracted behind a trait so the
/// rules can be tested on any day of the week.
pub trait Clock: Send + Sync {
    fn is_today_a_weekday(&self) -> bool;
}

/// [`Clock`] backed by the system UTC time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn is_today_a_weekday(&self) -> bool {
        !matches!(Utc::now().weekday(), Weekday::Sat | Weekday::Sun)
    }
}
