//! Pacing: how many simulated days each displayed frame covers, and what
//! date the simulation has reached.

use time::OffsetDateTime;

use crate::consts::{JULIAN_UNIX_EPOCH, SECONDS_PER_DAY};
use crate::scenario::ScenarioParams;

/// Longest wall-clock gap (ms) counted between two frames.
pub const MAX_FRAME_MILLIS: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct FrameClock {
    fixed: bool,
    show_step: f64,
    /// Simulated days per wall-clock millisecond
    rate: f64,
}

impl FrameClock {
    pub fn new(params: &ScenarioParams) -> Self {
        FrameClock {
            fixed: params.fixed,
            show_step: params.show_step,
            rate: params.show_step / (params.sleep + 4.0),
        }
    }

    /// Days to advance for a frame that took `elapsed_millis` of real time.
    pub fn step_for_frame(&self, elapsed_millis: f64) -> f64 {
        if self.fixed {
            self.show_step
        } else {
            elapsed_millis.min(MAX_FRAME_MILLIS) * self.rate
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Speeds the simulation up (factor > 1) or slows it down.
    pub fn scale_rate(&mut self, factor: f64) {
        self.rate *= factor;
    }

    pub fn set_fixed(&mut self, fixed: bool) {
        self.fixed = fixed;
    }
}

/// The date shown alongside the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimDate {
    julian: Option<f64>,
}

impl SimDate {
    pub fn new(julian: Option<f64>) -> Self {
        SimDate { julian }
    }

    /// Calendar date (UTC) with a fractional day, e.g. `2000-1-01.50`, or a
    /// day count if the scenario isn't dated.
    pub fn label(&self, elapsed_days: f64) -> String {
        let jd = match self.julian {
            Some(jd) => jd + elapsed_days,
            None => return format!("{} Days", elapsed_days),
        };

        let seconds = ((jd - JULIAN_UNIX_EPOCH) * SECONDS_PER_DAY).floor();
        match OffsetDateTime::from_unix_timestamp(seconds as i64) {
            Ok(date) => {
                let day = date.day() as f64 + date.hour() as f64 / 24.0;
                format!("{}-{}-{:05.2}", date.year(), u8::from(date.month()), day)
            }
            Err(_) => format!("JD {:.2}", jd),
        }
    }
}
