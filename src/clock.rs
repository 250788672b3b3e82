//! Time source for generation timestamps

use chrono::Utc;

use crate::config::NOW_ENV;
use crate::error::{MaterialError, Result};

/// Source of the current time in milliseconds since the Unix epoch
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by the system time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock that always reports the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Fixed clock requested through `UPDATE_MATERIAL_NOW`, if set
pub fn fixed_clock_from_env() -> Result<Option<FixedClock>> {
    match std::env::var(NOW_ENV) {
        Ok(value) => parse_fixed_clock(&value).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_fixed_clock(value: &str) -> Result<FixedClock> {
    value
        .trim()
        .parse::<i64>()
        .map(FixedClock)
        .map_err(|_| MaterialError::InvalidClockOverride {
            name: NOW_ENV.to_string(),
            value: value.to_string(),
        })
}
