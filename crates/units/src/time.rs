use serde::{Deserialize, Serialize};

use crate::constants::SECONDS_PER_DAY;

pub const HOURS_PER_DAY: f64 = 24.0;
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Billion years in days
const GYR_TO_DAYS: f64 = 1.0e9 * DAYS_PER_YEAR;

/// A duration stored in days, the unit of orbital periods and sample times
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let year = Time::from_years(1.0);
/// assert_eq!(year.to_days(), 365.25);
///
/// let day = Time::from_seconds(86_400.0);
/// assert_eq!(day.to_hours(), 24.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Days

impl Time {
    /// From days
    pub fn from_days(value: f64) -> Self {
        Self(value)
    }

    /// From seconds
    pub fn from_seconds(value: f64) -> Self {
        Self(value / SECONDS_PER_DAY)
    }

    /// From hours
    pub fn from_hours(value: f64) -> Self {
        Self(value / HOURS_PER_DAY)
    }

    /// From Julian years
    pub fn from_years(value: f64) -> Self {
        Self(value * DAYS_PER_YEAR)
    }

    /// From billions of years (Gyr)
    pub fn from_gyr(value: f64) -> Self {
        Self(value * GYR_TO_DAYS)
    }

    /// In days
    pub fn to_days(&self) -> f64 {
        self.0
    }

    /// In seconds
    pub fn to_seconds(&self) -> f64 {
        self.0 * SECONDS_PER_DAY
    }

    /// In hours
    pub fn to_hours(&self) -> f64 {
        self.0 * HOURS_PER_DAY
    }

    /// In Julian years
    pub fn to_years(&self) -> f64 {
        self.0 / DAYS_PER_YEAR
    }

    /// In billions of years
    pub fn to_gyr(&self) -> f64 {
        self.0 / GYR_TO_DAYS
    }
}
