// Spencer, J.W. (1971). Fourier series representation of the position of the
// Sun. Search, 2(5), 172.

use chrono::{Datelike, NaiveDate};
use std::f64::consts::PI;
use tracing::warn;

use crate::atmosphere::DEG_TO_RAD;

pub mod angles;
pub mod error;

pub use angles::SunGeometry;
pub use error::SolarError;

/// Northern tropic, the largest declination of the sun (degrees)
pub const MAX_DECLINATION: f64 = 23.45;

/// Degrees of hour angle swept per hour
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// The day being simulated, either by calendar position or directly by the
/// sun's declination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolarDay {
    /// Day of year counting from 0 at January 1
    DayOfYear(f64),
    /// Declination of the sun in degrees
    Declination(f64),
}

impl SolarDay {
    pub fn from_date(date: NaiveDate) -> Self {
        SolarDay::DayOfYear(date.ordinal0() as f64)
    }

    pub fn declination(&self) -> f64 {
        match *self {
            SolarDay::DayOfYear(day) => sun_declination(day),
            SolarDay::Declination(declination) => declination,
        }
    }
}

/// Declination of the sun (degrees) for a day of year counted from 0 at
/// January 1. Periodic over 365 days.
pub fn sun_declination(day_of_year: f64) -> f64 {
    let gamma = DEG_TO_RAD * 360.0 / 365.0 * day_of_year;
    (0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
        - 0.006758 * (2.0 * gamma).cos()
        + 0.000907 * (2.0 * gamma).sin()
        - 0.002697 * (3.0 * gamma).cos()
        + 0.00148 * (3.0 * gamma).sin())
        / DEG_TO_RAD
}

/// Sinusoidal declination for a month index (0 = January), peaking at
/// `max_declination` in late June.
pub fn seasonal_declination(month: usize, max_declination: f64) -> f64 {
    max_declination * (2.0 * PI * (month as f64 - 2.25) / 12.0).sin()
}

/// Hours from sunrise to sunset at a latitude (degrees, positive north) for a
/// declination of the sun (degrees).
pub fn day_length(latitude: f64, declination: f64) -> Result<f64, SolarError> {
    let cos_sunset_hour_angle =
        -(latitude * DEG_TO_RAD).tan() * (declination * DEG_TO_RAD).tan();

    if cos_sunset_hour_angle < -1.0 {
        warn!(latitude, declination, "sun does not set");
        return Err(SolarError::PolarDay {
            latitude,
            declination,
        });
    }
    if cos_sunset_hour_angle > 1.0 {
        warn!(latitude, declination, "sun does not rise");
        return Err(SolarError::PolarNight {
            latitude,
            declination,
        });
    }

    Ok(2.0 * cos_sunset_hour_angle.acos() / (DEGREES_PER_HOUR * DEG_TO_RAD))
}

/// Month index (0 = January) containing a day of year, given the length of
/// each month. Days past the end of the table fall in the last month.
pub fn month_of(day_of_year: u32, days_per_month: &[u32; 12]) -> usize {
    let mut month_end = 0;
    for (month, days) in days_per_month.iter().enumerate() {
        month_end += days;
        if day_of_year < month_end {
            return month;
        }
    }
    days_per_month.len() - 1
}
