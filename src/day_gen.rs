use chrono::{Datelike, NaiveDate};

use crate::config::{Config, Period};
use crate::solar::SolarDay;

/// Days simulated by an annual run: the configured period, or every day of
/// the climate table's year when no period is set.
pub struct DayGenerator {
    period: Option<Period>,
    days_in_year: u32,
}

impl DayGenerator {
    pub fn new(config: &Config) -> Self {
        Self {
            period: config.period().cloned(),
            days_in_year: config.climate().days_in_year(),
        }
    }

    pub fn from_period(period: Option<Period>, days_in_year: u32) -> Self {
        Self {
            period,
            days_in_year,
        }
    }

    pub fn generate_date_series(&self) -> Vec<NaiveDate> {
        match &self.period {
            Some(period) => period.clone().collect(),
            None => Vec::new(),
        }
    }

    /// Day-of-year indices (0 = January 1) of every simulated day.
    pub fn generate_day_series(&self) -> Vec<u32> {
        match &self.period {
            Some(period) => period.clone().map(|date| date.ordinal0()).collect(),
            None => (0..self.days_in_year).collect(),
        }
    }

    pub fn generate_solar_days(&self) -> Vec<SolarDay> {
        match &self.period {
            Some(period) => period.clone().map(SolarDay::from_date).collect(),
            None => (0..self.days_in_year)
                .map(|day| SolarDay::DayOfYear(day as f64))
                .collect(),
        }
    }
}
