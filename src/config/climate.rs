use serde::Deserialize;

use crate::solar::month_of;

/// Monthly cloud-cover derating of clear-sky results.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClimateTable {
    /// Fraction of clear-sky output retained in each month (0 to 1)
    pub cloud_factors: [f64; 12],
    pub days_per_month: [u32; 12],
}

impl ClimateTable {
    pub fn new(cloud_factors: [f64; 12], days_per_month: [u32; 12]) -> Result<Self, String> {
        let table = Self {
            cloud_factors,
            days_per_month,
        };
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(factor) = self
            .cloud_factors
            .iter()
            .find(|f| !(0.0..=1.0).contains(*f))
        {
            return Err(format!("Cloud factor {} is outside 0 to 1", factor));
        }
        if self.days_per_month.contains(&0) {
            return Err("Every month needs at least one day".to_string());
        }
        Ok(())
    }

    /// A table that leaves results untouched.
    pub fn clear_sky() -> Self {
        Self {
            cloud_factors: [1.0; 12],
            days_per_month: [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
        }
    }

    pub fn month(&self, day_of_year: u32) -> usize {
        month_of(day_of_year, &self.days_per_month)
    }

    pub fn cloud_factor(&self, day_of_year: u32) -> f64 {
        self.cloud_factors[self.month(day_of_year)]
    }

    pub fn days_in_year(&self) -> u32 {
        self.days_per_month.iter().sum()
    }
}
