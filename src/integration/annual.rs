use tracing::{info, trace};

use super::financial::{TariffModel, daily_fixed_mpp_return};
use crate::config::{ClimateTable, IntegrationStep};
use crate::pv_module::ModuleModel;
use crate::site::SiteGeometry;
use crate::solar::sun_declination;

/// Return of a fixed MPP module for one day of the year, optionally derated by
/// the cloud-cover factor of the day's month.
pub fn annual_fixed_mpp_return(
    module: &ModuleModel,
    site: &SiteGeometry,
    tariff: &TariffModel,
    day_of_year: u32,
    climate: Option<&ClimateTable>,
    step: IntegrationStep,
) -> f64 {
    let declination = sun_declination(day_of_year as f64);
    let income = daily_fixed_mpp_return(module, site, declination, tariff, step);
    match climate {
        Some(table) => income * table.cloud_factor(day_of_year),
        None => income,
    }
}

/// Returns summed over a run of days.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnualReturn {
    /// `(day_of_year, return)` in the order simulated
    pub daily: Vec<(u32, f64)>,
    /// Returns grouped by calendar month (0 = January)
    pub monthly: [f64; 12],
    pub total: f64,
}

impl AnnualReturn {
    pub fn days(&self) -> usize {
        self.daily.len()
    }

    /// Mean return per simulated day, zero for an empty run.
    pub fn daily_mean(&self) -> f64 {
        if self.daily.is_empty() {
            0.0
        } else {
            self.total / self.daily.len() as f64
        }
    }
}

/// Runs [`annual_fixed_mpp_return`] for every day index in `days` and groups
/// the results by month of `climate` (or of a clear-sky calendar when cloud
/// derating is off).
pub fn annual_return<I>(
    module: &ModuleModel,
    site: &SiteGeometry,
    tariff: &TariffModel,
    days: I,
    climate: Option<&ClimateTable>,
    step: IntegrationStep,
) -> AnnualReturn
where
    I: IntoIterator<Item = u32>,
{
    let calendar = climate.cloned().unwrap_or_else(ClimateTable::clear_sky);
    let mut summary = AnnualReturn {
        daily: Vec::new(),
        monthly: [0.0; 12],
        total: 0.0,
    };

    for day in days {
        let income = annual_fixed_mpp_return(module, site, tariff, day, climate, step);
        trace!(day, income, "simulated day");
        summary.monthly[calendar.month(day)] += income;
        summary.total += income;
        summary.daily.push((day, income));
    }

    info!(
        days = summary.days(),
        total = summary.total,
        "annual return complete"
    );
    summary
}
