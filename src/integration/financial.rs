use serde::Deserialize;

use super::WATTS_PER_KILOWATT;
use super::sweep::{Tracking, sweep};
use crate::config::IntegrationStep;
use crate::pv_module::ModuleModel;
use crate::site::SiteGeometry;
use crate::solar::SunGeometry;

/// Electricity prices and the household load offset by the module.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TariffModel {
    /// Price paid for grid electricity (currency/kWh)
    pub cost: f64,
    /// Price received for electricity exported to the grid (currency/kWh)
    pub feed_in: f64,
    /// Household consumption met first by the module (kW)
    pub usage: f64,
}

impl TariffModel {
    /// Income rate (currency/h) while the module produces `power` kW.
    ///
    /// Production up to `usage` saves the grid `cost`, anything above it is
    /// exported at the `feed_in` price.
    pub fn income_rate(&self, power: f64) -> f64 {
        if power > self.usage {
            self.feed_in * (power - self.usage) + self.cost * self.usage
        } else {
            self.cost * power
        }
    }
}

/// Money earned over one day by a fixed module run at its maximum power
/// point.
pub fn daily_fixed_mpp_return(
    module: &ModuleModel,
    site: &SiteGeometry,
    declination: f64,
    tariff: &TariffModel,
    step: IntegrationStep,
) -> f64 {
    let geometry = SunGeometry::new(site, declination);
    let income_samples = sweep(&geometry, Tracking::Fixed, step, |sample| {
        let power = module.optimal_power(sample.irradiance_percent()) / WATTS_PER_KILOWATT;
        tariff.income_rate(power)
    });
    income_samples * step.hours()
}
