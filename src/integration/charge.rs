use serde::Deserialize;

use super::sweep::{Tracking, sweep};
use crate::config::IntegrationStep;
use crate::pv_module::ModuleModel;
use crate::site::SiteGeometry;
use crate::solar::SunGeometry;

/// Battery charged by the module, and the module's rating for the full power
/// upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BatterySystem {
    /// Battery terminal voltage (V)
    pub battery_voltage: f64,
    /// Rated module power at standard irradiance (W)
    pub module_power: f64,
}

/// How the module's output reaches the battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeRegime {
    /// All of the module's rated power, scaled by irradiance, goes into the
    /// battery. An upper bound.
    FullPower,
    /// The module is held at the battery voltage.
    BatteryVoltage,
    /// A maximum power point tracking regulator converts the module's best
    /// power down to the battery voltage.
    MaximumPowerPoint,
}

impl ChargeRegime {
    /// Charging current (A) at an irradiance given as a percentage of the
    /// standard irradiance.
    pub fn current(
        &self,
        module: &ModuleModel,
        system: &BatterySystem,
        irradiance_percent: f64,
    ) -> f64 {
        match self {
            ChargeRegime::FullPower => {
                irradiance_percent / 100.0 * system.module_power / system.battery_voltage
            }
            ChargeRegime::BatteryVoltage => {
                module.current(irradiance_percent, system.battery_voltage)
            }
            ChargeRegime::MaximumPowerPoint => {
                module.optimal_power(irradiance_percent) / system.battery_voltage
            }
        }
    }
}

/// Charge (Ah) delivered to the battery over one day by a fixed module.
pub fn solar_fixed_charge(
    module: &ModuleModel,
    site: &SiteGeometry,
    declination: f64,
    regime: ChargeRegime,
    system: &BatterySystem,
    step: IntegrationStep,
) -> f64 {
    let geometry = SunGeometry::new(site, declination);
    let amp_samples = sweep(&geometry, Tracking::Fixed, step, |sample| {
        regime.current(module, system, sample.irradiance_percent())
    });
    amp_samples * step.hours()
}

/// Charge (Ah) delivered to the battery over one day by a module that always
/// faces the sun.
pub fn solar_following_charge(
    module: &ModuleModel,
    latitude: f64,
    declination: f64,
    regime: ChargeRegime,
    system: &BatterySystem,
    step: IntegrationStep,
) -> f64 {
    let geometry = SunGeometry::horizontal(latitude, declination);
    let amp_samples = sweep(&geometry, Tracking::Following, step, |sample| {
        regime.current(module, system, sample.irradiance_percent())
    });
    2.0 * amp_samples * step.hours()
}
