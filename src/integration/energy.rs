use super::WATTS_PER_KILOWATT;
use super::sweep::{Tracking, sweep};
use crate::config::IntegrationStep;
use crate::site::SiteGeometry;
use crate::solar::SunGeometry;

/// Clear-sky solar energy (kWh/m^2) reaching a fixed module over one day.
pub fn daily_solar_energy_fixed(
    site: &SiteGeometry,
    declination: f64,
    step: IntegrationStep,
) -> f64 {
    let geometry = SunGeometry::new(site, declination);
    let watt_samples = sweep(&geometry, Tracking::Fixed, step, |sample| {
        sample.module_irradiance()
    });
    watt_samples * step.hours() / WATTS_PER_KILOWATT
}

/// Clear-sky solar energy (kWh/m^2) reaching a module that always faces the
/// sun, over one day.
pub fn daily_solar_energy_following(
    latitude: f64,
    declination: f64,
    step: IntegrationStep,
) -> f64 {
    let geometry = SunGeometry::horizontal(latitude, declination);
    let watt_samples = sweep(&geometry, Tracking::Following, step, |sample| {
        sample.module_irradiance()
    });
    2.0 * watt_samples * step.hours() / WATTS_PER_KILOWATT
}
