//! Tabulations of the models over their inputs, for checking a site or the
//! models themselves against published values.

use crate::atmosphere::{DEG_TO_RAD, air_density, normal_irradiance};
use crate::config::IntegrationStep;
use crate::integration::{daily_solar_energy_fixed, daily_solar_energy_following};
use crate::site::SiteGeometry;
use crate::solar::{DEGREES_PER_HOUR, day_length, seasonal_declination};

const SOLAR_NOON_HOUR: f64 = 12.0;

/// Clear-sky normal irradiance (W/m^2) from noon until sunset, with the sun
/// overhead at noon, every `hour_step` hours.
pub fn noon_irradiance_profile(hour_step: f64) -> Vec<(f64, f64)> {
    let mut profile = Vec::new();
    if hour_step <= 0.0 {
        return profile;
    }

    for index in 0_u32.. {
        let hour = SOLAR_NOON_HOUR + index as f64 * hour_step;
        let cos_zenith = (DEG_TO_RAD * DEGREES_PER_HOUR * (hour - SOLAR_NOON_HOUR)).cos();
        if cos_zenith <= 0.0 {
            break;
        }
        profile.push((hour, normal_irradiance(cos_zenith)));
    }
    profile
}

/// Daily energy at one latitude for a given declination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatitudeRow {
    pub latitude: f64,
    /// Hours of daylight, `None` during polar day or night
    pub day_length: Option<f64>,
    /// kWh/m^2 on a module following the sun
    pub following: f64,
    /// kWh/m^2 on a module tilted by the declination
    pub fixed_declination_tilt: f64,
    /// kWh/m^2 on a module tilted by the latitude
    pub fixed_latitude_tilt: f64,
}

/// [`LatitudeRow`]s for every whole degree of latitude in `latitudes`.
pub fn latitude_table(
    latitudes: std::ops::Range<i32>,
    declination: f64,
    step: IntegrationStep,
) -> Vec<LatitudeRow> {
    latitudes
        .map(|degree| {
            let latitude = degree as f64;
            let site = SiteGeometry::horizontal(latitude);
            LatitudeRow {
                latitude,
                day_length: day_length(latitude, declination).ok(),
                following: daily_solar_energy_following(latitude, declination, step),
                fixed_declination_tilt: daily_solar_energy_fixed(
                    &site.with_tilt(declination),
                    declination,
                    step,
                ),
                fixed_latitude_tilt: daily_solar_energy_fixed(
                    &site.with_tilt(latitude),
                    declination,
                    step,
                ),
            }
        })
        .collect()
}

/// Daily energy (kWh/m^2) on a horizontal module for each month, using the
/// seasonal declination of the month.
pub fn monthly_horizontal_energy(
    latitude: f64,
    max_declination: f64,
    step: IntegrationStep,
) -> [f64; 12] {
    let site = SiteGeometry::horizontal(latitude);
    std::array::from_fn(|month| {
        daily_solar_energy_fixed(&site, seasonal_declination(month, max_declination), step)
    })
}

/// Air density (kg/m^3) from the ground up to, but excluding, `max_height`.
pub fn density_profile(max_height: f64, height_step: f64) -> Vec<(f64, f64)> {
    if height_step <= 0.0 {
        return Vec::new();
    }
    let samples = (max_height / height_step).ceil().max(0.0) as usize;
    (0..samples)
        .map(|i| {
            let height = i as f64 * height_step;
            (height, air_density(height))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solar::MAX_DECLINATION;

    #[test]
    fn test_noon_profile() {
        let profile = noon_irradiance_profile(0.1);

        assert_eq!(profile[0].0, 12.0);
        assert!((profile[0].1 - 1060.0).abs() < 1.0, "{}", profile[0].1);
        assert!(profile.windows(2).all(|w| w[1].1 < w[0].1));
        assert!(profile.iter().all(|(hour, power)| *hour < 18.0 && *power > 0.0));
        assert!(profile.len() >= 59, "{}", profile.len());
        assert!(noon_irradiance_profile(0.0).is_empty());
    }

    #[test]
    fn test_latitude_table() {
        let step = IntegrationStep::try_from(10).unwrap();
        let table = latitude_table(-60..60, MAX_DECLINATION, step);

        assert_eq!(table.len(), 120);
        assert_eq!(table[0].latitude, -60.0);
        for row in &table {
            assert!(row.day_length.is_some(), "{}", row.latitude);
            assert!(row.following >= row.fixed_declination_tilt, "{}", row.latitude);
            assert!(row.following >= row.fixed_latitude_tilt, "{}", row.latitude);
        }

        // Northern summer: days lengthen towards the north
        assert!(table[119].day_length > table[0].day_length);
    }

    #[test]
    fn test_southern_site_peaks_in_summer() {
        let step = IntegrationStep::try_from(10).unwrap();
        let energy = monthly_horizontal_energy(-30.5, MAX_DECLINATION, step);

        assert!(energy.iter().all(|e| *e > 0.0));
        assert!(energy[11] > energy[5]);
        assert!(energy[0] > energy[6]);
    }

    #[test]
    fn test_density_profile() {
        let profile = density_profile(30000.0, 1000.0);

        assert_eq!(profile.len(), 30);
        assert_eq!(profile[0], (0.0, air_density(0.0)));
        assert_eq!(profile[29].0, 29000.0);
        assert!(profile[29].1 < profile[0].1);
    }
}
