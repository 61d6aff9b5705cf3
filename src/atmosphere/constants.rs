//! Atmospheric and radiometric constants
//!
//! Calibration values for the broadband attenuation law
//! `irradiance = SOLAR_CONSTANT * exp(-LOSS_CONSTANT * path_loss(cos_phi))`.

use std::sync::LazyLock;

use tracing::debug;

use super::path_loss::path_loss;

/// Extraterrestrial solar irradiance (W/m^2)
pub const SOLAR_CONSTANT: f64 = 1366.0;

/// Standard irradiance used to rate photovoltaic modules (W/m^2)
pub const SOLAR_STANDARD: f64 = 1000.0;

/// Optical depth of the vertical path. Puts clear-sky ground irradiance with
/// the sun overhead at about 1060 W/m^2.
pub const REFERENCE_FRACTION: f64 = 0.253617853024622586;

/// Effective earth radius of the slant-path model (m)
/// Tuned value, not the mean earth radius. The loss calibration depends on it.
pub const EARTH_RADIUS: f64 = 6_335_437.0;

/// Upper limit of the path integration (m). 99.999% of air mass is below.
pub const ATMOSPHERE_CEILING: f64 = 100_000.0;

/// Degrees to radians, with the truncated pi used by the reference outputs
pub const DEG_TO_RAD: f64 = 3.1415927 / 180.0;

/// Attenuation rate per unit of path loss, calibrated once against the vertical path
pub static LOSS_CONSTANT: LazyLock<f64> = LazyLock::new(|| {
    let vertical = path_loss(1.0);
    let constant = REFERENCE_FRACTION / vertical;
    debug!(vertical, constant, "calibrated atmospheric loss constant");
    constant
});

pub fn solar_constant() -> f64 {
    SOLAR_CONSTANT
}

pub fn solar_standard() -> f64 {
    SOLAR_STANDARD
}

pub fn loss_constant() -> f64 {
    *LOSS_CONSTANT
}
