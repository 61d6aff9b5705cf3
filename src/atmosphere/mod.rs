//! Atmospheric attenuation model
//!
//! Broadband clear-sky attenuation of sunlight: an empirical air density
//! profile, integrated along the slant path of a ray, drives an exponential
//! loss law calibrated on the vertical path.

pub mod constants;
pub mod density;
pub mod path_loss;

pub use constants::{DEG_TO_RAD, SOLAR_CONSTANT, SOLAR_STANDARD};
pub use constants::{loss_constant, solar_constant, solar_standard};
pub use density::air_density;
pub use path_loss::path_loss;

/// Clear-sky irradiance (W/m^2) on a surface normal to the sun, for a sun at
/// zenith-angle cosine `cos_zenith`. Only meaningful for `cos_zenith > 0`.
pub fn normal_irradiance(cos_zenith: f64) -> f64 {
    SOLAR_CONSTANT * (-loss_constant() * path_loss(cos_zenith)).exp()
}
