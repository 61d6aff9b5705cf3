use crate::atmosphere::{SOLAR_STANDARD, normal_irradiance};
use crate::config::IntegrationStep;
use crate::solar::SunGeometry;

/// A sweep never goes further than this from noon (minutes), so both sweeps
/// together cover at most one full day.
pub const HALF_DAY_MINUTES: f64 = 720.0;

/// Sun position relative to the site and the module at one sample time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunSample {
    /// Minutes from solar noon, negative in the morning
    pub minute: f64,
    pub cos_zenith: f64,
    pub cos_incidence: f64,
}

impl SunSample {
    /// Clear-sky irradiance on the module plane (W/m^2)
    pub fn module_irradiance(&self) -> f64 {
        self.cos_incidence * normal_irradiance(self.cos_zenith)
    }

    /// Module irradiance as a percentage of the standard rating irradiance
    pub fn irradiance_percent(&self) -> f64 {
        self.module_irradiance() * 100.0 / SOLAR_STANDARD
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tracking {
    /// Module fixed at the site's tilt and offset
    Fixed,
    /// Module always normal to the sun
    Following,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Afternoon,
    Morning,
}

fn half_day<F>(
    geometry: &SunGeometry,
    tracking: Tracking,
    step: IntegrationStep,
    direction: Direction,
    integrand: &mut F,
) -> f64
where
    F: FnMut(&SunSample) -> f64,
{
    let sign = match direction {
        Direction::Afternoon => 1.0,
        Direction::Morning => -1.0,
    };

    let mut sum = 0.0;
    let mut index = 0_u32;
    loop {
        let minute = sign * index as f64 * step.minutes();
        if minute.abs() >= HALF_DAY_MINUTES {
            break;
        }

        let cos_zenith = geometry.cos_zenith(minute);
        let cos_incidence = match tracking {
            Tracking::Fixed => geometry.cos_incidence(minute),
            Tracking::Following => 1.0,
        };
        // Sun below the horizon or behind the module
        if cos_zenith <= 0.0 || cos_incidence <= 0.0 {
            break;
        }

        sum += integrand(&SunSample {
            minute,
            cos_zenith,
            cos_incidence,
        });
        index += 1;
    }

    sum
}

/// Sums `integrand` over samples taken every `step` from solar noon while the
/// sun shines on the module.
///
/// A fixed module is swept forward and then backward from noon, and noon is
/// sampled by both sweeps. A following module is swept forward only and the
/// caller doubles the result.
///
/// Returns zero when the sun never reaches the module (polar night).
pub fn sweep<F>(
    geometry: &SunGeometry,
    tracking: Tracking,
    step: IntegrationStep,
    mut integrand: F,
) -> f64
where
    F: FnMut(&SunSample) -> f64,
{
    let afternoon = half_day(geometry, tracking, step, Direction::Afternoon, &mut integrand);
    match tracking {
        Tracking::Fixed => {
            afternoon + half_day(geometry, tracking, step, Direction::Morning, &mut integrand)
        }
        Tracking::Following => afternoon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::SiteGeometry;

    fn count(geometry: &SunGeometry, tracking: Tracking, step: IntegrationStep) -> f64 {
        sweep(geometry, tracking, step, |_| 1.0)
    }

    #[test]
    fn test_following_sweep_spans_half_day() {
        // Equinox: twelve hours of daylight, six after noon.
        let geometry = SunGeometry::horizontal(-34.929, 0.0);
        let samples = count(&geometry, Tracking::Following, IntegrationStep::MINUTE);
        assert!((samples - 360.0).abs() <= 1.0, "{samples}");
    }

    #[test]
    fn test_fixed_sweep_counts_noon_twice() {
        let geometry = SunGeometry::horizontal(-34.929, 0.0);
        let fixed = count(&geometry, Tracking::Fixed, IntegrationStep::MINUTE);
        let following = count(&geometry, Tracking::Following, IntegrationStep::MINUTE);
        assert_eq!(fixed, 2.0 * following);
    }

    #[test]
    fn test_polar_night_gives_zero() {
        let geometry = SunGeometry::horizontal(-80.0, 23.45);
        assert_eq!(count(&geometry, Tracking::Fixed, IntegrationStep::MINUTE), 0.0);
        assert_eq!(
            count(&geometry, Tracking::Following, IntegrationStep::MINUTE),
            0.0
        );
    }

    #[test]
    fn test_polar_day_is_bounded() {
        let geometry = SunGeometry::horizontal(80.0, 23.45);
        let samples = count(&geometry, Tracking::Following, IntegrationStep::MINUTE);
        assert_eq!(samples, HALF_DAY_MINUTES);
    }

    #[test]
    fn test_sweep_stops_when_sun_leaves_module() {
        // Offset half a turn, the module faces away from the noon sun.
        let site = SiteGeometry::new(0.0, 0.0, 180.0).unwrap();
        let geometry = SunGeometry::new(&site, 0.0);
        assert_eq!(count(&geometry, Tracking::Fixed, IntegrationStep::MINUTE), 0.0);
    }

    #[test]
    fn test_samples_step_through_the_day() {
        let geometry = SunGeometry::horizontal(0.0, 0.0);
        let step = IntegrationStep::try_from(30).unwrap();
        let mut minutes = Vec::new();
        sweep(&geometry, Tracking::Fixed, step, |sample| {
            minutes.push(sample.minute);
            0.0
        });
        assert_eq!(&minutes[..3], &[0.0, 30.0, 60.0]);
        assert!(minutes.contains(&-330.0));
        assert!(minutes.iter().all(|m| m.abs() < 360.0));
    }
}
