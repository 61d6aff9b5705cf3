use std::fmt;

/// The sun does not cross the horizon on the requested day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolarError {
    PolarDay { latitude: f64, declination: f64 },
    PolarNight { latitude: f64, declination: f64 },
}

impl fmt::Display for SolarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolarError::PolarDay {
                latitude,
                declination,
            } => write!(
                f,
                "no sunset at latitude {latitude} with declination {declination} (polar day)"
            ),
            SolarError::PolarNight {
                latitude,
                declination,
            } => write!(
                f,
                "no sunrise at latitude {latitude} with declination {declination} (polar night)"
            ),
        }
    }
}

impl std::error::Error for SolarError {}
