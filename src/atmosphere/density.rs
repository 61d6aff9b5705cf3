// Glenn Research Center standard atmosphere:
// https://www.grc.nasa.gov/WWW/K-12/airplane/atmos.html
// The pressure laws are in imperial units, converted to metric at the end.

/// Top of the troposphere (m)
const TROPOPAUSE: f64 = 11_019.0;

/// Boundary between lower and upper stratosphere (m)
const UPPER_STRATOSPHERE: f64 = 25_099.0;

/// Converts (lbs/ft^2) / K into kg/m^3
const DENSITY_CONVERSION: f64 = 0.0341636;

/// Air density (kg/m^3) at a height (m) above sea level.
///
/// Height is assumed finite and non-negative.
pub fn air_density(height: f64) -> f64 {
    let (temperature, pressure) = if height < TROPOPAUSE {
        let temperature = 288.2 - 0.00649 * height;
        (temperature, 10331.0 * (0.003471 * temperature).powf(5.256))
    } else if height < UPPER_STRATOSPHERE {
        (216.5, 2309.9 * (1.73 - 0.00015748 * height).exp())
    } else {
        let temperature = 141.5 + 0.00299 * height;
        (temperature, 253.39 * (0.0046 * temperature).powf(-11.388))
    };

    pressure * DENSITY_CONVERSION / temperature
}
