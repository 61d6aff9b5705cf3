use crate::atmosphere::DEG_TO_RAD;
use crate::site::SiteGeometry;

/// Hour angle swept by the sun per minute (degrees)
pub const DEGREES_PER_MINUTE: f64 = 0.25;

/// Sun and module angles for one site on one day, as functions of the time
/// from solar noon.
#[derive(Debug, Clone, Copy)]
pub struct SunGeometry {
    cos_latitude: f64,
    sin_latitude: f64,
    cos_declination: f64,
    sin_declination: f64,
    // Module normal, tilt combined with latitude
    cos_normal: f64,
    sin_normal: f64,
    module_offset: f64,
}

impl SunGeometry {
    pub fn new(site: &SiteGeometry, declination: f64) -> Self {
        let latitude = site.latitude * DEG_TO_RAD;
        let declination = declination * DEG_TO_RAD;
        let normal = site.module_tilt * DEG_TO_RAD + latitude;

        Self {
            cos_latitude: latitude.cos(),
            sin_latitude: latitude.sin(),
            cos_declination: declination.cos(),
            sin_declination: declination.sin(),
            cos_normal: normal.cos(),
            sin_normal: normal.sin(),
            module_offset: site.module_offset,
        }
    }

    /// Geometry for a module that only needs the sun's position.
    pub fn horizontal(latitude: f64, declination: f64) -> Self {
        Self::new(&SiteGeometry::horizontal(latitude), declination)
    }

    /// Cosine of the sun's angle to the local vertical, `minute` minutes after
    /// solar noon (negative before noon).
    pub fn cos_zenith(&self, minute: f64) -> f64 {
        let cos_hour_angle = (DEGREES_PER_MINUTE * minute * DEG_TO_RAD).cos();
        self.cos_latitude * self.cos_declination * cos_hour_angle
            + self.sin_latitude * self.sin_declination
    }

    /// Cosine of the angle between the sun's rays and the module normal.
    /// The module's azimuth offset shifts the hour angle it sees.
    pub fn cos_incidence(&self, minute: f64) -> f64 {
        let cos_offset_hour_angle =
            ((DEGREES_PER_MINUTE * minute + self.module_offset) * DEG_TO_RAD).cos();
        self.cos_normal * self.cos_declination * cos_offset_hour_angle
            + self.sin_normal * self.sin_declination
    }
}
