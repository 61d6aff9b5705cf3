/// Location and orientation of a module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteGeometry {
    /// Latitude in degrees, positive north of the equator
    pub latitude: f64,
    /// Angle of the module normal to the vertical, in degrees
    pub module_tilt: f64,
    /// Azimuth offset of the module in degrees, from north towards east
    pub module_offset: f64,
}

impl SiteGeometry {
    pub fn new(latitude: f64, module_tilt: f64, module_offset: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err("Latitude must be between -90 and 90".to_string());
        }

        if !(-90.0..=90.0).contains(&module_tilt) {
            return Err("Module tilt must be between -90 and 90".to_string());
        }

        if !(-360.0..=360.0).contains(&module_offset) {
            return Err("Module offset must be between -360 and 360".to_string());
        }

        Ok(SiteGeometry {
            latitude,
            module_tilt,
            module_offset,
        })
    }

    /// A flat module at the given latitude.
    pub fn horizontal(latitude: f64) -> Self {
        SiteGeometry {
            latitude,
            module_tilt: 0.0,
            module_offset: 0.0,
        }
    }

    pub fn with_tilt(self, module_tilt: f64) -> Self {
        SiteGeometry {
            module_tilt,
            ..self
        }
    }
}
