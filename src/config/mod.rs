use chrono::NaiveDate;

use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::integration::{BatterySystem, TariffModel};
use crate::pv_module::{Datasheet, ModuleError, ModuleModel, ModuleParameters};
use crate::site::SiteGeometry;
use crate::solar::MAX_DECLINATION;

pub mod climate;
pub use climate::ClimateTable;

pub mod error;
pub use error::ConfigError;

pub mod time_step;
pub use time_step::{IntegrationStep, IntegrationStepError};

/// How the module model is obtained.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ModuleSource {
    /// Fitted from the datasheet's current/voltage points
    Datasheet(Datasheet),
    /// Model parameters given directly
    Parameters(ModuleParameters),
}

impl ModuleSource {
    pub fn model(&self) -> Result<ModuleModel, ModuleError> {
        match self {
            ModuleSource::Datasheet(datasheet) => ModuleModel::from_datasheet(datasheet),
            ModuleSource::Parameters(parameters) => ModuleModel::new(*parameters),
        }
    }
}

/// Inclusive range of calendar dates for an annual run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Period {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, ConfigError> {
        if start_date > end_date {
            return Err(ConfigError::DateOrder);
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }
}

impl Iterator for Period {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start_date <= self.end_date {
            let current_date = self.start_date;
            self.start_date = self.start_date.succ_opt()?;
            Some(current_date)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    site: SiteGeometry,
    declination: f64,
    max_declination: f64,
    battery: BatterySystem,
    module: ModuleSource,
    tariff: TariffModel,
    climate: ClimateTable,
    use_cloud_cover: bool,
    integration_step: IntegrationStep,
    period: Option<Period>,
}

// Deserializes a Config through a helper struct, validating the site, module,
// climate table and dates before anything is simulated.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ConfigHelper {
            site: SiteHelper,
            declination: f64,
            #[serde(default = "default_max_declination")]
            max_declination: f64,
            battery_voltage: f64,
            module_power: f64,
            module: ModuleSource,
            tariff: TariffModel,
            climate: Option<ClimateTable>,
            #[serde(default)]
            use_cloud_cover: bool,
            integration_step: Option<u8>,
            start_date: Option<String>,
            end_date: Option<String>,
        }

        #[derive(Deserialize)]
        struct SiteHelper {
            latitude: f64,
            module_tilt: f64,
            module_offset: f64,
        }

        fn default_max_declination() -> f64 {
            MAX_DECLINATION
        }

        let helper = ConfigHelper::deserialize(deserializer)?;

        let site = SiteGeometry::new(
            helper.site.latitude,
            helper.site.module_tilt,
            helper.site.module_offset,
        )
        .map_err(|e| D::Error::custom(ConfigError::Site(e)))?;

        if !(helper.battery_voltage > 0.0) {
            return Err(D::Error::custom(ConfigError::BatteryVoltage));
        }

        // Fit once here so a bad datasheet is reported at load time
        helper
            .module
            .model()
            .map_err(|e| D::Error::custom(ConfigError::from(e)))?;

        let climate = helper.climate.unwrap_or_else(ClimateTable::clear_sky);
        climate
            .validate()
            .map_err(|e| D::Error::custom(ConfigError::ClimateTable(e)))?;

        let integration_step = match helper.integration_step {
            Some(minutes) => IntegrationStep::try_from(minutes)
                .map_err(|e| D::Error::custom(ConfigError::from(e)))?,
            None => IntegrationStep::default(),
        };

        let period = match (helper.start_date, helper.end_date) {
            (Some(start), Some(end)) => {
                let parse = |date: &str| {
                    NaiveDate::parse_from_str(date, "%Y-%m-%d")
                        .map_err(|e| D::Error::custom(ConfigError::from(e)))
                };
                let period = Period::new(parse(&start)?, parse(&end)?).map_err(D::Error::custom)?;
                Some(period)
            }
            (None, None) => None,
            _ => return Err(D::Error::custom(ConfigError::IncompletePeriod)),
        };

        Ok(Config {
            site,
            declination: helper.declination,
            max_declination: helper.max_declination,
            battery: BatterySystem {
                battery_voltage: helper.battery_voltage,
                module_power: helper.module_power,
            },
            module: helper.module,
            tariff: helper.tariff,
            climate,
            use_cloud_cover: helper.use_cloud_cover,
            integration_step,
            period,
        })
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let config: Config = serde_json::from_reader(reader).map_err(ConfigError::from)?;

        Ok(config)
    }

    pub fn site(&self) -> &SiteGeometry {
        &self.site
    }

    /// Declination used for single-day results (degrees)
    pub fn declination(&self) -> f64 {
        self.declination
    }

    pub fn max_declination(&self) -> f64 {
        self.max_declination
    }

    pub fn battery(&self) -> &BatterySystem {
        &self.battery
    }

    pub fn module(&self) -> &ModuleSource {
        &self.module
    }

    pub fn tariff(&self) -> &TariffModel {
        &self.tariff
    }

    pub fn climate(&self) -> &ClimateTable {
        &self.climate
    }

    /// The climate table when annual results should be derated for clouds.
    pub fn cloud_cover(&self) -> Option<&ClimateTable> {
        self.use_cloud_cover.then_some(&self.climate)
    }

    pub fn integration_step(&self) -> IntegrationStep {
        self.integration_step
    }

    pub fn period(&self) -> Option<&Period> {
        self.period.as_ref()
    }
}
