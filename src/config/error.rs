use crate::config::time_step::IntegrationStepError;
use crate::pv_module::ModuleError;

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    DateOrder,
    DateParse(chrono::ParseError),
    IncompletePeriod,
    IntegrationStep(IntegrationStepError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Site(String),
    Module(ModuleError),
    ClimateTable(String),
    BatteryVoltage,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DateOrder => write!(f, "end_date cannot be earlier than start_date"),
            ConfigError::DateParse(e) => write!(f, "Failed to parse date: {}", e),
            ConfigError::IncompletePeriod => {
                write!(f, "start_date and end_date must be given together")
            }
            ConfigError::IntegrationStep(e) => write!(f, "{}", e),
            ConfigError::Io(e) => write!(f, "I/O error: {}", e),
            ConfigError::Json(e) => write!(f, "Failed to parse JSON: {}", e),
            ConfigError::Site(e) => write!(f, "Invalid site: {}", e),
            ConfigError::Module(e) => write!(f, "{}", e),
            ConfigError::ClimateTable(e) => write!(f, "Invalid climate table: {}", e),
            ConfigError::BatteryVoltage => write!(f, "battery_voltage must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> ConfigError {
        ConfigError::Io(err)
    }
}

impl From<chrono::ParseError> for ConfigError {
    fn from(err: chrono::ParseError) -> ConfigError {
        ConfigError::DateParse(err)
    }
}

impl From<IntegrationStepError> for ConfigError {
    fn from(err: IntegrationStepError) -> ConfigError {
        ConfigError::IntegrationStep(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> ConfigError {
        ConfigError::Json(err)
    }
}

impl From<ModuleError> for ConfigError {
    fn from(err: ModuleError) -> ConfigError {
        ConfigError::Module(err)
    }
}
