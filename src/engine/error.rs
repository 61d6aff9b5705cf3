use crate::pv_module::ModuleError;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    ParametersNotInitialized,
    BatteryVoltage(f64),
    Module(ModuleError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::ParametersNotInitialized => write!(
                f,
                "module model parameters must be set or derived before computing module output"
            ),
            EngineError::BatteryVoltage(voltage) => {
                write!(f, "battery voltage must be positive, got {} V", voltage)
            }
            EngineError::Module(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<ModuleError> for EngineError {
    fn from(err: ModuleError) -> EngineError {
        EngineError::Module(err)
    }
}
