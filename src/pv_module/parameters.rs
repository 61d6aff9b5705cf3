use serde::Deserialize;
use tracing::debug;

use super::error::ModuleError;

/// Fitted parameters of the single-diode module model.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ModuleParameters {
    /// Number of modules in parallel
    pub modules: u32,
    /// Short circuit current (A)
    pub short_circuit_current: f64,
    /// Diode dark current (A)
    pub dark_current: f64,
    /// Diode characteristic voltage (V)
    pub diode_voltage: f64,
    /// Fractional efficiency of the regulator
    pub efficiency: f64,
    /// Diode series resistance (ohm). Carried with the parameters, the current
    /// equation does not use it.
    #[serde(default)]
    pub series_resistance: f64,
    /// Number of cells in series
    pub series_cells: u32,
}

impl ModuleParameters {
    pub fn validate(&self) -> Result<(), ModuleError> {
        let invalid = |reason: &str| Err(ModuleError::InvalidParameters(reason.to_string()));

        if self.modules == 0 {
            return invalid("module count must be at least 1");
        }
        if self.series_cells == 0 {
            return invalid("series cell count must be at least 1");
        }
        if !(self.short_circuit_current.is_finite() && self.short_circuit_current > 0.0) {
            return invalid("short circuit current must be positive");
        }
        if !(self.dark_current.is_finite() && self.dark_current > 0.0) {
            return invalid("dark current must be positive");
        }
        if !(self.diode_voltage.is_finite() && self.diode_voltage > 0.0) {
            return invalid("diode voltage must be positive");
        }
        if !(self.efficiency > 0.0 && self.efficiency <= 1.0) {
            return invalid("regulator efficiency must be in (0, 1]");
        }
        if !(self.series_resistance.is_finite() && self.series_resistance >= 0.0) {
            return invalid("series resistance must be non-negative");
        }

        Ok(())
    }
}

/// The three current/voltage points quoted in module datasheets.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Datasheet {
    /// Number of modules in parallel
    pub modules: u32,
    /// Short circuit current (A)
    pub short_circuit_current: f64,
    /// Open circuit voltage (V)
    pub open_circuit_voltage: f64,
    /// Voltage at maximum power (V)
    pub max_power_voltage: f64,
    /// Current at maximum power (A)
    pub max_power_current: f64,
    /// Fractional efficiency of the regulator
    pub efficiency: f64,
    /// Number of cells in series
    pub series_cells: u32,
}

impl Datasheet {
    fn validate(&self) -> Result<(), ModuleError> {
        let invalid = |reason: &str| Err(ModuleError::InvalidDatasheet(reason.to_string()));

        if !(self.short_circuit_current.is_finite() && self.short_circuit_current > 0.0) {
            return invalid("short circuit current must be positive");
        }
        if !(self.open_circuit_voltage.is_finite() && self.open_circuit_voltage > 0.0) {
            return invalid("open circuit voltage must be positive");
        }
        if !(self.max_power_current > 0.0 && self.max_power_current < self.short_circuit_current)
        {
            return invalid("maximum power current must be between 0 and the short circuit current");
        }
        if !(self.max_power_voltage > 0.0 && self.max_power_voltage < self.open_circuit_voltage) {
            return invalid("maximum power voltage must be between 0 and the open circuit voltage");
        }
        if self.series_cells == 0 {
            return invalid("series cell count must be at least 1");
        }

        Ok(())
    }

    /// Fits the diode model so that it passes through the short circuit, open
    /// circuit and maximum power points. Assumes the dark current is small
    /// compared with the short circuit current.
    pub fn fit(&self) -> Result<ModuleParameters, ModuleError> {
        self.validate()?;

        let cells = self.series_cells as f64;
        let diode_voltage = (self.max_power_voltage - self.open_circuit_voltage)
            / (cells * (1.0 - self.max_power_current / self.short_circuit_current).ln());
        let dark_current = self.short_circuit_current
            * (-self.open_circuit_voltage / (cells * diode_voltage)).exp();

        let parameters = ModuleParameters {
            modules: self.modules,
            short_circuit_current: self.short_circuit_current,
            dark_current,
            diode_voltage,
            efficiency: self.efficiency,
            series_resistance: 0.0,
            series_cells: self.series_cells,
        };
        parameters.validate().map_err(|e| match e {
            ModuleError::InvalidParameters(reason) => ModuleError::InvalidDatasheet(reason),
            other => other,
        })?;

        debug!(
            diode_voltage,
            dark_current, "fitted single-diode model from datasheet"
        );
        Ok(parameters)
    }
}
