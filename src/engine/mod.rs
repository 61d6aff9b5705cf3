//! Stateful entry point to the simulation.
//!
//! [`SolarPowerEngine`] holds the module model, battery and climate settings
//! of a session and forwards to the pure integration routines. Every
//! computation that needs the module fails with
//! [`EngineError::ParametersNotInitialized`] until a model has been set or
//! derived.

use crate::config::{ClimateTable, Config, IntegrationStep};
use crate::integration::{
    self, AnnualReturn, BatterySystem, ChargeRegime, TariffModel, annual_return,
};
use crate::pv_module::{Datasheet, ModuleModel, ModuleParameters};
use crate::site::SiteGeometry;

pub mod error;
pub use error::EngineError;

#[derive(Debug, Clone)]
pub struct SolarPowerEngine {
    model: Option<ModuleModel>,
    battery_voltage: f64,
    climate: ClimateTable,
    step: IntegrationStep,
}

impl SolarPowerEngine {
    /// An engine without a module model. The battery voltage divides every
    /// charging current, so it must be positive.
    pub fn new(
        battery_voltage: f64,
        climate: ClimateTable,
        step: IntegrationStep,
    ) -> Result<Self, EngineError> {
        if !(battery_voltage.is_finite() && battery_voltage > 0.0) {
            return Err(EngineError::BatteryVoltage(battery_voltage));
        }
        Ok(Self {
            model: None,
            battery_voltage,
            climate,
            step,
        })
    }

    /// An engine with the battery, climate, step and module of a config file.
    pub fn from_config(config: &Config) -> Result<Self, EngineError> {
        let mut engine = Self::new(
            config.battery().battery_voltage,
            config.climate().clone(),
            config.integration_step(),
        )?;
        engine.model = Some(config.module().model()?);
        Ok(engine)
    }

    pub fn set_model_parameters(
        &mut self,
        parameters: ModuleParameters,
    ) -> Result<(), EngineError> {
        self.model = Some(ModuleModel::new(parameters)?);
        Ok(())
    }

    pub fn derive_simple_model(&mut self, datasheet: &Datasheet) -> Result<(), EngineError> {
        self.model = Some(ModuleModel::from_datasheet(datasheet)?);
        Ok(())
    }

    pub fn model(&self) -> Result<&ModuleModel, EngineError> {
        self.model.as_ref().ok_or(EngineError::ParametersNotInitialized)
    }

    pub fn integration_step(&self) -> IntegrationStep {
        self.step
    }

    pub fn set_integration_step(&mut self, step: IntegrationStep) {
        self.step = step;
    }

    fn battery(&self, module_power: f64) -> BatterySystem {
        BatterySystem {
            battery_voltage: self.battery_voltage,
            module_power,
        }
    }

    fn cloud_cover(&self, use_cloud_cover: bool) -> Option<&ClimateTable> {
        use_cloud_cover.then_some(&self.climate)
    }

    pub fn compute_daily_fixed_mpp_return(
        &self,
        site: &SiteGeometry,
        declination: f64,
        tariff: &TariffModel,
    ) -> Result<f64, EngineError> {
        Ok(integration::daily_fixed_mpp_return(
            self.model()?,
            site,
            declination,
            tariff,
            self.step,
        ))
    }

    /// Return for one day index, derated by that month's cloud factor when
    /// `use_cloud_cover` is set.
    pub fn compute_annual_fixed_mpp_return(
        &self,
        site: &SiteGeometry,
        tariff: &TariffModel,
        day_of_year: u32,
        use_cloud_cover: bool,
    ) -> Result<f64, EngineError> {
        Ok(integration::annual_fixed_mpp_return(
            self.model()?,
            site,
            tariff,
            day_of_year,
            self.cloud_cover(use_cloud_cover),
            self.step,
        ))
    }

    /// Sums [`Self::compute_annual_fixed_mpp_return`] over `days`.
    pub fn compute_annual_return<I>(
        &self,
        site: &SiteGeometry,
        tariff: &TariffModel,
        days: I,
        use_cloud_cover: bool,
    ) -> Result<AnnualReturn, EngineError>
    where
        I: IntoIterator<Item = u32>,
    {
        Ok(annual_return(
            self.model()?,
            site,
            tariff,
            days,
            self.cloud_cover(use_cloud_cover),
            self.step,
        ))
    }

    /// Amp-hours charged into the battery in one day by a fixed module rated
    /// at `module_power` watts.
    pub fn solar_fixed_charge(
        &self,
        site: &SiteGeometry,
        declination: f64,
        regime: ChargeRegime,
        module_power: f64,
    ) -> Result<f64, EngineError> {
        Ok(integration::solar_fixed_charge(
            self.model()?,
            site,
            declination,
            regime,
            &self.battery(module_power),
            self.step,
        ))
    }

    pub fn solar_following_charge(
        &self,
        latitude: f64,
        declination: f64,
        regime: ChargeRegime,
        module_power: f64,
    ) -> Result<f64, EngineError> {
        Ok(integration::solar_following_charge(
            self.model()?,
            latitude,
            declination,
            regime,
            &self.battery(module_power),
            self.step,
        ))
    }

    pub fn daily_solar_energy_fixed(&self, site: &SiteGeometry, declination: f64) -> f64 {
        integration::daily_solar_energy_fixed(site, declination, self.step)
    }

    pub fn daily_solar_energy_following(&self, latitude: f64, declination: f64) -> f64 {
        integration::daily_solar_energy_following(latitude, declination, self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pv_module::ModuleError;
    use approx::assert_relative_eq;

    const TARIFF: TariffModel = TariffModel {
        cost: 0.18,
        feed_in: 0.5,
        usage: 0.0,
    };

    const DATASHEET: Datasheet = Datasheet {
        modules: 1,
        short_circuit_current: 7.8,
        open_circuit_voltage: 21.8,
        max_power_voltage: 17.3,
        max_power_current: 7.23,
        efficiency: 1.0,
        series_cells: 1,
    };

    fn adelaide() -> SiteGeometry {
        SiteGeometry::new(-34.929, 22.0, 45.0).unwrap()
    }

    fn engine() -> SolarPowerEngine {
        SolarPowerEngine::new(12.0, ClimateTable::clear_sky(), IntegrationStep::MINUTE)
            .unwrap()
    }

    #[test]
    fn test_rejects_non_positive_battery_voltage() {
        for voltage in [0.0, -12.0, f64::NAN, f64::INFINITY] {
            let result =
                SolarPowerEngine::new(voltage, ClimateTable::clear_sky(), IntegrationStep::MINUTE);
            assert!(
                matches!(result, Err(EngineError::BatteryVoltage(_))),
                "{voltage}"
            );
        }
    }

    #[test]
    fn test_charge_is_finite_for_accepted_battery() {
        let mut engine = engine();
        engine.set_integration_step(IntegrationStep::try_from(10).unwrap());
        engine.derive_simple_model(&DATASHEET).unwrap();
        for regime in [
            ChargeRegime::FullPower,
            ChargeRegime::BatteryVoltage,
            ChargeRegime::MaximumPowerPoint,
        ] {
            let charge = engine
                .solar_fixed_charge(&adelaide(), 23.45, regime, 125.0)
                .unwrap();
            assert!(charge.is_finite() && charge > 0.0, "{regime:?}: {charge}");
        }
    }

    #[test]
    fn test_module_queries_fail_before_initialization() {
        let engine = engine();
        assert_eq!(
            engine.compute_daily_fixed_mpp_return(&adelaide(), 23.45, &TARIFF),
            Err(EngineError::ParametersNotInitialized)
        );
        assert_eq!(
            engine.compute_annual_fixed_mpp_return(&adelaide(), &TARIFF, 0, false),
            Err(EngineError::ParametersNotInitialized)
        );
        assert_eq!(
            engine.solar_fixed_charge(&adelaide(), 23.45, ChargeRegime::FullPower, 125.0),
            Err(EngineError::ParametersNotInitialized)
        );
        assert_eq!(
            engine.solar_following_charge(-34.929, 23.45, ChargeRegime::FullPower, 125.0),
            Err(EngineError::ParametersNotInitialized)
        );
        assert!(engine.compute_annual_return(&adelaide(), &TARIFF, 0..3, false).is_err());
    }

    #[test]
    fn test_energy_needs_no_module() {
        let engine = engine();
        assert_relative_eq!(
            engine.daily_solar_energy_fixed(&adelaide(), 23.45),
            2.685737477997053,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            engine.daily_solar_energy_following(-34.929, 23.45),
            5.708332145342183,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_derived_model_daily_return() {
        let mut engine = engine();
        engine.derive_simple_model(&DATASHEET).unwrap();
        let income = engine
            .compute_daily_fixed_mpp_return(&adelaide(), 23.45, &TARIFF)
            .unwrap();
        assert_relative_eq!(income, 0.15463349036683541, max_relative = 1e-6);
    }

    #[test]
    fn test_set_parameters_matches_derived_model() {
        let mut derived = engine();
        derived.derive_simple_model(&DATASHEET).unwrap();

        let mut direct = engine();
        direct
            .set_model_parameters(*derived.model().unwrap().parameters())
            .unwrap();

        let step = IntegrationStep::try_from(10).unwrap();
        derived.set_integration_step(step);
        direct.set_integration_step(step);
        assert_eq!(
            derived.solar_fixed_charge(&adelaide(), 0.0, ChargeRegime::BatteryVoltage, 125.0),
            direct.solar_fixed_charge(&adelaide(), 0.0, ChargeRegime::BatteryVoltage, 125.0),
        );
    }

    #[test]
    fn test_invalid_model_keeps_previous_state() {
        let mut engine = engine();
        let err = engine
            .derive_simple_model(&Datasheet {
                max_power_voltage: 22.0,
                ..DATASHEET
            })
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::Module(ModuleError::InvalidDatasheet(_))
        ));
        assert_eq!(engine.model(), Err(EngineError::ParametersNotInitialized));
    }

    #[test]
    fn test_annual_cloud_flag() {
        let mut factors = [1.0; 12];
        factors[0] = 0.5;
        let climate =
            ClimateTable::new(factors, ClimateTable::clear_sky().days_per_month).unwrap();
        let step = IntegrationStep::try_from(10).unwrap();
        let mut engine = SolarPowerEngine::new(12.0, climate, step).unwrap();
        engine.derive_simple_model(&DATASHEET).unwrap();

        let clear = engine
            .compute_annual_fixed_mpp_return(&adelaide(), &TARIFF, 10, false)
            .unwrap();
        let cloudy = engine
            .compute_annual_fixed_mpp_return(&adelaide(), &TARIFF, 10, true)
            .unwrap();
        assert_relative_eq!(cloudy, 0.5 * clear);

        let summary = engine
            .compute_annual_return(&adelaide(), &TARIFF, [10, 11], true)
            .unwrap();
        assert_eq!(summary.daily[0].1, cloudy);
        assert_relative_eq!(summary.total, summary.monthly[0]);
    }
}
