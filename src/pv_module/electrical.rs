use super::error::ModuleError;
use super::parameters::{Datasheet, ModuleParameters};

/// Refinement passes of the maximum power point search. Each pass divides the
/// voltage step by ten.
const MPP_PASSES: usize = 4;

/// Single-diode model of a photovoltaic module.
///
/// Irradiance is given as a percentage of the standard irradiance the module
/// is rated at (see [`crate::atmosphere::SOLAR_STANDARD`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleModel {
    parameters: ModuleParameters,
}

impl ModuleModel {
    pub fn new(parameters: ModuleParameters) -> Result<Self, ModuleError> {
        parameters.validate()?;
        Ok(Self { parameters })
    }

    pub fn from_datasheet(datasheet: &Datasheet) -> Result<Self, ModuleError> {
        Ok(Self {
            parameters: datasheet.fit()?,
        })
    }

    pub fn parameters(&self) -> &ModuleParameters {
        &self.parameters
    }

    /// Photocurrent term, relative to the dark current, plus one.
    fn photo_ratio(&self, irradiance_percent: f64) -> f64 {
        self.parameters.short_circuit_current * irradiance_percent * 0.01
            / self.parameters.dark_current
            + 1.0
    }

    fn diode_power(&self, ratio: f64, voltage: f64) -> f64 {
        voltage
            * self.parameters.dark_current
            * (ratio - (voltage / self.parameters.diode_voltage).exp())
    }

    /// Current (A) delivered by one module held at `voltage`. Zero beyond the
    /// open circuit voltage, the diode does not conduct in reverse.
    pub fn current(&self, irradiance_percent: f64, voltage: f64) -> f64 {
        let ratio = self.photo_ratio(irradiance_percent);
        let current = self.parameters.dark_current
            * (ratio - (voltage / self.parameters.diode_voltage).exp());
        current.max(0.0)
    }

    pub fn open_circuit_voltage(&self, irradiance_percent: f64) -> f64 {
        self.parameters.diode_voltage * self.photo_ratio(irradiance_percent).ln()
    }

    /// Power (W) delivered through a maximum power point tracking regulator by
    /// all modules.
    ///
    /// Hill climbing down from the open circuit voltage in steps of a tenth of
    /// it. When a step no longer raises the power, the search restarts from one
    /// step above the best point with a step ten times finer.
    ///
    /// Restarting above the best point keeps the peak inside the next, finer
    /// pass. Undoing only the last step can leave the peak behind: such a
    /// search settles about 0.35% low at full irradiance (124.90 W instead of
    /// 125.34 W for a 125 W module), so results differ from it by that much.
    pub fn optimal_power(&self, irradiance_percent: f64) -> f64 {
        if irradiance_percent == 0.0 {
            return 0.0;
        }

        let ratio = self.photo_ratio(irradiance_percent);
        let open_circuit = self.parameters.diode_voltage * ratio.ln();
        let mut increment = open_circuit / 10.0;
        let mut voltage = open_circuit;
        let mut best = 0.0;

        for pass in 0..MPP_PASSES {
            loop {
                let trial = voltage - increment;
                let power = self.diode_power(ratio, trial);
                if power <= best {
                    break;
                }
                voltage = trial;
                best = power;
            }
            if pass + 1 < MPP_PASSES {
                voltage = (voltage + increment).min(open_circuit);
                best = self.diode_power(ratio, voltage);
            }
            increment /= 10.0;
        }

        best * self.parameters.modules as f64 * self.parameters.efficiency
    }

    /// Current of one module sampled from 0 V to `max_voltage`.
    pub fn iv_curve(
        &self,
        irradiance_percent: f64,
        max_voltage: f64,
        voltage_step: f64,
    ) -> Vec<(f64, f64)> {
        if voltage_step <= 0.0 {
            return Vec::new();
        }
        let samples = (max_voltage / voltage_step).floor().max(0.0) as usize;
        (0..=samples)
            .map(|i| {
                let voltage = i as f64 * voltage_step;
                (voltage, self.current(irradiance_percent, voltage))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model() -> ModuleModel {
        ModuleModel::from_datasheet(&Datasheet {
            modules: 1,
            short_circuit_current: 7.8,
            open_circuit_voltage: 21.8,
            max_power_voltage: 17.3,
            max_power_current: 7.23,
            efficiency: 1.0,
            series_cells: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_current_is_non_negative() {
        let model = model();
        for irradiance in [0.0, 0.5, 10.0, 50.0, 100.0, 120.0] {
            for step in 0..300 {
                let voltage = step as f64 * 0.1;
                let current = model.current(irradiance, voltage);
                assert!(current >= 0.0, "{irradiance}% at {voltage} V: {current}");
            }
        }
    }

    #[test]
    fn test_current_cut_off_beyond_open_circuit() {
        let model = model();
        let open_circuit = model.open_circuit_voltage(100.0);
        assert_eq!(model.current(100.0, open_circuit + 0.01), 0.0);
        assert_eq!(model.current(100.0, 40.0), 0.0);
        assert_eq!(model.current(0.0, 1.0), 0.0);
        assert!(model.current(100.0, open_circuit - 0.5) > 0.0);
    }

    #[test]
    fn test_short_circuit_current_scales_with_irradiance() {
        let model = model();
        assert_relative_eq!(model.current(100.0, 0.0), 7.8, max_relative = 1e-9);
        assert_relative_eq!(model.current(50.0, 0.0), 3.9, max_relative = 1e-9);
    }

    #[test]
    fn test_optimal_power_zero_irradiance() {
        assert_eq!(model().optimal_power(0.0), 0.0);
    }

    #[test]
    fn test_optimal_power_dominates_operating_points() {
        let model = model();
        for irradiance in [100.0, 50.0, 10.0, 1.0] {
            let mpp = model.optimal_power(irradiance);
            for step in 0..230 {
                let voltage = step as f64 * 0.1;
                let power = model.current(irradiance, voltage) * voltage;
                assert!(
                    mpp > power,
                    "{irradiance}%: {power} W at {voltage} V exceeds MPP {mpp} W"
                );
            }
        }
    }

    #[test]
    fn test_optimal_power_matches_fine_scan() {
        let model = model();
        for irradiance in [100.0, 50.0, 10.0, 1.0, 0.1] {
            let mpp = model.optimal_power(irradiance);
            let scan = (0..23_000)
                .map(|mv| {
                    let voltage = mv as f64 * 0.001;
                    model.current(irradiance, voltage) * voltage
                })
                .fold(0.0, f64::max);
            assert_relative_eq!(mpp, scan, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_rated_power_near_datasheet() {
        let mpp = model().optimal_power(100.0);
        assert!((mpp - 17.3 * 7.23).abs() < 1.0, "{mpp}");
    }

    #[test]
    fn test_full_sun_peak_regression() {
        let mpp = model().optimal_power(100.0);
        assert_relative_eq!(mpp, 125.340063704848, max_relative = 1e-8);
        // Stopping one step short of the peak gives 124.90 W
        assert!(mpp > 125.3, "{mpp}");
    }

    #[test]
    fn test_optimal_power_scales_with_modules_and_efficiency() {
        let single = model();
        let mut parameters = *single.parameters();
        parameters.modules = 3;
        parameters.efficiency = 0.9;
        let array = ModuleModel::new(parameters).unwrap();
        assert_relative_eq!(
            array.optimal_power(80.0),
            single.optimal_power(80.0) * 2.7,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_iv_curve() {
        let curve = model().iv_curve(100.0, 23.0, 0.5);
        assert_eq!(curve.len(), 47);
        assert_eq!(curve[0].0, 0.0);
        assert!(curve.windows(2).all(|w| w[1].1 <= w[0].1));
        assert_eq!(curve.last().unwrap().1, 0.0);
        assert!(model().iv_curve(100.0, 10.0, 0.0).is_empty());
    }
}
