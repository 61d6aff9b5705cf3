//! Time integration of the sun, atmosphere and module models into daily and
//! annual totals.
//!
//! Every routine samples the day from solar noon outwards every
//! [`IntegrationStep`](crate::config::IntegrationStep) and stops as soon as the
//! sun drops below the horizon or behind the module.

pub mod annual;
pub mod charge;
pub mod energy;
pub mod financial;
pub mod sweep;

pub use annual::{AnnualReturn, annual_fixed_mpp_return, annual_return};
pub use charge::{BatterySystem, ChargeRegime, solar_fixed_charge, solar_following_charge};
pub use energy::{daily_solar_energy_fixed, daily_solar_energy_following};
pub use financial::{TariffModel, daily_fixed_mpp_return};
pub use sweep::{SunSample, Tracking, sweep};

pub const WATTS_PER_KILOWATT: f64 = 1000.0;
