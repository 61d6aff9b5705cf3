use solarpower::config::Config;
use solarpower::day_gen::DayGenerator;
use solarpower::engine::SolarPowerEngine;
use solarpower::integration::ChargeRegime;
use solarpower::solar::SolarDay;
use solarpower::survey;
use tracing_subscriber::FmtSubscriber;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./data/config/adelaide.json".to_string());
    let config = Config::from_file(&config_path)?;
    let engine = SolarPowerEngine::from_config(&config)?;

    let site = config.site();
    let declination = config.declination();
    let module_power = config.battery().module_power;

    println!(
        "Site: latitude {:.3}, module tilt {:.1}, offset {:.1}, declination {:.2}",
        site.latitude, site.module_tilt, site.module_offset, declination
    );
    println!(
        "  Energy fixed:      {:.3} kWh/m2",
        engine.daily_solar_energy_fixed(site, declination)
    );
    println!(
        "  Energy following:  {:.3} kWh/m2",
        engine.daily_solar_energy_following(site.latitude, declination)
    );

    for regime in [
        ChargeRegime::FullPower,
        ChargeRegime::BatteryVoltage,
        ChargeRegime::MaximumPowerPoint,
    ] {
        println!(
            "  Charge {:?}: fixed {:.2} Ah, following {:.2} Ah",
            regime,
            engine.solar_fixed_charge(site, declination, regime, module_power)?,
            engine.solar_following_charge(site.latitude, declination, regime, module_power)?
        );
    }

    println!(
        "  Daily return:      {:.4}",
        engine.compute_daily_fixed_mpp_return(site, declination, config.tariff())?
    );

    let generator = DayGenerator::new(&config);
    let dates = generator.generate_date_series();
    if let (Some(first), Some(last)) = (dates.first(), dates.last()) {
        println!("Annual period: {} to {}", first, last);
    }
    let declinations: Vec<f64> = generator
        .generate_solar_days()
        .iter()
        .map(SolarDay::declination)
        .collect();
    if !declinations.is_empty() {
        println!(
            "  Declination from {:.2} to {:.2}",
            declinations.iter().fold(f64::INFINITY, |a, &b| a.min(b)),
            declinations.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b))
        );
    }

    let days = generator.generate_day_series();
    let annual = engine.compute_annual_return(
        site,
        config.tariff(),
        days,
        config.cloud_cover().is_some(),
    )?;

    println!("Annual return over {} days: {:.2}", annual.days(), annual.total);
    for (name, total) in MONTHS.iter().zip(annual.monthly) {
        println!("  {}: {:.2}", name, total);
    }

    println!("Horizontal energy by month (kWh/m2):");
    let monthly = survey::monthly_horizontal_energy(
        site.latitude,
        config.max_declination(),
        config.integration_step(),
    );
    for (name, energy) in MONTHS.iter().zip(monthly) {
        println!("  {}: {:.3}", name, energy);
    }

    println!("Noon irradiance with the sun overhead (W/m2):");
    for (hour, irradiance) in survey::noon_irradiance_profile(1.0) {
        println!("  {:.1}: {:.1}", hour, irradiance);
    }

    Ok(())
}
