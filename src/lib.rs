pub mod atmosphere;
pub mod config;
pub mod day_gen;
pub mod engine;
pub mod integration;
pub mod pv_module;
pub mod site;
pub mod solar;
pub mod survey;
