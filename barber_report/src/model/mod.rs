pub mod appointment;
pub mod configs;
