pub mod aggregation_service;
pub mod appointment_service;
pub mod chart_service;
pub mod viewer_service;
