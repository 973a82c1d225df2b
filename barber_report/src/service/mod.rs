pub mod aggregation_service_impl;
pub mod appointment_service_impl;
pub mod chart_service_impl;
pub mod viewer_service_impl;
