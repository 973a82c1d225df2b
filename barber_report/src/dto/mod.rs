pub mod aggregation_result;
pub mod appointment_record;
pub mod chart_artifact;
pub mod report_summary;
