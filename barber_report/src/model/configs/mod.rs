pub mod report_config;
pub mod scheduler_config;
pub mod total_config;
