pub mod report_error;
