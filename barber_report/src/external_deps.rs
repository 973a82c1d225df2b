pub use chrono::{DateTime, Local};
pub use flexi_logger::{
    Age, Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
};
pub use reqwest::{Client, StatusCode};
pub use thiserror::Error;
