use crate::common::*;

use crate::model::configs::{report_config::*, scheduler_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub scheduler: SchedulerConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl TotalConfig {
    #[doc = r#"
        Builds the run configuration once at startup from the process environment.

        1. When `REPORT_CONFIG_PATH` is set, the whole configuration is read from that TOML file
        2. Otherwise it is assembled from `SCHEDULER_BASE_URL`, `SCHEDULER_TIMEOUT_SEC`,
           `REPORT_OUTPUT_DIR` and `REPORT_OPEN_VIEWER`

        # Errors
        - `REPORT_CONFIG_PATH` points at a missing or malformed file
        - `SCHEDULER_BASE_URL` is not set
        - a numeric or boolean variable cannot be parsed
    "#]
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup<F>(lookup: &F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(config_path) = lookup(REPORT_CONFIG_PATH) {
            info!("Loading configuration from {}", config_path);
            return read_toml_from_file::<TotalConfig>(&config_path).with_context(|| {
                format!(
                    "[TotalConfig->from_lookup] Failed to convert the data from '{}' into the TotalConfig structure.",
                    config_path
                )
            });
        }

        let scheduler: SchedulerConfig = SchedulerConfig::new(
            get_required(lookup, SCHEDULER_BASE_URL)?,
            get_parsed_or(lookup, SCHEDULER_TIMEOUT_SEC, DEFAULT_TIMEOUT_SEC)?,
        );

        let defaults: ReportConfig = ReportConfig::default();
        let report: ReportConfig = ReportConfig {
            output_dir: lookup(REPORT_OUTPUT_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            open_viewer: get_parsed_or(lookup, REPORT_OPEN_VIEWER, defaults.open_viewer)?,
        };

        Ok(TotalConfig { scheduler, report })
    }
}
