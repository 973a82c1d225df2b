use crate::common::*;

pub const APPOINTMENTS_PATH: &str = "/agendamentos/completos";
pub const DEFAULT_TIMEOUT_SEC: u64 = 30;

fn default_timeout_sec() -> u64 {
    DEFAULT_TIMEOUT_SEC
}

#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct SchedulerConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_sec")]
    pub timeout_sec: u64,
}

impl SchedulerConfig {
    #[doc = "Full URL of the completed-appointments endpoint, with exactly one slash before the path"]
    pub fn appointments_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), APPOINTMENTS_PATH)
    }
}
