use crate::common::*;

#[doc = "Current local time, formatted for log lines"]
pub fn get_current_local_str() -> String {
    let now: DateTime<Local> = Local::now();
    now.format("%Y-%m-%dT%H:%M:%S").to_string()
}
