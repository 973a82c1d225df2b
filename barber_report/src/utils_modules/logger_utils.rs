use crate::common::*;

const LOG_DIRECTORY: &str = "logs";
const LOG_BASENAME: &str = "barber_report";
const LOG_FILES_KEPT: usize = 10;

#[doc = r#"
    Installs the global `log` backend.

    The level comes from `RUST_LOG` (default `info`). Records go to a daily rotated file
    under `logs/` and everything at info or above is duplicated to stdout, which is where
    the operator watches the run.

    The returned handle must stay alive for the whole process, otherwise file output stops.
"#]
pub fn set_global_logger() -> LoggerHandle {
    Logger::try_with_env_or_str("info")
        .unwrap_or_else(|e| panic!("[set_global_logger] invalid log specification: {:?}", e))
        .log_to_file(
            FileSpec::default()
                .directory(LOG_DIRECTORY)
                .basename(LOG_BASENAME),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(LOG_FILES_KEPT),
        )
        .format_for_files(flexi_logger::detailed_format)
        .format_for_stdout(flexi_logger::default_format)
        .duplicate_to_stdout(Duplicate::Info)
        .start()
        .unwrap_or_else(|e| panic!("[set_global_logger] failed to start logger: {:?}", e))
}
