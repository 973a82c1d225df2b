use crate::common::*;

/// Optional path to a TOML file holding the whole configuration.
pub const REPORT_CONFIG_PATH: &str = "REPORT_CONFIG_PATH";
pub const SCHEDULER_BASE_URL: &str = "SCHEDULER_BASE_URL";
pub const SCHEDULER_TIMEOUT_SEC: &str = "SCHEDULER_TIMEOUT_SEC";
pub const REPORT_OUTPUT_DIR: &str = "REPORT_OUTPUT_DIR";
pub const REPORT_OPEN_VIEWER: &str = "REPORT_OPEN_VIEWER";
/// Directory a relative output directory is resolved against.
pub const PIPELINE_ROOT: &str = "PIPELINE_ROOT";

#[doc = r#"
    Reads an environment variable, treating blank values as unset.

    Used as the lookup passed to `TotalConfig::from_lookup` at startup; nothing
    below `main` reads the environment directly.
"#]
pub fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[doc = "Fetches a required value, failing with the key name when it is absent"]
pub fn get_required<F>(lookup: &F, key: &str) -> anyhow::Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).ok_or_else(|| anyhow!("[ENV file read Error] '{}' must be set", key))
}

#[doc = "Parses an optional value, falling back to `default` when it is absent"]
pub fn get_parsed_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("[ENV file read Error] '{}' has an invalid value '{}': {}", key, raw, e)),
        None => Ok(default),
    }
}

#[doc = r#"
    Root of the report pipeline: `PIPELINE_ROOT` when set, otherwise the package
    directory this binary was built from, so `assets/` lands next to `config/`
    whatever the working directory is.
"#]
pub fn pipeline_root<F>(lookup: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    lookup(PIPELINE_ROOT)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_root_defaults_to_package_dir() {
        let root = pipeline_root(&|_: &str| None);

        assert!(root.is_absolute());
        assert!(root.join("Cargo.toml").exists());
    }

    #[test]
    fn pipeline_root_can_be_overridden() {
        let root = pipeline_root(&|key: &str| {
            (key == PIPELINE_ROOT).then(|| "/srv/barber".to_string())
        });

        assert_eq!(root, PathBuf::from("/srv/barber"));
    }
}
