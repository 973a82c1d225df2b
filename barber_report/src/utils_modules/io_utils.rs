use crate::common::*;

#[doc = r#"
    Reads a TOML file and deserializes it into `T`.

    1. Reads the file at `file_path` into a string
    2. Parses it with `toml::from_str()` into `T`

    # Errors
    - the file does not exist or cannot be read
    - the content is not valid TOML or does not match `T`
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)
        .with_context(|| format!("[read_toml_from_file()] cannot read '{}'", file_path))?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = r#"
    Makes sure `dir` exists, creating it and any missing parents.

    Safe to call repeatedly for the same directory.

    # Returns
    * `Ok(true)` when the directory had to be created, `Ok(false)` when it was already there
"#]
pub async fn ensure_output_dir(dir: &Path) -> std::io::Result<bool> {
    if tokio::fs::metadata(dir).await.is_ok_and(|m| m.is_dir()) {
        return Ok(false);
    }

    tokio::fs::create_dir_all(dir).await?;
    Ok(true)
}
