use crate::common::*;

pub const DEFAULT_OUTPUT_DIR: &str = "assets";

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_open_viewer() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ReportConfig {
    /// Directory the chart images are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Whether each chart is handed to the system image viewer after it is saved.
    #[serde(default = "default_open_viewer")]
    pub open_viewer: bool,
}

impl ReportConfig {
    #[doc = "Output directory with a relative path resolved against the pipeline `root`"]
    pub fn output_dir_under(&self, root: &Path) -> PathBuf {
        if self.output_dir.is_absolute() {
            self.output_dir.clone()
        } else {
            root.join(&self.output_dir)
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            open_viewer: default_open_viewer(),
        }
    }
}
