use crate::common::*;

/// A chart image written to disk by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct ChartArtifact {
    pub title: String,
    pub path: PathBuf,
}
