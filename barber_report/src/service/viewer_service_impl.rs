use crate::common::*;

use crate::traits::service_traits::viewer_service::*;

use tokio::process::Command;

#[derive(Debug, Clone, new)]
pub struct SystemViewerServiceImpl {
    enabled: bool,
}

impl SystemViewerServiceImpl {
    fn viewer_command(path: &Path) -> Command {
        let mut command: Command = if cfg!(target_os = "windows") {
            let mut command: Command = Command::new("cmd");
            command.args(["/C", "start", ""]);
            command
        } else if cfg!(target_os = "macos") {
            Command::new("open")
        } else {
            Command::new("xdg-open")
        };

        command
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        command
    }
}

#[async_trait]
impl ViewerService for SystemViewerServiceImpl {
    async fn open_artifact(&self, path: &Path) -> anyhow::Result<()> {
        if !self.enabled {
            info!("Viewer disabled, leaving {} closed", path.display());
            return Ok(());
        }

        /* not awaited: the viewer outlives the report */
        Self::viewer_command(path).spawn().with_context(|| {
            format!(
                "[SystemViewerServiceImpl->open_artifact] failed to launch viewer for {}",
                path.display()
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_viewer_is_a_no_op() {
        let viewer = SystemViewerServiceImpl::new(false);
        assert!(viewer
            .open_artifact(Path::new("/nonexistent/chart.jpg"))
            .await
            .is_ok());
    }

    #[test]
    fn command_targets_the_artifact() {
        let command = SystemViewerServiceImpl::viewer_command(Path::new("/tmp/chart.jpg"));
        let args: Vec<String> = command
            .as_std()
            .get_args()
            .map(|a| a.to_string_lossy().to_string())
            .collect();

        assert_eq!(args.last().map(String::as_str), Some("/tmp/chart.jpg"));
    }
}
