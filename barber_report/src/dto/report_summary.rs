use crate::dto::chart_artifact::*;
use crate::errors::report_error::*;

#[doc = "Per-kind results of one completed pipeline run"]
#[derive(Debug, Default)]
pub struct ReportSummary {
    pub artifacts: Vec<ChartArtifact>,
    pub failures: Vec<ReportFailure>,
}

impl ReportSummary {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    #[doc = "All failures of the run, one per line, for the final error report"]
    pub fn failure_report(&self) -> String {
        self.failures
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<String>>()
            .join("\n")
    }
}
