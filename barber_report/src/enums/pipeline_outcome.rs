use crate::dto::report_summary::*;

/// Terminal state of one pipeline run.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// Nothing was fetched, so no chart was produced.
    NoData,
    Completed(ReportSummary),
}
