use crate::common::*;

use crate::enums::report_kind::*;

/// Failures while pulling appointments from the scheduling service.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure: DNS, refused connection, timeout, TLS.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("scheduling service returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    /// The body is not a JSON array of objects.
    #[error("response from {url} is not a JSON array of objects: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A record does not carry the field an aggregation groups by.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("cannot aggregate '{field}' over an empty table")]
    EmptyTable { field: String },

    #[error("no record carries the field '{field}'")]
    MissingColumn { field: String },

    /// Zero-based indices of every record lacking a usable value.
    #[error("{} record(s) have no value for '{field}': rows {rows:?}", rows.len())]
    MissingField { field: String, rows: Vec<usize> },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("chart '{chart}' has no data to draw")]
    EmptyResult { chart: String },

    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to draw chart '{chart}' into {}: {message}", path.display())]
    Draw {
        chart: String,
        path: PathBuf,
        message: String,
    },

    #[error("drawing task for chart '{chart}' did not finish: {message}")]
    Join { chart: String, message: String },
}

/// Reason a single report kind produced no artifact.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Debug, new)]
pub struct ReportFailure {
    pub kind: ReportKind,
    pub error: ReportError,
}

impl fmt::Display for ReportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.error)
    }
}
