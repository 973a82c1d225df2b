use crate::common::*;

use crate::dto::{aggregation_result::*, chart_artifact::*};
use crate::enums::chart_palette::*;
use crate::errors::report_error::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Draw a vertical bar chart of an aggregation and save it under the output directory
        # Arguments
        * `result` - (key, count) pairs, drawn left to right in the given order
        * `title` - Chart title
        * `x_label` - Label for X-axis
        * `y_label` - Label for Y-axis
        * `palette` - Bar colors
        * `output_filename` - File name inside the output directory; an existing file is replaced
    "]
    async fn render_bar_chart(
        &self,
        result: &AggregationResult,
        title: &str,
        x_label: &str,
        y_label: &str,
        palette: ChartPalette,
        output_filename: &str,
    ) -> Result<ChartArtifact, RenderError>;
}
