use crate::common::*;
use crate::dto::{aggregation_result::*, chart_artifact::*};
use crate::enums::chart_palette::*;
use crate::errors::report_error::*;
use crate::traits::service_traits::{chart_service::*, viewer_service::*};
use crate::utils_modules::io_utils::*;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const CHART_WIDTH: u32 = 1000;
const CHART_HEIGHT: u32 = 600;

/// Fraction of a category slot left empty on each side of its bar.
const BAR_PADDING: f64 = 0.15;
/// Pixels between the x-axis and the top of a category label.
const LABEL_GAP: i32 = 8;
const MIN_LABEL_FONT: f64 = 8.0;
const MAX_LABEL_FONT: f64 = 14.0;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl<V: ViewerService> {
    output_dir: PathBuf,
    viewer_service: V,
}

/// Everything the drawing code needs, owned so it can move into `spawn_blocking`.
#[derive(Debug, Clone)]
struct BarChartData {
    title: String,
    x_desc: String,
    y_desc: String,
    labels: Vec<String>,
    counts: Vec<u64>,
    colors: Vec<RGBColor>,
    y_max: u64,
    x_label_area: u32,
}

/// Pixel positions of the drawn chart, in backend coordinates.
#[derive(Debug, Clone)]
struct BarChartLayout {
    axis_y: i32,
    label_anchors: Vec<(i32, i32)>,
}

#[doc = r#"
    Style of a category label: rotated a quarter turn and anchored at its leading edge,
    so the text starts at the anchor and runs downward, centred on the bar.
"#]
fn category_label_style<'a>(font_size: f64) -> TextStyle<'a> {
    TextStyle::from(("sans-serif", font_size))
        .transform(FontTransform::Rotate90)
        .pos(Pos::new(HPos::Left, VPos::Center))
}

#[doc = r#"
    Draws a vertical bar chart on `root` and presents it.

    1. One slot per category on a `0..n` axis, the bar filling the middle of its slot
    2. The mesh prints no x labels. Each category label is a `Text` hanging below the
       axis under its bar, since mesh labels are always centre-anchored.
    3. The label font shrinks with the slot width so dense charts stay readable
"#]
fn draw_bar_chart<DB>(
    root: &DrawingArea<DB, Shift>,
    data: &BarChartData,
) -> Result<BarChartLayout, anyhow::Error>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let bar_cnt: usize = data.labels.len();
    let centers: Vec<f64> = (0..bar_cnt).map(|i| i as f64 + 0.5).collect();

    let mut chart = ChartBuilder::on(root)
        .caption(&data.title, ("sans-serif", 30).into_font())
        .margin(20)
        .x_label_area_size(data.x_label_area)
        .y_label_area_size(80)
        .build_cartesian_2d(
            (0f64..bar_cnt as f64).with_key_points(centers),
            0u64..data.y_max,
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(data.x_desc.as_str())
        .y_desc(data.y_desc.as_str())
        .y_labels(10)
        .axis_desc_style(("sans-serif", 18))
        .x_label_formatter(&|_: &f64| String::new())
        .y_label_formatter(&|y: &u64| y.to_string())
        .draw()?;

    chart.draw_series(data.counts.iter().enumerate().map(|(i, count)| {
        let color: RGBColor = data.colors.get(i).copied().unwrap_or(BLACK);
        Rectangle::new(
            [
                (i as f64 + BAR_PADDING, 0u64),
                (i as f64 + 1.0 - BAR_PADDING, *count),
            ],
            color.filled(),
        )
    }))?;

    let (origin_x, axis_y) = chart.backend_coord(&(0.0, 0u64));
    let (next_x, _) = chart.backend_coord(&(1.0, 0u64));
    let font_size: f64 = ((next_x - origin_x) as f64 * 0.8).clamp(MIN_LABEL_FONT, MAX_LABEL_FONT);
    let label_style: TextStyle = category_label_style(font_size);

    let mut label_anchors: Vec<(i32, i32)> = Vec::with_capacity(bar_cnt);

    for (i, label) in data.labels.iter().enumerate() {
        let (x, _) = chart.backend_coord(&(i as f64 + 0.5, 0u64));
        let anchor: (i32, i32) = (x, axis_y + LABEL_GAP);

        root.draw(&Text::new(label.as_str(), anchor, label_style.clone()))?;
        label_anchors.push(anchor);
    }

    root.present()?;

    Ok(BarChartLayout {
        axis_y,
        label_anchors,
    })
}

impl<V: ViewerService> ChartServiceImpl<V> {
    #[doc = "Top of the Y-axis: the largest count plus 10% headroom, at least one unit"]
    fn calculate_y_max(&self, max_count: u64) -> u64 {
        let padding: u64 = ((max_count as f64 * 0.1).ceil() as u64).max(1);
        max_count + padding
    }

    #[doc = "Height reserved under the plot for the rotated category labels and the axis description"]
    fn x_label_area_size(&self, labels: &[String]) -> u32 {
        let longest: usize = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        (longest as u32 * 8 + 50).clamp(70, 300)
    }

    pub fn output_path(&self, output_filename: &str) -> PathBuf {
        self.output_dir.join(output_filename)
    }
}

#[async_trait]
impl<V: ViewerService> ChartService for ChartServiceImpl<V> {
    async fn render_bar_chart(
        &self,
        result: &AggregationResult,
        title: &str,
        x_label: &str,
        y_label: &str,
        palette: ChartPalette,
        output_filename: &str,
    ) -> Result<ChartArtifact, RenderError> {
        if result.is_empty() {
            return Err(RenderError::EmptyResult {
                chart: title.to_string(),
            });
        }

        /* Create the output directory if it doesn't exist */
        info!("Checking output directory: {}", self.output_dir.display());
        let created: bool =
            ensure_output_dir(&self.output_dir)
                .await
                .map_err(|source| RenderError::CreateDir {
                    path: self.output_dir.clone(),
                    source,
                })?;

        if created {
            info!("Created output directory: {}", self.output_dir.display());
        }

        let output_path: PathBuf = self.output_path(output_filename);
        info!("Saving chart to: {}", output_path.display());

        let labels: Vec<String> = result.keys();
        let counts: Vec<u64> = result.counts();
        let colors: Vec<RGBColor> = (0..counts.len())
            .map(|i| palette.color_at(i, counts.len()))
            .collect();

        let data: BarChartData = BarChartData {
            title: title.to_string(),
            x_desc: x_label.to_string(),
            y_desc: y_label.to_string(),
            x_label_area: self.x_label_area_size(&labels),
            y_max: self.calculate_y_max(result.max_count()),
            labels,
            counts,
            colors,
        };

        let draw_path: PathBuf = output_path.clone();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                let root = BitMapBackend::new(&draw_path, (CHART_WIDTH, CHART_HEIGHT))
                    .into_drawing_area();
                let layout: BarChartLayout = draw_bar_chart(&root, &data)?;
                info!(
                    "Drew {} bar(s), labels below the axis at y={}",
                    layout.label_anchors.len(),
                    layout.axis_y
                );
                Ok(())
            });

        let drawing_result: Result<(), anyhow::Error> =
            handle.await.map_err(|e| RenderError::Join {
                chart: title.to_string(),
                message: e.to_string(),
            })?;

        drawing_result.map_err(|e| RenderError::Draw {
            chart: title.to_string(),
            path: output_path.clone(),
            message: format!("{:#}", e),
        })?;

        info!("Bar chart generated successfully: {:?}", output_path);

        /* The chart is on disk; the viewer is advisory only */
        if let Err(e) = self.viewer_service.open_artifact(&output_path).await {
            warn!(
                "[ChartServiceImpl->render_bar_chart] Could not open {}: {:?}",
                output_path.display(),
                e
            );
        }

        Ok(ChartArtifact::new(title.to_string(), output_path))
    }
}
